use super::DbPool;
use crate::errors::{IntoCore, StorageError};
use diesel::SqliteConnection;
use journal_core::errors::{DatabaseError, Error, Result};
use log::{debug, warn};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A job takes the writer's connection and returns a core Result, boxed so
// jobs with different return types share one channel.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

fn writer_gone() -> Error {
    Error::Database(DatabaseError::Internal(
        "database writer is no longer running".to_string(),
    ))
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// The job runs inside an immediate transaction: if it returns an error,
    /// every statement it issued is rolled back.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_gone())?;

        let boxed = ret_rx.await.map_err(|_| writer_gone())??;
        boxed.downcast::<T>().map(|v| *v).map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "unexpected result type from database writer".to_string(),
            ))
        })
    }
}

/// Spawns a background Tokio task that acts as the single writer to the database.
///
/// The actor takes one connection from the pool up front and keeps it for its
/// whole lifetime, processing jobs in arrival order. It stops once every
/// `WriteHandle` has been dropped.
pub fn spawn_writer(pool: DbPool) -> Result<WriteHandle> {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);
    let mut conn = pool.get().into_core()?;

    tokio::spawn(async move {
        debug!("Database writer started");
        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            // The requester may have gone away (e.g. request timed out).
            if reply_tx.send(result).is_err() {
                warn!("Database writer result dropped: requester no longer waiting");
            }
        }
        debug!("Database writer stopped");
    });

    Ok(WriteHandle { tx })
}
