//! SQLite storage implementation for journal entries and their goal links.

mod model;
mod repository;

pub use model::{EntryGoalDB, JournalDB, NewJournalDB};
pub use repository::EntryRepository;
