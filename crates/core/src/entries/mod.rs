//! Journal entries module - domain models, services, and traits.

mod entries_model;
mod entries_service;
mod entries_traits;

pub use entries_model::{Entry, EntrySummary, EntryWithGoals, LinkedGoal, NewEntry};
pub use entries_service::EntryService;
pub use entries_traits::{EntryRepositoryTrait, EntryServiceTrait};
