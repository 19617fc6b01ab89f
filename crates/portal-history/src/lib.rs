//! Conversion history and the session state shared by the front ends.
//!
//! A [`session::Session`] owns the current inputs, the active direction and a
//! [`history::HistoryStore`]. The store mirrors every mutation into a
//! [`storage::Storage`] backend and recovers from unreadable data by starting
//! empty.

pub mod entries;
pub mod error;
pub mod history;
pub mod session;
pub mod storage;

pub use entries::ConversionEntry;
pub use error::StorageError;
pub use history::{load_entry, History, HistoryStore, MAX_HISTORY_ENTRIES};
pub use session::Session;
pub use storage::{FileStorage, MemoryStorage, Storage};
