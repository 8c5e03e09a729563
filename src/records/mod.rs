//! Leaderboard records and their persistence.

pub mod store;
pub mod types;

pub use store::{JsonRecordStore, MemoryRecordStore, RecordStore};
pub use types::{Leaderboard, Record};

use std::io;

/// Load the board from `store`, insert `record` if it qualifies and save.
///
/// Returns the record's 1-based rank, or `None` if it did not make the board
/// (in which case nothing is written).
pub fn add_record<S: RecordStore + ?Sized>(
    store: &mut S,
    record: Record,
    capacity: usize,
) -> io::Result<Option<usize>> {
    let mut board = Leaderboard::from_records(store.load_records(), capacity);
    let Some(rank) = board.insert(record) else {
        return Ok(None);
    };
    store.save_records(board.entries())?;
    Ok(Some(rank))
}
