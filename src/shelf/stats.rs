use crate::model::{Book, ReadingStatus};
use serde::Serialize;

/// Per-status book counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub want_to_read: usize,
    pub reading: usize,
    pub read: usize,
}

impl Stats {
    pub fn count_for(&self, status: ReadingStatus) -> usize {
        match status {
            ReadingStatus::WantToRead => self.want_to_read,
            ReadingStatus::Reading => self.reading,
            ReadingStatus::Read => self.read,
        }
    }
}

/// Recounts everything from scratch. Libraries are small, so there is no
/// incremental bookkeeping to get out of sync.
pub fn compute_stats(books: &[Book]) -> Stats {
    let count = |status: ReadingStatus| books.iter().filter(|b| b.status == status).count();
    Stats {
        total: books.len(),
        want_to_read: count(ReadingStatus::WantToRead),
        reading: count(ReadingStatus::Reading),
        read: count(ReadingStatus::Read),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookDraft;

    fn book(status: ReadingStatus) -> Book {
        Book::from_draft(BookDraft::new("T", "A").with_status(status))
    }

    #[test]
    fn empty_collection_has_zero_counts() {
        assert_eq!(compute_stats(&[]), Stats::default());
    }

    #[test]
    fn counts_each_status() {
        let books = vec![
            book(ReadingStatus::Read),
            book(ReadingStatus::Read),
            book(ReadingStatus::Reading),
            book(ReadingStatus::WantToRead),
        ];
        let stats = compute_stats(&books);
        assert_eq!(
            stats,
            Stats {
                total: 4,
                want_to_read: 1,
                reading: 1,
                read: 2
            }
        );
        assert_eq!(stats.count_for(ReadingStatus::Read), 2);
    }
}
