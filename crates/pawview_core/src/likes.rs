use crate::{History, HistoryError};

impl History {
    /// Adds one like to the item at `index` and returns its new count.
    pub fn increment_like(&mut self, index: usize) -> Result<u32, HistoryError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(HistoryError::OutOfRange { index, len })?;
        item.likes += 1;
        self.total_likes += 1;
        Ok(item.likes)
    }

    /// Sum of likes over every item still in the history.
    pub fn total_likes(&self) -> u64 {
        debug_assert_eq!(self.total_likes, self.recount_likes());
        self.total_likes
    }

    pub(crate) fn recount_likes(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.likes)).sum()
    }
}
