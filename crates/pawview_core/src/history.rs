use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub url: String,
    pub provider: String,
    pub likes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("already at the first item")]
    AtStart,
    #[error("already at the last item")]
    AtEnd,
    #[error("index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Linear browsing history with a movable cursor.
///
/// Recording a new item while the cursor is behind the end discards every
/// entry after the cursor first. Discarded entries are never restored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct History {
    pub(crate) items: Vec<HistoryItem>,
    pub(crate) cursor: Option<usize>,
    pub(crate) total_likes: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fresh item (zero likes) and moves the cursor onto it.
    /// Returns the new cursor.
    pub fn record_new_item(&mut self, url: impl Into<String>, provider: impl Into<String>) -> usize {
        if let Some(cursor) = self.cursor {
            self.truncate_after(cursor);
        }
        self.items.push(HistoryItem {
            url: url.into(),
            provider: provider.into(),
            likes: 0,
        });
        let cursor = self.items.len() - 1;
        self.cursor = Some(cursor);
        cursor
    }

    pub fn step_back(&mut self) -> Result<usize, HistoryError> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                Ok(cursor - 1)
            }
            _ => Err(HistoryError::AtStart),
        }
    }

    pub fn step_forward(&mut self) -> Result<usize, HistoryError> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.items.len() => {
                self.cursor = Some(cursor + 1);
                Ok(cursor + 1)
            }
            _ => Err(HistoryError::AtEnd),
        }
    }

    pub fn item_at(&self, index: usize) -> Result<&HistoryItem, HistoryError> {
        self.items.get(index).ok_or(HistoryError::OutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn current(&self) -> Option<&HistoryItem> {
        self.cursor.and_then(|cursor| self.items.get(cursor))
    }

    /// `None` while the history is empty.
    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor.is_none_or(|cursor| cursor == 0)
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.items.len())
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    fn truncate_after(&mut self, cursor: usize) {
        if cursor + 1 >= self.items.len() {
            return;
        }
        let removed: u64 = self.items[cursor + 1..]
            .iter()
            .map(|item| u64::from(item.likes))
            .sum();
        self.items.truncate(cursor + 1);
        self.total_likes -= removed;
    }
}
