use crate::models::{Decision, HistoryEntry};

/// Stack of committed decisions that have not been undone
///
/// Also carries the re-entrancy guard: while an undo is in flight no
/// further entry can be popped.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    entries: Vec<HistoryEntry>,
    in_flight: bool,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize, action: Decision) {
        self.entries.push(HistoryEntry { index, action });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_undoing(&self) -> bool {
        self.in_flight
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && !self.in_flight
    }

    /// Pop the most recent entry and raise the in-flight guard
    pub fn begin_undo(&mut self) -> Option<HistoryEntry> {
        if self.in_flight {
            return None;
        }
        let entry = self.entries.pop()?;
        self.in_flight = true;
        Some(entry)
    }

    pub fn finish_undo(&mut self) {
        self.in_flight = false;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.in_flight = false;
    }
}
