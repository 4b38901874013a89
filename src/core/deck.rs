use crate::models::Profile;

/// Ordered profiles plus the review cursor
///
/// Invariant: `0 <= cursor <= len`. A cursor equal to the length means the
/// deck is exhausted and there is no current profile.
#[derive(Debug, Clone)]
pub struct Deck {
    profiles: Vec<Profile>,
    cursor: usize,
}

impl Deck {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles, cursor: 0 }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Profile under the cursor, `None` once exhausted
    pub fn current(&self) -> Option<&Profile> {
        self.profiles.get(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.profiles.len()
    }

    /// Profile at a given review position
    pub fn get(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    /// Move the cursor forward by one, saturating at the end of the deck
    pub fn advance(&mut self) {
        if self.cursor < self.profiles.len() {
            self.cursor += 1;
        }
    }

    /// Put the cursor back at a previously recorded position
    pub fn restore(&mut self, index: usize) {
        self.cursor = index.min(self.profiles.len());
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}
