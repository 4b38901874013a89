use crate::models::{Decision, ProfileId};

/// Selected and rejected profile ids, in decision order
///
/// An id lives in at most one of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifications {
    selected: Vec<ProfileId>,
    rejected: Vec<ProfileId>,
}

impl Classifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[ProfileId] {
        &self.selected
    }

    pub fn rejected(&self) -> &[ProfileId] {
        &self.rejected
    }

    pub fn is_selected(&self, id: ProfileId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_rejected(&self, id: ProfileId) -> bool {
        self.rejected.contains(&id)
    }

    /// Decision currently recorded for a profile
    pub fn decision_for(&self, id: ProfileId) -> Option<Decision> {
        if self.is_selected(id) {
            Some(Decision::Select)
        } else if self.is_rejected(id) {
            Some(Decision::Reject)
        } else {
            None
        }
    }

    /// Record a decision, moving the id out of the opposite list if present
    pub fn record(&mut self, id: ProfileId, decision: Decision) {
        let (target, other) = self.lists_mut(decision);
        other.retain(|&existing| existing != id);
        if !target.contains(&id) {
            target.push(id);
        }
    }

    /// Remove an id from the list it was recorded under
    pub fn revoke(&mut self, id: ProfileId, decision: Decision) -> bool {
        let (target, _) = self.lists_mut(decision);
        let before = target.len();
        target.retain(|&existing| existing != id);
        target.len() != before
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.rejected.clear();
    }

    fn lists_mut(&mut self, decision: Decision) -> (&mut Vec<ProfileId>, &mut Vec<ProfileId>) {
        match decision {
            Decision::Select => (&mut self.selected, &mut self.rejected),
            Decision::Reject => (&mut self.rejected, &mut self.selected),
        }
    }
}
