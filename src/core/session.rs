use crate::core::{
    classification::Classifications,
    deck::Deck,
    gesture::{GestureOutcome, GestureTracker},
    history::UndoStack,
    messaging::Messenger,
};
use crate::models::{
    Acknowledgment, Animation, Decision, GestureView, MessagingView, Profile, ReviewSummary,
    SessionSnapshot,
};
use uuid::Uuid;

/// Identifies one scheduled transition so a late timer cannot complete a
/// newer one
pub type TransitionToken = Uuid;

/// Cursor mutation deferred until the card animation has played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Commit finished: move to the next profile
    Advance,
    /// Undo finished: return to the profile the entry was recorded at
    Rewind { index: usize },
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    token: TransitionToken,
    transition: Transition,
}

/// One review pass over a deck
///
/// Owns the deck, the classification sets, the undo stack, the gesture
/// tracker and the messaging side-channel. Every command is total: calls
/// that make no sense in the current state are ignored and report so
/// through their return value.
///
/// Commit and undo are two-phase. The command applies the classification
/// change right away and schedules a [`Transition`]; the cursor only moves
/// when [`ReviewSession::complete_transition`] is called with the returned
/// token. Only one transition can be pending at a time.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    deck: Deck,
    classifications: Classifications,
    history: UndoStack,
    gesture: GestureTracker,
    animation: Animation,
    pending: Option<Pending>,
    messenger: Messenger,
}

impl ReviewSession {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            deck: Deck::new(profiles),
            classifications: Classifications::new(),
            history: UndoStack::new(),
            gesture: GestureTracker::new(),
            animation: Animation::None,
            pending: None,
            messenger: Messenger::new(),
        }
    }

    /// Pointer or touch down on the current card
    pub fn start_gesture(&mut self, x: f64) -> bool {
        if self.deck.current().is_none() || self.pending.is_some() {
            return false;
        }
        self.gesture.start(x);
        true
    }

    pub fn move_gesture(&mut self, x: f64) -> bool {
        self.gesture.move_to(x)
    }

    /// Pointer or touch up (or leaving the card)
    ///
    /// Returns the transition token when the release committed a decision.
    pub fn end_gesture(&mut self) -> Option<TransitionToken> {
        match self.gesture.release() {
            GestureOutcome::Commit(decision) => {
                let token = self.commit(decision);
                if token.is_none() {
                    self.gesture.reset();
                }
                token
            }
            GestureOutcome::Cancelled => {
                tracing::debug!("Gesture released inside threshold, snapping back");
                None
            }
            GestureOutcome::Ignored => None,
        }
    }

    pub fn select(&mut self) -> Option<TransitionToken> {
        self.commit(Decision::Select)
    }

    pub fn reject(&mut self) -> Option<TransitionToken> {
        self.commit(Decision::Reject)
    }

    /// Classify the current profile and schedule the advance
    pub fn commit(&mut self, decision: Decision) -> Option<TransitionToken> {
        if self.pending.is_some() {
            tracing::debug!("Ignoring {:?}: transition in progress", decision);
            return None;
        }
        let id = self.deck.current()?.id;
        let index = self.deck.cursor();

        self.classifications.record(id, decision);
        self.history.push(index, decision);
        self.animation = decision.commit_animation();

        tracing::debug!("Committed {:?} for profile {} at position {}", decision, id, index);
        Some(self.schedule(Transition::Advance))
    }

    /// Revert the most recent decision and schedule the rewind
    ///
    /// An undo issued while a commit is still animating replaces that
    /// commit's advance, so the cursor never moves forward for a decision
    /// that has already been reverted.
    pub fn undo(&mut self) -> Option<TransitionToken> {
        let entry = self.history.begin_undo()?;
        if let Some(pending) = self.pending.take() {
            tracing::debug!("Undo supersedes pending {:?}", pending.transition);
        }

        if let Some(profile) = self.deck.get(entry.index) {
            self.classifications.revoke(profile.id, entry.action);
            tracing::debug!("Undoing {:?} for profile {}", entry.action, profile.id);
        }
        self.animation = entry.action.undo_animation();

        Some(self.schedule(Transition::Rewind { index: entry.index }))
    }

    fn schedule(&mut self, transition: Transition) -> TransitionToken {
        let token = Uuid::new_v4();
        self.pending = Some(Pending { token, transition });
        token
    }

    /// Apply the deferred cursor change for `token`
    ///
    /// A token that is no longer pending (already completed, or dropped by a
    /// reset) is ignored.
    pub fn complete_transition(&mut self, token: TransitionToken) -> bool {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                self.apply(pending.transition);
                true
            }
            _ => false,
        }
    }

    /// Complete whatever transition is pending, if any
    pub fn settle(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                self.apply(pending.transition);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, transition: Transition) {
        let before = self.deck.cursor();
        match transition {
            Transition::Advance => self.deck.advance(),
            Transition::Rewind { index } => {
                self.deck.restore(index);
                self.history.finish_undo();
            }
        }
        self.animation = Animation::None;
        self.gesture.reset();

        // The open surface belongs to the profile that was on screen
        if self.deck.cursor() != before && self.messenger.is_open() {
            tracing::debug!("Profile changed, closing message draft");
            self.messenger.close();
        }
    }

    pub fn open_message(&mut self) -> bool {
        self.messenger.open(self.deck.current())
    }

    pub fn update_draft(&mut self, text: impl Into<String>) -> bool {
        self.messenger.update_text(text)
    }

    pub fn send_message(&mut self) -> Option<Acknowledgment> {
        let acknowledgment = self.messenger.send(self.deck.current())?;
        tracing::debug!("Message sent to profile {}", acknowledgment.profile_id);
        Some(acknowledgment)
    }

    pub fn close_message(&mut self) {
        self.messenger.close();
    }

    pub fn dismiss_acknowledgment(&mut self, id: Uuid) -> bool {
        self.messenger.dismiss(id)
    }

    /// Start over from the first profile
    ///
    /// Sent messages are kept.
    pub fn reset(&mut self) {
        self.deck.rewind();
        self.classifications.clear();
        self.history.clear();
        self.gesture.reset();
        self.animation = Animation::None;
        self.pending = None;
        self.messenger.close();
        tracing::debug!("Review session reset");
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_profile(&self) -> Option<&Profile> {
        self.deck.current()
    }

    pub fn cursor(&self) -> usize {
        self.deck.cursor()
    }

    pub fn classifications(&self) -> &Classifications {
        &self.classifications
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn messenger(&self) -> &Messenger {
        &self.messenger
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn has_messaged_current(&self) -> bool {
        self.deck
            .current()
            .map(|p| self.messenger.has_messaged(p.id))
            .unwrap_or(false)
    }

    /// Totals for the end-of-deck screen, once exhausted
    pub fn summary(&self) -> Option<ReviewSummary> {
        if !self.deck.is_exhausted() {
            return None;
        }
        Some(ReviewSummary {
            selected: self.classifications.selected().len(),
            rejected: self.classifications.rejected().len(),
            messages_sent: self.messenger.sent().len(),
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_profile: self.deck.current().cloned(),
            cursor: self.deck.cursor(),
            deck_size: self.deck.len(),
            position: (self.deck.cursor() + 1).min(self.deck.len()),
            selected: self.classifications.selected().to_vec(),
            rejected: self.classifications.rejected().to_vec(),
            gesture: GestureView {
                dragging: self.gesture.is_dragging(),
                offset: self.gesture.offset(),
                direction: self.gesture.direction(),
            },
            animation: self.animation,
            can_undo: self.can_undo(),
            transition_pending: self.pending.is_some(),
            messaging: MessagingView {
                open: self.messenger.is_open(),
                profile_id: self.messenger.target(),
                draft: self.messenger.draft().to_string(),
                can_send: self.messenger.can_send(),
                has_messaged_current: self.has_messaged_current(),
            },
            acknowledgment: self.messenger.acknowledgment().cloned(),
            messages_sent: self.messenger.sent().len(),
            summary: self.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfileId, SwipeDirection};

    fn profile(id: ProfileId) -> Profile {
        Profile {
            id,
            name: format!("Candidate {}", id),
            title: "Backend Engineer".to_string(),
            image: format!("https://img.example/{}.jpg", id),
            experience: "7 years".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            education: "M.S. Computer Engineering".to_string(),
            bio: "Builds things.".to_string(),
        }
    }

    fn session(n: ProfileId) -> ReviewSession {
        ReviewSession::new((1..=n).map(profile).collect())
    }

    #[test]
    fn test_commit_classifies_before_advancing() {
        let mut s = session(3);
        let token = s.select().expect("commit should be scheduled");

        assert_eq!(s.classifications().selected(), &[1]);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.animation(), Animation::Right);
        assert_eq!(s.cursor(), 0);

        assert!(s.complete_transition(token));
        assert_eq!(s.cursor(), 1);
        assert_eq!(s.animation(), Animation::None);
    }

    #[test]
    fn test_commit_ignored_while_transition_pending() {
        let mut s = session(3);
        s.reject().unwrap();

        assert!(s.select().is_none());
        assert_eq!(s.history().len(), 1);
        assert!(s.classifications().selected().is_empty());
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut s = session(3);
        let token = s.select().unwrap();
        s.reset();

        assert!(!s.complete_transition(token));
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let mut s = session(3);
        s.reject().unwrap();
        s.settle();
        let before = (s.cursor(), s.classifications().clone());

        s.select().unwrap();
        s.settle();
        let token = s.undo().expect("undo should be scheduled");
        assert_eq!(s.animation(), Animation::UndoRight);
        assert!(s.history().is_undoing());
        assert!(!s.can_undo());

        assert!(s.complete_transition(token));
        assert_eq!((s.cursor(), s.classifications().clone()), before);
        assert!(!s.history().is_undoing());
        assert!(s.can_undo());
    }

    #[test]
    fn test_undo_replaces_pending_advance() {
        let mut s = session(3);
        let commit = s.select().unwrap();
        assert!(s.can_undo());

        let undo = s.undo().expect("undo should run during the commit animation");
        assert_eq!(s.animation(), Animation::UndoRight);
        assert!(s.classifications().selected().is_empty());
        assert!(s.history().is_empty());
        assert!(s.undo().is_none());

        assert!(!s.complete_transition(commit));
        assert!(s.complete_transition(undo));
        assert_eq!(s.cursor(), 0);
        assert!(!s.history().is_undoing());
    }

    #[test]
    fn test_cursor_change_closes_message_draft() {
        let mut s = session(3);
        s.open_message();
        s.update_draft("Hi Candidate 1");
        s.select().unwrap();

        assert!(s.messenger().is_open());
        s.settle();

        assert!(!s.messenger().is_open());
        assert!(s.send_message().is_none());
        assert!(s.messenger().sent().is_empty());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut s = session(2);
        assert!(s.undo().is_none());
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.animation(), Animation::None);
    }

    #[test]
    fn test_swipe_past_threshold_commits() {
        let mut s = session(2);
        assert!(s.start_gesture(100.0));
        s.move_gesture(-30.0);
        assert_eq!(s.gesture().direction(), SwipeDirection::Left);

        let token = s.end_gesture().expect("swipe should commit");
        assert_eq!(s.classifications().rejected(), &[1]);
        s.complete_transition(token);
        assert_eq!(s.gesture().offset(), 0.0);
        assert_eq!(s.gesture().direction(), SwipeDirection::None);
    }

    #[test]
    fn test_gesture_ignored_when_exhausted() {
        let mut s = session(1);
        s.select().unwrap();
        s.settle();

        assert!(!s.start_gesture(0.0));
        assert!(s.end_gesture().is_none());
        assert!(s.summary().is_some());
    }

    #[test]
    fn test_snapshot_reports_position() {
        let mut s = session(5);
        let snap = s.snapshot();
        assert_eq!(snap.position, 1);
        assert_eq!(snap.deck_size, 5);
        assert!(snap.summary.is_none());

        for _ in 0..5 {
            s.select().unwrap();
            s.settle();
        }
        let snap = s.snapshot();
        assert!(snap.current_profile.is_none());
        assert_eq!(snap.position, 5);
        assert_eq!(snap.summary.map(|sum| sum.selected), Some(5));
    }
}
