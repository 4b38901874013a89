use crate::core::{ReviewSession, TransitionToken};
use crate::models::{Profile, SentMessage, SessionSnapshot};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Card animation length before a commit or undo moves the cursor
pub const TRANSITION_DELAY: Duration = Duration::from_millis(300);

/// How long a "message sent" acknowledgment stays visible
pub const ACKNOWLEDGMENT_TTL: Duration = Duration::from_millis(3000);

/// Delays applied to deferred continuations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub transition: Duration,
    pub acknowledgment: Duration,
}

impl Timing {
    /// No delays: transitions complete and acknowledgments dismiss inline
    pub fn immediate() -> Self {
        Self {
            transition: Duration::ZERO,
            acknowledgment: Duration::ZERO,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            transition: TRANSITION_DELAY,
            acknowledgment: ACKNOWLEDGMENT_TTL,
        }
    }
}

/// Shared handle to the review session
///
/// Serializes commands through an async mutex and runs the deferred
/// "animate then mutate" continuations as timer tasks. A continuation
/// carries the token of the transition it completes, so one that fires
/// after a reset does nothing.
#[derive(Clone)]
pub struct SessionRuntime {
    session: Arc<Mutex<ReviewSession>>,
    timing: Timing,
}

impl SessionRuntime {
    pub fn new(session: ReviewSession, timing: Timing) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            timing,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn profiles(&self) -> Vec<Profile> {
        self.session.lock().await.deck().profiles().to_vec()
    }

    pub async fn messages(&self) -> Vec<SentMessage> {
        self.session.lock().await.messenger().sent().to_vec()
    }

    pub async fn start_gesture(&self, x: f64) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        if !session.start_gesture(x) {
            tracing::debug!("Gesture start ignored");
        }
        session.snapshot()
    }

    pub async fn move_gesture(&self, x: f64) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        session.move_gesture(x);
        session.snapshot()
    }

    pub async fn end_gesture(&self) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        let token = session.end_gesture();
        self.schedule_transition(&mut session, token);
        session.snapshot()
    }

    pub async fn select(&self) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        let token = session.select();
        self.schedule_transition(&mut session, token);
        session.snapshot()
    }

    pub async fn reject(&self) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        let token = session.reject();
        self.schedule_transition(&mut session, token);
        session.snapshot()
    }

    pub async fn undo(&self) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        let token = session.undo();
        self.schedule_transition(&mut session, token);
        session.snapshot()
    }

    pub async fn reset(&self) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        session.reset();
        tracing::info!("Review restarted from the first profile");
        session.snapshot()
    }

    pub async fn open_message(&self) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        if !session.open_message() {
            tracing::debug!("No current profile to message");
        }
        session.snapshot()
    }

    pub async fn update_draft(&self, text: String) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        session.update_draft(text);
        session.snapshot()
    }

    pub async fn send_message(&self) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        if let Some(acknowledgment) = session.send_message() {
            tracing::info!("{}", acknowledgment.text);
            self.schedule_dismissal(&mut session, acknowledgment.id);
        }
        session.snapshot()
    }

    pub async fn close_message(&self) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        session.close_message();
        session.snapshot()
    }

    fn schedule_transition(&self, session: &mut ReviewSession, token: Option<TransitionToken>) {
        let Some(token) = token else {
            return;
        };

        if self.timing.transition.is_zero() {
            session.complete_transition(token);
            return;
        }

        let shared = Arc::clone(&self.session);
        let delay = self.timing.transition;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !shared.lock().await.complete_transition(token) {
                tracing::trace!("Transition {} superseded", token);
            }
        });
    }

    fn schedule_dismissal(&self, session: &mut ReviewSession, id: Uuid) {
        if self.timing.acknowledgment.is_zero() {
            session.dismiss_acknowledgment(id);
            return;
        }

        let shared = Arc::clone(&self.session);
        let ttl = self.timing.acknowledgment;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            shared.lock().await.dismiss_acknowledgment(id);
        });
    }
}
