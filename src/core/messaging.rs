use crate::models::{Acknowledgment, Profile, ProfileId, SentMessage};
use uuid::Uuid;

/// Open editing surface, scoped to one profile
#[derive(Debug, Clone, PartialEq, Eq)]
struct Draft {
    profile_id: ProfileId,
    text: String,
}

/// Messaging side-channel
///
/// Independent of the review session: it only needs the identity of the
/// profile currently on screen, and nothing here is cleared by a session
/// reset except the open editing surface.
#[derive(Debug, Clone, Default)]
pub struct Messenger {
    draft: Option<Draft>,
    sent: Vec<SentMessage>,
    acknowledgment: Option<Acknowledgment>,
}

impl Messenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Profile the open surface is scoped to
    pub fn target(&self) -> Option<ProfileId> {
        self.draft.as_ref().map(|d| d.profile_id)
    }

    pub fn draft(&self) -> &str {
        self.draft.as_ref().map(|d| d.text.as_str()).unwrap_or("")
    }

    /// Whether `send` would go through
    pub fn can_send(&self) -> bool {
        !self.draft().trim().is_empty()
    }

    /// Open the surface for the current profile with an empty draft
    pub fn open(&mut self, current: Option<&Profile>) -> bool {
        match current {
            Some(profile) => {
                self.draft = Some(Draft {
                    profile_id: profile.id,
                    text: String::new(),
                });
                true
            }
            None => false,
        }
    }

    /// Replace the pending draft
    pub fn update_text(&mut self, text: impl Into<String>) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Send the trimmed draft to the current profile
    ///
    /// Returns the acknowledgment to display; `None` when the draft is blank,
    /// there is no current profile, or the surface was opened for a
    /// different profile. Nothing changes in those cases.
    pub fn send(&mut self, current: Option<&Profile>) -> Option<Acknowledgment> {
        let profile = current?;
        if self.target() != Some(profile.id) {
            return None;
        }
        let text = self.draft().trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.sent.push(SentMessage {
            profile_id: profile.id,
            message: text,
            sent_at: chrono::Utc::now(),
        });
        self.draft = None;

        let acknowledgment = Acknowledgment {
            id: Uuid::new_v4(),
            profile_id: profile.id,
            text: format!("Message sent to {}", profile.name),
        };
        self.acknowledgment = Some(acknowledgment.clone());
        Some(acknowledgment)
    }

    /// Discard the draft and close the surface
    pub fn close(&mut self) {
        self.draft = None;
    }

    pub fn has_messaged(&self, id: ProfileId) -> bool {
        self.sent.iter().any(|m| m.profile_id == id)
    }

    pub fn messages_for(&self, id: ProfileId) -> Vec<&SentMessage> {
        self.sent.iter().filter(|m| m.profile_id == id).collect()
    }

    pub fn sent(&self) -> &[SentMessage] {
        &self.sent
    }

    pub fn acknowledgment(&self) -> Option<&Acknowledgment> {
        self.acknowledgment.as_ref()
    }

    /// Remove the acknowledgment if it is still the one identified by `id`
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        match &self.acknowledgment {
            Some(current) if current.id == id => {
                self.acknowledgment = None;
                true
            }
            _ => false,
        }
    }
}
