use serde::{Deserialize, Serialize};

/// Identifier of a profile within a deck
pub type ProfileId = u32;

/// Candidate profile shown on a review card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub title: String,
    pub image: String,
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub bio: String,
}

/// A committed review decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Select,
    Reject,
}

impl Decision {
    /// Card animation played while the decision is being committed
    pub fn commit_animation(self) -> Animation {
        match self {
            Decision::Select => Animation::Right,
            Decision::Reject => Animation::Left,
        }
    }

    /// Card animation played while the decision is being undone
    pub fn undo_animation(self) -> Animation {
        match self {
            Decision::Select => Animation::UndoRight,
            Decision::Reject => Animation::UndoLeft,
        }
    }
}

/// Provisional direction shown while a card is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    #[default]
    None,
    Left,
    Right,
}

/// Transient card animation while a transition is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Animation {
    #[default]
    None,
    Left,
    Right,
    UndoLeft,
    UndoRight,
}

/// One reversible commit: the cursor it was made at and what was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub index: usize,
    pub action: Decision,
}

/// Message sent to a profile through the messaging side-channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    #[serde(rename = "profileId")]
    pub profile_id: ProfileId,
    pub message: String,
    #[serde(rename = "sentAt")]
    pub sent_at: chrono::DateTime<chrono::Utc>,
}

/// Self-dismissing confirmation shown after a message is sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub id: uuid::Uuid,
    #[serde(rename = "profileId")]
    pub profile_id: ProfileId,
    pub text: String,
}
