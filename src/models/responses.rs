use serde::{Deserialize, Serialize};
use crate::models::domain::{Acknowledgment, Animation, Profile, ProfileId, SentMessage, SwipeDirection};

/// State exposed to the presentation layer after every command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub current_profile: Option<Profile>,
    pub cursor: usize,
    pub deck_size: usize,
    pub position: usize,
    pub selected: Vec<ProfileId>,
    pub rejected: Vec<ProfileId>,
    pub gesture: GestureView,
    pub animation: Animation,
    pub can_undo: bool,
    pub transition_pending: bool,
    pub messaging: MessagingView,
    pub acknowledgment: Option<Acknowledgment>,
    pub messages_sent: usize,
    pub summary: Option<ReviewSummary>,
}

/// Drag feedback for the current card
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureView {
    pub dragging: bool,
    pub offset: f64,
    pub direction: SwipeDirection,
}

/// Messaging surface state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingView {
    pub open: bool,
    pub profile_id: Option<ProfileId>,
    pub draft: String,
    pub can_send: bool,
    pub has_messaged_current: bool,
}

/// Totals shown once the deck is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub selected: usize,
    pub rejected: usize,
    pub messages_sent: usize,
}

/// Sent message listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<SentMessage>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub profiles: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
