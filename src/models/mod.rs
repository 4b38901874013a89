// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Acknowledgment, Animation, Decision, HistoryEntry, Profile, ProfileId, SentMessage, SwipeDirection};
pub use requests::{DraftRequest, GestureRequest};
pub use responses::{ErrorResponse, GestureView, HealthResponse, MessagesResponse, MessagingView, ReviewSummary, SessionSnapshot};
