// Review engine exports
pub mod classification;
pub mod deck;
pub mod gesture;
pub mod history;
pub mod messaging;
pub mod session;

pub use classification::Classifications;
pub use deck::Deck;
pub use gesture::{indicator_for, GestureOutcome, GestureTracker, COMMIT_THRESHOLD, INDICATOR_THRESHOLD};
pub use history::UndoStack;
pub use messaging::Messenger;
pub use session::{ReviewSession, Transition, TransitionToken};
