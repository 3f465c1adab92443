//! Domain entities - the chat aggregate and the values it owns

mod chat;
mod invitation;
mod participant;

pub use chat::{Chat, ChatParts};
pub use invitation::Invitation;
pub use participant::Participant;
