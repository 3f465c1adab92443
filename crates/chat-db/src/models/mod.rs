//! Database models - SQLx-compatible structs for PostgreSQL tables

mod chat;

pub use chat::{ChatModel, InvitationModel, ParticipantModel};
