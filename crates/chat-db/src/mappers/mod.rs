//! Aggregate to row mappers
//!
//! - `assemble_chats`: build aggregates from a page of chat rows and their child rows
//! - `*Rows` structs: column arrays for bulk inserts of child rows

mod chat;

pub use chat::{assemble_chats, InvitationRows, ParticipantRows};
