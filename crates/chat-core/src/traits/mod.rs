//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{find_chat, ChatFilter, ChatRepository, RepoResult, UserDirectory};
