// src/message.rs

use crate::data_model::Message;
use crate::error::{PublisherError, Result};
use crate::utils::common::find_file;
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads the payload from `message_path`. Contents are taken as raw bytes.
pub fn load_message<P: AsRef<Path>>(message_path: P) -> Result<Message> {
    let path_ref = message_path.as_ref();
    let abs = find_file(path_ref)
        .ok_or_else(|| PublisherError::MessageNotFound(path_ref.to_path_buf()))?;
    info!(path = %abs.display(), "Message detected - reading file");

    let content = fs::read(&abs).map_err(|source| PublisherError::Io {
        path: abs.clone(),
        source,
    })?;

    let message = Message::new(content).ok_or(PublisherError::MessageEmpty(abs))?;
    info!(bytes = message.len(), "Message loaded");
    Ok(message)
}
