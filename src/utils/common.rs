// src/utils/common.rs

use lapin::{uri::AMQPUri, Connection, ConnectionProperties, Result as LapinResult};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolves `path` against the working directory and checks that it can be
/// opened for reading. The file is closed again straight away.
pub fn find_file<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let abs = std::path::absolute(path.as_ref()).ok()?;
    debug!(path = %abs.display(), "Resolved file path");

    match File::open(&abs) {
        Ok(_file) => Some(abs),
        Err(e) => {
            debug!(path = %abs.display(), error = %e, "File cannot be opened");
            None
        }
    }
}

// Single attempt, no retry: a failed connect is fatal for the run.
pub async fn connect_rabbitmq(uri: AMQPUri) -> LapinResult<Connection> {
    let options = ConnectionProperties::default()
        .with_executor(tokio_executor_trait::Tokio::current())
        .with_reactor(tokio_reactor_trait::Tokio);

    let host = uri.authority.host.clone();
    let conn = Connection::connect_uri(uri, options).await?;
    info!("Successfully connected to RabbitMQ at {}", host);
    Ok(conn)
}
