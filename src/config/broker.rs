use crate::error::{PublisherError, Result};
use crate::utils::common::find_file;
use lapin::uri::{AMQPAuthority, AMQPUri, AMQPUserInfo};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Well-known AMQP port, used when the config does not name one.
pub const DEFAULT_AMQP_PORT: u16 = 5672;
pub const DEFAULT_VHOST: &str = "/";

/// Config file as it appears on disk. Every field is optional here so that a
/// missing field can be reported by name instead of as a parse failure.
#[derive(Deserialize, Debug, Default)]
struct RawBrokerConfig {
    user: Option<String>,
    password: Option<String>,
    location: Option<String>,
    queues: Option<Vec<String>>,
    // Older single-queue layout.
    queuename: Option<String>,
    port: Option<u16>,
    vhost: Option<String>,
}

/// Validated broker settings. Built once at startup and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct BrokerConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub vhost: String,
    pub queues: Vec<String>,
}

impl fmt::Debug for BrokerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrokerConfig")
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("vhost", &self.vhost)
            .field("queues", &self.queues)
            .finish()
    }
}

impl BrokerConfig {
    /// Connection URI for the client library. Credentials travel as
    /// structured fields, so no percent-encoding is involved.
    pub fn amqp_uri(&self) -> AMQPUri {
        AMQPUri {
            authority: AMQPAuthority {
                userinfo: AMQPUserInfo {
                    username: self.user.clone(),
                    password: self.password.clone(),
                },
                host: self.host.clone(),
                port: self.port,
            },
            vhost: self.vhost.clone(),
            ..Default::default()
        }
    }

    /// Broker address with the password masked, for logs and error messages.
    pub fn display_addr(&self) -> String {
        let vhost = self.vhost.strip_prefix('/').unwrap_or(&self.vhost);
        format!(
            "amqp://{}:***@{}:{}/{}",
            self.user, self.host, self.port, vhost
        )
    }
}

impl TryFrom<RawBrokerConfig> for BrokerConfig {
    type Error = PublisherError;

    fn try_from(raw: RawBrokerConfig) -> Result<Self> {
        let mut missing = Vec::new();
        if raw.user.is_none() {
            missing.push("user");
        }
        if raw.password.is_none() {
            missing.push("password");
        }
        if raw.location.is_none() {
            missing.push("location");
        }

        let queues = match (raw.queues, raw.queuename) {
            (Some(queues), Some(legacy)) => {
                warn!(
                    queuename = %legacy,
                    "Both 'queues' and 'queuename' are set; using 'queues'"
                );
                Some(queues)
            }
            (Some(queues), None) => Some(queues),
            (None, Some(legacy)) => Some(vec![legacy]),
            (None, None) => {
                missing.push("queues");
                None
            }
        };

        if !missing.is_empty() {
            return Err(PublisherError::ConfigIncomplete(format!(
                "missing field(s): {}",
                missing.join(", ")
            )));
        }

        let queues = queues.unwrap_or_default();
        if queues.is_empty() {
            return Err(PublisherError::ConfigIncomplete(
                "'queues' must name at least one queue".to_string(),
            ));
        }
        if let Some(pos) = queues.iter().position(|q| q.trim().is_empty()) {
            return Err(PublisherError::ConfigIncomplete(format!(
                "queue name at index {} is blank",
                pos
            )));
        }

        Ok(BrokerConfig {
            user: raw.user.unwrap_or_default(),
            password: raw.password.unwrap_or_default(),
            host: raw.location.unwrap_or_default(),
            port: raw.port.unwrap_or(DEFAULT_AMQP_PORT),
            vhost: raw.vhost.unwrap_or_else(|| DEFAULT_VHOST.to_string()),
            queues,
        })
    }
}

/// Parses and validates config file contents. `path` is only used for error
/// reporting.
pub fn parse_broker_config(content: &[u8], path: &Path) -> Result<BrokerConfig> {
    let raw: RawBrokerConfig =
        serde_json::from_slice(content).map_err(|source| PublisherError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    BrokerConfig::try_from(raw)
}

/// Loads the broker config from `config_path`.
pub fn load_broker_config<P: AsRef<Path>>(config_path: P) -> Result<BrokerConfig> {
    let path_ref = config_path.as_ref();
    let abs = find_file(path_ref)
        .ok_or_else(|| PublisherError::ConfigNotFound(path_ref.to_path_buf()))?;
    info!(path = %abs.display(), "Config detected - reading file");

    let content = fs::read(&abs).map_err(|source| PublisherError::Io {
        path: abs.clone(),
        source,
    })?;

    let config = parse_broker_config(&content, &abs)?;
    debug!(config = ?config, "Config loaded");
    info!(
        broker = %config.display_addr(),
        queues = config.queues.len(),
        "Config validated"
    );
    Ok(config)
}
