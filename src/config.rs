// src/config.rs
pub mod broker;
pub mod publisher;

pub use broker::{load_broker_config, BrokerConfig};
pub use publisher::Args;
