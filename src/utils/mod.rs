// Utils

pub mod common;
pub mod logging;

pub use common::{connect_rabbitmq, find_file};
pub use logging::{build_subscriber, LogFormat};
