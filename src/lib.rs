#![allow(non_snake_case)]

// Declare the modules that form the library's public API
pub mod config;
pub mod data_model;
pub mod error;
pub mod message;
pub mod publisher_logic;
pub mod utils;

pub use error::{PublisherError, Result};
