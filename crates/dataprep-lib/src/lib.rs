pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod extract;
pub mod logging;
pub mod verification;

pub use crate::config::Config;
pub use error::DataPrepError;
