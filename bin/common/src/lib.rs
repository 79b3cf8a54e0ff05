#![deny(missing_docs)]

//! Offers common functionality to binary crates (logging and data directory configuration)

mod config;
/// Functions for locating the data directory
pub mod data_dir;
/// Functions for setting up the logging system
pub mod logger;

pub use config::Config;
