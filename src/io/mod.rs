pub mod cli;
pub mod configuration;
pub mod error;
pub mod map_file;
pub mod progress;
