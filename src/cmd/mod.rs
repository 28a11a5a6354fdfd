pub mod completions;
pub mod config;
pub mod init;
pub mod macros;
pub mod progress;
pub mod summary;
