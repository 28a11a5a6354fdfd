pub mod intake;
pub mod macros;
pub mod progress;
pub mod summary;
