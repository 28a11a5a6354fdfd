pub mod human;

use serde::Serialize;
use serde_json::{Value, json};

/// Machine-readable failure category carried in the error envelope.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Config file could not be read back or written as TOML.
    ConfigError,
    /// A `--batch` payload was not valid JSON.
    InvalidJson,
    IoError,
    /// A value was rejected before any computation ran.
    InvalidInput,
}

impl ErrorCode {
    /// Pick the code from the innermost error type that carries meaning.
    pub fn classify(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if cause.is::<toml::de::Error>() || cause.is::<toml::ser::Error>() {
                return Self::ConfigError;
            }
            if cause.is::<serde_json::Error>() {
                return Self::InvalidJson;
            }
            if cause.is::<std::io::Error>() {
                return Self::IoError;
            }
        }
        Self::InvalidInput
    }
}

/// Standard JSON envelope wrapping every command's output.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

pub fn error(command: &str, code: ErrorCode, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}
