//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostic types     |
//! | `field`  | Type-safe field paths for diagnostics        |
//! | `format` | Source format detection (TOML / JSON)        |

mod error;
mod field;
mod format;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, SchemaValidationError};
pub use field::FieldPath;
pub use format::ConfigFormat;
