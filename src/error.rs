//! Domain-specific error types for the hack manager.
//!
//! Internal modules return typed errors built with [`thiserror`]; command
//! handlers at the CLI boundary convert them to [`anyhow::Error`] via `?`.
//!
//! # Error hierarchy
//!
//! ```text
//! LnpError
//! ├── Store(StoreError)        hacks.toml and user.toml
//! └── Engine(EngineError)      SDL library comparison and swap
//!
//! HackError                    unknown hack, bad target file (logged)
//! EncodingError                text outside latin-1
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`EngineSwitch`](crate::engine::EngineSwitch).
#[derive(Error, Debug)]
pub enum LnpError {
    /// Configuration store error.
    #[error("Configuration error: {0}")]
    Store(#[from] StoreError),

    /// Global engine switch error.
    #[error("Engine switch error: {0}")]
    Engine(#[from] EngineError),
}

/// Errors that arise from hack lookup and validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HackError {
    /// No hack is configured under the requested name.
    #[error("No hack configured with name '{0}'")]
    NotFound(String),

    /// The hack names a target file outside the fixed set.
    #[error(
        "Illegal file '{file}' configured for hack '{hack}'; must be one of \"dfhack\", \"onLoad\", \"onMapLoad\""
    )]
    InvalidTargetFile {
        /// Name of the offending hack.
        hack: String,
        /// The configured file value.
        file: String,
    },
}

/// Errors that arise from loading and saving the configuration store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file could not be read or written.
    #[error("IO error on config file {path}: {source}")]
    Io {
        /// Path to the store file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The store file is not valid TOML for the expected shape.
    #[error("Invalid TOML in {path}: {source}")]
    Parse {
        /// Path to the store file.
        path: PathBuf,
        /// Underlying deserialization error.
        source: toml::de::Error,
    },

    /// The in-memory store could not be serialized.
    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        /// Path to the store file.
        path: PathBuf,
        /// Underlying serialization error.
        source: toml::ser::Error,
    },
}

/// Errors that arise when encoding init-file text as latin-1.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodingError {
    /// A character has no latin-1 representation.
    #[error("character {ch:?} at byte offset {offset} cannot be encoded as latin-1")]
    Unrepresentable {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the source string.
        offset: usize,
    },
}

/// Errors that arise from the global engine switch.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A library variant could not be read for comparison.
    #[error("cannot compare library variant {path}: {source}")]
    Compare {
        /// Path of the unreadable variant.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A library variant could not be copied into place.
    #[error("cannot copy {from} to {to}: {source}")]
    Copy {
        /// Source variant.
        from: PathBuf,
        /// Destination slot.
        to: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
