//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Jdl.
//! The Jdl project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Jdl Error Module
//!
//! This module defines the error types shared by the domain model, the two
//! parsers and the exporters.
//!
//! ## Error Categories
//!
//! - **Argument**: A required input was not supplied
//! - **Validation**: A member is structurally incomplete or references an
//!   undeclared name
//! - **IllegalOption**: Unknown option name, illegal value, or an option that
//!   the database type cannot support
//! - **IllegalName**: Misuse of the reserved `User` entity
//! - **FileAccess**: A file or directory is missing or of the wrong kind
//! - **WrongType**: A field type is unknown for the target database
//! - **Io / Serde**: Wrapped lower-level failures
//!
//! Every error is fatal to the call that raised it; callers never receive a
//! partially built aggregate.
//!
//! ## Usage
//!
//! ```rust
//! use jdl::errors::{JdlError, Result};
//!
//! fn check_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(JdlError::argument("The entity name must be passed."));
//!     }
//!     Ok(())
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, JdlError>;

/// Canonical error enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum JdlError {
    /// A required argument was missing.
    #[error("argument error: {message}")]
    Argument { message: String },

    /// Structurally invalid member or unresolved reference.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Option name or value outside the catalogue, or an illegal combination.
    #[error("illegal option: {message}")]
    IllegalOption { message: String },

    /// Reserved entity name used without the matching option.
    #[error("illegal name: {message}")]
    IllegalName { message: String },

    /// Missing file or directory, or one of the wrong kind.
    #[error("file access error: {message}")]
    FileAccess { message: String },

    /// Field type unknown for the selected database type.
    #[error("wrong type: {message}")]
    WrongType { message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<io::Error> for JdlError {
    fn from(err: io::Error) -> Self {
        JdlError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for JdlError {
    fn from(err: serde_json::Error) -> Self {
        JdlError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for JdlError {
    fn from(err: serde_yaml::Error) -> Self {
        JdlError::Serde(err.to_string())
    }
}

impl JdlError {
    pub fn argument<T: Into<String>>(message: T) -> Self {
        JdlError::Argument {
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        JdlError::Validation {
            message: message.into(),
        }
    }

    pub fn illegal_option<T: Into<String>>(message: T) -> Self {
        JdlError::IllegalOption {
            message: message.into(),
        }
    }

    pub fn illegal_name<T: Into<String>>(message: T) -> Self {
        JdlError::IllegalName {
            message: message.into(),
        }
    }

    pub fn file_access<T: Into<String>>(message: T) -> Self {
        JdlError::FileAccess {
            message: message.into(),
        }
    }

    pub fn wrong_type<T: Into<String>>(message: T) -> Self {
        JdlError::WrongType {
            message: message.into(),
        }
    }

    /// Builds the aggregated error raised when a member fails its structural
    /// checks: `The <kind> must be valid in order to be added.\nErrors: …`.
    pub fn invalid_member(kind: &str, errors: &[String]) -> Self {
        JdlError::validation(format!(
            "The {} must be valid in order to be added.\nErrors: {}",
            kind,
            errors.join(", ")
        ))
    }

    /// Message carried by the error, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            JdlError::Argument { message }
            | JdlError::Validation { message }
            | JdlError::IllegalOption { message }
            | JdlError::IllegalName { message }
            | JdlError::FileAccess { message }
            | JdlError::WrongType { message } => message,
            JdlError::Io(message) | JdlError::Serde(message) => message,
        }
    }
}
