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

use std::fs;
use std::path::Path;

use crate::core::JdlObject;
use crate::errors::{JdlError, Result};

/// Writes the JDL text form of `jdl` to `path`.
pub fn export_to_jdl(jdl: &JdlObject, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(JdlError::argument("A path must be passed to export to JDL."));
    }
    if path.is_dir() {
        return Err(JdlError::file_access(format!(
            "The path '{}' must not be a directory.",
            path.display()
        )));
    }
    fs::write(path, jdl.to_string())?;
    log::debug!("wrote JDL to '{}'", path.display());
    Ok(())
}
