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

//! Reading entity descriptors and whole application directories.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

use crate::catalog::{ENTITY_DIRECTORY, GENERATOR_CONFIG_FILE, GENERATOR_CONFIG_KEY};
use crate::core::JdlObject;
use crate::errors::{JdlError, Result};
use crate::json::descriptor::JdlEntityDescriptor;
use crate::json::parser::JdlJsonParser;
use crate::utils::upper_first;

/// `<directory>/<EntityName>.json`, first letter upper-cased.
pub fn to_file_path(directory: &Path, entity_name: &str) -> Result<PathBuf> {
    if entity_name.is_empty() {
        return Err(JdlError::argument("The passed entity name must not be nil."));
    }
    Ok(directory.join(format!("{}.json", upper_first(entity_name))))
}

pub fn read_entity_json(path: &Path) -> Result<JdlEntityDescriptor> {
    if path.as_os_str().is_empty() {
        return Err(JdlError::argument("The passed file path must not be nil."));
    }
    if !path.is_file() {
        return Err(JdlError::file_access(format!(
            "The passed file '{}' must exist and must not be a directory.",
            path.display()
        )));
    }
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(JdlError::file_access(format!(
            "The passed file '{}' must have the json extension.",
            path.display()
        )));
    }
    let content = fs::read_to_string(path)?;
    JdlEntityDescriptor::from_json_str(&content)
}

/// Reads an application directory: the generator configuration for the
/// server options, then every readable descriptor under `.simlife/`.
/// Unreadable descriptors are skipped.
pub fn parse_from_dir(app_dir: &Path) -> Result<JdlObject> {
    if app_dir.as_os_str().is_empty() {
        return Err(JdlError::argument("The app directory must be passed."));
    }
    if !app_dir.is_dir() {
        return Err(JdlError::file_access(format!(
            "The passed directory '{}' must exist and must be a directory.",
            app_dir.display()
        )));
    }
    let parser = JdlJsonParser::new();
    let jdl = match read_generator_config(app_dir)? {
        Some(config) => parser.parse_server_options(&config)?,
        None => JdlObject::new(),
    };

    let mut entities = IndexMap::new();
    let entity_dir = app_dir.join(ENTITY_DIRECTORY);
    if entity_dir.is_dir() {
        let mut paths: Vec<PathBuf> = fs::read_dir(&entity_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();
        paths.sort();
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };
            match read_entity_json(&path) {
                Ok(descriptor) => {
                    entities.insert(name, descriptor);
                }
                Err(err) => log::warn!("skipping '{}': {}", path.display(), err),
            }
        }
    }
    parser.parse_entities(&entities, Some(jdl))
}

fn read_generator_config(app_dir: &Path) -> Result<Option<serde_json::Map<String, Value>>> {
    let path = app_dir.join(GENERATOR_CONFIG_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let content: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    Ok(content
        .get(GENERATOR_CONFIG_KEY)
        .and_then(Value::as_object)
        .cloned())
}
