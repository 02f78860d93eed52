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

//! # JSON Export Module
//!
//! Incremental writer for `.simlife/<Entity>.json` files. Unchanged entities
//! are left alone, and a rewritten file keeps the `changelogDate` it already
//! had on disk, so exporting the same model twice is a no-op.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::catalog::{JdlApplicationType, ENTITY_DIRECTORY};
use crate::core::JdlApplication;
use crate::errors::{JdlError, Result};
use crate::export::diff::are_entities_equal;
use crate::json::descriptor::JdlEntityDescriptor;
use crate::json::reader::{read_entity_json, to_file_path};

/// Configuration for the JSON exporter.
#[derive(Clone, Debug)]
pub struct JdlExportConfig {
    /// Directory holding the application(s).
    pub root: PathBuf,
    /// Descriptor directory below an application.
    pub entity_dir: String,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for JdlExportConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            entity_dir: ENTITY_DIRECTORY.to_string(),
            indent: 4,
        }
    }
}

/// Entities written by one export, keyed by entity name.
pub type JdlExportedEntities = IndexMap<String, JdlEntityDescriptor>;

#[derive(Debug, Default)]
pub struct JdlJsonExporter {
    config: JdlExportConfig,
}

impl JdlJsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: JdlExportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.root = root.into();
        self
    }

    /// Directory the plain export writes to: `<root>/<entity_dir>`.
    pub fn entity_dir(&self) -> PathBuf {
        self.config.root.join(&self.config.entity_dir)
    }

    /// Writes `entities` to the descriptor directory and returns what was
    /// written. Unless `force_no_filtering` is set, entities equal to their
    /// file on disk are skipped.
    pub fn export_to_json(
        &self,
        entities: &IndexMap<String, JdlEntityDescriptor>,
        force_no_filtering: bool,
    ) -> Result<JdlExportedEntities> {
        self.write_entities(&self.entity_dir(), entities, force_no_filtering)
    }

    /// Writes each entity into the directory of every application listing
    /// it. A single application uses the plain descriptor directory; several
    /// use `<root>/<baseName>/<entity_dir>`.
    pub fn export_entities_in_applications<'a, I>(
        &self,
        entities: &IndexMap<String, JdlEntityDescriptor>,
        applications: I,
        force_no_filtering: bool,
    ) -> Result<IndexMap<String, JdlExportedEntities>>
    where
        I: IntoIterator<Item = &'a JdlApplication>,
    {
        let applications: Vec<&JdlApplication> = applications.into_iter().collect();
        if applications.is_empty() {
            return Err(JdlError::argument(
                "Applications have to be passed to export entities in applications.",
            ));
        }
        let mut exported = IndexMap::new();
        for application in &applications {
            let base_name = application.base_name().unwrap_or_default().to_string();
            let directory = if applications.len() == 1 {
                self.entity_dir()
            } else {
                self.config.root.join(&base_name).join(&self.config.entity_dir)
            };
            let selected: IndexMap<String, JdlEntityDescriptor> = entities
                .iter()
                .filter(|(_, entity)| {
                    entity
                        .applications
                        .as_ref()
                        .map_or(true, |apps| apps.includes(&base_name))
                })
                .map(|(name, entity)| (name.clone(), entity.clone()))
                .collect();
            let written = self.write_entities(&directory, &selected, force_no_filtering)?;
            exported.insert(base_name, written);
        }
        Ok(exported)
    }

    /// Exports for one application. A microservice only receives entities
    /// without a `microserviceName` or naming this application.
    pub fn export_entities(
        &self,
        entities: &IndexMap<String, JdlEntityDescriptor>,
        application_name: &str,
        application_type: JdlApplicationType,
        force_no_filtering: bool,
    ) -> Result<JdlExportedEntities> {
        if application_type != JdlApplicationType::Microservice {
            return self.export_to_json(entities, force_no_filtering);
        }
        let selected: IndexMap<String, JdlEntityDescriptor> = entities
            .iter()
            .filter(|(_, entity)| {
                entity
                    .microservice_name
                    .as_deref()
                    .map_or(true, |name| name == application_name)
            })
            .map(|(name, entity)| (name.clone(), entity.clone()))
            .collect();
        self.export_to_json(&selected, force_no_filtering)
    }

    fn write_entities(
        &self,
        directory: &Path,
        entities: &IndexMap<String, JdlEntityDescriptor>,
        force_no_filtering: bool,
    ) -> Result<JdlExportedEntities> {
        if directory.exists() && !directory.is_dir() {
            return Err(JdlError::file_access(format!(
                "The path '{}' must be a directory.",
                directory.display()
            )));
        }
        fs::create_dir_all(directory)?;

        let mut written = IndexMap::new();
        for (name, entity) in entities {
            let path = to_file_path(directory, name)?;
            let existing = if path.is_file() {
                match read_entity_json(&path) {
                    Ok(existing) => Some(existing),
                    Err(err) => {
                        log::warn!("overwriting unreadable '{}': {}", path.display(), err);
                        None
                    }
                }
            } else {
                None
            };
            if !force_no_filtering
                && existing
                    .as_ref()
                    .is_some_and(|existing| are_entities_equal(existing, entity))
            {
                log::debug!("entity '{}' unchanged, not rewritten", name);
                continue;
            }
            let mut entity = entity.clone();
            if let Some(date) = existing.and_then(|existing| existing.changelog_date) {
                entity.changelog_date = Some(date);
            }
            fs::write(&path, self.to_pretty_json(&entity)?)?;
            log::debug!("wrote '{}'", path.display());
            written.insert(name.clone(), entity);
        }
        Ok(written)
    }

    fn to_pretty_json(&self, entity: &JdlEntityDescriptor) -> Result<Vec<u8>> {
        let indent = " ".repeat(self.config.indent);
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        entity.serialize(&mut serializer)?;
        Ok(buffer)
    }
}
