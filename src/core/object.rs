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

//! # Root Aggregate
//!
//! [`JdlObject`] owns everything a parse produces. Every `add_*` operation
//! checks the member's structural completeness first and rejects it with a
//! [`JdlError::Validation`] listing all violations. Reference resolution
//! (declared entities, the reserved `User`) is the parsers' job.
//!
//! The `Display` form is deterministic and is the JDL text written by the
//! exporter:
//!
//! ```text
//! <application>\n  (per application) then \n
//! <entity>\n       (per entity)
//! <enum>\n         (per enum) then \n
//! <relationship block>\n (per cardinality) then \n
//! <option>\n       (per option)
//! ```
//!
//! Empty sections emit nothing.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::options::MICROSERVICE;
use crate::core::application::JdlApplication;
use crate::core::entity::JdlEntity;
use crate::core::enumeration::JdlEnum;
use crate::core::option::{JdlOption, JdlOptions};
use crate::core::relationship::{JdlRelationship, JdlRelationships};
use crate::errors::{JdlError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JdlObject {
    applications: IndexMap<String, JdlApplication>,
    entities: IndexMap<String, JdlEntity>,
    enums: IndexMap<String, JdlEnum>,
    relationships: JdlRelationships,
    options: JdlOptions,
}

impl JdlObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an application keyed by its base name; an equal name replaces.
    pub fn add_application(&mut self, application: JdlApplication) -> Result<()> {
        let errors = application.errors();
        if !errors.is_empty() {
            return Err(JdlError::invalid_member("application", &errors));
        }
        let base_name = application.base_name().unwrap_or_default().to_string();
        self.applications.insert(base_name, application);
        Ok(())
    }

    pub fn application(&self, base_name: &str) -> Option<&JdlApplication> {
        self.applications.get(base_name)
    }

    pub fn applications(&self) -> impl Iterator<Item = &JdlApplication> {
        self.applications.values()
    }

    pub fn application_quantity(&self) -> usize {
        self.applications.len()
    }

    /// Adds an entity; an entity with the same name is replaced wholesale.
    pub fn add_entity(&mut self, entity: JdlEntity) -> Result<()> {
        let errors = entity.errors();
        if !errors.is_empty() {
            return Err(JdlError::invalid_member("entity", &errors));
        }
        self.entities.insert(entity.name.clone(), entity);
        Ok(())
    }

    pub fn entity(&self, name: &str) -> Option<&JdlEntity> {
        self.entities.get(name)
    }

    pub fn entities(&self) -> impl Iterator<Item = &JdlEntity> {
        self.entities.values()
    }

    pub fn entity_names(&self) -> Vec<String> {
        self.entities.keys().cloned().collect()
    }

    pub fn entity_quantity(&self) -> usize {
        self.entities.len()
    }

    pub fn has_entity(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Adds an enum; an enum with the same name is replaced.
    pub fn add_enum(&mut self, enumeration: JdlEnum) -> Result<()> {
        let errors = enumeration.errors();
        if !errors.is_empty() {
            return Err(JdlError::invalid_member("enum", &errors));
        }
        self.enums.insert(enumeration.name.clone(), enumeration);
        Ok(())
    }

    pub fn get_enum(&self, name: &str) -> Option<&JdlEnum> {
        self.enums.get(name)
    }

    pub fn has_enum(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    pub fn enums(&self) -> impl Iterator<Item = &JdlEnum> {
        self.enums.values()
    }

    pub fn enum_quantity(&self) -> usize {
        self.enums.len()
    }

    /// Adds a relationship. A relationship with the same identity is kept
    /// and the call is a no-op.
    pub fn add_relationship(&mut self, relationship: JdlRelationship) -> Result<()> {
        let errors = relationship.errors();
        if !errors.is_empty() {
            return Err(JdlError::invalid_member("relationship", &errors));
        }
        if !self.relationships.add(relationship) {
            log::debug!("duplicate relationship ignored");
        }
        Ok(())
    }

    pub fn relationships(&self) -> &JdlRelationships {
        &self.relationships
    }

    pub fn relationship_quantity(&self) -> usize {
        self.relationships.size()
    }

    /// Adds an option, merging its entity names into an existing option of
    /// the same key.
    pub fn add_option(&mut self, option: JdlOption) -> Result<()> {
        let errors = option.errors();
        if !errors.is_empty() {
            return Err(JdlError::invalid_member("option", &errors));
        }
        self.options.add(option);
        Ok(())
    }

    pub fn options(&self) -> Vec<&JdlOption> {
        self.options.options()
    }

    pub fn options_for_name(&self, name: &str) -> Vec<&JdlOption> {
        self.options.options_for_name(name)
    }

    pub fn option_quantity(&self) -> usize {
        self.options.size()
    }

    /// True when a microservice option covers `entity_name`, either through
    /// the wildcard or by naming it.
    pub fn is_entity_in_microservice(&self, entity_name: &str) -> bool {
        self.options
            .options_for_name(MICROSERVICE)
            .into_iter()
            .any(|option| option.applies_to(entity_name))
    }
}

impl fmt::Display for JdlObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.applications.is_empty() {
            for application in self.applications.values() {
                writeln!(f, "{}", application)?;
            }
            writeln!(f)?;
        }
        for entity in self.entities.values() {
            writeln!(f, "{}", entity)?;
        }
        if !self.enums.is_empty() {
            for enumeration in self.enums.values() {
                writeln!(f, "{}", enumeration)?;
            }
            writeln!(f)?;
        }
        if !self.relationships.is_empty() {
            for block in self.relationships.blocks() {
                writeln!(f, "{}", block)?;
            }
            writeln!(f)?;
        }
        for option in self.options.iter() {
            writeln!(f, "{}", option)?;
        }
        Ok(())
    }
}
