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

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{USER_ENTITY_NAME, USER_TABLE_NAME};
use crate::core::field::JdlField;
use crate::utils::comment_block;

/// A persistent domain object: a name, a backing table and ordered fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlEntity {
    pub name: String,
    pub table_name: String,
    pub comment: Option<String>,
    pub fields: IndexMap<String, JdlField>,
}

impl JdlEntity {
    /// Creates an entity whose table name equals its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            table_name: name.clone(),
            name,
            comment: None,
            fields: IndexMap::new(),
        }
    }

    /// The built-in `User` entity. It is never declared, only referenced.
    pub fn user() -> Self {
        Self::new(USER_ENTITY_NAME).with_table_name(USER_TABLE_NAME)
    }

    pub fn is_user(name: &str) -> bool {
        name == USER_ENTITY_NAME
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_field(mut self, field: JdlField) -> Self {
        self.add_field(field);
        self
    }

    /// Adds or replaces the field of the same name, keeping its position.
    pub fn add_field(&mut self, field: JdlField) {
        self.fields.insert(field.name.clone(), field);
    }

    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("No entity name".to_string());
        }
        if self.table_name.is_empty() {
            errors.push("No table name".to_string());
        }
        for (index, field) in self.fields.values().enumerate() {
            for error in field.errors() {
                errors.push(format!("For field #{}: {}", index + 1, error));
            }
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

impl fmt::Display for JdlEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            f.write_str(&comment_block(comment, ""))?;
        }
        write!(f, "entity {}", self.name)?;
        if self.table_name != self.name {
            write!(f, " ({})", self.table_name)?;
        }
        if self.fields.is_empty() {
            return Ok(());
        }
        let fields: Vec<String> = self
            .fields
            .values()
            .map(|field| {
                field
                    .to_string()
                    .lines()
                    .map(|line| format!("  {}", line))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();
        write!(f, " {{\n{}\n}}", fields.join(",\n"))
    }
}
