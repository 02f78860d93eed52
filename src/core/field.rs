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

use crate::core::validation::JdlValidation;
use crate::utils::comment_block;

/// An entity attribute with its type, optional comment and validations keyed
/// by validation name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub comment: Option<String>,
    pub validations: IndexMap<String, JdlValidation>,
}

impl JdlField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            comment: None,
            validations: IndexMap::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_validation(mut self, validation: JdlValidation) -> Self {
        self.add_validation(validation);
        self
    }

    /// Adds or replaces the validation of the same name.
    pub fn add_validation(&mut self, validation: JdlValidation) {
        self.validations.insert(validation.name.clone(), validation);
    }

    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("No field name".to_string());
        }
        if self.field_type.is_empty() {
            errors.push("No field type".to_string());
        }
        for (index, validation) in self.validations.values().enumerate() {
            for error in validation.errors() {
                errors.push(format!("For validation #{}: {}", index + 1, error));
            }
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

impl fmt::Display for JdlField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            f.write_str(&comment_block(comment, ""))?;
        }
        write!(f, "{} {}", self.name, self.field_type)?;
        for validation in self.validations.values() {
            write!(f, " {}", validation)?;
        }
        Ok(())
    }
}
