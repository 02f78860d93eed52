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

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::validations;

/// A named constraint attached to a field, e.g. `required`, `min(42)` or
/// `pattern(/[A-z0-9]/)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlValidation {
    pub name: String,
    pub value: Option<Value>,
}

impl Default for JdlValidation {
    fn default() -> Self {
        Self {
            name: validations::REQUIRED.to_string(),
            value: None,
        }
    }
}

impl JdlValidation {
    pub fn new(name: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Validation without a value, such as `required`.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Value rendered as text; strings lose their JSON quotes.
    pub fn value_text(&self) -> Option<String> {
        match &self.value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// Every structural problem, empty when valid.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("No validation name".to_string());
            return errors;
        }
        if !validations::exists(&self.name) {
            errors.push(format!("Wrong validation name '{}'", self.name));
        } else if validations::needs_value(&self.name) && self.value_text().is_none() {
            errors.push(format!("No value for validation '{}'", self.name));
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

impl fmt::Display for JdlValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value_text() {
            None => write!(f, "{}", self.name),
            Some(value) if self.name == validations::PATTERN => {
                write!(f, "{}(/{}/)", self.name, value)
            }
            Some(value) => write!(f, "{}({})", self.name, value),
        }
    }
}
