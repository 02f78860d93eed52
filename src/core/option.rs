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

//! # Generator Options
//!
//! Options are scoped over entity names. A scope defaults to the wildcard
//! `{'*'}` and may exclude names. Unary options are flags such as
//! `skipClient`; binary options carry a value checked against the catalogue,
//! such as `dto` with `mapstruct`.
//!
//! Inside [`JdlOptions`] an option is keyed by its name (unary) or by
//! `name_value` (binary). Adding an option whose key already exists merges
//! the scopes instead of replacing the option.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::catalog::options as catalog;
use crate::catalog::ALL_ENTITIES;
use crate::errors::{JdlError, Result};

/// Entity names an option applies to, minus the excluded ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JdlOptionScope {
    pub entity_names: IndexSet<String>,
    pub excluded_names: IndexSet<String>,
}

impl Default for JdlOptionScope {
    fn default() -> Self {
        let mut entity_names = IndexSet::new();
        entity_names.insert(ALL_ENTITIES.to_string());
        Self {
            entity_names,
            excluded_names: IndexSet::new(),
        }
    }
}

impl JdlOptionScope {
    pub fn is_wildcard(&self) -> bool {
        self.entity_names.len() == 1 && self.entity_names.contains(ALL_ENTITIES)
    }

    /// Adds a name; the lone wildcard is replaced by the first explicit name.
    pub fn add_entity_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() {
            return false;
        }
        if self.is_wildcard() && name != ALL_ENTITIES {
            self.entity_names.clear();
        }
        self.entity_names.insert(name)
    }

    pub fn exclude_entity_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() {
            return false;
        }
        self.excluded_names.insert(name)
    }

    /// Unions both name sets of `other` into this scope.
    pub fn merge(&mut self, other: &JdlOptionScope) {
        self.entity_names.extend(other.entity_names.iter().cloned());
        self.excluded_names.extend(other.excluded_names.iter().cloned());
    }

    pub fn applies_to(&self, entity_name: &str) -> bool {
        if self.excluded_names.contains(entity_name) {
            return false;
        }
        self.entity_names.contains(ALL_ENTITIES) || self.entity_names.contains(entity_name)
    }

    fn render(&self) -> String {
        let names: Vec<&str> = self.entity_names.iter().map(String::as_str).collect();
        names.join(", ")
    }

    fn render_exclusions(&self) -> String {
        if self.excluded_names.is_empty() {
            return String::new();
        }
        let names: Vec<&str> = self.excluded_names.iter().map(String::as_str).collect();
        format!(" except {}", names.join(", "))
    }
}

/// A flag option such as `skipClient` or `noFluentMethod`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JdlUnaryOption {
    pub name: String,
    pub scope: JdlOptionScope,
}

impl JdlUnaryOption {
    /// Fails with [`JdlError::IllegalOption`] for names outside the unary
    /// catalogue.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !catalog::is_unary(&name) {
            return Err(JdlError::illegal_option(format!(
                "The option's name must be valid, got '{}'.",
                name
            )));
        }
        Ok(Self {
            name,
            scope: JdlOptionScope::default(),
        })
    }
}

/// An option carrying a value, such as `dto` with `mapstruct`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JdlBinaryOption {
    pub name: String,
    pub value: String,
    pub scope: JdlOptionScope,
}

impl JdlBinaryOption {
    /// Fails with [`JdlError::IllegalOption`] when the name is not a binary
    /// option or the value is not legal for it.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let value = value.into();
        if !catalog::is_binary(&name) {
            return Err(JdlError::illegal_option(format!(
                "The option's name must be valid, got '{}'.",
                name
            )));
        }
        if !catalog::is_binary_value_valid(&name, &value) {
            return Err(JdlError::illegal_option(format!(
                "The option's name and value must be valid, got value '{}' for '{}'.",
                value, name
            )));
        }
        Ok(Self {
            name,
            value,
            scope: JdlOptionScope::default(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum JdlOption {
    Unary(JdlUnaryOption),
    Binary(JdlBinaryOption),
}

impl From<JdlUnaryOption> for JdlOption {
    fn from(option: JdlUnaryOption) -> Self {
        JdlOption::Unary(option)
    }
}

impl From<JdlBinaryOption> for JdlOption {
    fn from(option: JdlBinaryOption) -> Self {
        JdlOption::Binary(option)
    }
}

impl JdlOption {
    pub fn unary(name: impl Into<String>) -> Result<Self> {
        JdlUnaryOption::new(name).map(JdlOption::Unary)
    }

    pub fn binary(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        JdlBinaryOption::new(name, value).map(JdlOption::Binary)
    }

    /// Replaces the entity names of the scope.
    pub fn with_entity_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope_mut().entity_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excluded_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope_mut().excluded_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        match self {
            JdlOption::Unary(option) => &option.name,
            JdlOption::Binary(option) => &option.name,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            JdlOption::Unary(_) => None,
            JdlOption::Binary(option) => Some(&option.value),
        }
    }

    pub fn scope(&self) -> &JdlOptionScope {
        match self {
            JdlOption::Unary(option) => &option.scope,
            JdlOption::Binary(option) => &option.scope,
        }
    }

    pub fn scope_mut(&mut self) -> &mut JdlOptionScope {
        match self {
            JdlOption::Unary(option) => &mut option.scope,
            JdlOption::Binary(option) => &mut option.scope,
        }
    }

    pub fn entity_names(&self) -> &IndexSet<String> {
        &self.scope().entity_names
    }

    pub fn excluded_names(&self) -> &IndexSet<String> {
        &self.scope().excluded_names
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, JdlOption::Unary(_))
    }

    pub fn applies_to(&self, entity_name: &str) -> bool {
        self.scope().applies_to(entity_name)
    }

    /// Collection key: `name` for unary options, `name_value` for binary ones.
    pub fn key(&self) -> String {
        match self {
            JdlOption::Unary(option) => option.name.clone(),
            JdlOption::Binary(option) => format!("{}_{}", option.name, option.value),
        }
    }

    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name().is_empty() {
            errors.push("No option name".to_string());
        }
        if self.entity_names().is_empty() {
            errors.push("No entity names".to_string());
        }
        if let JdlOption::Binary(option) = self {
            if option.value.is_empty() {
                errors.push("No option value".to_string());
            }
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

impl fmt::Display for JdlOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JdlOption::Unary(option) => write!(
                f,
                "{} {}{}",
                option.name,
                option.scope.render(),
                option.scope.render_exclusions()
            ),
            JdlOption::Binary(option) => write!(
                f,
                "{} {} with {}{}",
                catalog::keyword_for(&option.name),
                option.scope.render(),
                option.value,
                option.scope.render_exclusions()
            ),
        }
    }
}

/// Options keyed by [`JdlOption::key`] in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JdlOptions {
    options: IndexMap<String, JdlOption>,
}

impl JdlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `option`, or merges its scope into the option sharing its key.
    pub fn add(&mut self, option: JdlOption) {
        match self.options.get_mut(&option.key()) {
            Some(existing) => existing.scope_mut().merge(option.scope()),
            None => {
                self.options.insert(option.key(), option);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&JdlOption> {
        self.options.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    pub fn options(&self) -> Vec<&JdlOption> {
        self.options.values().collect()
    }

    pub fn options_for_name(&self, name: &str) -> Vec<&JdlOption> {
        self.options.values().filter(|o| o.name() == name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JdlOption> {
        self.options.values()
    }

    pub fn size(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
