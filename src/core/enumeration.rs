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

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::utils::comment_block;

/// A closed set of symbolic values usable as a field type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlEnum {
    pub name: String,
    pub values: IndexSet<String>,
    pub comment: Option<String>,
}

impl JdlEnum {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn add_value(&mut self, value: impl Into<String>) {
        self.values.insert(value.into());
    }

    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("No enumeration name".to_string());
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

impl fmt::Display for JdlEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            f.write_str(&comment_block(comment, ""))?;
        }
        let values: Vec<&str> = self.values.iter().map(String::as_str).collect();
        write!(f, "enum {} {{\n  {}\n}}", self.name, values.join(",\n  "))
    }
}
