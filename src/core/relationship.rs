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

//! Relationships between entities and the cardinality-keyed collection that
//! deduplicates them by identity.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::JdlError;
use crate::utils::comment_block;

/// Relationship cardinality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JdlRelationshipType {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl JdlRelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JdlRelationshipType::OneToOne => "OneToOne",
            JdlRelationshipType::OneToMany => "OneToMany",
            JdlRelationshipType::ManyToOne => "ManyToOne",
            JdlRelationshipType::ManyToMany => "ManyToMany",
        }
    }

    /// Name used by JSON descriptors: `one-to-many`.
    pub fn descriptor_name(&self) -> &'static str {
        match self {
            JdlRelationshipType::OneToOne => "one-to-one",
            JdlRelationshipType::OneToMany => "one-to-many",
            JdlRelationshipType::ManyToOne => "many-to-one",
            JdlRelationshipType::ManyToMany => "many-to-many",
        }
    }

    pub fn from_descriptor_name(name: &str) -> Option<Self> {
        match name {
            "one-to-one" => Some(JdlRelationshipType::OneToOne),
            "one-to-many" => Some(JdlRelationshipType::OneToMany),
            "many-to-one" => Some(JdlRelationshipType::ManyToOne),
            "many-to-many" => Some(JdlRelationshipType::ManyToMany),
            _ => None,
        }
    }

    /// Cardinality seen from the other end.
    pub fn reversed(&self) -> Self {
        match self {
            JdlRelationshipType::OneToMany => JdlRelationshipType::ManyToOne,
            JdlRelationshipType::ManyToOne => JdlRelationshipType::OneToMany,
            other => *other,
        }
    }

    /// Whether the end owning the join can be chosen (one-to-one and
    /// many-to-many).
    pub fn has_owner_side(&self) -> bool {
        matches!(
            self,
            JdlRelationshipType::OneToOne | JdlRelationshipType::ManyToMany
        )
    }
}

impl fmt::Display for JdlRelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JdlRelationshipType {
    type Err = JdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OneToOne" => Ok(JdlRelationshipType::OneToOne),
            "OneToMany" => Ok(JdlRelationshipType::OneToMany),
            "ManyToOne" => Ok(JdlRelationshipType::ManyToOne),
            "ManyToMany" => Ok(JdlRelationshipType::ManyToMany),
            other => Self::from_descriptor_name(other).ok_or_else(|| {
                JdlError::validation(format!("Unknown relationship type '{}'.", other))
            }),
        }
    }
}

/// A directed association between two entities, referenced by name.
///
/// Injected fields may carry the displayed field of the other end in
/// parentheses, e.g. `department(foo)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlRelationship {
    pub relationship_type: JdlRelationshipType,
    pub from: String,
    pub to: String,
    pub injected_field_in_from: Option<String>,
    pub injected_field_in_to: Option<String>,
    pub is_injected_field_in_from_required: Option<bool>,
    pub is_injected_field_in_to_required: Option<bool>,
    pub comment_in_from: Option<String>,
    pub comment_in_to: Option<String>,
    pub owner_side: Option<bool>,
}

impl JdlRelationship {
    pub fn new(
        relationship_type: JdlRelationshipType,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            relationship_type,
            from: from.into(),
            to: to.into(),
            injected_field_in_from: None,
            injected_field_in_to: None,
            is_injected_field_in_from_required: None,
            is_injected_field_in_to_required: None,
            comment_in_from: None,
            comment_in_to: None,
            owner_side: None,
        }
    }

    pub fn with_injected_field_in_from(mut self, field: impl Into<String>) -> Self {
        self.injected_field_in_from = Some(field.into());
        self
    }

    pub fn with_injected_field_in_to(mut self, field: impl Into<String>) -> Self {
        self.injected_field_in_to = Some(field.into());
        self
    }

    pub fn with_comment_in_from(mut self, comment: impl Into<String>) -> Self {
        self.comment_in_from = Some(comment.into());
        self
    }

    pub fn with_comment_in_to(mut self, comment: impl Into<String>) -> Self {
        self.comment_in_to = Some(comment.into());
        self
    }

    /// Identity: `${type}_${from}{injectedFieldInFrom}_${to}{injectedFieldInTo}`,
    /// brace segments omitted when the field is absent.
    pub fn id(&self) -> String {
        let mut id = format!("{}_{}", self.relationship_type, self.from);
        if let Some(field) = &self.injected_field_in_from {
            id.push_str(&format!("{{{}}}", field));
        }
        id.push_str(&format!("_{}", self.to));
        if let Some(field) = &self.injected_field_in_to {
            id.push_str(&format!("{{{}}}", field));
        }
        id
    }

    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.from.is_empty() {
            errors.push("No source entity".to_string());
        }
        if self.to.is_empty() {
            errors.push("No destination entity".to_string());
        }
        if self.injected_field_in_from.is_none() && self.injected_field_in_to.is_none() {
            errors.push("No injected field in source or destination".to_string());
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Body line(s) of this relationship inside a `relationship` block.
    pub(crate) fn member_text(&self) -> String {
        let mut text = String::new();
        if let Some(comment) = &self.comment_in_from {
            text.push_str(&comment_block(comment, ""));
        }
        text.push_str(&self.from);
        push_injected(
            &mut text,
            self.injected_field_in_from.as_deref(),
            self.is_injected_field_in_from_required,
        );
        text.push_str(" to");
        match &self.comment_in_to {
            Some(comment) => {
                text.push('\n');
                text.push_str(&comment_block(comment, ""));
            }
            None => text.push(' '),
        }
        text.push_str(&self.to);
        push_injected(
            &mut text,
            self.injected_field_in_to.as_deref(),
            self.is_injected_field_in_to_required,
        );
        text
    }
}

fn push_injected(text: &mut String, field: Option<&str>, required: Option<bool>) {
    if let Some(field) = field {
        text.push('{');
        text.push_str(field);
        if required == Some(true) {
            text.push_str(" required");
        }
        text.push('}');
    }
}

fn relationship_block(relationship_type: JdlRelationshipType, members: &[String]) -> String {
    let body: Vec<String> = members
        .iter()
        .map(|member| {
            member
                .lines()
                .map(|line| format!("  {}", line))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();
    format!("relationship {} {{\n{}\n}}", relationship_type, body.join(",\n"))
}

impl fmt::Display for JdlRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&relationship_block(
            self.relationship_type,
            &[self.member_text()],
        ))
    }
}

/// Relationships grouped by cardinality, then by identity. Both levels keep
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JdlRelationships {
    relationships: IndexMap<JdlRelationshipType, IndexMap<String, JdlRelationship>>,
}

impl JdlRelationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `relationship` unless one with the same identity exists.
    /// Returns whether it was inserted.
    pub fn add(&mut self, relationship: JdlRelationship) -> bool {
        let by_id = self
            .relationships
            .entry(relationship.relationship_type)
            .or_default();
        let id = relationship.id();
        if by_id.contains_key(&id) {
            return false;
        }
        by_id.insert(id, relationship);
        true
    }

    pub fn get(&self, id: &str) -> Option<&JdlRelationship> {
        self.relationships.values().find_map(|by_id| by_id.get(id))
    }

    pub fn of_type(&self, relationship_type: JdlRelationshipType) -> Vec<&JdlRelationship> {
        self.relationships
            .get(&relationship_type)
            .map(|by_id| by_id.values().collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JdlRelationship> {
        self.relationships.values().flat_map(|by_id| by_id.values())
    }

    pub fn ids(&self) -> Vec<String> {
        self.iter().map(JdlRelationship::id).collect()
    }

    pub fn size(&self) -> usize {
        self.relationships.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// One `relationship <Type> { … }` block per non-empty cardinality.
    pub fn blocks(&self) -> Vec<String> {
        self.relationships
            .iter()
            .filter(|(_, by_id)| !by_id.is_empty())
            .map(|(relationship_type, by_id)| {
                let members: Vec<String> =
                    by_id.values().map(JdlRelationship::member_text).collect();
                relationship_block(*relationship_type, &members)
            })
            .collect()
    }
}
