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

//! # Entity Descriptors
//!
//! Serde model of the per-entity JSON files kept under `.simlife/`. Key
//! order of the structs is the key order on disk. Keys this model does not
//! name are collected in `extra` and written back untouched; validation
//! values (`fieldValidateRulesMin`, …) live there too.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::catalog::validations;
use crate::catalog::ALL_ENTITIES;

/// Value meaning "option not set" for dto, service and pagination.
pub const NO_VALUE: &str = "no";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlFieldDescriptor {
    pub field_name: String,
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_values: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type_blob_content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_validate_rules: Vec<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl JdlFieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            field_name: name.into(),
            field_type: field_type.into(),
            ..Self::default()
        }
    }

    /// Value stored for validation `rule`, e.g. `fieldValidateRulesMin`.
    pub fn rule_value(&self, rule: &str) -> Option<&Value> {
        self.extra.get(&validations::descriptor_key(rule))
    }

    pub fn set_rule_value(&mut self, rule: &str, value: Value) {
        self.extra.insert(validations::descriptor_key(rule), value);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlRelationshipDescriptor {
    pub relationship_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<String>,
    pub relationship_name: String,
    pub other_entity_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_entity_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_side: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_entity_relationship_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl JdlRelationshipDescriptor {
    pub fn new(
        relationship_type: impl Into<String>,
        relationship_name: impl Into<String>,
        other_entity_name: impl Into<String>,
    ) -> Self {
        Self {
            relationship_type: relationship_type.into(),
            relationship_name: relationship_name.into(),
            other_entity_name: other_entity_name.into(),
            ..Self::default()
        }
    }

    /// Reads `required: true` as well as the `relationshipValidateRules`
    /// form (a string or an array containing `required`).
    pub fn is_required(&self) -> bool {
        if self.required == Some(true) {
            return true;
        }
        match self.extra.get("relationshipValidateRules") {
            Some(Value::String(rule)) => rule == validations::REQUIRED,
            Some(Value::Array(rules)) => rules
                .iter()
                .any(|r| r.as_str() == Some(validations::REQUIRED)),
            _ => false,
        }
    }
}

/// `applications` key: `"*"` or a list of application base names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JdlEntityApplications {
    All,
    Names(Vec<String>),
}

impl JdlEntityApplications {
    pub fn includes(&self, base_name: &str) -> bool {
        match self {
            JdlEntityApplications::All => true,
            JdlEntityApplications::Names(names) => names.iter().any(|n| n == base_name),
        }
    }
}

impl Serialize for JdlEntityApplications {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JdlEntityApplications::All => serializer.serialize_str(ALL_ENTITIES),
            JdlEntityApplications::Names(names) => names.serialize(serializer),
        }
    }
}

struct ApplicationsVisitor;

impl<'de> Visitor<'de> for ApplicationsVisitor {
    type Value = JdlEntityApplications;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"*\" or a list of application names")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value == ALL_ENTITIES {
            Ok(JdlEntityApplications::All)
        } else {
            Ok(JdlEntityApplications::Names(vec![value.to_string()]))
        }
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut names = Vec::new();
        while let Some(name) = seq.next_element::<String>()? {
            names.push(name);
        }
        Ok(JdlEntityApplications::Names(names))
    }
}

impl<'de> Deserialize<'de> for JdlEntityApplications {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ApplicationsVisitor)
    }
}

/// One `.simlife/<Entity>.json` file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlEntityDescriptor {
    #[serde(default)]
    pub fields: Vec<JdlFieldDescriptor>,
    #[serde(default)]
    pub relationships: Vec<JdlRelationshipDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jpa_metamodel_filtering: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluent_methods: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_root_folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications: Option<JdlEntityApplications>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microservice_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_client: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_server: Option<bool>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl JdlEntityDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(source: &str) -> crate::errors::Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

/// `None` for absent values and for the `"no"` marker.
pub fn set_value(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != NO_VALUE && *v != "false")
}
