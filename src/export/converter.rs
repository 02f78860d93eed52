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

//! # Entity Converter
//!
//! Forward path from the model to per-entity descriptors.
//!
//! A relationship always produces an entry on its source entity. The
//! destination gets an entry when the relationship is bidirectional, and
//! for one-to-many, which implies a many-to-one back reference. The built-in
//! `User` is not an entity of the aggregate and so is never exported.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::Value;

use crate::catalog::field_types;
use crate::catalog::options::{
    ANGULAR_SUFFIX, CLIENT_ROOT_FOLDER, DTO, FILTER, MICROSERVICE, NO_FLUENT_METHOD, PAGINATION,
    SEARCH_ENGINE, SERVICE, SKIP_CLIENT, SKIP_SERVER,
};
use crate::core::{JdlField, JdlObject, JdlRelationship, JdlRelationshipType};
use crate::json::descriptor::{
    JdlEntityApplications, JdlEntityDescriptor, JdlFieldDescriptor, JdlRelationshipDescriptor,
    NO_VALUE,
};
use crate::utils::{camel_case, changelog_date, lower_first, split_injected_field};

#[derive(Clone, Debug)]
pub struct JdlConverterConfig {
    /// First `changelogDate`; each following entity gets one more second.
    pub creation_timestamp: DateTime<Utc>,
}

impl Default for JdlConverterConfig {
    fn default() -> Self {
        Self {
            creation_timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Default)]
pub struct JdlEntityConverter {
    config: JdlConverterConfig,
}

impl JdlEntityConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: JdlConverterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn creation_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.config.creation_timestamp = timestamp;
        self
    }

    /// Entity name -> descriptor, in entity order.
    pub fn convert(&self, jdl: &JdlObject) -> IndexMap<String, JdlEntityDescriptor> {
        let mut descriptors = IndexMap::new();
        for (index, entity) in jdl.entities().enumerate() {
            let mut descriptor = JdlEntityDescriptor::new();
            descriptor.fields = entity
                .fields
                .values()
                .map(|field| convert_field(jdl, field))
                .collect();
            descriptor.relationships = convert_relationships(jdl, &entity.name);
            descriptor.changelog_date =
                Some(changelog_date(self.config.creation_timestamp, index as i64));
            descriptor.javadoc = entity.comment.clone();
            descriptor.entity_table_name = Some(entity.table_name.clone());
            apply_options(jdl, &entity.name, &mut descriptor);
            descriptor.applications = Some(entity_applications(jdl, &entity.name));
            descriptors.insert(entity.name.clone(), descriptor);
        }
        log::debug!("converted {} entities to descriptors", descriptors.len());
        descriptors
    }
}

fn convert_field(jdl: &JdlObject, field: &JdlField) -> JdlFieldDescriptor {
    let mut descriptor = match field_types::blob_content(&field.field_type) {
        Some(content) => {
            let mut d = JdlFieldDescriptor::new(field.name.clone(), field_types::BYTE_ARRAY);
            d.field_type_blob_content = Some(content.to_string());
            d
        }
        None => JdlFieldDescriptor::new(field.name.clone(), field.field_type.clone()),
    };
    descriptor.javadoc = field.comment.clone();
    if let Some(enumeration) = jdl.get_enum(&field.field_type) {
        let values: Vec<&str> = enumeration.values.iter().map(String::as_str).collect();
        descriptor.field_values = Some(values.join(","));
    }
    for validation in field.validations.values() {
        descriptor.field_validate_rules.push(validation.name.clone());
        if let Some(value) = validation.value.clone().filter(|v| !is_blank(v)) {
            descriptor.set_rule_value(&validation.name, value);
        }
    }
    descriptor
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn convert_relationships(jdl: &JdlObject, entity_name: &str) -> Vec<JdlRelationshipDescriptor> {
    let mut descriptors = Vec::new();
    for relationship in jdl.relationships().iter() {
        if relationship.from == entity_name {
            descriptors.push(source_entry(relationship));
        }
        if relationship.to == entity_name && has_destination_entry(relationship) {
            descriptors.push(destination_entry(relationship));
        }
    }
    descriptors
}

fn has_destination_entry(relationship: &JdlRelationship) -> bool {
    relationship.injected_field_in_to.is_some()
        || relationship.relationship_type == JdlRelationshipType::OneToMany
}

fn source_entry(relationship: &JdlRelationship) -> JdlRelationshipDescriptor {
    let injected = relationship
        .injected_field_in_from
        .clone()
        .unwrap_or_else(|| camel_case(&relationship.to));
    let (name, displayed) = split_injected_field(&injected);
    let relationship_type = relationship.relationship_type;
    let mut entry = JdlRelationshipDescriptor::new(
        relationship_type.descriptor_name(),
        name,
        lower_first(&relationship.to),
    );
    entry.javadoc = relationship.comment_in_from.clone();
    entry.other_entity_field = displayed.or_else(|| {
        (relationship_type != JdlRelationshipType::OneToMany).then(|| "id".to_string())
    });
    entry.owner_side = relationship_type.has_owner_side().then_some(true);
    entry.other_entity_relationship_name = Some(match &relationship.injected_field_in_to {
        Some(field) => lower_first(&split_injected_field(field).0),
        None => lower_first(&relationship.from),
    });
    entry.required =
        (relationship.is_injected_field_in_from_required == Some(true)).then_some(true);
    entry
}

fn destination_entry(relationship: &JdlRelationship) -> JdlRelationshipDescriptor {
    let (name, displayed) = match &relationship.injected_field_in_to {
        Some(field) => split_injected_field(field),
        None => (lower_first(&relationship.from), None),
    };
    let relationship_type = relationship.relationship_type.reversed();
    let mut entry = JdlRelationshipDescriptor::new(
        relationship_type.descriptor_name(),
        name,
        lower_first(&relationship.from),
    );
    entry.javadoc = relationship.comment_in_to.clone();
    entry.other_entity_field = displayed.or_else(|| {
        (relationship_type == JdlRelationshipType::ManyToOne).then(|| "id".to_string())
    });
    entry.owner_side = relationship_type.has_owner_side().then_some(false);
    let source_field = relationship
        .injected_field_in_from
        .clone()
        .unwrap_or_else(|| camel_case(&relationship.to));
    entry.other_entity_relationship_name = Some(split_injected_field(&source_field).0);
    entry.required = (relationship.is_injected_field_in_to_required == Some(true)).then_some(true);
    entry
}

fn option_value(jdl: &JdlObject, option_name: &str, entity_name: &str) -> Option<String> {
    jdl.options_for_name(option_name)
        .into_iter()
        .find(|option| option.applies_to(entity_name))
        .and_then(|option| option.value().map(str::to_string))
}

fn option_enabled(jdl: &JdlObject, option_name: &str, entity_name: &str) -> bool {
    jdl.options_for_name(option_name)
        .into_iter()
        .any(|option| option.applies_to(entity_name))
}

fn apply_options(jdl: &JdlObject, entity_name: &str, descriptor: &mut JdlEntityDescriptor) {
    let or_no = |value: Option<String>| Some(value.unwrap_or_else(|| NO_VALUE.to_string()));
    descriptor.dto = or_no(option_value(jdl, DTO, entity_name));
    descriptor.pagination = or_no(option_value(jdl, PAGINATION, entity_name));
    descriptor.service = or_no(option_value(jdl, SERVICE, entity_name));
    descriptor.search_engine = option_value(jdl, SEARCH_ENGINE, entity_name);
    descriptor.jpa_metamodel_filtering = Some(option_enabled(jdl, FILTER, entity_name));
    descriptor.fluent_methods = Some(!option_enabled(jdl, NO_FLUENT_METHOD, entity_name));
    descriptor.client_root_folder = option_value(jdl, CLIENT_ROOT_FOLDER, entity_name);
    descriptor.microservice_name = option_value(jdl, MICROSERVICE, entity_name);
    descriptor.angular_suffix = option_value(jdl, ANGULAR_SUFFIX, entity_name);
    descriptor.skip_client = option_enabled(jdl, SKIP_CLIENT, entity_name).then_some(true);
    descriptor.skip_server = option_enabled(jdl, SKIP_SERVER, entity_name).then_some(true);
}

fn entity_applications(jdl: &JdlObject, entity_name: &str) -> JdlEntityApplications {
    if jdl.application_quantity() == 0 {
        return JdlEntityApplications::All;
    }
    JdlEntityApplications::Names(
        jdl.applications()
            .filter(|application| application.entity_names.contains(entity_name))
            .filter_map(|application| application.base_name().map(str::to_string))
            .collect(),
    )
}
