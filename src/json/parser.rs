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

//! # JSON Parser
//!
//! Rebuilds a [`JdlObject`] from per-entity descriptors.
//!
//! Each descriptor only knows its own end of a relationship, so pairing runs
//! in two passes. The first indexes every end by owning entity and
//! relationship name. The second walks the ends in input order and looks up
//! the complementary end through `otherEntityName` and
//! `otherEntityRelationshipName`. A pair becomes one bidirectional
//! relationship, taken from the one-to-many end or the owner end; an end
//! without a partner becomes a unidirectional relationship.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::catalog::options::{
    ANGULAR_SUFFIX, CLIENT_ROOT_FOLDER, DTO, FILTER, MICROSERVICE, NO_FLUENT_METHOD, PAGINATION,
    SEARCH_ENGINE, SERVICE, SKIP_CLIENT, SKIP_SERVER, SKIP_USER_MANAGEMENT,
};
use crate::catalog::{field_types, USER_ENTITY_NAME};
use crate::core::{
    JdlEntity, JdlEnum, JdlField, JdlObject, JdlOption, JdlRelationship, JdlRelationshipType,
    JdlValidation,
};
use crate::errors::{JdlError, Result};
use crate::json::descriptor::{set_value, JdlEntityDescriptor, JdlRelationshipDescriptor};
use crate::utils::{lower_first, upper_first};

/// Flags of the generator configuration turned into unary options.
const SERVER_OPTIONS: &[&str] = &[SKIP_CLIENT, SKIP_SERVER, SKIP_USER_MANAGEMENT];

#[derive(Debug, Default)]
pub struct JdlJsonParser;

impl JdlJsonParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses `entities` (entity name -> descriptor) into `into`, or into a
    /// fresh aggregate.
    pub fn parse_entities(
        &self,
        entities: &IndexMap<String, JdlEntityDescriptor>,
        into: Option<JdlObject>,
    ) -> Result<JdlObject> {
        let mut jdl = into.unwrap_or_default();
        if entities.contains_key(USER_ENTITY_NAME)
            && jdl.options_for_name(SKIP_USER_MANAGEMENT).is_empty()
        {
            return Err(JdlError::illegal_name(
                "User entity name is reserved if skipUserManagement is not set.",
            ));
        }
        for (name, descriptor) in entities {
            for enumeration in parse_enums(descriptor) {
                jdl.add_enum(enumeration)?;
            }
            jdl.add_entity(parse_entity(name, descriptor))?;
        }
        for relationship in pair_relationships(entities) {
            jdl.add_relationship(relationship)?;
        }
        for (name, descriptor) in entities {
            fold_options(&mut jdl, name, descriptor)?;
        }
        log::debug!(
            "parsed {} entity descriptors into {} relationships",
            entities.len(),
            jdl.relationship_quantity()
        );
        Ok(jdl)
    }

    /// Turns the generator configuration (`generator-simlife` section) into
    /// unary options over every entity.
    pub fn parse_server_options(&self, config: &Map<String, Value>) -> Result<JdlObject> {
        let mut jdl = JdlObject::new();
        for name in SERVER_OPTIONS {
            if config.get(*name).and_then(Value::as_bool) == Some(true) {
                jdl.add_option(JdlOption::unary(*name)?)?;
            }
        }
        Ok(jdl)
    }
}

fn parse_entity(name: &str, descriptor: &JdlEntityDescriptor) -> JdlEntity {
    let table_name = descriptor
        .entity_table_name
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| name.to_string());
    let mut entity = JdlEntity::new(name).with_table_name(table_name);
    entity.comment = descriptor.javadoc.clone();
    for declared in &descriptor.fields {
        let field_type = if declared.field_type == field_types::BYTE_ARRAY {
            declared
                .field_type_blob_content
                .as_deref()
                .and_then(field_types::blob_type)
                .unwrap_or(field_types::BLOB)
                .to_string()
        } else {
            declared.field_type.clone()
        };
        let mut field = JdlField::new(declared.field_name.clone(), field_type);
        field.comment = declared.javadoc.clone();
        for rule in &declared.field_validate_rules {
            field.add_validation(JdlValidation::new(
                rule.clone(),
                declared.rule_value(rule).cloned(),
            ));
        }
        entity.add_field(field);
    }
    entity
}

fn parse_enums(descriptor: &JdlEntityDescriptor) -> Vec<JdlEnum> {
    descriptor
        .fields
        .iter()
        .filter_map(|field| {
            field.field_values.as_ref().map(|values| {
                JdlEnum::new(
                    field.field_type.clone(),
                    values
                        .split(',')
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(str::to_string),
                )
            })
        })
        .collect()
}

/// One end of a relationship as stored in an entity descriptor.
struct RelationshipEnd<'a> {
    entity: &'a str,
    relationship_type: JdlRelationshipType,
    descriptor: &'a JdlRelationshipDescriptor,
}

impl RelationshipEnd<'_> {
    /// `relationshipName`, plus `(otherEntityField)` unless it is `id`.
    fn injected_field(&self) -> String {
        match self.descriptor.other_entity_field.as_deref() {
            Some(field) if field != "id" && !field.is_empty() => {
                format!("{}({})", self.descriptor.relationship_name, field)
            }
            _ => self.descriptor.relationship_name.clone(),
        }
    }

    fn is_owner(&self) -> bool {
        self.descriptor.owner_side == Some(true)
    }

    fn is_source(&self) -> bool {
        self.relationship_type == JdlRelationshipType::OneToMany
            || (self.relationship_type.has_owner_side() && self.is_owner())
    }
}

fn resolve_target(
    entities: &IndexMap<String, JdlEntityDescriptor>,
    other_entity_name: &str,
) -> Option<String> {
    let name = upper_first(other_entity_name);
    if entities.contains_key(&name) || JdlEntity::is_user(&name) {
        Some(name)
    } else {
        None
    }
}

fn pair_relationships(entities: &IndexMap<String, JdlEntityDescriptor>) -> Vec<JdlRelationship> {
    let mut ends: Vec<RelationshipEnd> = Vec::new();
    for (entity, descriptor) in entities {
        for relationship in &descriptor.relationships {
            match JdlRelationshipType::from_descriptor_name(&relationship.relationship_type) {
                Some(relationship_type) => ends.push(RelationshipEnd {
                    entity,
                    relationship_type,
                    descriptor: relationship,
                }),
                None => log::warn!(
                    "unknown relationship type '{}' in entity '{}'",
                    relationship.relationship_type,
                    entity
                ),
            }
        }
    }

    let index: HashMap<(String, &str), usize> = ends
        .iter()
        .enumerate()
        .map(|(i, end)| {
            (
                (lower_first(end.entity), end.descriptor.relationship_name.as_str()),
                i,
            )
        })
        .collect();

    // Source ends claim their partners first, so a many-to-one end without a
    // back-reference is still found by its one-to-many side.
    let order = (0..ends.len())
        .filter(|&i| ends[i].is_source())
        .chain((0..ends.len()).filter(|&i| !ends[i].is_source()));

    let mut used = vec![false; ends.len()];
    let mut relationships = Vec::new();
    for i in order {
        if used[i] {
            continue;
        }
        used[i] = true;
        let end = &ends[i];
        let Some(target) = resolve_target(entities, &end.descriptor.other_entity_name) else {
            log::warn!(
                "relationship '{}' of '{}' points at unknown entity '{}', skipped",
                end.descriptor.relationship_name,
                end.entity,
                end.descriptor.other_entity_name
            );
            continue;
        };
        let partner = end
            .descriptor
            .other_entity_relationship_name
            .as_deref()
            .and_then(|name| index.get(&(lower_first(&target), name)).copied())
            .filter(|&j| !used[j] && is_partner(end, &ends[j]));

        let relationship = match partner {
            Some(j) => {
                used[j] = true;
                let other = &ends[j];
                let other_is_source = other.relationship_type == JdlRelationshipType::OneToMany
                    || (other.relationship_type.has_owner_side()
                        && other.is_owner()
                        && !end.is_owner());
                if other_is_source {
                    merge(other, Some(end))
                } else {
                    merge(end, Some(other))
                }
            }
            None => {
                let mut relationship = merge(end, None);
                relationship.to = target;
                relationship
            }
        };
        relationships.push(relationship);
    }
    relationships
}

fn is_partner(end: &RelationshipEnd, candidate: &RelationshipEnd) -> bool {
    if candidate.relationship_type != end.relationship_type.reversed() {
        return false;
    }
    if lower_first(&candidate.descriptor.other_entity_name) != lower_first(end.entity) {
        return false;
    }
    match candidate.descriptor.other_entity_relationship_name.as_deref() {
        Some(back) => back == end.descriptor.relationship_name,
        None => true,
    }
}

fn merge(source: &RelationshipEnd, destination: Option<&RelationshipEnd>) -> JdlRelationship {
    let to = destination.map(|d| d.entity.to_string()).unwrap_or_default();
    let mut relationship = JdlRelationship::new(source.relationship_type, source.entity, to);
    relationship.injected_field_in_from = Some(source.injected_field());
    relationship.comment_in_from = source.descriptor.javadoc.clone();
    relationship.is_injected_field_in_from_required =
        source.descriptor.is_required().then_some(true);
    if let Some(destination) = destination {
        relationship.injected_field_in_to = Some(destination.injected_field());
        relationship.comment_in_to = destination.descriptor.javadoc.clone();
        relationship.is_injected_field_in_to_required =
            destination.descriptor.is_required().then_some(true);
    }
    relationship
}

fn add_scoped(jdl: &mut JdlObject, option: JdlOption, entity_name: &str) -> Result<()> {
    jdl.add_option(option.with_entity_names([entity_name]))
}

/// Folds the option keys of one descriptor into per-(name, value) options.
fn fold_options(jdl: &mut JdlObject, name: &str, descriptor: &JdlEntityDescriptor) -> Result<()> {
    let binaries = [
        (DTO, set_value(&descriptor.dto)),
        (SERVICE, set_value(&descriptor.service)),
        (PAGINATION, set_value(&descriptor.pagination)),
        (SEARCH_ENGINE, set_value(&descriptor.search_engine)),
        (MICROSERVICE, set_value(&descriptor.microservice_name)),
        (ANGULAR_SUFFIX, set_value(&descriptor.angular_suffix)),
        (CLIENT_ROOT_FOLDER, set_value(&descriptor.client_root_folder)),
    ];
    for (option_name, value) in binaries {
        if let Some(value) = value {
            add_scoped(jdl, JdlOption::binary(option_name, value)?, name)?;
        }
    }
    let unaries = [
        (NO_FLUENT_METHOD, descriptor.fluent_methods == Some(false)),
        (FILTER, descriptor.jpa_metamodel_filtering == Some(true)),
        (SKIP_CLIENT, descriptor.skip_client == Some(true)),
        (SKIP_SERVER, descriptor.skip_server == Some(true)),
    ];
    for (option_name, enabled) in unaries {
        if enabled {
            add_scoped(jdl, JdlOption::unary(option_name)?, name)?;
        }
    }
    Ok(())
}
