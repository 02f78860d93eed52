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

//! Structural equality of entity descriptors, used to skip rewriting
//! unchanged files. `changelogDate` never takes part in the comparison.

use serde::Serialize;
use serde_json::Value;

use crate::json::descriptor::JdlEntityDescriptor;

/// True when both descriptors describe the same entity.
///
/// Fields and relationships must match one to one, in order, with the same
/// number of keys and equal values. The option keys dto, service,
/// pagination, searchEngine, entityTableName and javadoc must be identical.
/// A missing `jpaMetamodelFiltering` counts as `false`.
pub fn are_entities_equal(first: &JdlEntityDescriptor, second: &JdlEntityDescriptor) -> bool {
    same_entries(&first.fields, &second.fields)
        && same_entries(&first.relationships, &second.relationships)
        && same_options(first, second)
}

fn same_entries<T: Serialize>(first: &[T], second: &[T]) -> bool {
    if first.len() != second.len() {
        return false;
    }
    first
        .iter()
        .zip(second)
        .all(|(a, b)| match (serde_json::to_value(a), serde_json::to_value(b)) {
            (Ok(Value::Object(a)), Ok(Value::Object(b))) => {
                a.len() == b.len() && a.iter().all(|(key, value)| b.get(key) == Some(value))
            }
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        })
}

fn same_options(first: &JdlEntityDescriptor, second: &JdlEntityDescriptor) -> bool {
    first.dto == second.dto
        && first.service == second.service
        && first.pagination == second.pagination
        && first.search_engine == second.search_engine
        && first.entity_table_name == second.entity_table_name
        && first.javadoc == second.javadoc
        && first.jpa_metamodel_filtering.unwrap_or(false)
            == second.jpa_metamodel_filtering.unwrap_or(false)
}
