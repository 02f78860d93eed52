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

use jdl::export::are_entities_equal;
use jdl::json::JdlEntityDescriptor;
use serde_json::json;

fn descriptor(value: serde_json::Value) -> JdlEntityDescriptor {
    serde_json::from_value(value).unwrap()
}

fn base() -> serde_json::Value {
    json!({
        "fields": [
            {"fieldName": "name", "fieldType": "String", "fieldValidateRules": ["required"]}
        ],
        "relationships": [
            {"relationshipType": "many-to-one", "relationshipName": "job", "otherEntityName": "job", "otherEntityField": "id"}
        ],
        "changelogDate": "20180101000000",
        "entityTableName": "employee",
        "dto": "no",
        "pagination": "no",
        "service": "no"
    })
}

#[test]
fn test_identical_descriptors_are_equal() {
    assert!(are_entities_equal(&descriptor(base()), &descriptor(base())));
}

#[test]
fn test_changelog_date_is_ignored() {
    let mut other = base();
    other["changelogDate"] = json!("20990101000000");
    assert!(are_entities_equal(&descriptor(base()), &descriptor(other)));
}

#[test]
fn test_missing_filtering_counts_as_false() {
    let mut other = base();
    other["jpaMetamodelFiltering"] = json!(false);
    assert!(are_entities_equal(&descriptor(base()), &descriptor(other.clone())));
    other["jpaMetamodelFiltering"] = json!(true);
    assert!(!are_entities_equal(&descriptor(base()), &descriptor(other)));
}

#[test]
fn test_field_changes_are_detected() {
    let mut renamed = base();
    renamed["fields"][0]["fieldName"] = json!("title");
    assert!(!are_entities_equal(&descriptor(base()), &descriptor(renamed)));

    let mut extra_key = base();
    extra_key["fields"][0]["javadoc"] = json!("doc");
    assert!(!are_entities_equal(&descriptor(base()), &descriptor(extra_key)));

    let mut added = base();
    added["fields"]
        .as_array_mut()
        .unwrap()
        .push(json!({"fieldName": "age", "fieldType": "Integer"}));
    assert!(!are_entities_equal(&descriptor(base()), &descriptor(added)));
}

#[test]
fn test_relationship_changes_are_detected() {
    let mut other = base();
    other["relationships"][0]["otherEntityField"] = json!("title");
    assert!(!are_entities_equal(&descriptor(base()), &descriptor(other)));
}

#[test]
fn test_option_changes_are_detected() {
    for (key, value) in [
        ("dto", json!("mapstruct")),
        ("service", json!("serviceClass")),
        ("pagination", json!("pager")),
        ("searchEngine", json!("elasticsearch")),
        ("entityTableName", json!("emp")),
        ("javadoc", json!("An employee")),
    ] {
        let mut other = base();
        other[key] = value;
        assert!(
            !are_entities_equal(&descriptor(base()), &descriptor(other)),
            "change of {} not detected",
            key
        );
    }
}
