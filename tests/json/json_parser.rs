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

use indexmap::IndexMap;
use jdl::core::{JdlObject, JdlOption};
use jdl::json::{JdlEntityDescriptor, JdlJsonParser};
use jdl::JdlError;
use serde_json::{json, Value};

fn descriptors(pairs: &[(&str, Value)]) -> IndexMap<String, JdlEntityDescriptor> {
    pairs
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                serde_json::from_value(value.clone()).unwrap(),
            )
        })
        .collect()
}

fn hr_entities() -> IndexMap<String, JdlEntityDescriptor> {
    descriptors(&[
        (
            "Department",
            json!({
                "fields": [{"fieldName": "departmentName", "fieldType": "String"}],
                "relationships": [
                    {
                        "relationshipType": "one-to-many",
                        "relationshipName": "employee",
                        "otherEntityName": "employee",
                        "otherEntityRelationshipName": "department"
                    },
                    {
                        "relationshipType": "many-to-one",
                        "relationshipName": "location",
                        "otherEntityName": "location",
                        "otherEntityField": "id"
                    }
                ],
                "dto": "mapstruct",
                "pagination": "no",
                "service": "serviceImpl"
            }),
        ),
        (
            "Employee",
            json!({
                "fields": [
                    {
                        "fieldName": "name",
                        "fieldType": "String",
                        "javadoc": "The name",
                        "fieldValidateRules": ["required", "maxlength"],
                        "fieldValidateRulesMaxlength": 42
                    },
                    {"fieldName": "language", "fieldType": "Language", "fieldValues": "FRENCH,ENGLISH"},
                    {"fieldName": "picture", "fieldType": "byte[]", "fieldTypeBlobContent": "image"}
                ],
                "relationships": [
                    {
                        "relationshipType": "many-to-one",
                        "relationshipName": "department",
                        "otherEntityName": "department",
                        "otherEntityField": "id",
                        "otherEntityRelationshipName": "employee",
                        "relationshipValidateRules": "required"
                    },
                    {
                        "relationshipType": "many-to-many",
                        "relationshipName": "job",
                        "otherEntityName": "job",
                        "otherEntityField": "jobTitle",
                        "ownerSide": true,
                        "otherEntityRelationshipName": "employee"
                    },
                    {
                        "relationshipType": "many-to-one",
                        "relationshipName": "user",
                        "otherEntityName": "user",
                        "otherEntityField": "login"
                    }
                ],
                "javadoc": "An employee",
                "entityTableName": "emp",
                "dto": "mapstruct",
                "jpaMetamodelFiltering": true,
                "fluentMethods": false
            }),
        ),
        (
            "Job",
            json!({
                "relationships": [{
                    "relationshipType": "many-to-many",
                    "relationshipName": "employee",
                    "otherEntityName": "employee",
                    "ownerSide": false,
                    "otherEntityRelationshipName": "job"
                }]
            }),
        ),
        ("Location", json!({"fields": [{"fieldName": "city", "fieldType": "String"}]})),
    ])
}

#[test]
fn test_entities_and_fields() {
    let jdl = JdlJsonParser::new().parse_entities(&hr_entities(), None).unwrap();
    assert_eq!(
        jdl.entity_names(),
        vec!["Department", "Employee", "Job", "Location"]
    );
    let employee = jdl.entity("Employee").unwrap();
    assert_eq!(employee.table_name, "emp");
    assert_eq!(employee.comment.as_deref(), Some("An employee"));

    let name = &employee.fields["name"];
    assert_eq!(name.comment.as_deref(), Some("The name"));
    assert!(name.validations.contains_key("required"));
    assert_eq!(name.validations["maxlength"].value, Some(json!(42)));
    assert_eq!(employee.fields["picture"].field_type, "ImageBlob");

    let language = jdl.get_enum("Language").unwrap();
    let values: Vec<&str> = language.values.iter().map(String::as_str).collect();
    assert_eq!(values, vec!["FRENCH", "ENGLISH"]);

    assert_eq!(jdl.entity("Job").unwrap().table_name, "Job");
}

#[test]
fn test_relationship_pairing() {
    let jdl = JdlJsonParser::new().parse_entities(&hr_entities(), None).unwrap();
    let ids = jdl.relationships().ids();
    assert_eq!(ids.len(), 4);
    for id in [
        "OneToMany_Department{employee}_Employee{department}",
        "ManyToOne_Department{location}_Location",
        "ManyToMany_Employee{job(jobTitle)}_Job{employee}",
        "ManyToOne_Employee{user(login)}_User",
    ] {
        assert!(ids.iter().any(|i| i == id), "missing {}", id);
    }

    let one_to_many = jdl
        .relationships()
        .get("OneToMany_Department{employee}_Employee{department}")
        .unwrap();
    assert_eq!(one_to_many.is_injected_field_in_to_required, Some(true));
    assert_eq!(one_to_many.is_injected_field_in_from_required, None);
}

#[test]
fn test_owner_side_is_the_source_regardless_of_order() {
    let entities = descriptors(&[
        (
            "Job",
            json!({"relationships": [{
                "relationshipType": "many-to-many",
                "relationshipName": "task",
                "otherEntityName": "task",
                "ownerSide": false,
                "otherEntityRelationshipName": "job"
            }]}),
        ),
        (
            "Task",
            json!({"relationships": [{
                "relationshipType": "many-to-many",
                "relationshipName": "job",
                "otherEntityName": "job",
                "ownerSide": true,
                "otherEntityRelationshipName": "task"
            }]}),
        ),
    ]);
    let jdl = JdlJsonParser::new().parse_entities(&entities, None).unwrap();
    assert_eq!(jdl.relationships().ids(), vec!["ManyToMany_Task{job}_Job{task}"]);
}

#[test]
fn test_many_to_one_without_back_reference_is_paired_when_listed_first() {
    let entities = descriptors(&[
        (
            "Employee",
            json!({"relationships": [{
                "relationshipType": "many-to-one",
                "relationshipName": "department",
                "otherEntityName": "department",
                "otherEntityField": "foo"
            }]}),
        ),
        (
            "Department",
            json!({"relationships": [{
                "relationshipType": "one-to-many",
                "relationshipName": "employee",
                "otherEntityName": "employee",
                "otherEntityRelationshipName": "department"
            }]}),
        ),
    ]);
    let jdl = JdlJsonParser::new().parse_entities(&entities, None).unwrap();
    assert_eq!(
        jdl.relationships().ids(),
        vec!["OneToMany_Department{employee}_Employee{department(foo)}"]
    );
}

#[test]
fn test_relationship_to_unknown_entity_is_skipped() {
    let entities = descriptors(&[(
        "A",
        json!({"relationships": [{
            "relationshipType": "many-to-one",
            "relationshipName": "ghost",
            "otherEntityName": "ghost"
        }]}),
    )]);
    let jdl = JdlJsonParser::new().parse_entities(&entities, None).unwrap();
    assert_eq!(jdl.relationship_quantity(), 0);
}

#[test]
fn test_options_are_folded_per_value() {
    let jdl = JdlJsonParser::new().parse_entities(&hr_entities(), None).unwrap();

    let dtos = jdl.options_for_name("dto");
    assert_eq!(dtos.len(), 1);
    let names: Vec<&str> = dtos[0].entity_names().iter().map(String::as_str).collect();
    assert_eq!(names, vec!["Department", "Employee"]);

    assert!(jdl.options_for_name("pagination").is_empty());
    let services = jdl.options_for_name("service");
    assert_eq!(services[0].value(), Some("serviceImpl"));
    assert!(services[0].applies_to("Department"));
    assert!(!services[0].applies_to("Employee"));

    assert!(jdl.options_for_name("filter")[0].applies_to("Employee"));
    assert!(jdl.options_for_name("noFluentMethod")[0].applies_to("Employee"));
    assert!(!jdl.options_for_name("noFluentMethod")[0].applies_to("Job"));
}

#[test]
fn test_user_entity_requires_skip_user_management() {
    let entities = descriptors(&[
        ("User", json!({"fields": [{"fieldName": "login", "fieldType": "String"}]})),
        ("Post", json!({})),
    ]);
    let err = JdlJsonParser::new().parse_entities(&entities, None).unwrap_err();
    assert!(matches!(err, JdlError::IllegalName { .. }));
    assert_eq!(
        err.message(),
        "User entity name is reserved if skipUserManagement is not set."
    );
}

#[test]
fn test_user_entity_with_skip_user_management() {
    let entities = descriptors(&[
        ("User", json!({"fields": [{"fieldName": "login", "fieldType": "String"}]})),
        (
            "Post",
            json!({"relationships": [{
                "relationshipType": "many-to-one",
                "relationshipName": "author",
                "otherEntityName": "user",
                "otherEntityField": "login"
            }]}),
        ),
    ]);
    let mut base = JdlObject::new();
    base.add_option(JdlOption::unary("skipUserManagement").unwrap())
        .unwrap();
    let jdl = JdlJsonParser::new()
        .parse_entities(&entities, Some(base))
        .unwrap();
    assert!(jdl.has_entity("User"));
    assert_eq!(jdl.entity("User").unwrap().table_name, "User");
    assert_eq!(
        jdl.relationships().ids(),
        vec!["ManyToOne_Post{author(login)}_User"]
    );
}

#[test]
fn test_user_relationship_without_user_descriptor() {
    let entities = descriptors(&[(
        "Post",
        json!({"relationships": [{
            "relationshipType": "many-to-one",
            "relationshipName": "author",
            "otherEntityName": "user",
            "otherEntityField": "id"
        }]}),
    )]);
    let jdl = JdlJsonParser::new().parse_entities(&entities, None).unwrap();
    assert!(!jdl.has_entity("User"));
    assert_eq!(jdl.relationships().ids(), vec!["ManyToOne_Post{author}_User"]);
}

#[test]
fn test_server_options() {
    let config = json!({"skipClient": true, "skipServer": false, "baseName": "app"});
    let jdl = JdlJsonParser::new()
        .parse_server_options(config.as_object().unwrap())
        .unwrap();
    assert_eq!(jdl.option_quantity(), 1);
    assert!(jdl.options_for_name("skipClient")[0].scope().is_wildcard());
}

#[test]
fn test_unknown_descriptor_keys_are_kept() {
    let descriptor: JdlEntityDescriptor = serde_json::from_value(json!({
        "fields": [],
        "relationships": [],
        "readOnly": true
    }))
    .unwrap();
    assert_eq!(descriptor.extra.get("readOnly"), Some(&json!(true)));
    let back = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(back["readOnly"], json!(true));
}
