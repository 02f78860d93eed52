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

use indexmap::IndexSet;
use jdl::catalog::{field_types, validations, JdlDatabaseType};
use jdl::core::{JdlEntity, JdlEnum, JdlField, JdlValidation};
use serde_json::json;

#[test]
fn test_validation_defaults_to_required() {
    let validation = JdlValidation::default();
    assert_eq!(validation.name, "required");
    assert!(validation.value.is_none());
    assert!(validation.is_valid());
    assert_eq!(validation.to_string(), "required");
}

#[test]
fn test_validation_errors() {
    assert_eq!(JdlValidation::flag("").errors(), vec!["No validation name"]);
    assert_eq!(
        JdlValidation::flag("toto").errors(),
        vec!["Wrong validation name 'toto'"]
    );
    assert_eq!(
        JdlValidation::flag("min").errors(),
        vec!["No value for validation 'min'"]
    );
    assert_eq!(
        JdlValidation::new("maxlength", Some(json!(""))).errors(),
        vec!["No value for validation 'maxlength'"]
    );
    assert!(JdlValidation::new("min", Some(json!(0))).is_valid());
}

#[test]
fn test_validation_text_form() {
    assert_eq!(JdlValidation::new("min", Some(json!(42))).to_string(), "min(42)");
    assert_eq!(
        JdlValidation::new("maxlength", Some(json!("MAX"))).to_string(),
        "maxlength(MAX)"
    );
    assert_eq!(
        JdlValidation::new("pattern", Some(json!("^[A-Z]+$"))).to_string(),
        "pattern(/^[A-Z]+$/)"
    );
    assert_eq!(JdlValidation::flag("unique").to_string(), "unique");
}

#[test]
fn test_validation_catalogue() {
    assert!(validations::exists("required"));
    assert!(validations::exists("maxbytes"));
    assert!(!validations::exists("nope"));
    assert!(!validations::needs_value("unique"));
    assert!(validations::needs_value("pattern"));
    assert_eq!(validations::descriptor_key("minlength"), "fieldValidateRulesMinlength");
}

#[test]
fn test_field_errors_report_nested_validations() {
    let field = JdlField::new("", "")
        .with_validation(JdlValidation::flag("required"))
        .with_validation(JdlValidation::flag("min"));
    assert_eq!(
        field.errors(),
        vec![
            "No field name",
            "No field type",
            "For validation #2: No value for validation 'min'",
        ]
    );
    assert!(!field.is_valid());
}

#[test]
fn test_field_validations_are_keyed_by_name() {
    let field = JdlField::new("age", "Integer")
        .with_validation(JdlValidation::new("min", Some(json!(1))))
        .with_validation(JdlValidation::new("min", Some(json!(18))));
    assert_eq!(field.validations.len(), 1);
    assert_eq!(field.validations["min"].value, Some(json!(18)));
}

#[test]
fn test_field_text_form() {
    let field = JdlField::new("name", "String")
        .with_validation(JdlValidation::flag("required"))
        .with_validation(JdlValidation::new("minlength", Some(json!(3))));
    assert_eq!(field.to_string(), "name String required minlength(3)");

    let commented = JdlField::new("name", "String").with_comment("the name");
    assert_eq!(commented.to_string(), "/**\n * the name\n */\nname String");
}

#[test]
fn test_entity_defaults_table_name_to_name() {
    let entity = JdlEntity::new("Employee");
    assert_eq!(entity.table_name, "Employee");
    assert!(entity.is_valid());
    assert_eq!(entity.to_string(), "entity Employee");
}

#[test]
fn test_entity_errors() {
    let entity = JdlEntity::new("")
        .with_table_name("")
        .with_field(JdlField::new("name", ""));
    assert_eq!(
        entity.errors(),
        vec!["No entity name", "No table name", "For field #1: No field type"]
    );
}

#[test]
fn test_entity_text_form() {
    let entity = JdlEntity::new("Employee")
        .with_table_name("emp")
        .with_comment("An employee")
        .with_field(JdlField::new("firstName", "String").with_comment("first"))
        .with_field(
            JdlField::new("salary", "Long").with_validation(JdlValidation::flag("required")),
        );
    let expected = "/**\n * An employee\n */\nentity Employee (emp) {\n  /**\n   * first\n   */\n  firstName String,\n  salary Long required\n}";
    assert_eq!(entity.to_string(), expected);
}

#[test]
fn test_user_entity() {
    let user = JdlEntity::user();
    assert_eq!(user.name, "User");
    assert_eq!(user.table_name, "sim_user");
    assert!(JdlEntity::is_user("User"));
    assert!(!JdlEntity::is_user("user"));
}

#[test]
fn test_enum_values_are_deduplicated_in_order() {
    let mut enumeration = JdlEnum::new("Language", ["FRENCH", "ENGLISH"]);
    enumeration.add_value("FRENCH");
    enumeration.add_value("SPANISH");
    let values: IndexSet<String> = ["FRENCH", "ENGLISH", "SPANISH"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(enumeration.values, values);
    assert_eq!(
        enumeration.to_string(),
        "enum Language {\n  FRENCH,\n  ENGLISH,\n  SPANISH\n}"
    );
}

#[test]
fn test_enum_errors() {
    assert_eq!(
        JdlEnum::new("", Vec::<String>::new()).errors(),
        vec!["No enumeration name"]
    );
}

#[test]
fn test_field_type_legality_depends_on_database() {
    assert!(field_types::is_legal(JdlDatabaseType::Sql, "BigDecimal"));
    assert!(field_types::is_legal(JdlDatabaseType::Sql, "ImageBlob"));
    assert!(!field_types::is_legal(JdlDatabaseType::Cassandra, "ImageBlob"));
    assert!(field_types::is_legal(JdlDatabaseType::Cassandra, "UUID"));
    assert!(!field_types::is_legal(JdlDatabaseType::Mysql, "Unknown"));
}

#[test]
fn test_blob_mapping() {
    assert_eq!(field_types::blob_content("ImageBlob"), Some("image"));
    assert_eq!(field_types::blob_content("AnyBlob"), Some("any"));
    assert_eq!(field_types::blob_content("String"), None);
    assert_eq!(field_types::blob_type("text"), Some("TextBlob"));
    assert_eq!(field_types::blob_type("any"), Some("Blob"));
}
