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

use std::fs;
use std::path::Path;

use jdl::json::{parse_from_dir, read_entity_json, to_file_path};
use jdl::JdlError;
use serde_json::json;
use tempfile::TempDir;

fn write_json(path: &Path, value: serde_json::Value) {
    fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

#[test]
fn test_to_file_path() {
    let path = to_file_path(Path::new(".simlife"), "jobHistory").unwrap();
    assert_eq!(path, Path::new(".simlife").join("JobHistory.json"));

    let err = to_file_path(Path::new(".simlife"), "").unwrap_err();
    assert!(matches!(err, JdlError::Argument { .. }));
    assert_eq!(err.message(), "The passed entity name must not be nil.");
}

#[test]
fn test_read_entity_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Region.json");
    write_json(
        &path,
        json!({
            "fields": [{"fieldName": "regionName", "fieldType": "String"}],
            "relationships": [],
            "changelogDate": "20180101000000",
            "dto": "no"
        }),
    );
    let descriptor = read_entity_json(&path).unwrap();
    assert_eq!(descriptor.fields[0].field_name, "regionName");
    assert_eq!(descriptor.changelog_date.as_deref(), Some("20180101000000"));
    assert_eq!(descriptor.dto.as_deref(), Some("no"));
}

#[test]
fn test_read_entity_json_errors() {
    let dir = TempDir::new().unwrap();

    let err = read_entity_json(Path::new("")).unwrap_err();
    assert!(matches!(err, JdlError::Argument { .. }));

    let err = read_entity_json(&dir.path().join("Missing.json")).unwrap_err();
    assert!(matches!(err, JdlError::FileAccess { .. }));
    assert!(err.message().ends_with("must exist and must not be a directory."));

    let err = read_entity_json(dir.path()).unwrap_err();
    assert!(matches!(err, JdlError::FileAccess { .. }));

    let text = dir.path().join("Region.txt");
    fs::write(&text, "{}").unwrap();
    assert!(matches!(
        read_entity_json(&text).unwrap_err(),
        JdlError::FileAccess { .. }
    ));

    let broken = dir.path().join("Broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        read_entity_json(&broken).unwrap_err(),
        JdlError::Serde(_)
    ));
}

#[test]
fn test_parse_from_dir_argument_checks() {
    let err = parse_from_dir(Path::new("")).unwrap_err();
    assert_eq!(err.message(), "The app directory must be passed.");

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("file");
    fs::write(&file, "").unwrap();
    let err = parse_from_dir(&file).unwrap_err();
    assert!(matches!(err, JdlError::FileAccess { .. }));
}

#[test]
fn test_parse_from_dir() {
    let dir = TempDir::new().unwrap();
    write_json(
        &dir.path().join(".yo-rc.json"),
        json!({"generator-simlife": {"baseName": "app", "skipClient": true}}),
    );
    let entity_dir = dir.path().join(".simlife");
    fs::create_dir(&entity_dir).unwrap();
    write_json(
        &entity_dir.join("Region.json"),
        json!({
            "fields": [{"fieldName": "regionName", "fieldType": "String"}],
            "relationships": [{
                "relationshipType": "one-to-one",
                "relationshipName": "country",
                "otherEntityName": "country",
                "ownerSide": true,
                "otherEntityRelationshipName": "region"
            }],
            "pagination": "infinite-scroll"
        }),
    );
    write_json(
        &entity_dir.join("Country.json"),
        json!({
            "fields": [{"fieldName": "countryName", "fieldType": "String"}],
            "relationships": [{
                "relationshipType": "one-to-one",
                "relationshipName": "region",
                "otherEntityName": "region",
                "ownerSide": false,
                "otherEntityRelationshipName": "country"
            }]
        }),
    );
    fs::write(entity_dir.join("Broken.json"), "{").unwrap();
    fs::write(entity_dir.join("notes.txt"), "ignored").unwrap();

    let jdl = parse_from_dir(dir.path()).unwrap();
    assert_eq!(jdl.entity_names(), vec!["Country", "Region"]);
    assert_eq!(
        jdl.relationships().ids(),
        vec!["OneToOne_Region{country}_Country{region}"]
    );
    assert!(jdl.options_for_name("skipClient")[0].applies_to("Region"));
    assert_eq!(jdl.options_for_name("pagination")[0].value(), Some("infinite-scroll"));
}

#[test]
fn test_parse_from_dir_without_descriptors() {
    let dir = TempDir::new().unwrap();
    let jdl = parse_from_dir(dir.path()).unwrap();
    assert_eq!(jdl.entity_quantity(), 0);
    assert_eq!(jdl.option_quantity(), 0);
}
