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

use jdl::core::{JdlRelationship, JdlRelationshipType, JdlRelationships};
use proptest::prelude::*;

fn one_to_many() -> JdlRelationship {
    JdlRelationship::new(JdlRelationshipType::OneToMany, "Department", "Employee")
        .with_injected_field_in_from("employee")
        .with_injected_field_in_to("department")
}

#[test]
fn test_relationship_id() {
    assert_eq!(
        one_to_many().id(),
        "OneToMany_Department{employee}_Employee{department}"
    );
    let unidirectional = JdlRelationship::new(JdlRelationshipType::ManyToOne, "Employee", "Job")
        .with_injected_field_in_from("job");
    assert_eq!(unidirectional.id(), "ManyToOne_Employee{job}_Job");
}

#[test]
fn test_relationship_errors() {
    let relationship = JdlRelationship::new(JdlRelationshipType::OneToOne, "", "");
    assert_eq!(
        relationship.errors(),
        vec![
            "No source entity",
            "No destination entity",
            "No injected field in source or destination",
        ]
    );
    assert!(one_to_many().is_valid());
}

#[test]
fn test_relationship_type_names() {
    assert_eq!(JdlRelationshipType::ManyToMany.descriptor_name(), "many-to-many");
    assert_eq!(
        JdlRelationshipType::from_descriptor_name("one-to-many"),
        Some(JdlRelationshipType::OneToMany)
    );
    assert_eq!(
        "ManyToOne".parse::<JdlRelationshipType>().unwrap(),
        JdlRelationshipType::ManyToOne
    );
    assert_eq!(
        "one-to-one".parse::<JdlRelationshipType>().unwrap(),
        JdlRelationshipType::OneToOne
    );
    assert!("sideways".parse::<JdlRelationshipType>().is_err());
    assert_eq!(
        JdlRelationshipType::OneToMany.reversed(),
        JdlRelationshipType::ManyToOne
    );
    assert_eq!(
        JdlRelationshipType::OneToOne.reversed(),
        JdlRelationshipType::OneToOne
    );
    assert!(JdlRelationshipType::ManyToMany.has_owner_side());
    assert!(!JdlRelationshipType::ManyToOne.has_owner_side());
}

#[test]
fn test_relationship_text_form() {
    let mut relationship = one_to_many();
    relationship.is_injected_field_in_to_required = Some(true);
    assert_eq!(
        relationship.to_string(),
        "relationship OneToMany {\n  Department{employee} to Employee{department required}\n}"
    );
}

#[test]
fn test_relationship_text_form_with_comments() {
    let relationship = JdlRelationship::new(JdlRelationshipType::OneToOne, "A", "B")
        .with_injected_field_in_from("b")
        .with_comment_in_from("from A")
        .with_comment_in_to("to B");
    let expected = "relationship OneToOne {\n  /**\n   * from A\n   */\n  A{b} to\n  /**\n   * to B\n   */\n  B\n}";
    assert_eq!(relationship.to_string(), expected);
}

#[test]
fn test_duplicates_are_rejected() {
    let mut set = JdlRelationships::new();
    assert!(set.add(one_to_many()));
    assert!(!set.add(one_to_many()));
    assert_eq!(set.size(), 1);
    assert!(set
        .get("OneToMany_Department{employee}_Employee{department}")
        .is_some());
}

#[test]
fn test_relationships_grouped_by_type() {
    let mut set = JdlRelationships::new();
    set.add(one_to_many());
    set.add(
        JdlRelationship::new(JdlRelationshipType::ManyToOne, "Employee", "Job")
            .with_injected_field_in_from("job"),
    );
    set.add(
        JdlRelationship::new(JdlRelationshipType::OneToMany, "Employee", "Task")
            .with_injected_field_in_from("task"),
    );

    assert_eq!(set.of_type(JdlRelationshipType::OneToMany).len(), 2);
    assert_eq!(set.of_type(JdlRelationshipType::ManyToMany).len(), 0);
    assert_eq!(
        set.blocks(),
        vec![
            "relationship OneToMany {\n  Department{employee} to Employee{department},\n  Employee{task} to Task\n}",
            "relationship ManyToOne {\n  Employee{job} to Job\n}",
        ]
    );
}

proptest! {
    #[test]
    fn test_identity_deduplicates(
        from in "[A-Z][a-z]{1,8}",
        to in "[A-Z][a-z]{1,8}",
        field in "[a-z]{1,8}",
        copies in 1usize..5,
    ) {
        let mut set = JdlRelationships::new();
        let relationship =
            JdlRelationship::new(JdlRelationshipType::ManyToOne, from.clone(), to.clone())
                .with_injected_field_in_from(field.clone());
        for _ in 0..copies {
            set.add(relationship.clone());
        }
        prop_assert_eq!(set.size(), 1);
        prop_assert_eq!(relationship.id(), format!("ManyToOne_{}{{{}}}_{}", from, field, to));
    }
}
