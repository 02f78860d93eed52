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

use std::collections::HashSet;

use jdl::catalog::options;
use jdl::catalog::JdlDatabaseType;
use jdl::core::{JdlOption, JdlOptionScope, JdlOptions};
use jdl::JdlError;
use proptest::prelude::*;

#[test]
fn test_unary_option_rejects_unknown_name() {
    let err = JdlOption::unary("dto").unwrap_err();
    assert!(matches!(err, JdlError::IllegalOption { .. }));
    assert_eq!(err.message(), "The option's name must be valid, got 'dto'.");
}

#[test]
fn test_binary_option_rejects_illegal_value() {
    let err = JdlOption::binary("dto", "wrong").unwrap_err();
    assert_eq!(
        err.message(),
        "The option's name and value must be valid, got value 'wrong' for 'dto'."
    );
    assert!(JdlOption::binary("nope", "mapstruct").is_err());
    assert!(JdlOption::binary("microservice", "").is_err());
    assert!(JdlOption::binary("microservice", "ms").is_ok());
}

#[test]
fn test_new_option_applies_to_all_entities() {
    let option = JdlOption::unary("skipClient").unwrap();
    assert!(option.scope().is_wildcard());
    assert!(option.applies_to("Anything"));
    assert_eq!(option.to_string(), "skipClient *");
}

#[test]
fn test_scope_replaces_lone_wildcard() {
    let mut scope = JdlOptionScope::default();
    assert!(scope.add_entity_name("A"));
    assert!(!scope.is_wildcard());
    assert!(!scope.add_entity_name("A"));
    assert!(!scope.add_entity_name(""));
    assert!(scope.applies_to("A"));
    assert!(!scope.applies_to("B"));

    let mut all = JdlOptionScope::default();
    assert!(all.exclude_entity_name("B"));
    assert!(all.is_wildcard());
    assert!(all.applies_to("A"));
    assert!(!all.applies_to("B"));
}

#[test]
fn test_excluded_names_win_over_wildcard() {
    let option = JdlOption::binary("dto", "mapstruct")
        .unwrap()
        .with_excluded_names(["C"]);
    assert!(option.applies_to("A"));
    assert!(!option.applies_to("C"));
    assert_eq!(option.to_string(), "dto * with mapstruct except C");
}

#[test]
fn test_option_key() {
    assert_eq!(JdlOption::unary("filter").unwrap().key(), "filter");
    assert_eq!(
        JdlOption::binary("service", "serviceImpl").unwrap().key(),
        "service_serviceImpl"
    );
}

#[test]
fn test_adding_same_key_merges_scopes() {
    let mut set = JdlOptions::new();
    set.add(
        JdlOption::binary("dto", "mapstruct")
            .unwrap()
            .with_entity_names(["A", "B"]),
    );
    set.add(
        JdlOption::binary("dto", "mapstruct")
            .unwrap()
            .with_entity_names(["B", "C"])
            .with_excluded_names(["D"]),
    );
    set.add(
        JdlOption::binary("service", "serviceClass")
            .unwrap()
            .with_entity_names(["A"]),
    );

    assert_eq!(set.size(), 2);
    let dto = set.get("dto_mapstruct").unwrap();
    let names: Vec<&str> = dto.entity_names().iter().map(String::as_str).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert!(dto.excluded_names().contains("D"));
    assert!(set.has("service_serviceClass"));
    assert_eq!(set.options_for_name("dto").len(), 1);
}

#[test]
fn test_different_values_are_distinct_options() {
    let mut set = JdlOptions::new();
    set.add(JdlOption::binary("pagination", "pager").unwrap().with_entity_names(["A"]));
    set.add(
        JdlOption::binary("pagination", "infinite-scroll")
            .unwrap()
            .with_entity_names(["B"]),
    );
    assert_eq!(set.size(), 2);
    assert_eq!(set.options_for_name("pagination").len(), 2);
}

#[test]
fn test_option_errors() {
    let option = JdlOption::unary("filter")
        .unwrap()
        .with_entity_names(Vec::<String>::new());
    assert_eq!(option.errors(), vec!["No entity names"]);
}

#[test]
fn test_binary_option_text_uses_keyword() {
    let option = JdlOption::binary("pagination", "pager")
        .unwrap()
        .with_entity_names(["A", "B"]);
    assert_eq!(option.to_string(), "paginate A, B with pager");
    let search = JdlOption::binary("searchEngine", "elasticsearch")
        .unwrap()
        .with_entity_names(["A"]);
    assert_eq!(search.to_string(), "search A with elasticsearch");
}

#[test]
fn test_option_catalogue() {
    assert!(options::is_unary("noFluentMethod"));
    assert!(options::is_binary("angularSuffix"));
    assert_eq!(options::resolve_alias("paginate"), "pagination");
    assert_eq!(options::resolve_alias("dto"), "dto");
    assert_eq!(
        options::illegal_for_database("pagination", JdlDatabaseType::Cassandra),
        Some("Pagination isn't allowed when the app uses Cassandra.")
    );
    assert_eq!(
        options::illegal_for_database("pagination", JdlDatabaseType::Mysql),
        None
    );
}

fn entity_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}"
}

proptest! {
    #[test]
    fn test_merged_scope_is_the_union(
        first in prop::collection::vec(entity_name(), 1..5),
        second in prop::collection::vec(entity_name(), 1..5),
    ) {
        let mut set = JdlOptions::new();
        set.add(JdlOption::binary("dto", "mapstruct").unwrap().with_entity_names(first.clone()));
        set.add(JdlOption::binary("dto", "mapstruct").unwrap().with_entity_names(second.clone()));
        prop_assert_eq!(set.size(), 1);

        let option = set.get("dto_mapstruct").unwrap();
        let union: HashSet<&String> = first.iter().chain(second.iter()).collect();
        prop_assert_eq!(option.entity_names().len(), union.len());
        for name in union {
            prop_assert!(option.applies_to(name));
        }
    }

    #[test]
    fn test_exclusion_always_wins(name in entity_name()) {
        let option = JdlOption::unary("skipServer")
            .unwrap()
            .with_entity_names([name.clone()])
            .with_excluded_names([name.clone()]);
        prop_assert!(!option.applies_to(&name));
    }
}
