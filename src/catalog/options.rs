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

//! Generator option tables.
//!
//! Unary options are flags; binary options carry a value which is either
//! drawn from a closed set or free text.

use crate::catalog::JdlDatabaseType;

pub const SKIP_CLIENT: &str = "skipClient";
pub const SKIP_SERVER: &str = "skipServer";
pub const SKIP_USER_MANAGEMENT: &str = "skipUserManagement";
pub const NO_FLUENT_METHOD: &str = "noFluentMethod";
pub const FILTER: &str = "filter";

pub const DTO: &str = "dto";
pub const SERVICE: &str = "service";
pub const PAGINATION: &str = "pagination";
pub const SEARCH_ENGINE: &str = "searchEngine";
pub const MICROSERVICE: &str = "microservice";
pub const ANGULAR_SUFFIX: &str = "angularSuffix";
pub const CLIENT_ROOT_FOLDER: &str = "clientRootFolder";

pub const UNARY_OPTIONS: &[&str] = &[
    SKIP_CLIENT,
    SKIP_SERVER,
    SKIP_USER_MANAGEMENT,
    NO_FLUENT_METHOD,
    FILTER,
];

/// Binary option -> legal values; `None` accepts any non-empty value.
pub const BINARY_OPTIONS: &[(&str, Option<&[&str]>)] = &[
    (DTO, Some(&["mapstruct"])),
    (SERVICE, Some(&["serviceClass", "serviceImpl"])),
    (PAGINATION, Some(&["pager", "pagination", "infinite-scroll"])),
    (SEARCH_ENGINE, Some(&["elasticsearch"])),
    (MICROSERVICE, None),
    (ANGULAR_SUFFIX, None),
    (CLIENT_ROOT_FOLDER, None),
];

/// JDL keywords that differ from the option name.
pub const KEYWORD_ALIASES: &[(&str, &str)] = &[("paginate", PAGINATION), ("search", SEARCH_ENGINE)];

/// Options a database type cannot honour, with the reported reason.
pub const ILLEGAL_FOR_DATABASE: &[(&str, JdlDatabaseType, &str)] = &[(
    PAGINATION,
    JdlDatabaseType::Cassandra,
    "Pagination isn't allowed when the app uses Cassandra.",
)];

pub fn is_unary(name: &str) -> bool {
    UNARY_OPTIONS.contains(&name)
}

pub fn is_binary(name: &str) -> bool {
    BINARY_OPTIONS.iter().any(|(n, _)| *n == name)
}

pub fn is_binary_value_valid(name: &str, value: &str) -> bool {
    match BINARY_OPTIONS.iter().find(|(n, _)| *n == name) {
        Some((_, Some(values))) => values.contains(&value),
        Some((_, None)) => !value.is_empty(),
        None => false,
    }
}

/// Resolves a JDL keyword to its option name; other names pass through.
pub fn resolve_alias(keyword: &str) -> &str {
    KEYWORD_ALIASES
        .iter()
        .find(|(alias, _)| *alias == keyword)
        .map(|(_, name)| *name)
        .unwrap_or(keyword)
}

/// JDL keyword used when rendering an option.
pub fn keyword_for(name: &str) -> &str {
    KEYWORD_ALIASES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(alias, _)| *alias)
        .unwrap_or(name)
}

pub fn illegal_for_database(name: &str, database_type: JdlDatabaseType) -> Option<&'static str> {
    ILLEGAL_FOR_DATABASE
        .iter()
        .find(|(n, db, _)| *n == name && *db == database_type)
        .map(|(_, _, reason)| *reason)
}
