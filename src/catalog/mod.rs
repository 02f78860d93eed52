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

//! # Catalogue Module
//!
//! Fixed lookup tables consumed by the model and both parsers: validation
//! names, legal field types per database, option tables, application
//! defaults and reserved names. Everything here is static data.

pub mod application;
pub mod field_types;
pub mod options;
pub mod validations;

pub use application::{JdlApplicationType, JdlAuthenticationType, JdlDatabaseType};

/// Name of the entity every generated application ships with.
pub const USER_ENTITY_NAME: &str = "User";

/// Table backing the built-in `User` entity.
pub const USER_TABLE_NAME: &str = "sim_user";

/// Default directory holding per-entity JSON descriptors.
pub const ENTITY_DIRECTORY: &str = ".simlife";

/// Generator configuration file at the root of an application.
pub const GENERATOR_CONFIG_FILE: &str = ".yo-rc.json";

/// Key of the generator section inside [`GENERATOR_CONFIG_FILE`].
pub const GENERATOR_CONFIG_KEY: &str = "generator-simlife";

/// Wildcard entity name used by options and applications.
pub const ALL_ENTITIES: &str = "*";
