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

//! # Jdl Core Library
//!
//! Semantic core of the JDL domain language: an in-memory model of
//! applications, entities, enums, relationships and options, plus the
//! converters between that model, JDL parse trees, JDL text and the
//! per-entity JSON descriptors a code generator consumes.
//!
//! ## Module Overview
//!
//! - **catalog**: Fixed vocabularies (validations, field types, options,
//!   application types and defaults)
//! - **core**: The domain model and the [`JdlObject`] aggregate
//! - **dsl**: Parse tree documents and the document parser
//! - **json**: Entity descriptors, the directory reader and the JSON parser
//! - **export**: Model to descriptors, structural equality and file export
//! - **errors**: The [`JdlError`] kinds shared by every module
//!
//! ## Quick Start
//!
//! ```rust
//! use jdl::{JdlDocument, JdlDocumentParser, JdlEntityConverter, JdlJsonExporter};
//!
//! let document = JdlDocument::from_json_str(&tree)?;
//! let jdl = JdlDocumentParser::new().parse(Some(&document))?;
//! let entities = JdlEntityConverter::new().convert(&jdl);
//! JdlJsonExporter::new().root(".").export_to_json(&entities, false)?;
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, JdlError>`. The error kind tells
//! argument problems apart from invalid members, illegal options or names,
//! file access failures and unknown field types.

pub mod catalog;
pub mod core;
pub mod dsl;
pub mod errors;
pub mod export;
pub mod json;
pub mod utils;

pub use errors::{JdlError, Result};

pub use catalog::{JdlApplicationType, JdlAuthenticationType, JdlDatabaseType};
pub use crate::core::{
    JdlApplication, JdlApplicationConfig, JdlBinaryOption, JdlEntity, JdlEnum, JdlField,
    JdlObject, JdlOption, JdlOptionScope, JdlOptions, JdlRelationship, JdlRelationshipType,
    JdlRelationships, JdlUnaryOption, JdlValidation,
};
pub use dsl::{JdlDocument, JdlDocumentParser, JdlParserConfig};
pub use export::{
    are_entities_equal, export_to_jdl, JdlConverterConfig, JdlEntityConverter, JdlExportConfig,
    JdlJsonExporter,
};
pub use json::{
    parse_from_dir, read_entity_json, JdlEntityDescriptor, JdlFieldDescriptor, JdlJsonParser,
    JdlRelationshipDescriptor,
};
