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

//! # DSL Module
//!
//! Turns the parse tree of a JDL file into the domain model.
//!
//! ## Architecture
//!
//! - **Document** ([document.rs](document/index.html)): the parse tree the
//!   external grammar produces, loadable from JSON or YAML
//! - **Parser** ([parser.rs](parser/index.html)): the document parser, which
//!   resolves constants, comments, references and options into a
//!   [`JdlObject`](crate::core::JdlObject)
//!
//! ## Processing Order
//!
//! 1. Constants and database types of the declared applications
//! 2. Enums
//! 3. Entities and fields (the `id` field is implicit and dropped)
//! 4. Relationships, with `User` resolved to the built-in entity
//! 5. Options, then the automatic microservice option
//! 6. Applications and their entity lists
//!
//! ## Usage Example
//!
//! ```rust
//! use jdl::dsl::{JdlDocEntity, JdlDocField, JdlDocument, JdlDocumentParser};
//!
//! let document = JdlDocument::new()
//!     .with_entity(JdlDocEntity::new("Region").field(JdlDocField::new("regionName", "String")));
//! let jdl = JdlDocumentParser::new().parse(Some(&document))?;
//! assert_eq!(jdl.entity_quantity(), 1);
//! ```

pub mod document;
pub mod parser;

pub use document::{
    JdlCommentForm, JdlDocApplication, JdlDocComment, JdlDocEntity, JdlDocEntityItem,
    JdlDocEntityList, JdlDocEnum, JdlDocField, JdlDocOption, JdlDocRelationship,
    JdlDocRelationshipEnd, JdlDocValidation, JdlDocument,
};
pub use parser::{JdlDocumentParser, JdlParserConfig};
