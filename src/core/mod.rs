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

//! # Domain Model
//!
//! Typed JDL model: validations, fields, entities, enums, relationships,
//! options, applications and the [`JdlObject`] aggregate that owns them.

pub mod application;
pub mod entity;
pub mod enumeration;
pub mod field;
pub mod object;
pub mod option;
pub mod relationship;
pub mod validation;

pub use application::{JdlApplication, JdlApplicationConfig};
pub use entity::JdlEntity;
pub use enumeration::JdlEnum;
pub use field::JdlField;
pub use object::JdlObject;
pub use option::{JdlBinaryOption, JdlOption, JdlOptionScope, JdlOptions, JdlUnaryOption};
pub use relationship::{JdlRelationship, JdlRelationshipType, JdlRelationships};
pub use validation::JdlValidation;
