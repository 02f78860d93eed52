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

//! # JSON Module
//!
//! Per-entity JSON descriptors and the reverse path from them to the model.

pub mod descriptor;
pub mod parser;
pub mod reader;

pub use descriptor::{
    JdlEntityApplications, JdlEntityDescriptor, JdlFieldDescriptor, JdlRelationshipDescriptor,
};
pub use parser::JdlJsonParser;
pub use reader::{parse_from_dir, read_entity_json, to_file_path};
