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

//! # Export Module
//!
//! Forward path from the model to files on disk.
//!
//! ## Module Components
//!
//! - **Converter** ([converter.rs](converter/index.html)): model to per-entity descriptors
//! - **Diff** ([diff.rs](diff/index.html)): structural equality of descriptors
//! - **Writer** ([writer.rs](writer/index.html)): incremental JSON export
//! - **Jdl** ([jdl.rs](jdl/index.html)): JDL text export
//!
//! ## Usage Patterns
//!
//! ```rust
//! use jdl::export::{JdlEntityConverter, JdlJsonExporter};
//!
//! let entities = JdlEntityConverter::new().convert(&jdl);
//! let written = JdlJsonExporter::new().root(app_dir).export_to_json(&entities, false)?;
//! ```

pub mod converter;
pub mod diff;
pub mod jdl;
pub mod writer;

pub use converter::{JdlConverterConfig, JdlEntityConverter};
pub use diff::are_entities_equal;
pub use jdl::export_to_jdl;
pub use writer::{JdlExportConfig, JdlExportedEntities, JdlJsonExporter};
