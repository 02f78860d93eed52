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

//! Field validation catalogue.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::utils::upper_first;

pub const REQUIRED: &str = "required";
pub const UNIQUE: &str = "unique";
pub const MIN: &str = "min";
pub const MAX: &str = "max";
pub const MINLENGTH: &str = "minlength";
pub const MAXLENGTH: &str = "maxlength";
pub const PATTERN: &str = "pattern";
pub const MINBYTES: &str = "minbytes";
pub const MAXBYTES: &str = "maxbytes";

/// Validation name -> whether it needs a value.
pub static VALIDATIONS: LazyLock<HashMap<&'static str, bool>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(REQUIRED, false);
    m.insert(UNIQUE, false);
    m.insert(MIN, true);
    m.insert(MAX, true);
    m.insert(MINLENGTH, true);
    m.insert(MAXLENGTH, true);
    m.insert(PATTERN, true);
    m.insert(MINBYTES, true);
    m.insert(MAXBYTES, true);
    m
});

pub fn exists(name: &str) -> bool {
    VALIDATIONS.contains_key(name)
}

/// `false` for unknown names as well.
pub fn needs_value(name: &str) -> bool {
    VALIDATIONS.get(name).copied().unwrap_or(false)
}

/// Descriptor key holding a validation's value: `min` -> `fieldValidateRulesMin`.
pub fn descriptor_key(name: &str) -> String {
    format!("fieldValidateRules{}", upper_first(name))
}
