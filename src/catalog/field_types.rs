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

//! Legal field types per database type, and the blob type mapping used by
//! the JSON descriptors.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::catalog::JdlDatabaseType;

pub const BLOB: &str = "Blob";
pub const ANY_BLOB: &str = "AnyBlob";
pub const IMAGE_BLOB: &str = "ImageBlob";
pub const TEXT_BLOB: &str = "TextBlob";

/// Descriptor field type shared by every blob flavour.
pub const BYTE_ARRAY: &str = "byte[]";

/// Types available to relational, document and key-value stores.
pub static COMMON_TYPES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut s = HashSet::new();
    s.insert("String");
    s.insert("Integer");
    s.insert("Long");
    s.insert("BigDecimal");
    s.insert("Float");
    s.insert("Double");
    s.insert("Boolean");
    s.insert("LocalDate");
    s.insert("ZonedDateTime");
    s.insert("Instant");
    s.insert(BLOB);
    s.insert(ANY_BLOB);
    s.insert(IMAGE_BLOB);
    s.insert(TEXT_BLOB);
    s
});

pub static CASSANDRA_TYPES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut s = HashSet::new();
    s.insert("String");
    s.insert("Integer");
    s.insert("Long");
    s.insert("BigDecimal");
    s.insert("Float");
    s.insert("Double");
    s.insert("Boolean");
    s.insert("Date");
    s.insert("UUID");
    s.insert("Instant");
    s
});

/// True when `field_type` is a built-in type for `database_type`. Enum
/// types are checked separately against the declared enums.
pub fn is_legal(database_type: JdlDatabaseType, field_type: &str) -> bool {
    match database_type {
        JdlDatabaseType::Cassandra => CASSANDRA_TYPES.contains(field_type),
        _ => COMMON_TYPES.contains(field_type),
    }
}

/// `fieldTypeBlobContent` written for a blob type.
pub fn blob_content(field_type: &str) -> Option<&'static str> {
    match field_type {
        BLOB | ANY_BLOB => Some("any"),
        IMAGE_BLOB => Some("image"),
        TEXT_BLOB => Some("text"),
        _ => None,
    }
}

/// Inverse of [`blob_content`].
pub fn blob_type(content: &str) -> Option<&'static str> {
    match content {
        "any" => Some(BLOB),
        "image" => Some(IMAGE_BLOB),
        "text" => Some(TEXT_BLOB),
        _ => None,
    }
}
