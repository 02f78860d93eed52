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

//! String and date helpers shared by the parsers and exporters.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;

static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Lower-cases the first character only: `JobHistory` -> `jobHistory`.
pub fn lower_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first character only: `jobHistory` -> `JobHistory`.
pub fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn words(value: &str) -> Vec<String> {
    let spaced = CASE_BOUNDARY.replace_all(value, "$1 $2");
    WORD_SEPARATOR
        .split(&spaced)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lower camel case: `Job History` and `job_history` both give `jobHistory`.
pub fn camel_case(value: &str) -> String {
    words(value)
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let lower = w.to_lowercase();
            if i == 0 {
                lower
            } else {
                upper_first(&lower)
            }
        })
        .collect()
}

/// Liquibase changelog stamp (`YYYYMMDDHHmmss`) for `date` shifted by
/// `increment` seconds.
pub fn changelog_date(date: DateTime<Utc>, increment: i64) -> String {
    (date + Duration::seconds(increment))
        .format("%Y%m%d%H%M%S")
        .to_string()
}

/// Splits an injected field such as `department(foo)` into its name and the
/// optional displayed field.
pub fn split_injected_field(value: &str) -> (String, Option<String>) {
    match value.find('(') {
        Some(open) => {
            let name = value[..open].trim().to_string();
            let rest = value[open + 1..].trim_end_matches(')').trim();
            if rest.is_empty() {
                (name, None)
            } else {
                (name, Some(rest.to_string()))
            }
        }
        None => (value.trim().to_string(), None),
    }
}

/// Renders a multi-line comment as a javadoc block, each line prefixed by
/// `indent`.
pub(crate) fn comment_block(comment: &str, indent: &str) -> String {
    let mut out = format!("{}/**\n", indent);
    for line in comment.lines() {
        out.push_str(&format!("{} * {}\n", indent, line));
    }
    out.push_str(&format!("{} */\n", indent));
    out
}
