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

//! # Application Model
//!
//! An application is an ordered configuration plus the set of entities it
//! owns. Building one applies the catalogue defaults in two rounds: base
//! defaults are merged under the user settings, keys only the user knows
//! follow them, and late defaults fill whatever is still missing. That order
//! is the rendering order of the `config` block.
//!
//! Secrets are generated at construction: a base64 JWT secret for `jwt`
//! authentication, a hex remember-me key for `session` authentication.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use indexmap::{IndexMap, IndexSet};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::application::{base_defaults, late_defaults, BUILD_TOOLS};
use crate::catalog::{JdlApplicationType, JdlAuthenticationType, JdlDatabaseType};

pub const JWT_SECRET_KEY: &str = "jwtSecretKey";
pub const REMEMBER_ME_KEY: &str = "rememberMeKey";

/// Ordered application settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JdlApplicationConfig {
    settings: IndexMap<String, Value>,
}

impl JdlApplicationConfig {
    /// Applies defaults and generated secrets to `user` settings.
    pub fn with_defaults(user: IndexMap<String, Value>) -> Self {
        let mut settings = IndexMap::new();
        for (key, default) in base_defaults() {
            let value = user.get(key).cloned().unwrap_or(default);
            settings.insert(key.to_string(), value);
        }
        for (key, value) in &user {
            if !settings.contains_key(key) {
                settings.insert(key.clone(), value.clone());
            }
        }
        for (key, default) in late_defaults() {
            settings.entry(key.to_string()).or_insert(default);
        }

        let mut config = Self { settings };
        if !user.contains_key("packageFolder") {
            if let Some(package_name) = config.get_str("packageName") {
                let folder = package_name.replace('.', "/");
                config.set("packageFolder", Value::String(folder));
            }
        }
        if !user.contains_key("skipClient")
            && matches!(
                config.application_type(),
                Some(JdlApplicationType::Microservice) | Some(JdlApplicationType::Uaa)
            )
        {
            config.set("skipClient", Value::Bool(true));
        }
        config.generate_secrets();
        config
    }

    fn generate_secrets(&mut self) {
        match self.authentication_type() {
            Some(JdlAuthenticationType::Jwt) if !self.contains(JWT_SECRET_KEY) => {
                let secret = STANDARD.encode(random_hex(64));
                self.set(JWT_SECRET_KEY, Value::String(secret));
            }
            Some(JdlAuthenticationType::Session) if !self.contains(REMEMBER_ME_KEY) => {
                self.set(REMEMBER_ME_KEY, Value::String(random_hex(50)));
            }
            _ => {}
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// Non-empty string setting.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.settings
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.settings.get(key).and_then(Value::as_bool)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_null())
    }

    /// Replaces the value in place, or appends a new key.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.settings.insert(key.into(), value);
    }

    /// Removes a key while keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.settings.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.settings.iter()
    }

    pub fn base_name(&self) -> Option<&str> {
        self.get_str("baseName")
    }

    pub fn application_type(&self) -> Option<JdlApplicationType> {
        self.get_str("applicationType").and_then(|s| s.parse().ok())
    }

    pub fn authentication_type(&self) -> Option<JdlAuthenticationType> {
        self.get_str("authenticationType").and_then(|s| s.parse().ok())
    }

    pub fn database_type(&self) -> Option<JdlDatabaseType> {
        self.get_str("databaseType").and_then(|s| s.parse().ok())
    }
}

fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill(bytes.as_mut_slice());
    hex::encode(bytes)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// A generated application with its configuration and owned entities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlApplication {
    pub config: JdlApplicationConfig,
    pub entity_names: IndexSet<String>,
}

impl Default for JdlApplication {
    fn default() -> Self {
        Self::new(IndexMap::new())
    }
}

impl JdlApplication {
    pub fn new(config: IndexMap<String, Value>) -> Self {
        Self {
            config: JdlApplicationConfig::with_defaults(config),
            entity_names: IndexSet::new(),
        }
    }

    pub fn with_entity_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_entity_names(names);
        self
    }

    pub fn add_entity_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity_names.extend(names.into_iter().map(Into::into));
    }

    pub fn base_name(&self) -> Option<&str> {
        self.config.base_name()
    }

    pub fn errors(&self) -> Vec<String> {
        let config = &self.config;
        let mut errors = Vec::new();
        if config.base_name().is_none() {
            errors.push("No base name".to_string());
        }
        if config.get_str("authenticationType").is_none() {
            errors.push("No authentication type".to_string());
        }
        match config.get_str("buildTool") {
            None => errors.push("No build tool".to_string()),
            Some(tool) if !BUILD_TOOLS.contains(&tool) => {
                errors.push(format!("Unknown build tool '{}'", tool))
            }
            Some(_) => {}
        }
        if config.get_bool("enableTranslation") == Some(true)
            && config.get_str("nativeLanguage").is_none()
        {
            errors.push("No native language".to_string());
        }
        match config.authentication_type() {
            Some(JdlAuthenticationType::Jwt) if !config.contains(JWT_SECRET_KEY) => {
                errors.push("No JWT secret key".to_string())
            }
            Some(JdlAuthenticationType::Session) if !config.contains(REMEMBER_ME_KEY) => {
                errors.push("No remember-me key".to_string())
            }
            _ => {}
        }
        if matches!(
            config.application_type(),
            Some(JdlApplicationType::Microservice) | Some(JdlApplicationType::Uaa)
        ) && config.get_bool("skipClient") != Some(true)
        {
            errors.push("Microservice and UAA applications must skip the client".to_string());
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

impl fmt::Display for JdlApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("application {\n  config {\n")?;
        for (key, value) in self.config.iter() {
            let rendered = render_value(value);
            if rendered.is_empty() {
                writeln!(f, "    {}", key)?;
            } else {
                writeln!(f, "    {} {}", key, rendered)?;
            }
        }
        f.write_str("  }")?;
        if !self.entity_names.is_empty() {
            let names: Vec<&str> = self.entity_names.iter().map(String::as_str).collect();
            write!(f, "\n  entities {}", names.join(", "))?;
        }
        f.write_str("\n}")
    }
}
