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

//! Application, authentication and database types plus the application
//! configuration defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::JdlError;

/// Kind of generated application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JdlApplicationType {
    Monolith,
    Microservice,
    Gateway,
    Uaa,
}

impl JdlApplicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JdlApplicationType::Monolith => "monolith",
            JdlApplicationType::Microservice => "microservice",
            JdlApplicationType::Gateway => "gateway",
            JdlApplicationType::Uaa => "uaa",
        }
    }
}

impl fmt::Display for JdlApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JdlApplicationType {
    type Err = JdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monolith" => Ok(JdlApplicationType::Monolith),
            "microservice" => Ok(JdlApplicationType::Microservice),
            "gateway" => Ok(JdlApplicationType::Gateway),
            "uaa" => Ok(JdlApplicationType::Uaa),
            other => Err(JdlError::validation(format!(
                "Unknown application type '{}'.",
                other
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JdlAuthenticationType {
    Jwt,
    Session,
    Oauth2,
    Uaa,
}

impl JdlAuthenticationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JdlAuthenticationType::Jwt => "jwt",
            JdlAuthenticationType::Session => "session",
            JdlAuthenticationType::Oauth2 => "oauth2",
            JdlAuthenticationType::Uaa => "uaa",
        }
    }
}

impl FromStr for JdlAuthenticationType {
    type Err = JdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jwt" => Ok(JdlAuthenticationType::Jwt),
            "session" => Ok(JdlAuthenticationType::Session),
            "oauth2" => Ok(JdlAuthenticationType::Oauth2),
            "uaa" => Ok(JdlAuthenticationType::Uaa),
            other => Err(JdlError::validation(format!(
                "Unknown authentication type '{}'.",
                other
            ))),
        }
    }
}

/// Database type driving the legal field types and option combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JdlDatabaseType {
    Sql,
    Mysql,
    Mariadb,
    Postgresql,
    Oracle,
    Mssql,
    Mongodb,
    Cassandra,
    Couchbase,
    No,
}

impl JdlDatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JdlDatabaseType::Sql => "sql",
            JdlDatabaseType::Mysql => "mysql",
            JdlDatabaseType::Mariadb => "mariadb",
            JdlDatabaseType::Postgresql => "postgresql",
            JdlDatabaseType::Oracle => "oracle",
            JdlDatabaseType::Mssql => "mssql",
            JdlDatabaseType::Mongodb => "mongodb",
            JdlDatabaseType::Cassandra => "cassandra",
            JdlDatabaseType::Couchbase => "couchbase",
            JdlDatabaseType::No => "no",
        }
    }
}

impl fmt::Display for JdlDatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JdlDatabaseType {
    type Err = JdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sql" => Ok(JdlDatabaseType::Sql),
            "mysql" => Ok(JdlDatabaseType::Mysql),
            "mariadb" => Ok(JdlDatabaseType::Mariadb),
            "postgresql" => Ok(JdlDatabaseType::Postgresql),
            "oracle" => Ok(JdlDatabaseType::Oracle),
            "mssql" => Ok(JdlDatabaseType::Mssql),
            "mongodb" => Ok(JdlDatabaseType::Mongodb),
            "cassandra" => Ok(JdlDatabaseType::Cassandra),
            "couchbase" => Ok(JdlDatabaseType::Couchbase),
            "no" => Ok(JdlDatabaseType::No),
            other => Err(JdlError::validation(format!(
                "Unknown database type '{}'.",
                other
            ))),
        }
    }
}

pub const BUILD_TOOLS: &[&str] = &["maven", "gradle"];

/// Settings merged under the user configuration. They render first, in this
/// order.
pub fn base_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("applicationType", json!("monolith")),
        ("clientPackageManager", json!("yarn")),
        ("databaseType", json!("sql")),
        ("devDatabaseType", json!("h2Disk")),
        ("enableHibernateCache", json!(true)),
        ("enableSwaggerCodegen", json!(false)),
        ("enableTranslation", json!(true)),
        ("simPrefix", json!("sim")),
        ("languages", json!(["en", "fr"])),
        ("messageBroker", json!(false)),
        ("nativeLanguage", json!("en")),
        ("packageName", json!("com.mycompany.myapp")),
        ("packageFolder", json!("com/mycompany/myapp")),
        ("prodDatabaseType", json!("mysql")),
        ("searchEngine", json!(false)),
        ("serviceDiscoveryType", json!(false)),
        ("skipClient", json!(false)),
        ("skipServer", json!(false)),
        ("testFrameworks", json!([])),
        ("useSass", json!(false)),
        ("websocket", json!(false)),
    ]
}

/// Settings filled in only when absent, after any user-only keys.
pub fn late_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("authenticationType", json!("jwt")),
        ("baseName", json!("simlife")),
        ("buildTool", json!("maven")),
        ("cacheProvider", json!("ehcache")),
        ("clientFramework", json!("angularX")),
        ("serverPort", json!(8080)),
        ("skipUserManagement", json!(false)),
    ]
}
