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

//! Parse tree handed over by the JDL grammar.
//!
//! The grammar itself lives outside this crate; it produces a
//! [`JdlDocument`] either directly or as JSON/YAML.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::JdlRelationshipType;
use crate::errors::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JdlDocument {
    pub constants: IndexMap<String, Value>,
    pub applications: Vec<JdlDocApplication>,
    pub entities: Vec<JdlDocEntity>,
    pub enums: Vec<JdlDocEnum>,
    pub relationships: Vec<JdlDocRelationship>,
    pub options: Vec<JdlDocOption>,
}

impl JdlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn with_constant(mut self, name: impl Into<String>, value: Value) -> Self {
        self.constants.insert(name.into(), value);
        self
    }

    pub fn with_application(mut self, application: JdlDocApplication) -> Self {
        self.applications.push(application);
        self
    }

    pub fn with_entity(mut self, entity: JdlDocEntity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn with_enum(mut self, enumeration: JdlDocEnum) -> Self {
        self.enums.push(enumeration);
        self
    }

    pub fn with_relationship(mut self, relationship: JdlDocRelationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn with_option(mut self, option: JdlDocOption) -> Self {
        self.options.push(option);
        self
    }
}

/// Entity names selected with `*`, a list, and exclusions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JdlDocEntityList {
    pub list: Vec<String>,
    pub excluded: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JdlDocApplication {
    pub config: IndexMap<String, Value>,
    pub entities: Option<JdlDocEntityList>,
}

impl JdlDocApplication {
    pub fn new(config: IndexMap<String, Value>) -> Self {
        Self {
            config,
            entities: None,
        }
    }

    pub fn with_entities(mut self, list: &[&str], excluded: &[&str]) -> Self {
        self.entities = Some(JdlDocEntityList {
            list: list.iter().map(|s| s.to_string()).collect(),
            excluded: excluded.iter().map(|s| s.to_string()).collect(),
        });
        self
    }
}

/// `/** … */` comments precede what they document; `//` comments trail it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JdlCommentForm {
    Leading,
    Trailing,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlDocComment {
    pub text: String,
    pub form: JdlCommentForm,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlDocValidation {
    pub key: String,
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlDocField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub validations: Vec<JdlDocValidation>,
}

impl JdlDocField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            validations: Vec::new(),
        }
    }

    pub fn with_validation(mut self, key: impl Into<String>, value: Option<Value>) -> Self {
        self.validations.push(JdlDocValidation {
            key: key.into(),
            value,
        });
        self
    }
}

/// One item of an entity body, in source order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum JdlDocEntityItem {
    Field(JdlDocField),
    Comment(JdlDocComment),
    /// The comma between two fields.
    Separator,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlDocEntity {
    pub name: String,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub javadoc: Option<String>,
    #[serde(default)]
    pub body: Vec<JdlDocEntityItem>,
}

impl JdlDocEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: None,
            javadoc: None,
            body: Vec::new(),
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn with_javadoc(mut self, javadoc: impl Into<String>) -> Self {
        self.javadoc = Some(javadoc.into());
        self
    }

    pub fn field(mut self, field: JdlDocField) -> Self {
        self.body.push(JdlDocEntityItem::Field(field));
        self
    }

    pub fn leading_comment(mut self, text: impl Into<String>) -> Self {
        self.body.push(JdlDocEntityItem::Comment(JdlDocComment {
            text: text.into(),
            form: JdlCommentForm::Leading,
        }));
        self
    }

    pub fn trailing_comment(mut self, text: impl Into<String>) -> Self {
        self.body.push(JdlDocEntityItem::Comment(JdlDocComment {
            text: text.into(),
            form: JdlCommentForm::Trailing,
        }));
        self
    }

    pub fn separator(mut self) -> Self {
        self.body.push(JdlDocEntityItem::Separator);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlDocEnum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub javadoc: Option<String>,
}

impl JdlDocEnum {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            javadoc: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlDocRelationshipEnd {
    pub name: String,
    #[serde(default)]
    pub injected_field: Option<String>,
    #[serde(default)]
    pub javadoc: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl JdlDocRelationshipEnd {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            injected_field: None,
            javadoc: None,
            required: false,
        }
    }

    pub fn with_injected_field(mut self, field: impl Into<String>) -> Self {
        self.injected_field = Some(field.into());
        self
    }

    pub fn with_javadoc(mut self, javadoc: impl Into<String>) -> Self {
        self.javadoc = Some(javadoc.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlDocRelationship {
    pub cardinality: JdlRelationshipType,
    pub from: JdlDocRelationshipEnd,
    pub to: JdlDocRelationshipEnd,
}

impl JdlDocRelationship {
    pub fn new(
        cardinality: JdlRelationshipType,
        from: JdlDocRelationshipEnd,
        to: JdlDocRelationshipEnd,
    ) -> Self {
        Self {
            cardinality,
            from,
            to,
        }
    }
}

/// An option declaration such as `dto * with mapstruct except A`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JdlDocOption {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub list: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
}

impl JdlDocOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            list: Vec::new(),
            excluded: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn for_entities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn except<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = names.into_iter().map(Into::into).collect();
        self
    }
}
