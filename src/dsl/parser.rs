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

use std::collections::HashMap;

use indexmap::IndexSet;
use serde_json::Value;

use crate::catalog::options::{self as option_catalog, CLIENT_ROOT_FOLDER, MICROSERVICE};
use crate::catalog::{field_types, JdlApplicationType, JdlDatabaseType, ALL_ENTITIES};
use crate::core::{
    JdlApplication, JdlEntity, JdlEnum, JdlField, JdlObject, JdlOption, JdlRelationship,
    JdlValidation,
};
use crate::dsl::document::{
    JdlCommentForm, JdlDocEntity, JdlDocEntityItem, JdlDocEntityList, JdlDocField, JdlDocOption,
    JdlDocRelationship, JdlDocument,
};
use crate::errors::{JdlError, Result};
use crate::utils::camel_case;

/// Settings steering a document parse.
#[derive(Clone, Debug, Default)]
pub struct JdlParserConfig {
    /// Gateways skip field type checks; microservices get the automatic
    /// microservice option and lose `clientRootFolder`.
    pub application_type: Option<JdlApplicationType>,
    /// Value of the automatic microservice option.
    pub application_name: Option<String>,
    /// Overrides the database type of every entity.
    pub database_type: Option<JdlDatabaseType>,
}

impl JdlParserConfig {
    pub fn application_type(mut self, application_type: JdlApplicationType) -> Self {
        self.application_type = Some(application_type);
        self
    }

    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    pub fn database_type(mut self, database_type: JdlDatabaseType) -> Self {
        self.database_type = Some(database_type);
        self
    }
}

/// Converts a [`JdlDocument`] into a validated [`JdlObject`].
#[derive(Debug, Default)]
pub struct JdlDocumentParser {
    config: JdlParserConfig,
}

impl JdlDocumentParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: JdlParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses `document` into a fresh aggregate.
    pub fn parse(&self, document: Option<&JdlDocument>) -> Result<JdlObject> {
        self.parse_into(document, JdlObject::new())
    }

    /// Parses `document` into `jdl`; the first failure aborts the parse.
    pub fn parse_into(&self, document: Option<&JdlDocument>, jdl: JdlObject) -> Result<JdlObject> {
        let document =
            document.ok_or_else(|| JdlError::argument("The parsed JDL content must be passed."))?;
        let mut run = DocumentRun {
            config: &self.config,
            document,
            jdl,
            database_types: HashMap::new(),
        };
        run.collect_database_types();
        run.fill_enums()?;
        run.fill_entities()?;
        run.fill_relationships()?;
        run.fill_options()?;
        run.assign_microservice()?;
        run.fill_applications()?;
        log::debug!(
            "parsed JDL document: {} entities, {} relationships, {} options",
            run.jdl.entity_quantity(),
            run.jdl.relationship_quantity(),
            run.jdl.option_quantity()
        );
        Ok(run.jdl)
    }
}

struct DocumentRun<'a> {
    config: &'a JdlParserConfig,
    document: &'a JdlDocument,
    jdl: JdlObject,
    /// Entity name -> database type of the declared application owning it.
    database_types: HashMap<String, JdlDatabaseType>,
}

impl DocumentRun<'_> {
    fn declared_entity_names(&self) -> Vec<String> {
        self.document.entities.iter().map(|e| e.name.clone()).collect()
    }

    fn collect_database_types(&mut self) {
        let declared = self.declared_entity_names();
        for application in &self.document.applications {
            let database_type = application
                .config
                .get("databaseType")
                .and_then(Value::as_str)
                .and_then(|s| s.parse().ok())
                .unwrap_or(JdlDatabaseType::Sql);
            if let Some(list) = &application.entities {
                for name in select_names(list, &declared) {
                    self.database_types.insert(name, database_type);
                }
            }
        }
    }

    fn database_type_for(&self, entity_name: &str) -> JdlDatabaseType {
        self.config
            .database_type
            .or_else(|| self.database_types.get(entity_name).copied())
            .unwrap_or(JdlDatabaseType::Sql)
    }

    fn fill_enums(&mut self) -> Result<()> {
        let document = self.document;
        for declared in &document.enums {
            let mut enumeration =
                JdlEnum::new(declared.name.clone(), declared.values.iter().cloned());
            if let Some(javadoc) = &declared.javadoc {
                enumeration = enumeration.with_comment(javadoc.clone());
            }
            self.jdl.add_enum(enumeration)?;
        }
        Ok(())
    }

    fn fill_entities(&mut self) -> Result<()> {
        let document = self.document;
        for declared in &document.entities {
            let table_name = declared
                .table_name
                .clone()
                .unwrap_or_else(|| declared.name.clone());
            let mut entity = JdlEntity::new(declared.name.clone()).with_table_name(table_name);
            entity.comment = declared.javadoc.clone();
            for (field, comment) in commented_fields(declared) {
                if field.name == "id" {
                    continue;
                }
                self.check_field_type(declared, field)?;
                entity.add_field(self.build_field(field, comment));
            }
            self.jdl.add_entity(entity)?;
        }
        Ok(())
    }

    fn check_field_type(&self, entity: &JdlDocEntity, field: &JdlDocField) -> Result<()> {
        if self.config.application_type == Some(JdlApplicationType::Gateway) {
            return Ok(());
        }
        let database_type = self.database_type_for(&entity.name);
        if field_types::is_legal(database_type, &field.field_type)
            || self.jdl.has_enum(&field.field_type)
        {
            return Ok(());
        }
        Err(JdlError::wrong_type(format!(
            "The type '{}' is an unknown field type for field '{}' of entity '{}'.",
            field.field_type, field.name, entity.name
        )))
    }

    fn build_field(&self, declared: &JdlDocField, comment: Option<String>) -> JdlField {
        let mut field = JdlField::new(declared.name.clone(), declared.field_type.clone());
        field.comment = comment;
        for validation in &declared.validations {
            let value = validation.value.as_ref().map(|v| self.substitute_constant(v));
            field.add_validation(JdlValidation::new(validation.key.clone(), value));
        }
        field
    }

    fn substitute_constant(&self, value: &Value) -> Value {
        match value {
            Value::String(name) => self
                .document
                .constants
                .get(name)
                .cloned()
                .unwrap_or_else(|| value.clone()),
            other => other.clone(),
        }
    }

    fn resolve_entity(&self, name: &str, relationship: &JdlDocRelationship) -> Result<()> {
        if self.jdl.has_entity(name) || JdlEntity::is_user(name) {
            return Ok(());
        }
        Err(JdlError::validation(format!(
            "In the relationship between {} and {}, {} is not declared.",
            relationship.from.name, relationship.to.name, name
        )))
    }

    fn fill_relationships(&mut self) -> Result<()> {
        let document = self.document;
        for declared in &document.relationships {
            self.resolve_entity(&declared.from.name, declared)?;
            self.resolve_entity(&declared.to.name, declared)?;
            let mut relationship = JdlRelationship::new(
                declared.cardinality,
                declared.from.name.clone(),
                declared.to.name.clone(),
            );
            relationship.injected_field_in_from = Some(
                declared
                    .from
                    .injected_field
                    .clone()
                    .unwrap_or_else(|| camel_case(&declared.to.name)),
            );
            relationship.injected_field_in_to = declared.to.injected_field.clone();
            relationship.is_injected_field_in_from_required = Some(declared.from.required);
            relationship.is_injected_field_in_to_required = Some(declared.to.required);
            relationship.comment_in_from = declared.from.javadoc.clone();
            relationship.comment_in_to = declared.to.javadoc.clone();
            self.jdl.add_relationship(relationship)?;
        }
        Ok(())
    }

    fn fill_options(&mut self) -> Result<()> {
        let document = self.document;
        for declared in &document.options {
            let name = option_catalog::resolve_alias(&declared.name);
            if name == CLIENT_ROOT_FOLDER
                && self.config.application_type == Some(JdlApplicationType::Microservice)
            {
                log::debug!("clientRootFolder dropped for a microservice application");
                continue;
            }
            let option = build_option(name, declared)?;
            self.check_option_entities(name, declared)?;
            self.check_option_database(name, declared)?;
            self.jdl.add_option(option)?;
        }
        Ok(())
    }

    fn check_option_entities(&self, name: &str, declared: &JdlDocOption) -> Result<()> {
        for entity_name in declared.list.iter().chain(declared.excluded.iter()) {
            if entity_name != ALL_ENTITIES && !self.jdl.has_entity(entity_name) {
                return Err(JdlError::validation(format!(
                    "The entity '{}' in the '{}' option isn't declared.",
                    entity_name, name
                )));
            }
        }
        Ok(())
    }

    fn check_option_database(&self, name: &str, declared: &JdlDocOption) -> Result<()> {
        let targets: Vec<String> = if declared.list.is_empty()
            || declared.list.iter().any(|n| n == ALL_ENTITIES)
        {
            self.jdl
                .entity_names()
                .into_iter()
                .filter(|n| !declared.excluded.contains(n))
                .collect()
        } else {
            declared.list.clone()
        };
        let mut database_types: IndexSet<JdlDatabaseType> =
            targets.iter().map(|n| self.database_type_for(n)).collect();
        if database_types.is_empty() {
            database_types.insert(self.database_type_for(""));
        }
        for database_type in database_types {
            if let Some(reason) = option_catalog::illegal_for_database(name, database_type) {
                return Err(JdlError::illegal_option(reason));
            }
        }
        Ok(())
    }

    fn assign_microservice(&mut self) -> Result<()> {
        if self.config.application_type != Some(JdlApplicationType::Microservice)
            || self.jdl.entity_quantity() == 0
        {
            return Ok(());
        }
        let explicit = self
            .document
            .options
            .iter()
            .any(|o| option_catalog::resolve_alias(&o.name) == MICROSERVICE);
        if explicit {
            return Ok(());
        }
        let application_name = self.config.application_name.clone().ok_or_else(|| {
            JdlError::argument("The application name must be passed to parse a microservice JDL.")
        })?;
        let option = JdlOption::binary(MICROSERVICE, application_name)?
            .with_entity_names(self.jdl.entity_names());
        self.jdl.add_option(option)
    }

    fn fill_applications(&mut self) -> Result<()> {
        let declared_names = self.jdl.entity_names();
        let document = self.document;
        for declared in &document.applications {
            let mut application = JdlApplication::new(declared.config.clone());
            if let Some(list) = &declared.entities {
                let base_name = application.base_name().unwrap_or_default().to_string();
                for name in list.list.iter().chain(list.excluded.iter()) {
                    if name != ALL_ENTITIES && !self.jdl.has_entity(name) {
                        return Err(JdlError::validation(format!(
                            "The entity '{}' in the application '{}' isn't declared.",
                            name, base_name
                        )));
                    }
                }
                application.add_entity_names(select_names(list, &declared_names));
            }
            self.jdl.add_application(application)?;
        }
        Ok(())
    }
}

fn build_option(name: &str, declared: &JdlDocOption) -> Result<JdlOption> {
    let option = if option_catalog::is_unary(name) {
        JdlOption::unary(name)?
    } else if option_catalog::is_binary(name) {
        JdlOption::binary(name, declared.value.clone().unwrap_or_default())?
    } else {
        return Err(JdlError::illegal_option(format!(
            "The option's name must be valid, got '{}'.",
            declared.name
        )));
    };
    let option = if declared.list.is_empty() {
        option
    } else {
        option.with_entity_names(declared.list.iter().cloned())
    };
    Ok(option.with_excluded_names(declared.excluded.iter().cloned()))
}

/// Resolves `*` against `declared` and drops exclusions.
fn select_names(list: &JdlDocEntityList, declared: &[String]) -> Vec<String> {
    let candidates: Vec<String> = if list.list.iter().any(|n| n == ALL_ENTITIES) {
        declared.to_vec()
    } else {
        list.list.clone()
    };
    candidates
        .into_iter()
        .filter(|n| !list.excluded.contains(n))
        .collect()
}

/// Pairs every field of `entity` with the comment it receives.
///
/// A leading comment goes to the next field. A trailing comment goes to the
/// previous field unless a separator came in between, in which case it goes
/// to the next one. The first comment aimed at a field wins.
fn commented_fields(entity: &JdlDocEntity) -> Vec<(&JdlDocField, Option<String>)> {
    let mut fields: Vec<(&JdlDocField, Option<String>)> = Vec::new();
    let mut pending: Option<String> = None;
    let mut separated = true;
    for item in &entity.body {
        match item {
            JdlDocEntityItem::Field(field) => {
                fields.push((field, pending.take()));
                separated = false;
            }
            JdlDocEntityItem::Separator => separated = true,
            JdlDocEntityItem::Comment(comment) => {
                let previous = if comment.form == JdlCommentForm::Trailing && !separated {
                    fields.last_mut()
                } else {
                    None
                };
                match previous {
                    Some((_, slot)) => {
                        if slot.is_none() {
                            *slot = Some(comment.text.clone());
                        }
                    }
                    None => {
                        if pending.is_none() {
                            pending = Some(comment.text.clone());
                        }
                    }
                }
            }
        }
    }
    fields
}
