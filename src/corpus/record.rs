// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::error::CorpusError;
use crate::search::utils::normalize;
use crate::snippet::link_targets;
use crate::types::{Entry, EntryType, Visibility};
use crate::url::split_method_spec;
use serde::{Deserialize, Serialize};

/// One entry as the documentation exporter writes it.
///
/// Only `name`, `type` and `version` are required; the rest is derived in
/// [`EntryRecord::into_entry`].
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct EntryRecord {
    #[serde(default)]
    pub key: Option<String>,
    pub name: String,
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub library: Option<String>,
    pub version: String,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub name_raw: Option<String>,
    #[serde(default)]
    pub local_name_raw: Option<String>,
    #[serde(default)]
    pub normalized_class: Option<String>,
    #[serde(default)]
    pub normalized_module: Option<String>,
    #[serde(default)]
    pub normalized_object: Option<String>,
    #[serde(default)]
    pub related_names: Vec<String>,
    #[serde(default)]
    pub score: f64,
}

impl EntryRecord {
    pub fn into_entry(self) -> Result<Entry, CorpusError> {
        let key = self
            .key
            .unwrap_or_else(|| format!("{}:{}", self.version, self.name));
        let entry_type =
            EntryType::parse(&self.entry_type).ok_or_else(|| CorpusError::UnknownType {
                key: key.clone(),
                value: self.entry_type.clone(),
            })?;
        let local_name = self
            .local_name
            .unwrap_or_else(|| default_local_name(entry_type, &self.name).to_string());

        let summary = self
            .summary
            .or_else(|| self.description.as_deref().and_then(first_paragraph));
        let mut related_names = self
            .description
            .as_deref()
            .map(link_targets)
            .unwrap_or_default();
        for name in self.related_names {
            if !related_names.contains(&name) {
                related_names.push(name);
            }
        }

        Ok(Entry {
            key,
            label: self.label.unwrap_or_else(|| self.name.clone()),
            name_raw: self.name_raw.unwrap_or_else(|| self.name.clone()),
            local_name_raw: self.local_name_raw.unwrap_or_else(|| local_name.clone()),
            normalized_class: self
                .normalized_class
                .or_else(|| self.class.as_deref().map(normalize)),
            normalized_module: self
                .normalized_module
                .or_else(|| self.module.as_deref().map(normalize)),
            normalized_object: self
                .normalized_object
                .or_else(|| self.object.as_deref().map(normalize)),
            name: self.name,
            local_name,
            entry_type,
            class: self.class,
            module: self.module,
            object: self.object,
            library: self.library,
            version: self.version,
            visibility: self.visibility,
            summary,
            description: self.description,
            document: self.document,
            signature: self.signature,
            related_names,
            score: self.score,
        })
    }
}

/// Classes go by their last `::` component, methods and constants by what
/// follows the type mark.
fn default_local_name(entry_type: EntryType, name: &str) -> &str {
    match entry_type {
        EntryType::Class | EntryType::Module | EntryType::Object => {
            name.rsplit("::").next().unwrap_or(name)
        }
        EntryType::InstanceMethod
        | EntryType::SingletonMethod
        | EntryType::ModuleFunction
        | EntryType::Constant
        | EntryType::Variable => split_method_spec(name).map_or(name, |(_, _, local)| local),
        _ => name,
    }
}

fn first_paragraph(description: &str) -> Option<String> {
    let paragraph = description.split("\n\n").next()?.trim();
    (!paragraph.is_empty()).then(|| paragraph.to_string())
}
