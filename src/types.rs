// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search corpus.
//!
//! An [`Entry`] is one documentation unit: a class, a method, a constant, a
//! library page. Entries are read-only once loaded; every request derives its
//! own hits, groups and summaries from them and throws those away afterwards.
//!
//! # Invariants
//!
//! - **Entry**: exactly one `entry_type`, and at most one of `class`, `module`,
//!   `object` set. The corpus loader rejects records that break this.
//! - **Entry**: `score >= 0`. The version boost doubles a hit's score, which
//!   only raises rank if scores are never negative.
//! - **EntryId**: indexes into the store's entry vector. Ids are assigned in
//!   load order and never reused.
//!
//! Field access goes through [`EntryField`]; there is no lookup by column name
//! string, so an unknown field is a compile error rather than a silent `None`.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe entry identifier (position in the store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct EntryId(pub u32);

impl EntryId {
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// ENUMS
// =============================================================================

/// What kind of documentation unit an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    Class,
    Module,
    Object,
    InstanceMethod,
    SingletonMethod,
    ModuleFunction,
    Constant,
    Variable,
    Document,
    Library,
    Function,
    Macro,
}

impl EntryType {
    pub const ALL: [EntryType; 12] = [
        EntryType::Class,
        EntryType::Module,
        EntryType::Object,
        EntryType::InstanceMethod,
        EntryType::SingletonMethod,
        EntryType::ModuleFunction,
        EntryType::Constant,
        EntryType::Variable,
        EntryType::Document,
        EntryType::Library,
        EntryType::Function,
        EntryType::Macro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Class => "class",
            EntryType::Module => "module",
            EntryType::Object => "object",
            EntryType::InstanceMethod => "instance-method",
            EntryType::SingletonMethod => "singleton-method",
            EntryType::ModuleFunction => "module-function",
            EntryType::Constant => "constant",
            EntryType::Variable => "variable",
            EntryType::Document => "document",
            EntryType::Library => "library",
            EntryType::Function => "function",
            EntryType::Macro => "macro",
        }
    }

    /// Parse the kebab-case name. Spaces are accepted in place of dashes
    /// because the documentation parser emits labels like `instance method`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().replace(' ', "-");
        EntryType::ALL
            .into_iter()
            .find(|entry_type| entry_type.as_str() == normalized)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

/// Every entry field a predicate, facet or drilldown can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryField {
    Name,
    LocalName,
    Label,
    Type,
    Class,
    Module,
    Object,
    Library,
    Version,
    Visibility,
    Summary,
    Description,
    Document,
    Signature,
    NameRaw,
    LocalNameRaw,
    NormalizedClass,
    NormalizedModule,
    NormalizedObject,
}

impl EntryField {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryField::Name => "name",
            EntryField::LocalName => "local_name",
            EntryField::Label => "label",
            EntryField::Type => "type",
            EntryField::Class => "class",
            EntryField::Module => "module",
            EntryField::Object => "object",
            EntryField::Library => "library",
            EntryField::Version => "version",
            EntryField::Visibility => "visibility",
            EntryField::Summary => "summary",
            EntryField::Description => "description",
            EntryField::Document => "document",
            EntryField::Signature => "signature",
            EntryField::NameRaw => "name_raw",
            EntryField::LocalNameRaw => "local_name_raw",
            EntryField::NormalizedClass => "normalized_class",
            EntryField::NormalizedModule => "normalized_module",
            EntryField::NormalizedObject => "normalized_object",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ENTRY
// =============================================================================

/// One indexed documentation unit.
///
/// Built by the corpus loader, which fills in the derived fields (`name_raw`,
/// `normalized_*`, `summary`) so that nothing downstream has to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique store key, `"<version>:<name>"` unless the record supplies one.
    pub key: String,
    pub name: String,
    pub local_name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub class: Option<String>,
    pub module: Option<String>,
    pub object: Option<String>,
    pub library: Option<String>,
    pub version: String,
    pub visibility: Option<Visibility>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub document: Option<String>,
    pub signature: Option<String>,
    pub name_raw: String,
    pub local_name_raw: String,
    pub normalized_class: Option<String>,
    pub normalized_module: Option<String>,
    pub normalized_object: Option<String>,
    #[serde(default)]
    pub related_names: Vec<String>,
    /// Intrinsic relevance prior, added to every hit on this entry.
    #[serde(default)]
    pub score: f64,
}

impl Entry {
    pub fn field(&self, field: EntryField) -> Option<&str> {
        match field {
            EntryField::Name => Some(self.name.as_str()),
            EntryField::LocalName => Some(self.local_name.as_str()),
            EntryField::Label => Some(self.label.as_str()),
            EntryField::Type => Some(self.entry_type.as_str()),
            EntryField::Class => self.class.as_deref(),
            EntryField::Module => self.module.as_deref(),
            EntryField::Object => self.object.as_deref(),
            EntryField::Library => self.library.as_deref(),
            EntryField::Version => Some(self.version.as_str()),
            EntryField::Visibility => self.visibility.map(Visibility::as_str),
            EntryField::Summary => self.summary.as_deref(),
            EntryField::Description => self.description.as_deref(),
            EntryField::Document => self.document.as_deref(),
            EntryField::Signature => self.signature.as_deref(),
            EntryField::NameRaw => Some(self.name_raw.as_str()),
            EntryField::LocalNameRaw => Some(self.local_name_raw.as_str()),
            EntryField::NormalizedClass => self.normalized_class.as_deref(),
            EntryField::NormalizedModule => self.normalized_module.as_deref(),
            EntryField::NormalizedObject => self.normalized_object.as_deref(),
        }
    }

    /// The scope owner, if any, as `(field, name)`.
    pub fn owner(&self) -> Option<(EntryField, &str)> {
        if let Some(class) = self.class.as_deref() {
            Some((EntryField::Class, class))
        } else if let Some(module) = self.module.as_deref() {
            Some((EntryField::Module, module))
        } else {
            self.object.as_deref().map(|object| (EntryField::Object, object))
        }
    }

    /// Number of owner references set. The loader keeps this at most 1.
    pub fn owner_count(&self) -> usize {
        [&self.class, &self.module, &self.object]
            .iter()
            .filter(|owner| owner.is_some())
            .count()
    }
}

/// One entry matched by a query, with its ranking score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: EntryId,
    pub score: f64,
}
