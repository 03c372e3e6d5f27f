// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The facet vocabulary: which `key:` prefixes a search path may carry.
//!
//! Anything outside this set is dropped by the parser before it can reach the
//! compiler, so every later stage can match exhaustively on [`FacetKey`].

use crate::types::{EntryField, EntryType};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacetKey {
    Query,
    Version,
    Type,
    Class,
    Module,
    Object,
    Library,
    InstanceMethod,
    SingletonMethod,
    ModuleFunction,
    Constant,
}

impl FacetKey {
    pub const ALL: [FacetKey; 11] = [
        FacetKey::Query,
        FacetKey::Version,
        FacetKey::Type,
        FacetKey::Class,
        FacetKey::Module,
        FacetKey::Object,
        FacetKey::Library,
        FacetKey::InstanceMethod,
        FacetKey::SingletonMethod,
        FacetKey::ModuleFunction,
        FacetKey::Constant,
    ];

    /// Owner facets offered as drilldowns once a type is pinned.
    pub const OWNERS: [FacetKey; 3] = [FacetKey::Class, FacetKey::Module, FacetKey::Object];

    /// Case-sensitive lookup of a path key.
    pub fn parse(key: &str) -> Option<Self> {
        FacetKey::ALL.into_iter().find(|facet| facet.as_str() == key)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FacetKey::Query => "query",
            FacetKey::Version => "version",
            FacetKey::Type => "type",
            FacetKey::Class => "class",
            FacetKey::Module => "module",
            FacetKey::Object => "object",
            FacetKey::Library => "library",
            FacetKey::InstanceMethod => "instance-method",
            FacetKey::SingletonMethod => "singleton-method",
            FacetKey::ModuleFunction => "module-function",
            FacetKey::Constant => "constant",
        }
    }

    /// The entry field a facet value is compared against.
    ///
    /// `query` spans many fields and has no single column. The scoped
    /// identifier facets report `local_name`, the display identifier their
    /// values are written in.
    pub fn field(self) -> Option<EntryField> {
        match self {
            FacetKey::Query => None,
            FacetKey::Version => Some(EntryField::Version),
            FacetKey::Type => Some(EntryField::Type),
            FacetKey::Class => Some(EntryField::Class),
            FacetKey::Module => Some(EntryField::Module),
            FacetKey::Object => Some(EntryField::Object),
            FacetKey::Library => Some(EntryField::Library),
            FacetKey::InstanceMethod
            | FacetKey::SingletonMethod
            | FacetKey::ModuleFunction
            | FacetKey::Constant => Some(EntryField::LocalName),
        }
    }

    /// For scoped identifier facets, the entry type they pin.
    pub fn scoped_type(self) -> Option<EntryType> {
        match self {
            FacetKey::InstanceMethod => Some(EntryType::InstanceMethod),
            FacetKey::SingletonMethod => Some(EntryType::SingletonMethod),
            FacetKey::ModuleFunction => Some(EntryType::ModuleFunction),
            FacetKey::Constant => Some(EntryType::Constant),
            _ => None,
        }
    }

    /// The facet that links to an owner of the given field, if any.
    pub fn from_owner_field(field: EntryField) -> Option<Self> {
        match field {
            EntryField::Class => Some(FacetKey::Class),
            EntryField::Module => Some(FacetKey::Module),
            EntryField::Object => Some(FacetKey::Object),
            _ => None,
        }
    }

    /// The facet that pins an entry of this type by name, if one exists.
    pub fn for_entry_type(entry_type: EntryType) -> Option<Self> {
        match entry_type {
            EntryType::Class => Some(FacetKey::Class),
            EntryType::Module => Some(FacetKey::Module),
            EntryType::Object => Some(FacetKey::Object),
            EntryType::Library => Some(FacetKey::Library),
            EntryType::InstanceMethod => Some(FacetKey::InstanceMethod),
            EntryType::SingletonMethod => Some(FacetKey::SingletonMethod),
            EntryType::ModuleFunction => Some(FacetKey::ModuleFunction),
            EntryType::Constant => Some(FacetKey::Constant),
            _ => None,
        }
    }

    /// Display label used in titles and topic paths.
    pub fn label(self) -> &'static str {
        match self {
            FacetKey::Query => "クエリ",
            FacetKey::Version => "バージョン",
            FacetKey::Type => "種類",
            FacetKey::Class => "クラス",
            FacetKey::Module => "モジュール",
            FacetKey::Object => "オブジェクト",
            FacetKey::Library => "ライブラリ",
            FacetKey::InstanceMethod => "インスタンスメソッド",
            FacetKey::SingletonMethod => "シングルトンメソッド",
            FacetKey::ModuleFunction => "モジュールファンクション",
            FacetKey::Constant => "定数",
        }
    }
}

impl fmt::Display for FacetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FacetKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

pub fn type_label(entry_type: EntryType) -> &'static str {
    match entry_type {
        EntryType::Class => "クラス",
        EntryType::Module => "モジュール",
        EntryType::Object => "オブジェクト",
        EntryType::InstanceMethod => "インスタンスメソッド",
        EntryType::SingletonMethod => "シングルトンメソッド",
        EntryType::ModuleFunction => "モジュールファンクション",
        EntryType::Constant => "定数",
        EntryType::Variable => "変数",
        EntryType::Document => "文書",
        EntryType::Library => "ライブラリ",
        EntryType::Function => "関数",
        EntryType::Macro => "マクロ",
    }
}

/// Label for a facet value as shown to readers. Type values are translated,
/// the builtin pseudo-library gets its own name, everything else is as-is.
pub fn value_label(key: FacetKey, value: &str) -> String {
    match key {
        FacetKey::Type => EntryType::parse(value)
            .map(|entry_type| type_label(entry_type).to_string())
            .unwrap_or_else(|| value.to_string()),
        FacetKey::Library => library_label(value).to_string(),
        _ => value.to_string(),
    }
}

pub fn library_label(library: &str) -> &str {
    if library == "_builtin" {
        "ビルトイン"
    } else {
        library
    }
}
