// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::search::utils::normalize;
use crate::store::MemoryStore;
use crate::types::{Entry, EntryType, Visibility};

/// Create an entry with default fields.
///
/// This is the canonical implementation used across all tests. Method-like
/// names are split on their type mark to find the local name.
pub fn make_entry(version: &str, entry_type: EntryType, name: &str) -> Entry {
    let local_name = local_name_of(entry_type, name).to_string();
    Entry {
        key: format!("{}:{}", version, name),
        name: name.to_string(),
        local_name: local_name.clone(),
        label: name.to_string(),
        entry_type,
        class: None,
        module: None,
        object: None,
        library: None,
        version: version.to_string(),
        visibility: Some(Visibility::Public),
        summary: None,
        description: None,
        document: None,
        signature: None,
        name_raw: name.to_string(),
        local_name_raw: local_name,
        normalized_class: None,
        normalized_module: None,
        normalized_object: None,
        related_names: Vec::new(),
        score: 0.0,
    }
}

/// Create a method or constant owned by `owner`.
///
/// Module functions are owned by a module, everything else by a class.
pub fn make_method(version: &str, entry_type: EntryType, owner: &str, method: &str) -> Entry {
    let name = format!("{}{}{}", owner, type_mark(entry_type), method);
    let mut entry = make_entry(version, entry_type, &name);
    entry.library = Some("_builtin".to_string());
    if entry_type == EntryType::ModuleFunction {
        entry.module = Some(owner.to_string());
        entry.normalized_module = Some(normalize(owner));
    } else {
        entry.class = Some(owner.to_string());
        entry.normalized_class = Some(normalize(owner));
    }
    entry
}

/// An entry with only a label worth speaking of, for grouping tests.
pub fn make_labelled(id: usize, version: &str, label: &str) -> Entry {
    let mut entry = make_entry(version, EntryType::InstanceMethod, &format!("{}#{}", label, id));
    entry.label = label.to_string();
    entry
}

fn type_mark(entry_type: EntryType) -> &'static str {
    match entry_type {
        EntryType::InstanceMethod => "#",
        EntryType::SingletonMethod => ".",
        EntryType::ModuleFunction => ".#",
        EntryType::Constant => "::",
        _ => "",
    }
}

fn local_name_of(entry_type: EntryType, name: &str) -> &str {
    let mark = type_mark(entry_type);
    if mark.is_empty() {
        return name;
    }
    name.rsplit_once(mark).map_or(name, |(_, local)| local)
}

fn builtin_class(version: &str, name: &str, description: &str) -> Entry {
    let mut entry = make_entry(version, EntryType::Class, name);
    entry.library = Some("_builtin".to_string());
    entry.description = Some(description.to_string());
    entry.summary = Some(description.to_string());
    entry
}

fn described(mut entry: Entry, description: &str) -> Entry {
    entry.description = Some(description.to_string());
    entry
}

/// A small two-version corpus: String, File, Array, Kernel, Net::HTTP.
pub fn sample_entries() -> Vec<Entry> {
    let mut entries = Vec::new();
    for version in ["2.7.0", "3.0.0"] {
        entries.push(builtin_class(
            version,
            "String",
            "文字列のクラスです。[[c:Comparable]] をインクルードしています。",
        ));
        let mut upcase = described(
            make_method(version, EntryType::InstanceMethod, "String", "upcase"),
            "全ての小文字を大文字に変換した文字列を返します。",
        );
        upcase.signature = Some("upcase -> String".to_string());
        entries.push(upcase);
        entries.push(described(
            make_method(version, EntryType::InstanceMethod, "String", "downcase"),
            "全ての大文字を小文字に変換した文字列を返します。",
        ));
        entries.push(builtin_class(
            version,
            "File",
            "ファイルアクセスのためのクラスです。",
        ));
        entries.push(described(
            make_method(version, EntryType::SingletonMethod, "File", "lstat"),
            "シンボリックリンクそのものの情報を返します。",
        ));
        let mut ftype = described(
            make_method(version, EntryType::SingletonMethod, "File", "ftype"),
            "ファイルのタイプを表す文字列を返します。lstat と同様にリンクを辿りません。",
        );
        ftype.related_names = vec!["File.lstat".to_string()];
        entries.push(ftype);
        entries.push(described(
            make_method(version, EntryType::Constant, "File", "SEPARATOR"),
            "パス区切り文字です。",
        ));
        entries.push(builtin_class(version, "Array", "配列クラスです。"));

        let mut kernel = make_entry(version, EntryType::Module, "Kernel");
        kernel.library = Some("_builtin".to_string());
        entries.push(kernel);
        entries.push(described(
            make_method(version, EntryType::ModuleFunction, "Kernel", "puts"),
            "引数と改行を標準出力に出力します。",
        ));

        let mut http = make_entry(version, EntryType::Class, "Net::HTTP");
        http.library = Some("net/http".to_string());
        http.description = Some("HTTP のクライアントのためのクラスです。".to_string());
        entries.push(http);
        let mut library = make_entry(version, EntryType::Library, "net/http");
        library.library = Some("net/http".to_string());
        entries.push(library);
    }

    let mut ractor = builtin_class("3.0.0", "Ractor", "並列実行のためのクラスです。");
    ractor.score = 1.0;
    entries.push(ractor);
    entries
}

pub fn sample_store() -> MemoryStore {
    match MemoryStore::new(sample_entries()) {
        Ok(store) => store,
        Err(err) => panic!("sample corpus is invalid: {err}"),
    }
}

pub fn sample_context() -> SearchContext<MemoryStore> {
    SearchContext::new(sample_store(), SearchConfig::default())
}
