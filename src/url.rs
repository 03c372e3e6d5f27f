// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where an entry's manual page lives.
//!
//! Pages are laid out under `<base_url><version>/` with BitClust's file-name
//! encoding: every byte outside `[A-Za-z0-9_]` becomes `=xx`. Method pages are
//! split into class, type mark and method name:
//!
//! ```text
//! File.lstat      -> method/File/s/lstat.html
//! String#upcase   -> method/String/i/upcase.html
//! Kernel.#puts    -> method/Kernel/m/puts.html
//! File::SEPARATOR -> method/File/c/SEPARATOR.html
//! $stdout         -> method/Kernel/v/stdout.html
//! ```

use crate::types::{Entry, EntryType};
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

static METHOD_SPEC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]\w*(?:::[A-Z]\w*)*)(\.#|\.|#|::)(.+)$").expect("method spec pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapper {
    base_url: String,
}

impl UrlMapper {
    pub fn new(base_url: &str, version: &str, remove_dot_from_version: bool) -> Self {
        let version = if remove_dot_from_version {
            version.replace('.', "")
        } else {
            version.to_string()
        };
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        UrlMapper {
            base_url: format!("{}{}/", base, version),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn library_index_url(&self) -> String {
        format!("{}library/", self.base_url)
    }

    pub fn library_url(&self, name: &str) -> String {
        if name == "/" {
            self.library_index_url()
        } else {
            format!("{}library/{}.html", self.base_url, encode_name(name))
        }
    }

    pub fn class_url(&self, name: &str) -> String {
        format!("{}class/{}.html", self.base_url, encode_name(name))
    }

    pub fn method_url(&self, spec: &str) -> Option<String> {
        let (class, mark, method) = split_method_spec(spec)?;
        Some(format!(
            "{}method/{}/{}/{}.html",
            self.base_url,
            encode_name(class),
            typemark_char(mark)?,
            encode_name(method)
        ))
    }

    pub fn function_url(&self, name: &str) -> String {
        format!("{}function/{}", self.base_url, name)
    }

    pub fn document_url(&self, name: &str) -> String {
        format!("{}doc/{}.html", self.base_url, encode_name(name))
    }

    pub fn spec_url(&self, name: &str) -> String {
        format!("{}spec/{}.html", self.base_url, name)
    }

    /// The manual page for `entry`. Method names that don't split fall back
    /// to `spec_url`.
    pub fn entry_url(&self, entry: &Entry) -> String {
        let name = entry.name.as_str();
        match entry.entry_type {
            EntryType::Class | EntryType::Module | EntryType::Object => self.class_url(name),
            EntryType::Constant
            | EntryType::Variable
            | EntryType::InstanceMethod
            | EntryType::ModuleFunction
            | EntryType::SingletonMethod => self
                .method_url(name)
                .unwrap_or_else(|| self.spec_url(name)),
            EntryType::Document => self.document_url(name),
            EntryType::Library => self.library_url(name),
            EntryType::Function | EntryType::Macro => self.function_url(name),
        }
    }
}

/// `(class, type mark, method)`; global variables belong to `Kernel`.
pub fn split_method_spec(spec: &str) -> Option<(&str, &str, &str)> {
    if let Some(variable) = spec.strip_prefix('$') {
        return Some(("Kernel", "$", variable));
    }
    let captures = METHOD_SPEC_RE.captures(spec)?;
    Some((
        captures.get(1)?.as_str(),
        captures.get(2)?.as_str(),
        captures.get(3)?.as_str(),
    ))
}

pub fn typemark_char(mark: &str) -> Option<char> {
    match mark {
        "." => Some('s'),
        "#" => Some('i'),
        ".#" => Some('m'),
        "::" => Some('c'),
        "$" => Some('v'),
        _ => None,
    }
}

/// BitClust name encoding: `=xx` for every byte outside `[A-Za-z0-9_]`.
pub fn encode_name(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' {
            encoded.push(byte as char);
        } else {
            let _ = write!(encoded, "={:02x}", byte);
        }
    }
    encoded
}
