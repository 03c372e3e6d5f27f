// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering helpers for search results and the index overview.
//!
//! Colors are plain 16-color SGR codes picked by what the text is, not by
//! hue. `NO_COLOR` and non-TTY stdout turn them off.
//!
//! Snippets arrive as HTML (`<span class="keyword">` around hits, entities
//! escaped); [`snippet_text`] turns them back into terminal text.

use rurema_search::types::EntryType;

/// Columns between the two `│` borders.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";

/// What a piece of text is, which decides how it is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Group labels and section titles.
    Heading,
    /// Hit counts and the selected version.
    Count,
    /// Borders, hrefs and secondary counts.
    Muted,
    Keyword,
    CurrentPage,
    Related,
    Owner,
    Method,
    Singleton,
    Constant,
    Document,
    Native,
}

impl Tone {
    fn sgr(self) -> &'static str {
        match self {
            Tone::Heading => "\x1b[1;96m",
            Tone::Count => "\x1b[1;92m",
            Tone::Muted => "\x1b[2;37m",
            Tone::Keyword => "\x1b[1;93m",
            Tone::CurrentPage => "\x1b[1;33m",
            Tone::Related => "\x1b[35m",
            Tone::Owner => "\x1b[32m",
            Tone::Method => "\x1b[34m",
            Tone::Singleton => "\x1b[95m",
            Tone::Constant => "\x1b[33m",
            Tone::Document => "\x1b[36m",
            Tone::Native => "\x1b[31m",
        }
    }

    pub fn for_type(entry_type: EntryType) -> Tone {
        match entry_type {
            EntryType::Class | EntryType::Module | EntryType::Object => Tone::Owner,
            EntryType::InstanceMethod => Tone::Method,
            EntryType::SingletonMethod | EntryType::ModuleFunction => Tone::Singleton,
            EntryType::Constant | EntryType::Variable => Tone::Constant,
            EntryType::Library | EntryType::Document => Tone::Document,
            EntryType::Function | EntryType::Macro => Tone::Native,
        }
    }
}

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

pub fn paint(tone: Tone, text: &str) -> String {
    paint_with(use_colors(), tone, text)
}

fn paint_with(colors: bool, tone: Tone, text: &str) -> String {
    if colors {
        format!("{}{}{}", tone.sgr(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI codes. Wide characters count as two
/// columns so Japanese labels line up in boxes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += if is_wide(c) { 2 } else { 1 };
        }
    }
    len
}

/// CJK, kana and fullwidth forms.
fn is_wide(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut a styled string to `width` visible columns, ending in `…`.
pub fn fit(s: &str, width: usize) -> String {
    if visible_len(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut len = 0;
    let mut in_escape = false;
    let mut styled = false;
    for c in s.chars() {
        if c == '\x1b' || in_escape {
            styled = true;
            in_escape = c != 'm';
            out.push(c);
            continue;
        }
        let w = if is_wide(c) { 2 } else { 1 };
        if len + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        len += w;
    }
    out.push('…');
    if styled {
        out.push_str(RESET);
    }
    out
}

fn framed_line(content: &str, colors: bool) -> String {
    let content = fit(content, BOX_WIDTH);
    let pad = BOX_WIDTH.saturating_sub(visible_len(&content));
    let border = paint_with(colors, Tone::Muted, "│");
    format!("{}{}{}{}", border, content, " ".repeat(pad), border)
}

fn rule(left: char, label: Option<&str>, right: char, colors: bool) -> String {
    let label_part = label
        .map(|label| format!("─ {} ", paint_with(colors, Tone::Heading, label)))
        .unwrap_or_default();
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label_part)));
    format!(
        "{}{}{}",
        paint_with(colors, Tone::Muted, &left.to_string()),
        label_part,
        paint_with(colors, Tone::Muted, &format!("{}{}", fill, right)),
    )
}

/// `│ content          │`
pub fn row(content: &str) {
    println!("{}", framed_line(content, use_colors()));
}

/// `┌─ LABEL ──────────┐`
pub fn section_top(label: &str) {
    println!("{}", rule('┌', Some(label), '┐', use_colors()));
}

/// `├─ LABEL ──────────┤`
pub fn section_mid(label: &str) {
    println!("{}", rule('├', Some(label), '┤', use_colors()));
}

pub fn section_bot() {
    println!("{}", rule('└', None, '┘', use_colors()));
}

/// Entry type badge, e.g. `[インスタンスメソッド]`.
pub fn type_badge(entry_type: EntryType, label: &str) -> String {
    paint(Tone::for_type(entry_type), &format!("[{}]", label))
}

/// A version list with the selected versions highlighted.
pub fn version_list<'a>(versions: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    versions
        .into_iter()
        .map(|(version, selected)| paint(if selected { Tone::Count } else { Tone::Muted }, version))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn timing_ms(value: f64) -> String {
    let text = format!("{:.3}", value);
    if value < 20.0 {
        paint(Tone::Muted, &text)
    } else {
        paint(Tone::Keyword, &text)
    }
}

/// Snippet HTML as terminal text: keywords highlighted, entities unescaped.
pub fn snippet_text(html: &str) -> String {
    snippet_text_with(use_colors(), html)
}

fn snippet_text_with(colors: bool, html: &str) -> String {
    let (open, close) = if colors {
        (Tone::Keyword.sgr(), RESET)
    } else {
        ("*", "*")
    };
    html.replace("<span class=\"keyword\">", open)
        .replace("</span>", close)
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .replace('\n', " ")
}
