// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use rurema_search::config::SearchConfig;
use rurema_search::corpus::load_corpus;
use rurema_search::facet::{value_label, FacetKey};
use rurema_search::overview::{overview, Overview};
use rurema_search::paginate::PageLinkKind;
use rurema_search::params;
use rurema_search::response::{build_response, SearchResponse};
use rurema_search::search::SearchRequest;
use rurema_search::SearchContext;

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

/// Logs go to stderr so `--json` output stays clean.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rurema_search=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            corpus,
            config,
            page,
            n_entries,
            double_decode,
            normalize_path,
            base_url,
            json,
            path,
        } => {
            let overrides = ConfigOverrides {
                double_decode,
                normalize_path,
                base_url,
            };
            run_search(&corpus, config.as_deref(), overrides, page, n_entries, json, path)
        }
        Commands::Overview {
            corpus,
            version,
            json,
        } => run_overview(&corpus, version.as_deref(), json),
        Commands::NormalizePath { path } => {
            println!("{}", params::normalize_path(&path));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

struct ConfigOverrides {
    double_decode: bool,
    normalize_path: bool,
    base_url: Option<String>,
}

fn load_config(path: Option<&Path>, overrides: ConfigOverrides) -> Result<SearchConfig> {
    let mut config = match path {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    config.double_decode |= overrides.double_decode;
    config.normalize_path |= overrides.normalize_path;
    if let Some(base_url) = overrides.base_url {
        config.document.base_url = base_url;
    }
    Ok(config)
}

fn run_search(
    corpus: &Path,
    config: Option<&Path>,
    overrides: ConfigOverrides,
    page: Option<String>,
    n_entries: Option<String>,
    json: bool,
    path: String,
) -> Result<()> {
    let config = load_config(config, overrides)?;
    let store = load_corpus(corpus)
        .with_context(|| format!("loading corpus {}", corpus.display()))?;
    let context = SearchContext::new(store, config);

    let request = SearchRequest {
        path,
        page,
        n_entries,
    };
    let outcome = context
        .search(&request)
        .with_context(|| format!("searching {}", request.path))?;
    let response = build_response(&outcome, context.config());

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_search(&response);
    }
    Ok(())
}

fn run_overview(corpus: &Path, version: Option<&str>, json: bool) -> Result<()> {
    let store = load_corpus(corpus)
        .with_context(|| format!("loading corpus {}", corpus.display()))?;
    let overview = overview(&store, version)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
    } else {
        print_overview(&overview);
    }
    Ok(())
}

fn print_search(response: &SearchResponse) {
    section_top(&response.title);
    row(&format!(
        " {} 件  page {}/{}  {} ms",
        paint(Tone::Count, &response.total.to_string()),
        response.page,
        response.n_pages,
        timing_ms(response.elapsed_seconds * 1000.0)
    ));

    if !response.groups.is_empty() {
        section_mid("検索結果");
    }
    for group in &response.groups {
        row(&format!(
            " {} {}",
            paint(Tone::Heading, &group.label),
            type_badge(group.entry_type, group.type_label)
        ));
        row(&format!(
            "   {}",
            version_list(
                group
                    .versions
                    .iter()
                    .map(|v| (v.version.as_str(), v.selected))
            )
        ));
        row(&format!("   {}", paint(Tone::Muted, &group.href)));
        if group.snippets.is_empty() {
            if let Some(summary) = &group.summary {
                row(&format!("   {}", summary.replace('\n', " ")));
            }
        }
        for snippet in &group.snippets {
            row(&format!("   {}", snippet_text(snippet)));
        }
        if !group.related_entries.is_empty() {
            let related: Vec<&str> = group.related_entries.iter().map(|r| r.label.as_str()).collect();
            row(&format!("   → {}", paint(Tone::Related, &related.join(", "))));
        }
    }

    for drilldown in &response.drilldowns {
        section_mid(drilldown.key_label);
        for item in &drilldown.items {
            let count = item.count.map(|c| c.to_string()).unwrap_or_default();
            row(&format!(
                " {}{}",
                pad_right(&item.label, 40),
                paint(Tone::Muted, &count)
            ));
        }
    }

    if !response.related_keywords.is_empty() {
        section_mid("関連キーワード");
        let keywords: Vec<&str> = response
            .related_keywords
            .iter()
            .map(|k| k.label.as_str())
            .collect();
        row(&format!(" {}", keywords.join("  ")));
    }

    section_mid("バージョン");
    for version in &response.versions {
        let label = format!("{} ({})", version.label, version.count);
        let label = if version.selected {
            paint(Tone::Count, &label)
        } else {
            label
        };
        row(&format!(" {}", label));
    }

    if !response.pages.is_empty() {
        let pages: Vec<String> = response
            .pages
            .iter()
            .map(|link| match link.kind {
                PageLinkKind::Current => paint(Tone::CurrentPage, &link.label),
                _ => link.label.clone(),
            })
            .collect();
        section_mid("ページ");
        row(&format!(" {}", pages.join(" ")));
    }
    section_bot();
}

fn print_overview(overview: &Overview) {
    section_top(&overview.title);
    for version in &overview.versions {
        row(&format!(
            " {}{}",
            pad_right(&version.label, 20),
            paint(Tone::Muted, &version.count.to_string())
        ));
    }

    section_mid("種類");
    for item in &overview.types {
        let label = value_label(FacetKey::Type, &item.value);
        row(&format!(
            " {}{}",
            pad_right(&label, 30),
            paint(Tone::Muted, &item.count.to_string())
        ));
    }

    for (heading, shelves) in [
        ("ビルトインクラス (名前順)", &overview.shelves_by_name),
        ("ビルトインクラス (エントリー数順)", &overview.shelves_by_frequency),
    ] {
        if shelves.is_empty() {
            continue;
        }
        section_mid(heading);
        for shelf in shelves {
            let classes: Vec<&str> = shelf.classes.iter().map(|c| c.value.as_str()).collect();
            row(&format!(
                " {} {}",
                paint(Tone::Heading, shelf.label),
                classes.join(" ")
            ));
        }
    }
    section_bot();
}
