// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rurema-search command-line interface.
//!
//! Three subcommands: `search` runs one facet path against a corpus,
//! `overview` prints the index page summary, and `normalize-path` shows what
//! a front end's unescaped path is rewritten to.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rurema-search",
    about = "Faceted search over the Ruby reference manual",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a facet path such as /version:2.7.0/query:lstat/ against a corpus
    Search {
        /// Corpus directory containing manifest.json and record files
        #[arg(short, long)]
        corpus: PathBuf,

        /// TOML settings file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Page number, as the `page` query parameter
        #[arg(long)]
        page: Option<String>,

        /// Page size, as the `n_entries` query parameter
        #[arg(long)]
        n_entries: Option<String>,

        /// Decode parameter values twice (overrides the config file)
        #[arg(long)]
        double_decode: bool,

        /// Normalize unescaped paths first (overrides the config file)
        #[arg(long)]
        normalize_path: bool,

        /// Base URL for manual pages (overrides the config file)
        #[arg(long)]
        base_url: Option<String>,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,

        /// Facet path
        #[arg(default_value = "/")]
        path: String,
    },

    /// Summarize a corpus: versions, types and the large built-in classes
    Overview {
        /// Corpus directory containing manifest.json and record files
        #[arg(short, long)]
        corpus: PathBuf,

        /// Restrict to one version
        #[arg(long)]
        version: Option<String>,

        /// Print the overview as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized form of a request path
    NormalizePath {
        path: String,
    },
}
