// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the faqih command-line interface.
//!
//! Four subcommands: `search` for a one-shot lookup, `chat` for a line-oriented
//! session over stdin, `inspect` to summarize the dataset, and `license` to
//! print an exemption card. Dataset and config paths are global so every
//! subcommand sees the same records and thresholds.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "faqih",
    about = "Bilingual search over medical fatwa records",
    version
)]
pub struct Cli {
    /// JSON dataset (array of fatwa records). Defaults to the bundled sample.
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// JSON search config. Unset keys keep their defaults.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up the rulings that best match a query
    Search {
        /// Arabic question or English medical keywords
        query: String,

        /// Maximum number of results (overrides config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show each result's relevance score
        #[arg(long)]
        scores: bool,

        /// Disable synonym expansion for Arabic queries
        #[arg(long)]
        no_synonyms: bool,
    },

    /// Interactive session: one query per line on stdin
    Chat {
        #[command(flatten)]
        fallback: FallbackArgs,

        /// Print the conversation log as JSON when input ends
        #[arg(long)]
        transcript: bool,
    },

    /// Summarize the dataset and synonym table
    Inspect,

    /// Print a patient exemption card
    License(LicenseArgs),
}

#[derive(Args)]
pub struct FallbackArgs {
    /// External program consulted when local search finds nothing.
    ///
    /// Receives `{instruction, query, knowledge}` as JSON on stdin and must print
    /// `{"matchId": "<id>" | null}`. Failures and timeouts count as no match.
    #[arg(long, value_name = "PROGRAM")]
    pub fallback_cmd: Option<PathBuf>,

    /// Arguments passed to the fallback program
    #[arg(long = "fallback-arg", value_name = "ARG", requires = "fallback_cmd")]
    pub fallback_args: Vec<String>,
}

#[derive(Args)]
pub struct LicenseArgs {
    /// Attending physician
    #[arg(long)]
    pub doctor: String,

    /// Patient name
    #[arg(long)]
    pub patient: String,

    /// Diagnosis
    #[arg(long)]
    pub diagnosis: String,

    /// Date printed on the card (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Ruling summary text
    #[arg(long, conflicts_with = "fatwa", required_unless_present = "fatwa")]
    pub ruling: Option<String>,

    /// Fill the ruling summary from a dataset record
    #[arg(long, value_name = "ID")]
    pub fatwa: Option<String>,

    /// Write the card to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
