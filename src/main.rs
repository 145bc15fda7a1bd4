// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use faqih::session::response_text;
use faqih::{
    BestEffortFallback, CommandFallback, Dataset, LicenseCard, LocalMatcher, PatientLicenseData,
    QueryController, SearchConfig, SessionState, SynonymTable, Verdict,
};

mod cli;
use cli::display::{self, banner, print_fatwa_card, print_message, section_bot, section_top, stat};
use cli::{Cli, Commands, FallbackArgs, LicenseArgs};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only results. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let dataset = load_dataset(&cli)?;
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Search { query, limit, scores, no_synonyms } => {
            let mut config = config;
            if let Some(limit) = limit {
                config.max_results = limit;
            }
            if no_synonyms {
                config.expand_synonyms = false;
            }
            config.validate().context("invalid search options")?;
            run_search(&dataset, config, &query, scores)
        }
        Commands::Chat { fallback, transcript } => run_chat(dataset, config, &fallback, transcript),
        Commands::Inspect => {
            run_inspect(&dataset, &config);
            Ok(())
        }
        Commands::License(args) => run_license(&dataset, args),
    }
}

fn load_dataset(cli: &Cli) -> Result<Dataset> {
    match &cli.data {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("loading dataset from {}", path.display())),
        None => Dataset::builtin().context("loading bundled dataset"),
    }
}

fn load_config(cli: &Cli) -> Result<SearchConfig> {
    match &cli.config {
        Some(path) => SearchConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn run_search(dataset: &Dataset, config: SearchConfig, query: &str, show_scores: bool) -> Result<()> {
    if query.trim().is_empty() {
        return Err(anyhow!("query is empty"));
    }

    let matcher = LocalMatcher::new(config);
    let results = matcher.rank(query, dataset.as_slice());

    println!("{}", response_text(results.len()));
    let total = results.len();
    for (i, result) in results.iter().enumerate() {
        println!();
        let score = show_scores.then_some(result.score);
        print_fatwa_card(result.fatwa, i, total, score);
    }
    Ok(())
}

fn run_chat(
    dataset: Dataset,
    config: SearchConfig,
    fallback: &FallbackArgs,
    transcript: bool,
) -> Result<()> {
    let timeout = config.fallback_timeout();
    let mut controller = QueryController::new(dataset, config);
    if let Some(program) = &fallback.fallback_cmd {
        let command = CommandFallback::new(program, fallback.fallback_args.clone())
            .with_timeout(timeout);
        controller = controller.with_fallback(BestEffortFallback::new(Arc::new(command), timeout));
    }

    let interactive = atty::is(atty::Stream::Stdin);
    let stdin = io::stdin();
    let mut state = SessionState::new();

    prompt(interactive)?;
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let before = state.messages().len();
        state = controller.submit(state, &line);

        if state.messages().len() > before {
            if let Some(reply) = state.last_message() {
                print_message(reply);
                let cards = controller.dataset().resolve(&reply.related_fatwa_ids);
                let total = cards.len();
                for (i, fatwa) in cards.into_iter().enumerate() {
                    print_fatwa_card(fatwa, i, total, None);
                }
            }
        }
        prompt(interactive)?;
    }

    if transcript {
        let json = serde_json::to_string_pretty(state.messages())
            .context("serializing conversation")?;
        println!("{}", json);
    }
    Ok(())
}

fn prompt(interactive: bool) -> Result<()> {
    if interactive {
        let mut err = io::stderr();
        write!(err, "{} ", display::themed(display::CYAN, &[display::BOLD], "›"))?;
        err.flush()?;
    }
    Ok(())
}

fn run_inspect(dataset: &Dataset, config: &SearchConfig) {
    banner("الطبيب الفقيه");

    section_top("DATASET");
    stat("records", &dataset.len().to_string());

    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    for fatwa in dataset {
        *by_category.entry(fatwa.category.as_str()).or_default() += 1;
    }
    for (category, count) in &by_category {
        stat(&format!("  {}", category), &count.to_string());
    }

    for verdict in Verdict::ALL {
        let count = dataset.iter().filter(|f| f.verdict == verdict).count();
        stat(&format!("  {}", verdict.as_str()), &format!("{}  {}", count, verdict.label()));
    }

    let no_context = dataset.iter().filter(|f| f.medical_context.trim().is_empty()).count();
    let no_tags = dataset.iter().filter(|f| f.tags.is_empty()).count();
    stat("without context", &no_context.to_string());
    stat("without tags", &no_tags.to_string());

    let synonyms = SynonymTable::builtin();
    display::section_mid("SYNONYMS");
    stat("keys", &synonyms.len().to_string());
    stat("alternates", &synonyms.alternate_count().to_string());

    display::section_mid("CONFIG");
    stat("min_score", &format!("> {}", config.min_score));
    stat("max_results", &config.max_results.to_string());
    stat("expand_synonyms", &config.expand_synonyms.to_string());
    stat("fallback_timeout_ms", &config.fallback_timeout_ms.to_string());
    section_bot();
}

fn run_license(dataset: &Dataset, args: LicenseArgs) -> Result<()> {
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    let card = match (&args.fatwa, args.ruling) {
        (Some(id), _) => {
            let fatwa = dataset
                .get(id)
                .ok_or_else(|| anyhow!("no fatwa with id '{}'", id))?;
            LicenseCard::from_fatwa(&args.doctor, &args.patient, &date, &args.diagnosis, fatwa)
        }
        (None, Some(ruling)) => LicenseCard::new(PatientLicenseData {
            doctor_name: args.doctor,
            patient_name: args.patient,
            date,
            diagnosis: args.diagnosis,
            ruling_summary: ruling,
        }),
        (None, None) => return Err(anyhow!("either --ruling or --fatwa is required")),
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, card.render())
                .with_context(|| format!("writing card to {}", path.display()))?;
            eprintln!("✓ Card written to {}", path.display());
        }
        None => print!("{}", card),
    }
    Ok(())
}
