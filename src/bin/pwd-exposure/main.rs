use anyhow::{Context, Result};
use clap::Parser;
use pwd_exposure::{analyze, glossary, Corpus, SubstitutionTable};
use tracing::{debug, info};

mod cli;
mod prompt;
mod render;

use crate::cli::{Args, Command};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose)?;

    match args.command.unwrap_or(Command::Check) {
        Command::Check => run_check(args.corpus.as_deref()),
        Command::Learn { term } => run_learn(term.as_deref()),
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}

fn run_check(corpus_override: Option<&std::path::Path>) -> Result<()> {
    let path = corpus_override
        .map(std::path::Path::to_path_buf)
        .unwrap_or_else(pwd_exposure::corpus_path);

    let corpus = Corpus::from_path(&path)
        .with_context(|| format!("Failed to load leaked-password corpus from {}", path.display()))?;
    info!("Corpus ready: {} entries", corpus.len());

    let substitutions = SubstitutionTable::default();

    loop {
        let password = prompt::read_password()?;
        let report = analyze(&password, &corpus, &substitutions);
        debug!("verdict: {:?}", report.dictionary);

        print!("{}", render::render_report(&report));

        if !prompt::confirm("Check another password? (y/n): ")? {
            break;
        }
    }

    Ok(())
}

fn run_learn(term: Option<&str>) -> Result<()> {
    if let Some(term) = term {
        println!("{}", render::render_glossary(term));
        return Ok(());
    }

    println!("What would you like to learn more about?");
    println!(
        "Available terms to ask about: {}",
        glossary::terms().collect::<Vec<_>>().join(", ")
    );

    loop {
        let choice = prompt::read_line(
            "\nEnter a term, or its first letter, to receive more information, or 'q' to quit: ",
        )?;
        if choice.trim().eq_ignore_ascii_case("q") {
            return Ok(());
        }
        println!("{}", render::render_glossary(&choice));
    }
}
