use clap::Parser;
use crossterm::style::Stylize;
use std::path::PathBuf;
use std::process::ExitCode;
use vn_core::config::load_config_from_file;
use vn_core::experiment::{CrossValidation, ExperimentSummary};
use vn_core::Algorithm;

/// K-fold cross-validation of the lexicon-driven segmenters.
#[derive(Parser, Debug)]
#[command(name = "vn_experiment", version)]
struct Args {
    /// TOML config with `[lexicon]` and `[experiment]` sections
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
    /// Override the configured algorithm: `mm` or `mm-plus`
    #[arg(short, long)]
    algorithm: Option<String>,
    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_from_file(&args.config)?;
    let mut experiment = CrossValidation::new(config)?;
    if let Some(selector) = &args.algorithm {
        experiment = experiment.with_algorithm(selector.parse::<Algorithm>()?);
    }

    let summary = experiment.run()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &ExperimentSummary) {
    println!("Cross-validation, algorithm {}", summary.algorithm.as_str().bold());
    println!("====================================================");
    for fold in &summary.folds {
        println!(
            "Run {}: P = {:.3}, R = {:.3}, F = {:.3}, OOV = {}",
            fold.fold, fold.scores.precision, fold.scores.recall, fold.scores.f_ratio, fold.oov
        );
        println!(
            "       nSents = {}, nWds = {}, nSyls = {}, lexicon = {}",
            fold.sentences, fold.words, fold.syllables, fold.lexicon_size
        );
    }
    println!("====================================================");
    let line = format!(
        "Avg.   P = {:.3}, R = {:.3}, F = {:.3}, OOV = {:.0}",
        summary.precision, summary.recall, summary.f_ratio, summary.oov
    );
    println!("{}", line.green().bold());
    println!(
        "       nSents = {:.0}, nWds = {:.0}, nSyls = {:.0}",
        summary.sentences, summary.words, summary.syllables
    );
}
