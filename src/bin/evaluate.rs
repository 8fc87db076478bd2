use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use vn_core::core::aligner::{align_corpus, format_report};
use vn_core::corpus::read_bracketed_file;

/// Scores a hypothesized tokenization against a reference tokenization.
/// Both files hold one sentence per line with every token in square brackets.
#[derive(Parser, Debug)]
#[command(name = "vn_evaluate", version)]
struct Args {
    /// Reference tokenization
    reference: PathBuf,
    /// Hypothesized tokenization
    hypothesis: PathBuf,
    /// Print counts and scores as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    for (kind, path) in [("ref", &args.reference), ("hyp", &args.hypothesis)] {
        if !path.is_file() {
            eprintln!(
                "{} file \"{}\" does not exist. Retry with a valid file name.",
                kind,
                path.display()
            );
            return ExitCode::FAILURE;
        }
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let reference = read_bracketed_file(&args.reference)?;
    let hypothesis = read_bracketed_file(&args.hypothesis)?;
    let counts = align_corpus(&reference, &hypothesis)?;

    if let Err(e) = counts.f_ratio() {
        log::warn!("{}", e);
    }

    if args.json {
        let report = serde_json::json!({
            "counts": counts,
            "precision": counts.precision().ok(),
            "recall": counts.recall().ok(),
            "f_ratio": counts.f_ratio().ok(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report(&counts));
    }
    Ok(())
}
