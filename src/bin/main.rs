use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use vn_core::corpus::read_lossy;
use vn_core::{Algorithm, TokenizerEngine};

const MODEL_PATH: &str = "./model.bin";

/// Vietnamese tokenizer. Newlines end sentences, so no word continues
/// across a newline. Each token is written surrounded by square brackets.
#[derive(Parser, Debug)]
#[command(name = "vn_tokenize", version)]
struct Args {
    /// UTF-8 input text
    input: PathBuf,
    /// Where the tokenized text is written
    output: PathBuf,
    /// Tokenizer model built by vn_train
    #[arg(short, long, default_value = MODEL_PATH)]
    model: PathBuf,
    /// Segmentation algorithm: `mm` or `mm-plus`
    #[arg(short, long, default_value = "mm-plus")]
    algorithm: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if !args.input.is_file() {
        eprintln!(
            "Input text file \"{}\" does not exist. Retry with a valid file name.",
            args.input.display()
        );
        return ExitCode::FAILURE;
    }
    if !args.model.is_file() {
        eprintln!(
            "Model file \"{}\" does not exist. Retry with a valid file name.",
            args.model.display()
        );
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(lines) => {
            log::info!("wrote {} lines to {}", lines, args.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<usize, Box<dyn std::error::Error>> {
    let algorithm: Algorithm = args.algorithm.parse()?;
    let engine = TokenizerEngine::from_file(&args.model, algorithm)?;

    let text = read_lossy(&args.input)?;
    let rendered = engine.render(&text);
    fs::write(&args.output, &rendered)?;
    Ok(rendered.lines().count())
}
