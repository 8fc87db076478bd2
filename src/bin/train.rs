use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use vn_core::config::{load_config_from_file, Config};
use vn_core::corpus::read_tagged_corpus;
use vn_core::learning::CountLearner;
use vn_core::persistence::save_model;
use vn_core::resources::load_external_words;

/// Builds a tokenizer model from IOB2 training corpora and the lexicon
/// resources named in the config file.
#[derive(Parser, Debug)]
#[command(name = "vn_train", version)]
struct Args {
    /// TOML config; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// IOB2 training files
    #[arg(long, required = true, num_args = 1..)]
    corpus: Vec<PathBuf>,
    /// Where the model is written
    #[arg(short, long, default_value = "./model.bin")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => load_config_from_file(path)?,
        None => Config::default(),
    };

    let mut learner = CountLearner::new();
    for path in &args.corpus {
        let sentences = read_tagged_corpus(path)?;
        log::info!("{}: {} sentences", path.display(), sentences.len());
        learner.learn_all(&sentences);
    }
    log::info!(
        "learned {} distinct words, {} distinct outside syllables",
        learner.word_counts().len(),
        learner.outside_counts().len()
    );

    let external = load_external_words(&config.lexicon.sources)?;
    let model = learner.into_lexicon(&config.lexicon, &external)?;
    save_model(&model, &args.output)?;

    println!("Model with {} words saved to '{}'", model.len(), args.output.display());
    Ok(())
}
