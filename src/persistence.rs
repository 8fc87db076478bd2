// File: src/persistence.rs
use crate::core::lexicon::LexiconModel;
use crate::error::ModelError;
use std::collections::{HashMap, HashSet};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The on-disk form of a tokenizer model: smoothed word scores and the
/// breaker set, stored together in one blob.
#[derive(serde::Serialize, serde::Deserialize)]
struct SerializableModel {
    scores: HashMap<String, f64>,
    breakers: HashSet<String>,
}

pub fn save_model(model: &LexiconModel, path: &Path) -> Result<(), ModelError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let (scores, breakers) = model.clone().into_parts();
    let state = SerializableModel { scores, breakers };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    log::info!("saved model with {} words to {}", model.len(), path.display());
    Ok(())
}

pub fn load_model(path: &Path) -> Result<LexiconModel, ModelError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableModel = bincode::deserialize_from(reader)?;

    let model = LexiconModel::from_parts(state.scores, state.breakers)?;
    log::info!(
        "loaded model with {} words and {} breakers from {}",
        model.len(),
        model.breakers().len(),
        path.display()
    );
    Ok(model)
}
