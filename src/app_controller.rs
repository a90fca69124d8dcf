use log::{debug, error, info, warn};
use std::path::PathBuf;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::glossary::{self, GlossaryBuilder, GlossaryDocument};
use crate::language_utils;
use crate::terms::FINANCIAL_TERMS;

// @module: Application controller for glossary generation

/// Counts reported after a build
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    /// Entries in the source list before deduplication
    pub raw_terms: usize,
    /// Distinct non-blank entries after normalization
    pub unique_terms: usize,
    /// Records written to the document
    pub records: usize,
    /// Records carrying an abbreviation
    pub abbreviations: usize,
    /// Where the document was written
    pub output_path: PathBuf,
}

/// Main application controller for glossary generation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Builder derived from the config
    builder: GlossaryBuilder,
    // @field: Source term list
    terms: Vec<String>,
}

impl Controller {
    // @method: Create a controller over the built-in finance terms
    pub fn with_config(config: Config) -> Self {
        let terms = FINANCIAL_TERMS.iter().map(|term| term.to_string()).collect();
        Self::with_terms(config, terms)
    }

    // @method: Create a controller over a custom term list
    pub fn with_terms(config: Config, terms: Vec<String>) -> Self {
        let builder = GlossaryBuilder::new(config.category.clone(), config.target_languages.clone());
        Self {
            config,
            builder,
            terms,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the document in memory without writing it
    pub fn build_document(&self) -> GlossaryDocument {
        self.builder.build(&self.terms)
    }

    /// Build the document and return its JSON text
    pub fn render(&self) -> Result<String, AppError> {
        self.config.validate()?;
        Ok(glossary::to_json(&self.build_document())?)
    }

    /// Run the full build and write the document to the configured path
    pub fn run(&self) -> Result<BuildSummary, AppError> {
        let start_time = std::time::Instant::now();
        self.config.validate()?;

        let category = self.builder.category();
        info!("🔍 Creating '{}' glossary...", category.id);

        for code in self.builder.target_languages() {
            let name = language_utils::get_language_name(code)?;
            debug!("Target language: {} ({})", code, name);
        }

        let normalized = glossary::normalize(&self.terms);
        info!("📊 {} terms in source list, {} after dedup", self.terms.len(), normalized.len());

        let records = self.builder.build_records(&normalized);
        let document = glossary::build_document(category, records);

        let output_path = &self.config.output_path;
        let output_dir = FileManager::parent_dir(output_path);
        if !FileManager::dir_exists(&output_dir) {
            error!("Output directory does not exist: {:?}", output_dir);
        } else if FileManager::file_exists(output_path) {
            warn!("Overwriting existing glossary: {:?}", output_path);
        }

        glossary::write_document(&document, output_path)?;

        let bytes = FileManager::file_size(output_path)?;
        info!("✅ Saved to: {:?} ({} bytes)", output_path, bytes);
        info!(
            "📝 {} term entries, {} with abbreviations",
            document.terms.len(),
            document.abbreviation_count()
        );
        warn!("Translations and descriptions are empty and need to be added manually or with a translation API");
        debug!("Glossary built in {:?}", start_time.elapsed());

        Ok(BuildSummary {
            raw_terms: self.terms.len(),
            unique_terms: normalized.len(),
            records: document.terms.len(),
            abbreviations: document.abbreviation_count(),
            output_path: output_path.clone(),
        })
    }
}
