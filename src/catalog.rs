use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_CATALOG: &str = include_str!("../destinations.toml");

pub const MAX_PHRASES: usize = 4;
pub const MAX_RELATED: usize = 3;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Destination {
    pub id: String,
    pub phrases: Vec<String>,
}

impl Destination {
    /// Catalog validation guarantees at least one phrase.
    pub fn main_phrase(&self) -> &str {
        &self.phrases[0]
    }

    /// Phrases for `1.jpg`..`3.jpg`, numbered from 1.
    pub fn related_phrases(&self) -> impl Iterator<Item = (usize, &str)> {
        self.phrases
            .iter()
            .take(MAX_RELATED)
            .enumerate()
            .map(|(i, phrase)| (i + 1, phrase.as_str()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidDestination {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id is empty"));
        }

        if self.id.contains(['/', '\\']) || self.id.contains("..") {
            return Err(invalid("id must be a plain directory name"));
        }

        if self.phrases.is_empty() || self.phrases.len() > MAX_PHRASES {
            return Err(invalid("expected between 1 and 4 phrases"));
        }

        if self.phrases.iter().any(|phrase| phrase.trim().is_empty()) {
            return Err(invalid("phrases must not be blank"));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "destination")]
    destinations: Vec<Destination>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse(DEFAULT_CATALOG)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("[CONFIG] Loaded destination catalog from {:?}", path);

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = toml::from_str(contents)?;

        Self::new(file.destinations)
    }

    pub fn new(destinations: Vec<Destination>) -> Result<Self, ConfigError> {
        if destinations.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen = HashSet::new();

        for destination in &destinations {
            destination.validate()?;

            if !seen.insert(destination.id.as_str()) {
                return Err(ConfigError::InvalidDestination {
                    id: destination.id.clone(),
                    reason: "duplicate id".to_string(),
                });
            }
        }

        Ok(Self { destinations })
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
