use std::path::PathBuf;

use crate::builder::Scheme;
use crate::error::ConfigError;

/// Settings for one run, assembled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub delimiter: u8,
    pub scheme: Scheme,
    pub source: String,
    pub bin_size: Option<u32>,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, scheme: Scheme) -> Self {
        Self {
            input: input.into(),
            delimiter: b'\t',
            scheme,
            source: scheme.default_source().to_string(),
            bin_size: None,
        }
    }

    pub fn with_source(mut self, source: Option<String>) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        self
    }

    /// Accepts a single-byte delimiter; `\t` is spelled out as an escape.
    pub fn with_delimiter(mut self, delimiter: &str) -> Result<Self, ConfigError> {
        self.delimiter = parse_delimiter(delimiter)?;
        Ok(self)
    }

    pub fn with_bin_size(mut self, bin_size: Option<u32>) -> Self {
        self.bin_size = bin_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input.is_file() {
            return Err(ConfigError::MissingInput(self.input.clone()));
        }
        if self.bin_size == Some(0) {
            return Err(ConfigError::ZeroBinSize);
        }
        Ok(())
    }
}

pub fn parse_delimiter(raw: &str) -> Result<u8, ConfigError> {
    match raw {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match raw.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(ConfigError::BadDelimiter(raw.to_string())),
        },
    }
}
