use config::{Config, ConfigError, File};
use sample_results::query::TestResultCriteria;
use std::path::PathBuf;

/// Loads criteria from a YAML, JSON, TOML or HJSON file, picked by extension.
pub fn load(file: PathBuf) -> Result<TestResultCriteria, ConfigError> {
    let mut config = Config::new();
    config.merge(File::from(file))?;

    config.try_into()
}
