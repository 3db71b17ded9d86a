use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use spacemerge_core::Space;

use crate::consts::{DEFAULT_FIRST, DEFAULT_SECOND};

/// The two spaces to compare, as read from a TOML file.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct SpaceConfig {
    pub first: Space<f64>,
    pub second: Space<f64>,
}

#[derive(Error, Debug)]
pub enum SpaceConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type SpaceConfigResult<T> = std::result::Result<T, SpaceConfigError>;

impl TryFrom<&Path> for SpaceConfig {
    type Error = SpaceConfigError;

    fn try_from(path: &Path) -> SpaceConfigResult<Self> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

fn parse_space(value: &str, name: &str) -> Result<Space<f64>> {
    value
        .parse::<Space<f64>>()
        .with_context(|| format!("Invalid {} space: {}", name, value))
}

///
/// Work out the two spaces a subcommand should operate on.
///
/// Positional arguments take priority, then the `--config` file, then the
/// built-in defaults.
///
pub fn resolve_spaces(matches: &ArgMatches) -> Result<(Space<f64>, Space<f64>)> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => {
            debug!("Reading spaces from {}", path);
            let config = SpaceConfig::try_from(Path::new(path))
                .with_context(|| format!("Failed to load config file: {}", path))?;
            Some(config)
        }
        None => None,
    };

    let first = match matches.get_one::<String>("first") {
        Some(value) => parse_space(value, "first")?,
        None => match &config {
            Some(config) => config.first,
            None => parse_space(DEFAULT_FIRST, "first")?,
        },
    };

    let second = match matches.get_one::<String>("second") {
        Some(value) => parse_space(value, "second")?,
        None => match &config {
            Some(config) => config.second,
            None => parse_space(DEFAULT_SECOND, "second")?,
        },
    };

    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;
    use std::path::PathBuf;

    use crate::merge::cli::create_merge_cli;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("tests/data/spaces.toml");
        let config = SpaceConfig::try_from(path.as_path()).unwrap();
        assert_eq!(
            config,
            SpaceConfig {
                first: Space::new(6.0, 3.0),
                second: Space::new(10.0, 8.0),
            }
        );
    }

    #[rstest]
    fn test_try_from_missing_file() {
        let path = PathBuf::from("tests/data/does_not_exist.toml");
        let result = SpaceConfig::try_from(path.as_path());
        assert_eq!(matches!(result, Err(SpaceConfigError::Io(_))), true);
    }

    #[rstest]
    fn test_try_from_missing_second() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[first]\nstart = 1\nsize = 2").unwrap();

        let result = SpaceConfig::try_from(file.path());
        assert_eq!(matches!(result, Err(SpaceConfigError::Toml(_))), true);
    }

    #[rstest]
    fn test_resolve_defaults() {
        let matches = create_merge_cli().get_matches_from(["merge"]);
        let (first, second) = resolve_spaces(&matches).unwrap();
        assert_eq!(first, Space::new(6.0, 3.0));
        assert_eq!(second, Space::new(10.0, 8.0));
    }

    #[rstest]
    fn test_resolve_positional() {
        let matches = create_merge_cli().get_matches_from(["merge", "0,5", "5,3"]);
        let (first, second) = resolve_spaces(&matches).unwrap();
        assert_eq!(first, Space::new(0.0, 5.0));
        assert_eq!(second, Space::new(5.0, 3.0));
    }

    #[rstest]
    fn test_resolve_positional_wins_over_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[first]\nstart = 1\nsize = 1\n\n[second]\nstart = 20\nsize = 2"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let matches =
            create_merge_cli().get_matches_from(["merge", "--config", path.as_str(), "-4,2"]);
        let (first, second) = resolve_spaces(&matches).unwrap();
        assert_eq!(first, Space::new(-4.0, 2.0));
        assert_eq!(second, Space::new(20.0, 2.0));
    }

    #[rstest]
    fn test_resolve_invalid_space() {
        let matches = create_merge_cli().get_matches_from(["merge", "a,b"]);
        let result = resolve_spaces(&matches);
        assert_eq!(result.is_err(), true);
    }
}
