use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{error::CheckError, utils::get_path};

pub(crate) const DEFAULT_CONFIG: &str = "descent.toml";
pub(crate) const DEFAULT_INPUT: &str = "input.txt";

/// Contents of a `descent.toml` file.
///
/// ```toml
/// inputs = ["programs/*.txt"]
/// verbose = false
/// log_flags = "k"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub inputs: Vec<String>,
    pub verbose: bool,
    pub log_flags: Option<String>,
}

impl Config {
    pub fn from_toml(source: &str, path: &Path) -> Result<Config, CheckError> {
        toml::from_str(source).map_err(|source| CheckError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config at `path`, or `descent.toml` if no path is given.
    /// A missing default file is not an error; a missing explicit one is.
    pub fn load(path: Option<&str>) -> Result<Config, CheckError> {
        let (path, explicit) = match path {
            Some(path) => (resolve(path)?, true),
            None => (PathBuf::from(DEFAULT_CONFIG), false),
        };

        match fs::read_to_string(&path) {
            Ok(source) => Config::from_toml(&source, &path),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                if explicit {
                    Err(CheckError::ConfigNotFound(path))
                } else {
                    Ok(Config::default())
                }
            }
            Err(source) => Err(CheckError::Read {
                name: path.display().to_string(),
                source,
            }),
        }
    }
}

pub(crate) fn resolve(path: &str) -> Result<PathBuf, CheckError> {
    get_path(path).map_err(|source| CheckError::Path {
        path: path.to_string(),
        source,
    })
}
