use std::{
    fs::{File, OpenOptions},
    io::{self, prelude::*, SeekFrom},
    path::{Path, PathBuf},
};

use log::*;
use serde::{Deserialize, Serialize};

/// The generator configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The mod id every resource manager writes under, defaults to "notreepunching".
    pub mod_id: String,
    /// Resource tree shared by both loaders.
    pub common_dir: PathBuf,
    /// Resource tree only loaded by forge.
    pub forge_dir: PathBuf,
    /// Resource tree only loaded by fabric.
    pub fabric_dir: PathBuf,
    /// Whether previously generated files are deleted before generating, defaults to true.
    pub clean: bool,
    /// Whether files are written indented, defaults to true.
    pub pretty_print: bool,
}

// Instantiate a config with default values
impl Default for Config {
    fn default() -> Self {
        Config {
            mod_id: "notreepunching".to_owned(),
            common_dir: PathBuf::from("../Common/src/main/resources"),
            forge_dir: PathBuf::from("../Forge/src/main/resources"),
            fabric_dir: PathBuf::from("../Fabric/src/main/resources"),
            clean: true,
            pretty_print: true,
        }
    }
}

/// Attempts to parse the generator configuration at the given path. The config should be in JSON format.
///
/// A missing file is created holding the defaults, invalid JSON is replaced by them.
pub fn load_config(path: &Path) -> io::Result<Config> {
    if path.exists() {
        // Try to open the file
        let mut file = OpenOptions::new().read(true).write(true).open(path)?;

        // Read the file to a string
        let mut json = String::new();
        file.read_to_string(&mut json)?;

        // Parse the json
        match serde_json::from_str(&json) {
            Ok(config) => Ok(config),
            Err(e) => {
                error!("Invalid config JSON: {}", e);
                use_default(&mut file)
            }
        }
    } else {
        info!("Config file not found, creating file");
        use_default(&mut File::create(path)?)
    }
}

fn use_default(file: &mut File) -> io::Result<Config> {
    info!("Using default configurations");

    let default = Config::default();

    // Go to the beginning of the file
    file.seek(SeekFrom::Start(0))?;

    // Write the default JSON
    let json = serde_json::to_string_pretty(&default)?;
    let bytes = json.as_bytes();
    file.write_all(bytes)?;

    // Reset the file length
    file.set_len(bytes.len() as u64)?;

    Ok(default)
}

#[test]
fn missing_config_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("datagen.json");

    assert_eq!(load_config(&path).unwrap(), Config::default());
    let written: Config = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, Config::default());
}

#[test]
fn partial_config_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("datagen.json");
    std::fs::write(&path, r#"{"clean": false, "common_dir": "out/common"}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert!(!config.clean);
    assert_eq!(config.common_dir, PathBuf::from("out/common"));
    assert_eq!(config.mod_id, "notreepunching");
}

#[test]
fn invalid_config_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("datagen.json");
    std::fs::write(&path, "{ not json, and quite a bit longer than the defaults would be when written out again ").unwrap();

    assert_eq!(load_config(&path).unwrap(), Config::default());
    let written: Config = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, Config::default());
}
