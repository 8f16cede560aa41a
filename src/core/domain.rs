use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "library_data.txt";

// Configuration abstracts config options for the library tracker.
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
}

impl Configuration {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Configuration {
            data_file: data_file.into(),
        }
    }

    // The backing file is shared across process invocations, so it can be
    // pointed somewhere else without rebuilding.
    pub fn from_env() -> Self {
        let data_file = std::env::var("LIBRARY_DATA_FILE")
            .unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
        Configuration::new(data_file)
    }
}
