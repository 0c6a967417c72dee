use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn the input file into a lookup table.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {} as a lookup table", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
