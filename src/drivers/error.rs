use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum WaveformError {
    #[error("failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} line {line}: {content:?} is not a floating-point value")]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("failed to write to console")]
    Console(#[source] io::Error),
    #[error("failed to display chart: {0}")]
    Display(String),
    #[error("failed to dump wave table to {path:?}")]
    Dump {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
impl From<eframe::Error> for WaveformError {
    fn from(value: eframe::Error) -> Self {
        WaveformError::Display(value.to_string())
    }
}
