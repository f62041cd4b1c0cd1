// src/drivers/mod.rs
pub mod error;
pub mod loader;
pub mod plot;
pub mod series;
pub use error::WaveformError;
pub use loader::{load_and_report, load_samples, parse_samples};
pub use plot::{ChartDisplay, ChartStyle, NativeChart};
pub use series::SampleSeries;
