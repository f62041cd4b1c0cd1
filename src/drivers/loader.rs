use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use log::debug;
use crate::drivers::error::WaveformError;
use crate::drivers::series::SampleSeries;
use crate::waveform::Waveform;
/// Read a sample file: one float per line, surrounding whitespace ignored.
///
/// A line that is empty after trimming is rejected like any other
/// non-numeric line. The file handle is closed before returning.
pub fn load_samples(path: &Path) -> Result<SampleSeries, WaveformError> {
    debug!("opening {path:?}");
    let file = File::open(path).map_err(|source| WaveformError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_samples(BufReader::new(file), path)
}
/// Parse already-opened sample text. `path` is only used in errors.
pub fn parse_samples<R: BufRead>(reader: R, path: &Path) -> Result<SampleSeries, WaveformError> {
    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| WaveformError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = line.trim();
        let value = text.parse::<f64>().map_err(|source| WaveformError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            content: text.to_owned(),
            source,
        })?;
        samples.push(value);
    }
    Ok(SampleSeries::new(samples))
}
/// Load `waveform`'s file from `dir` and print `len(<label>) = N` to `out`.
///
/// Nothing is printed if loading fails.
pub fn load_and_report<W: Write>(
    dir: &Path,
    waveform: Waveform,
    out: &mut W,
) -> Result<SampleSeries, WaveformError> {
    let series = load_samples(&dir.join(waveform.file_name()))?;
    writeln!(out, "len({}) = {}", waveform.label(), series.len())
        .map_err(WaveformError::Console)?;
    Ok(series)
}
