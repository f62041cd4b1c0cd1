// src/app.rs
use std::io::Write;
use std::path::Path;
use log::info;
use crate::drivers::{load_and_report, ChartDisplay, SampleSeries, WaveformError};
use crate::waveform::Waveform;

/// Load all four sample files from `dir`, reporting each length to `out`,
/// then show them one after another on `display`.
///
/// The first error stops the run; later waveforms are neither loaded nor shown.
pub fn run<W, D>(dir: &Path, out: &mut W, display: &mut D) -> Result<(), WaveformError>
where
    W: Write,
    D: ChartDisplay,
{
    let mut loaded: Vec<(Waveform, SampleSeries)> = Vec::with_capacity(Waveform::ALL.len());
    for waveform in Waveform::ALL {
        let series = load_and_report(dir, waveform, out)?;
        loaded.push((waveform, series));
    }
    out.flush().map_err(WaveformError::Console)?;
    for (waveform, series) in &loaded {
        info!("plotting {waveform}");
        display.show(*waveform, series)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingDisplay {
        shown: Vec<(Waveform, Vec<f64>)>,
    }

    impl ChartDisplay for RecordingDisplay {
        fn show(&mut self, waveform: Waveform, series: &SampleSeries) -> Result<(), WaveformError> {
            self.shown.push((waveform, series.samples().to_vec()));
            Ok(())
        }
    }

    fn data_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn reports_then_shows_in_fixed_order() {
        let dir = data_dir(&[
            ("sine.dat", "0.0\n0.707\n1.0\n0.707\n"),
            ("saw.dat", ""),
            ("square.dat", "1.0\n1.0\n-1.0\n-1.0\n"),
            ("triangle.dat", "0.0\n1.0\n0.0\n-1.0\n0.0\n"),
        ]);
        let mut out = Vec::new();
        let mut display = RecordingDisplay::default();
        run(dir.path(), &mut out, &mut display).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "len(sin) = 4\nlen(saw) = 0\nlen(square) = 4\nlen(triangle) = 5\n"
        );
        let order: Vec<_> = display.shown.iter().map(|(w, _)| *w).collect();
        assert_eq!(order, Waveform::ALL);
        assert_eq!(display.shown[0].1, vec![0.0, 0.707, 1.0, 0.707]);
        assert!(display.shown[1].1.is_empty());
    }

    #[test]
    fn malformed_file_stops_before_any_chart() {
        let dir = data_dir(&[
            ("sine.dat", "0.0\n1.0\n"),
            ("saw.dat", "0.5\nabc\n"),
            ("square.dat", "1.0\n"),
            ("triangle.dat", "0.0\n"),
        ]);
        let mut out = Vec::new();
        let mut display = RecordingDisplay::default();
        let err = run(dir.path(), &mut out, &mut display).unwrap_err();

        assert!(matches!(err, WaveformError::Parse { line: 2, .. }));
        assert_eq!(String::from_utf8(out).unwrap(), "len(sin) = 2\n");
        assert!(display.shown.is_empty());
    }

    #[test]
    fn missing_file_prints_nothing_for_it() {
        let dir = data_dir(&[("sine.dat", "0.0\n"), ("saw.dat", "0.0\n")]);
        let mut out = Vec::new();
        let mut display = RecordingDisplay::default();
        let err = run(dir.path(), &mut out, &mut display).unwrap_err();

        assert!(matches!(err, WaveformError::Open { .. }));
        assert_eq!(String::from_utf8(out).unwrap(), "len(sin) = 1\nlen(saw) = 1\n");
        assert!(display.shown.is_empty());
    }

    #[test]
    fn display_failure_stops_remaining_charts() {
        struct FailsOnSaw(Vec<Waveform>);
        impl ChartDisplay for FailsOnSaw {
            fn show(&mut self, waveform: Waveform, _: &SampleSeries) -> Result<(), WaveformError> {
                if waveform == Waveform::Saw {
                    return Err(WaveformError::Display("no display".into()));
                }
                self.0.push(waveform);
                Ok(())
            }
        }
        let dir = data_dir(&[
            ("sine.dat", "0.0\n"),
            ("saw.dat", "0.0\n"),
            ("square.dat", "0.0\n"),
            ("triangle.dat", "0.0\n"),
        ]);
        let mut display = FailsOnSaw(Vec::new());
        assert!(run(dir.path(), &mut Vec::new(), &mut display).is_err());
        assert_eq!(display.0, vec![Waveform::Sine]);
    }
}
