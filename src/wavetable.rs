// src/wavetable.rs
use std::f64::consts::PI;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use log::debug;
use crate::drivers::WaveformError;
use crate::waveform::Waveform;

pub const WAVE_TABLE_SIZE: usize = 2048;

/// One cycle of a waveform sampled at `len` evenly spaced phases in `[0, 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveTable {
    samples: Vec<f64>,
}

impl WaveTable {
    fn from_phase_fn(len: usize, f: impl Fn(f64) -> f64) -> Self {
        let samples = (0..len).map(|i| f(i as f64 / len as f64)).collect();
        Self { samples }
    }

    pub fn sine(len: usize) -> Self {
        Self::from_phase_fn(len, |phase| (2.0 * PI * phase).sin())
    }

    /// Rises linearly from -1 towards +1.
    pub fn saw(len: usize) -> Self {
        Self::from_phase_fn(len, |phase| 2.0 * phase - 1.0)
    }

    pub fn square(len: usize) -> Self {
        Self::from_phase_fn(len, |phase| if phase < 0.5 { 1.0 } else { -1.0 })
    }

    /// Starts at 0, peaks at +1 a quarter cycle in, -1 at three quarters.
    pub fn triangle(len: usize) -> Self {
        Self::from_phase_fn(len, |phase| {
            if phase < 0.25 {
                4.0 * phase
            } else if phase < 0.75 {
                2.0 - 4.0 * phase
            } else {
                4.0 * phase - 4.0
            }
        })
    }

    pub fn for_waveform(waveform: Waveform, len: usize) -> Self {
        match waveform {
            Waveform::Sine => Self::sine(len),
            Waveform::Saw => Self::saw(len),
            Waveform::Square => Self::square(len),
            Waveform::Triangle => Self::triangle(len),
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Write one value per line in shortest round-trip form.
    pub fn dump_to_file(&self, path: &Path) -> Result<(), WaveformError> {
        let to_dump_err = |source| WaveformError::Dump {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(to_dump_err)?;
        let mut w = BufWriter::new(file);
        for value in &self.samples {
            writeln!(w, "{value}").map_err(to_dump_err)?;
        }
        w.flush().map_err(to_dump_err)?;
        debug!("dumped {} samples to {path:?}", self.samples.len());
        Ok(())
    }
}
