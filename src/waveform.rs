// src/waveform.rs
use std::fmt;

/// The four reference shapes, in the order they are loaded and shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Saw,
    Square,
    Triangle,
}

impl Waveform {
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Saw,
        Waveform::Square,
        Waveform::Triangle,
    ];

    /// Sample file expected in the working directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine.dat",
            Waveform::Saw => "saw.dat",
            Waveform::Square => "square.dat",
            Waveform::Triangle => "triangle.dat",
        }
    }

    /// Name used in the `len(<label>) = N` console line.
    pub fn label(self) -> &'static str {
        match self {
            Waveform::Sine => "sin",
            Waveform::Saw => "saw",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
