// src/lib.rs
pub mod app;
pub mod drivers;
pub mod waveform;
pub mod wavetable;

pub use app::run;
pub use waveform::Waveform;
