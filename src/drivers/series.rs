/// One waveform's samples in file order (file order is time order).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleSeries {
    samples: Vec<f64>,
}
impl SampleSeries {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
    /// `[index, value]` pairs ready for a line plot.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, v)| [i as f64, *v])
    }
}
impl From<Vec<f64>> for SampleSeries {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}
