use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use log::debug;
use crate::drivers::error::WaveformError;
use crate::drivers::series::SampleSeries;
use crate::waveform::Waveform;
#[derive(Clone, Debug)]
pub struct ChartStyle {
    pub width: f32,
    pub height: f32,
}
impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 400.0,
        }
    }
}
/// Something that can present one waveform's samples to the user.
///
/// Implementations block until the user is done with the chart.
pub trait ChartDisplay {
    fn show(&mut self, waveform: Waveform, series: &SampleSeries) -> Result<(), WaveformError>;
}
/// Opens a native window per chart and waits for it to be closed.
#[derive(Clone, Debug, Default)]
pub struct NativeChart {
    style: ChartStyle,
}
impl NativeChart {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }
}
impl ChartDisplay for NativeChart {
    fn show(&mut self, waveform: Waveform, series: &SampleSeries) -> Result<(), WaveformError> {
        let viewport = egui::ViewportBuilder::default()
            .with_inner_size([self.style.width, self.style.height])
            .with_title(waveform.file_name());
        let options = eframe::NativeOptions {
            viewport,
            // 关闭窗口后返回，才能依次显示下一个波形
            run_and_return: true,
            ..Default::default()
        };
        let window = ChartWindow::new(waveform, series);
        debug!("showing {waveform} ({} samples)", series.len());
        eframe::run_native(
            waveform.file_name(),
            options,
            Box::new(move |_cc| Box::new(window)),
        )?;
        debug!("{waveform} chart dismissed");
        Ok(())
    }
}
/// Single line plot, x = sample index, y = value. Empty series show empty axes.
struct ChartWindow {
    plot_id: String,
    points: Vec<[f64; 2]>,
}
impl ChartWindow {
    fn new(waveform: Waveform, series: &SampleSeries) -> Self {
        Self {
            plot_id: format!("{}-plot", waveform.label()),
            points: series.points().collect(),
        }
    }
}
impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let points = PlotPoints::from_iter(self.points.iter().copied());
            Plot::new(&self.plot_id).show(ui, |plot_ui| {
                plot_ui.line(Line::new(points));
            });
        });
    }
}
