// src/main.rs
use std::io;
use std::path::Path;
use anyhow::Result;
use wavetable_plot::drivers::NativeChart;

// 入口函数：读取当前目录下的四个 .dat 文件并依次绘图
fn main() -> Result<()> {
    env_logger::init();
    let mut out = io::stdout().lock();
    let mut display = NativeChart::default();
    wavetable_plot::run(Path::new("."), &mut out, &mut display)?;
    Ok(())
}
