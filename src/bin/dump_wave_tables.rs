use std::path::Path;
use anyhow::{bail, Result};
use log::{error, info};
use wavetable_plot::wavetable::{WaveTable, WAVE_TABLE_SIZE};
use wavetable_plot::Waveform;

// 把四个波形表写到当前目录，供 wavetable-plot 查看
fn main() -> Result<()> {
    env_logger::init();
    let mut failed = 0;
    for waveform in Waveform::ALL {
        let table = WaveTable::for_waveform(waveform, WAVE_TABLE_SIZE);
        let path = Path::new(waveform.file_name());
        match table.dump_to_file(path) {
            Ok(()) => info!("wrote {}", path.display()),
            Err(e) => {
                error!("could not dump {waveform} wave table: {e}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{failed} wave table(s) could not be written");
    }
    Ok(())
}
