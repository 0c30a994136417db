#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

mod args;
mod config;


use std::fs;
use std::path::{Path, PathBuf};

use adts_codec::aac::AdtsHeader;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use self::args::{Args, Command};


fn main() -> Result<()> {
    if let Err(why) = init_tracing() {
        eprintln!("Failed to initialize logger: {}", why);
    };

    let args = Args::parse();
    let config = config::from_path(&args.config_dir)?;

    match args.cmd {
        Command::Header {
            payload_length,
            crc,
            audio,
        } => {
            let (sample_rate, channels) = audio.resolve(&config.audio);
            let header = if crc {
                AdtsHeader::with_crc(sample_rate, channels, payload_length)
            } else {
                AdtsHeader::new(sample_rate, channels, payload_length)
            };
            println!("{}", to_hex(&header.to_bytes()?));
        }
        Command::Wrap {
            output,
            inputs,
            audio,
        } => {
            let (sample_rate, channels) = audio.resolve(&config.audio);
            let stream = wrap(&inputs, sample_rate, channels)?;
            fs::write(&output, &stream)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Wrote {} access units ({} bytes) to {}", inputs.len(), stream.len(), output.display());
        }
    }

    Ok(())
}

/// Frames every input file as one access unit, in order.
fn wrap(inputs: &[PathBuf], sample_rate: u32, channels: u16) -> Result<Vec<u8>> {
    // reject the stream parameters before reading any payload
    AdtsHeader::new(sample_rate, channels, 0).validate()?;

    let mut stream = Vec::new();

    for input in inputs {
        let payload = read_access_unit(input)?;
        let header = AdtsHeader::new(sample_rate, channels, payload.len());

        header
            .write(&mut stream)
            .with_context(|| format!("Failed to frame {}", input.display()))?;
        stream.extend_from_slice(&payload);

        debug!(frame_length = header.frame_length(), "Framed {}", input.display());
    }

    Ok(stream)
}

fn read_access_unit(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{:02X}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

fn init_tracing() -> Result<()> {
    use tracing::Level;
    use tracing_subscriber::filter::Targets;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let max_level = if cfg!(debug_assertions) {
        Level::TRACE
    } else {
        Level::INFO
    };

    let filter_layer = Targets::new()
        .with_target("adts", max_level)
        .with_target("adts_codec", max_level)
        .with_default(Level::ERROR);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr))
        .with(filter_layer)
        .try_init()?;

    Ok(())
}
