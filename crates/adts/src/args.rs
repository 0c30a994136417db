use std::path::PathBuf;

use adts_codec::aac::AudioConfig;
use clap::{Parser, Subcommand};


#[derive(Parser)]
#[command(version, about)]
pub struct Args {
    #[arg(short, long, default_value = "./")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the ADTS header for an access unit of the given length
    Header {
        #[arg(long, required = true)]
        payload_length: usize,
        /// Reserve two bytes for a CRC
        #[arg(long)]
        crc: bool,
        #[command(flatten)]
        audio: AudioArgs,
    },
    /// Concatenate raw AAC access units into an ADTS stream, one unit per input file
    Wrap {
        #[arg(short, long, required = true)]
        output: PathBuf,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        #[command(flatten)]
        audio: AudioArgs,
    },
}

#[derive(clap::Args)]
pub struct AudioArgs {
    /// Sample rate in Hz, overrides the configured value
    #[arg(long)]
    pub sample_rate: Option<u32>,
    /// Channel count, overrides the configured layout
    #[arg(long)]
    pub channels: Option<u16>,
}

impl AudioArgs {
    /// Sample rate and channel count, falling back to the configured values.
    pub fn resolve(&self, config: &AudioConfig) -> (u32, u16) {
        (
            self.sample_rate.unwrap_or(config.sample_rate),
            self.channels.unwrap_or_else(|| config.channel_count()),
        )
    }
}
