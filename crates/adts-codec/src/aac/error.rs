use std::fmt;

use thiserror::Error;


#[derive(Debug, Error)]
pub enum AacError {
    #[error("AAC coder not initialized")]
    NotInitialized,

    #[error("Not enough data: {0}")]
    NotEnoughData(&'static str),

    #[error("Unsupported {0}")]
    UnsupportedParameter(Parameter),

    #[error("Frame length {0} exceeds the maximum ADTS frame length of 8191 bytes")]
    FrameTooLarge(usize),

    #[error("Output buffer too small, needs {needed} bytes but has {available}")]
    InsufficientCapacity { needed: usize, available: usize },
}


/// The value that could not be mapped onto an ADTS field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    SampleRate(u32),
    ChannelCount(u16),
    FrequencyIndex(u8),
    ChannelConfiguration(u8),
    AudioObjectType(u8),
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleRate(val) => write!(f, "sample rate {} Hz", val),
            Self::ChannelCount(val) => write!(f, "channel count {}", val),
            Self::FrequencyIndex(val) => write!(f, "sampling frequency index {}", val),
            Self::ChannelConfiguration(val) => write!(f, "channel configuration {}", val),
            Self::AudioObjectType(val) => write!(f, "audio object type {}", val),
        }
    }
}
