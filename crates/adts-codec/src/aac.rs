pub mod adts;
pub mod common;
pub mod config;
pub mod error;


use tracing::debug;

pub use self::adts::{AdtsHeader, AudioDataTransportStream};
pub use self::config::{AudioConfig, AudioSpecificConfiguration, ChannelLayout};
pub use self::error::{AacError, Parameter};
use crate::{FormatWriter, WriteFormat};


/// A single raw AAC access unit.
pub struct Aac(Vec<u8>);

impl From<&[u8]> for Aac {
    fn from(val: &[u8]) -> Self {
        Self(Vec::from(val))
    }
}

impl From<Vec<u8>> for Aac {
    fn from(val: Vec<u8>) -> Self {
        Self(val)
    }
}

impl From<Aac> for Vec<u8> {
    fn from(val: Aac) -> Self {
        val.0
    }
}


enum State {
    Initializing,
    Ready(AudioConfig),
}

/// Frames access units for a stream whose audio parameters were checked up front.
pub struct AacCoder {
    state: State,
}

impl AacCoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores the stream configuration.
    ///
    /// The previous configuration is kept if the new one can't be encoded.
    pub fn set_config(&mut self, config: AudioConfig) -> Result<(), AacError> {
        let (sampling_frequency_index, channel_configuration) = config.validate()?;
        debug!(
            ?sampling_frequency_index,
            ?channel_configuration,
            "AAC coder configured"
        );
        self.state = State::Ready(config);
        Ok(())
    }

    /// Takes the configuration from an AAC sequence header.
    pub fn set_asc<A>(&mut self, asc: A) -> Result<(), AacError>
    where
        A: TryInto<AudioSpecificConfiguration, Error = AacError>,
    {
        let asc: AudioSpecificConfiguration = asc.try_into()?;
        self.set_config(AudioConfig::try_from(&asc)?)
    }

    pub fn config(&self) -> Option<&AudioConfig> {
        match &self.state {
            State::Initializing => None,
            State::Ready(config) => Some(config),
        }
    }
}

impl Default for AacCoder {
    fn default() -> Self {
        Self {
            state: State::Initializing,
        }
    }
}

impl FormatWriter<AudioDataTransportStream> for AacCoder {
    type Error = AacError;
    type Input = Aac;

    fn write_format(
        &mut self,
        format: AudioDataTransportStream,
        input: Self::Input,
    ) -> Result<Vec<u8>, Self::Error> {
        Ok(match &self.state {
            State::Initializing => return Err(AacError::NotInitialized),
            State::Ready(config) => format.write_format(input, config)?,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_coder_refuses_to_write() {
        let mut coder = AacCoder::new();
        let result = coder.write_format(AudioDataTransportStream, Aac::from(&[0u8; 4][..]));
        assert!(matches!(result, Err(AacError::NotInitialized)));
    }

    #[test]
    fn rejects_config_before_any_frame() {
        let mut coder = AacCoder::new();
        let err = coder.set_config(AudioConfig::new(13000, ChannelLayout::Stereo)).unwrap_err();

        assert!(matches!(err, AacError::UnsupportedParameter(Parameter::SampleRate(13000))));
        assert!(coder.config().is_none());
    }

    #[test]
    fn keeps_previous_config_on_failure() {
        let mut coder = AacCoder::new();
        coder.set_config(AudioConfig::new(48000, ChannelLayout::Mono)).unwrap();
        assert!(coder.set_config(AudioConfig::new(1, ChannelLayout::Mono)).is_err());

        assert_eq!(coder.config().map(|c| c.sample_rate), Some(48000));
    }

    #[test]
    fn frames_access_units() {
        let mut coder = AacCoder::new();
        coder.set_config(AudioConfig::new(44100, ChannelLayout::Stereo)).unwrap();

        let frame = coder
            .write_format(AudioDataTransportStream, Aac::from(vec![0x21; 100]))
            .unwrap();

        assert_eq!(frame.len(), 107);
        assert_eq!(frame[..7], [0xFF, 0xF1, 0x50, 0x80, 0x0D, 0x7F, 0xFC]);
        assert!(frame[7..].iter().all(|&b| b == 0x21));
    }

    #[test]
    fn oversized_access_unit_is_rejected() {
        let mut coder = AacCoder::new();
        coder.set_config(AudioConfig::default()).unwrap();

        let result = coder.write_format(AudioDataTransportStream, Aac::from(vec![0; 8185]));
        assert!(matches!(result, Err(AacError::FrameTooLarge(8192))));
    }

    #[test]
    fn configures_from_sequence_header() {
        let mut coder = AacCoder::new();
        coder.set_asc(&[0b0001_0010u8, 0b0001_0000][..]).unwrap();

        let config = coder.config().unwrap();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.channel_layout, ChannelLayout::Stereo);
    }
}
