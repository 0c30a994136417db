use std::convert::TryFrom;
use std::io::Cursor;

use bytes::Buf;
use serde::Deserialize;

use super::common::{AudioObjectType, ChannelConfiguration, SamplingFrequencyIndex};
use super::error::{AacError, Parameter};


/// Speaker layout of an audio source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelLayout {
    Mono,
    Stereo,
    Three,
    Quad,
    Five,
    FivePointOne,
    SevenPointOne,
}

impl ChannelLayout {
    /// Layout for a channel configuration, `None` for a program config element.
    pub fn from_channel_configuration(config: ChannelConfiguration) -> Option<Self> {
        Some(match config {
            ChannelConfiguration::ProgramConfigElement => return None,
            ChannelConfiguration::Mono => Self::Mono,
            ChannelConfiguration::Stereo => Self::Stereo,
            ChannelConfiguration::Three => Self::Three,
            ChannelConfiguration::Four => Self::Quad,
            ChannelConfiguration::Five => Self::Five,
            ChannelConfiguration::FivePointOne => Self::FivePointOne,
            ChannelConfiguration::SevenPointOne => Self::SevenPointOne,
        })
    }

    pub fn channel_count(self) -> u16 {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
            Self::Three => 3,
            Self::Quad => 4,
            Self::Five => 5,
            Self::FivePointOne => 6,
            Self::SevenPointOne => 8,
        }
    }
}


/// Audio parameters the ADTS header is built from.
#[derive(Debug, Clone, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    #[serde(default = "default_channel_layout")]
    pub channel_layout: ChannelLayout,
}

impl AudioConfig {
    pub fn new(sample_rate: u32, channel_layout: ChannelLayout) -> Self {
        Self {
            sample_rate,
            channel_layout,
        }
    }

    pub fn channel_count(&self) -> u16 {
        self.channel_layout.channel_count()
    }

    /// Checks that both parameters can be represented in an ADTS header.
    pub fn validate(&self) -> Result<(SamplingFrequencyIndex, ChannelConfiguration), AacError> {
        let sampling_frequency_index = SamplingFrequencyIndex::from_sample_rate(self.sample_rate)?;
        let channel_configuration = ChannelConfiguration::from_channel_count(self.channel_count())?;
        Ok((sampling_frequency_index, channel_configuration))
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            channel_layout: default_channel_layout(),
        }
    }
}

impl TryFrom<&AudioSpecificConfiguration> for AudioConfig {
    type Error = AacError;

    /// ADTS only carries AAC-LC with a fixed channel configuration.
    fn try_from(asc: &AudioSpecificConfiguration) -> Result<Self, Self::Error> {
        if asc.object_type != AudioObjectType::AacLowComplexity {
            let object_type = asc.object_type as u8;
            return Err(AacError::UnsupportedParameter(Parameter::AudioObjectType(object_type)));
        }

        let channel_layout = ChannelLayout::from_channel_configuration(asc.channel_configuration)
            .ok_or_else(|| {
                let config = u8::from(asc.channel_configuration);
                AacError::UnsupportedParameter(Parameter::ChannelConfiguration(config))
            })?;

        Ok(Self::new(asc.sampling_frequency_index.sample_rate(), channel_layout))
    }
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_channel_layout() -> ChannelLayout {
    ChannelLayout::Stereo
}


// Bits | Description
// ---- | -----------
// 5    | Audio object type
// 4    | Sampling frequency index
// 4    | Channel configuration
// AOT specific section
// 1    | Frame length flag
// 1    | Depends on core coder
// 1    | Extension flag
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSpecificConfiguration {
    pub object_type: AudioObjectType,
    pub sampling_frequency_index: SamplingFrequencyIndex,
    pub channel_configuration: ChannelConfiguration,
    pub frame_length_flag: bool,
    pub depends_on_core_coder: bool,
    pub extension_flag: bool,
}

impl TryFrom<&[u8]> for AudioSpecificConfiguration {
    type Error = AacError;

    fn try_from(val: &[u8]) -> Result<Self, Self::Error> {
        if val.len() < 2 {
            return Err(AacError::NotEnoughData("AAC audio specific config"));
        }

        let mut buf = Cursor::new(val);

        let header_a = buf.get_u8();
        let header_b = buf.get_u8();

        let object_type = AudioObjectType::try_from((header_a & 0xF8) >> 3)?;

        let sf_idx = ((header_a & 0x07) << 1) | (header_b >> 7);
        let sampling_frequency_index = SamplingFrequencyIndex::try_from(sf_idx)?;

        let channel_configuration = ChannelConfiguration::try_from((header_b >> 3) & 0x0F)?;
        let frame_length_flag = (header_b & 0x04) == 0x04;
        let depends_on_core_coder = (header_b & 0x02) == 0x02;
        let extension_flag = (header_b & 0x01) == 0x01;

        Ok(Self {
            object_type,
            sampling_frequency_index,
            channel_configuration,
            frame_length_flag,
            depends_on_core_coder,
            extension_flag,
        })
    }
}
