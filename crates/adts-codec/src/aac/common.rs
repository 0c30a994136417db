use std::convert::TryFrom;

use super::error::{AacError, Parameter};


/// MPEG-4 sampling frequency index.
///
/// Indices 13 and 14 are reserved, 15 signals an explicitly coded frequency,
/// which ADTS cannot carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingFrequencyIndex {
    F96000 = 0,
    F88200 = 1,
    F64000 = 2,
    F48000 = 3,
    F44100 = 4,
    F32000 = 5,
    F24000 = 6,
    F22050 = 7,
    F16000 = 8,
    F12000 = 9,
    F11025 = 10,
    F8000 = 11,
    F7350 = 12,
}

impl SamplingFrequencyIndex {
    pub const ALL: [Self; 13] = [
        Self::F96000,
        Self::F88200,
        Self::F64000,
        Self::F48000,
        Self::F44100,
        Self::F32000,
        Self::F24000,
        Self::F22050,
        Self::F16000,
        Self::F12000,
        Self::F11025,
        Self::F8000,
        Self::F7350,
    ];

    pub fn from_sample_rate(rate: u32) -> Result<Self, AacError> {
        Ok(match rate {
            96000 => Self::F96000,
            88200 => Self::F88200,
            64000 => Self::F64000,
            48000 => Self::F48000,
            44100 => Self::F44100,
            32000 => Self::F32000,
            24000 => Self::F24000,
            22050 => Self::F22050,
            16000 => Self::F16000,
            12000 => Self::F12000,
            11025 => Self::F11025,
            8000 => Self::F8000,
            7350 => Self::F7350,
            _ => return Err(AacError::UnsupportedParameter(Parameter::SampleRate(rate))),
        })
    }

    pub fn sample_rate(self) -> u32 {
        match self {
            Self::F96000 => 96000,
            Self::F88200 => 88200,
            Self::F64000 => 64000,
            Self::F48000 => 48000,
            Self::F44100 => 44100,
            Self::F32000 => 32000,
            Self::F24000 => 24000,
            Self::F22050 => 22050,
            Self::F16000 => 16000,
            Self::F12000 => 12000,
            Self::F11025 => 11025,
            Self::F8000 => 8000,
            Self::F7350 => 7350,
        }
    }
}

impl From<SamplingFrequencyIndex> for u8 {
    fn from(val: SamplingFrequencyIndex) -> Self {
        val as u8
    }
}

impl TryFrom<u8> for SamplingFrequencyIndex {
    type Error = AacError;

    fn try_from(val: u8) -> Result<Self, AacError> {
        Self::ALL
            .get(usize::from(val))
            .copied()
            .ok_or(AacError::UnsupportedParameter(Parameter::FrequencyIndex(val)))
    }
}


/// MPEG-4 channel configuration, 3 bits wide in the ADTS header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelConfiguration {
    /// Channel layout is described by a program config element in-band.
    ProgramConfigElement = 0,
    Mono = 1,
    Stereo = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    FivePointOne = 6,
    SevenPointOne = 7,
}

impl ChannelConfiguration {
    pub fn from_channel_count(count: u16) -> Result<Self, AacError> {
        Ok(match count {
            1 => Self::Mono,
            2 => Self::Stereo,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::FivePointOne,
            8 => Self::SevenPointOne,
            _ => return Err(AacError::UnsupportedParameter(Parameter::ChannelCount(count))),
        })
    }

    /// Number of channels, `None` when the layout lives in a program config element.
    pub fn channel_count(self) -> Option<u16> {
        Some(match self {
            Self::ProgramConfigElement => return None,
            Self::Mono => 1,
            Self::Stereo => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::FivePointOne => 6,
            Self::SevenPointOne => 8,
        })
    }
}

impl From<ChannelConfiguration> for u8 {
    fn from(val: ChannelConfiguration) -> Self {
        val as u8
    }
}

impl TryFrom<u8> for ChannelConfiguration {
    type Error = AacError;

    fn try_from(val: u8) -> Result<Self, AacError> {
        Ok(match val {
            0 => Self::ProgramConfigElement,
            1 => Self::Mono,
            2 => Self::Stereo,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::FivePointOne,
            7 => Self::SevenPointOne,
            _ => return Err(AacError::UnsupportedParameter(Parameter::ChannelConfiguration(val))),
        })
    }
}


// See [MPEG-4 Audio Object Types][audio_object_types]
//
// [audio_object_types]: https://en.wikipedia.org/wiki/MPEG-4_Part_3#MPEG-4_Audio_Object_Types
#[allow(clippy::enum_variant_names)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum AudioObjectType {
    AacMain = 1,
    AacLowComplexity = 2,
    AacScalableSampleRate = 3,
    AacLongTermPrediction = 4,
}

impl AudioObjectType {
    /// The 2 bit ADTS profile field, which is the object type minus one.
    pub fn profile(self) -> u8 {
        self as u8 - 1
    }
}

impl TryFrom<u8> for AudioObjectType {
    type Error = AacError;

    fn try_from(value: u8) -> Result<Self, AacError> {
        Ok(match value {
            1 => Self::AacMain,
            2 => Self::AacLowComplexity,
            3 => Self::AacScalableSampleRate,
            4 => Self::AacLongTermPrediction,
            _ => return Err(AacError::UnsupportedParameter(Parameter::AudioObjectType(value))),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_standard_sample_rates_to_indices() {
        let table = [
            (96000, 0),
            (88200, 1),
            (64000, 2),
            (48000, 3),
            (44100, 4),
            (32000, 5),
            (24000, 6),
            (22050, 7),
            (16000, 8),
            (12000, 9),
            (11025, 10),
            (8000, 11),
            (7350, 12),
        ];

        for (rate, index) in table {
            let sfi = SamplingFrequencyIndex::from_sample_rate(rate).unwrap();
            assert_eq!(u8::from(sfi), index);
            assert_eq!(sfi.sample_rate(), rate);
            assert_eq!(SamplingFrequencyIndex::try_from(index).unwrap(), sfi);
        }
    }

    #[test]
    fn rejects_unsupported_sample_rates() {
        for rate in [0, 13000, 44000, 192000] {
            let err = SamplingFrequencyIndex::from_sample_rate(rate).unwrap_err();
            assert!(matches!(
                err,
                AacError::UnsupportedParameter(Parameter::SampleRate(r)) if r == rate
            ));
        }
    }

    #[test]
    fn rejects_reserved_frequency_indices() {
        for index in [13, 14, 15] {
            assert!(matches!(
                SamplingFrequencyIndex::try_from(index),
                Err(AacError::UnsupportedParameter(Parameter::FrequencyIndex(_)))
            ));
        }
    }

    #[test]
    fn maps_channel_counts_to_configurations() {
        let table = [(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6), (8, 7)];

        for (count, code) in table {
            let config = ChannelConfiguration::from_channel_count(count).unwrap();
            assert_eq!(u8::from(config), code);
            assert_eq!(config.channel_count(), Some(count));
        }
    }

    #[test]
    fn rejects_unsupported_channel_counts() {
        for count in [0, 7, 9, 16] {
            assert!(matches!(
                ChannelConfiguration::from_channel_count(count),
                Err(AacError::UnsupportedParameter(Parameter::ChannelCount(c))) if c == count
            ));
        }
    }

    #[test]
    fn program_config_element_has_no_channel_count() {
        let config = ChannelConfiguration::try_from(0).unwrap();
        assert_eq!(config, ChannelConfiguration::ProgramConfigElement);
        assert_eq!(config.channel_count(), None);
        assert!(ChannelConfiguration::try_from(8).is_err());
    }

    #[test]
    fn profile_is_object_type_minus_one() {
        assert_eq!(AudioObjectType::AacLowComplexity.profile(), 1);
        assert_eq!(AudioObjectType::AacMain.profile(), 0);
        assert!(AudioObjectType::try_from(5).is_err());
    }
}
