use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use super::common::{AudioObjectType, ChannelConfiguration, SamplingFrequencyIndex};
use super::config::{AudioConfig, AudioSpecificConfiguration};
use super::error::AacError;
use super::Aac;
use crate::WriteFormat;


/// Length of the header without CRC.
pub const HEADER_LENGTH: usize = 7;

/// Length of the header with the 16 bit CRC appended.
pub const PROTECTED_HEADER_LENGTH: usize = HEADER_LENGTH + 2;

/// Largest value the 13 bit frame length field can hold.
pub const MAX_FRAME_LENGTH: usize = 0x1FFF;

const SYNCWORD: u64 = 0xFFF;
const BUFFER_FULLNESS_VBR: u64 = 0x7FF;
const PROFILE: AudioObjectType = AudioObjectType::AacLowComplexity;


// Bits | Description
// ---- | -----------
// 12   | Sync word, constant 0xFFF
// 1    | MPEG version
// 2    | Layer, constant 0x00
// 1    | Protection absence
// 2    | Profile
// 4    | MPEG-4 sampling frequency index
// 1    | Private, constant 0x00
// 3    | MPEG-4 channel configuration
// 1    | Originality
// 1    | Home
// 1    | Copyrighted ID
// 1    | Copyrighted ID start
// 13   | Frame length
// 11   | Buffer fullness
// 2    | Number of AAC frames - 1
// 16   | CRC if protection absence not set
//
// https://wiki.multimedia.cx/index.php/ADTS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdtsHeader {
    protection_absent: bool,
    sample_rate: u32,
    channel_count: u16,
    payload_length: usize,
}

impl AdtsHeader {
    /// Header for an AAC-LC access unit without CRC protection.
    pub fn new(sample_rate: u32, channel_count: u16, payload_length: usize) -> Self {
        Self {
            protection_absent: true,
            sample_rate,
            channel_count,
            payload_length,
        }
    }

    /// Header reserving two bytes for a CRC, which are written as zero.
    pub fn with_crc(sample_rate: u32, channel_count: u16, payload_length: usize) -> Self {
        Self {
            protection_absent: false,
            ..Self::new(sample_rate, channel_count, payload_length)
        }
    }

    pub fn from_audio_config(config: &AudioConfig, payload_length: usize) -> Self {
        Self::new(config.sample_rate, config.channel_count(), payload_length)
    }

    pub fn from_specific_config(
        asc: &AudioSpecificConfiguration,
        payload_length: usize,
    ) -> Result<Self, AacError> {
        let config = AudioConfig::try_from(asc)?;
        Ok(Self::from_audio_config(&config, payload_length))
    }

    pub fn protection_absent(&self) -> bool {
        self.protection_absent
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> u16 {
        self.channel_count
    }

    pub fn payload_length(&self) -> usize {
        self.payload_length
    }

    pub fn header_length(&self) -> usize {
        if self.protection_absent {
            HEADER_LENGTH
        } else {
            PROTECTED_HEADER_LENGTH
        }
    }

    pub fn frame_length(&self) -> usize {
        self.payload_length.saturating_add(self.header_length())
    }

    pub fn sampling_frequency_index(&self) -> Result<SamplingFrequencyIndex, AacError> {
        SamplingFrequencyIndex::from_sample_rate(self.sample_rate)
    }

    pub fn channel_configuration(&self) -> Result<ChannelConfiguration, AacError> {
        ChannelConfiguration::from_channel_count(self.channel_count)
    }

    /// Resolves every field that can fail without touching any output.
    pub fn validate(
        &self,
    ) -> Result<(SamplingFrequencyIndex, ChannelConfiguration, usize), AacError> {
        let sampling_frequency_index = self.sampling_frequency_index()?;
        let channel_configuration = self.channel_configuration()?;

        let frame_length = self.frame_length();
        if frame_length > MAX_FRAME_LENGTH {
            return Err(AacError::FrameTooLarge(frame_length));
        }

        Ok((sampling_frequency_index, channel_configuration, frame_length))
    }

    /// Appends the header at the current position of `buf`.
    ///
    /// Nothing is written if any field can't be encoded or `buf` lacks room.
    pub fn write<B>(&self, buf: &mut B) -> Result<(), AacError>
    where
        B: BufMut,
    {
        let (sampling_frequency_index, channel_configuration, frame_length) = self.validate()?;

        let needed = self.header_length();
        let available = buf.remaining_mut();
        if available < needed {
            return Err(AacError::InsufficientCapacity { needed, available });
        }

        let fields: [(u64, u32); 15] = [
            (SYNCWORD, 12),
            (0, 1), // MPEG-4
            (0, 2), // layer
            (u64::from(self.protection_absent), 1),
            (u64::from(PROFILE.profile()), 2),
            (u64::from(u8::from(sampling_frequency_index)), 4),
            (0, 1), // private
            (u64::from(u8::from(channel_configuration)), 3),
            (0, 1), // originality
            (0, 1), // home
            (0, 1), // copyright id
            (0, 1), // copyright id start
            (frame_length as u64, 13),
            (BUFFER_FULLNESS_VBR, 11),
            (0, 2), // one raw data block
        ];

        let bits = fields
            .iter()
            .fold(0u64, |acc, &(value, width)| (acc << width) | (value & ((1 << width) - 1)));

        // Syncword, MPEG version, layer and protection absence
        buf.put_u16((bits >> 40) as u16);

        // Profile through the first 5 bits of buffer fullness
        buf.put_u32((bits >> 8) as u32);

        // Remaining buffer fullness and number of raw data blocks
        buf.put_u8(bits as u8);

        if !self.protection_absent {
            buf.put_u16(0);
        }

        trace!(
            frame_length,
            sample_rate = self.sample_rate,
            channels = self.channel_count,
            "Wrote ADTS header"
        );

        Ok(())
    }

    /// Encodes the header into a buffer of exactly `header_length` bytes.
    pub fn to_bytes(&self) -> Result<Bytes, AacError> {
        let mut buf = BytesMut::with_capacity(self.header_length());
        self.write(&mut buf)?;
        Ok(buf.freeze())
    }
}


/// Prepends an ADTS header to raw AAC access units.
#[derive(Debug, Clone)]
pub struct AudioDataTransportStream;

impl WriteFormat<Aac> for AudioDataTransportStream {
    type Context = AudioConfig;
    type Error = AacError;

    fn write_format(&self, input: Aac, ctx: &Self::Context) -> Result<Vec<u8>, Self::Error> {
        let payload: Vec<u8> = input.into();
        let header = AdtsHeader::from_audio_config(ctx, payload.len());

        let mut tmp = Vec::with_capacity(header.header_length() + payload.len());
        header.write(&mut tmp)?;
        tmp.extend(payload);

        Ok(tmp)
    }
}
