//! PCM container encoding.
//!
//! Wraps rendered samples in a canonical 44-byte RIFF/WAVE header: one
//! `fmt ` chunk describing mono 16-bit linear PCM at [`SAMPLE_RATE`],
//! followed by a single `data` chunk. Multi-byte fields are little-endian.

use std::io::Cursor;

use crate::synthesis::SAMPLE_RATE;

/// Size of the RIFF header preceding the sample data.
pub const HEADER_LEN: usize = 44;

/// Number of interleaved channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits stored per sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Bytes per sample frame across all channels.
pub const BLOCK_ALIGN: u16 = CHANNELS * BITS_PER_SAMPLE / 8;

/// Bytes of sample data per second of audio.
pub const BYTE_RATE: u32 = SAMPLE_RATE * BLOCK_ALIGN as u32;

/// `fmt ` chunk payload size for plain PCM.
const FMT_CHUNK_SIZE: u32 = 16;

/// Format tag for linear PCM.
const FORMAT_PCM: u16 = 1;

/// A complete, self-describing WAV byte stream.
///
/// Built once by [`encode`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioContainer {
    bytes: Vec<u8>,
}

impl AudioContainer {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total length in bytes, header included.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Size of the `data` chunk payload in bytes.
    pub fn data_size(&self) -> usize {
        self.bytes.len() - HEADER_LEN
    }

    /// Returns the raw sample bytes following the header.
    pub fn data(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Returns a seekable reader over the container, the form most
    /// playback APIs accept.
    pub fn cursor(&self) -> Cursor<&[u8]> {
        Cursor::new(self.bytes.as_slice())
    }

    /// Reads the samples back out of the container.
    ///
    /// Goes through `hound` the same way an external player would, so it
    /// also checks that the header is well formed.
    #[cfg(feature = "wav-reader")]
    pub fn decode(&self) -> Result<Vec<i16>, hound::Error> {
        let reader = hound::WavReader::new(self.cursor())?;
        reader.into_samples::<i16>().collect()
    }
}

impl AsRef<[u8]> for AudioContainer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Encodes `samples` as a mono 16-bit PCM WAV byte stream.
///
/// The layout is fixed: `RIFF` size `WAVE`, a 16-byte `fmt ` chunk, then
/// `data` size and the samples in order. Encoding cannot fail.
///
/// # Examples
///
/// ```
/// use keysynth::wav::{encode, HEADER_LEN};
///
/// let container = encode(&[0, 1, -1]);
/// assert_eq!(&container.as_bytes()[0..4], b"RIFF");
/// assert_eq!(container.len(), HEADER_LEN + 6);
/// ```
pub fn encode(samples: &[i16]) -> AudioContainer {
    let data_size = (samples.len() * BLOCK_ALIGN as usize) as u32;
    let mut bytes = Vec::with_capacity(HEADER_LEN + data_size as usize);

    // RIFF chunk
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_size).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    // fmt sub-chunk
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
    bytes.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    bytes.extend_from_slice(&CHANNELS.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&BYTE_RATE.to_le_bytes());
    bytes.extend_from_slice(&BLOCK_ALIGN.to_le_bytes());
    bytes.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data sub-chunk
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_size.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    AudioContainer { bytes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn test_header_fields() {
        let samples = [0i16, 1, -1, i16::MAX, -i16::MAX];
        let container = encode(&samples);
        let bytes = container.as_bytes();

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(u32_at(bytes, 4), 36 + 10);
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(u32_at(bytes, 16), 16);
        assert_eq!(u16_at(bytes, 20), 1);
        assert_eq!(u16_at(bytes, 22), 1);
        assert_eq!(u32_at(bytes, 24), 44100);
        assert_eq!(u32_at(bytes, 28), 88200);
        assert_eq!(u16_at(bytes, 32), 2);
        assert_eq!(u16_at(bytes, 34), 16);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(u32_at(bytes, 40), 10);
    }

    #[test]
    fn test_samples_follow_header_in_order() {
        let samples = [0i16, 1, -1, 300, -32767];
        let container = encode(&samples);
        assert_eq!(
            container.data(),
            &[0x00, 0x00, 0x01, 0x00, 0xFF, 0xFF, 0x2C, 0x01, 0x01, 0x80]
        );
        assert_eq!(container.data_size(), 10);
    }

    #[test]
    fn test_full_second_length() {
        let container = encode(&vec![0; 44100]);
        assert_eq!(container.len(), 88244);
        assert_eq!(u32_at(container.as_bytes(), 4), 88236);
        assert_eq!(u32_at(container.as_bytes(), 40), 88200);
    }

    #[test]
    fn test_empty_input_is_header_only() {
        let container = encode(&[]);
        assert_eq!(container.len(), HEADER_LEN);
        assert_eq!(u32_at(container.as_bytes(), 4), 36);
        assert!(container.data().is_empty());
    }

    #[test]
    fn test_cursor_reads_whole_container() {
        use std::io::Read;

        let container = encode(&[1, 2, 3]);
        let mut read_back = Vec::new();
        container.cursor().read_to_end(&mut read_back).unwrap();
        assert_eq!(read_back, container.as_bytes());
    }

    #[cfg(feature = "wav-reader")]
    #[test]
    fn test_decode_returns_samples() {
        let samples = vec![0i16, 12, -12, 32767, -32767];
        assert_eq!(encode(&samples).decode().unwrap(), samples);
    }
}
