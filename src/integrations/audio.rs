//! PCM audio returned by the speech model.

use super::IntegrationError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::{self, Write};
use std::time::Duration;

/// Bytes per 16-bit sample.
const SAMPLE_BYTES: usize = 2;

/// Decoded audio, samples interleaved by channel in `[-1.0, 1.0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: u16,
    samples: Vec<f32>,
}

impl AudioBuffer {
    /// Decode base64 16-bit little-endian PCM.
    pub fn decode_base64(data: &str, sample_rate: u32, channels: u16) -> Result<Self, IntegrationError> {
        let bytes = STANDARD.decode(data.trim())?;
        Self::from_pcm16(&bytes, sample_rate, channels)
    }

    pub fn from_pcm16(bytes: &[u8], sample_rate: u32, channels: u16) -> Result<Self, IntegrationError> {
        let frame = SAMPLE_BYTES * usize::from(channels.max(1));
        if bytes.len() % frame != 0 {
            return Err(IntegrationError::TruncatedAudio(bytes.len()));
        }
        let samples = bytes
            .chunks_exact(SAMPLE_BYTES)
            .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / 32768.0)
            .collect();
        Ok(Self { sample_rate, channels: channels.max(1), samples })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    #[cfg(test)]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Samples per channel.
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.channels)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frames() as f64 / f64::from(self.sample_rate.max(1)))
    }

    /// Write a 16-bit PCM RIFF/WAVE file.
    pub fn write_wav(&self, out: &mut impl Write) -> io::Result<()> {
        let block_align = self.channels * SAMPLE_BYTES as u16;
        let byte_rate = self.sample_rate * u32::from(block_align);
        let data_len = (self.samples.len() * SAMPLE_BYTES) as u32;

        out.write_all(b"RIFF")?;
        out.write_all(&(36 + data_len).to_le_bytes())?;
        out.write_all(b"WAVE")?;

        out.write_all(b"fmt ")?;
        out.write_all(&16u32.to_le_bytes())?;
        out.write_all(&1u16.to_le_bytes())?; // PCM
        out.write_all(&self.channels.to_le_bytes())?;
        out.write_all(&self.sample_rate.to_le_bytes())?;
        out.write_all(&byte_rate.to_le_bytes())?;
        out.write_all(&block_align.to_le_bytes())?;
        out.write_all(&16u16.to_le_bytes())?;

        out.write_all(b"data")?;
        out.write_all(&data_len.to_le_bytes())?;
        for sample in &self.samples {
            let value = (sample * 32768.0).round().clamp(-32768.0, 32767.0) as i16;
            out.write_all(&value.to_le_bytes())?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcm(values: &[i16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn test_decode_base64_pcm() {
        let data = STANDARD.encode(pcm(&[0, 16384, -32768, 32767]));
        let audio = AudioBuffer::decode_base64(&data, 24_000, 1).unwrap();

        assert_eq!(audio.samples(), &[0.0, 0.5, -1.0, 32767.0 / 32768.0]);
        assert_eq!(audio.frames(), 4);
        assert_eq!(audio.sample_rate(), 24_000);
    }

    #[test]
    fn test_rejects_partial_frame() {
        assert!(matches!(
            AudioBuffer::from_pcm16(&[1, 2, 3], 24_000, 1),
            Err(IntegrationError::TruncatedAudio(3))
        ));
        assert!(matches!(
            AudioBuffer::from_pcm16(&[1, 2], 24_000, 2),
            Err(IntegrationError::TruncatedAudio(2))
        ));
    }

    #[test]
    fn test_rejects_bad_base64() {
        assert!(matches!(
            AudioBuffer::decode_base64("not base64!", 24_000, 1),
            Err(IntegrationError::Base64(_))
        ));
    }

    #[test]
    fn test_duration() {
        let audio = AudioBuffer::from_pcm16(&vec![0; 48_000], 24_000, 1).unwrap();
        assert_eq!(audio.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_write_wav_layout() {
        let raw = pcm(&[0, 1000, -1000, 32767]);
        let audio = AudioBuffer::from_pcm16(&raw, 24_000, 1).unwrap();

        let mut wav = Vec::new();
        audio.write_wav(&mut wav).unwrap();

        assert_eq!(wav.len(), 44 + raw.len());
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..16], b"WAVEfmt ");
        assert_eq!(u32::from_le_bytes(wav[24..28].try_into().unwrap()), 24_000);
        assert_eq!(u32::from_le_bytes(wav[28..32].try_into().unwrap()), 48_000);
        assert_eq!(&wav[36..40], b"data");
        // samples survive the float round trip unchanged
        assert_eq!(&wav[44..], raw.as_slice());
    }
}
