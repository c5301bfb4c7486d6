use crate::domain::error::VoxError;
use crate::domain::model::Utterance;
use std::io::Cursor;

/// Encode an utterance as a 16-bit mono WAV file in memory
pub fn encode_wav(utterance: &Utterance) -> Result<Vec<u8>, VoxError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: utterance.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut buffer = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut buffer, spec)?;
    for &sample in &utterance.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(buffer.into_inner())
}

/// Decode little-endian PCM16 bytes as produced by raw recorders.
/// A trailing odd byte is dropped.
pub fn pcm16_le_samples(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
