//! Character encoding detection and decoding.
//!
//! Both pipelines read input through the same contract: sample the start of
//! the file, pick an encoding, and decode the whole file with replacement so
//! a wrong guess surfaces as U+FFFD instead of an aborted read.

use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of bytes sampled from the start of a file for detection.
const SAMPLE_SIZE: usize = 1024;

/// Detects the encoding of a file from its first [`SAMPLE_SIZE`] bytes.
///
/// A byte-order mark wins outright. Otherwise a sample that is valid UTF-8
/// is treated as UTF-8, and anything else falls back to Windows-1252, which
/// can decode any byte sequence.
pub fn detect(path: &Path) -> Result<&'static Encoding> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mut sample = [0u8; SAMPLE_SIZE];
    let mut filled = 0;
    loop {
        let n = file
            .read(&mut sample[filled..])
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        if n == 0 {
            break;
        }
        filled += n;
        if filled == SAMPLE_SIZE {
            break;
        }
    }

    Ok(detect_from_sample(&sample[..filled], filled == SAMPLE_SIZE))
}

/// Picks an encoding for the given sample bytes.
///
/// `truncated` says whether the sample was cut off by the window rather
/// than ending where the file ends. Only a truncated sample may end in an
/// incomplete UTF-8 sequence and still count as UTF-8; at end-of-file an
/// incomplete sequence is invalid and falls back to Windows-1252.
pub fn detect_from_sample(sample: &[u8], truncated: bool) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(sample) {
        return encoding;
    }

    if valid_utf8_prefix(sample, truncated) {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Reads a whole file and decodes it with the detected encoding.
///
/// Returns the decoded text together with the encoding so output can be
/// written the same way the input was read. Undecodable bytes are replaced,
/// never dropped.
pub fn read_to_string(path: &Path) -> Result<(String, &'static Encoding)> {
    let encoding = detect(path)?;
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let (text, _, _) = encoding.decode(&bytes);
    Ok((text.into_owned(), encoding))
}

/// Checks whether the sample is valid UTF-8, tolerating a multi-byte
/// sequence cut off at the sample boundary when the sample was truncated.
fn valid_utf8_prefix(sample: &[u8], truncated: bool) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        // A sequence cut off by the 1KB sample window still counts, but a
        // file genuinely ending mid-sequence does not.
        Err(e) => truncated && e.error_len().is_none() && e.valid_up_to() + 4 > sample.len(),
    }
}
