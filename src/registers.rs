use crate::prelude::*;

/// Number of words in the holding register block (configuration).
pub const HOLDING_REGISTER_COUNT: usize = 81;

/// Number of words in the input register block (status telemetry).
pub const INPUT_REGISTER_COUNT: usize = 83;

/// One contiguous block of 16-bit registers, as read from (or written to)
/// the inverter starting at address 0.
///
/// Offsets are zero-based and absolute within the block. Word order inside
/// multi-word composites is big-endian: the lower offset holds the high
/// 16 bits. The block itself never reinterprets byte order; that is the
/// field descriptors' job.
///
/// Out-of-range access panics. All modeled field offsets are compile-time
/// constants below the block length, and the aggregate decoders check the
/// length once up front, so a panic here indicates a caller bug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterBlock {
    words: Vec<u16>,
}

impl RegisterBlock {
    pub fn new(words: Vec<u16>) -> Self {
        Self { words }
    }

    /// A block of `len` zero words, used as a scratch target for encoding.
    pub fn zeroed(len: usize) -> Self {
        Self {
            words: vec![0; len],
        }
    }

    pub fn get16(&self, offset: usize) -> u16 {
        self.words[offset]
    }

    pub fn set16(&mut self, offset: usize, value: u16) {
        self.words[offset] = value;
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_words(&self) -> &[u16] {
        &self.words
    }

    pub fn into_words(self) -> Vec<u16> {
        self.words
    }

    /// Checks the structural contract of an aggregate decode: the transport
    /// must have supplied at least `expected` words.
    pub(crate) fn require_len(&self, expected: usize, block_name: &str) -> Result<()> {
        if self.words.len() < expected {
            bail!(
                "{} block too short: got {} words, need {}",
                block_name,
                self.words.len(),
                expected
            );
        }
        Ok(())
    }
}

impl From<Vec<u16>> for RegisterBlock {
    fn from(words: Vec<u16>) -> Self {
        Self::new(words)
    }
}

impl From<&[u16]> for RegisterBlock {
    fn from(words: &[u16]) -> Self {
        Self::new(words.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_access() {
        let mut block = RegisterBlock::zeroed(4);
        block.set16(2, 0xBEEF);
        assert_eq!(block.get16(2), 0xBEEF);
        assert_eq!(block.get16(0), 0);
        assert_eq!(block.as_words(), &[0, 0, 0xBEEF, 0]);
    }

    #[test]
    fn require_len_rejects_short_blocks() {
        let block = RegisterBlock::zeroed(10);
        assert!(block.require_len(11, "holding").is_err());
        assert!(block.require_len(10, "holding").is_ok());
    }
}
