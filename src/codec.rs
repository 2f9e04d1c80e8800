//! Field descriptors binding register offsets to encoding rules.
//!
//! Every field in the register map is described by one of the const
//! descriptors below: an offset (or offset range), an encoding kind, and for
//! scaled quantities a divisor. A descriptor's `decode` and `encode` are exact
//! algebraic inverses, so records built from descriptor tables round-trip
//! losslessly through their register block.

use std::marker::PhantomData;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::prelude::*;

/// One raw 16-bit word, widened on decode.
#[derive(Clone, Copy, Debug)]
pub struct Word {
    offset: usize,
}

impl Word {
    pub const fn at(offset: usize) -> Self {
        Self { offset }
    }

    pub fn decode(&self, block: &RegisterBlock) -> u16 {
        block.get16(self.offset)
    }

    pub fn encode(&self, value: u16, block: &mut RegisterBlock) {
        block.set16(self.offset, value);
    }
}

/// A fixed-point quantity in one word: `value = raw / scale`.
///
/// Encoding rounds to the nearest raw word. Values whose scaled raw form
/// falls outside 0..=65535 are a caller error; they saturate rather than
/// wrap.
#[derive(Clone, Copy, Debug)]
pub struct Scaled {
    offset: usize,
    scale: f64,
}

impl Scaled {
    pub const fn at(offset: usize, scale: f64) -> Self {
        Self { offset, scale }
    }

    pub fn decode(&self, block: &RegisterBlock) -> f64 {
        f64::from(block.get16(self.offset)) / self.scale
    }

    pub fn encode(&self, value: f64, block: &mut RegisterBlock) {
        block.set16(self.offset, (value * self.scale).round() as u16);
    }
}

/// A fixed-point quantity in two words, unsigned: high word at the lower
/// offset. Used for monotonic energy counters and other always-positive
/// quantities.
#[derive(Clone, Copy, Debug)]
pub struct ScaledU32 {
    offset: usize,
    scale: f64,
}

impl ScaledU32 {
    pub const fn at(offset: usize, scale: f64) -> Self {
        Self { offset, scale }
    }

    pub fn decode(&self, block: &RegisterBlock) -> f64 {
        let raw = compose_u32(block.get16(self.offset), block.get16(self.offset + 1));
        f64::from(raw) / self.scale
    }

    pub fn encode(&self, value: f64, block: &mut RegisterBlock) {
        let raw = (value * self.scale).round() as u32;
        block.set16(self.offset, (raw >> 16) as u16);
        block.set16(self.offset + 1, (raw & 0xFFFF) as u16);
    }
}

/// A fixed-point quantity in two words, reinterpreted as two's-complement
/// signed. Used for bidirectional quantities such as battery power, where the
/// sign distinguishes charge from discharge.
#[derive(Clone, Copy, Debug)]
pub struct ScaledI32 {
    offset: usize,
    scale: f64,
}

impl ScaledI32 {
    pub const fn at(offset: usize, scale: f64) -> Self {
        Self { offset, scale }
    }

    pub fn decode(&self, block: &RegisterBlock) -> f64 {
        let raw = compose_u32(block.get16(self.offset), block.get16(self.offset + 1)) as i32;
        f64::from(raw) / self.scale
    }

    pub fn encode(&self, value: f64, block: &mut RegisterBlock) {
        let raw = ((value * self.scale).round() as i32) as u32;
        block.set16(self.offset, (raw >> 16) as u16);
        block.set16(self.offset + 1, (raw & 0xFFFF) as u16);
    }
}

/// A boolean occupying a whole word: any non-zero value is true.
#[derive(Clone, Copy, Debug)]
pub struct Flag {
    offset: usize,
}

impl Flag {
    pub const fn at(offset: usize) -> Self {
        Self { offset }
    }

    pub fn decode(&self, block: &RegisterBlock) -> bool {
        block.get16(self.offset) > 0
    }

    pub fn encode(&self, value: bool, block: &mut RegisterBlock) {
        block.set16(self.offset, u16::from(value));
    }
}

/// A boolean flag occupying one byte of a word shared with another logical
/// field. Encoding read-modify-writes its own byte and leaves the other byte
/// untouched.
#[derive(Clone, Copy, Debug)]
pub struct ByteFlag {
    offset: usize,
    high: bool,
}

impl ByteFlag {
    pub const fn high_byte(offset: usize) -> Self {
        Self { offset, high: true }
    }

    pub const fn low_byte(offset: usize) -> Self {
        Self {
            offset,
            high: false,
        }
    }

    pub fn decode(&self, block: &RegisterBlock) -> bool {
        let word = block.get16(self.offset);
        if self.high {
            word >> 8 > 0
        } else {
            word & 0xFF > 0
        }
    }

    pub fn encode(&self, value: bool, block: &mut RegisterBlock) {
        let word = block.get16(self.offset);
        let word = if self.high {
            (word & 0x00FF) | (u16::from(value) << 8)
        } else {
            (word & 0xFF00) | u16::from(value)
        };
        block.set16(self.offset, word);
    }
}

/// Packed ASCII text over an inclusive word range: two characters per word,
/// high byte first. Trailing NUL padding is stripped on decode and restored
/// on encode. Bytes map through the single-byte (Latin-1) code point table;
/// characters above U+00FF are a caller error and are truncated to their low
/// byte.
#[derive(Clone, Copy, Debug)]
pub struct Text {
    start: usize,
    end: usize,
}

impl Text {
    pub const fn over(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn decode(&self, block: &RegisterBlock) -> String {
        let mut s = String::with_capacity((self.end - self.start + 1) * 2);
        for offset in self.start..=self.end {
            let word = block.get16(offset);
            s.push(char::from((word >> 8) as u8));
            s.push(char::from((word & 0xFF) as u8));
        }
        let trimmed = s.trim_end_matches('\0').len();
        s.truncate(trimmed);
        s
    }

    pub fn encode(&self, value: &str, block: &mut RegisterBlock) {
        let bytes: Vec<u8> = value.chars().map(|c| (c as u32) as u8).collect();
        let mut chunks = bytes.chunks(2);
        for offset in self.start..=self.end {
            let word = match chunks.next() {
                Some([high, low]) => u16::from(*high) << 8 | u16::from(*low),
                Some([high]) => u16::from(*high) << 8,
                _ => 0,
            };
            block.set16(offset, word);
        }
    }
}

/// A calendar timestamp over six consecutive words: year, month, day, hour,
/// minute, second. The one scalar decode with a failure mode: a word sequence
/// that is not a valid civil date/time decodes to `None`.
#[derive(Clone, Copy, Debug)]
pub struct Timestamp {
    offset: usize,
}

impl Timestamp {
    pub const fn at(offset: usize) -> Self {
        Self { offset }
    }

    pub fn decode(&self, block: &RegisterBlock) -> Option<NaiveDateTime> {
        let word = |i| block.get16(self.offset + i);
        let decoded = NaiveDate::from_ymd_opt(
            i32::from(word(0)),
            u32::from(word(1)),
            u32::from(word(2)),
        )
        .and_then(|date| {
            date.and_hms_opt(u32::from(word(3)), u32::from(word(4)), u32::from(word(5)))
        });
        if decoded.is_none() {
            warn!(
                "invalid calendar timestamp at register {}: {:?}",
                self.offset,
                (word(0), word(1), word(2), word(3), word(4), word(5)),
            );
        }
        decoded
    }

    /// Writes `Some` timestamps; an absent timestamp leaves the six words as
    /// they are, preserving whatever the block already holds.
    pub fn encode(&self, value: Option<NaiveDateTime>, block: &mut RegisterBlock) {
        let Some(time) = value else { return };
        let words = [
            time.year() as u16,
            time.month() as u16,
            time.day() as u16,
            time.hour() as u16,
            time.minute() as u16,
            time.second() as u16,
        ];
        for (i, word) in words.into_iter().enumerate() {
            block.set16(self.offset + i, word);
        }
    }
}

/// An opaque two-word field whose bit layout is not reverse-engineered.
/// Preserved verbatim as `(high, low)` so re-encoding never corrupts the
/// unknown bits.
#[derive(Clone, Copy, Debug)]
pub struct WordPair {
    offset: usize,
}

impl WordPair {
    pub const fn at(offset: usize) -> Self {
        Self { offset }
    }

    pub fn decode(&self, block: &RegisterBlock) -> (u16, u16) {
        (block.get16(self.offset), block.get16(self.offset + 1))
    }

    pub fn encode(&self, value: (u16, u16), block: &mut RegisterBlock) {
        block.set16(self.offset, value.0);
        block.set16(self.offset + 1, value.1);
    }
}

/// A closed-set enumeration bound to its home register.
///
/// `T` is an open enum: every raw value maps to a variant (named cases for
/// documented values, a catch-all carrying the raw word for the rest), and
/// the conversion back to `u16` recovers the exact raw value. Decode is
/// total; unknown firmware states round-trip unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Enumerated<T> {
    offset: usize,
    _marker: PhantomData<T>,
}

impl<T> Enumerated<T>
where
    T: From<u16> + Into<u16> + Copy,
{
    pub const fn at(offset: usize) -> Self {
        Self {
            offset,
            _marker: PhantomData,
        }
    }

    pub fn decode(&self, block: &RegisterBlock) -> T {
        T::from(block.get16(self.offset))
    }

    pub fn encode(&self, value: T, block: &mut RegisterBlock) {
        block.set16(self.offset, value.into());
    }
}

fn compose_u32(high: u16, low: u16) -> u32 {
    u32::from(high) << 16 | u32::from(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_inversion_within_one_unit() {
        for scale in [2.0, 10.0, 100.0] {
            let field = Scaled::at(0, scale);
            for raw in [0u16, 1, 499, 500, 1234, 65535] {
                let mut block = RegisterBlock::new(vec![raw]);
                let value = field.decode(&block);
                field.encode(value, &mut block);
                let diff = i32::from(block.get16(0)) - i32::from(raw);
                assert!(diff.abs() <= 1, "raw {} scale {} drifted", raw, scale);
            }
        }
    }

    #[test]
    fn signed_and_unsigned_composition() {
        let block = RegisterBlock::new(vec![0xFFFF, 0xFFFF]);
        assert_eq!(ScaledI32::at(0, 10.0).decode(&block), -0.1);
        assert_eq!(ScaledU32::at(0, 10.0).decode(&block), 429_496_729.5);
    }

    #[test]
    fn signed_encode_round_trips_negative_power() {
        let field = ScaledI32::at(0, 10.0);
        let mut block = RegisterBlock::zeroed(2);
        field.encode(-1500.3, &mut block);
        assert_eq!(field.decode(&block), -1500.3);
    }

    #[test]
    fn string_packing() {
        let field = Text::over(0, 1);
        let block = RegisterBlock::new(vec![0x4142, 0x4300]);
        assert_eq!(field.decode(&block), "ABC");

        let mut block = RegisterBlock::new(vec![0xFFFF, 0xFFFF]);
        field.encode("ABC", &mut block);
        assert_eq!(block.as_words(), &[0x4142, 0x4300]);
    }

    #[test]
    fn string_shorter_than_range_is_zero_padded() {
        let field = Text::over(0, 2);
        let mut block = RegisterBlock::new(vec![0x1111; 3]);
        field.encode("AB", &mut block);
        assert_eq!(block.as_words(), &[0x4142, 0, 0]);
        assert_eq!(field.decode(&block), "AB");
    }

    #[test]
    fn timestamp_leap_year_boundary() {
        let field = Timestamp::at(0);
        let feb_29_2023 = RegisterBlock::new(vec![2023, 2, 29, 0, 0, 0]);
        assert_eq!(field.decode(&feb_29_2023), None);

        let feb_29_2024 = RegisterBlock::new(vec![2024, 2, 29, 13, 59, 7]);
        let decoded = field.decode(&feb_29_2024).unwrap();
        assert_eq!(decoded.day(), 29);
        assert_eq!(decoded.hour(), 13);

        let mut out = RegisterBlock::zeroed(6);
        field.encode(Some(decoded), &mut out);
        assert_eq!(out.as_words(), feb_29_2024.as_words());
    }

    #[test]
    fn absent_timestamp_preserves_block_contents() {
        let field = Timestamp::at(0);
        let mut block = RegisterBlock::new(vec![9, 8, 7, 6, 5, 4]);
        field.encode(None, &mut block);
        assert_eq!(block.as_words(), &[9, 8, 7, 6, 5, 4]);
    }

    #[test]
    fn byte_flags_do_not_disturb_each_other() {
        let high = ByteFlag::high_byte(0);
        let low = ByteFlag::low_byte(0);

        let mut block = RegisterBlock::new(vec![0x0101]);
        high.encode(false, &mut block);
        assert_eq!(block.get16(0), 0x0001);
        assert!(low.decode(&block));

        low.encode(false, &mut block);
        high.encode(true, &mut block);
        assert_eq!(block.get16(0), 0x0100);
        assert!(!low.decode(&block));
    }
}
