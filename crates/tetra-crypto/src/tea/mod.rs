//! TEA keystream generators
//!
//! TEA1, TEA2 and TEA3 share one external contract: a 32-bit IV built from
//! the frame numbers and an 80-bit key produce a keystream of any length.
//! Each call starts from scratch; no state survives between calls.
//!
//! All three are byte-clocked nonlinear feedback registers. The state register
//! is loaded from the expanded IV, the key register from the key, and every
//! round feeds a key-derived S-box byte into the state. Output bytes are taken
//! from the top of the state register after a warm-up and then at a fixed
//! spacing.

mod tea1;
mod tea2;
mod tea3;

pub use tea1::{Tea1, Tea1KeyRegister, search_key_register, tea1, tea1_fill_with_register};
pub use tea2::{Tea2, tea2};
pub use tea3::{Tea3, tea3};

use crate::error::CryptoError;

/// Rounds between consecutive output bytes.
pub(crate) const OUTPUT_SPACING: usize = 19;

/// A frame-keyed keystream generator.
pub trait KeystreamGenerator {
    /// Algorithm name for diagnostics.
    fn name(&self) -> &'static str;

    /// Fill `out` with keystream for `iv` under `key`.
    fn fill(&self, iv: u32, key: &[u8; 10], out: &mut [u8]);

    /// Return `len` bytes of keystream for `iv` under `key`.
    fn keystream(&self, iv: u32, key: &[u8; 10], len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.fill(iv, key, &mut out);
        out
    }
}

/// Selects one of the three keystream generators at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeaAlgorithm {
    /// TEA1
    Tea1,
    /// TEA2
    Tea2,
    /// TEA3
    Tea3,
}

impl TeaAlgorithm {
    /// Generator implementing this algorithm.
    pub fn generator(self) -> &'static dyn KeystreamGenerator {
        match self {
            Self::Tea1 => &Tea1,
            Self::Tea2 => &Tea2,
            Self::Tea3 => &Tea3,
        }
    }
}

/// Link direction bit of the frame numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDirection {
    /// Base station to mobile
    Downlink = 0,
    /// Mobile to base station
    Uplink = 1,
}

/// Air-interface frame numbers identifying one timeslot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameNumbers {
    timeslot: u8,
    frame: u8,
    multiframe: u8,
    hyperframe: u16,
    direction: LinkDirection,
}

impl FrameNumbers {
    /// Validate and bundle frame numbers.
    ///
    /// Only the low 15 bits of the hyperframe number enter the IV.
    ///
    /// # Errors
    ///
    /// - `CryptoError::FieldOutOfRange` if timeslot is outside 1..=4, frame
    ///   outside 1..=18 or multiframe outside 1..=60
    pub fn new(
        timeslot: u8,
        frame: u8,
        multiframe: u8,
        hyperframe: u16,
        direction: LinkDirection,
    ) -> Result<Self, CryptoError> {
        check_range("timeslot", timeslot, 1, 4)?;
        check_range("frame", frame, 1, 18)?;
        check_range("multiframe", multiframe, 1, 60)?;
        Ok(Self { timeslot, frame, multiframe, hyperframe, direction })
    }

    /// Pack into the 32-bit IV consumed by the keystream generators.
    pub fn to_iv(&self) -> u32 {
        u32::from(self.timeslot - 1)
            | u32::from(self.frame) << 2
            | u32::from(self.multiframe) << 7
            | u32::from(self.hyperframe & 0x7FFF) << 13
            | (self.direction as u32) << 28
    }

    /// Timeslot number, 1 to 4.
    pub fn timeslot(&self) -> u8 {
        self.timeslot
    }

    /// Frame number, 1 to 18.
    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Multiframe number, 1 to 60.
    pub fn multiframe(&self) -> u8 {
        self.multiframe
    }

    /// Hyperframe number as supplied.
    pub fn hyperframe(&self) -> u16 {
        self.hyperframe
    }

    /// Link direction.
    pub fn direction(&self) -> LinkDirection {
        self.direction
    }
}

fn check_range(field: &'static str, value: u8, min: u8, max: u8) -> Result<(), CryptoError> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    Err(CryptoError::FieldOutOfRange {
        field,
        value: u32::from(value),
        min: u32::from(min),
        max: u32::from(max),
    })
}

/// Expand a 32-bit IV into the 64-bit state register.
pub(crate) fn expand_iv(iv: u32, constant: u32) -> u64 {
    let mixed = (iv ^ constant).rotate_left(8);
    ((u64::from(iv) << 32) | u64::from(mixed)).rotate_right(8)
}

/// Nonlinear filter: one output bit per LUT entry, each indexed by four
/// bits gathered from the two bytes of `word`.
pub(crate) fn filter_byte(word: u16, lut: &[u16; 8]) -> u8 {
    let [mut low, mut high] = word.to_le_bytes();
    let mut out = 0u8;

    for (bit, &entry) in lut.iter().enumerate() {
        let index = ((low >> 7) & 1) | ((low << 1) & 2) | ((high << 1) & 12);
        if entry & (1 << index) != 0 {
            out |= 1 << bit;
        }
        low = low.rotate_right(1);
        high = high.rotate_right(1);
    }
    out
}

/// Fixed bit permutation of a state byte.
pub(crate) fn reorder_state_byte(byte: u8) -> u8 {
    ((byte << 6) & 0x40)
        | ((byte << 1) & 0x20)
        | ((byte << 2) & 0x08)
        | ((byte >> 3) & 0x14)
        | ((byte >> 2) & 0x01)
        | ((byte >> 5) & 0x02)
        | ((byte << 4) & 0x80)
}

/// Clock a register `warmup` rounds before the first output byte and
/// `OUTPUT_SPACING` rounds before each later one.
///
/// `clock` runs one round and returns the top byte of the state register.
pub(crate) fn drive(out: &mut [u8], warmup: usize, mut clock: impl FnMut() -> u8) {
    let mut rounds = warmup;
    for byte in out {
        let mut top = 0;
        for _ in 0..rounds {
            top = clock();
        }
        *byte = top;
        rounds = OUTPUT_SPACING;
    }
}
