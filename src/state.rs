use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::MAX_BOXES;

const MOVER_BITS: u32 = 8;
const BOX_BITS: u32 = 8;

const MOVER_OFFSET: u32 = 0;
const BOXES_OFFSET: u32 = MOVER_OFFSET + MOVER_BITS;

const MOVER_MASK: u64 = (1 << MOVER_BITS) - 1;
const BOX_MASK: u64 = (1 << BOX_BITS) - 1;

/// A canonical snapshot of the mutable puzzle state packed into one `u64`.
///
/// The mover's linear position occupies the low 8 bits, each box position one
/// of the 7 following 8-bit fields in ascending sorted order. A zero field
/// means an unused slot. Equal box sets therefore encode identically no
/// matter the insertion order, and equality/hash on the packed word is what
/// makes duplicate detection during search O(1).
///
/// Precondition: the border of the board is entirely wall (validated before
/// search), so linear position 0 is a wall and never holds a box or the
/// mover - zero is unambiguously "empty slot".
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct State(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeErr {
    TooManyBoxes(usize),
}

impl Display for EncodeErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            EncodeErr::TooManyBoxes(cnt) => {
                write!(f, "Can't encode {} boxes - at most {} fit", cnt, MAX_BOXES)
            }
        }
    }
}

impl Error for EncodeErr {}

impl State {
    /// Packs the mover position and box positions into a single key.
    ///
    /// Positions are linear indices so the `u8` arguments enforce the 8-bit
    /// range statically. Rejects more boxes than there are slots instead of
    /// silently truncating - that would break the round-trip invariant the
    /// whole search relies on.
    pub fn encode(mover: u8, boxes: &[u8]) -> Result<State, EncodeErr> {
        if boxes.len() > MAX_BOXES {
            return Err(EncodeErr::TooManyBoxes(boxes.len()));
        }

        let mut sorted = [0u8; MAX_BOXES];
        sorted[..boxes.len()].copy_from_slice(boxes);
        sorted[..boxes.len()].sort_unstable();

        let mut data = u64::from(mover) & MOVER_MASK;
        for (i, &box_pos) in sorted[..boxes.len()].iter().enumerate() {
            data |= (u64::from(box_pos) & BOX_MASK) << (BOXES_OFFSET + i as u32 * BOX_BITS);
        }
        Ok(State(data))
    }

    pub fn mover(self) -> u8 {
        ((self.0 >> MOVER_OFFSET) & MOVER_MASK) as u8
    }

    /// Decodes the box positions in ascending order, skipping unused slots.
    pub fn boxes(self) -> Vec<u8> {
        let mut boxes = Vec::with_capacity(MAX_BOXES);
        for i in 0..MAX_BOXES as u32 {
            let box_pos = ((self.0 >> (BOXES_OFFSET + i * BOX_BITS)) & BOX_MASK) as u8;
            if box_pos != 0 {
                boxes.push(box_pos);
            }
        }
        boxes
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "State {{ mover: {}, boxes: {:?} }}", self.mover(), self.boxes())
    }
}
