use super::constants::EXHAUSTED_CURSOR;

/// Position of the digit that the next increment is tried against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Active(usize),
    Exhausted,
}

impl Cursor {
    /// Cursor parked on the least-significant digit of a sequence of `len` digits
    pub fn rightmost(len: usize) -> Self {
        match len.checked_sub(1) {
            Some(index) => Cursor::Active(index),
            None => Cursor::Exhausted,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Cursor::Active(index) => Some(*index),
            Cursor::Exhausted => None,
        }
    }

    /// Move one digit to the left. Index 0 has no carry target, so the
    /// cursor becomes exhausted instead.
    pub fn carry(&mut self) {
        *self = match *self {
            Cursor::Active(0) | Cursor::Exhausted => Cursor::Exhausted,
            Cursor::Active(index) => Cursor::Active(index - 1),
        };
    }

    pub fn mark_exhausted(&mut self) {
        *self = Cursor::Exhausted;
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Cursor::Exhausted)
    }

    /// Signed view where `-1` stands for the exhausted state
    pub fn as_signed(&self) -> isize {
        match self {
            Cursor::Active(index) => isize::try_from(*index).unwrap_or(isize::MAX),
            Cursor::Exhausted => EXHAUSTED_CURSOR,
        }
    }
}
