//! Digit slots for the access code.
//!
//! The code is entered one decimal digit per slot. Slots `0..4` form the
//! left agent's half and slots `4..8` the right agent's half.

use crate::error::AccessError;

/// Number of digit slots in the access code
pub const SLOT_COUNT: usize = 8;

/// Number of slots in each agent's half
pub const HALF_LEN: usize = SLOT_COUNT / 2;

/// Validated position of a digit slot, always in `0..SLOT_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// The first slot (left agent, first digit)
    pub const FIRST: SlotIndex = SlotIndex(0);

    /// The last slot (right agent, last digit)
    pub const LAST: SlotIndex = SlotIndex(SLOT_COUNT - 1);

    /// Create a slot index, returning `None` when out of range
    pub fn new(index: usize) -> Option<Self> {
        (index < SLOT_COUNT).then_some(Self(index))
    }

    /// Raw position of the slot
    pub fn get(self) -> usize {
        self.0
    }

    /// The slot to the left, if any
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    /// The slot to the right, if any
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Which agent's half this slot belongs to
    pub fn half(self) -> Half {
        if self.0 < HALF_LEN {
            Half::Left
        } else {
            Half::Right
        }
    }

    /// All slots in order
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..SLOT_COUNT).map(Self)
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = AccessError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(AccessError::SlotOutOfRange(index))
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One agent's half of the code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    /// Slots `0..4`
    Left,
    /// Slots `4..8`
    Right,
}

impl Half {
    /// Slot positions covered by this half
    pub fn range(self) -> std::ops::Range<usize> {
        match self {
            Half::Left => 0..HALF_LEN,
            Half::Right => HALF_LEN..SLOT_COUNT,
        }
    }

    /// Slots covered by this half
    pub fn slots(self) -> impl Iterator<Item = SlotIndex> {
        self.range().map(SlotIndex)
    }
}

/// Focus movement direction for arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Eight slots, each empty or holding one decimal digit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitSequence {
    slots: [Option<char>; SLOT_COUNT],
}

impl DigitSequence {
    /// Create a sequence with every slot empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Digit stored in a slot
    pub fn get(&self, slot: SlotIndex) -> Option<char> {
        self.slots[slot.0]
    }

    /// Whether a slot holds a digit
    pub fn is_filled(&self, slot: SlotIndex) -> bool {
        self.slots[slot.0].is_some()
    }

    /// Store a digit; anything that is not an ASCII digit clears the slot
    pub fn set(&mut self, slot: SlotIndex, digit: Option<char>) {
        self.slots[slot.0] = digit.filter(char::is_ascii_digit);
    }

    /// Empty a slot
    pub fn clear(&mut self, slot: SlotIndex) {
        self.slots[slot.0] = None;
    }

    /// The four digits of a half, or `None` if any slot in it is empty
    pub fn half(&self, half: Half) -> Option<String> {
        self.slots[half.range()].iter().copied().collect()
    }

    /// Number of filled slots
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|d| d.is_some()).count()
    }

    /// Whether every slot is empty
    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// Render the slots with `placeholder` standing in for each empty one
    pub fn display_with(&self, placeholder: char) -> String {
        self.slots.iter().map(|d| d.unwrap_or(placeholder)).collect()
    }
}

/// Keep only the ASCII digits of `text`
pub fn only_digits(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(char::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(i: usize) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    #[test]
    fn slot_index_bounds() {
        assert!(SlotIndex::new(7).is_some());
        assert!(SlotIndex::new(8).is_none());
        assert!(matches!(
            SlotIndex::try_from(12),
            Err(AccessError::SlotOutOfRange(12))
        ));
    }

    #[test]
    fn slot_index_neighbours() {
        assert_eq!(SlotIndex::FIRST.prev(), None);
        assert_eq!(SlotIndex::FIRST.next(), Some(slot(1)));
        assert_eq!(SlotIndex::LAST.next(), None);
        assert_eq!(SlotIndex::LAST.prev(), Some(slot(6)));
    }

    #[test]
    fn slot_half_membership() {
        assert_eq!(slot(3).half(), Half::Left);
        assert_eq!(slot(4).half(), Half::Right);
        assert_eq!(Half::Right.slots().count(), HALF_LEN);
    }

    #[test]
    fn set_rejects_non_digits() {
        let mut digits = DigitSequence::new();
        digits.set(slot(0), Some('x'));
        assert_eq!(digits.get(slot(0)), None);
        digits.set(slot(0), Some('5'));
        assert_eq!(digits.get(slot(0)), Some('5'));
    }

    #[test]
    fn half_requires_all_slots() {
        let mut digits = DigitSequence::new();
        for (s, d) in Half::Left.slots().zip("284".chars()) {
            digits.set(s, Some(d));
        }
        assert_eq!(digits.half(Half::Left), None);

        digits.set(slot(3), Some('6'));
        assert_eq!(digits.half(Half::Left).as_deref(), Some("2846"));
        assert_eq!(digits.half(Half::Right), None);
    }

    #[test]
    fn display_marks_empty_slots() {
        let mut digits = DigitSequence::new();
        digits.set(slot(0), Some('1'));
        digits.set(slot(5), Some('9'));
        assert_eq!(digits.display_with('•'), "1••••9••");
        assert_eq!(digits.filled_count(), 2);
    }

    #[test]
    fn only_digits_strips_everything_else() {
        let kept: String = only_digits("a1-2 3b\u{0663}4").collect();
        assert_eq!(kept, "1234");
    }
}
