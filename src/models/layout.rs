//! Layout grids built from legend tables.

use serde::Serialize;

use super::KeyPair;

/// One grid position: either a key or a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    /// A key at this position
    Key(KeyPair),
    /// Nothing is rendered at this position
    Empty,
}

impl Slot {
    /// Parses a single legend; blank legends become [`Slot::Empty`].
    #[must_use]
    pub fn from_legend(legend: &str) -> Self {
        KeyPair::from_legend(legend).map_or(Self::Empty, Self::Key)
    }

    /// The key pair at this position, if any.
    #[must_use]
    pub const fn key(&self) -> Option<&KeyPair> {
        match self {
            Self::Key(pair) => Some(pair),
            Self::Empty => None,
        }
    }
}

/// Row/column position of a slot inside a [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct KeyPosition {
    /// Row index (top row is 0)
    pub row: usize,
    /// Column index within the row
    pub col: usize,
}

impl KeyPosition {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The full grid of keys for one language.
///
/// Row and column order decide where a key is drawn and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    rows: Vec<Vec<Slot>>,
}

impl Layout {
    /// Builds a layout from rows of slots.
    #[must_use]
    pub const fn new(rows: Vec<Vec<Slot>>) -> Self {
        Self { rows }
    }

    /// Builds a layout from legend strings, one inner slice per row.
    #[must_use]
    pub fn from_legends(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|legend| Slot::from_legend(legend)).collect())
                .collect(),
        )
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    /// Key pair at a position, if the position holds a key.
    #[must_use]
    pub fn key_at(&self, position: KeyPosition) -> Option<&KeyPair> {
        self.rows
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .and_then(Slot::key)
    }

    /// Iterates over every non-empty slot with its position.
    pub fn keys(&self) -> impl Iterator<Item = (KeyPosition, &KeyPair)> {
        self.rows.iter().enumerate().flat_map(|(row_idx, row)| {
            row.iter().enumerate().filter_map(move |(col_idx, slot)| {
                slot.key().map(|pair| (KeyPosition::new(row_idx, col_idx), pair))
            })
        })
    }

    /// Number of keys (empty slots excluded).
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ControlKey;

    #[test]
    fn test_from_legends_keeps_gaps() {
        let layout = Layout::from_legends(&[&["aA", "  ", "bB"], &["Space   "]]);

        assert_eq!(layout.rows().len(), 2);
        assert_eq!(layout.rows()[0][1], Slot::Empty);
        assert_eq!(layout.key_count(), 3);
    }

    #[test]
    fn test_key_at() {
        let layout = Layout::from_legends(&[&["aA", "bB"], &["Shift"]]);

        assert_eq!(
            layout.key_at(KeyPosition::new(0, 1)),
            Some(&KeyPair::printable('b', 'B'))
        );
        assert_eq!(
            layout.key_at(KeyPosition::new(1, 0)),
            Some(&KeyPair::Control(ControlKey::Shift))
        );
        assert_eq!(layout.key_at(KeyPosition::new(5, 0)), None);
    }

    #[test]
    fn test_keys_positions_in_order() {
        let layout = Layout::from_legends(&[&["aA", "", "cC"]]);
        let positions: Vec<_> = layout.keys().map(|(pos, _)| pos).collect();
        assert_eq!(positions, vec![KeyPosition::new(0, 0), KeyPosition::new(0, 2)]);
    }
}
