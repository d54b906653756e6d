//! Tab tables and the tab resolver.

use serde::{Deserialize, Serialize};

/// All tab groups of a document.
///
/// Paragraph records reference a group by identifier; the container stores
/// the groups as a linked sequence of variable-length entries, preserved
/// here in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabTable {
    /// Tab groups in container order
    pub groups: Vec<TabGroup>,
}

impl TabTable {
    /// Create an empty tab table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the next tab stop at or beyond `column` for the group
    /// `table_id`.
    ///
    /// Returns `None` when the group is absent or has no stop left; the
    /// caller treats that as a tab-initiated line wrap. Pure lookup by
    /// linear scan, no side effects.
    pub fn next_stop(&self, table_id: u8, column: i32) -> Option<i32> {
        let group = self.groups.iter().find(|g| g.id == table_id)?;
        group
            .entries
            .iter()
            .map(|stop| i32::from(stop.position))
            .find(|&pos| pos >= column)
    }
}

/// A named collection of tab stops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabGroup {
    /// Group identifier referenced by paragraph records
    pub id: u8,

    /// Tab stops in stored order
    pub entries: Vec<TabStop>,
}

/// A single tab stop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TabStop {
    /// Column position of the stop
    pub position: u8,

    /// Stored stop type; accepted but not differentiated (right and
    /// decimal tabs behave as left tabs).
    pub kind: TabKind,
}

/// Tab stop type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabKind {
    /// Left tab (default)
    #[default]
    Left,
    /// Centered tab
    Center,
    /// Right tab
    Right,
}

impl TabKind {
    /// Decode the stored type byte; unknown values fall back to left.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => TabKind::Center,
            2 => TabKind::Right,
            _ => TabKind::Left,
        }
    }
}
