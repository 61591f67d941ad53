//! Group configuration types.

use crate::selection::SelectionMode;

/// Selection policy for a [`RadioGroup`](crate::RadioGroup).
///
/// Both fields can also be changed on a live group; changing them does not
/// retroactively touch any member's state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupConfig {
    /// Whether members are mutually exclusive.
    pub selection_mode: SelectionMode,

    /// If true, the last pressed member of a non-empty group cannot be unpressed.
    pub keep_one_pressed: bool,
}

impl GroupConfig {
    /// Create a config with the given selection mode.
    pub fn new(selection_mode: SelectionMode) -> Self {
        Self {
            selection_mode,
            ..Default::default()
        }
    }

    /// Mutually exclusive selection.
    pub fn single() -> Self {
        Self::new(SelectionMode::Single)
    }

    /// Independent selection.
    pub fn multiple() -> Self {
        Self::new(SelectionMode::Multiple)
    }

    /// Forbid unpressing the last pressed member.
    pub fn keep_one_pressed(mut self) -> Self {
        self.keep_one_pressed = true;
        self
    }
}
