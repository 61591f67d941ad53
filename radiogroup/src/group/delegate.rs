use super::RadioGroup;

/// Receives press and unpress events from a [`RadioGroup`].
///
/// Both methods default to doing nothing, so implementors only override the
/// events they care about. Indexes are positions in [`RadioGroup::members`] at
/// the moment the event is emitted.
pub trait RadioGroupDelegate: Send + Sync {
    /// The member at `index` moved to the pressed state.
    fn did_press(&self, _index: usize, _group: &RadioGroup) {}

    /// The member at `index` moved to the unpressed state.
    fn did_unpress(&self, _index: usize, _group: &RadioGroup) {}
}
