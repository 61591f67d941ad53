use super::RadioButton;

/// Decides whether a button may change state.
///
/// Set with [`RadioButton::set_delegate`]. The button only holds a weak
/// reference, so the delegate stops being consulted once its last `Arc` is
/// dropped.
pub trait RadioButtonDelegate: Send + Sync {
    /// Called before a requested state change (pressed to unpressed or vice
    /// versa). Return `false` to keep the current state.
    ///
    /// The default implementation always allows the change.
    fn should_change_state(&self, _button: &RadioButton) -> bool {
        true
    }
}
