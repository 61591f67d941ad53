//! State transitions for the RadioButton.

use log::{debug, trace};

use crate::group::RadioGroupId;

use super::RadioButton;

impl RadioButton {
    /// Ask the button to flip its state.
    ///
    /// This is the entry point for user input. The delegate, if any, is asked
    /// first; a denial leaves the button untouched and nothing is reported.
    pub fn request_state_change(&self) {
        if let Some(delegate) = self.delegate()
            && !delegate.should_change_state(self)
        {
            debug!("{}: state change vetoed by delegate", self.id());
            return;
        }

        let pressed = !self.is_pressed();
        if self.store_pressed(pressed) {
            debug!("{}: pressed = {}", self.id(), pressed);
            self.report_transition(pressed, None);
        }
    }

    /// Set the pressed state without consulting the delegate.
    ///
    /// Groups tracking the button see the change exactly as if it had been
    /// requested. Setting the current value is a no-op.
    pub fn set_pressed(&self, pressed: bool) {
        if self.store_pressed(pressed) {
            debug!("{}: set pressed = {}", self.id(), pressed);
            self.report_transition(pressed, None);
        }
    }

    /// Report a completed flip to every tracking group except `skip`.
    ///
    /// Stops early once a group's keep-one guard has undone the flip.
    pub(crate) fn report_transition(&self, pressed: bool, skip: Option<RadioGroupId>) {
        for group in self.groups() {
            if self.is_pressed() != pressed {
                trace!("{}: transition undone, not reporting further", self.id());
                break;
            }
            if Some(group.id()) == skip {
                continue;
            }
            trace!("{}: reporting pressed = {} to {}", self.id(), pressed, group.id());
            group.member_did_transition(self, pressed);
        }
    }
}
