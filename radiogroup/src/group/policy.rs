//! Selection policy applied when a member changes state.

use log::debug;

use super::RadioGroup;
use crate::button::RadioButton;

impl RadioGroup {
    /// Called by a member after its pressed state flipped.
    pub(crate) fn member_did_transition(&self, button: &RadioButton, pressed: bool) {
        if !self.contains(button) {
            return;
        }
        if pressed {
            self.member_did_press(button);
        } else {
            self.member_did_unpress(button);
        }
    }

    fn member_did_press(&self, button: &RadioButton) {
        if self.selection_mode().is_exclusive() {
            // Each forced unpress reports back through `member_did_unpress`.
            let mut held = false;
            for other in self.pressed_members() {
                if other != *button {
                    other.set_pressed(false);
                    // Another group's keep-one guard may have restored it.
                    held |= other.is_pressed();
                }
            }
            if held {
                debug!(
                    "{}: a member stayed pressed elsewhere, undoing press of {}",
                    self.id(),
                    button.id()
                );
                button.store_pressed(false);
                return;
            }
        }
        self.notify_pressed(button);
    }

    fn member_did_unpress(&self, button: &RadioButton) {
        if self.keep_one_pressed() && !self.any_pressed() {
            debug!("{}: {} is the last pressed member, undoing unpress", self.id(), button.id());
            button.store_pressed(true);
            return;
        }
        self.notify_unpressed(button);
    }

    pub(crate) fn notify_pressed(&self, button: &RadioButton) {
        let Some(index) = self.index_of(button) else {
            return;
        };
        debug!("{}: pressed index {}", self.id(), index);
        if let Some(delegate) = self.delegate() {
            delegate.did_press(index, self);
        }
    }

    pub(crate) fn notify_unpressed(&self, button: &RadioButton) {
        let Some(index) = self.index_of(button) else {
            return;
        };
        debug!("{}: unpressed index {}", self.id(), index);
        if let Some(delegate) = self.delegate() {
            delegate.did_unpress(index, self);
        }
    }
}
