//! Radio buttons and the group coordinator that enforces their selection policy.
//!
//! A [`RadioButton`] owns a single pressed/unpressed flag. A [`RadioGroup`]
//! tracks an ordered set of buttons and, whenever one of them flips, applies
//! its [`SelectionMode`] and keep-one-pressed rule to the rest of the group
//! before reporting press/unpress events by index to its delegate.
//!
//! Drawing the indicator and animating between states is left to whatever
//! render layer owns the buttons; it can read [`RadioButton::animation_duration`]
//! and poll [`RadioButton::is_dirty`].

pub mod button;
pub mod config;
pub mod error;
pub mod group;
pub mod selection;

pub use button::{RadioButton, RadioButtonDelegate, RadioButtonId};
pub use config::GroupConfig;
pub use error::ConfigError;
pub use group::{RadioGroup, RadioGroupDelegate, RadioGroupId};
pub use selection::SelectionMode;

pub mod prelude {
    pub use crate::button::{RadioButton, RadioButtonDelegate, RadioButtonId};
    pub use crate::config::GroupConfig;
    pub use crate::group::{RadioGroup, RadioGroupDelegate, RadioGroupId};
    pub use crate::selection::SelectionMode;
}
