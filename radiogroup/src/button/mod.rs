//! RadioButton - a single pressable unit with an optional veto delegate.

mod delegate;
pub mod events;
mod state;

pub use delegate::RadioButtonDelegate;
pub use state::{DEFAULT_ANIMATION_DURATION, RadioButton, RadioButtonId};
