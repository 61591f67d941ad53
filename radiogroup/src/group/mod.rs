//! RadioGroup - coordinates the selection policy of a set of radio buttons.

mod delegate;
mod policy;
mod state;

pub use delegate::RadioGroupDelegate;
pub(crate) use state::GroupLink;
pub use state::{RadioGroup, RadioGroupId};
