//! Scroll and selection state machine.
//!
//! User and host events are expressed as [`CalendarAction`]s. The pure
//! [`reduce`] function turns the current [`CalendarState`] and an action into a
//! new state plus an [`Effect`] describing every notification and view update the
//! transition causes. [`CalendarRuntime`] owns the state, runs the reducer and
//! delivers the effects.

pub mod action;
pub mod effect;
pub mod reducer;
pub mod runtime;
pub mod state;


pub use action::CalendarAction;
pub use effect::{Effect, ViewEffect};
pub use reducer::reduce;
pub use runtime::CalendarRuntime;
pub use state::CalendarState;
