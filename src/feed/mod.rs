//! Feed state ownership: the controller and its search debounce.
//!
//! This module is the only place fetch state lives. The UI translates key
//! presses into controller intents, spawns the fetches the controller asks
//! for, and renders whatever snapshot the controller exposes.
//!
//! - [`controller`] - intent handling, pagination merging, stale-response
//!   discarding via generation tags
//! - [`debounce`] - quiet-period tracking for the search input

mod controller;
mod debounce;

pub use controller::{Applied, FeedController, FeedRequest, FeedState, Mode, RequestKind};
pub use debounce::{SearchDebounce, SEARCH_QUIET_PERIOD};
