//! Pure decision logic: preference filtering and the swipe session.

pub mod filter;
pub mod session;

pub use filter::filter;
pub use session::{SessionStatus, SwipeDirection, SwipeOutcome, SwipeSession};
