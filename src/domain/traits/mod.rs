//! Domain traits - Abstractions for infrastructure implementations

pub mod clock;
pub mod picker;
pub mod voice;

pub use clock::{Clock, FixedClock, SystemClock};
pub use picker::{FirstPicker, RandomPicker, ReplyPicker};
pub use voice::{Listener, Speaker};
