//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod clock;
pub mod display;

pub use clock::clock_task;
pub use display::display_task;
