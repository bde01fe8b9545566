//! Headless host for tessera: world generation, scene registration and a
//! fixed-period movement loop driven by scripted taps.

pub mod error;
pub mod game_loop;
pub mod platform;
pub mod session;

pub use error::AppError;
pub use game_loop::TickClock;
pub use platform::{PlatformDirs, PlatformError};
pub use session::{Session, TapReport, TapResult};
