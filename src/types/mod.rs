//! Type definitions

pub mod driver;
pub mod duty_log;
pub mod messages;
pub mod segment;
pub mod trip;

pub use driver::*;
pub use duty_log::*;
pub use messages::*;
pub use segment::*;
pub use trip::*;
