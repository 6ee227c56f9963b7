pub mod engine;
pub mod log;
pub mod question;

pub use engine::*;
pub use log::*;
pub use question::*;
