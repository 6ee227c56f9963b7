pub mod reply;
pub mod router;
pub mod session;

pub use reply::*;
pub use router::*;
pub use session::*;
