pub mod answerer;
pub mod index;

pub use answerer::*;
pub use index::*;
