pub mod assess;
pub mod config;
pub mod dialogue;
pub mod intent;
pub mod recommend;
pub mod retrieval;
pub mod services;

// Re-export specific items if needed for convenient access
pub use dialogue::router::DialogueRouter;
pub use dialogue::session::SessionState;
