pub mod app;
pub mod config;
pub mod errors;
pub mod layout;
pub mod model;
pub mod prompt;
pub mod seed;
pub mod store;
pub mod tree;
pub mod ui;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState, Page};
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
pub use model::{NodeId, TreeNode};
pub use store::Store;
