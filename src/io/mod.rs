//! I/O modules for asynchronous asset loading.

pub mod async_loader;

// Re-export commonly used types
pub use async_loader::{AssetLoader, LoadResult, LoadingState};
