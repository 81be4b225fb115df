pub mod fetch;
pub mod lottery;
pub mod prompt;
pub mod serve;

// Re-export command functions for convenience
pub use fetch::fetch;
pub use lottery::lottery;
pub use serve::serve;
