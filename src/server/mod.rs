//! JSON API over the comment pipeline
//!
//! ```text
//!  POST /api/fetch_comments   {url, include_fold?, include_replies?}
//!  POST /api/run_lottery      {url, include_fold?, include_replies?, winner_count?}
//!  GET  /api/health
//! ```
//!
//! Every failure is answered with HTTP 200 and `{"success": false, "message": ...}`.
//!
//! # Usage
//!
//! ```ignore
//! use comment_raffle::config::Config;
//! use comment_raffle::server::RaffleServer;
//!
//! let server = RaffleServer::new(Config::default())?;
//! server.start().await?;
//! ```

pub mod api;
pub mod server;

pub use api::{create_router, ApiResponse};
pub use server::{AppState, RaffleServer, ServerError};
