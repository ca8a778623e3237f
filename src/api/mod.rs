//! HTTP API for the campus-budget service.
//!
//! ## Endpoints
//!
//! - `POST /api/budget` - Compute a baseline budget plan from form input
//! - `POST /api/budget/adjusted` - Plan with feedback-driven advisory adjustment
//! - `POST /api/feedback` - Persist feedback for the signed-in user
//! - `GET /api/feedback/latest` - Most recent feedback record
//! - `POST /api/voice/transcribe` - Raw audio to transcript + coerced amount
//! - `GET /api/content` - Budgeting tips and local recommendations
//! - `GET /api/health` - Health check

mod budget;
mod feedback;
mod routes;
pub mod types;
mod voice;

pub use routes::{router, serve, AppState};
