//! Boundary with the research service
//!
//! [`ApiClient`] talks HTTP, [`FileSource`] replays a saved trends payload,
//! and [`FetchSession`] runs trends fetches in the background while applying
//! only the most recent one.

mod endpoint;
mod session;
mod source;

pub use endpoint::{ApiClient, ApiConfig};
pub use session::{FetchSession, Fetched, GenerationGuard};
pub use source::{FileSource, TrendsSource};
