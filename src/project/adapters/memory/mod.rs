//! In-memory adapters for project ports.
//!
//! These back tests and single-process embeddings of the core.

mod directory;
mod project;

pub use directory::{InMemorySubscriptionDirectory, InMemoryUserDirectory};
pub use project::InMemoryProjectRepository;
