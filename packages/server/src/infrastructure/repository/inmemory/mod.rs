//! In-memory repository implementations.

mod hub;

pub use hub::InMemoryHubRepository;
