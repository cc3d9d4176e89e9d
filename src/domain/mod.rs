pub mod articles;
pub mod errors;
pub mod ids;
pub mod magazines;
pub mod repositories;

// Re-exports
pub use errors::RepositoryError;
