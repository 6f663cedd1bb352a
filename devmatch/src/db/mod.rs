pub mod backends;
mod connection;
pub mod repository;
pub(crate) mod schema;
pub mod traits;

pub use backends::{InMemoryProfileStore, LibSqlBackend};
pub use connection::Database;
pub use traits::*;
