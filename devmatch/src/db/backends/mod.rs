pub mod libsql;
pub mod memory;

pub use self::libsql::LibSqlBackend;
pub use self::memory::InMemoryProfileStore;
