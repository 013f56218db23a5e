pub mod pool;

pub use pool::{create_pool, create_pool_from_url, Database, DatabaseError};
