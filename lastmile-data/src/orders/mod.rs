//! Order sources backed by persistent stores.

mod sqlite;

pub use sqlite::{SqliteOrderSource, SqliteOrderSourceError};
