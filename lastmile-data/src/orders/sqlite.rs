//! SQLite-backed source of pending delivery orders.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use geo::Coord;
use lastmile_core::{OrderSource, OrderSourceError, Stop, Zone};
use log::debug;
use rusqlite::{Connection, OpenFlags, Row, params};
use thiserror::Error;

const ORDERS_BY_ZONE: &str = "SELECT order_id, customer_name, delivery_address, \
     dest_lat, dest_lng, load_kg, priority \
     FROM delivery_orders \
     WHERE zone_id = ?1 \
     ORDER BY priority DESC, load_kg DESC";

/// Error raised when opening the orders database.
#[derive(Debug, Error)]
pub enum SqliteOrderSourceError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
}

/// Read-only order source over a `delivery_orders` table.
///
/// The table is expected to carry `order_id`, `zone_id`, `customer_name`,
/// `delivery_address`, `dest_lat`, `dest_lng`, `load_kg` and `priority`.
/// Rows are returned in dispatch order. Coordinates are attached only when
/// both latitude and longitude are present.
pub struct SqliteOrderSource {
    connection: Connection,
}

impl fmt::Debug for SqliteOrderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteOrderSource")
            .field("path", &self.connection.path())
            .finish_non_exhaustive()
    }
}

impl SqliteOrderSource {
    /// Open the database at `path` read-only.
    ///
    /// # Errors
    /// Returns [`SqliteOrderSourceError::OpenDatabase`] when the file cannot
    /// be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SqliteOrderSourceError> {
        let path = path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteOrderSourceError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { connection })
    }

    /// Wrap an existing connection, e.g. an in-memory database.
    #[must_use]
    pub const fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }
}

impl OrderSource for SqliteOrderSource {
    fn fetch_orders(&self, zone: &Zone) -> Result<Vec<Stop>, OrderSourceError> {
        let mut statement = self
            .connection
            .prepare_cached(ORDERS_BY_ZONE)
            .map_err(unavailable)?;
        let rows = statement
            .query_map(params![zone.id()], OrderRow::from_row)
            .map_err(unavailable)?;

        let mut stops = Vec::new();
        for row in rows {
            stops.push(row.map_err(unavailable)?.into_stop()?);
        }
        debug!("fetched {} orders for zone {}", stops.len(), zone.id());
        Ok(stops)
    }
}

fn unavailable(err: rusqlite::Error) -> OrderSourceError {
    OrderSourceError::Unavailable {
        message: err.to_string(),
    }
}

struct OrderRow {
    order_id: String,
    customer_name: Option<String>,
    delivery_address: Option<String>,
    dest_lat: Option<f64>,
    dest_lng: Option<f64>,
    load_kg: f64,
    priority: Option<i32>,
}

impl OrderRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            order_id: row.get(0)?,
            customer_name: row.get(1)?,
            delivery_address: row.get(2)?,
            dest_lat: row.get(3)?,
            dest_lng: row.get(4)?,
            load_kg: row.get(5)?,
            priority: row.get(6)?,
        })
    }

    fn into_stop(self) -> Result<Stop, OrderSourceError> {
        let Self {
            order_id,
            customer_name,
            delivery_address,
            dest_lat,
            dest_lng,
            load_kg,
            priority,
        } = self;
        let mut stop = Stop::new(order_id.clone(), load_kg, priority.unwrap_or_default())
            .map_err(|source| OrderSourceError::InvalidRecord { order_id, source })?
            .with_customer(customer_name.unwrap_or_default())
            .with_address(delivery_address.unwrap_or_default());
        if let (Some(lat), Some(lng)) = (dest_lat, dest_lng) {
            stop = stop.with_location(Coord { x: lng, y: lat });
        }
        Ok(stop)
    }
}
