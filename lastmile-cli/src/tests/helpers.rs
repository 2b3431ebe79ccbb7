//! Test helpers for building temporary workspaces and order databases.

use camino::{Utf8Path, Utf8PathBuf};
use rusqlite::{Connection, params};
use tempfile::TempDir;

/// Temporary directory paired with its UTF-8 root path.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write file");
}

/// Create a `delivery_orders` table holding `(order_id, zone_id, load_kg)` rows.
pub(super) fn orders_db(path: &Utf8Path, orders: &[(&str, &str, f64)]) {
    let connection = Connection::open(path.as_std_path()).expect("create orders db");
    connection
        .execute_batch(
            "CREATE TABLE delivery_orders (
                order_id TEXT PRIMARY KEY,
                zone_id TEXT NOT NULL,
                customer_name TEXT,
                delivery_address TEXT,
                dest_lat REAL,
                dest_lng REAL,
                load_kg REAL NOT NULL,
                priority INTEGER
            );",
        )
        .expect("create schema");
    for (order_id, zone_id, load_kg) in orders {
        connection
            .execute(
                "INSERT INTO delivery_orders (order_id, zone_id, load_kg, priority) \
                 VALUES (?1, ?2, ?3, 1)",
                params![order_id, zone_id, load_kg],
            )
            .expect("insert order");
    }
}
