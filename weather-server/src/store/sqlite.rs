//! SQLite-backed station store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, params};
use tracing::info;

use crate::domain::Station;

use super::StationStore;
use super::error::StoreError;
use super::schema::create_schema;

const SELECT_STATIONS_BY_STATE: &str =
    "SELECT station_id, state, station_name FROM stations WHERE state = ?1 ORDER BY id";

const INSERT_STATION: &str =
    "INSERT INTO stations (station_id, state, station_name) VALUES (?1, ?2, ?3)";

const DELETE_ALL: &str = "DELETE FROM stations";

const SELECT_STATES: &str = "SELECT DISTINCT state FROM stations ORDER BY state";

/// Station store in a SQLite database file (or in memory, for tests).
pub struct SqliteStationStore {
    conn: Mutex<Connection>,
}

impl SqliteStationStore {
    /// Open (or create) the database at `path` and apply the schema.
    ///
    /// Creates parent directories if they don't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                message: format!("failed to create database directory: {}", e),
            })?;
        }

        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(create_schema())?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl StationStore for SqliteStationStore {
    fn stations_by_state(&self, state: &str) -> Result<Vec<Station>, StoreError> {
        info!(state, "getting stations in state");
        let conn = self.conn()?;
        let mut stmt = conn.prepare(SELECT_STATIONS_BY_STATE)?;
        let rows = stmt
            .query_map(params![state], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, state, name)| {
                Station::new(&id, &state, &name).map_err(|e| StoreError::InvalidRow {
                    message: format!("{} (station_id {:?})", e, id),
                })
            })
            .collect()
    }

    fn save_stations(&self, stations: &[Station]) -> Result<(), StoreError> {
        info!(count = stations.len(), "saving stations");
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_STATION)?;
            for station in stations {
                stmt.execute(params![
                    station.station_id(),
                    station.state(),
                    station.station_name()
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn delete_all(&self) -> Result<(), StoreError> {
        info!("deleting all stations");
        let conn = self.conn()?;
        conn.execute(DELETE_ALL, [])?;
        Ok(())
    }

    fn distinct_states(&self) -> Result<Vec<String>, StoreError> {
        info!("getting all states");
        let conn = self.conn()?;
        let mut stmt = conn.prepare(SELECT_STATES)?;
        let states = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(states)
    }
}
