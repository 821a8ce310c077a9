//! SQL schema for the local station store.

/// Returns the schema as a single batch.
///
/// One table of station rows with an implicit identity key. Rows for a
/// state are always written together and removed together.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS stations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        station_id TEXT NOT NULL,
        state TEXT NOT NULL,
        station_name TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_stations_state ON stations(state);
    "#
}
