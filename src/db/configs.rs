//! Persistence of the single configuration record.
//!
//! The `configs` table holds at most one row. Saving updates that row when it
//! exists and inserts it otherwise; there is no key beyond "the one row".
//! Rows are read back loosely typed and resolved through
//! [`Configuration::resolve`], so a hand-edited or corrupted row still yields
//! a valid configuration.

use crate::db::db::Db;
use crate::libs::config::{ConfigInput, Configuration, KEY_SHOW_DURATION, KEY_SHOW_PRIORITY, KEY_WORK_HOURS_PER_DAY};
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use tracing::{debug, error, info};

pub const CONFIGS_TABLE: &str = "configs";

pub(crate) const SCHEMA_CONFIGS: &str = "CREATE TABLE IF NOT EXISTS configs (
    id INTEGER PRIMARY KEY,
    show_priority INTEGER NOT NULL DEFAULT 1,
    show_duration INTEGER NOT NULL DEFAULT 1,
    work_hours_per_day INTEGER NOT NULL DEFAULT 7
)";
pub(crate) const INSERT_DEFAULT_CONFIG_IF_EMPTY: &str = "INSERT INTO configs (show_priority, show_duration, work_hours_per_day)
    SELECT 1, 1, 7 WHERE NOT EXISTS (SELECT 1 FROM configs)";
const SELECT_CONFIG: &str = "SELECT id, show_priority, show_duration, work_hours_per_day FROM configs ORDER BY id LIMIT 1";
const INSERT_CONFIG: &str = "INSERT INTO configs (show_priority, show_duration, work_hours_per_day) VALUES (?1, ?2, ?3)";
const UPDATE_CONFIG: &str = "UPDATE configs SET show_priority = ?2, show_duration = ?3, work_hours_per_day = ?4 WHERE id = ?1";
const DROP_CONFIGS: &str = "DROP TABLE IF EXISTS configs";

pub struct ConfigStore {
    conn: Connection,
}

impl ConfigStore {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Self::with_connection(db.conn)
    }

    /// Wraps an open connection. A table removed by an earlier uninstall is
    /// recreated with the default row.
    pub fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA_CONFIGS, [])?;
        conn.execute(INSERT_DEFAULT_CONFIG_IF_EMPTY, [])?;
        Ok(Self { conn })
    }

    /// Ensures the table exists and holds the default row.
    pub fn install(&mut self) -> Result<()> {
        self.conn.execute(SCHEMA_CONFIGS, [])?;
        let inserted = self.conn.execute(INSERT_DEFAULT_CONFIG_IF_EMPTY, [])?;
        if inserted > 0 {
            info!("default configuration created");
        }
        Ok(())
    }

    /// Removes the configuration table.
    pub fn uninstall(&mut self) -> Result<()> {
        self.conn.execute(DROP_CONFIGS, [])?;
        msg_debug!(Message::TableDropped(CONFIGS_TABLE.to_string()));
        Ok(())
    }

    /// The stored record as loose key/value input, or `None` if there is no row.
    pub fn load(&mut self) -> Result<Option<ConfigInput>> {
        self.conn
            .query_row(SELECT_CONFIG, [], |row| {
                let mut record = ConfigInput::new();
                record.insert(KEY_SHOW_PRIORITY.to_string(), to_json(row.get(1)?));
                record.insert(KEY_SHOW_DURATION.to_string(), to_json(row.get(2)?));
                record.insert(KEY_WORK_HOURS_PER_DAY.to_string(), to_json(row.get(3)?));
                Ok(record)
            })
            .optional()
            .map_err(Into::into)
    }

    /// The effective configuration; defaults when nothing is stored.
    pub fn get_config(&mut self) -> Result<Configuration> {
        Ok(Configuration::resolve(self.load()?.as_ref()))
    }

    /// Writes `config` to the one row, inserting it if the table is empty.
    pub fn save(&mut self, config: &Configuration) -> Result<()> {
        let existing: Option<i64> = self.conn.query_row(SELECT_CONFIG, [], |row| row.get(0)).optional()?;
        let show_priority = i64::from(config.show_priority);
        let show_duration = i64::from(config.show_duration);
        let hours = i64::from(config.work_hours_per_day);

        match existing {
            Some(id) => {
                self.conn.execute(UPDATE_CONFIG, params![id, show_priority, show_duration, hours])?;
            }
            None => {
                self.conn.execute(INSERT_CONFIG, params![show_priority, show_duration, hours])?;
            }
        }

        debug!(?config, "configuration saved");
        Ok(())
    }

    /// Validates a form submission and saves it. Returns whether the save succeeded.
    pub fn save_input(&mut self, input: &ConfigInput) -> bool {
        let config = Configuration::validate_for_save(input);
        match self.save(&config) {
            Ok(()) => true,
            Err(e) => {
                error!("failed to save configuration: {:#}", e);
                false
            }
        }
    }

    pub fn row_count(&self) -> Result<i64> {
        Ok(self.conn.query_row("SELECT COUNT(*) FROM configs", [], |row| row.get(0))?)
    }
}

fn to_json(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(i) => Value::from(i),
        SqlValue::Real(f) => Value::from(f),
        SqlValue::Text(s) => Value::String(s),
        SqlValue::Blob(b) => Value::String(String::from_utf8_lossy(&b).into_owned()),
    }
}
