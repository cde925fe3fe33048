use rusqlite::{params, Connection};

/// append-only investigation log, one sqlite table
/// the program only ever writes here, it never reads its own reports back
pub struct ReportLog {
    conn: Connection,
}

impl ReportLog {
    /// open (or create) the database and make sure the table exists
    /// pass ":memory:" for a throwaway log
    pub fn open(path: &str) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        let log = Self { conn };
        log.initialize()?;
        Ok(log)
    }

    /// idempotent, safe to run on every start
    pub fn initialize(&self) -> rusqlite::Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS reports (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                target TEXT NOT NULL,
                result TEXT NOT NULL,
                timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;
        Ok(())
    }

    /// insert one immutable record, returns the assigned id
    /// errors here are fatal by design, callers propagate them
    pub fn append(&self, target: &str, result: &str) -> rusqlite::Result<i64> {
        self.conn.execute(
            "INSERT INTO reports (target, result) VALUES (?1, ?2)",
            params![target, result],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    #[cfg(test)]
    pub fn count(&self) -> rusqlite::Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))
    }

    #[cfg(test)]
    pub fn last(&self) -> rusqlite::Result<(String, String)> {
        self.conn.query_row(
            "SELECT target, result FROM reports ORDER BY id DESC LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
    }
}
