//! SQLite record store implementation

use geocat_core::{NewStudy, StudyRecord};
use rusqlite::{Connection, Row, params};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{GroupCount, GroupField, RecordStore, StorageError, migrations};

const STUDY_COLUMNS: &str = "id, geo_accession, title, organism, data_type, \
     extracted_molecule, superseries, summary, publication_date";

/// Durable study collection over a single SQLite file.
///
/// The connection is shared behind a mutex; all operations hold the lock for
/// the duration of one statement, which is enough because every operation on
/// the query path is a pure read.
#[derive(Debug)]
pub struct StudyStore {
    conn: Arc<Mutex<Connection>>,
}

fn lock_conn(mutex: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, StorageError> {
    mutex.lock().map_err(|_| StorageError::LockPoisoned)
}

fn row_to_study(row: &Row<'_>) -> rusqlite::Result<StudyRecord> {
    Ok(StudyRecord {
        id: row.get(0)?,
        geo_accession: row.get(1)?,
        title: row.get(2)?,
        organism: row.get(3)?,
        data_type: row.get(4)?,
        extracted_molecule: row.get(5)?,
        superseries: row.get(6)?,
        summary: row.get(7)?,
        publication_date: row.get(8)?,
    })
}

impl StudyStore {
    /// Open (or create) the store at `db_path` and run migrations.
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path)?;
        migrations::run_migrations(&conn)?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    /// Insert one study and return its store-assigned id.
    pub fn insert(&self, study: &NewStudy) -> Result<i64, StorageError> {
        let conn = lock_conn(&self.conn)?;
        conn.execute(
            r#"INSERT INTO studies
               (geo_accession, title, organism, data_type, extracted_molecule,
                superseries, summary, publication_date)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"#,
            params![
                study.geo_accession,
                study.title,
                study.organism,
                study.data_type,
                study.extracted_molecule,
                study.superseries,
                study.summary,
                study.publication_date,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Insert a batch of studies inside one transaction. All rows land or
    /// none do; a bad row rolls the whole batch back.
    pub fn insert_batch(&self, studies: &[NewStudy]) -> Result<usize, StorageError> {
        let mut conn = lock_conn(&self.conn)?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                r#"INSERT INTO studies
                   (geo_accession, title, organism, data_type, extracted_molecule,
                    superseries, summary, publication_date)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"#,
            )?;
            for study in studies {
                stmt.execute(params![
                    study.geo_accession,
                    study.title,
                    study.organism,
                    study.data_type,
                    study.extracted_molecule,
                    study.superseries,
                    study.summary,
                    study.publication_date,
                ])?;
            }
        }
        tx.commit()?;
        Ok(studies.len())
    }
}

impl RecordStore for StudyStore {
    fn get(&self, id: i64) -> Result<StudyRecord, StorageError> {
        let conn = lock_conn(&self.conn)?;
        let mut stmt =
            conn.prepare(&format!("SELECT {STUDY_COLUMNS} FROM studies WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(row_to_study(row)?),
            None => Err(StorageError::NotFound { entity: "study", id }),
        }
    }

    fn scan(
        &self,
        predicate: &(dyn Fn(&StudyRecord) -> bool + Sync),
    ) -> Result<Vec<StudyRecord>, StorageError> {
        let conn = lock_conn(&self.conn)?;
        let mut stmt =
            conn.prepare(&format!("SELECT {STUDY_COLUMNS} FROM studies ORDER BY id"))?;
        let rows = stmt.query_map([], row_to_study)?;

        let mut matched = Vec::new();
        for row in rows {
            // Any unreadable row fails the whole scan; no partial results.
            let study = row?;
            if predicate(&study) {
                matched.push(study);
            }
        }
        Ok(matched)
    }

    fn count(&self) -> Result<i64, StorageError> {
        let conn = lock_conn(&self.conn)?;
        let count = conn.query_row("SELECT COUNT(*) FROM studies", [], |row| row.get(0))?;
        Ok(count)
    }

    fn count_grouped(&self, field: GroupField) -> Result<Vec<GroupCount>, StorageError> {
        let conn = lock_conn(&self.conn)?;
        let column = field.column();
        let mut stmt = conn.prepare(&format!(
            "SELECT {column}, COUNT(id) FROM studies GROUP BY {column}"
        ))?;
        let rows = stmt.query_map([], |row| {
            Ok(GroupCount { value: row.get(0)?, count: row.get(1)? })
        })?;

        let mut groups = Vec::new();
        for row in rows {
            groups.push(row?);
        }
        Ok(groups)
    }
}
