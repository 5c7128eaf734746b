//! `SQLite` storage implementation.

use crate::error::Result;
use crate::model::{
    ComponentRecord, Document, DocumentId, DocumentSummary, IngestSummary, Package,
    PackageMatch,
};
use crate::storage::schema::apply_schema;
use rusqlite::{Connection, OptionalExtension, Row, Transaction};
use std::path::Path;
use tracing::{debug, info};

/// Shared projection for both query paths.
const MATCH_SELECT: &str = r"
    SELECT d.name, p.name, p.version, p.license
    FROM packages p
    JOIN documents d ON d.id = p.document_id";

/// SQLite-based storage backend.
///
/// Outside of [`SqliteStorage::ingest`], every operation runs in its own
/// autocommit unit and is durable once it returns.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open a connection to the database at the given path, creating the
    /// schema if it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema application fails.
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Opening SBOM database");
        let conn = Connection::open(path)?;
        let storage = Self { conn };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Open an in-memory database for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let storage = Self { conn };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Create the `documents` and `packages` tables if they do not exist.
    ///
    /// Safe to call any number of times; existing rows are never touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the DDL cannot be executed.
    pub fn init_schema(&self) -> Result<()> {
        apply_schema(&self.conn)?;
        Ok(())
    }

    /// Run `f` inside an immediate transaction, committing on success.
    ///
    /// # Errors
    ///
    /// Returns whatever `f` returns, or a storage error from begin/commit.
    /// The transaction is rolled back on error.
    fn transact<F, R>(&mut self, op: &str, f: F) -> Result<R>
    where
        F: FnOnce(&Transaction) -> Result<R>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)?;
        let result = f(&tx)?;
        tx.commit()?;
        debug!(op, "Transaction committed");
        Ok(result)
    }

    /// Append a document row and return its new identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_document(&self, name: &str, raw_json: &str) -> Result<DocumentId> {
        insert_document(&self.conn, name, raw_json)
    }

    /// Append a package row owned by `document_id`.
    ///
    /// The document is not looked up first; the schema's foreign key rejects
    /// identifiers that do not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including foreign key violations.
    pub fn insert_package(
        &self,
        document_id: DocumentId,
        name: Option<&str>,
        version: Option<&str>,
        license: Option<&str>,
    ) -> Result<()> {
        insert_package(&self.conn, document_id, name, version, license)
    }

    /// Insert a document and all of its components as one atomic unit.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; nothing is written in that case.
    pub fn ingest(
        &mut self,
        name: &str,
        raw_json: &str,
        components: &[ComponentRecord],
    ) -> Result<IngestSummary> {
        let summary = self.transact("ingest", |tx| {
            let document_id = insert_document(tx, name, raw_json)?;
            for component in components {
                insert_package(
                    tx,
                    document_id,
                    component.name.as_deref(),
                    component.version.as_deref(),
                    component.license.as_deref(),
                )?;
            }
            Ok(IngestSummary {
                document_id,
                packages: components.len(),
            })
        })?;

        info!(
            document_id = summary.document_id,
            packages = summary.packages,
            name,
            "Ingested SBOM document"
        );
        Ok(summary)
    }

    /// Find packages by exact, case-sensitive name, optionally pinned to an
    /// exact version.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn query_by_component(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<Vec<PackageMatch>> {
        let mut sql = format!("{MATCH_SELECT} WHERE p.name = ?");
        let mut params: Vec<&dyn rusqlite::ToSql> = vec![&name];

        if let Some(version) = &version {
            sql.push_str(" AND p.version = ?");
            params.push(version);
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let matches = stmt
            .query_map(params.as_slice(), match_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(name, ?version, count = matches.len(), "Component query");
        Ok(matches)
    }

    /// Find packages whose declared license equals `license` exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn query_by_license(&self, license: &str) -> Result<Vec<PackageMatch>> {
        let sql = format!("{MATCH_SELECT} WHERE p.license = ?");
        let mut stmt = self.conn.prepare(&sql)?;
        let matches = stmt
            .query_map([license], match_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(license, count = matches.len(), "License query");
        Ok(matches)
    }

    /// Get a document, including its raw content, by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_document(&self, id: DocumentId) -> Result<Option<Document>> {
        let document = self
            .conn
            .query_row(
                "SELECT id, name, raw_json FROM documents WHERE id = ?",
                [id],
                |row| {
                    Ok(Document {
                        id: row.get(0)?,
                        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                        raw_json: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    })
                },
            )
            .optional()?;
        Ok(document)
    }

    /// Get the packages of one document in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_packages(&self, document_id: DocumentId) -> Result<Vec<Package>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, document_id, name, version, license
             FROM packages WHERE document_id = ? ORDER BY id",
        )?;
        let packages = stmt
            .query_map([document_id], |row| {
                Ok(Package {
                    id: row.get(0)?,
                    document_id: row.get(1)?,
                    name: row.get(2)?,
                    version: row.get(3)?,
                    license: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(packages)
    }

    /// List all documents in insertion order with their package counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_documents(&self) -> Result<Vec<DocumentSummary>> {
        let mut stmt = self.conn.prepare(
            r"SELECT d.id, d.name, count(p.id)
              FROM documents d
              LEFT JOIN packages p ON p.document_id = d.id
              GROUP BY d.id
              ORDER BY d.id",
        )?;
        let documents = stmt
            .query_map([], |row| {
                let count: i64 = row.get(2)?;
                Ok(DocumentSummary {
                    id: row.get(0)?,
                    name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    package_count: usize::try_from(count).unwrap_or(0),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(documents)
    }

    /// Count total documents in the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_documents(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT count(*) FROM documents", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Count total packages in the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_packages(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT count(*) FROM packages", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

fn insert_document(conn: &Connection, name: &str, raw_json: &str) -> Result<DocumentId> {
    conn.execute(
        "INSERT INTO documents (name, raw_json) VALUES (?, ?)",
        rusqlite::params![name, raw_json],
    )?;
    let id = conn.last_insert_rowid();
    debug!(document_id = id, name, "Inserted document");
    Ok(id)
}

fn insert_package(
    conn: &Connection,
    document_id: DocumentId,
    name: Option<&str>,
    version: Option<&str>,
    license: Option<&str>,
) -> Result<()> {
    conn.execute(
        "INSERT INTO packages (document_id, name, version, license) VALUES (?, ?, ?, ?)",
        rusqlite::params![document_id, name, version, license],
    )?;
    Ok(())
}

fn match_from_row(row: &Row<'_>) -> rusqlite::Result<PackageMatch> {
    Ok(PackageMatch {
        document: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
        name: row.get(1)?,
        version: row.get(2)?,
        license: row.get(3)?,
    })
}
