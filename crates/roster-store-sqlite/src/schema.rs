//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// One row per tenant per collection. `data_json` holds the whole
/// collection as a JSON array of records; every mutation rewrites it.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS collections (
    tenant_id   TEXT NOT NULL,
    collection  TEXT NOT NULL,   -- 'employees' | 'companies' | 'applicants' | 'payroll'
    data_json   TEXT NOT NULL,   -- JSON array of records
    updated_at  TEXT NOT NULL,   -- ISO 8601 UTC; set on every rewrite
    PRIMARY KEY (tenant_id, collection)
);

PRAGMA user_version = 1;
";
