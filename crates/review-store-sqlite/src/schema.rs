//! SQL schema for the review store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Reviews are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
-- AUTOINCREMENT guarantees ids are never reused.
CREATE TABLE IF NOT EXISTS reviews (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    review         TEXT    NOT NULL CHECK (length(review) <= 1000),
    author         TEXT    NOT NULL,
    review_source  TEXT    NOT NULL,
    rating         INTEGER NOT NULL,
    title          TEXT    NOT NULL,
    product_name   TEXT    NOT NULL,
    reviewed_date  INTEGER NOT NULL   -- milliseconds since the Unix epoch, UTC
);

CREATE INDEX IF NOT EXISTS reviews_date_idx   ON reviews(reviewed_date);
CREATE INDEX IF NOT EXISTS reviews_source_idx ON reviews(review_source);

PRAGMA user_version = 1;
";
