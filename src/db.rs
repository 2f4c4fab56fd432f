// src/db.rs
//
// Connection bootstrap + query executor.
//
// One read-only connection per run, opened up front and passed by
// reference to every query call. Result sets are materialized eagerly
// into owned values; rusqlite's Rows borrow the statement, so nothing
// borrowed escapes this module.

use std::error::Error;
use std::fmt;
use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use rusqlite::types::ValueRef;

/// One scalar cell: string, number or null.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Real(f64),
    Text(String),
}

impl Value {
    fn from_sql(v: ValueRef<'_>) -> Value {
        match v {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Int(i),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            // No blob columns in the stats schema; decode lossily if one shows up
            ValueRef::Blob(b) => Value::Text(String::from_utf8_lossy(b).into_owned()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(t) => f.write_str(t),
        }
    }
}

/// Full in-memory materialization of one query's rows.
/// Column order is the statement's column order, stable across rows.
#[derive(Clone, Debug)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn len(&self) -> usize { self.rows.len() }
}

/// Open the stats database, read-only.
/// Read-only on purpose: a mistyped path errors out instead of
/// leaving an empty database file behind.
pub fn open(path: &Path) -> Result<Connection, Box<dyn Error>> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    logf!("Opened database {}", path.display());
    Ok(conn)
}

/// Run one literal SQL statement and pull the whole result into memory.
/// Single blocking round trip; any driver error propagates as-is.
pub fn query(conn: &Connection, sql: &str) -> Result<ResultSet, Box<dyn Error>> {
    let mut stmt = conn.prepare(sql)?;

    let columns: Vec<String> = stmt
        .column_names()
        .iter()
        .map(|c| c.to_string())
        .collect();
    let ncols = columns.len();

    let mut out: Vec<Vec<Value>> = Vec::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut rec = Vec::with_capacity(ncols);
        for i in 0..ncols {
            rec.push(Value::from_sql(row.get_ref(i)?));
        }
        out.push(rec);
    }

    Ok(ResultSet { columns, rows: out })
}
