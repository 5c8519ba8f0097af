pub mod sql;

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Int(i64),
    Real(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Text(String),
    Blob(Vec<u8>),
}

#[derive(Debug)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}
