// src/params.rs
use std::path::PathBuf;

pub const DEFAULT_DB: &str = "nba2019.db";
pub const PAGE_TITLE: &str = "NBA 2018-19 Reports";

#[derive(Clone)]
pub struct Params {
    pub db: PathBuf,                      // sqlite database to read
    pub out: Option<PathBuf>,             // output file; None = stdout
    pub reports: Option<Vec<String>>,     // filter subset of report slugs
    pub page: bool,                       // wrap fragment in a standalone page
    pub list_reports: bool,               // list reports then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            db: PathBuf::from(DEFAULT_DB),
            out: None,
            reports: None,
            page: false,
            list_reports: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
