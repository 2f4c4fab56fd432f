// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod params;

pub mod db;
pub mod file;
pub mod html;
pub mod reports;
pub mod runner;
