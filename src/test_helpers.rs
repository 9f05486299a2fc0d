//! Shared test utilities: plot directory fixtures and fixed clocks.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = plot_dir();
//! write_plot(tmp.path(), "2024-06-01");
//! write_map(tmp.path(), "2024-06-01", "<area shape=\"rect\" coords=\"0,0,9,9\">");
//! ```

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::date::{FixedClock, RequestedDate};
use crate::naming;

/// An empty, isolated plot directory.
pub fn plot_dir() -> TempDir {
    TempDir::new().unwrap()
}

pub fn day(s: &str) -> RequestedDate {
    RequestedDate::parse(s).unwrap()
}

pub fn clock_at(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Write a placeholder plot file. Its content is not a decodable PNG.
pub fn write_plot(dir: &Path, date: &str) {
    fs::write(dir.join(naming::plot_file_name(&day(date))), b"not a png").unwrap();
}

/// Write a real (blank) PNG plot of the given size.
pub fn write_png(dir: &Path, date: &str, width: u32, height: u32) {
    image::RgbImage::new(width, height)
        .save(dir.join(naming::plot_file_name(&day(date))))
        .unwrap();
}

pub fn write_map(dir: &Path, date: &str, markup: &str) {
    fs::write(dir.join(naming::map_file_name(&day(date))), markup).unwrap();
}
