//! Inventory of the plot directory.
//!
//! Backs the `check` command: lists every day the generator has produced a
//! plot or image map for, so gaps and stray map files are easy to spot. Only
//! the top level of the directory is read; the generator never nests files.

use crate::date::{DATE_FORMAT, RequestedDate};
use crate::naming::{self, PlotFile};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Plot directory not found: {0}")]
    NotFound(String),
}

/// What exists on disk for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub date: RequestedDate,
    pub has_plot: bool,
    pub has_map: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Days in ascending date order.
    pub days: Vec<DayEntry>,
    pub has_favicon: bool,
}

impl Inventory {
    pub fn plots(&self) -> usize {
        self.days.iter().filter(|d| d.has_plot).count()
    }

    pub fn maps(&self) -> usize {
        self.days.iter().filter(|d| d.has_map).count()
    }

    /// Days with a map but no plot to attach it to.
    pub fn stray_maps(&self) -> impl Iterator<Item = &DayEntry> {
        self.days.iter().filter(|d| d.has_map && !d.has_plot)
    }

    /// Calendar days between the first and last plot that have no plot.
    pub fn missing_days(&self) -> Vec<RequestedDate> {
        let plotted: BTreeSet<NaiveDate> = self
            .days
            .iter()
            .filter(|d| d.has_plot)
            .filter_map(|d| NaiveDate::parse_from_str(d.date.as_str(), DATE_FORMAT).ok())
            .collect();
        let (Some(&first), Some(&last)) = (plotted.first(), plotted.last()) else {
            return Vec::new();
        };
        first
            .iter_days()
            .take_while(|day| *day <= last)
            .filter(|day| !plotted.contains(day))
            .map(RequestedDate::from_date)
            .collect()
    }
}

pub fn scan(plot_dir: &Path) -> Result<Inventory, ScanError> {
    if !plot_dir.is_dir() {
        return Err(ScanError::NotFound(plot_dir.display().to_string()));
    }

    let mut days: BTreeMap<RequestedDate, DayEntry> = BTreeMap::new();
    let mut has_favicon = false;

    for entry in fs::read_dir(plot_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name == naming::FAVICON {
            has_favicon = true;
            continue;
        }
        let (date, is_plot) = match naming::parse_file_name(name) {
            Some(PlotFile::Plot(date)) => (date, true),
            Some(PlotFile::Map(date)) => (date, false),
            None => continue,
        };
        let day = days.entry(date.clone()).or_insert(DayEntry {
            date,
            has_plot: false,
            has_map: false,
        });
        if is_plot {
            day.has_plot = true;
        } else {
            day.has_map = true;
        }
    }

    Ok(Inventory {
        days: days.into_values().collect(),
        has_favicon,
    })
}
