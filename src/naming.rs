//! File naming convention shared with the plot generator.
//!
//! The generator drops files into the plot directory named after the day
//! they cover:
//!
//! ```text
//! plots/
//! ├── fireplot.ico
//! ├── fireplot-64-2024-06-01.png   # plot for 2024-06-01
//! ├── imagemap-2024-06-01.map      # optional <area> markup for that plot
//! └── fireplot-64-2024-06-02.png
//! ```
//!
//! Every other module builds or parses names through this one.

use crate::date::RequestedDate;

pub const PLOT_PREFIX: &str = "fireplot-64-";
pub const PLOT_SUFFIX: &str = ".png";
pub const MAP_PREFIX: &str = "imagemap-";
pub const MAP_SUFFIX: &str = ".map";
pub const FAVICON: &str = "fireplot.ico";

/// `fireplot-64-<date>.png`
pub fn plot_file_name(date: &RequestedDate) -> String {
    format!("{PLOT_PREFIX}{date}{PLOT_SUFFIX}")
}

/// `imagemap-<date>.map`
pub fn map_file_name(date: &RequestedDate) -> String {
    format!("{MAP_PREFIX}{date}{MAP_SUFFIX}")
}

/// Value of the `<map name>` attribute; unique per day.
pub fn map_element_name(date: &RequestedDate) -> String {
    format!("fireplot-{date}")
}

/// Kind of file recognised in the plot directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotFile {
    Plot(RequestedDate),
    Map(RequestedDate),
}

/// Parse a file name back into the day it belongs to.
///
/// Returns `None` for anything not following the convention, including names
/// whose date part does not match the `YYYY-MM-DD` pattern.
pub fn parse_file_name(name: &str) -> Option<PlotFile> {
    if let Some(date) = strip_affixes(name, PLOT_PREFIX, PLOT_SUFFIX) {
        return RequestedDate::parse(date).map(PlotFile::Plot);
    }
    strip_affixes(name, MAP_PREFIX, MAP_SUFFIX)
        .and_then(RequestedDate::parse)
        .map(PlotFile::Map)
}

fn strip_affixes<'a>(name: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix)?.strip_suffix(suffix)
}
