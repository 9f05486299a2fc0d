//! # Fireplot
//!
//! A day-by-day viewer for pre-rendered firewall activity plots. An external
//! generator drops one PNG per day (plus an optional image-map fragment) into
//! a directory; this crate turns a `date` parameter into the HTML page that
//! shows that day's plot with links to the neighbouring days.
//!
//! # Request Flow
//!
//! ```text
//! ?date=…  →  date::resolve      →  RequestedDate
//!                 ├─ assets::locate         (plot? map?)
//!                 └─ navigation::neighbors  (previous / next)
//!                          ↓
//!                  render::render_page  →  HTML
//! ```
//!
//! Every step is a plain function over its inputs; [`viewer::Viewer`] wires
//! them together and is what both the CLI and the HTTP host call.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`date`] | Pattern check of the `date` parameter, fallback to today via a [`date::Clock`] |
//! | [`assets`] | Existence checks for the day's plot and image map; map and PNG header reads |
//! | [`navigation`] | Previous/next day arithmetic, including lenient reading of impossible dates |
//! | [`render`] | Maud templates for the page |
//! | [`viewer`] | One request end to end |
//! | [`naming`] | The `fireplot-64-<date>.png` / `imagemap-<date>.map` convention |
//! | [`config`] | `fireplot.toml` loading, validation, and stock defaults |
//! | [`scan`] | Plot directory inventory for `fireplot check` |
//! | [`output`] | CLI report formatting |
//! | [`server`] | axum host: the page at `/`, plot files from the plot directory |
//!
//! # Lenient Dates
//!
//! The `date` parameter is only checked against `YYYY-MM-DD`. A value like
//! `2024-13-99` is shown as-is in the heading and used to look up files; it
//! simply has no neighbouring days. Anything that does not match becomes
//! today's date, without an error.

pub mod assets;
pub mod config;
pub mod date;
pub mod naming;
pub mod navigation;
pub mod output;
pub mod render;
pub mod scan;
pub mod server;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_helpers;
