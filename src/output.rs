//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! ## Check
//!
//! ```text
//! Plots in plots/
//! 001 2024-05-31
//! 002 2024-06-01 (image map)
//!
//! Missing days
//!     2024-06-02
//!
//! Stray image maps
//!     imagemap-2024-06-04.map
//!
//! Favicon: fireplot.ico
//! 2 plots, 1 image map
//! ```

use crate::naming;
use crate::scan::Inventory;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Format the `check` report for a scanned plot directory.
pub fn format_check_output(inventory: &Inventory, plot_dir: &Path) -> Vec<String> {
    let mut lines = vec![format!("Plots in {}", plot_dir.display())];

    let plotted = inventory.days.iter().filter(|d| d.has_plot);
    for (i, day) in plotted.enumerate() {
        if day.has_map {
            lines.push(format!("{} {} (image map)", format_index(i + 1), day.date));
        } else {
            lines.push(format!("{} {}", format_index(i + 1), day.date));
        }
    }
    if inventory.plots() == 0 {
        lines.push(format!("{}(none)", indent(1)));
    }

    let missing = inventory.missing_days();
    if !missing.is_empty() {
        lines.push(String::new());
        lines.push("Missing days".to_string());
        for date in &missing {
            lines.push(format!("{}{}", indent(1), date));
        }
    }

    let mut stray = inventory.stray_maps().peekable();
    if stray.peek().is_some() {
        lines.push(String::new());
        lines.push("Stray image maps".to_string());
        for day in stray {
            lines.push(format!("{}{}", indent(1), naming::map_file_name(&day.date)));
        }
    }

    lines.push(String::new());
    if inventory.has_favicon {
        lines.push(format!("Favicon: {}", naming::FAVICON));
    } else {
        lines.push(format!("Favicon: missing ({})", naming::FAVICON));
    }
    lines.push(format!(
        "{}, {}",
        plural(inventory.plots(), "plot"),
        plural(inventory.maps(), "image map")
    ));
    lines
}

pub fn print_check_output(inventory: &Inventory, plot_dir: &Path) {
    for line in format_check_output(inventory, plot_dir) {
        println!("{}", line);
    }
}
