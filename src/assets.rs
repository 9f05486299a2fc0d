//! Locating the plot and image-map files for a day.
//!
//! Both files are optional. The plot for today usually does not exist until
//! the generator's next run, so absence is modelled as `None` rather than an
//! error. The generator may also remove a map between the existence check and
//! the read; that counts as absent too.

use crate::date::RequestedDate;
use crate::naming;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files found on disk for one day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayAssets {
    /// Plot file name, relative to the plot directory (used as the `src`).
    pub image: Option<String>,
    /// Full path of the image-map fragment.
    pub image_map: Option<PathBuf>,
}

/// Check which of the day's files exist in `plot_dir`.
pub fn locate(plot_dir: &Path, date: &RequestedDate) -> DayAssets {
    let image_name = naming::plot_file_name(date);
    let image = plot_dir.join(&image_name).exists().then_some(image_name);

    let map_path = plot_dir.join(naming::map_file_name(date));
    let image_map = map_path.exists().then_some(map_path);

    debug!(
        %date,
        image = image.is_some(),
        image_map = image_map.is_some(),
        "located day assets"
    );
    DayAssets { image, image_map }
}

/// Read a map fragment exactly as the generator wrote it.
///
/// The content is trusted markup; it is neither parsed, sanitised nor
/// re-encoded. Returns `Ok(None)` if the file is gone.
pub fn read_image_map(path: &Path) -> std::io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "image map vanished before read");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Pixel size from the PNG header, if the plot can be read.
pub fn image_dimensions(plot_dir: &Path, image: &str) -> Option<(u32, u32)> {
    image::image_dimensions(plot_dir.join(image))
        .inspect_err(|e| debug!(image, error = %e, "could not read plot dimensions"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn nothing_present() {
        let tmp = plot_dir();
        let assets = locate(tmp.path(), &day("2024-06-01"));
        assert_eq!(assets, DayAssets::default());
    }

    #[test]
    fn plot_without_map() {
        let tmp = plot_dir();
        write_plot(tmp.path(), "2024-06-01");
        let assets = locate(tmp.path(), &day("2024-06-01"));
        assert_eq!(assets.image.as_deref(), Some("fireplot-64-2024-06-01.png"));
        assert_eq!(assets.image_map, None);
    }

    #[test]
    fn plot_with_map() {
        let tmp = plot_dir();
        write_plot(tmp.path(), "2024-06-01");
        write_map(tmp.path(), "2024-06-01", "<area shape=\"rect\" coords=\"0,0,1,1\">");
        let assets = locate(tmp.path(), &day("2024-06-01"));
        assert!(assets.image.is_some());
        assert_eq!(
            assets.image_map,
            Some(tmp.path().join("imagemap-2024-06-01.map"))
        );
    }

    #[test]
    fn map_without_plot() {
        let tmp = plot_dir();
        write_map(tmp.path(), "2024-06-01", "");
        let assets = locate(tmp.path(), &day("2024-06-01"));
        assert_eq!(assets.image, None);
        assert!(assets.image_map.is_some());
    }

    #[test]
    fn other_days_are_ignored() {
        let tmp = plot_dir();
        write_plot(tmp.path(), "2024-06-02");
        write_map(tmp.path(), "2024-05-31", "");
        assert_eq!(locate(tmp.path(), &day("2024-06-01")), DayAssets::default());
    }

    #[test]
    fn map_is_read_verbatim() {
        let tmp = plot_dir();
        let markup = "  <area shape=\"rect\" coords=\"1,2,3,4\" href=\"a?b=1&c=2\">\r\n\t<!-- x -->\n";
        write_map(tmp.path(), "2024-06-01", markup);
        let content = read_image_map(&tmp.path().join("imagemap-2024-06-01.map")).unwrap();
        assert_eq!(content.as_deref(), Some(markup.as_bytes()));
    }

    #[test]
    fn map_bytes_outside_utf8_are_read_unchanged() {
        let tmp = plot_dir();
        let markup = b"<area title=\"caf\xe9\" coords=\"0,0,1,1\">";
        let path = tmp.path().join("imagemap-2024-06-01.map");
        std::fs::write(&path, markup).unwrap();
        assert_eq!(read_image_map(&path).unwrap().as_deref(), Some(&markup[..]));
    }

    #[test]
    fn map_removed_after_locate_is_absent() {
        let tmp = plot_dir();
        write_map(tmp.path(), "2024-06-01", "<area>");
        let located = locate(tmp.path(), &day("2024-06-01")).image_map.unwrap();
        std::fs::remove_file(&located).unwrap();
        assert_eq!(read_image_map(&located).unwrap(), None);
    }

    #[test]
    fn unreadable_map_is_error() {
        let tmp = plot_dir();
        let path = tmp.path().join("imagemap-2024-06-01.map");
        std::fs::create_dir(&path).unwrap();
        assert!(read_image_map(&path).is_err());
    }

    #[test]
    fn dimensions_from_png_header() {
        let tmp = plot_dir();
        write_png(tmp.path(), "2024-06-01", 4, 3);
        assert_eq!(
            image_dimensions(tmp.path(), "fireplot-64-2024-06-01.png"),
            Some((4, 3))
        );
    }

    #[test]
    fn dimensions_of_garbage_file_are_none() {
        let tmp = plot_dir();
        write_plot(tmp.path(), "2024-06-01");
        assert_eq!(image_dimensions(tmp.path(), "fireplot-64-2024-06-01.png"), None);
    }
}
