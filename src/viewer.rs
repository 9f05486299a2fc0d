//! Request handling shared by the CLI and the HTTP host.
//!
//! One call resolves the date, looks up the day's files, computes the
//! neighbouring days and renders the page. Nothing is kept between calls.

use crate::assets;
use crate::config::ViewerConfig;
use crate::date::{self, Clock};
use crate::naming;
use crate::navigation;
use crate::render::{self, DayPage, ImageMap};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Viewer {
    config: ViewerConfig,
    clock: Box<dyn Clock>,
}

impl Viewer {
    pub fn new(config: ViewerConfig, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Box::new(clock),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Gather what the page for `raw_date` shows.
    ///
    /// Fails only when an existing image map cannot be read.
    pub fn day_page(&self, raw_date: Option<&str>) -> Result<DayPage, ViewerError> {
        let date = date::resolve(raw_date, self.clock.as_ref());
        let plot_dir = &self.config.plot_dir;
        let found = assets::locate(plot_dir, &date);

        let image_map = match &found.image_map {
            Some(path) => assets::read_image_map(path)?.map(|markup| ImageMap {
                name: naming::map_element_name(&date),
                markup,
            }),
            None => None,
        };
        let dimensions = found
            .image
            .as_deref()
            .and_then(|image| assets::image_dimensions(plot_dir, image));

        Ok(DayPage {
            neighbors: navigation::neighbors(&date),
            today: date::today(self.clock.as_ref()),
            image: found.image,
            dimensions,
            image_map,
            date,
        })
    }

    /// Render the page for `raw_date` as the bytes to send.
    pub fn render(&self, raw_date: Option<&str>) -> Result<Vec<u8>, ViewerError> {
        let page = self.day_page(raw_date)?;
        info!(
            date = %page.date,
            image = page.image.is_some(),
            image_map = page.image_map.is_some(),
            "rendering day page"
        );
        Ok(render::render_page(&page, &self.config))
    }
}
