//! HTML rendering of the day page.
//!
//! ```text
//! Firewall plot 2024-06-01
//! today | previous day | next day
//! [plot image, optionally with a client-side image map]
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) like the rest of the crate: every
//! interpolated value is escaped, including the date. The image-map fragment
//! is the one exception; it is trusted generator output and goes in as-is,
//! byte for byte. The generator does not promise UTF-8, so the fragment is
//! spliced into the rendered bytes rather than passed through maud.

use crate::config::ViewerConfig;
use crate::date::RequestedDate;
use crate::naming;
use crate::navigation::Neighbors;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// A map fragment together with the name the image refers to it by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMap {
    pub name: String,
    pub markup: Vec<u8>,
}

/// Everything the page shows for one day.
#[derive(Debug, Clone)]
pub struct DayPage {
    pub date: RequestedDate,
    /// Today's date, independent of `date`.
    pub today: RequestedDate,
    pub neighbors: Option<Neighbors>,
    /// Plot file name used as the image source.
    pub image: Option<String>,
    pub dimensions: Option<(u32, u32)>,
    pub image_map: Option<ImageMap>,
}

/// Renders the base HTML document structure.
fn base_document(config: &ViewerConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { (config.page.title) }
                link rel="icon" href=(naming::FAVICON) type="image/x-icon";
                link rel="shortcut icon" href=(naming::FAVICON) type="image/x-icon";
                style { (PreEscaped(crate::config::generate_css(&config.colors))) }
            }
            body {
                (content)
            }
        }
    }
}

fn date_link(date: Option<&RequestedDate>, label: &str) -> Markup {
    let value = date.map(RequestedDate::as_str).unwrap_or_default();
    html! {
        a href={ "?date=" (value) } { (label) }
    }
}

/// Renders the today / previous day / next day row.
pub fn render_nav(today: &RequestedDate, neighbors: Option<&Neighbors>) -> Markup {
    html! {
        div.nav {
            (date_link(Some(today), "today"))
            " | "
            (date_link(neighbors.map(|n| &n.previous), "previous day"))
            " | "
            (date_link(neighbors.map(|n| &n.next), "next day"))
        }
    }
}

/// Renders the plot, wrapped with its image map when there is one.
///
/// Without a plot the `img` element is still emitted, just without `src`.
/// The `<map>` element is left empty; [`render_page`] fills it.
pub fn render_plot(page: &DayPage) -> Markup {
    let width = page.dimensions.map(|(w, _)| w);
    let height = page.dimensions.map(|(_, h)| h);
    let alt = format!("Firewall plot {}", page.date);

    html! {
        div.plot {
            @if let Some(map) = &page.image_map {
                img src=[page.image.as_deref()] width=[width] height=[height] alt=(alt)
                    usemap={ "#" (map.name) };
                (empty_map(map))
            } @else {
                img src=[page.image.as_deref()] width=[width] height=[height] alt=(alt);
            }
        }
    }
}

fn empty_map(map: &ImageMap) -> Markup {
    html! {
        map name=(map.name) {}
    }
}

/// Renders the complete day page as bytes, image map included.
pub fn render_page(page: &DayPage, config: &ViewerConfig) -> Vec<u8> {
    let content = html! {
        h1 { (config.page.heading) " " (page.date) }
        (render_nav(&page.today, page.neighbors.as_ref()))
        (render_plot(page))
    };
    let html = base_document(config, content).into_string();
    match &page.image_map {
        Some(map) => splice_map(html, map),
        None => html.into_bytes(),
    }
}

/// Insert the map fragment between `<map name=…>` and `</map>`.
///
/// Everything else in the document is escaped, so the empty map element is
/// the only literal `<map` in `html`.
fn splice_map(html: String, map: &ImageMap) -> Vec<u8> {
    let empty = empty_map(map).into_string();
    let Some(start) = html.find(&empty) else {
        return html.into_bytes();
    };
    let at = start + empty.len() - "</map>".len();
    let (before, after) = html.as_bytes().split_at(at);

    let mut out = Vec::with_capacity(html.len() + map.markup.len());
    out.extend_from_slice(before);
    out.extend_from_slice(&map.markup);
    out.extend_from_slice(after);
    out
}
