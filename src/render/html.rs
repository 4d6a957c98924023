use std::fmt::Write;

use super::{css::stylesheet, shape::CloudShape, svg::cloud_svg};
use crate::{
    domain::cloud::Cloud,
    render::animation::cloud_class,
    scene::Scene,
};

pub const BACKGROUND_GRADIENT: &str = "linear-gradient(to bottom, #F5E1B8, #F8E8C4)";

const PAGE_CSS: &str = "\
html, body { margin: 0; height: 100%; }
.loading-screen { position: relative; height: 100dvh; width: 100dvw; overflow: hidden; }
.cloud-layer { position: absolute; inset: 0; }
.cloud-layer > div { position: absolute; }
.spinner-slot { position: relative; display: flex; align-items: center; justify-content: center; height: 100%; }
.spinner { width: 48px; height: 48px; border: 5px solid #8B6F47; border-top-color: transparent; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub spinner_label: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Loading".to_string(),
            spinner_label: "Loading".to_string(),
        }
    }
}

/// Self-contained HTML document for the scene.
#[must_use]
pub fn render_page(scene: &Scene, options: &PageOptions) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    let _ = writeln!(
        page,
        "<title>{}</title>",
        html_escape::encode_text(&options.title)
    );
    page.push_str("<style>\n");
    page.push_str(PAGE_CSS);
    page.push_str(&stylesheet(&scene.sheet));
    page.push_str("</style>\n</head>\n<body>\n");

    let _ = writeln!(
        page,
        "<div class=\"loading-screen\" style=\"background: {BACKGROUND_GRADIENT}\">"
    );
    page.push_str(&cloud_layer(scene));
    let _ = writeln!(
        page,
        "<div class=\"spinner-slot\"><div class=\"spinner\" role=\"status\" aria-label=\"{}\"></div></div>",
        html_escape::encode_double_quoted_attribute(&options.spinner_label)
    );
    page.push_str("</div>\n</body>\n</html>\n");
    page
}

/// Absolutely positioned layer with one element per cloud, in placement order.
#[must_use]
pub fn cloud_layer(scene: &Scene) -> String {
    let mut layer = String::from("<div class=\"cloud-layer\">\n");
    for (cloud, shape) in scene.shapes() {
        layer.push_str(&cloud_element(cloud, &shape));
        layer.push('\n');
    }
    layer.push_str("</div>\n");
    layer
}

/// Anchors are written at full precision so the page reproduces the exact
/// boxes the layout tested.
#[must_use]
pub fn cloud_element(cloud: &Cloud, shape: &CloudShape) -> String {
    let vertical = cloud.position.vertical;
    let horizontal = cloud.position.horizontal;
    format!(
        "<div class=\"cloud {}\" style=\"{}: {}%; {}: {}%;\">{}</div>",
        cloud_class(cloud.id),
        vertical.css_property(),
        vertical.percent(),
        horizontal.css_property(),
        horizontal.percent(),
        cloud_svg(shape)
    )
}
