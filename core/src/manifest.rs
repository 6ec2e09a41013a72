use serde::Serialize;

use crate::catalog::{ICONS, ICONS_DIR};

pub const MANIFEST_FILE: &str = "manifest.json";

const START_URL: &str = "./";
const DISPLAY: &str = "standalone";
const BACKGROUND_COLOR: &str = "#ffffff";
const THEME_COLOR: &str = "#ffffff";

// Field order here is the order in the written file.
#[derive(Debug, Serialize)]
struct Manifest<'a> {
    name: &'a str,
    short_name: &'a str,
    start_url: &'a str,
    scope: &'a str,
    display: &'a str,
    background_color: &'a str,
    theme_color: &'a str,
    icons: Vec<ManifestIcon>,
}

#[derive(Debug, Serialize)]
struct ManifestIcon {
    src: String,
    sizes: String,
    #[serde(rename = "type")]
    mime: &'static str,
}

/// Web app manifest for `name`, referencing every catalog icon under `icons/`.
pub fn manifest(name: &str) -> String {
    let icons = ICONS
        .iter()
        .map(|spec| ManifestIcon {
            src: format!("{}/{}", ICONS_DIR, spec.filename),
            sizes: spec.dimensions(),
            mime: "image/png",
        })
        .collect();
    let doc = Manifest {
        name,
        short_name: name,
        start_url: START_URL,
        scope: START_URL,
        display: DISPLAY,
        background_color: BACKGROUND_COLOR,
        theme_color: THEME_COLOR,
        icons,
    };
    let mut out = serde_json::to_string_pretty(&doc).unwrap_or_else(|_| "{}".into());
    out.push('\n');
    out
}
