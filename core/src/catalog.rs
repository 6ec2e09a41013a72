//! Fixed image catalogs.
//!
//! Icons cover favicons plus the home-screen sizes asked for by iOS, Android
//! and Windows tiles. Launch screens are the Apple startup images, one
//! portrait and one landscape entry per device resolution.

use crate::models::SizeSpec;

pub const ICONS_DIR: &str = "icons";
pub const LAUNCH_SCREENS_DIR: &str = "launch-screens";

pub static ICONS: &[SizeSpec] = &[
    SizeSpec::icon(16, 16, "favicon-16x16.png"),
    SizeSpec::icon(32, 32, "favicon-32x32.png"),
    SizeSpec::icon(48, 48, "icon-48x48.png"),
    SizeSpec::icon(72, 72, "icon-72x72.png"),
    SizeSpec::icon(96, 96, "icon-96x96.png"),
    SizeSpec::icon(120, 120, "icon-120x120.png"),
    SizeSpec::icon(128, 128, "icon-128x128.png"),
    SizeSpec::icon(144, 144, "icon-144x144.png"),
    SizeSpec::icon(152, 152, "icon-152x152.png"),
    SizeSpec::icon(167, 167, "icon-167x167.png"),
    SizeSpec::icon(180, 180, "icon-180x180.png"),
    SizeSpec::icon(192, 192, "icon-192x192.png"),
    SizeSpec::icon(256, 256, "icon-256x256.png"),
    SizeSpec::icon(384, 384, "icon-384x384.png"),
    SizeSpec::icon(512, 512, "icon-512x512.png"),
];

pub static LAUNCH_SCREENS: &[SizeSpec] = &[
    SizeSpec::screen(640, 1136, "launch-screen-640x1136.png", "iPhone SE"),
    SizeSpec::screen(1136, 640, "launch-screen-1136x640.png", "iPhone SE"),
    SizeSpec::screen(750, 1334, "launch-screen-750x1334.png", "iPhone 8"),
    SizeSpec::screen(1334, 750, "launch-screen-1334x750.png", "iPhone 8"),
    SizeSpec::screen(1242, 2208, "launch-screen-1242x2208.png", "iPhone 8 Plus"),
    SizeSpec::screen(2208, 1242, "launch-screen-2208x1242.png", "iPhone 8 Plus"),
    SizeSpec::screen(1125, 2436, "launch-screen-1125x2436.png", "iPhone X"),
    SizeSpec::screen(2436, 1125, "launch-screen-2436x1125.png", "iPhone X"),
    SizeSpec::screen(828, 1792, "launch-screen-828x1792.png", "iPhone XR"),
    SizeSpec::screen(1792, 828, "launch-screen-1792x828.png", "iPhone XR"),
    SizeSpec::screen(1242, 2688, "launch-screen-1242x2688.png", "iPhone XS Max"),
    SizeSpec::screen(2688, 1242, "launch-screen-2688x1242.png", "iPhone XS Max"),
    SizeSpec::screen(1536, 2048, "launch-screen-1536x2048.png", "iPad"),
    SizeSpec::screen(2048, 1536, "launch-screen-2048x1536.png", "iPad"),
    SizeSpec::screen(1668, 2224, "launch-screen-1668x2224.png", "iPad Pro 10.5\""),
    SizeSpec::screen(2224, 1668, "launch-screen-2224x1668.png", "iPad Pro 10.5\""),
    SizeSpec::screen(1668, 2388, "launch-screen-1668x2388.png", "iPad Pro 11\""),
    SizeSpec::screen(2388, 1668, "launch-screen-2388x1668.png", "iPad Pro 11\""),
    SizeSpec::screen(2048, 2732, "launch-screen-2048x2732.png", "iPad Pro 12.9\""),
    SizeSpec::screen(2732, 2048, "launch-screen-2732x2048.png", "iPad Pro 12.9\""),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Orientation;
    use std::collections::HashSet;

    fn assert_unique_filenames(catalog: &[SizeSpec]) {
        let names: HashSet<_> = catalog.iter().map(|s| s.filename).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn filenames_are_unique() {
        assert_unique_filenames(ICONS);
        assert_unique_filenames(LAUNCH_SCREENS);
    }

    #[test]
    fn filenames_carry_dimensions() {
        for spec in ICONS.iter().chain(LAUNCH_SCREENS) {
            assert!(spec.filename.ends_with(&format!("{}.png", spec.dimensions())), "{}", spec.filename);
        }
    }

    #[test]
    fn icons_are_square_and_unlabelled() {
        assert!(ICONS.iter().all(|s| s.orientation() == Orientation::Square && s.label.is_none()));
    }

    #[test]
    fn every_device_has_both_orientations() {
        for spec in LAUNCH_SCREENS {
            assert!(spec.label.is_some());
            let flipped = LAUNCH_SCREENS
                .iter()
                .any(|o| o.width == spec.height && o.height == spec.width && o.label == spec.label);
            assert!(flipped, "no rotated twin for {}", spec.filename);
        }
        let portrait = LAUNCH_SCREENS.iter().filter(|s| s.orientation() == Orientation::Portrait).count();
        assert_eq!(portrait * 2, LAUNCH_SCREENS.len());
    }
}
