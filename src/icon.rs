use image::{imageops, Rgba, RgbaImage};

// Placeholder artwork: a blue gradient disc with a white lightning bolt.
pub fn placeholder_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let s = size as f32;
    let centre = s * 0.5;
    let radius = s * 0.45;
    let bolt: Vec<(f32, f32)> = BOLT.iter().map(|&(x, y)| (x * s, y * s)).collect();

    for (x, y, px) in img.enumerate_pixels_mut() {
        let p = (x as f32 + 0.5, y as f32 + 0.5);
        let dist = (p.0 - centre).hypot(p.1 - centre);
        if dist > radius {
            continue;
        }
        let t = dist / radius;
        let shade = |inner: f32, outer: f32| (inner * (1.0 - t) + outer * t) as u8;
        *px = if inside_polygon(p, &bolt) {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([shade(90.0, 30.0), shade(60.0, 20.0), shade(240.0, 140.0), 255])
        };
    }
    img
}

/// Solid background with the placeholder icon centred at a third of the
/// shorter side. Square output survives the cover crop of every launch screen.
pub fn placeholder_launch(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    let icon = placeholder_icon((width.min(height) / 3).max(1));
    let x = (width - icon.width()) / 2;
    let y = (height - icon.height()) / 2;
    imageops::overlay(&mut img, &icon, x as i64, y as i64);
    img
}

// Bolt outline in unit coordinates, clockwise from the top tip.
const BOLT: [(f32, f32); 6] = [
    (0.58, 0.16),
    (0.36, 0.54),
    (0.49, 0.54),
    (0.42, 0.84),
    (0.66, 0.44),
    (0.52, 0.44),
];

/// Even-odd ray cast towards +x.
fn inside_polygon((px, py): (f32, f32), poly: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let mut prev = poly[poly.len() - 1];
    for &cur in poly {
        let ((x0, y0), (x1, y1)) = (prev, cur);
        if (y0 > py) != (y1 > py) && px < x0 + (py - y0) * (x1 - x0) / (y1 - y0) {
            inside = !inside;
        }
        prev = cur;
    }
    inside
}
