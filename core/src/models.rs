/// One target image of a generator catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub width: u32,
    pub height: u32,
    pub filename: &'static str,
    /// Target device, only set for launch screens.
    pub label: Option<&'static str>,
}

impl SizeSpec {
    pub const fn icon(width: u32, height: u32, filename: &'static str) -> Self {
        Self { width, height, filename, label: None }
    }

    pub const fn screen(width: u32, height: u32, filename: &'static str, device: &'static str) -> Self {
        Self { width, height, filename, label: Some(device) }
    }

    pub fn orientation(&self) -> Orientation {
        if self.height > self.width {
            Orientation::Portrait
        } else if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Square
        }
    }

    /// Human readable target, e.g. "iPhone X portrait 1125x2436".
    pub fn describe(&self) -> String {
        match self.label {
            Some(device) => format!("{} {} {}", device, self.orientation().as_str(), self.dimensions()),
            None => self.dimensions(),
        }
    }

    /// "192x192", the form used by manifest `sizes` fields.
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
    Square,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
            Orientation::Square => "square",
        }
    }
}
