//! Color values, the unset sentinel, and the conversions used for ordering and scoring

use std::fmt;

/// Three-channel additive color with 8-bit channels
///
/// `Color::UNSET` is reserved to mark unpainted canvas cells; every color a
/// palette produces has all channels non-zero, so it can never collide with it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// Hue angle in degrees
    pub hue: f64,
    /// Saturation
    pub saturation: f64,
    /// Value (brightness)
    pub value: f64,
}

impl Color {
    /// Sentinel for cells that have not been painted yet
    pub const UNSET: Self = Self::new(0, 0, 0);

    /// Create a color from red, green and blue channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Whether this is the unset sentinel
    pub const fn is_unset(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Channels as an `[r, g, b]` array
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Euclidean distance between two colors over their RGB channels
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(other.r) - f64::from(self.r);
        let dg = f64::from(other.g) - f64::from(self.g);
        let db = f64::from(other.b) - f64::from(self.b);
        dr.mul_add(dr, dg.mul_add(dg, db * db)).sqrt()
    }

    /// Convert to hue, saturation and value
    ///
    /// Grays (zero channel span) map to all zeros, so hue is 0 and no division
    /// by zero can occur. When several channels share the maximum, red wins
    /// over green and green over blue.
    pub fn to_hsv(self) -> Hsv {
        let max_channel = self.r.max(self.g).max(self.b);
        let min_channel = self.r.min(self.g).min(self.b);

        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let value = f64::from(max_channel) / 255.0;
        let span = value - f64::from(min_channel) / 255.0;

        if max_channel == min_channel {
            return Hsv {
                hue: 0.0,
                saturation: 0.0,
                value: 0.0,
            };
        }

        let mut hue = if max_channel == self.r {
            60.0 * (g - b) / span
        } else if max_channel == self.g {
            120.0 + 60.0 * (b - r) / span
        } else {
            240.0 + 60.0 * (r - g) / span
        };
        if hue < 0.0 {
            hue += 360.0;
        }

        Hsv {
            hue,
            saturation: span / value,
            value,
        }
    }

    /// Hue angle in degrees, 0 for grays
    pub fn hue(self) -> f64 {
        self.to_hsv().hue
    }
}

impl From<[u8; 3]> for Color {
    fn from(channels: [u8; 3]) -> Self {
        let [r, g, b] = channels;
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.channels()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
