use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit RGB color, written as `r,g,b` in scene files and as a
/// three-element array in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GREY: Rgb = Rgb::new(128, 128, 128);
    pub const LIGHT_GREY: Rgb = Rgb::new(200, 200, 200);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_comma_separated_channels() {
        assert_eq!(Rgb::ORANGE.to_string(), "255,165,0");
        assert_eq!(Rgb::new(10, 0, 255).to_string(), "10,0,255");
    }

    #[test]
    fn converts_to_and_from_arrays() {
        let c: Rgb = [1, 2, 3].into();
        assert_eq!(c, Rgb::new(1, 2, 3));
        assert_eq!(<[u8; 3]>::from(c), [1, 2, 3]);
    }
}
