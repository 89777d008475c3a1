use super::element::Element;
use crate::core::models::color::Rgb;

/// Sphere colors per recognized element, plus the color used for any other label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementPalette {
    pub carbon: Rgb,
    pub nitrogen: Rgb,
    pub oxygen: Rgb,
    pub hydrogen: Rgb,
    pub phosphorus: Rgb,
    pub fallback: Rgb,
}

impl Default for ElementPalette {
    fn default() -> Self {
        Self {
            carbon: Rgb::GREY,
            nitrogen: Rgb::BLUE,
            oxygen: Rgb::RED,
            hydrogen: Rgb::WHITE,
            phosphorus: Rgb::ORANGE,
            fallback: Rgb::WHITE,
        }
    }
}

impl ElementPalette {
    pub fn color_of(&self, element: Element) -> Rgb {
        match element {
            Element::Carbon => self.carbon,
            Element::Nitrogen => self.nitrogen,
            Element::Oxygen => self.oxygen,
            Element::Hydrogen => self.hydrogen,
            Element::Phosphorus => self.phosphorus,
        }
    }

    pub fn color_for_label(&self, label: &str) -> Rgb {
        Element::from_label(label).map_or(self.fallback, |e| self.color_of(e))
    }
}
