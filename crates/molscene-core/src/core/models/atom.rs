use crate::core::chemistry::element::Element;
use nalgebra::Point3;

/// A single atom of the input structure.
///
/// The label is kept verbatim so that unknown elements still flow through
/// color and bond lookups, which fall back to their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: String,
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(element: &str, position: Point3<f64>) -> Self {
        Self {
            element: element.to_string(),
            position,
        }
    }

    /// Returns the recognized element, or `None` for labels outside the known set.
    pub fn known_element(&self) -> Option<Element> {
        Element::from_label(&self.element)
    }
}
