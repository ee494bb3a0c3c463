//! Math utilities and types
//!
//! Window-space positions are measured in pixels from the bottom-left corner
//! of the render window, as the toolkit's text actors expect.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type used for window-space positions and sizes
pub type Vec2 = Vector2<f64>;

/// RGB colour, each component in `[0.0, 1.0]`
pub type Colour = Vector3<f64>;

/// Convert a window size in pixels into a vector
pub fn size_to_vec(size: (u32, u32)) -> Vec2 {
    Vec2::new(f64::from(size.0), f64::from(size.1))
}

/// Check that every colour component is finite and within `[0.0, 1.0]`
pub fn is_unit_colour(colour: &Colour) -> bool {
    colour.iter().all(|c| c.is_finite() && (0.0..=1.0).contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_to_vec() {
        let v = size_to_vec((640, 480));
        assert_eq!(v, Vec2::new(640.0, 480.0));
    }

    #[test]
    fn test_unit_colour_bounds() {
        assert!(is_unit_colour(&Colour::new(1.0, 0.0, 0.5)));
        assert!(!is_unit_colour(&Colour::new(1.5, 0.0, 0.0)));
        assert!(!is_unit_colour(&Colour::new(-0.1, 0.0, 0.0)));
        assert!(!is_unit_colour(&Colour::new(f64::NAN, 0.0, 0.0)));
    }
}
