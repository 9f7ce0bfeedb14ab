//! Reversed "hot" color scale for heat maps.
//!
//! Low values are white, rising through yellow and red to black at the top of
//! the range. Every channel is non-increasing in the normalized value.

use plotters::style::RGBColor;

// Breakpoints where red, then green, then blue saturate on the forward scale
const RED_END: f64 = 0.365_079;
const GREEN_END: f64 = 0.746_032;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Relative luminance (Rec. 709 weights), 0.0..=255.0
    pub fn luminance(self) -> f64 {
        0.2126 * self.0 as f64 + 0.7152 * self.1 as f64 + 0.0722 * self.2 as f64
    }
}

impl From<Rgb> for RGBColor {
    fn from(color: Rgb) -> Self {
        RGBColor(color.0, color.1, color.2)
    }
}

fn ramp(t: f64, start: f64, end: f64) -> u8 {
    let x = ((t - start) / (end - start)).clamp(0.0, 1.0);
    (x * 255.0).round() as u8
}

/// Forward "hot": black → red → yellow → white
pub fn hot(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    Rgb(
        ramp(t, 0.0, RED_END),
        ramp(t, RED_END, GREEN_END),
        ramp(t, GREEN_END, 1.0),
    )
}

/// Reversed "hot": white → yellow → red → black
pub fn hot_r(t: f64) -> Rgb {
    hot(1.0 - t.clamp(0.0, 1.0))
}

/// Maps values in `[min, max]` onto the reversed hot scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Position of `value` in the range, clamped to 0..=1
    ///
    /// A flat range maps everything to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 || !span.is_finite() {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn color(&self, value: f64) -> Rgb {
        hot_r(self.normalize(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hot_r_endpoints() {
        assert_eq!(hot_r(0.0), Rgb(255, 255, 255));
        assert_eq!(hot_r(1.0), Rgb(0, 0, 0));
    }

    #[test]
    fn test_hot_r_monotonic() {
        let mut previous = hot_r(0.0);
        for step in 1..=100 {
            let current = hot_r(step as f64 / 100.0);
            assert!(current.0 <= previous.0);
            assert!(current.1 <= previous.1);
            assert!(current.2 <= previous.2);
            previous = current;
        }
    }

    #[test]
    fn test_color_scale() {
        let scale = ColorScale::new(10.0, 20.0);
        assert_eq!(scale.normalize(15.0), 0.5);
        assert_eq!(scale.normalize(-5.0), 0.0);
        assert_eq!(scale.color(10.0), Rgb(255, 255, 255));
        assert_eq!(scale.color(20.0), Rgb(0, 0, 0));
    }

    #[test]
    fn test_flat_range() {
        let scale = ColorScale::new(7.0, 7.0);
        assert_eq!(scale.color(7.0), Rgb(255, 255, 255));
    }

    #[test]
    fn test_into_plotters_color() {
        let color: RGBColor = Rgb(255, 128, 0).into();
        assert_eq!((color.0, color.1, color.2), (255, 128, 0));
    }
}
