//! Fixed colour policy: one fill/border/highlight triple per sector code.

use crate::data::Category;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Scale the current alpha, e.g. to dim non-hovered entries.
    pub fn scale_opacity(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// CSS `rgba(...)` notation.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// WCAG relative luminance of the opaque colour.
    pub fn luminance(&self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// Black or white, whichever reads better on top of this fill.
    pub fn contrast_text(&self) -> Rgba {
        if self.luminance() > 0.179 {
            Rgba::new(0, 0, 0, 1.0)
        } else {
            Rgba::new(255, 255, 255, 1.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTriple {
    pub fill: Rgba,
    pub border: Rgba,
    pub highlight: Rgba,
}

const FILL_ALPHA: f32 = 0.85;
const HIGHLIGHT_ALPHA: f32 = 0.95;

impl ColorTriple {
    const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            fill: Rgba::new(r, g, b, FILL_ALPHA),
            border: Rgba::new(r, g, b, 1.0),
            highlight: Rgba::new(r, g, b, HIGHLIGHT_ALPHA),
        }
    }
}

pub const BLUE: ColorTriple = ColorTriple::from_rgb(24, 119, 242);
pub const RED: ColorTriple = ColorTriple::from_rgb(220, 57, 18);
pub const GREEN: ColorTriple = ColorTriple::from_rgb(16, 150, 24);
pub const ORANGE: ColorTriple = ColorTriple::from_rgb(255, 153, 0);
pub const TEAL: ColorTriple = ColorTriple::from_rgb(16, 150, 110);
pub const PURPLE: ColorTriple = ColorTriple::from_rgb(153, 0, 153);
pub const GREY: ColorTriple = ColorTriple::from_rgb(102, 102, 102);
pub const INDIGO: ColorTriple = ColorTriple::from_rgb(97, 97, 220);

/// Outer circle of the GDP bubble.
pub const TOTAL_GDP_FILL: Rgba = Rgba::new(240, 240, 240, 0.9);
pub const TOTAL_GDP_BORDER: Rgba = Rgba::new(180, 180, 180, 1.0);

pub fn color_for(category: Category) -> ColorTriple {
    match category {
        Category::Manufacturing => BLUE,
        Category::Wholesale => RED,
        Category::SoftwarePublishing => GREEN,
        Category::Telecommunications => ORANGE,
        Category::ComputerProgramming => TEAL,
        Category::InformationServices => PURPLE,
        Category::ComputerRepair => GREY,
        Category::ServicesTotal => TEAL,
        Category::IctTotal => INDIGO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_full_triple() {
        for category in Category::ALL {
            let triple = color_for(category);
            assert_eq!(triple.fill.a, FILL_ALPHA);
            assert_eq!(triple.border.a, 1.0);
            assert_eq!(triple.highlight.a, HIGHLIGHT_ALPHA);
            assert_eq!(
                (triple.fill.r, triple.fill.g, triple.fill.b),
                (triple.border.r, triple.border.g, triple.border.b)
            );
        }
    }

    #[test]
    fn leaves_are_distinguishable() {
        for (i, a) in Category::LEAVES.iter().enumerate() {
            for b in &Category::LEAVES[i + 1..] {
                assert_ne!(color_for(*a), color_for(*b), "{a:?} and {b:?} share a colour");
            }
        }
    }

    #[test]
    fn text_colour_follows_luminance() {
        assert_eq!(ORANGE.fill.contrast_text(), Rgba::new(0, 0, 0, 1.0));
        assert_eq!(PURPLE.fill.contrast_text(), Rgba::new(255, 255, 255, 1.0));
    }

    #[test]
    fn css_and_opacity() {
        assert_eq!(BLUE.border.css(), "rgba(24, 119, 242, 1)");
        assert_eq!(BLUE.border.scale_opacity(0.5).a, 0.5);
        assert_eq!(BLUE.border.with_alpha(3.0).a, 1.0);
    }
}
