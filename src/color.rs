use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Srgb<u8>> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            rgb.into_format()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Back-end conversions
// ---------------------------------------------------------------------------

pub fn to_egui(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

pub fn to_plotters(c: Srgb<u8>) -> RGBColor {
    RGBColor(c.red, c.green, c.blue)
}
