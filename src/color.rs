use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Renewable share → colour
// ---------------------------------------------------------------------------

/// Hue for 0 % renewable (red) and 100 % renewable (green).
const HUE_LOW: f32 = 0.0;
const HUE_HIGH: f32 = 120.0;

/// Colour for a renewable share, ramping red → amber → green over 0–100 %.
/// Values outside that range are clamped.
pub fn percent_color(percent: f64) -> Color32 {
    let t = (percent / 100.0).clamp(0.0, 1.0) as f32;
    let hue = HUE_LOW + t * (HUE_HIGH - HUE_LOW);
    let hsl = Hsl::new(hue, 0.70, 0.50);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Same colour, faded for rows below the threshold.
pub fn dimmed(color: Color32) -> Color32 {
    color.gamma_multiply(0.35)
}
