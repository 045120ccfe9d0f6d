use eframe::egui::Color32;

fn unit_to_u8(value: f32) -> u8 {
    // NaN saturates to 0 through the float-to-int cast
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Packs a normalized straight-alpha RGBA color for drawing. Components are
/// saturated to [0, 1], so HDR values render at full brightness.
pub fn to_color32(rgba: [f32; 4]) -> Color32 {
    let [r, g, b, a] = rgba.map(unit_to_u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub fn opaque(rgb: [f32; 3]) -> Color32 {
    let [r, g, b] = rgb;
    to_color32([r, g, b, 1.0])
}
