use storygen_common::{NodeStyleInfo, Paint, Rgb, StyleSummary, FALLBACK_BACKGROUND, FALLBACK_HEIGHT, FALLBACK_WIDTH};

/// Derive CSS values from the selected node. Missing data falls back to
/// fixed defaults; this never fails.
pub fn extract_style(node: Option<&NodeStyleInfo>) -> StyleSummary {
    let Some(node) = node else {
        return StyleSummary::default();
    };

    StyleSummary {
        width: pixels(node.width).unwrap_or_else(|| FALLBACK_WIDTH.to_string()),
        height: pixels(node.height).unwrap_or_else(|| FALLBACK_HEIGHT.to_string()),
        background_color: background(&node.fills).unwrap_or_else(|| FALLBACK_BACKGROUND.to_string()),
    }
}

/// A zero dimension is treated the same as a missing one
fn pixels(value: Option<f64>) -> Option<String> {
    let rounded = value?.round();
    if rounded > 0.0 {
        Some(format!("{}px", rounded as i64))
    } else {
        None
    }
}

fn background(fills: &[Paint]) -> Option<String> {
    match fills.first()? {
        Paint::Solid { color: Some(color) } => Some(rgb(color)),
        _ => None,
    }
}

fn rgb(color: &Rgb) -> String {
    format!(
        "rgb({}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
