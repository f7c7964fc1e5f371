use crate::foundation::core::Vec2;

/// Left-to-right placement of a roster in source units.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    /// Left edge of every glyph, in roster order.
    pub positions: Vec<f64>,
    /// Cursor after the last glyph, including one trailing gap.
    pub cursor: f64,
}

/// Place glyphs of the given widths in a row: each glyph starts at the cursor, then the cursor
/// moves by `width + gap`.
pub fn row_layout(widths: &[f64], gap: f64) -> RowLayout {
    let mut cursor = 0.0;
    let positions = widths
        .iter()
        .map(|w| {
            let x = cursor;
            cursor += w + gap;
            x
        })
        .collect();
    RowLayout { positions, cursor }
}

/// Translation that centers the row horizontally in composition space. The trailing gap does
/// not count toward the row width.
pub fn group_offset(layout: &RowLayout, gap: f64, scale: f64) -> Vec2 {
    if layout.positions.is_empty() {
        return Vec2::ZERO;
    }
    Vec2::new(-(layout.cursor - gap) * scale * 0.5, 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/session/layout.rs"]
mod tests;
