use crate::text_metrics;
use crate::theme::Theme;

use super::TextBlock;

/// Width of a single line, falling back to an average-glyph estimate when
/// no usable font is installed (keeps layout deterministic on bare CI).
pub(super) fn line_width(text: &str, font_size: f32, font_family: &str) -> f32 {
    text_metrics::measure_text_width(text, font_size, font_family)
        .filter(|w| *w > 0.0 || text.is_empty())
        .unwrap_or_else(|| text.chars().count() as f32 * font_size * 0.56)
}

pub(super) fn measure_block(
    text: &str,
    font_size: f32,
    line_height: f32,
    theme: &Theme,
) -> TextBlock {
    let lines: Vec<String> = if text.is_empty() {
        vec![String::new()]
    } else {
        text.lines().map(|line| line.to_string()).collect()
    };
    let width = lines
        .iter()
        .map(|line| line_width(line, font_size, &theme.font_family))
        .fold(0.0, f32::max);
    let height = lines.len() as f32 * font_size * line_height;
    TextBlock {
        lines,
        width,
        height,
    }
}

/// Compact number formatting for value captions (`1200` not `1200.00`,
/// `3.14` kept at two decimals).
pub(super) fn format_value(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if (rounded - rounded.round()).abs() < 0.001 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.2}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_trims_integer_values() {
        assert_eq!(format_value(1200.0), "1200");
        assert_eq!(format_value(3.14159), "3.14");
        assert_eq!(format_value(0.999), "1");
    }

    #[test]
    fn measure_block_counts_lines() {
        let theme = Theme::modern();
        let block = measure_block("one\ntwo", 12.0, 1.4, &theme);
        assert_eq!(block.lines.len(), 2);
        assert!(block.height > block.lines.len() as f32 * 12.0 - 1.0);
        assert!(block.width > 0.0);
    }
}
