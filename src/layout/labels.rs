use crate::config::LayoutConfig;
use crate::theme::Theme;

use super::text::{format_value, line_width};
use super::CircleLabel;

/// Fits a name (and optionally a value caption) inside a circle.
///
/// The label must fit inside a chord of the circle: we start at the theme
/// font size and step down to the configured minimum; below that the label
/// is dropped rather than overflowing the shape.
pub(super) fn fit_circle_label(
    name: &str,
    value: f32,
    radius: f32,
    theme: &Theme,
    config: &LayoutConfig,
) -> Option<CircleLabel> {
    if name.is_empty() && !config.show_values {
        return None;
    }
    let chord = 2.0 * radius * config.label_chord_fraction;
    let caption = config.show_values.then(|| format_value(value));

    let mut font_size = theme.font_size;
    while font_size >= config.label_min_font_size {
        let name_width = line_width(name, font_size, &theme.font_family);
        let caption_width = caption
            .as_deref()
            .map(|text| line_width(text, font_size * 0.85, &theme.font_family))
            .unwrap_or(0.0);
        let width = name_width.max(caption_width);
        let line_count = 1 + caption.is_some() as usize;
        let height = line_count as f32 * font_size * config.label_line_height;
        if width <= chord && height <= chord {
            return Some(CircleLabel {
                name: name.to_string(),
                caption,
                font_size,
                width,
            });
        }
        font_size -= 1.0;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_circle_takes_full_size_label() {
        let theme = Theme::modern();
        let config = LayoutConfig::default();
        let label = fit_circle_label("Alpha", 120.0, 150.0, &theme, &config)
            .expect("label should fit");
        assert_eq!(label.font_size, theme.font_size);
        assert_eq!(label.name, "Alpha");
        assert_eq!(label.caption.as_deref(), Some("120"));
    }

    #[test]
    fn tiny_circle_drops_label() {
        let theme = Theme::modern();
        let config = LayoutConfig::default();
        assert!(fit_circle_label("A very long category name", 1.0, 3.0, &theme, &config).is_none());
    }

    #[test]
    fn shrinks_before_dropping() {
        let theme = Theme::modern();
        let config = LayoutConfig::default();
        // A radius that rejects the theme size but accepts a reduced one.
        let mut found_reduced = false;
        for radius in [20.0_f32, 25.0, 30.0, 35.0] {
            if let Some(label) =
                fit_circle_label("Southeast", 42.0, radius, &theme, &config)
                && label.font_size < theme.font_size
            {
                found_reduced = true;
            }
        }
        assert!(found_reduced);
    }
}
