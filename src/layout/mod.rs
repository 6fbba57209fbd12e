mod error;
mod labels;
mod packer;
mod text;
pub(crate) mod types;

pub use error::LayoutError;
pub use packer::{PackInput, Placement, Region, pack_circles};
pub use types::*;

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::ir::Dataset;
use crate::theme::Theme;

use labels::fit_circle_label;
use text::measure_block;

/// Builds the full chart layout: title band, circle packing, palette
/// assignment, and per-circle label fitting.
pub fn compute_chart_layout(
    dataset: &Dataset,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<ChartLayout, LayoutError> {
    let width = config.width.max(1.0);
    let height = config.height.max(1.0);

    let title = dataset.title.as_deref().map(|title| {
        let text = measure_block(title, theme.title_size, config.label_line_height, theme);
        TitleLayout {
            x: width / 2.0,
            y: config.title_padding + theme.title_size,
            text,
        }
    });
    let top_margin = match &title {
        Some(t) => t.text.height + config.title_padding * 2.0,
        None => config.base_top_margin,
    };

    let inputs: Vec<PackInput> = dataset
        .positive_items()
        .map(|item| PackInput::new(item.id.clone(), item.value))
        .collect();

    if inputs.is_empty() {
        return Ok(ChartLayout {
            width,
            height,
            title,
            circles: Vec::new(),
            no_data: Some(NoDataLayout {
                x: width / 2.0,
                y: (top_margin + height) / 2.0,
                message: config.no_data_message.clone(),
            }),
        });
    }

    let region = Region::new(width, height, top_margin);
    let placements = pack_circles(&inputs, region, &config.packer)?;

    // First occurrence of an identity claims the next palette slot, and an
    // explicit per-item color always wins. Stable across re-renders.
    let mut color_map: HashMap<String, String> = HashMap::new();
    let mut color_index = 0usize;
    let mut resolve_color = |id: &str| -> String {
        if let Some(color) = color_map.get(id) {
            return color.clone();
        }
        let color = theme.palette[color_index % theme.palette.len()].clone();
        color_index += 1;
        color_map.insert(id.to_string(), color.clone());
        color
    };
    let overrides: HashMap<&str, &str> = dataset
        .items
        .iter()
        .filter_map(|item| {
            item.color
                .as_deref()
                .map(|color| (item.id.as_str(), color))
        })
        .collect();
    let names: HashMap<&str, &str> = dataset
        .items
        .iter()
        .filter_map(|item| item.label.as_deref().map(|label| (item.id.as_str(), label)))
        .collect();

    let circles = placements
        .into_iter()
        .map(|p| {
            let color = overrides
                .get(p.id.as_str())
                .map(|c| c.to_string())
                .unwrap_or_else(|| resolve_color(&p.id));
            let name = names.get(p.id.as_str()).copied().unwrap_or("");
            let label = fit_circle_label(name, p.value, p.radius, theme, config);
            CircleLayout {
                id: p.id,
                value: p.value,
                x: p.x,
                y: p.y,
                radius: p.radius,
                color,
                label,
            }
        })
        .collect();

    Ok(ChartLayout {
        width,
        height,
        title,
        circles,
        no_data: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::parse_dataset;

    #[test]
    fn title_reserves_the_top_band() {
        let dataset = parse_dataset(
            r#"{ title: "Revenue", items: [ { label: "A", value: 10 }, { label: "B", value: 4 } ] }"#,
        )
        .unwrap();
        let theme = Theme::modern();
        let config = LayoutConfig::default();
        let layout = compute_chart_layout(&dataset, &theme, &config).unwrap();

        let title = layout.title.expect("title layout");
        let band = title.text.height + config.title_padding * 2.0;
        for circle in &layout.circles {
            assert!(circle.y - circle.radius >= band - 1e-3);
        }
    }

    #[test]
    fn no_positive_items_yields_no_data_state() {
        let dataset =
            parse_dataset(r#"{ items: [ { label: "A", value: 0 }, { label: "B", value: -1 } ] }"#)
                .unwrap();
        let layout =
            compute_chart_layout(&dataset, &Theme::modern(), &LayoutConfig::default()).unwrap();
        assert!(layout.circles.is_empty());
        let no_data = layout.no_data.expect("no-data layout");
        assert_eq!(no_data.message, LayoutConfig::default().no_data_message);
    }

    #[test]
    fn explicit_item_color_wins_over_palette() {
        let dataset = parse_dataset(
            r##"{ items: [ { label: "A", value: 10, color: "#123456" }, { label: "B", value: 5 } ] }"##,
        )
        .unwrap();
        let theme = Theme::modern();
        let layout =
            compute_chart_layout(&dataset, &theme, &LayoutConfig::default()).unwrap();
        assert_eq!(layout.circles[0].color, "#123456");
        assert_eq!(layout.circles[1].color, theme.palette[0]);
    }
}
