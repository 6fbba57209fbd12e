use std::path::Path;

use anyhow::Result;

use crate::config::LayoutConfig;
#[cfg(feature = "png")]
use crate::config::RenderConfig;
use crate::layout::{ChartLayout, CircleLayout};
use crate::theme::Theme;

pub fn render_svg(layout: &ChartLayout, theme: &Theme, config: &LayoutConfig) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    if let Some(title) = &layout.title {
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
            title.x,
            title.y,
            theme.font_family,
            theme.title_size,
            theme.title_color,
            escape_xml(&title.text.lines.join(" "))
        ));
    }

    for circle in &layout.circles {
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            circle.x,
            circle.y,
            circle.radius,
            circle.color,
            theme.circle_stroke,
            theme.circle_stroke_width
        ));
        svg.push_str(&circle_label_svg(circle, theme, config));
    }

    if let Some(no_data) = &layout.no_data {
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            no_data.x,
            no_data.y,
            theme.font_family,
            theme.title_size,
            theme.title_color,
            escape_xml(&no_data.message)
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn circle_label_svg(circle: &CircleLayout, theme: &Theme, config: &LayoutConfig) -> String {
    let Some(label) = &circle.label else {
        return String::new();
    };
    let line_height = label.font_size * config.label_line_height;
    let line_count = 1 + label.caption.is_some() as usize;
    let total_height = line_count as f32 * line_height;
    let first_baseline = circle.y - total_height / 2.0 + label.font_size;

    let mut text = String::new();
    text.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">",
        circle.x, first_baseline, theme.font_family, label.font_size, theme.label_color
    ));
    text.push_str(&format!(
        "<tspan x=\"{:.2}\" dy=\"0\">{}</tspan>",
        circle.x,
        escape_xml(&label.name)
    ));
    if let Some(caption) = &label.caption {
        text.push_str(&format!(
            "<tspan x=\"{:.2}\" dy=\"{:.2}\" font-size=\"{}\">{}</tspan>",
            circle.x,
            line_height,
            label.font_size * 0.85,
            escape_xml(caption)
        ));
    }
    text.push_str("</text>");
    text
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Inter".to_string();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .unwrap_or(usvg::Size::from_wh(600.0, 600.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::parse_dataset;
    use crate::layout::compute_chart_layout;

    fn render(input: &str) -> String {
        let dataset = parse_dataset(input).unwrap();
        let theme = Theme::modern();
        let config = LayoutConfig::default();
        let layout = compute_chart_layout(&dataset, &theme, &config).unwrap();
        render_svg(&layout, &theme, &config)
    }

    #[test]
    fn renders_one_circle_per_positive_item() {
        let svg = render(
            r#"{ title: "Fruit", items: [ { label: "Apples", value: 30 }, { label: "Pears", value: 12 }, { label: "Gone", value: 0 } ] }"#,
        );
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("Fruit"));
    }

    #[test]
    fn empty_dataset_renders_no_data_message() {
        let svg = render(r#"{ items: [] }"#);
        assert_eq!(svg.matches("<circle").count(), 0);
        assert!(svg.contains("No data"));
    }

    #[test]
    fn labels_are_xml_escaped() {
        let svg = render(r#"{ items: [ { label: "R&D <lab>", value: 50 } ] }"#);
        assert!(svg.contains("R&amp;D &lt;lab&gt;") || !svg.contains("R&D"));
    }
}
