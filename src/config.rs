use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Tunables for the circle-packing pass. The containment and area-budget
/// invariants hold for any positive settings; the force magnitudes only
/// shape how dense the final arrangement looks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackerConfig {
    pub min_radius: f32,
    /// Max radius as a fraction of region height (no circle dominates the
    /// vertical space).
    pub max_radius_fraction: f32,
    /// Scale applied to the cap when seeding radii, leaving headroom for
    /// the square-root ramp.
    pub initial_radius_scale: f32,
    /// Total circle area is held at or below this fraction of the region.
    pub area_budget_fraction: f32,
    pub iterations: usize,
    pub center_pull: f32,
    pub repulsion: f32,
    pub collision_strength: f32,
    /// Allowed overlap, in pixels of combined radius. Deliberate: slight
    /// overlap reads as a denser, more organic chart.
    pub collision_slack: f32,
    pub spiral_step_fraction: f32,
    /// Seed circles advance one spiral ring every this many items.
    pub spiral_band: usize,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            min_radius: 5.0,
            max_radius_fraction: 1.0 / 3.0,
            initial_radius_scale: 0.8,
            area_budget_fraction: 0.5,
            iterations: 200,
            center_pull: 0.012,
            repulsion: 10.0,
            collision_strength: 0.9,
            collision_slack: 5.0,
            spiral_step_fraction: 0.15,
            spiral_band: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub width: f32,
    pub height: f32,
    /// Top band reserved when the dataset has no title.
    pub base_top_margin: f32,
    pub title_padding: f32,
    pub label_line_height: f32,
    pub label_min_font_size: f32,
    /// Fraction of the diameter a label may occupy before shrinking.
    pub label_chord_fraction: f32,
    pub show_values: bool,
    pub no_data_message: String,
    pub packer: PackerConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            base_top_margin: 12.0,
            title_padding: 10.0,
            label_line_height: 1.4,
            label_min_font_size: 9.0,
            label_chord_fraction: 0.85,
            show_values: true,
            no_data_message: "No data".to_string(),
            packer: PackerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    title_size: Option<f32>,
    background: Option<String>,
    title_color: Option<String>,
    label_color: Option<String>,
    circle_stroke: Option<String>,
    circle_stroke_width: Option<f32>,
    palette: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackerConfigFile {
    min_radius: Option<f32>,
    max_radius_fraction: Option<f32>,
    area_budget_fraction: Option<f32>,
    iterations: Option<usize>,
    center_pull: Option<f32>,
    repulsion: Option<f32>,
    collision_strength: Option<f32>,
    collision_slack: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    base_top_margin: Option<f32>,
    title_padding: Option<f32>,
    label_line_height: Option<f32>,
    label_min_font_size: Option<f32>,
    label_chord_fraction: Option<f32>,
    show_values: Option<bool>,
    no_data_message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
    packer: Option<PackerConfigFile>,
}

/// Loads a JSON config file over the defaults. Absent file or absent
/// fields leave the defaults untouched.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "classic" {
            config.theme = Theme::classic();
        } else if theme_name == "modern" || theme_name == "default" {
            config.theme = Theme::modern();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.title_size {
            config.theme.title_size = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.title_color {
            config.theme.title_color = v;
        }
        if let Some(v) = vars.label_color {
            config.theme.label_color = v;
        }
        if let Some(v) = vars.circle_stroke {
            config.theme.circle_stroke = v;
        }
        if let Some(v) = vars.circle_stroke_width {
            config.theme.circle_stroke_width = v;
        }
        if let Some(v) = vars.palette
            && !v.is_empty()
        {
            config.theme.palette = v;
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.width {
            config.layout.width = v;
        }
        if let Some(v) = layout.height {
            config.layout.height = v;
        }
        if let Some(v) = layout.base_top_margin {
            config.layout.base_top_margin = v;
        }
        if let Some(v) = layout.title_padding {
            config.layout.title_padding = v;
        }
        if let Some(v) = layout.label_line_height {
            config.layout.label_line_height = v;
        }
        if let Some(v) = layout.label_min_font_size {
            config.layout.label_min_font_size = v;
        }
        if let Some(v) = layout.label_chord_fraction {
            config.layout.label_chord_fraction = v;
        }
        if let Some(v) = layout.show_values {
            config.layout.show_values = v;
        }
        if let Some(v) = layout.no_data_message {
            config.layout.no_data_message = v;
        }
        config.render.width = config.layout.width;
        config.render.height = config.layout.height;
    }

    if let Some(packer) = parsed.packer {
        let target = &mut config.layout.packer;
        if let Some(v) = packer.min_radius {
            target.min_radius = v;
        }
        if let Some(v) = packer.max_radius_fraction {
            target.max_radius_fraction = v;
        }
        if let Some(v) = packer.area_budget_fraction {
            target.area_budget_fraction = v;
        }
        if let Some(v) = packer.iterations {
            target.iterations = v;
        }
        if let Some(v) = packer.center_pull {
            target.center_pull = v;
        }
        if let Some(v) = packer.repulsion {
            target.repulsion = v;
        }
        if let Some(v) = packer.collision_strength {
            target.collision_strength = v;
        }
        if let Some(v) = packer.collision_slack {
            target.collision_slack = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_returns_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.layout.packer.iterations, 200);
        assert_eq!(config.layout.width, 600.0);
    }

    #[test]
    fn file_overlays_defaults() {
        let dir = std::env::temp_dir().join("areaviz-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(
            &path,
            r##"{
                "theme": "classic",
                "themeVariables": { "fontSize": 11, "palette": ["#111111", "#222222"] },
                "layout": { "width": 800, "showValues": false, "labelLineHeight": 1.2 },
                "packer": { "iterations": 50, "collisionSlack": 2.0 }
            }"##,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.theme.font_size, 11.0);
        assert_eq!(config.theme.palette.len(), 2);
        assert_eq!(config.layout.width, 800.0);
        assert!(!config.layout.show_values);
        assert_eq!(config.layout.label_line_height, 1.2);
        assert_eq!(config.layout.packer.iterations, 50);
        assert_eq!(config.layout.packer.collision_slack, 2.0);
        // Classic theme selected before variables were applied.
        assert_eq!(config.theme.circle_stroke, "#333333");
    }
}
