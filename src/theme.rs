use serde::{Deserialize, Serialize};

const MODERN_PALETTE: [&str; 10] = [
    "#4C78A8", "#F58518", "#E45756", "#72B7B2", "#54A24B", "#EECA3B", "#B279A2", "#FF9DA6",
    "#9D755D", "#BAB0AC",
];

const CLASSIC_PALETTE: [&str; 10] = [
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
    "#BCBD22", "#17BECF",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub title_size: f32,
    pub background: String,
    pub title_color: String,
    pub label_color: String,
    pub circle_stroke: String,
    pub circle_stroke_width: f32,
    pub palette: Vec<String>,
}

impl Theme {
    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            title_size: 18.0,
            background: "#FFFFFF".to_string(),
            title_color: "#1C2430".to_string(),
            label_color: "#FFFFFF".to_string(),
            circle_stroke: "#FFFFFF".to_string(),
            circle_stroke_width: 1.5,
            palette: MODERN_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn classic() -> Self {
        Self {
            font_family: "\"trebuchet ms\", verdana, arial, sans-serif".to_string(),
            font_size: 14.0,
            title_size: 20.0,
            background: "#FFFFFF".to_string(),
            title_color: "#333333".to_string(),
            label_color: "#FFFFFF".to_string(),
            circle_stroke: "#333333".to_string(),
            circle_stroke_width: 1.0,
            palette: CLASSIC_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::modern()
    }
}
