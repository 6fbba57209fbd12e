#[derive(Debug, Clone)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub width: f32,
    pub height: f32,
}

/// Label fitted inside a circle: a name line and an optional value caption,
/// both rendered at `font_size` (which may be reduced from the theme size).
#[derive(Debug, Clone)]
pub struct CircleLabel {
    pub name: String,
    pub caption: Option<String>,
    pub font_size: f32,
    pub width: f32,
}

#[derive(Debug, Clone)]
pub struct CircleLayout {
    pub id: String,
    pub value: f32,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: String,
    pub label: Option<CircleLabel>,
}

#[derive(Debug, Clone)]
pub struct TitleLayout {
    pub x: f32,
    pub y: f32,
    pub text: TextBlock,
}

#[derive(Debug, Clone)]
pub struct NoDataLayout {
    pub x: f32,
    pub y: f32,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub title: Option<TitleLayout>,
    pub circles: Vec<CircleLayout>,
    pub no_data: Option<NoDataLayout>,
}
