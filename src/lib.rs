#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod render;
pub mod text_metrics;
pub mod theme;

pub use config::{Config, LayoutConfig, PackerConfig, load_config};
pub use ir::{Dataset, DatasetError, Item, parse_dataset};
pub use layout::{
    ChartLayout, LayoutError, PackInput, Placement, Region, compute_chart_layout, pack_circles,
};
pub use render::render_svg;
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
