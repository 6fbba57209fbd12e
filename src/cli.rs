use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::config::load_config;
use crate::ir::parse_dataset;
use crate::layout::compute_chart_layout;
use crate::render::{render_svg, write_output_svg};

#[derive(Parser, Debug)]
#[command(
    name = "areaviz",
    version,
    about = "Proportional area chart renderer (JSON5 in, SVG/PNG out)"
)]
pub struct Args {
    /// Input dataset (.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, packer, layout overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Chart width in pixels (overrides config)
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Chart height in pixels (overrides config)
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.layout.width = width;
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.layout.height = height;
        config.render.height = height;
    }

    let input = read_input(args.input.as_deref())?;
    let dataset = parse_dataset(&input)?;
    let layout = compute_chart_layout(&dataset, &config.theme, &config.layout)?;
    let svg = render_svg(&layout, &config.theme, &config.layout);

    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                let output = ensure_output(&args.output)?;
                crate::render::write_output_png(&svg, &output, &config.render)?;
            }
            #[cfg(not(feature = "png"))]
            return Err(anyhow::anyhow!(
                "PNG output requires the 'png' build feature"
            ));
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(feature = "png")]
fn ensure_output(output: &Option<PathBuf>) -> Result<PathBuf> {
    output
        .clone()
        .ok_or_else(|| anyhow::anyhow!("Output path required for png output"))
}
