//! Geometry CLI commands: point conversion and screen bounds.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::config::Config;
use crate::models::{Orientation, Point, Size};
use crate::services::geometry::{convert_point, screen_bounds_for_orientation, FixedDisplay};

/// Convert a point between orientation frames
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// X coordinate in the source frame
    #[arg(long, allow_negative_numbers = true)]
    x: f64,

    /// Y coordinate in the source frame
    #[arg(long, allow_negative_numbers = true)]
    y: f64,

    /// Portrait width of the containing rect (defaults to the configured display)
    #[arg(long)]
    width: Option<f64>,

    /// Portrait height of the containing rect (defaults to the configured display)
    #[arg(long)]
    height: Option<f64>,

    /// Orientation the point was captured in
    #[arg(long, value_enum)]
    from: Orientation,

    /// Orientation to convert into
    #[arg(long, value_enum)]
    to: Orientation,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON output of `convert`
#[derive(Serialize, Debug, PartialEq)]
pub struct ConvertOutput {
    /// Source orientation
    pub from: Orientation,
    /// Destination orientation
    pub to: Orientation,
    /// Portrait bounds used
    pub bounds: Size,
    /// Input point
    pub input: Point,
    /// Converted point
    pub output: Point,
}

impl ConvertArgs {
    /// Execute convert command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let output = self.run(config)?;
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize output")?
            );
        } else {
            println!(
                "({}, {}) in {} -> ({}, {}) in {}",
                output.input.x,
                output.input.y,
                output.from,
                output.output.x,
                output.output.y,
                output.to
            );
        }
        Ok(())
    }

    /// Performs the conversion without printing.
    pub fn run(&self, config: &Config) -> Result<ConvertOutput> {
        let width = self.width.unwrap_or(config.display.width);
        let height = self.height.unwrap_or(config.display.height);
        if !(width > 0.0 && height > 0.0) {
            anyhow::bail!("Bounds must be positive, got {width}x{height}");
        }

        let bounds = Size::new(width, height);
        let input = Point::new(self.x, self.y);
        let output = convert_point(input, bounds, self.from, self.to);
        tracing::debug!("Converted {input:?} from {} to {}: {output:?}", self.from, self.to);

        Ok(ConvertOutput {
            from: self.from,
            to: self.to,
            bounds,
            input,
            output,
        })
    }
}

/// Show screen bounds for an orientation
#[derive(Args, Debug)]
pub struct BoundsArgs {
    /// Orientation to compute bounds for
    #[arg(long, value_enum, default_value = "portrait")]
    orientation: Orientation,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON output of `bounds`
#[derive(Serialize, Debug, PartialEq)]
pub struct BoundsOutput {
    /// Requested orientation
    pub orientation: Orientation,
    /// Screen width in that orientation
    pub width: f64,
    /// Screen height in that orientation
    pub height: f64,
}

impl BoundsArgs {
    /// Execute bounds command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let output = self.run(config);
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize output")?
            );
        } else {
            println!("{}: {} x {}", output.orientation, output.width, output.height);
        }
        Ok(())
    }

    /// Computes the bounds without printing.
    pub fn run(&self, config: &Config) -> BoundsOutput {
        let display = FixedDisplay::new(config.display.portrait_bounds());
        let bounds = screen_bounds_for_orientation(&display, self.orientation);
        BoundsOutput {
            orientation: self.orientation,
            width: bounds.width,
            height: bounds.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;

    fn config() -> Config {
        Config {
            display: DisplayConfig {
                width: 320.0,
                height: 480.0,
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_convert_uses_configured_display() {
        let args = ConvertArgs {
            x: 10.0,
            y: 20.0,
            width: None,
            height: None,
            from: Orientation::Portrait,
            to: Orientation::LandscapeLeft,
            json: false,
        };
        let output = args.run(&config()).unwrap();
        assert_eq!(output.bounds, Size::new(320.0, 480.0));
        assert_eq!(output.output, Point::new(460.0, 10.0));
    }

    #[test]
    fn test_convert_explicit_bounds_override() {
        let args = ConvertArgs {
            x: 0.0,
            y: 0.0,
            width: Some(100.0),
            height: Some(200.0),
            from: Orientation::Portrait,
            to: Orientation::PortraitUpsideDown,
            json: true,
        };
        let output = args.run(&config()).unwrap();
        assert_eq!(output.output, Point::new(100.0, 200.0));
    }

    #[test]
    fn test_convert_rejects_non_positive_bounds() {
        let args = ConvertArgs {
            x: 0.0,
            y: 0.0,
            width: Some(0.0),
            height: None,
            from: Orientation::Portrait,
            to: Orientation::LandscapeRight,
            json: false,
        };
        assert!(args.run(&config()).is_err());
    }

    #[test]
    fn test_bounds_landscape() {
        let args = BoundsArgs {
            orientation: Orientation::LandscapeRight,
            json: false,
        };
        let output = args.run(&config());
        assert_eq!(output.width, 480.0);
        assert_eq!(output.height, 320.0);
    }

    #[test]
    fn test_convert_output_json_shape() {
        let args = ConvertArgs {
            x: 10.0,
            y: 20.0,
            width: None,
            height: None,
            from: Orientation::Portrait,
            to: Orientation::LandscapeRight,
            json: true,
        };
        let output = args.run(&config()).unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["from"], "portrait");
        assert_eq!(json["to"], "landscape-right");
        assert_eq!(json["output"]["x"], 20.0);
        assert_eq!(json["output"]["y"], 310.0);
    }
}
