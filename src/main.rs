use clap::Parser;
use smoothcorners::kurbo::{BezPath, Rect};
use smoothcorners::{RoundingConfig, RoundingStyle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smoothcorners", about = "Round the corners of an SVG path")]
struct Cli {
    /// SVG path data, e.g. "M0 0 L100 0 L100 100 Z"
    #[arg(short, long, conflicts_with_all = ["input", "rect"])]
    path: Option<String>,

    /// File containing SVG path data
    #[arg(short, long, conflicts_with = "rect")]
    input: Option<PathBuf>,

    /// Rectangle "x0,y0,x1,y1" (repeatable); rounds the union of all rects
    #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
    rect: Vec<Rect>,

    /// Output file for the rounded path data (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum corner radius (0 = leave the shape as is)
    #[arg(short, long, default_value = "8")]
    radius: f64,

    /// Corner style: strict, natural or freestyle
    #[arg(short, long, default_value = "natural")]
    style: RoundingStyle,

    /// Tolerance for flattening curved input
    #[arg(long, default_value_t = smoothcorners::DEFAULT_FLATTEN_TOLERANCE)]
    tolerance: f64,

    /// Edges shorter than this are collapsed before rounding
    #[arg(long, default_value_t = smoothcorners::DEFAULT_MIN_SEGMENT_LENGTH)]
    min_segment: f64,
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let values: Vec<f64> = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid rect '{s}': {e}"))?;
    match values[..] {
        [x0, y0, x1, y1] => Ok(Rect::new(x0, y0, x1, y1)),
        _ => Err(format!("rect '{s}' needs four values: x0,y0,x1,y1")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let rounded = if !cli.rect.is_empty() {
        smoothcorners::round_rects(&cli.rect, cli.radius).ok_or("every rect is empty")?
    } else {
        let data = match (&cli.path, &cli.input) {
            (Some(data), _) => data.clone(),
            (None, Some(file)) => std::fs::read_to_string(file)?,
            (None, None) => return Err("one of --path, --input or --rect is required".into()),
        };
        let path = BezPath::from_svg(data.trim())?;
        let config = RoundingConfig {
            radius: cli.radius,
            style: cli.style,
            flatten_tolerance: cli.tolerance,
            min_segment_length: cli.min_segment,
        };
        smoothcorners::round(&path, &config)?
    };

    let svg = rounded.to_svg();
    match &cli.output {
        Some(out) => {
            std::fs::write(out, format!("{svg}\n"))?;
            log::info!("wrote {} elements to {}", rounded.elements().len(), out.display());
        }
        None => println!("{svg}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rect_values() {
        assert_eq!(parse_rect("0, 0,10,-5"), Ok(Rect::new(0.0, 0.0, 10.0, -5.0)));
        assert!(parse_rect("0,0,10").is_err());
        assert!(parse_rect("a,b,c,d").is_err());
    }

    #[test]
    fn cli_accepts_style_and_rects() {
        let cli = Cli::try_parse_from([
            "smoothcorners",
            "--rect",
            "0,0,10,10",
            "--rect",
            "-5,0,5,20",
            "--style",
            "strict",
            "-r",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.rect.len(), 2);
        assert_eq!(cli.style, RoundingStyle::Strict);
        assert_eq!(cli.radius, 3.0);
    }

    #[test]
    fn path_conflicts_with_rects() {
        let parsed = Cli::try_parse_from([
            "smoothcorners",
            "--path",
            "M0 0 L1 1 Z",
            "--rect",
            "0,0,1,1",
        ]);
        assert!(parsed.is_err());
    }
}
