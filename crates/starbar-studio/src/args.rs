//! Command-line options for the studio binary.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use starbar_engine::coords::{Edges, Vec2};
use starbar_engine::paint::Color;
use starbar_ui::prelude::StripConfig;

/// Parsed run parameters. Anything not given keeps the widget defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub strip: StripConfig,
    pub view_size: Vec2,
    pub padding: Edges,
    pub output: PathBuf,
    pub log_filter: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strip: StripConfig::default().star_count(5).current_rating(3.7),
            view_size: Vec2::new(500.0, 100.0),
            padding: Edges::default(),
            output: PathBuf::from("stars.png"),
            log_filter: None,
        }
    }
}

pub enum Parsed {
    Run(Options),
    Help,
}

/// Parses `--key value` pairs (program name already stripped).
pub fn parse<I, S>(args: I) -> Result<Parsed>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(flag) = args.next() {
        if flag == "-h" || flag == "--help" {
            return Ok(Parsed::Help);
        }
        let value = args.next().with_context(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "-n" | "--count" => opts.strip.star_count = parse_num(&flag, &value)?,
            "-r" | "--rating" => opts.strip.current_rating = parse_num(&flag, &value)?,
            "--radius" => opts.strip.star_radius = parse_num(&flag, &value)?,
            "--margin" => opts.strip.star_margin = parse_num(&flag, &value)?,
            "-w" | "--width" => opts.view_size.x = parse_num(&flag, &value)?,
            "--height" => opts.view_size.y = parse_num(&flag, &value)?,
            "-p" | "--padding" => opts.padding = Edges::all(parse_num(&flag, &value)?),
            "--normal" => opts.strip.normal_color = parse_color(&flag, &value)?,
            "--fill" => opts.strip.fill_color = parse_color(&flag, &value)?,
            "-o" | "--output" => opts.output = PathBuf::from(value),
            "--log" => opts.log_filter = Some(value),
            _ => bail!("unknown option {flag}"),
        }
    }

    Ok(Parsed::Run(opts))
}

fn parse_num<T>(flag: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.parse().with_context(|| format!("{flag}: expected a number, got '{value}'"))
}

fn parse_color(flag: &str, value: &str) -> Result<Color> {
    Color::from_hex(value).with_context(|| format!("{flag}: expected #rrggbb[aa], got '{value}'"))
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("starbar-studio - Render a fractional star rating to PNG");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    starbar-studio [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -n, --count <n>        Number of stars (default: 5)");
    eprintln!("    -r, --rating <x>       Rating in stars (default: 3.7)");
    eprintln!("    --radius <px>          Star radius (default: 40)");
    eprintln!("    --margin <px>          Gap between stars (default: 4)");
    eprintln!("    -w, --width <px>       View width (default: 500)");
    eprintln!("    --height <px>          View height (default: 100)");
    eprintln!("    -p, --padding <px>     Padding on every side (default: 0)");
    eprintln!("    --normal <#rrggbb>     Empty star color (default: #ffff00)");
    eprintln!("    --fill <#rrggbb>       Filled star color (default: #ff0000)");
    eprintln!("    -o, --output <file>    Output PNG (default: stars.png)");
    eprintln!("    --log <filter>         env_logger filter (default: RUST_LOG or info)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Options {
        match parse(args.iter().copied()).unwrap() {
            Parsed::Run(opts) => opts,
            Parsed::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn no_args_gives_defaults() {
        assert_eq!(run(&[]), Options::default());
    }

    #[test]
    fn flags_override_defaults() {
        let opts = run(&["-n", "3", "--rating", "1.5", "--padding", "8", "--fill", "#00ff00", "-o", "x.png"]);
        assert_eq!(opts.strip.star_count, 3);
        assert_eq!(opts.strip.current_rating, 1.5);
        assert_eq!(opts.padding, Edges::all(8.0));
        assert_eq!(opts.strip.fill_color, Color::from_srgb_u8(0, 255, 0, 255));
        assert_eq!(opts.output, PathBuf::from("x.png"));
    }

    #[test]
    fn help_short_circuits() {
        assert!(matches!(parse(["--count", "2", "--help"]).unwrap(), Parsed::Help));
    }

    #[test]
    fn errors_name_the_flag() {
        let err = parse(["--radius", "big"]).err().unwrap();
        assert!(err.to_string().contains("--radius"));
        assert!(parse(["--count"]).is_err());
        assert!(parse(["--bogus", "1"]).is_err());
        assert!(parse(["--normal", "yellow"]).is_err());
    }
}
