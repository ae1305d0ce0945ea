use crate::error::{Error, Result};
use crate::renderer::{RenderConfig, RenderMode};

use getopts::Options;
use log::*;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub light_x: f32,
    pub output: PathBuf,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 550,
            height: 550,
            light_x: 0.0,
            output: PathBuf::from("output/output.png"),
            render: RenderConfig::default(),
        }
    }
}

pub enum Command {
    Render(Config),
    Help(String),
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("W", "width", "image width in pixels (550)", "N");
    opts.optopt("H", "height", "image height in pixels (550)", "N");
    opts.optopt(
        "b",
        "bounces",
        "bounce limit, primary hit included (2); 0 renders the background",
        "N",
    );
    opts.optopt("l", "light-x", "light X position (0.0)", "X");
    opts.optopt(
        "m",
        "mode",
        "phong | phong-shadow | phong-reflection | phong-shadow-reflection",
        "MODE",
    );
    opts.optopt("t", "threads", "render threads (number of CPUs)", "N");
    opts.optopt("o", "output", "output PNG path (output/output.png)", "PATH");
    opts.optflag("", "help", "print this help");
    opts
}

fn parse_value<T: FromStr>(
    matches: &getopts::Matches,
    option: &'static str,
) -> Result<Option<T>> {
    match matches.opt_str(option) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidValue { option, value }),
    }
}

/// Parses command line arguments, program name excluded.
pub fn parse_args<S: AsRef<str>>(program: &str, args: &[S]) -> Result<Command> {
    let opts = options();
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    let matches = opts.parse(&args)?;
    if matches.opt_present("help") {
        let brief = format!("Usage: {} [options]", program);
        return Ok(Command::Help(opts.usage(&brief)));
    }
    if let Some(extra) = matches.free.first() {
        return Err(Error::UnexpectedArgument(extra.clone()));
    }

    let mut config = Config::default();
    if let Some(width) = parse_value(&matches, "width")? {
        config.width = width;
    }
    if let Some(height) = parse_value(&matches, "height")? {
        config.height = height;
    }
    if let Some(bounces) = parse_value::<i64>(&matches, "bounces")? {
        if bounces < 0 {
            warn!("negative bounce limit {} clamped to 0", bounces);
        }
        config.render.bounce_limit = bounces.max(0) as usize;
    }
    if let Some(light_x) = parse_value::<f32>(&matches, "light-x")? {
        if !light_x.is_finite() {
            return Err(Error::InvalidValue {
                option: "light-x",
                value: light_x.to_string(),
            });
        }
        config.light_x = light_x;
    }
    if let Some(mode) = matches.opt_str("mode") {
        config.render.mode = mode.parse::<RenderMode>()?;
    }
    if let Some(nthread) = parse_value::<usize>(&matches, "threads")? {
        if nthread == 0 {
            warn!("0 threads requested, using 1");
        }
        config.render.nthread = nthread.max(1);
    }
    if let Some(output) = matches.opt_str("output") {
        config.output = PathBuf::from(output);
    }
    Ok(Command::Render(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_config(args: &[&str]) -> Config {
        match parse_args("phongtrace", args).unwrap() {
            Command::Render(config) => config,
            Command::Help(_) => panic!("unexpected help"),
        }
    }

    #[test]
    fn defaults() {
        let config = render_config(&[]);
        assert_eq!((config.width, config.height), (550, 550));
        assert_eq!(config.light_x, 0.0);
        assert_eq!(config.render.bounce_limit, 2);
        assert_eq!(config.render.mode, RenderMode::PhongShadowReflection);
        assert!(config.render.nthread >= 1);
        assert_eq!(config.output, PathBuf::from("output/output.png"));
    }

    #[test]
    fn all_options() {
        let config = render_config(&[
            "-W", "64", "--height", "32", "-b", "4", "--light-x=-2.5", "-m", "phong-shadow",
            "-t", "3", "-o", "out.png",
        ]);
        assert_eq!((config.width, config.height), (64, 32));
        assert_eq!(config.render.bounce_limit, 4);
        assert_eq!(config.light_x, -2.5);
        assert_eq!(config.render.mode, RenderMode::PhongShadow);
        assert_eq!(config.render.nthread, 3);
        assert_eq!(config.output, PathBuf::from("out.png"));
    }

    #[test]
    fn negative_bounces_clamp_to_zero() {
        assert_eq!(render_config(&["--bounces=-3"]).render.bounce_limit, 0);
    }

    #[test]
    fn zero_threads_become_one() {
        assert_eq!(render_config(&["-t", "0"]).render.nthread, 1);
    }

    #[test]
    fn help() {
        match parse_args("phongtrace", &["--help"]).unwrap() {
            Command::Help(usage) => assert!(usage.contains("--light-x")),
            Command::Render(_) => panic!("expected help"),
        }
    }

    #[test]
    fn errors() {
        assert!(matches_err(&["-W", "wide"]));
        assert!(matches_err(&["--mode", "toon"]));
        assert!(matches_err(&["--unknown"]));
        assert!(matches_err(&["-l", "NaN"]));
        assert!(matches_err(&["stray"]));
    }

    fn matches_err(args: &[&str]) -> bool {
        parse_args("phongtrace", args).is_err()
    }
}
