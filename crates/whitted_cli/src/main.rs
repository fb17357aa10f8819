use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use whitted_renderer::{render, save, RenderSettings};

mod demo;

const USAGE: &str = "Usage: whitted [OUTPUT] [--config FILE] [--parallel]

  OUTPUT          image to write, format picked from the extension (default: out.ppm)
  --config FILE   JSON settings: \"camera\" (width, height, fov, eye) and
                  \"render\" (max_depth, background, bias, parallel)
  --parallel      trace rows on all cores";

/// Command line options
#[derive(Debug, PartialEq)]
struct Args {
    output: PathBuf,
    config: Option<PathBuf>,
    parallel: bool,
    help: bool,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Args {
            output: PathBuf::from("out.ppm"),
            config: None,
            parallel: false,
            help: false,
        };
        let mut output = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--parallel" => parsed.parallel = true,
                "-h" | "--help" => parsed.help = true,
                "--config" => {
                    let path = args.next().context("--config needs a file path")?;
                    parsed.config = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n\n{USAGE}"),
                path => {
                    if output.replace(PathBuf::from(path)).is_some() {
                        bail!("more than one output path given\n\n{USAGE}");
                    }
                }
            }
        }

        if let Some(output) = output {
            parsed.output = output;
        }
        Ok(parsed)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut settings = match &args.config {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("failed to load render settings {}", path.display()))?,
        None => RenderSettings::default(),
    };
    settings.render.parallel |= args.parallel;

    let start = Instant::now();
    let scene = demo::build().context("failed to build demo scene")?;
    log::info!("Built scene with {} spheres in {:?}", scene.len(), start.elapsed());

    let image = render(&settings.camera, &scene, &settings.render).context("render failed")?;

    save(&image, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("Wrote {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.output, PathBuf::from("out.ppm"));
        assert_eq!(args.config, None);
        assert!(!args.parallel);
    }

    #[test]
    fn test_all_options() {
        let args = parse(&["--parallel", "render.png", "--config", "settings.json"]).unwrap();
        assert_eq!(args.output, PathBuf::from("render.png"));
        assert_eq!(args.config, Some(PathBuf::from("settings.json")));
        assert!(args.parallel);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse(&["--config"]).is_err());
        assert!(parse(&["--fast"]).is_err());
        assert!(parse(&["a.ppm", "b.ppm"]).is_err());
    }
}
