use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::info;

use mugkit::{
    convert, extract_document, init_logging, ConversionError, ConversionParams, GcodeParams,
    GcodeWriter,
};

const USAGE: &str = "\
Usage: mugkit <input.svg> [options]

Options:
  -o, --output <FILE>         Write G-code to FILE instead of stdout
      --params <FILE>         Load conversion parameters from a JSON profile
      --circumference <MM>    Usable mug circumference (default 280)
      --height <MM>           Drawable mug height (default 80)
      --x-offset <MM>         Horizontal offset on the surface (default 0)
      --y-offset <MM>         Vertical offset on the surface (default 0)
      --extrusion-rate <R>    Extrusion per mm of chord (default 1.0)
  -h, --help                  Show this help
  -V, --version               Show version
";

struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    params: ConversionParams,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Option<Self>> {
        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut params: Option<ConversionParams> = None;
        let mut overrides: Vec<(&'static str, f64)> = Vec::new();

        while let Some(arg) = args.next() {
            let mut value = |name: &str| -> Result<String> {
                args.next()
                    .with_context(|| format!("{} requires a value", name))
            };
            match arg.as_str() {
                "-h" | "--help" => {
                    print!("{}", USAGE);
                    return Ok(None);
                }
                "-V" | "--version" => {
                    println!("mugkit {}", mugkit::VERSION);
                    return Ok(None);
                }
                "-o" | "--output" => output = Some(PathBuf::from(value("--output")?)),
                "--params" => {
                    let path = value("--params")?;
                    let json = std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read parameter profile {}", path))?;
                    params = Some(
                        serde_json::from_str(&json)
                            .with_context(|| format!("invalid parameter profile {}", path))?,
                    );
                }
                "--circumference" => {
                    overrides.push(("circumference", parse_number(&value("--circumference")?)?))
                }
                "--height" => overrides.push(("height", parse_number(&value("--height")?)?)),
                "--x-offset" => overrides.push(("x-offset", parse_number(&value("--x-offset")?)?)),
                "--y-offset" => overrides.push(("y-offset", parse_number(&value("--y-offset")?)?)),
                "--extrusion-rate" => {
                    overrides.push(("extrusion-rate", parse_number(&value("--extrusion-rate")?)?))
                }
                other if other.starts_with('-') => bail!("unknown option: {}\n\n{}", other, USAGE),
                _ => {
                    if input.is_some() {
                        bail!("more than one input file given\n\n{}", USAGE);
                    }
                    input = Some(PathBuf::from(arg));
                }
            }
        }

        let Some(input) = input else {
            bail!("no input file given\n\n{}", USAGE);
        };

        let mut params = params.unwrap_or_default();
        for (name, v) in overrides {
            match name {
                "circumference" => params.projection.circumference_mm = v,
                "height" => params.projection.height_mm = v,
                "x-offset" => params.projection.x_offset_mm = v,
                "y-offset" => params.projection.y_offset_mm = v,
                "extrusion-rate" => params.extrusion_rate = v,
                _ => unreachable!(),
            }
        }

        Ok(Some(Self {
            input,
            output,
            params,
        }))
    }
}

fn parse_number(value: &str) -> Result<f64> {
    value
        .parse()
        .with_context(|| format!("not a number: {}", value))
}

fn run(args: CliArgs) -> Result<ExitCode> {
    let svg = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let document = extract_document(&svg)?;

    let commands = match convert(&document, &args.params) {
        Ok(commands) => commands,
        Err(ConversionError::EmptyDocument) => {
            eprintln!(
                "{}: nothing to convert (no drawable paths)",
                args.input.display()
            );
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => return Err(err.into()),
    };

    let gcode = GcodeWriter::new(GcodeParams::default()).write(&commands, &args.params.projection);
    match &args.output {
        Some(path) => std::fs::write(path, &gcode)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", gcode),
    }

    info!(
        input = %args.input.display(),
        commands = commands.len(),
        "conversion complete"
    );
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("failed to initialize logging: {:#}", err);
        return ExitCode::FAILURE;
    }

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
