mod output;

use opt_parse_core::{Opt, parse_cmd_line};
use tracing::debug;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::output::{DemoSettings, OutputFormat, format_settings};

/// Exit status when usage was shown, either on request or for a bad option.
const USAGE_EXIT_CODE: i32 = 2;

/// What one run of the option parser resolved.
#[derive(Debug)]
struct Parsed {
    valid: bool,
    settings: DemoSettings,
    format: OutputFormat,
    bad_screen: Option<String>,
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(USAGE_EXIT_CODE),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &[String]) -> Result<bool, String> {
    let parsed = parse_args(args).map_err(|err| err.to_string())?;
    debug!(?parsed, "Resolved command line");

    if !parsed.valid {
        return Ok(false);
    }
    if let Some(arg) = parsed.bad_screen {
        return Err(format!("invalid screen size: {arg}"));
    }

    print!("{}", format_settings(&parsed.settings, parsed.format)?);
    Ok(true)
}

fn parse_args(args: &[String]) -> opt_parse_core::Result<Parsed> {
    let mut settings = DemoSettings::default();
    let mut format = OutputFormat::default();
    let mut bad_screen = None;

    let valid = parse_cmd_line(
        args,
        &mut [
            Opt::new("--server=(.*)", "address of server to connect to", |m| {
                settings.server_address = m[1].to_string();
            })?,
            Opt::new(
                "--reverseFluxPolarity",
                "operate with flux polarity reversed",
                |_| settings.reverse_flux_polarity = true,
            )?,
            Opt::new(
                "--screen=([0-9]+)x([0-9]+)",
                "screen width and height in pixels",
                |m| match (m.parse::<u32>(1), m.parse::<u32>(2)) {
                    (Ok(width), Ok(height)) => {
                        settings.window_width = width;
                        settings.window_height = height;
                    }
                    _ => bad_screen = Some(m.as_str().to_string()),
                },
            )?,
            Opt::new(
                "--format=(json|yaml|text)",
                "output format for the resolved settings",
                |m| {
                    if let Ok(parsed) = m[1].parse::<OutputFormat>() {
                        format = parsed;
                    }
                },
            )?,
        ],
    );

    Ok(Parsed {
        valid,
        settings,
        format,
        bad_screen,
    })
}
