use opt_parse_core::{Opt, ParseReport, parse_cmd_line_with};

#[derive(Debug, Default, Clone, PartialEq)]
struct Settings {
    server_address: String,
    reverse_flux_polarity: bool,
    width: u32,
    height: u32,
}

const SCREEN: &str = "--screen=([0-9]+)x([0-9]+)";

/// Runs the parser over the canonical option set, returning the report, the
/// resolved settings, and what was written to stdout and stderr.
fn parse_settings(args: &[&str]) -> (ParseReport, Settings, String, String) {
    let mut settings = Settings {
        server_address: "localhost:10000".to_string(),
        width: 1280,
        height: 1024,
        ..Settings::default()
    };
    let mut out = Vec::new();
    let mut err = Vec::new();

    let report = parse_cmd_line_with(
        args,
        &mut [
            Opt::new("--server=(.*)", "address of server to connect to", |m| {
                settings.server_address = m[1].to_string();
            })
            .unwrap(),
            Opt::new(
                "--reverseFluxPolarity",
                "operate with flux polarity reversed",
                |_| settings.reverse_flux_polarity = true,
            )
            .unwrap(),
            Opt::new(SCREEN, "screen width and height in pixels", |m| {
                settings.width = m.parse(1).unwrap();
                settings.height = m.parse(2).unwrap();
            })
            .unwrap(),
        ],
        &mut out,
        &mut err,
    )
    .unwrap();

    (
        report,
        settings,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

const USAGE: &str = "Usage: prog\n\
  \x20 --server=(.*):\taddress of server to connect to\n\
  \x20 --reverseFluxPolarity:\toperate with flux polarity reversed\n\
  \x20 --screen=([0-9]+)x([0-9]+):\tscreen width and height in pixels\n\
  \n";

// ---------------------------------------------------------------------------
// Valid arguments
// ---------------------------------------------------------------------------

#[test]
fn screen_size_is_captured_without_output() {
    let (report, settings, out, err) = parse_settings(&["prog", "--screen=1920x1080"]);

    assert!(report.is_valid());
    assert_eq!(report.matched, 1);
    assert_eq!((settings.width, settings.height), (1920, 1080));
    assert!(out.is_empty());
    assert!(err.is_empty());
}

#[test]
fn every_valid_argument_reaches_its_handler() {
    let (report, settings, out, _) = parse_settings(&[
        "prog",
        "--reverseFluxPolarity",
        "--server=example.org:80",
        "--screen=640x480",
    ]);

    assert!(report.is_valid());
    assert_eq!(report.matched, 3);
    assert!(out.is_empty());
    assert_eq!(
        settings,
        Settings {
            server_address: "example.org:80".to_string(),
            reverse_flux_polarity: true,
            width: 640,
            height: 480,
        }
    );
}

#[test]
fn handlers_run_in_argument_order() {
    let mut calls = Vec::new();
    let mut out = Vec::new();
    let mut err = Vec::new();
    {
        let calls = std::cell::RefCell::new(&mut calls);
        let report = parse_cmd_line_with(
            &["prog", "-b=2", "-a=1", "-b=3"],
            &mut [
                Opt::new("-a=(.*)", "a", |m| calls.borrow_mut().push(format!("a{}", &m[1])))
                    .unwrap(),
                Opt::new("-b=(.*)", "b", |m| calls.borrow_mut().push(format!("b{}", &m[1])))
                    .unwrap(),
            ],
            &mut out,
            &mut err,
        )
        .unwrap();
        assert!(report.is_valid());
    }
    assert_eq!(calls, vec!["b2", "a1", "b3"]);
}

#[test]
fn first_registered_match_wins() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let mut out = Vec::new();
    let mut err = Vec::new();

    let report = parse_cmd_line_with(
        &["prog", "--server=foo", "--sandbox"],
        &mut [
            Opt::new("--server=(.*)", "server", |m| first.push(m[1].to_string())).unwrap(),
            Opt::new("--s(.*)", "anything starting with s", |m| {
                second.push(m[1].to_string())
            })
            .unwrap(),
        ],
        &mut out,
        &mut err,
    )
    .unwrap();

    assert!(report.is_valid());
    assert_eq!(first, vec!["foo"]);
    assert_eq!(second, vec!["andbox"]);
}

// ---------------------------------------------------------------------------
// Unrecognised arguments and --help
// ---------------------------------------------------------------------------

#[test]
fn unrecognised_option_prints_diagnostic_and_usage() {
    let (report, _, out, err) = parse_settings(&["prog", "--bogus"]);

    assert!(!report.is_valid());
    assert!(!report.help_requested);
    assert_eq!(report.unrecognised, vec!["--bogus".to_string()]);
    assert_eq!(err, "Unrecognised option: --bogus\n");
    assert_eq!(out, USAGE);
}

#[test]
fn help_prints_usage_only() {
    let (report, _, out, err) = parse_settings(&["prog", "--help"]);

    assert!(!report.is_valid());
    assert!(report.help_requested);
    assert!(report.unrecognised.is_empty());
    assert!(err.is_empty());
    assert_eq!(out, USAGE);
}

#[test]
fn valid_arguments_around_problems_are_still_handled() {
    let (report, settings, out, err) = parse_settings(&[
        "prog",
        "--server=before",
        "--nope",
        "--help",
        "--screen=800x600",
        "--screen=800by600",
    ]);

    assert!(!report.is_valid());
    assert!(report.help_requested);
    assert_eq!(report.matched, 2);
    assert_eq!(settings.server_address, "before");
    assert_eq!((settings.width, settings.height), (800, 600));
    assert_eq!(
        err,
        "Unrecognised option: --nope\nUnrecognised option: --screen=800by600\n"
    );
    assert_eq!(out, USAGE);
}

#[test]
fn partial_matches_are_unrecognised() {
    let (report, settings, _, err) =
        parse_settings(&["prog", "--reverseFluxPolarityNow", "x--screen=1x1"]);

    assert_eq!(report.unrecognised.len(), 2);
    assert!(!settings.reverse_flux_polarity);
    assert_eq!(settings.width, 1280);
    assert!(err.contains("Unrecognised option: x--screen=1x1"));
}

#[test]
fn repeated_parse_is_identical() {
    let args = ["prog", "--screen=1x2", "--what", "--help"];
    let first = parse_settings(&args);
    let second = parse_settings(&args);

    assert_eq!(first, second);
}
