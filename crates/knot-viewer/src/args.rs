//! Command-line parsing for `knot_viewer`.

use std::path::PathBuf;

use knot_core::{KnotError, Validate};
use knot_geometry::{CurveParameters, FrameMode, KnotFamily};

/// What the tool should do once the mesh is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Summary,
    Json(PathBuf),
    Binary(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub command: Command,
    pub params: CurveParameters,
    pub frame_mode: FrameMode,
}

/// Parse `args` (without the program name).
///
/// `--params` is applied first so individual flags override the file.
pub fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut command = None;
    let mut params_file = None;
    let mut overrides: Vec<(&str, &str)> = Vec::new();
    let mut frame_mode = FrameMode::ArbitraryAxis;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .map(String::as_str)
                .ok_or_else(|| format!("{} requires a value", flag))
        };
        match arg.as_str() {
            "--help" | "-h" => command = Some(Command::Help),
            "--summary" => command = Some(Command::Summary),
            "--json" => command = Some(Command::Json(PathBuf::from(value("--json")?))),
            "--bin" => command = Some(Command::Binary(PathBuf::from(value("--bin")?))),
            "--params" => params_file = Some(PathBuf::from(value("--params")?)),
            "--rmf" => frame_mode = FrameMode::RotationMinimizing,
            flag @ ("--family" | "--scale" | "--radius" | "--resolution" | "--segments" | "--p"
            | "--q" | "--nx" | "--ny" | "--nz" | "--star-points" | "--star-skip") => {
                overrides.push((flag, value(flag)?));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    let command = command.ok_or("Missing command: one of --summary, --json, --bin")?;
    if command == Command::Help {
        return Ok(CliOptions {
            command,
            params: CurveParameters::default(),
            frame_mode,
        });
    }

    let mut params = match &params_file {
        Some(path) => CurveParameters::from_json_file(path).map_err(|e| describe(&e))?,
        None => CurveParameters::default(),
    };
    for (flag, value) in overrides {
        apply_override(&mut params, flag, value)?;
    }
    params.validate().map_err(|e| describe(&e))?;

    Ok(CliOptions {
        command,
        params,
        frame_mode,
    })
}

fn apply_override(params: &mut CurveParameters, flag: &str, value: &str) -> Result<(), String> {
    fn num<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
        value
            .parse()
            .map_err(|_| format!("Invalid value for {}: {}", flag, value))
    }

    match flag {
        "--family" => params.family = value.parse::<KnotFamily>().map_err(|e| describe(&e))?,
        "--scale" => params.scale = num(flag, value)?,
        "--radius" => params.tube_radius = num(flag, value)?,
        "--resolution" => params.resolution = num(flag, value)?,
        "--segments" => params.radial_segments = num(flag, value)?,
        "--p" => params.p = num(flag, value)?,
        "--q" => params.q = num(flag, value)?,
        "--nx" => params.nx = num(flag, value)?,
        "--ny" => params.ny = num(flag, value)?,
        "--nz" => params.nz = num(flag, value)?,
        "--star-points" => params.star_points = num(flag, value)?,
        "--star-skip" => params.star_skip = num(flag, value)?,
        _ => return Err(format!("Unknown argument: {}", flag)),
    }
    Ok(())
}

fn describe(err: &KnotError) -> String {
    match err {
        KnotError::UnsupportedCurveFamily(name) => {
            let known: Vec<&str> = KnotFamily::ALL.iter().map(|f| f.name()).collect();
            format!("Unknown knot family '{}' (expected one of: {})", name, known.join(", "))
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_summary_defaults() {
        let opts = parse_args(&args("--summary")).unwrap();
        assert_eq!(opts.command, Command::Summary);
        assert_eq!(opts.params, CurveParameters::default());
        assert_eq!(opts.frame_mode, FrameMode::ArbitraryAxis);
    }

    #[test]
    fn test_overrides() {
        let opts = parse_args(&args(
            "--json out.json --family torus-knot --p 3 --q 7 --scale 1.5 --resolution 64 --segments 12 --rmf",
        ))
        .unwrap();
        assert_eq!(opts.command, Command::Json(PathBuf::from("out.json")));
        assert_eq!(opts.params.family, KnotFamily::TorusKnot);
        assert_eq!((opts.params.p, opts.params.q), (3, 7));
        assert_eq!(opts.params.scale, 1.5);
        assert_eq!((opts.params.resolution, opts.params.radial_segments), (64, 12));
        assert_eq!(opts.frame_mode, FrameMode::RotationMinimizing);
    }

    #[test]
    fn test_params_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("knot.json");
        std::fs::write(&path, r#"{ "family": "lissajous", "nx": 5, "scale": 2.0 }"#).unwrap();

        let line = format!("--bin out.bin --params {} --scale 4", path.display());
        let opts = parse_args(&args(&line)).unwrap();
        assert_eq!(opts.params.family, KnotFamily::Lissajous);
        assert_eq!(opts.params.nx, 5);
        assert_eq!(opts.params.scale, 4.0);
    }

    #[test]
    fn test_help_ignores_parameters() {
        let opts = parse_args(&args("--help --params does-not-exist.json --resolution 0")).unwrap();
        assert_eq!(opts.command, Command::Help);
        assert_eq!(opts.params, CurveParameters::default());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let line = format!("--params {} -h", path.display());
        assert_eq!(parse_args(&args(&line)).unwrap().command, Command::Help);
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(&[]).unwrap_err().contains("Missing command"));
        assert!(parse_args(&args("--summary --bogus")).unwrap_err().contains("--bogus"));
        assert!(parse_args(&args("--json")).unwrap_err().contains("requires a value"));
        assert!(parse_args(&args("--summary --scale abc")).unwrap_err().contains("--scale"));
        assert!(parse_args(&args("--summary --family unknot"))
            .unwrap_err()
            .contains("Unknown knot family 'unknot'"));
        assert!(parse_args(&args("--summary --resolution 0"))
            .unwrap_err()
            .contains("Invalid resolution"));
    }
}
