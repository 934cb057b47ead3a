//! fat_tail_moments CLI: estimate `<|x|^(1/4)>` and `<|x|^(1/2)>` of a Cauchy
//! distribution by sampling and compare them with the integrated values.
//!
//! Options:
//!   --location=<x0>           Location of the Cauchy distribution (default: 2.34)
//!   --scale=<gamma>           Scale of the Cauchy distribution (default: 5.67)
//!   --batches=<B>             Number of batches (default: 100)
//!   --batch-size=<N>          Samples per batch (default: 100000)
//!   --upper-bound=<U>         Truncation of the integration domain (default: 1000)
//!   --tolerance=<eps>         Absolute tolerance of the integration (default: 1e-9)
//!   --bins=<n>                Bins of the histograms (default: 50)
//!   --seed=<u64>              Seed of the random generator
//!   --parallel                Compute the batches in parallel
//!   --json                    Also print the report as JSON
//!   --histogram-dir=<path>    Write the histograms as PNG files in this directory
//!   --quiet                   Do not print the text histograms
//!
//! Logging is configured with `RUST_LOG` (for example `RUST_LOG=info`).

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use FatTailMoments::{
    report::StudyReport,
    study::{StudyConfig, run_study},
};

/// CLI configuration parsed from command-line arguments.
struct CliConfig {
    study: StudyConfig,
    json: bool,
    quiet: bool,
    histogram_dir: Option<PathBuf>,
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, String> {
    return value
        .parse::<T>()
        .map_err(|_| format!("Invalid value for --{key}: {value}"));
}

fn parse_args<I: Iterator<Item = String>>(args: I) -> Result<CliConfig, String> {
    let mut config: CliConfig = CliConfig {
        study: StudyConfig::default(),
        json: false,
        quiet: false,
        histogram_dir: None,
    };

    for arg in args {
        let Some(option) = arg.strip_prefix("--") else {
            return Err(format!("Unexpected argument: {arg}"));
        };
        let (key, value): (&str, Option<&str>) = match option.split_once('=') {
            Some((k, v)) => (k, Some(v)),
            None => (option, None),
        };

        match (key, value) {
            ("location", Some(v)) => config.study.location = parse_value(key, v)?,
            ("scale", Some(v)) => config.study.scale = parse_value(key, v)?,
            ("batches", Some(v)) => config.study.batch_count = parse_value(key, v)?,
            ("batch-size", Some(v)) => config.study.batch_size = parse_value(key, v)?,
            ("upper-bound", Some(v)) => config.study.upper_bound = parse_value(key, v)?,
            ("tolerance", Some(v)) => config.study.tolerance = parse_value(key, v)?,
            ("bins", Some(v)) => config.study.bins = parse_value(key, v)?,
            ("seed", Some(v)) => config.study.seed = parse_value(key, v)?,
            ("histogram-dir", Some(v)) => config.histogram_dir = Some(PathBuf::from(v)),
            ("parallel", None) => config.study.parallel = true,
            ("json", None) => config.json = true,
            ("quiet", None) => config.quiet = true,
            ("help", None) => return Err(usage()),
            _ => return Err(format!("Unknown option: {arg}\n\n{}", usage())),
        }
    }

    return Ok(config);
}

fn usage() -> String {
    return "Usage: fat_tail_moments [--location=<x0>] [--scale=<gamma>] [--batches=<B>] \
            [--batch-size=<N>] [--upper-bound=<U>] [--tolerance=<eps>] [--bins=<n>] \
            [--seed=<u64>] [--parallel] [--json] [--histogram-dir=<path>] [--quiet]"
        .to_string();
}

fn main() -> ExitCode {
    env_logger::init();

    let config: CliConfig = match parse_args(std::env::args().skip(1)) {
        Ok(c) => c,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let report: StudyReport = match run_study(&config.study) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{report}");

    if !config.quiet {
        println!("{}", report.render_histograms());
    }

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: could not serialize the report: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(dir) = &config.histogram_dir {
        match report.save_histograms(dir) {
            Ok(paths) => {
                for path in paths {
                    println!("Histogram written to {}", path.display());
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    return ExitCode::SUCCESS;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        return list
            .iter()
            .map(|s: &&str| (*s).to_string())
            .collect::<Vec<String>>()
            .into_iter();
    }

    #[test]
    fn parse_defaults() {
        let config: CliConfig = parse_args(args(&[])).unwrap();
        assert_eq!(config.study, StudyConfig::default());
        assert!(!config.json);
        assert!(config.histogram_dir.is_none());
    }

    #[test]
    fn parse_options() {
        let config: CliConfig = parse_args(args(&[
            "--location=0",
            "--scale=1.5",
            "--batches=10",
            "--batch-size=200",
            "--seed=42",
            "--parallel",
            "--json",
            "--histogram-dir=out",
        ]))
        .unwrap();
        assert_eq!(config.study.location, 0.0);
        assert_eq!(config.study.scale, 1.5);
        assert_eq!(config.study.batch_count, 10);
        assert_eq!(config.study.batch_size, 200);
        assert_eq!(config.study.seed, 42);
        assert!(config.study.parallel);
        assert!(config.json);
        assert_eq!(config.histogram_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn parse_errors() {
        assert!(parse_args(args(&["--batches=many"])).is_err());
        assert!(parse_args(args(&["--unknown=1"])).is_err());
        assert!(parse_args(args(&["positional"])).is_err());
        assert!(parse_args(args(&["--parallel=yes"])).is_err());
    }
}
