// SPDX-License-Identifier: MPL-2.0
use nutrascan::app::{self, config, paths, Flags};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
NutraScan: snap a meal, get its nutrition facts

USAGE:
  nutrascan [OPTIONS]

OPTIONS:
  --lang <LOCALE>            UI language (e.g. en-US, fr)
  --config-dir <DIR>         Directory holding settings.toml
  --endpoint <URL>           Recognition service base URL
  --source <PATH>            Image file or directory used as camera frames
  --diagnostics-out <FILE>   Write a JSON diagnostics report after each error
  -h, --help                 Print this help
";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    endpoint: Option<String>,
    source: Option<PathBuf>,
    diagnostics_out: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        source: args.opt_value_from_str("--source")?,
        diagnostics_out: args.opt_value_from_str("--diagnostics-out")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("[WARN] Ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("[ERROR] {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(args.config_dir);

    let (mut config, config_warning) = config::load();
    if let Some(endpoint) = args.endpoint {
        config.recognition.base_url = endpoint;
    }
    if let Some(source) = args.source {
        config.camera.source = Some(source);
    }

    let (services, mut warnings) = match app::services_from_config(&config) {
        Ok(built) => built,
        Err(err) => {
            eprintln!("[ERROR] Failed to set up the recognition client: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(key) = config_warning {
        warnings.insert(0, key);
    }

    let flags = Flags {
        lang: args.lang,
        diagnostics_out: args.diagnostics_out,
        config,
        warnings,
        services,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[ERROR] {err}");
            ExitCode::FAILURE
        }
    }
}
