use std::io::Read;
use std::process::ExitCode;

use placement::config::PlacementConfig;
use placement::replay;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = match PlacementConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        tracing::error!(error = %e, "failed to read script from stdin");
        return ExitCode::FAILURE;
    }

    let record = match replay::parse(&input).and_then(|script| replay::run(config, script)) {
        Ok(record) => record,
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            return ExitCode::FAILURE;
        }
    };

    match record.to_json_pretty() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize save record");
            ExitCode::FAILURE
        }
    }
}
