use std::process::ExitCode;

use anyhow::Result;

use workflow_validator::config::Config;
use workflow_validator::report::print_summary;
use workflow_validator::validation::Validator;

fn init_logging(config: &Config) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
}

fn main() -> Result<ExitCode> {
    let config = Config::from_cli()?;

    if config.is_usage_error() {
        println!("{}", Config::usage());
        return Ok(ExitCode::FAILURE);
    }

    init_logging(&config);
    log::debug!("validating {} path(s)", config.paths.len());

    let mut validator = Validator::new(config.verbose);
    let all_valid = validator.run(&config.paths);
    let result = validator.into_result();

    print_summary(&result);

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
