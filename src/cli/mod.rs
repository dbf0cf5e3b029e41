mod context;
mod flags;
mod help;
mod limits;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{CliError, Context};
pub use flags::CliFlags;
pub use parse::{UsageError, parse};

/// Parse `args` and run one CLI invocation.
pub fn run(args: &[String]) -> Result<(), CliError> {
    let mut ctx = Context::new(args)?;
    ctx.run()
}

/// Process exit status for the outcome of a run.
pub fn exit_code(result: &Result<(), CliError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code(&Ok(())), 0);
        assert_eq!(exit_code(&Err(CliError::Aborted)), 1);
        assert_eq!(exit_code(&Err(UsageError::LengthTooShort(3).into())), 1);
    }

    #[test]
    fn help_and_version_succeed() {
        let args = |flag: &str| vec!["passgen".to_string(), flag.to_string()];
        assert!(run(&args("-h")).is_ok());
        assert!(run(&args("--version")).is_ok());
    }

    #[test]
    fn usage_errors_fail_the_run() {
        let args: Vec<String> = ["passgen", "-l", "3", "-s"].map(String::from).to_vec();
        let result = run(&args);
        assert_eq!(exit_code(&result), 1);
        assert_eq!(
            result.unwrap_err().to_string(),
            "Error: Password length must be at least 4 when using special characters"
        );
    }
}
