use thiserror::Error;

use super::CliFlags;

/// Problems with the command line itself. Reported, never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Password length must be at least {0}")]
    LengthTooShort(usize),
    #[error("Password length cannot exceed {0}")]
    LengthTooLong(usize),
    #[error("Count must be at least {0}")]
    CountTooSmall(usize),
    #[error("Count cannot exceed {0}")]
    CountTooLarge(usize),
    #[error("Password length must be at least {0} when using special characters")]
    SpecialTooShort(usize),
}

pub fn parse(args: &[String]) -> Result<CliFlags, UsageError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--special" => flags.special = Some(true),
            "--no-special" => flags.special = Some(false),
            flag @ ("-l" | "--length") => {
                i += 1;
                flags.length = Some(number(flag, args.get(i))?);
            }
            flag @ ("-c" | "--count") => {
                i += 1;
                flags.count = Some(number(flag, args.get(i))?);
            }
            arg => return Err(UsageError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number(flag: &str, value: Option<&String>) -> Result<isize, UsageError> {
    let value = value.ok_or_else(|| UsageError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| UsageError::InvalidNumber {
        flag: flag.to_string(),
        value: value.clone(),
    })
}
