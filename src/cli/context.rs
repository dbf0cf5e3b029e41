//! CLI context - bundles settings and flags, runs one invocation.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use passgen::entropy::{self, SecureRandom};
use passgen::pass::{SecureBufWriter, output};
use passgen::Request;

use super::{CliFlags, UsageError, help, limits, prompts, quiet};
use crate::settings::Settings;

/// Anything that ends a run with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error: {0}")]
    Usage(#[from] UsageError),
    #[error("Error generating password: {0}")]
    Generate(#[from] passgen::Error),
    #[error("Error: cannot write output: {0}")]
    Output(#[from] io::Error),
    #[error("Aborted.")]
    Aborted,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, UsageError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        Ok(Self {
            settings: Settings::default(),
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if self.handle_info_flags() {
            return Ok(());
        }
        let request = self.apply_flags()?;
        let passwords = self.generate_passwords(&mut entropy::os(), &request)?;
        self.deliver(&request, &passwords)
    }

    /// Help and version short-circuit everything else.
    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            help::print_help();
            return true;
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Layer explicit flags over the defaults, then enforce the CLI limits.
    fn apply_flags(&mut self) -> Result<Request, CliError> {
        let defaults = Settings::default();
        let length = self
            .flags
            .length
            .unwrap_or(defaults.pass_length as isize);
        let count = self
            .flags
            .count
            .unwrap_or(defaults.number_of_passwords as isize);
        let special = self.flags.special.unwrap_or(defaults.include_special);

        let (length, count) = limits::check(length, count, special)?;
        self.settings = Settings {
            pass_length: length,
            number_of_passwords: count,
            include_special: special,
        };

        debug!(length, count, special, "effective settings");
        Ok(Request::new(length, special)?)
    }

    fn generate_passwords<R: SecureRandom + ?Sized>(
        &self,
        rng: &mut R,
        request: &Request,
    ) -> Result<Vec<Zeroizing<String>>, CliError> {
        let count = self.settings.number_of_passwords;
        Ok(passgen::generate_batch(rng, request, count)?)
    }

    /// Hand passwords to the clipboard, or print them when that is not
    /// requested or not possible.
    fn deliver(&self, request: &Request, passwords: &[Zeroizing<String>]) -> Result<(), CliError> {
        let copied = self.flags.clipboard.then(|| copy_to_clipboard(passwords));
        let stdout = io::stdout();
        let mut out = SecureBufWriter::new(stdout.lock());
        self.deliver_to(
            &mut out,
            request,
            passwords,
            copied,
            prompts::clipboard_fallback_prompt,
        )?;
        out.flush()?;
        Ok(())
    }

    /// `copied` is the clipboard outcome, `None` when `-b` was not given.
    /// A failed copy prints instead only if `fallback` agrees.
    fn deliver_to<W: Write>(
        &self,
        out: &mut W,
        request: &Request,
        passwords: &[Zeroizing<String>],
        copied: Option<Result<(), String>>,
        fallback: impl FnOnce() -> bool,
    ) -> Result<(), CliError> {
        match copied {
            Some(Ok(())) => {
                prompts::clipboard_copied(passwords.len());
                return Ok(());
            }
            Some(Err(e)) => {
                prompts::clipboard_error(&e);
                if !fallback() {
                    return Err(CliError::Aborted);
                }
            }
            None => {}
        }
        self.print(out, request, passwords)?;
        Ok(())
    }

    fn print<W: Write>(
        &self,
        out: &mut W,
        request: &Request,
        passwords: &[Zeroizing<String>],
    ) -> io::Result<()> {
        output::write_listing(out, request, passwords, self.flags.quiet)
    }
}

fn copy_to_clipboard(passwords: &[Zeroizing<String>]) -> Result<(), String> {
    let mut ctx = ClipboardContext::new().map_err(|e| e.to_string())?;
    let mut all = output::joined(passwords);
    // Hand over the buffer itself; the clipboard owns the only other copy.
    ctx.set_contents(std::mem::take(&mut *all))
        .map_err(|e| e.to_string())?;
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{CryptoRng, RngCore, SeedableRng};

    /// A source whose entropy is always unavailable.
    struct Drained;

    impl RngCore for Drained {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("no entropy"))
        }
    }

    impl CryptoRng for Drained {}

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context::new(&args).unwrap()
    }

    fn usage_error(list: &[&str]) -> UsageError {
        match context(list).apply_flags() {
            Err(CliError::Usage(e)) => e,
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn plain_invocation_uses_defaults() {
        let mut ctx = context(&[]);
        let request = ctx.apply_flags().unwrap();
        assert_eq!(request, Request::new(12, false).unwrap());
        assert_eq!(ctx.settings.number_of_passwords, 1);
        assert_eq!(ctx.settings, Settings::default());
    }

    #[test]
    fn flags_override_defaults() {
        let mut ctx = context(&["-l", "20", "-s", "-c", "3"]);
        let request = ctx.apply_flags().unwrap();
        assert_eq!(request, Request::new(20, true).unwrap());
        assert_eq!(ctx.settings.number_of_passwords, 3);
    }

    #[test]
    fn limit_violations() {
        assert_eq!(usage_error(&["-l", "3", "-s"]), UsageError::SpecialTooShort(4));
        assert_eq!(usage_error(&["-l", "2"]), UsageError::LengthTooShort(3));
        assert_eq!(usage_error(&["-l", "129"]), UsageError::LengthTooLong(128));
        assert_eq!(usage_error(&["-c", "0"]), UsageError::CountTooSmall(1));
        assert_eq!(usage_error(&["-c", "101"]), UsageError::CountTooLarge(100));
    }

    #[test]
    fn length_is_checked_before_count_and_special() {
        assert_eq!(usage_error(&["-l", "2", "-c", "0", "-s"]), UsageError::LengthTooShort(3));
        assert_eq!(usage_error(&["-l", "3", "-c", "0", "-s"]), UsageError::CountTooSmall(1));
    }

    #[test]
    fn generates_the_requested_count() {
        let mut ctx = context(&["-l", "16", "-c", "5"]);
        let request = ctx.apply_flags().unwrap();
        let passwords = ctx
            .generate_passwords(&mut StdRng::seed_from_u64(5), &request)
            .unwrap();
        assert_eq!(passwords.len(), 5);
        assert!(passwords.iter().all(|p| p.len() == 16));
    }

    #[test]
    fn entropy_failure_is_a_generation_error() {
        let mut ctx = context(&[]);
        let request = ctx.apply_flags().unwrap();
        let err = ctx.generate_passwords(&mut Drained, &request).unwrap_err();
        assert!(matches!(err, CliError::Generate(ref e) if e.is_entropy()));
        assert!(err.to_string().starts_with("Error generating password: "));
        assert_eq!(crate::cli::exit_code(&Err(err)), 1);
    }

    #[test]
    fn listing_is_numbered_from_one() {
        let mut ctx = context(&["-c", "3"]);
        let request = ctx.apply_flags().unwrap();
        let passwords = ctx
            .generate_passwords(&mut StdRng::seed_from_u64(8), &request)
            .unwrap();

        let mut out = Vec::new();
        ctx.print(&mut out, &request, &passwords).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Generated passwords:");
        let listed = &lines[lines.len() - 3..];
        for (i, (line, password)) in listed.iter().zip(&passwords).enumerate() {
            assert_eq!(*line, format!("{}: {}", i + 1, password.as_str()));
        }
    }

    #[test]
    fn quiet_listing_has_no_banner() {
        let mut ctx = context(&["-q", "-c", "2"]);
        let request = ctx.apply_flags().unwrap();
        let passwords = ctx
            .generate_passwords(&mut StdRng::seed_from_u64(8), &request)
            .unwrap();

        let mut out = Vec::new();
        ctx.print(&mut out, &request, &passwords).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().zip(&passwords).all(|(l, p)| l == p.as_str()));
    }

    fn sample(ctx: &mut Context) -> (Request, Vec<Zeroizing<String>>) {
        let request = ctx.apply_flags().unwrap();
        let passwords = ctx
            .generate_passwords(&mut StdRng::seed_from_u64(13), &request)
            .unwrap();
        (request, passwords)
    }

    #[test]
    fn failed_clipboard_write_falls_back_to_the_listing() {
        let mut ctx = context(&["-b", "-q", "-c", "2"]);
        let (request, passwords) = sample(&mut ctx);

        let mut out = Vec::new();
        let copied = Some(Err("selection owner went away".to_string()));
        ctx.deliver_to(&mut out, &request, &passwords, copied, || true)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().zip(&passwords).all(|(l, p)| l == p.as_str()));
    }

    #[test]
    fn declined_fallback_aborts_with_failure() {
        let mut ctx = context(&["-b"]);
        let (request, passwords) = sample(&mut ctx);

        let mut out = Vec::new();
        let copied = Some(Err("no display".to_string()));
        let result = ctx.deliver_to(&mut out, &request, &passwords, copied, || false);
        assert!(out.is_empty());
        assert!(matches!(result, Err(CliError::Aborted)));
        assert_eq!(crate::cli::exit_code(&result), 1);
    }

    #[test]
    fn successful_copy_prints_nothing() {
        let mut ctx = context(&["-b", "-q"]);
        let (request, passwords) = sample(&mut ctx);

        let mut out = Vec::new();
        ctx.deliver_to(&mut out, &request, &passwords, Some(Ok(())), || {
            panic!("no fallback after a successful copy")
        })
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn without_clipboard_the_listing_is_printed() {
        let mut ctx = context(&["-q"]);
        let (request, passwords) = sample(&mut ctx);

        let mut out = Vec::new();
        ctx.deliver_to(&mut out, &request, &passwords, None, || {
            panic!("no fallback without -b")
        })
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
