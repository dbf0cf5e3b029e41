//! Password output: banner and numbered listing.

use std::io::{self, Write};

use zeroize::Zeroizing;

use super::charset::EXCLUDED;
use super::Request;

/// Write the header describing what was generated.
pub fn write_banner<W: Write>(out: &mut W, request: &Request, count: usize) -> io::Result<()> {
    let plural = if count > 1 { "s" } else { "" };
    let sets = request
        .classes()
        .iter()
        .map(|class| class.name())
        .collect::<Vec<_>>()
        .join(", ");
    let excluded = EXCLUDED
        .iter()
        .map(|&c| (c as char).to_string())
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out, "Generated password{plural}:")?;
    writeln!(out, "Length: {} characters", request.length())?;
    writeln!(out, "Character sets: {sets}")?;
    writeln!(out, "Excluded similar characters: {excluded}")?;
    writeln!(out)
}

/// Write passwords one per line, optionally prefixed with a 1-based index.
pub fn write_passwords<W: Write>(
    out: &mut W,
    passwords: &[Zeroizing<String>],
    numbered: bool,
) -> io::Result<()> {
    let mut line = Zeroizing::new(String::new());
    for (i, password) in passwords.iter().enumerate() {
        line.clear();
        if numbered {
            line.push_str(&(i + 1).to_string());
            line.push_str(": ");
        }
        line.push_str(password);
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Banner plus numbered passwords, or bare passwords in quiet mode.
pub fn write_listing<W: Write>(
    out: &mut W,
    request: &Request,
    passwords: &[Zeroizing<String>],
    quiet: bool,
) -> io::Result<()> {
    if !quiet {
        write_banner(out, request, passwords.len())?;
    }
    write_passwords(out, passwords, !quiet)
}

/// Newline-joined passwords, for the clipboard.
pub fn joined(passwords: &[Zeroizing<String>]) -> Zeroizing<String> {
    let mut all = Zeroizing::new(String::new());
    for password in passwords {
        all.push_str(password);
        all.push('\n');
    }
    all
}
