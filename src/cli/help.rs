use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("Passgen"),
        box_line_center("Random passwords without look-alike characters"),
        box_line(""),
        box_line("Every password holds at least one uppercase letter, one"),
        box_line("lowercase letter and one digit, plus one special character"),
        box_line("with -s. The characters 0, O, I, l and 1 never appear."),
        box_line(""),
        box_line("USAGE:"),
        box_line("  passgen [OPTIONS]"),
        box_line(""),
        box_line("OPTIONS:"),
        box_line(" Password:"),
    ];
    lines.extend(box_opt("  -l, --length <N>", "Characters per password, 3-128 (default: 12)"));
    lines.extend(box_opt("  -s, --special", "Include special characters (needs length 4+)"));
    lines.extend(box_opt("      --no-special", "Letters and digits only"));
    lines.extend(box_opt("  -c, --count <N>", "How many passwords, 1-100 (default: 1)"));
    lines.push(box_line(""));
    lines.push(box_line(" Output:"));
    lines.extend(box_opt("  -b, --board", "Copy to clipboard instead of printing"));
    lines.extend(box_opt("  -q, --quiet", "Print bare passwords only, no banner or numbering"));
    lines.push(box_line(""));
    lines.push(box_line(" Info:"));
    lines.extend(box_opt("  -h, --help", "Display this help message"));
    lines.extend(box_opt("  -v, --version", "Display version"));
    lines.push(box_line(""));
    lines.push(box_line("EXAMPLES:"));
    lines.extend(box_opt("  passgen", "One 12-character password"));
    lines.extend(box_opt("  passgen -l 16 -s", "16 characters with special characters"));
    lines.extend(box_opt("  passgen -l 10 -c 5", "Five 10-character passwords"));
    lines.push(box_bottom());
    lines
}

pub fn print_help() {
    println!("{}", help_lines().join("\n"));
}
