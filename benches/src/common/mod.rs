use std::fs::File;
use std::io::Write;
use std::path::Path;

const DASHES: [char; 4] = ['-', '\u{2013}', '\u{2014}', '\u{2212}'];

/// Generate `num_lines` lines of `tokens_per_line` integers
///
/// Every fourth token is negative, using a rotating dash variant as its sign.
pub fn generate_lines(num_lines: usize, tokens_per_line: usize) -> Vec<String> {
    (0..num_lines)
        .map(|line| {
            (0..tokens_per_line)
                .map(|t| {
                    let value = (line * tokens_per_line + t) % 10_000;
                    if t % 4 == 3 {
                        format!("{}{}", DASHES[line % DASHES.len()], value)
                    } else {
                        value.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Generate lines and write them to a file
pub fn generate_file<P: AsRef<Path>>(
    path: P,
    num_lines: usize,
    tokens_per_line: usize,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    for line in generate_lines(num_lines, tokens_per_line) {
        writeln!(file, "{line}")?;
    }
    Ok(())
}
