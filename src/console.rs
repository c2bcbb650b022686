//! Prompt helpers for the interactive programs
//!
//! Both helpers keep asking until the answer is acceptable. They read from any
//! [`BufRead`] so they can be driven by a script in tests; running out of input
//! is reported as [`io::ErrorKind::UnexpectedEof`].

use std::io::{self, BufRead, Write};

/// Asks `question` until the (trimmed, lower-cased) answer is one of `options`
pub fn ask_choice<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    question: &str,
    options: &[&str],
) -> io::Result<String> {
    writeln!(output, "{}", question)?;
    loop {
        let answer = read_answer(input, output)?.to_lowercase();
        if options.iter().any(|option| option.eq_ignore_ascii_case(&answer)) {
            return Ok(answer);
        }
    }
}

/// Asks `question` until the answer is a number within `[lower, upper]`
pub fn ask_bounded_f64<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    question: &str,
    lower: f64,
    upper: f64,
) -> io::Result<f64> {
    writeln!(output, "{}", question)?;
    loop {
        if let Ok(value) = read_answer(input, output)?.parse::<f64>() {
            if value >= lower && value <= upper {
                return Ok(value);
            }
        }
    }
}

fn read_answer<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> io::Result<String> {
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no more input"));
    }
    Ok(line.trim().to_string())
}
