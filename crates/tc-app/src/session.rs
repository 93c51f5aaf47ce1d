//! Piped and interactive conversion sessions.
//!
//! Both sessions read a choice line and a value line, then print exactly one
//! result or rejection line. Validation failures are reported to the user and
//! returned as [`Outcome::Rejected`]; only I/O failures surface as `Err`.

use std::io::{BufRead, Write};

use tc_core::{Conversion, Real, ensure_physical};
use tracing::{debug, info, warn};

use crate::{AppError, AppResult, format_result, parse_choice, parse_value, render_menu};

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionOptions {
    /// Reject non-finite values and values below absolute zero.
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub conversion: Conversion,
    pub value: Real,
    pub result: Real,
}

impl Reading {
    pub fn line(&self) -> String {
        format_result(self.conversion, self.value, self.result)
    }
}

#[derive(Debug)]
pub enum Outcome {
    Converted(Reading),
    Rejected(AppError),
}

impl Outcome {
    pub fn line(&self) -> String {
        match self {
            Outcome::Converted(reading) => reading.line(),
            Outcome::Rejected(err) => err.user_message(),
        }
    }
}

/// Validate a choice/value pair and run the conversion.
///
/// The value is parsed before the choice, so an unparseable value is reported
/// even when the choice is also bad.
pub fn evaluate(choice: &str, value: &str, opts: SessionOptions) -> AppResult<Reading> {
    let value = parse_value(value)?;
    let conversion = parse_choice(choice)?;
    debug!(choice = conversion.menu_index(), value, "parsed conversion request");

    if opts.strict {
        ensure_physical(value, conversion.source())?;
    }

    let result = conversion.apply(value);
    info!(%conversion, value, result, "converted");
    Ok(Reading {
        conversion,
        value,
        result,
    })
}

fn into_outcome(result: AppResult<Reading>) -> AppResult<Outcome> {
    match result {
        Ok(reading) => Ok(Outcome::Converted(reading)),
        Err(AppError::Io(err)) => Err(AppError::Io(err)),
        Err(err) => {
            warn!(error = %err, "rejected input");
            Ok(Outcome::Rejected(err))
        }
    }
}

/// Non-terminal mode: line 1 is the choice, line 2 the value; extra lines are ignored.
pub fn run_piped<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    opts: SessionOptions,
) -> AppResult<Outcome> {
    let lines = input.lines().collect::<Result<Vec<String>, _>>()?;
    debug!(line_count = lines.len(), "read piped input");

    let outcome = match lines.as_slice() {
        [choice, value, ..] => into_outcome(evaluate(choice, value, opts))?,
        _ => {
            warn!("piped input needs a choice line and a value line");
            Outcome::Rejected(AppError::InvalidInput(lines.join("\n")))
        }
    };

    writeln!(out, "{}", outcome.line())?;
    Ok(outcome)
}

/// Terminal mode: print the menu, prompt for choice then value, print the result.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    opts: SessionOptions,
) -> AppResult<Outcome> {
    write!(out, "{}", render_menu())?;

    let choice = prompt(&mut input, out, "\nSelect conversion (1-6): ")?;
    let value = prompt(&mut input, out, "Enter temperature value: ")?;

    let outcome = into_outcome(evaluate(&choice, &value, opts))?;
    match &outcome {
        Outcome::Converted(reading) => writeln!(out, "\n{}", reading.line())?,
        Outcome::Rejected(err) => writeln!(out, "{}", err.user_message())?,
    }
    Ok(outcome)
}

/// Write a prompt and read one line. EOF yields an empty answer.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> AppResult<String> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_converts() {
        let reading = evaluate("1", "100", SessionOptions::default()).unwrap();
        assert_eq!(reading.conversion, Conversion::CelsiusToFahrenheit);
        assert_eq!(reading.result, 212.0);
        assert_eq!(reading.line(), "100.0°C = 212.00°F");
    }

    #[test]
    fn evaluate_reports_value_before_choice() {
        let err = evaluate("9", "warm", SessionOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn evaluate_permissive_accepts_negative_kelvin() {
        let reading = evaluate("5", "-10", SessionOptions::default()).unwrap();
        assert_eq!(reading.result, -283.15);
    }

    #[test]
    fn evaluate_strict_rejects_negative_kelvin() {
        let err = evaluate("5", "-10", SessionOptions { strict: true }).unwrap_err();
        assert!(matches!(err, AppError::Core(_)));
        assert_eq!(err.user_message(), "Invalid input: -10K is below absolute zero");
    }

    #[test]
    fn evaluate_strict_rejects_infinity() {
        let err = evaluate("1", "inf", SessionOptions { strict: true }).unwrap_err();
        assert!(err.user_message().contains("Non-finite"));
    }
}
