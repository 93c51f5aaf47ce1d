use tc_core::{Conversion, Real};

use crate::{AppError, AppResult};

pub const TITLE: &str = "Temperature Converter";

/// Title, underline and the six numbered conversions.
pub fn render_menu() -> String {
    let mut menu = format!("{TITLE}\n{}\n\n", "=".repeat(20));
    for conversion in Conversion::ALL {
        menu.push_str(&format!("{}. {}\n", conversion.menu_index(), conversion));
    }
    menu
}

/// Parse a menu choice line. Only a single digit `1`-`6` is accepted.
pub fn parse_choice(text: &str) -> AppResult<Conversion> {
    let trimmed = text.trim();
    let index = match trimmed.as_bytes() {
        [digit @ b'1'..=b'6'] => digit - b'0',
        _ => return Err(AppError::InvalidChoice(trimmed.to_string())),
    };
    Conversion::from_menu_index(index)
        .ok_or_else(|| AppError::InvalidChoice(trimmed.to_string()))
}

/// Parse a temperature value line. Underscores are accepted only as digit
/// separators (`1_000`), never leading, trailing or doubled.
pub fn parse_value(text: &str) -> AppResult<Real> {
    let trimmed = text.trim();
    let invalid = || AppError::InvalidInput(trimmed.to_string());

    let digits = if trimmed.contains('_') {
        strip_digit_separators(trimmed).ok_or_else(invalid)?
    } else {
        trimmed.to_string()
    };
    digits.parse::<Real>().map_err(|_| invalid())
}

fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        match (before, after) {
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(text.replace('_', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_layout() {
        let menu = render_menu();
        let lines: Vec<&str> = menu.lines().collect();
        assert_eq!(lines[0], "Temperature Converter");
        assert_eq!(lines[1], "====================");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "1. Celsius to Fahrenheit");
        assert_eq!(lines[4], "2. Celsius to Kelvin");
        assert_eq!(lines[5], "3. Fahrenheit to Celsius");
        assert_eq!(lines[6], "4. Fahrenheit to Kelvin");
        assert_eq!(lines[7], "5. Kelvin to Celsius");
        assert_eq!(lines[8], "6. Kelvin to Fahrenheit");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn choice_parsing() {
        assert_eq!(parse_choice("1").unwrap(), Conversion::CelsiusToFahrenheit);
        assert_eq!(parse_choice(" 6\n").unwrap(), Conversion::KelvinToFahrenheit);
        for bad in ["0", "7", "01", "+1", "one", ""] {
            assert!(
                matches!(parse_choice(bad), Err(AppError::InvalidChoice(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn value_parsing() {
        assert_eq!(parse_value("0").unwrap(), 0.0);
        assert_eq!(parse_value(" -40.5 \n").unwrap(), -40.5);
        assert_eq!(parse_value("1e3").unwrap(), 1000.0);
        assert!(matches!(parse_value("abc"), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_value(""), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn value_parsing_digit_separators() {
        assert_eq!(parse_value("1_000").unwrap(), 1000.0);
        assert_eq!(parse_value("-1_234.5_6").unwrap(), -1234.56);
        assert_eq!(parse_value("1e1_0").unwrap(), 1e10);
        for bad in ["_1", "1_", "1__0", "1_.5", "1._5", "_"] {
            assert!(
                matches!(parse_value(bad), Err(AppError::InvalidInput(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn value_parsing_special_values() {
        assert!(parse_value("nan").unwrap().is_nan());
        assert_eq!(parse_value("inf").unwrap(), Real::INFINITY);
        assert_eq!(parse_value("-Infinity").unwrap(), Real::NEG_INFINITY);
    }
}
