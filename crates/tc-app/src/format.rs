use tc_core::{Conversion, Real, Scale};

/// Echo of the user's value in shortest round-trip form.
///
/// Integral values keep a decimal point (`0.0`, `100.0`). Magnitudes outside
/// `[1e-4, 1e16)` switch to exponent form with a signed, two-digit-minimum
/// exponent (`1e+16`, `1e-05`). Non-finite values print as `nan`, `inf`, `-inf`.
pub fn format_value(value: Real) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    // Debug already picks the shortest digits and the exponent threshold;
    // only the exponent spelling differs.
    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

/// Result rounded to two decimals; NaN prints as `nan`.
fn format_fixed(value: Real) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// `<value><from> = <result:.2><to>`, e.g. `0.0°C = 32.00°F`.
pub fn format_reading(value: Real, from: Scale, result: Real, to: Scale) -> String {
    format!(
        "{}{} = {}{}",
        format_value(value),
        from,
        format_fixed(result),
        to
    )
}

pub fn format_result(conversion: Conversion, value: Real, result: Real) -> String {
    format_reading(value, conversion.source(), result, conversion.target())
}
