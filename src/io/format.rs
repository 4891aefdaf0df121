use crate::algebra::FloatT;

/// Formats `x` the way C's `printf("%20.18e", x)` does.
///
/// Rust writes `1e0` where C writes `1e+00`, so the exponent is given an
/// explicit sign and padded to at least two digits.  Non-finite values
/// print as `nan`, `inf` or `-inf`.  The result is right aligned in a
/// field of width 20, which only pads the non-finite cases.
pub fn format_exp<T: FloatT>(x: T) -> String {
    let s = if x.is_nan() {
        "nan".to_string()
    } else if x.is_infinite() {
        let s = if x.is_sign_negative() { "-inf" } else { "inf" };
        s.to_string()
    } else {
        let s = format!("{:.18e}", x);
        match s.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => s,
        }
    };
    format!("{:>20}", s)
}

#[test]
fn test_format_exp() {
    assert_eq!(format_exp(1.0), "1.000000000000000000e+00");
    assert_eq!(format_exp(0.0), "0.000000000000000000e+00");
    assert_eq!(format_exp(-0.25), "-2.500000000000000000e-01");
    assert_eq!(format_exp(0.0009765625), "9.765625000000000000e-04");

    // neither value is exact in binary, so the trailing digits show
    assert_eq!(format_exp(0.1), "1.000000000000000056e-01");
    assert_eq!(format_exp(1.0e100), "1.000000000000000016e+100");
    assert_eq!(format_exp(f64::INFINITY), "                 inf");
    assert_eq!(format_exp(f64::NEG_INFINITY), "                -inf");
    assert_eq!(format_exp(0.5f32), "5.000000000000000000e-01");
}
