//! Formatting utilities used for CLI outputs.

/// Plain number: no trailing ".0" for whole values (`5`, `4.75`, `-12`).
pub fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// One decimal, for derived metrics (`4.8`, `20.0`).
pub fn fmt_fixed1(v: f64) -> String {
    format!("{:.1}", v)
}
