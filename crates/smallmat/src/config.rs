use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Comparison settings for approximate matrix equality.
///
/// Two entries `a` and `b` are considered close when
/// `|a - b| <= max(abs, rel * max(|a|, |b|))`, or when they compare equal
/// (which also covers matching infinities).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Tolerance {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerance {
    pub fn new(abs: f64, rel: f64) -> Self {
        Self { abs, rel }
    }

    /// Only bit-for-bit equal values (and equal infinities) are close.
    pub fn exact() -> Self {
        Self { abs: 0.0, rel: 0.0 }
    }

    pub fn close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let diff = (a - b).abs();
        let scale = a.abs().max(b.abs());
        diff <= self.abs.max(self.rel * scale)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

impl FromStr for Tolerance {
    type Err = String;

    /// Parses `"<abs>"` or `"<abs>,<rel>"`. A lone value is used for both.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| -> Result<f64, String> {
            let value = part
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("Invalid tolerance '{}': {}", part.trim(), e))?;
            if value.is_nan() || value < 0.0 {
                return Err(format!(
                    "Invalid tolerance '{}': must be a non-negative number",
                    part.trim()
                ));
            }
            Ok(value)
        };

        match s.split_once(',') {
            Some((abs, rel)) => Ok(Tolerance::new(parse(abs)?, parse(rel)?)),
            None => {
                let value = parse(s)?;
                Ok(Tolerance::new(value, value))
            }
        }
    }
}
