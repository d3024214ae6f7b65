use crate::error::{Error, Result};

/// Checks that a numerical value is in the provided interval `[a,b]` and returns early
/// with an [`Error::Configuration`](crate::error::Error::Configuration) if not
///
/// ### Example
/// ```ignore
/// let discount = 2.0;
/// ensure_interval!(discount, 0.0, 1.0);
/// ```
/// This returns an error with the message "Invalid configuration for \`discount\`: must be in the interval \[0, 1\]".
#[macro_export]
macro_rules! ensure_interval {
    ($var:expr, $a:expr, $b:expr) => {
        if !($var >= $a && $var <= $b) {
            return Err($crate::error::Error::Configuration {
                name: stringify!($var).to_string(),
                reason: format!("must be in the interval [{}, {}]", $a, $b),
            });
        }
    };
}

/// Fails with a contract violation if any element of `values` is NaN or infinite
pub(crate) fn ensure_finite(what: &str, values: &[f32]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(ix) => Err(Error::contract(format!(
            "{} contains a non-finite value {} at index {}",
            what, values[ix], ix
        ))),
        None => Ok(()),
    }
}

/// Fails with a contract violation if `values` does not have exactly `expected` elements
pub(crate) fn ensure_len(what: &str, values: &[f32], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(Error::contract(format!(
            "{} has length {}, expected {}",
            what,
            values.len(),
            expected
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(discount: f32) -> Result<()> {
        ensure_interval!(discount, 0.0, 1.0);
        Ok(())
    }

    #[test]
    fn ensure_interval_functional() {
        assert!(check(0.0).is_ok());
        assert!(check(0.99).is_ok());
        assert!(check(1.0).is_ok());
        assert!(check(-0.1).is_err());
        assert!(check(f32::NAN).is_err(), "NaN is never in an interval");

        let err = check(1.5).unwrap_err();
        assert!(err.to_string().contains("`discount`"));
    }

    #[test]
    fn ensure_finite_functional() {
        assert!(ensure_finite("state", &[0.0, -1.0, 3.5]).is_ok());
        let err = ensure_finite("state", &[0.0, f32::NAN]).unwrap_err();
        assert!(matches!(err, Error::ContractViolation(_)));
        assert!(ensure_finite("state", &[f32::INFINITY]).is_err());
    }

    #[test]
    fn ensure_len_functional() {
        assert!(ensure_len("state", &[1.0, 2.0], 2).is_ok());
        assert!(ensure_len("state", &[1.0], 2).is_err());
    }
}
