use std::fmt;

/// A dynamically typed candidate value handed to a guard.
///
/// `Missing` stands for "no value at all" (an absent argument or an exhausted
/// list), which is distinct from an explicit `Null`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    Number(f64),
    Str(&'a str),
    Bool(bool),
    Null,
    Missing,
}

impl Scalar<'_> {
    /// Name of the value's type as reported in [`crate::ValidationError::TypeMismatch`].
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Number(_) => "number",
            Scalar::Str(_) => "string",
            Scalar::Bool(_) => "boolean",
            Scalar::Null => "null",
            Scalar::Missing => "undefined",
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) if n.is_nan() => f.write_str("NaN"),
            Scalar::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Str(s) => f.write_str(s),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Null => f.write_str("null"),
            Scalar::Missing => f.write_str("undefined"),
        }
    }
}

impl From<f64> for Scalar<'_> {
    #[inline]
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<f32> for Scalar<'_> {
    #[inline]
    fn from(n: f32) -> Self {
        Scalar::Number(f64::from(n))
    }
}

impl From<i32> for Scalar<'_> {
    #[inline]
    fn from(n: i32) -> Self {
        Scalar::Number(f64::from(n))
    }
}

impl From<u32> for Scalar<'_> {
    #[inline]
    fn from(n: u32) -> Self {
        Scalar::Number(f64::from(n))
    }
}

impl From<i64> for Scalar<'_> {
    #[inline]
    fn from(n: i64) -> Self {
        // Precision loss above 2^53 matches how the guards treat numbers.
        Scalar::Number(n as f64)
    }
}

impl From<bool> for Scalar<'_> {
    #[inline]
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl<'a> From<&'a str> for Scalar<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Scalar::Str(s)
    }
}

impl<'a> From<&'a String> for Scalar<'a> {
    #[inline]
    fn from(s: &'a String) -> Self {
        Scalar::Str(s.as_str())
    }
}

impl<'a, T: Into<Scalar<'a>>> From<Option<T>> for Scalar<'a> {
    #[inline]
    fn from(v: Option<T>) -> Self {
        v.map_or(Scalar::Null, Into::into)
    }
}
