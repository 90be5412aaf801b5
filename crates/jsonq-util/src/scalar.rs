//! Scalar normalization.
//!
//! Leaf values reach the query core either as Rust primitives or as JSON
//! leaves inside a [`serde_json::Value`]. Both are funneled through [`Scalar`],
//! which renders a canonical text form (used for display and lexical
//! ordering) and widens numbers into `f64` (used for magnitude ordering).

use std::fmt;

use serde_json::{Number, Value};
use thiserror::Error;

/// Failure to convert a value into the requested scalar form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScalarError {
    #[error("{kind} is not numeric")]
    NotNumeric { kind: &'static str },
}

/// A JSON leaf value with its numeric width preserved.
///
/// Signed integers of every width collapse into [`Scalar::Int`], unsigned ones
/// into [`Scalar::Uint`]. `f32` keeps its own variant so that rendering and
/// widening both see the value that was actually stored at 32 bits.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Uint(u64),
    Float32(f32),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Scalar {
    /// Builds a scalar from a JSON leaf.
    ///
    /// Returns `None` for `null`, arrays and objects.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonq_util::Scalar;
    /// use serde_json::json;
    ///
    /// assert_eq!(Scalar::from_value(&json!(-3)), Some(Scalar::Int(-3)));
    /// assert_eq!(Scalar::from_value(&json!("a")), Some(Scalar::Str("a".into())));
    /// assert_eq!(Scalar::from_value(&json!([1])), None);
    /// ```
    pub fn from_value(value: &Value) -> Option<Scalar> {
        match value {
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Number(n) => number_scalar(n),
            Value::String(s) => Some(Scalar::Str(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Short name of the variant's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Int(_) | Scalar::Uint(_) => "integer",
            Scalar::Float32(_) | Scalar::Float(_) => "float",
            Scalar::Bool(_) => "boolean",
            Scalar::Str(_) => "string",
        }
    }

    /// Widens a numeric scalar to `f64`.
    ///
    /// `f32` values are promoted bit-exactly, so a value written as `99.01`
    /// at 32 bits comes back as `99.01000213623047`. No decimal cleanup is
    /// attempted.
    ///
    /// # Errors
    ///
    /// Booleans and strings return [`ScalarError::NotNumeric`]; callers that
    /// want a zero fallback use `unwrap_or_default()`.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonq_util::Scalar;
    ///
    /// assert_eq!(Scalar::from(88i32).to_float64(), Ok(88.0));
    /// assert_eq!(Scalar::from(99.01f32).to_float64(), Ok(99.01000213623047));
    /// assert!(Scalar::from("12").to_float64().is_err());
    /// ```
    pub fn to_float64(&self) -> Result<f64, ScalarError> {
        match *self {
            Scalar::Int(i) => Ok(i as f64),
            Scalar::Uint(u) => Ok(u as f64),
            Scalar::Float32(f) => Ok(f64::from(f)),
            Scalar::Float(f) => Ok(f),
            Scalar::Bool(_) | Scalar::Str(_) => Err(ScalarError::NotNumeric { kind: self.kind() }),
        }
    }
}

/// Canonical text form: integers undecorated, floats in their shortest
/// round-tripping decimal form (never exponent notation), booleans as
/// `true`/`false`, strings verbatim.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Uint(u) => write!(f, "{u}"),
            Scalar::Float32(x) => write!(f, "{x}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_primitive {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::$variant(v as $wide)
                }
            }
        )+
    };
}

impl_from_primitive!(Int as i64: i8, i16, i32, i64, isize);
impl_from_primitive!(Uint as u64: u8, u16, u32, u64, usize);

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float32(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

/// Non-finite floats have no JSON form and become `null`.
impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Int(i) => Value::Number(Number::from(i)),
            Scalar::Uint(u) => Value::Number(Number::from(u)),
            Scalar::Float32(f) => float_value(f64::from(f)),
            Scalar::Float(f) => float_value(f),
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Str(s) => Value::String(s),
        }
    }
}

fn float_value(f: f64) -> Value {
    Number::from_f64(f).map_or(Value::Null, Value::Number)
}

fn number_scalar(n: &Number) -> Option<Scalar> {
    if let Some(i) = n.as_i64() {
        Some(Scalar::Int(i))
    } else if let Some(u) = n.as_u64() {
        Some(Scalar::Uint(u))
    } else {
        n.as_f64().map(Scalar::Float)
    }
}

/// JSON type name of a value.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders any JSON value in canonical text form.
///
/// Leaves follow [`Scalar`]'s `Display`; `null`, arrays and objects render
/// as compact JSON text.
///
/// # Example
///
/// ```
/// use jsonq_util::scalar::to_string;
/// use serde_json::json;
///
/// assert_eq!(to_string(&json!(-10)), "-10");
/// assert_eq!(to_string(&json!(10.99)), "10.99");
/// assert_eq!(to_string(&json!(true)), "true");
/// assert_eq!(to_string(&json!("x")), "x");
/// assert_eq!(to_string(&json!([1, 2])), "[1,2]");
/// ```
pub fn to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match number_scalar(n) {
            Some(scalar) => scalar.to_string(),
            None => n.to_string(),
        },
        Value::Null | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Widens a JSON number to `f64`.
///
/// # Errors
///
/// Anything other than a number, including numeric-looking strings and
/// booleans, returns [`ScalarError::NotNumeric`].
///
/// # Example
///
/// ```
/// use jsonq_util::scalar::to_float64;
/// use serde_json::json;
///
/// assert_eq!(to_float64(&json!(898)), Ok(898.0));
/// assert_eq!(to_float64(&json!(-99.91)), Ok(-99.91));
/// assert_eq!(to_float64(&json!("")).unwrap_or_default(), 0.0);
/// assert!(to_float64(&json!([])).is_err());
/// ```
pub fn to_float64(value: &Value) -> Result<f64, ScalarError> {
    match value {
        Value::Number(n) => number_scalar(n)
            .ok_or(ScalarError::NotNumeric { kind: "number" })?
            .to_float64(),
        _ => Err(ScalarError::NotNumeric {
            kind: value_kind(value),
        }),
    }
}
