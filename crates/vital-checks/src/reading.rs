//! Caller-supplied readings

use crate::error::VitalError;
use serde::{Deserialize, Serialize};

/// A value handed to a vital check
///
/// Only `Int` and `Float` are valid readings. The other variants exist so that
/// loosely typed input (JSON, form fields) can be rejected with
/// [`VitalError::InvalidInputType`] instead of being coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Reading>),
    Absent,
}

impl Reading {
    /// Kind of value, as reported in type errors
    pub fn kind(&self) -> &'static str {
        match self {
            Reading::Bool(_) => "boolean",
            Reading::Int(_) => "integer",
            Reading::Float(_) => "float",
            Reading::Text(_) => "text",
            Reading::List(_) => "sequence",
            Reading::Absent => "absent",
        }
    }

    /// Numeric magnitude, or a type error naming `argument`
    ///
    /// Booleans are rejected even though they have an obvious integer value.
    pub fn magnitude(&self, argument: &'static str) -> Result<f64, VitalError> {
        match *self {
            Reading::Int(v) => Ok(v as f64),
            Reading::Float(v) => Ok(v),
            _ => Err(VitalError::InvalidInputType {
                argument,
                found: self.kind(),
            }),
        }
    }
}

macro_rules! int_reading {
    ($($t:ty),*) => {
        $(impl From<$t> for Reading {
            fn from(v: $t) -> Self {
                Reading::Int(i64::from(v))
            }
        })*
    };
}

int_reading!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Reading {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Reading::Float(v as f64), Reading::Int)
    }
}

impl From<f32> for Reading {
    fn from(v: f32) -> Self {
        Reading::Float(f64::from(v))
    }
}

impl From<f64> for Reading {
    fn from(v: f64) -> Self {
        Reading::Float(v)
    }
}

impl From<bool> for Reading {
    fn from(v: bool) -> Self {
        Reading::Bool(v)
    }
}

impl From<&str> for Reading {
    fn from(v: &str) -> Self {
        Reading::Text(v.to_string())
    }
}

impl From<String> for Reading {
    fn from(v: String) -> Self {
        Reading::Text(v)
    }
}

impl<T: Into<Reading>> From<Option<T>> for Reading {
    fn from(v: Option<T>) -> Self {
        v.map_or(Reading::Absent, Into::into)
    }
}

impl<T: Into<Reading>> From<Vec<T>> for Reading {
    fn from(v: Vec<T>) -> Self {
        Reading::List(v.into_iter().map(Into::into).collect())
    }
}
