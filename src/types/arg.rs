//! Typed arguments for the template formatter.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::{String, ToString};

use crate::format::render_to_string;
use crate::traits::ChainError;
use crate::types::{ComposedError, SimpleError, WrappedError};

/// A value handed to the template formatter.
///
/// `errorf!` converts every argument through `Arg::from`; cause detection
/// inspects only whether the *last* argument is the [`Arg::Error`] variant.
/// Scalars and strings convert implicitly; arbitrary chain-capable errors go
/// through [`Arg::error`].
///
/// # Examples
///
/// ```
/// use error_loom::types::Arg;
///
/// let arg = Arg::from("payload");
/// assert!(!arg.is_error());
/// assert_eq!(arg.display_text(), "payload");
/// ```
#[derive(Debug)]
pub enum Arg {
    /// Text rendered as-is under `%v`/`%s`.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Single character.
    Char(char),
    /// An error value, eligible for auto-chaining when last.
    Error(Box<dyn ChainError>),
}

impl Arg {
    /// Wraps any chain-capable error as an argument.
    pub fn error(err: impl ChainError + 'static) -> Self {
        Self::Error(Box::new(err))
    }

    /// Display text under the default verb.
    ///
    /// Error arguments referenced mid-template (not chained) render through
    /// the chain renderer's default mode.
    pub fn display_text(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(v) => v.to_string(),
            Self::Uint(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Bool(v) => v.to_string(),
            Self::Char(v) => v.to_string(),
            Self::Error(e) => render_to_string(e.as_ref()),
        }
    }

    /// Whether this argument is an error value.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<Cow<'_, str>> for Arg {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Box<dyn ChainError>> for Arg {
    fn from(value: Box<dyn ChainError>) -> Self {
        Self::Error(value)
    }
}

impl From<SimpleError> for Arg {
    fn from(value: SimpleError) -> Self {
        Self::Error(Box::new(value))
    }
}

impl From<WrappedError> for Arg {
    fn from(value: WrappedError) -> Self {
        Self::Error(Box::new(value))
    }
}

impl From<ComposedError> for Arg {
    fn from(value: ComposedError) -> Self {
        Self::Error(Box::new(value))
    }
}

macro_rules! arg_from_int {
    ($($signed:ty),*; $($unsigned:ty),*) => {
        $(impl From<$signed> for Arg {
            fn from(value: $signed) -> Self {
                Self::Int(value.into())
            }
        })*
        $(impl From<$unsigned> for Arg {
            fn from(value: $unsigned) -> Self {
                Self::Uint(value.into())
            }
        })*
    };
}

arg_from_int!(i8, i16, i32, i64; u8, u16, u32, u64);

impl From<isize> for Arg {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}
