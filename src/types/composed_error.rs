//! Concrete error variants produced by the constructor.

use alloc::boxed::Box;
use alloc::string::String;
use core::error::Error;
use core::fmt;

use crate::format::{render_error, FormatFlags, FormatState, Printer, Verb};
use crate::frame::Frame;
use crate::traits::{ChainError, ChainFormat};

/// A leaf error: a rendered message and its capture site, no cause.
///
/// # Examples
///
/// ```
/// use error_loom::SimpleError;
///
/// let err = SimpleError::new("disk full");
/// assert_eq!(err.to_string(), "disk full");
/// assert!(format!("{err:+}").contains(file!()));
/// ```
#[derive(Debug)]
pub struct SimpleError {
    msg: String,
    frame: Frame,
}

impl SimpleError {
    /// Creates a leaf error capturing the caller's location.
    #[track_caller]
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            frame: Frame::capture(),
        }
    }

    pub(crate) fn with_frame(msg: String, frame: Frame) -> Self {
        Self { msg, frame }
    }

    /// The stored message.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// The construction site.
    pub fn frame(&self) -> Frame {
        self.frame
    }
}

impl fmt::Display for SimpleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_via_renderer(self, f)
    }
}

impl Error for SimpleError {}

impl ChainError for SimpleError {
    fn as_chain(&self) -> Option<&dyn ChainFormat> {
        Some(self)
    }
}

impl ChainFormat for SimpleError {
    fn format<'a>(&'a self, p: &mut Printer<'_>) -> Option<&'a dyn ChainError> {
        p.print(&self.msg);
        self.frame.format(p);
        None
    }
}

/// A wrapping error: a message, a positively detected cause, and the
/// capture site.
///
/// Only ever constructed when a cause was detected; the message never
/// contains the trailing chain-placeholder suffix (the constructor strips
/// it before rendering).
#[derive(Debug)]
pub struct WrappedError {
    msg: String,
    cause: Box<dyn ChainError>,
    frame: Frame,
}

impl WrappedError {
    /// Wraps `cause` under `msg`, capturing the caller's location.
    #[track_caller]
    pub fn new(msg: impl Into<String>, cause: impl ChainError + 'static) -> Self {
        Self {
            msg: msg.into(),
            cause: Box::new(cause),
            frame: Frame::capture(),
        }
    }

    pub(crate) fn with_frame(msg: String, cause: Box<dyn ChainError>, frame: Frame) -> Self {
        Self { msg, cause, frame }
    }

    /// This level's message, without the cause.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// The wrapped cause; always present.
    pub fn cause(&self) -> &dyn ChainError {
        self.cause.as_ref()
    }

    /// The construction site.
    pub fn frame(&self) -> Frame {
        self.frame
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_via_renderer(self, f)
    }
}

impl Error for WrappedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl ChainError for WrappedError {
    fn as_chain(&self) -> Option<&dyn ChainFormat> {
        Some(self)
    }
}

impl ChainFormat for WrappedError {
    fn format<'a>(&'a self, p: &mut Printer<'_>) -> Option<&'a dyn ChainError> {
        p.print(&self.msg);
        self.frame.format(p);
        Some(self.cause.as_ref())
    }
}

/// The error value produced by [`build_error`](crate::build_error): a leaf
/// or a wrapping error, tagged.
///
/// # Examples
///
/// ```
/// use error_loom::errorf;
///
/// let err = errorf!("mount %s: %v", "/dev/sda1", errorf!("device busy"));
/// assert!(err.is_wrapped());
/// assert_eq!(err.message(), "mount /dev/sda1");
/// ```
#[derive(Debug)]
pub enum ComposedError {
    /// No cause was detected.
    Simple(SimpleError),
    /// A trailing cause was detected and chained.
    Wrapped(WrappedError),
}

impl ComposedError {
    /// This level's message, without any cause.
    pub fn message(&self) -> &str {
        match self {
            Self::Simple(e) => e.message(),
            Self::Wrapped(e) => e.message(),
        }
    }

    /// The detected cause, if one was chained.
    pub fn cause(&self) -> Option<&dyn ChainError> {
        match self {
            Self::Simple(_) => None,
            Self::Wrapped(e) => Some(e.cause()),
        }
    }

    /// The construction site.
    pub fn frame(&self) -> Frame {
        match self {
            Self::Simple(e) => e.frame(),
            Self::Wrapped(e) => e.frame(),
        }
    }

    /// Whether a cause was detected and chained.
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped(_))
    }
}

impl fmt::Display for ComposedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_via_renderer(self, f)
    }
}

impl Error for ComposedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Simple(_) => None,
            Self::Wrapped(e) => e.source(),
        }
    }
}

impl ChainError for ComposedError {
    fn as_chain(&self) -> Option<&dyn ChainFormat> {
        match self {
            Self::Simple(e) => e.as_chain(),
            Self::Wrapped(e) => e.as_chain(),
        }
    }
}

/// Bridges `core::fmt` flags into the chain renderer, so `{}`, `{:+}`,
/// `{:#}`, width and precision all reach it.
fn display_via_renderer(err: &dyn ChainError, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut state = FormatState::with_flags(FormatFlags::from_formatter(f));
    render_error(&mut state, Verb::Display, err);
    f.write_str(state.as_str())
}
