//! Call-site capture attached to constructed errors.

use core::fmt::Write;
use core::panic::Location;

use crate::format::Printer;

/// An immutable capture of the call site an error was constructed at.
///
/// Captured eagerly (the cost is a `&'static` pointer copy, not a stack
/// walk) and rendered lazily: [`Frame::format`] writes the location into a
/// detail section only, so default one-line rendering never shows it.
///
/// `#[track_caller]` propagates through [`Frame::capture`] and
/// [`build_error`](crate::build_error), so the recorded site is the
/// `errorf!` call site rather than anything inside this crate.
///
/// # Examples
///
/// ```
/// use error_loom::Frame;
///
/// let frame = Frame::capture();
/// assert!(frame.file().ends_with(".rs"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    location: &'static Location<'static>,
}

impl Frame {
    /// Captures the caller's source location.
    #[inline]
    #[track_caller]
    pub fn capture() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    /// Source file the frame was captured in.
    #[inline]
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// Line the frame was captured at.
    #[inline]
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// Appends the location to a detail section.
    ///
    /// Writes nothing unless the printer reports an active detail request.
    /// The trailing newline is intentional: under detail indentation it
    /// becomes the detail-indent marker, which the chain walk trims at
    /// segment boundaries.
    pub fn format(&self, printer: &mut Printer<'_>) {
        if printer.detail() {
            let _ = writeln!(printer, "{}:{}", self.location.file(), self.location.line());
        }
    }
}
