//! Chain-aware formatting protocols.

use crate::format::Printer;
use crate::traits::ChainError;

/// Chain-aware formatting, current protocol.
///
/// Implementations write their own message through the restricted
/// [`Printer`] surface and hand back the next error in the chain, if any.
/// Detail text belongs behind [`Printer::detail`]:
///
/// ```
/// use error_loom::format::Printer;
/// use error_loom::traits::{ChainError, ChainFormat};
/// # #[derive(Debug)]
/// # struct Busy;
/// # impl core::fmt::Display for Busy {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "resource busy")
/// #     }
/// # }
/// # impl core::error::Error for Busy {}
/// # impl ChainError for Busy {
/// #     fn as_chain(&self) -> Option<&dyn ChainFormat> { Some(self) }
/// # }
///
/// impl ChainFormat for Busy {
///     fn format<'a>(&'a self, p: &mut Printer<'_>) -> Option<&'a dyn ChainError> {
///         p.print("resource busy");
///         if p.detail() {
///             p.print("held by pid 4312\n");
///         }
///         None
///     }
/// }
/// ```
pub trait ChainFormat {
    /// Writes this level's message and returns the next error in the chain.
    fn format<'a>(&'a self, printer: &mut Printer<'_>) -> Option<&'a dyn ChainError>;
}

/// Chain-aware formatting, compatibility protocol.
///
/// Same contract as [`ChainFormat`] under a different method name; kept for
/// error types written against the older surface. When a type implements
/// both, the renderer prefers [`ChainFormat`].
pub trait LegacyChainFormat {
    /// Writes this level's message and returns the next error in the chain.
    fn format_error<'a>(&'a self, printer: &mut Printer<'_>) -> Option<&'a dyn ChainError>;
}
