//! Pooled intermediate render states.
//!
//! The quoted, hex, and width/precision paths render the chain into an
//! intermediate buffer before copying into the real output. Checkout is
//! scoped: the guard returns the state to the pool on every exit path,
//! after a full field reset, so a stale `in_detail`/`indent`/flag bit can
//! never leak into a later call. Without the `std` feature there is no
//! shared pool and checkout simply allocates.

use core::mem;
use core::ops::{Deref, DerefMut};

use crate::format::state::FormatState;

#[cfg(feature = "std")]
mod pool {
    use std::sync::{Mutex, OnceLock, PoisonError};
    use std::vec::Vec;

    use crate::format::state::FormatState;

    const MAX_POOLED: usize = 8;

    static POOL: OnceLock<Mutex<Vec<FormatState>>> = OnceLock::new();

    pub(super) fn take() -> FormatState {
        POOL.get_or_init(Default::default)
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_default()
    }

    pub(super) fn put(state: FormatState) {
        let mut pool = POOL
            .get_or_init(Default::default)
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if pool.len() < MAX_POOLED {
            pool.push(state);
        }
    }
}

#[cfg(not(feature = "std"))]
mod pool {
    use crate::format::state::FormatState;

    pub(super) fn take() -> FormatState {
        FormatState::default()
    }

    pub(super) fn put(_state: FormatState) {}
}

/// Scoped checkout of an intermediate [`FormatState`].
pub(crate) struct Scratch {
    state: FormatState,
}

impl Scratch {
    pub(crate) fn checkout() -> Self {
        Self { state: pool::take() }
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        self.state.reset();
        pool::put(mem::take(&mut self.state));
    }
}

impl Deref for Scratch {
    type Target = FormatState;

    fn deref(&self) -> &FormatState {
        &self.state
    }
}

impl DerefMut for Scratch {
    fn deref_mut(&mut self) -> &mut FormatState {
        &mut self.state
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::format::state::FormatFlags;

    #[test]
    fn checked_out_state_starts_reset() {
        {
            let mut scratch = Scratch::checkout();
            scratch.buf.push_str("leftover");
            scratch.flags = FormatFlags {
                plus: true,
                sharp: true,
                width: Some(4),
                precision: Some(2),
            };
            scratch.in_detail = true;
            scratch.indent = true;
        }
        let scratch = Scratch::checkout();
        assert_eq!(scratch.as_str(), "");
        assert_eq!(scratch.flags(), FormatFlags::default());
        assert!(!scratch.in_detail);
        assert!(!scratch.indent);
    }
}
