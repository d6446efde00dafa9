extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use alloc::{boxed::Box, vec, vec::Vec};
#[cfg(feature = "serde")]
pub use alloc::string::String;
#[cfg(feature = "std")]
pub use std::sync::LazyLock;

/// Emits a `tracing` event at TRACE level when the `tracing` feature is enabled.
macro_rules! trace {
    ($($arg: tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use trace;
