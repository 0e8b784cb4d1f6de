#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]
#![feature(test, portable_simd)]

/// Implementations of the `Arbitrary` trait for fuzzing.
#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// Byte sets over the full 256-value range, plus common ASCII alphabets.
pub mod charset;
/// Edit-distance functions.
pub mod distance;
/// Error types and exit helpers.
pub mod err;
/// Search strategies pairing a needle with a scan direction.
pub mod matcher;
/// Lazy iterators over matches and the pieces between them.
pub mod ranges;
/// Owned byte strings with small-buffer optimization.
pub mod string;
/// Borrowed byte-string views.
pub mod view;

/// Generate random byte strings.
#[cfg(feature = "rand")]
pub(crate) mod generate;
/// Content hashing for byte strings.
pub(crate) mod hash;
/// Byte, substring, and set search kernels.
pub(crate) mod search;
/// SIMD traits to extend portable SIMD.
pub(crate) mod simd;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::charset::CharSet;
    pub use crate::err::{MemoryError, OrFail};
    pub use crate::matcher::Matcher;
    pub use crate::string::{Alloc, Global, Twine};
    pub use crate::view::{ByteStr, Partition};
}
