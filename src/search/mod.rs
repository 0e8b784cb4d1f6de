/// Search for single bytes and set members.
mod bytes;
/// Search byte substrings.
mod substring;

pub use bytes::*;
pub use substring::*;
