//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for the crate's types, as well as wrapper types to provide
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! implementations with stronger assumptions.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::prelude::*;
use arbitrary::{Arbitrary, Error, Result, Unstructured};

impl<'a> Arbitrary<'a> for CharSet {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(CharSet { bits: Arbitrary::arbitrary(u)? })
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (32, Some(32))
    }
}

impl<'a> Arbitrary<'a> for ByteStr<'a> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(ByteStr::new(<&[u8]>::arbitrary(u)?))
    }
}

impl<'a> Arbitrary<'a> for Twine {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Twine::try_from(<&[u8]>::arbitrary(u)?).map_err(|_| Error::IncorrectFormat)
    }
}

/// A wrapper around [`Twine`] such that the implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only generates graphic ASCII in the range `!`..=`~`.
#[derive(Debug)]
pub struct TwineAsciiGraphic(pub Twine);

impl std::ops::Deref for TwineAsciiGraphic {
    type Target = Twine;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for TwineAsciiGraphic {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> Arbitrary<'a> for TwineAsciiGraphic {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let mut new = Twine::new();
        for byte in u.arbitrary_iter::<u8>()?.flatten() {
            new.try_push(byte % 94 + b'!').map_err(|_| Error::IncorrectFormat)?;
        }
        Ok(TwineAsciiGraphic(new))
    }
}
