use super::*;

// Conversion
impl TryFrom<&[u8]> for Twine {
    type Error = MemoryError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let mut new = Twine::new();
        new.try_assign(bytes)?;
        Ok(new)
    }
}

impl<const N: usize> TryFrom<&[u8; N]> for Twine {
    type Error = MemoryError;

    fn try_from(bytes: &[u8; N]) -> Result<Self, Self::Error> {
        Twine::try_from(bytes.as_slice())
    }
}

impl TryFrom<&str> for Twine {
    type Error = MemoryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Twine::try_from(s.as_bytes())
    }
}

impl TryFrom<ByteStr<'_>> for Twine {
    type Error = MemoryError;

    fn try_from(view: ByteStr<'_>) -> Result<Self, Self::Error> {
        Twine::try_from(view.as_bytes())
    }
}

impl<A: Alloc> AsRef<[u8]> for Twine<A> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<A: Alloc> std::borrow::Borrow<[u8]> for Twine<A> {
    #[inline]
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

// Iteration
impl<'a, A: Alloc> IntoIterator for &'a Twine<A> {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_bytes().iter()
    }
}

// Equality and ordering
impl<A: Alloc, B: Alloc> PartialEq<Twine<B>> for Twine<A> {
    #[inline]
    fn eq(&self, other: &Twine<B>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: Alloc> Eq for Twine<A> {}

impl<A: Alloc> PartialEq<ByteStr<'_>> for Twine<A> {
    #[inline]
    fn eq(&self, other: &ByteStr<'_>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: Alloc> PartialEq<Twine<A>> for ByteStr<'_> {
    #[inline]
    fn eq(&self, other: &Twine<A>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: Alloc> PartialEq<[u8]> for Twine<A> {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<A: Alloc> PartialEq<&[u8]> for Twine<A> {
    #[inline]
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<A: Alloc, const N: usize> PartialEq<[u8; N]> for Twine<A> {
    #[inline]
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl<A: Alloc, const N: usize> PartialEq<&[u8; N]> for Twine<A> {
    #[inline]
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl<A: Alloc> PartialEq<str> for Twine<A> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: Alloc> PartialEq<&str> for Twine<A> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: Alloc> Ord for Twine<A> {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl<A: Alloc> PartialOrd for Twine<A> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Hashing
impl<A: Alloc> std::hash::Hash for Twine<A> {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

// Indexing
impl<A: Alloc, I: std::slice::SliceIndex<[u8]>> std::ops::Index<I> for Twine<A> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_bytes()[index]
    }
}

impl<A: Alloc, I: std::slice::SliceIndex<[u8]>> std::ops::IndexMut<I> for Twine<A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_bytes_mut()[index]
    }
}

// Display
impl<A: Alloc> std::fmt::Display for Twine<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<A: Alloc> std::fmt::Debug for Twine<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}
