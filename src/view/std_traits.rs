use super::*;

// Conversion
impl AsRef<[u8]> for ByteStr<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for ByteStr<'a> {
    #[inline]
    fn from(bytes: &'a [u8]) -> Self {
        ByteStr { bytes }
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteStr<'a> {
    #[inline]
    fn from(bytes: &'a [u8; N]) -> Self {
        ByteStr { bytes }
    }
}

impl<'a> From<&'a str> for ByteStr<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        ByteStr { bytes: s.as_bytes() }
    }
}

impl<'a> From<ByteStr<'a>> for &'a [u8] {
    #[inline]
    fn from(view: ByteStr<'a>) -> Self {
        view.bytes
    }
}

// Iteration
impl<'a> IntoIterator for ByteStr<'a> {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter().copied()
    }
}

impl<'a> IntoIterator for &ByteStr<'a> {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter()
    }
}

// Equality and ordering
impl PartialEq<ByteStr<'_>> for ByteStr<'_> {
    #[inline]
    fn eq(&self, other: &ByteStr<'_>) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for ByteStr<'_> {}

impl PartialEq<[u8]> for ByteStr<'_> {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<&[u8]> for ByteStr<'_> {
    #[inline]
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteStr<'_> {
    #[inline]
    fn eq(&self, other: &[u8; N]) -> bool {
        self.bytes == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for ByteStr<'_> {
    #[inline]
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.bytes == *other
    }
}

impl PartialEq<str> for ByteStr<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteStr<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl Ord for ByteStr<'_> {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.bytes.cmp(other.bytes)
    }
}

impl PartialOrd for ByteStr<'_> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Hashing
impl std::hash::Hash for ByteStr<'_> {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

// Indexing
impl<I: std::slice::SliceIndex<[u8]>> std::ops::Index<I> for ByteStr<'_> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.bytes[index]
    }
}

// Display
impl std::fmt::Display for ByteStr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.bytes))
    }
}

impl std::fmt::Debug for ByteStr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{}\"", self.bytes.escape_ascii())
    }
}
