use super::CharSet;

/// Lowercase ASCII letters.
pub const ASCII_LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const ASCII_UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII letters of both cases.
pub const ASCII_LETTERS: &[u8; 52] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Decimal digits.
pub const DIGITS: &[u8; 10] = b"0123456789";

/// Hexadecimal digits of both cases.
pub const HEX_DIGITS: &[u8; 22] = b"0123456789abcdefABCDEF";

/// Octal digits.
pub const OCT_DIGITS: &[u8; 8] = b"01234567";

/// ASCII punctuation.
pub const PUNCTUATION: &[u8; 32] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// ASCII whitespace: space, tab, newline, vertical tab, form feed, and
/// carriage return.
pub const WHITESPACE: &[u8; 6] = b" \t\n\x0B\x0C\r";

/// Line terminators: the ASCII newline family, the file/group/record
/// separators, and the Latin-1 next-line byte.
pub const NEWLINES: &[u8; 8] = b"\n\x0B\x0C\r\x1C\x1D\x1E\x85";

/// The base64 alphabet.
pub const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Membership set for [`ASCII_LOWERCASE`].
pub const LOWERCASE_SET: CharSet = CharSet::from_bytes(ASCII_LOWERCASE);

/// Membership set for [`ASCII_UPPERCASE`].
pub const UPPERCASE_SET: CharSet = CharSet::from_bytes(ASCII_UPPERCASE);

/// Membership set for [`ASCII_LETTERS`].
pub const LETTERS_SET: CharSet = CharSet::from_bytes(ASCII_LETTERS);

/// Membership set for [`DIGITS`].
pub const DIGITS_SET: CharSet = CharSet::from_bytes(DIGITS);

/// Membership set for [`HEX_DIGITS`].
pub const HEX_DIGITS_SET: CharSet = CharSet::from_bytes(HEX_DIGITS);

/// Membership set for [`OCT_DIGITS`].
pub const OCT_DIGITS_SET: CharSet = CharSet::from_bytes(OCT_DIGITS);

/// Membership set for [`PUNCTUATION`].
pub const PUNCTUATION_SET: CharSet = CharSet::from_bytes(PUNCTUATION);

/// Membership set for [`WHITESPACE`].
pub const WHITESPACE_SET: CharSet = CharSet::from_bytes(WHITESPACE);

/// Membership set for [`NEWLINES`].
pub const NEWLINES_SET: CharSet = CharSet::from_bytes(NEWLINES);

/// Membership set for [`BASE64`].
pub const BASE64_SET: CharSet = CharSet::from_bytes(BASE64);

/// Letters and digits.
pub const ALPHANUMERIC_SET: CharSet = LETTERS_SET.union(DIGITS_SET);

/// Letters, digits, punctuation, and whitespace.
pub const PRINTABLE_SET: CharSet = ALPHANUMERIC_SET.union(PUNCTUATION_SET).union(WHITESPACE_SET);

/// Every byte with the high bit clear.
pub const ASCII_SET: CharSet = {
    let mut set = CharSet::new();
    let mut b = 0u8;
    while b < 128 {
        set.add(b);
        b += 1;
    }
    set
};

/// The C0 control bytes plus delete.
pub const CONTROLS_SET: CharSet = {
    let mut set = CharSet::new();
    let mut b = 0u8;
    while b < 0x20 {
        set.add(b);
        b += 1;
    }
    set.add(0x7F);
    set
};
