//! Interpretation of Verilog numeric literals.
//!
//! A literal is parsed once into a [`Number`] carrying the declared width,
//! signedness, base, and the raw digit string; the three value forms
//! (native integer, arbitrary-precision integer, fixed-width bit vector)
//! are derived from it on demand.  Underscores and spaces are stripped
//! before any matching, so `32 'sh 1b` and `32'sh1b` are the same literal.
//!
//! One deliberate oddity is preserved from the tables this was built
//! against: the octal form accepts the full hex digit alphabet, and
//! conversion keeps each digit's low three bits.  `6'o1f` is therefore a
//! valid literal with value 15.

use num_bigint::BigUint;
use std::fmt;

/// The base of a parsed literal.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Base {
    /// `'b` / `'B`.
    Binary,
    /// `'o` / `'O`.
    Octal,
    /// `'h` / `'H`.
    Hex,
    /// `'d` / `'D`, or a quote with the base letter omitted.
    Decimal,
    /// A bare integer with no quote at all.
    UnsizedDecimal,
}

/// A successfully parsed numeric literal.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Number {
    width: Option<u32>,
    signed: bool,
    base: Base,
    neg: bool,
    digits: Box<str>,
}

fn is_base_digit(base: Base, b: u8) -> bool {
    match base {
        Base::Binary => matches!(b, b'0' | b'1'),
        // Octal deliberately takes the hex alphabet; see the module docs.
        Base::Octal | Base::Hex => b.is_ascii_hexdigit(),
        Base::Decimal | Base::UnsizedDecimal => b.is_ascii_digit(),
    }
}

fn digit_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => unreachable!(),
    }
}

fn strip_separators(literal: &str) -> String {
    literal.chars().filter(|c| !matches!(c, '_' | ' ')).collect()
}

impl Number {
    /// Parses a literal.  Returns `None` for anything that is neither a
    /// based literal nor a bare decimal; malformed input is not an error.
    pub fn parse(literal: &str) -> Option<Number> {
        let text = strip_separators(literal);
        let Some(quote) = text.find('\'') else {
            let (neg, digits) = match text.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, text.strip_prefix('+').unwrap_or(&text)),
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            return Some(Number {
                width: None,
                signed: false,
                base: Base::UnsizedDecimal,
                neg,
                digits: digits.into(),
            });
        };
        let width_text = &text[..quote];
        let width = if width_text.is_empty() {
            None
        } else if width_text.bytes().all(|b| b.is_ascii_digit()) {
            Some(width_text.parse().ok()?)
        } else {
            return None;
        };
        let mut rest = &text[quote + 1..];
        let signed = rest.starts_with(['s', 'S']);
        if signed {
            rest = &rest[1..];
        }
        let (base, digits) = match rest.bytes().next() {
            Some(b'b' | b'B') => (Base::Binary, &rest[1..]),
            Some(b'o' | b'O') => (Base::Octal, &rest[1..]),
            Some(b'h' | b'H') => (Base::Hex, &rest[1..]),
            Some(b'd' | b'D') => (Base::Decimal, &rest[1..]),
            _ => (Base::Decimal, rest),
        };
        if digits.is_empty() || !digits.bytes().all(|b| is_base_digit(base, b)) {
            return None;
        }
        Some(Number {
            width,
            signed,
            base,
            neg: false,
            digits: digits.to_ascii_lowercase().into(),
        })
    }

    /// The declared width, if the literal had explicit width digits before
    /// the quote.
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// True iff an `s` follows the quote.
    pub fn signed(&self) -> bool {
        self.signed
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// The value as a native integer, positive-magnitude except for the
    /// bare `-<digits>` form.  Literals wider than 64 bits silently
    /// truncate to their low 64 bits.
    pub fn value(&self) -> i64 {
        let mag = self.digits.bytes().fold(0u64, |acc, b| match self.base {
            Base::Binary => (acc << 1) | u64::from(b - b'0'),
            Base::Octal => (acc << 3) | u64::from(digit_value(b) & 7),
            Base::Hex => (acc << 4) | u64::from(digit_value(b)),
            Base::Decimal | Base::UnsizedDecimal => {
                acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0'))
            }
        });
        if self.neg {
            (mag as i64).wrapping_neg()
        } else {
            mag as i64
        }
    }

    /// The value as an arbitrary-precision unsigned integer.  `None` for
    /// the bare negative form, which has no unsigned reading.
    pub fn biguint(&self) -> Option<BigUint> {
        if self.neg {
            return None;
        }
        match self.base {
            Base::Binary => BigUint::parse_bytes(self.digits.as_bytes(), 2),
            Base::Hex => BigUint::parse_bytes(self.digits.as_bytes(), 16),
            Base::Decimal | Base::UnsizedDecimal => {
                BigUint::parse_bytes(self.digits.as_bytes(), 10)
            }
            Base::Octal => Some(self.digits.bytes().fold(BigUint::default(), |acc, b| {
                (acc << 3usize) | BigUint::from(digit_value(b) & 7)
            })),
        }
    }

    /// The value as a bit vector of the declared width, or of 32 bits when
    /// the literal is unsized.  Bits beyond the width are discarded
    /// silently.  `None` for the bare negative form.
    pub fn bitvector(&self) -> Option<BitVector> {
        let width = self.width.unwrap_or(32);
        Some(BitVector::from_biguint(width, &self.biguint()?))
    }
}

/// Returns the width digits preceding the quote, or `None` when the
/// literal has no quote or no explicit width.
pub fn number_bits(literal: &str) -> Option<u32> {
    let text = strip_separators(literal);
    let quote = text.find('\'')?;
    let width = &text[..quote];
    if width.is_empty() || !width.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    width.parse().ok()
}

/// True iff the quote is followed by `s` or `S`.
pub fn number_signed(literal: &str) -> bool {
    let text = strip_separators(literal);
    match text.find('\'') {
        Some(quote) => text[quote + 1..].starts_with(['s', 'S']),
        None => false,
    }
}

/// Parses the literal and returns its native-integer value; see
/// [`Number::value`].  This is the only entry point that accepts the bare
/// `-<digits>` form.
pub fn number_value(literal: &str) -> Option<i64> {
    Some(Number::parse(literal)?.value())
}

/// Parses the literal and returns its arbitrary-precision value; see
/// [`Number::biguint`].
pub fn number_bigint(literal: &str) -> Option<BigUint> {
    Number::parse(literal)?.biguint()
}

/// Parses the literal and returns its fixed-width value; see
/// [`Number::bitvector`].
pub fn number_bitvector(literal: &str) -> Option<BitVector> {
    Number::parse(literal)?.bitvector()
}

/// A fixed-width unsigned value with bit-addressable content, stored as
/// 64-bit words, least significant first.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BitVector {
    width: u32,
    words: Box<[u64]>,
}

impl BitVector {
    /// An all-zero vector of the given width.
    pub fn new(width: u32) -> BitVector {
        let nwords = (width as usize + 63) / 64;
        BitVector {
            width,
            words: vec![0; nwords].into_boxed_slice(),
        }
    }

    /// The low `width` bits of `value`; the rest are discarded.
    pub fn from_biguint(width: u32, value: &BigUint) -> BitVector {
        let mut res = BitVector::new(width);
        for (idx, digit) in value.iter_u64_digits().enumerate() {
            if idx >= res.words.len() {
                break;
            }
            res.words[idx] = digit;
        }
        if let Some(last) = res.words.last_mut() {
            let used = res.width % 64;
            if used != 0 {
                *last &= (1u64 << used) - 1;
            }
        }
        res
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// The bit at position `idx` (0 is least significant).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below the width.
    pub fn bit(&self, idx: u32) -> bool {
        assert!(
            idx < self.width,
            "bit index {idx} out of range for width {}",
            self.width
        );
        self.words[(idx / 64) as usize] >> (idx % 64) & 1 != 0
    }

    pub fn to_biguint(&self) -> BigUint {
        let mut bytes = Vec::with_capacity(self.words.len() * 8);
        for word in self.words.iter() {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }
}

/// Formats as a binary string, most significant bit first.
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for idx in (0..self.width).rev() {
            f.write_str(if self.bit(idx) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
