use core::convert::TryFrom;
use core::fmt;
use core::str;

use crate::error::Error;
use crate::text::normalize;

/// A cipher key, held already normalized to uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    buf: Vec<u8>,
}

impl Key {
    /// Normalizes `raw` and keeps the surviving letters. A key that
    /// normalizes to nothing is rejected rather than left to fault
    /// during expansion.
    pub fn new(raw: &str) -> Result<Key, Error> {
        let buf = normalize(raw).into_bytes();
        if buf.is_empty() {
            return Err(Error::EmptyKey);
        }
        Ok(Key { buf })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Key letter applied at message position `pos`.
    #[inline]
    pub fn at(&self, pos: usize) -> u8 {
        self.buf[pos % self.buf.len()]
    }

    /// Cyclically repeats the key out to exactly `len` characters.
    ///
    /// # Examples:
    /// ```
    /// use vigenere::key::Key;
    ///
    /// let k = Key::new("LEMON").unwrap();
    /// assert_eq!(k.expand(12), "LEMONLEMONLE");
    /// ```
    pub fn expand(&self, len: usize) -> String {
        self.buf.iter().cycle().take(len).map(|&b| b as char).collect()
    }
}

/// Repeats the normalized key to exactly `len` characters. `len == 0`
/// yields an empty string; a letterless key with `len > 0` is an error.
pub fn expand_key(key: &str, len: usize) -> Result<String, Error> {
    if len == 0 {
        return Ok(String::new());
    }
    Ok(Key::new(key)?.expand(len))
}

impl TryFrom<&str> for Key {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Key::new(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // buf holds ASCII letters only
        f.write_str(str::from_utf8(&self.buf).map_err(|_| fmt::Error)?)
    }
}
