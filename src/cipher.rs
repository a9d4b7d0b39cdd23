use crate::error::Error;
use crate::key::Key;
use crate::table::{ALPHABET_SIZE, TABLE};
use crate::text::normalize;

/// Encrypts `plaintext` under `key`. Non-letters are dropped before the
/// transform, so the ciphertext is exactly as long as the normalized
/// input.
///
/// # Examples:
/// ```
/// let cipher = vigenere::encrypt("Attack at dawn!", "LEMON").unwrap();
/// assert_eq!(cipher, "LXFOPVEFRNHR");
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, Error> {
    let text = normalize(plaintext);
    if text.is_empty() {
        return Ok(String::new());
    }
    let key = Key::new(key)?;
    let cipher = text
        .bytes()
        .enumerate()
        .map(|(pos, p)| cipher_char(p, key.at(pos)))
        .collect();
    Ok(cipher)
}

/// Inverse of [`encrypt`]: recovers the normalized plaintext.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, Error> {
    let text = normalize(ciphertext);
    if text.is_empty() {
        return Ok(String::new());
    }
    let key = Key::new(key)?;
    let plain = text
        .bytes()
        .enumerate()
        .map(|(pos, c)| decipher_char(c, key.at(pos)))
        .collect();
    Ok(plain)
}

#[inline]
fn cipher_char(plain: u8, key: u8) -> char {
    let row = (key - b'A') as usize;
    let col = (plain - b'A') as usize;
    TABLE[row][col] as char
}

// Row `k` maps column `p` to `(k + p) mod 26`, so the inverse lookup
// subtracts the row shift instead of scanning the row for the match.
#[inline]
fn decipher_char(cipher: u8, key: u8) -> char {
    let row = key - b'A';
    let col = (cipher - b'A' + ALPHABET_SIZE as u8 - row) % ALPHABET_SIZE as u8;
    (b'A' + col) as char
}
