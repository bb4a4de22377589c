//! Display names: 12 symbols from the sampler's own 41-character alphabet.

use crate::error::{Error, Result};

/// Length of every name field, in bytes and in characters.
pub const NAME_LENGTH: usize = 12;

/// Sampler character set; a name byte is an index into this table.
pub const ALPHABET: [char; 41] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ' ', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H',
    'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '*',
    '+', '-', '.',
];

const SPACE: u8 = 10;

fn symbol_index(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        ' ' => Some(SPACE),
        'A'..='Z' => Some(c as u8 - b'A' + 11),
        '*' => Some(37),
        '+' => Some(38),
        '-' => Some(39),
        '.' => Some(40),
        _ => None,
    }
}

/// Decodes a name window. Bytes outside the alphabet read as spaces.
pub fn decode_name(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| ALPHABET.get(b as usize).copied().unwrap_or(' '))
        .collect()
}

/// Encodes `name` upper-cased and space-padded to exactly 12 bytes.
pub fn encode_name(name: &str) -> Result<[u8; NAME_LENGTH]> {
    let length = name.chars().count();
    if length > NAME_LENGTH {
        return Err(Error::NameTooLong { length });
    }

    let mut bytes = [SPACE; NAME_LENGTH];
    for (position, c) in name.chars().enumerate() {
        let upper = c.to_ascii_uppercase();
        bytes[position] =
            symbol_index(upper).ok_or(Error::InvalidNameCharacter { character: c, position })?;
    }
    Ok(bytes)
}
