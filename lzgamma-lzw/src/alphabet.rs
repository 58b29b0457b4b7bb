//! The fixed 93-symbol LZW alphabet.

/// Every character the LZW codec accepts, in code order (codes 0..=92).
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^&*()_+-={}[]:;|'\\<>?~,./0123456789 ";

/// Number of symbols pre-seeded into the dictionary.
pub const ALPHABET_SIZE: usize = 93;

/// Largest code an output unit can hold.
pub const MAX_CODE: u32 = u16::MAX as u32;

/// Code of `ch` in the alphabet, if it is a member.
pub fn code_of(ch: char) -> Option<u16> {
    ALPHABET.chars().position(|c| c == ch).map(|index| index as u16)
}

/// Whether every character of `text` belongs to the alphabet.
pub fn is_supported(text: &str) -> bool {
    text.chars().all(|ch| code_of(ch).is_some())
}
