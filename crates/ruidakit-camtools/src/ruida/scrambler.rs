//! Ruida body obfuscation: a byte-wise XOR with a fixed key.

/// XOR key applied to every body byte
pub const SCRAMBLE_KEY: u8 = 0xAC;

/// Scramble (or unscramble) a byte stream into a new buffer
pub fn scramble(data: &[u8]) -> Vec<u8> {
    data.iter().map(|b| b ^ SCRAMBLE_KEY).collect()
}
