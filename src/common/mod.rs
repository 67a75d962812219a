//! Specialized functions for mapping masterlist bytes to values should go here.

use binrw::BinResult;

/// Character codes that are dropped from strings instead of being escaped.
const DROPPED_CHARACTERS: [u8; 4] = [b'"', b'\\', b'\t', b'\n'];

/// Decodes an ASE integer from a window of bytes.
///
/// Every zero byte in the window is dropped, wherever it occurs, and the remaining bytes are
/// concatenated as two-digit hex groups before being parsed in base 16. So `[0x00, 0x01, 0x02]`
/// is `0x0102` and `[0x12, 0x00, 0x34]` is `0x1234`. A window of only zeroes is 0.
///
/// This is what the masterlist server expects us to do, even though it mangles values that contain
/// a genuine zero byte. Only the low 64 bits survive if more than 8 bytes are non-zero.
pub(crate) fn read_ase_int(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .filter(|byte| **byte != 0)
        .fold(0u64, |value, byte| (value << 8) | u64::from(*byte))
}

/// Maps a character code from a masterlist string, or `None` if it's one of the dropped characters.
pub(crate) fn read_ase_char(code: u8) -> Option<char> {
    if DROPPED_CHARACTERS.contains(&code) {
        None
    } else {
        Some(char::from(code))
    }
}

#[binrw::parser(reader)]
pub(crate) fn read_ase_u16() -> BinResult<u16> {
    let mut bytes = [0u8; 2];
    reader.read_exact(&mut bytes)?;

    // two non-zero bytes at most, so this always fits
    Ok(read_ase_int(&bytes) as u16)
}

#[binrw::parser(reader)]
pub(crate) fn read_ase_u32() -> BinResult<u32> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;

    Ok(read_ase_int(&bytes) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_windows() {
        assert_eq!(read_ase_int(&[]), 0);
        assert_eq!(read_ase_int(&[0x00]), 0);
        assert_eq!(read_ase_int(&[0x00, 0x00]), 0);
        assert_eq!(read_ase_int(&[0x00, 0x00, 0x00, 0x00]), 0);
    }

    #[test]
    fn zero_bytes_are_dropped() {
        // leading zero
        assert_eq!(read_ase_int(&[0x00, 0x01, 0x02]), 258);

        // interior zero is not a padding byte
        assert_eq!(read_ase_int(&[0x12, 0x00, 0x34]), 4660);

        // trailing zero
        assert_eq!(read_ase_int(&[0x1F, 0x00]), 0x1F);
        assert_eq!(read_ase_int(&[0x1F, 0x90]), 8080);
    }

    #[test]
    fn four_byte_values() {
        assert_eq!(read_ase_int(&[0xFF, 0xFF, 0xFF, 0xFF]), u32::MAX as u64);
        assert_eq!(read_ase_int(&[0x00, 0x08, 0x00, 0x0C]), 0x080C);
    }

    #[test]
    fn dropped_characters() {
        assert_eq!(read_ase_char(b'"'), None);
        assert_eq!(read_ase_char(b'\\'), None);
        assert_eq!(read_ase_char(b'\t'), None);
        assert_eq!(read_ase_char(b'\n'), None);

        assert_eq!(read_ase_char(b'A'), Some('A'));
        assert_eq!(read_ase_char(b'\r'), Some('\r'));
        assert_eq!(read_ase_char(0), Some('\0'));
        // high bytes map straight to their code point
        assert_eq!(read_ase_char(0xE9), Some('é'));
    }
}
