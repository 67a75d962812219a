use std::io::{self, Read, Seek, SeekFrom};

use crate::common::{read_ase_char, read_ase_int};

/// A forward-only reader over a masterlist payload.
///
/// Reads never fail. Bytes past the end of the payload count as zero, and the position still moves
/// forward, so callers are expected to check [`ByteCursor::can_advance`] before starting another record.
///
/// The cursor also implements [`Read`] and [`Seek`], so binrw structures can be read through it.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Consumes `count` bytes and decodes them as an ASE integer. See [`crate::common`] for how
    /// zero bytes are handled.
    pub fn read_int(&mut self, count: usize) -> u64 {
        let value = read_ase_int(self.window(count));
        self.position = self.position.saturating_add(count);

        value
    }

    pub fn read_u8(&mut self) -> u8 {
        self.read_int(1) as u8
    }

    pub fn read_u16(&mut self) -> u16 {
        self.read_int(2) as u16
    }

    pub fn read_u32(&mut self) -> u32 {
        self.read_int(4) as u32
    }

    /// Reads a length-prefixed string. Quotes, backslashes, tabs and newlines are dropped, so the
    /// result can be shorter than the declared length.
    pub fn read_string(&mut self) -> String {
        let length = self.read_u8();

        (0..length)
            .filter_map(|_| read_ase_char(self.read_u8()))
            .collect()
    }

    /// Returns true if there are at least `count` bytes left to read.
    pub fn can_advance(&self, count: usize) -> bool {
        self.position
            .checked_add(count)
            .is_some_and(|end| end <= self.data.len())
    }

    pub fn tell(&self) -> usize {
        self.position
    }

    /// Moves to `position`, unless it's at or past the end of the payload in which case nothing happens.
    pub fn seek(&mut self, position: usize) {
        if position < self.data.len() {
            self.position = position;
        }
    }

    /// Skips `count` bytes without decoding them. Subject to the same clamp as [`ByteCursor::seek`].
    pub fn skip(&mut self, count: usize) {
        self.seek(self.position.saturating_add(count));
    }

    fn window(&self, count: usize) -> &'a [u8] {
        let start = self.position.min(self.data.len());
        let end = self.position.saturating_add(count).min(self.data.len());

        &self.data[start..end]
    }
}

impl Read for ByteCursor<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.window(buf.len());
        buf[..available.len()].copy_from_slice(available);
        self.position += available.len();

        Ok(available.len())
    }
}

impl Seek for ByteCursor<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::Current(offset) => (self.position as u64).checked_add_signed(offset),
            SeekFrom::End(offset) => (self.data.len() as u64).checked_add_signed(offset),
        };

        let Some(target) = target else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a negative or overflowing position",
            ));
        };

        // Unlike the lenient seek, the end of the payload itself is a valid position here
        if target != self.position as u64 {
            if target > self.data.len() as u64 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "invalid seek past the end of the masterlist",
                ));
            }

            self.position = target as usize;
        }

        Ok(self.position as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_int_zero_windows() {
        let data = [0u8; 8];

        for count in 0..=4 {
            let mut cursor = ByteCursor::new(&data);
            assert_eq!(cursor.read_int(count), 0);
            assert_eq!(cursor.tell(), count);
        }
    }

    #[test]
    fn read_int_drops_zero_bytes() {
        let data = [0x12, 0x00, 0x34];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_int(3), 4660);
        assert_eq!(cursor.tell(), 3);
    }

    #[test]
    fn read_int_past_end() {
        let data = [0x01, 0x02];
        let mut cursor = ByteCursor::new(&data);

        // the missing bytes contribute nothing
        assert_eq!(cursor.read_int(4), 0x0102);
        assert_eq!(cursor.tell(), 4);

        // and the cursor is now beyond the payload
        assert_eq!(cursor.read_int(2), 0);
        assert_eq!(cursor.tell(), 6);
        assert!(!cursor.can_advance(0));
    }

    #[test]
    fn read_string_drops_characters() {
        // A"B\C
        let data = [5, b'A', b'"', b'B', b'\\', b'C'];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_string(), "ABC");
        assert_eq!(cursor.tell(), 6);
    }

    #[test]
    fn read_string_whitespace() {
        let data = [6, b'a', b'\t', b'b', b'\n', b' ', b'c'];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_string(), "ab c");
    }

    #[test]
    fn read_string_truncated() {
        let data = [4, b'h', b'i'];
        let mut cursor = ByteCursor::new(&data);

        // over-read bytes come back as NUL characters
        assert_eq!(cursor.read_string(), "hi\0\0");
        assert_eq!(cursor.tell(), 5);
    }

    #[test]
    fn read_empty_string() {
        let data = [0, b'x'];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_string(), "");
        assert_eq!(cursor.tell(), 1);
    }

    #[test]
    fn can_advance() {
        let data = [0u8; 6];
        let mut cursor = ByteCursor::new(&data);

        assert!(cursor.can_advance(6));
        assert!(!cursor.can_advance(7));

        cursor.read_int(1);
        assert!(cursor.can_advance(5));
        assert!(!cursor.can_advance(6));
        assert!(!cursor.can_advance(usize::MAX));
    }

    #[test]
    fn seek_is_clamped() {
        let data = [0u8; 4];
        let mut cursor = ByteCursor::new(&data);

        cursor.seek(3);
        assert_eq!(cursor.tell(), 3);

        // at or past the end is ignored
        cursor.seek(4);
        assert_eq!(cursor.tell(), 3);
        cursor.seek(100);
        assert_eq!(cursor.tell(), 3);

        // backwards is allowed
        cursor.seek(1);
        assert_eq!(cursor.tell(), 1);
    }

    #[test]
    fn skip() {
        let data = [0u8; 8];
        let mut cursor = ByteCursor::new(&data);

        cursor.skip(4);
        assert_eq!(cursor.tell(), 4);

        cursor.skip(4);
        assert_eq!(cursor.tell(), 4);
    }

    #[test]
    fn io_read() {
        let data = [1, 2, 3];
        let mut cursor = ByteCursor::new(&data);

        let mut buf = [0u8; 2];
        cursor.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2]);
        assert!(cursor.read_exact(&mut buf).is_err());
    }

    #[test]
    fn io_seek() {
        let data = [1, 2, 3, 4];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(Seek::seek(&mut cursor, SeekFrom::Start(2)).unwrap(), 2);
        assert_eq!(Seek::seek(&mut cursor, SeekFrom::Current(-1)).unwrap(), 1);
        assert_eq!(Seek::seek(&mut cursor, SeekFrom::End(-1)).unwrap(), 3);
        assert!(Seek::seek(&mut cursor, SeekFrom::Current(-10)).is_err());

        // the end itself is reachable, past it is not
        assert_eq!(Seek::seek(&mut cursor, SeekFrom::End(0)).unwrap(), 4);
        assert_eq!(cursor.tell(), 4);
        assert!(Seek::seek(&mut cursor, SeekFrom::Start(5)).is_err());
        assert_eq!(cursor.tell(), 4);
    }

    #[test]
    fn io_seek_keeps_lenient_seek_separate() {
        let data = [1, 2, 3, 4];
        let mut cursor = ByteCursor::new(&data);

        cursor.seek(1);
        cursor.seek(4);
        assert_eq!(cursor.tell(), 1);

        Seek::seek(&mut cursor, SeekFrom::Start(4)).unwrap();
        assert_eq!(cursor.tell(), 4);
    }
}
