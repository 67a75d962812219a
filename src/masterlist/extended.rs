use binrw::{BinRead, binread};

use crate::common::read_ase_u32;

use super::{
    AseField, AseFlags, ByteCursor, ServerRecord, flags::read_ase_flags, server::ENDPOINT_SIZE,
};

/// Comes before the records of an extended masterlist.
#[binread]
#[br(big)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedPreamble {
    /// Which fields every record carries.
    #[br(parse_with = read_ase_flags)]
    pub flags: AseFlags,
    #[br(parse_with = read_ase_u32)]
    pub sequence_number: u32,
    /// Advertised number of records, not used to bound decoding.
    #[br(parse_with = read_ase_u32)]
    pub count: u32,
}

/// Decodes an extended (version 2) masterlist.
///
/// Every record starts with its own length, and once the known fields are read the cursor always jumps to
/// the end of the record as declared. This skips over fields we don't understand, but it also means a
/// record that lies about its length will make us re-read (or skip) bytes.
pub fn parse_extended(cursor: &mut ByteCursor) -> Vec<ServerRecord> {
    let preamble = match ExtendedPreamble::read(cursor) {
        Ok(preamble) => preamble,
        Err(err) => {
            tracing::warn!("Extended masterlist is too short for its preamble: {err}");
            return Vec::new();
        }
    };

    tracing::debug!(
        "Extended masterlist #{} advertises {} servers with {:?}",
        preamble.sequence_number,
        preamble.count,
        preamble.flags
    );

    let mut servers = Vec::new();
    // Same bound as the legacy format, even though a record here also has its length in front
    while cursor.can_advance(ENDPOINT_SIZE) {
        let start = cursor.tell();
        let length = cursor.read_u16() as usize;

        let mut server = ServerRecord::read_endpoint(cursor);
        for field in AseField::present_in(preamble.flags) {
            field.read(cursor, &mut server);
        }

        cursor.seek(start + length);
        servers.push(server);

        // A zero length puts us back at the start of this record, which would repeat forever
        if cursor.tell() == start {
            tracing::warn!("Masterlist record at {start} has a zero length, stopping here");
            break;
        }
    }

    servers
}
