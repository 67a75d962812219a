//! Decoding of the binary masterlist served by ASE-style master servers.

use binrw::{BinRead, binread};

use crate::common::read_ase_u16;

mod cursor;
pub use cursor::ByteCursor;

mod extended;
pub use extended::{ExtendedPreamble, parse_extended};

mod flags;
pub use flags::{AseField, AseFlags};

mod legacy;
pub use legacy::parse_legacy;

mod server;
pub use server::{ServerRecord, find_server};

/// The first bytes of every masterlist.
#[binread]
#[br(big)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterlistHeader {
    /// Zero for every format we understand. Older formats put something else here.
    #[br(parse_with = read_ase_u16)]
    pub marker: u16,
    /// Only present when the marker is zero.
    #[br(if(marker == 0), parse_with = read_ase_u16)]
    pub version: u16,
}

/// The layouts a masterlist can come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterlistFormat {
    /// Addresses and ports only.
    Legacy,
    /// Flag-driven records with a length prefix.
    Extended,
    /// Anything else, which we can't decode.
    Unsupported,
}

impl MasterlistHeader {
    pub fn format(&self) -> MasterlistFormat {
        match (self.marker, self.version) {
            (0, 0) => MasterlistFormat::Legacy,
            (0, 2) => MasterlistFormat::Extended,
            _ => MasterlistFormat::Unsupported,
        }
    }
}

/// Decodes every server in a masterlist. Payloads we don't understand decode to nothing.
pub fn parse_masterlist(data: &[u8]) -> Vec<ServerRecord> {
    parse_masterlist_from(&mut ByteCursor::new(data))
}

/// Same as [`parse_masterlist`], but reads from an existing cursor and leaves it where decoding stopped.
pub fn parse_masterlist_from(cursor: &mut ByteCursor) -> Vec<ServerRecord> {
    let header = match MasterlistHeader::read(cursor) {
        Ok(header) => header,
        Err(err) => {
            tracing::warn!("Masterlist is too short for its header: {err}");
            return Vec::new();
        }
    };

    let servers = match header.format() {
        MasterlistFormat::Legacy => parse_legacy(cursor),
        MasterlistFormat::Extended => parse_extended(cursor),
        MasterlistFormat::Unsupported => {
            tracing::warn!(
                "Unsupported masterlist format (marker {}, version {})",
                header.marker,
                header.version
            );
            Vec::new()
        }
    };

    tracing::debug!("Decoded {} servers from {:?} masterlist", servers.len(), header.format());

    servers
}
