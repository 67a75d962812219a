use super::{ByteCursor, ServerRecord, server::ENDPOINT_SIZE};

/// Decodes a legacy masterlist, which only lists addresses and ports.
///
/// Each record is just an endpoint. The cursor is expected to be right after the format header. The
/// record count is read but isn't trusted, records are read for as long as there are bytes left for one.
pub fn parse_legacy(cursor: &mut ByteCursor) -> Vec<ServerRecord> {
    let count = cursor.read_u32();
    tracing::debug!("Legacy masterlist advertises {count} servers");

    let mut servers = Vec::new();
    while cursor.can_advance(ENDPOINT_SIZE) {
        servers.push(ServerRecord::read_endpoint(cursor));
    }

    servers
}
