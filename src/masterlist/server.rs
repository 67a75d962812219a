use serde::{Deserialize, Serialize};

use super::ByteCursor;

/// Size of the address and port that start every record.
pub(crate) const ENDPOINT_SIZE: usize = 6;

/// A game server listed in the masterlist.
///
/// Fields that weren't present in the masterlist are left at their defaults. The serialized names are the
/// ones other masterlist tools expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    /// Dotted-quad IPv4 address.
    #[serde(rename = "ip")]
    pub address: String,
    pub port: u16,
    pub players_count: u16,
    pub max_players_count: u16,
    pub game_name: String,
    pub server_name: String,
    pub mode_name: String,
    pub map_name: String,
    pub ver_name: String,
    /// 1 if the server requires a password, 0 otherwise.
    pub passworded: u8,
    pub players: Vec<String>,
    pub http_port: u16,
    pub serials: u8,
}

impl ServerRecord {
    /// Reads the address and port that start every record, in both the legacy and extended formats.
    pub fn read_endpoint(cursor: &mut ByteCursor) -> Self {
        // the octets are stored in reverse
        let mut octets: Vec<String> = (0..4).map(|_| cursor.read_u8().to_string()).collect();
        octets.reverse();

        Self {
            address: octets.join("."),
            port: cursor.read_u16(),
            ..Default::default()
        }
    }
}

/// Looks for the server listening on `address` and `port`.
pub fn find_server<'a>(
    servers: &'a [ServerRecord],
    address: &str,
    port: u16,
) -> Option<&'a ServerRecord> {
    servers
        .iter()
        .find(|server| server.address == address && server.port == port)
}
