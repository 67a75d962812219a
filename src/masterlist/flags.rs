use binrw::BinResult;
use bitflags::bitflags;

use crate::common::read_ase_int;

use super::{ByteCursor, ServerRecord};

/// The global flag word of an extended masterlist, describing which fields each record carries.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct AseFlags(pub u32);

impl std::fmt::Debug for AseFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

bitflags! {
    impl AseFlags : u32 {
        const PLAYER_COUNT = 0x0004;
        const MAX_PLAYER_COUNT = 0x0008;
        const GAME_NAME = 0x0010;
        const SERVER_NAME = 0x0020;
        const GAME_MODE = 0x0040;
        const MAP_NAME = 0x0080;
        const SERVER_VERSION = 0x0100;
        const PASSWORDED = 0x0200;
        const SERIALS = 0x0400;
        const PLAYER_LIST = 0x0800;
        const RESPONDING = 0x1000;
        const RESTRICTION = 0x2000;
        const SEARCH_IGNORE_SECTIONS = 0x4000;
        const KEEP_FLAG = 0x8000;
        const HTTP_PORT = 0x080000;
        const SPECIAL = 0x100000;
    }
}

#[binrw::parser(reader)]
pub(crate) fn read_ase_flags() -> BinResult<AseFlags> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;

    Ok(AseFlags::from_bits_retain(read_ase_int(&bytes) as u32))
}

/// An optional field of an extended masterlist record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AseField {
    PlayerCount,
    MaxPlayerCount,
    GameName,
    ServerName,
    GameMode,
    MapName,
    ServerVersion,
    Passworded,
    Serials,
    PlayerList,
    /// Only meaningful to the game itself, read and thrown away.
    Responding,
    /// Only meaningful to the game itself, read and thrown away.
    Restriction,
    /// A list of 2-byte sections that is skipped over.
    SearchIgnoreSections,
    /// Only meaningful to the game itself, read and thrown away.
    KeepFlag,
    HttpPort,
    /// Only meaningful to the game itself, read and thrown away.
    Special,
}

impl AseField {
    /// Every field in the order it appears on the wire.
    pub const WIRE_ORDER: [AseField; 16] = [
        AseField::PlayerCount,
        AseField::MaxPlayerCount,
        AseField::GameName,
        AseField::ServerName,
        AseField::GameMode,
        AseField::MapName,
        AseField::ServerVersion,
        AseField::Passworded,
        AseField::Serials,
        AseField::PlayerList,
        AseField::Responding,
        AseField::Restriction,
        AseField::SearchIgnoreSections,
        AseField::KeepFlag,
        AseField::HttpPort,
        AseField::Special,
    ];

    /// The flag that has to be set for this field to be present.
    pub fn flag(self) -> AseFlags {
        match self {
            AseField::PlayerCount => AseFlags::PLAYER_COUNT,
            AseField::MaxPlayerCount => AseFlags::MAX_PLAYER_COUNT,
            AseField::GameName => AseFlags::GAME_NAME,
            AseField::ServerName => AseFlags::SERVER_NAME,
            AseField::GameMode => AseFlags::GAME_MODE,
            AseField::MapName => AseFlags::MAP_NAME,
            AseField::ServerVersion => AseFlags::SERVER_VERSION,
            AseField::Passworded => AseFlags::PASSWORDED,
            AseField::Serials => AseFlags::SERIALS,
            AseField::PlayerList => AseFlags::PLAYER_LIST,
            AseField::Responding => AseFlags::RESPONDING,
            AseField::Restriction => AseFlags::RESTRICTION,
            AseField::SearchIgnoreSections => AseFlags::SEARCH_IGNORE_SECTIONS,
            AseField::KeepFlag => AseFlags::KEEP_FLAG,
            AseField::HttpPort => AseFlags::HTTP_PORT,
            AseField::Special => AseFlags::SPECIAL,
        }
    }

    /// Returns the fields present under `flags`, in wire order.
    pub fn present_in(flags: AseFlags) -> impl Iterator<Item = AseField> {
        Self::WIRE_ORDER
            .into_iter()
            .filter(move |field| flags.contains(field.flag()))
    }

    /// Reads this field from `cursor` into `record`.
    pub fn read(self, cursor: &mut ByteCursor, record: &mut ServerRecord) {
        match self {
            AseField::PlayerCount => record.players_count = cursor.read_u16(),
            AseField::MaxPlayerCount => record.max_players_count = cursor.read_u16(),
            AseField::GameName => record.game_name = cursor.read_string(),
            AseField::ServerName => record.server_name = cursor.read_string(),
            AseField::GameMode => record.mode_name = cursor.read_string(),
            AseField::MapName => record.map_name = cursor.read_string(),
            AseField::ServerVersion => record.ver_name = cursor.read_string(),
            AseField::Passworded => record.passworded = cursor.read_u8(),
            AseField::Serials => record.serials = cursor.read_u8(),
            AseField::PlayerList => {
                let count = cursor.read_u16();
                for _ in 0..count {
                    record.players.push(cursor.read_string());
                }
            }
            AseField::Responding | AseField::KeepFlag | AseField::Special => {
                cursor.read_u8();
            }
            AseField::Restriction => {
                cursor.read_u32();
            }
            AseField::SearchIgnoreSections => {
                let count = cursor.read_u8() as usize;
                cursor.skip(count * 2);
            }
            AseField::HttpPort => record.http_port = cursor.read_u16(),
        }
    }
}
