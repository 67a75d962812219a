use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{error::Error, fetch::write_file, masterlist::ServerRecord};

/// Serializes `value` as JSON indented with four spaces.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|err| {
        serde_json::Error::io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)).into()
    })
}

/// Writes the decoded servers to `path` as a JSON array.
pub fn write_json(path: &Path, servers: &[ServerRecord]) -> Result<(), Error> {
    let json = to_pretty_json(servers)?;
    write_file(path, json.as_bytes())?;

    tracing::info!("Saved received list of servers to {}", path.display());

    Ok(())
}
