// Service List - Systemd D-Bus Client
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! D-Bus implementation of the unit listing call.

use tracing::{debug, info};
use zbus::blocking::Connection;
use zbus::zvariant::OwnedObjectPath;
use zbus::Message;

use super::enumerator::{EnumerationError, UnitSource};
use super::{BusKind, ManagerEndpoint};

/// Wire shape of one `ListUnits` record, `(ssssssouso)`.
type RawUnit = (
    String,
    String,
    String,
    String,
    String,
    String,
    OwnedObjectPath,
    u32,
    String,
    OwnedObjectPath,
);

/// Unit names from a `ListUnits` reply, in reply order.
///
/// The body must decode as the full record array. Anything else is a
/// malformed reply rather than an empty one.
pub fn decode_unit_names(reply: &Message) -> Result<Vec<String>, EnumerationError> {
    let units: Vec<RawUnit> = reply
        .body()
        .deserialize()
        .map_err(EnumerationError::MalformedReply)?;

    Ok(units.into_iter().map(|(name, ..)| name).collect())
}

/// Lists units by calling the manager over D-Bus.
///
/// Holds no connection between calls: each listing opens its own
/// connection and drops it, with the reply, before returning.
#[derive(Debug, Clone, Default)]
pub struct DbusUnitSource {
    endpoint: ManagerEndpoint,
}

impl DbusUnitSource {
    /// Create a source for the given endpoint.
    pub fn new(endpoint: ManagerEndpoint) -> Self {
        Self { endpoint }
    }

    fn connect(&self) -> Result<Connection, EnumerationError> {
        debug!("Connecting to the {:?} bus", self.endpoint.bus);

        let conn = match self.endpoint.bus {
            BusKind::System => Connection::system(),
            BusKind::Session => Connection::session(),
        };
        conn.map_err(EnumerationError::Connection)
    }
}

impl UnitSource for DbusUnitSource {
    fn list_unit_names(&self) -> Result<Vec<String>, EnumerationError> {
        let conn = self.connect()?;
        let endpoint = &self.endpoint;

        let reply = conn
            .call_method(
                Some(endpoint.destination.as_str()),
                endpoint.path.as_str(),
                Some(endpoint.interface.as_str()),
                endpoint.method.as_str(),
                &(),
            )
            .map_err(EnumerationError::Call)?;

        let names = decode_unit_names(&reply)?;
        info!("{} reported {} units", endpoint.destination, names.len());
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_path(path: &str) -> OwnedObjectPath {
        OwnedObjectPath::try_from(path).unwrap()
    }

    fn unit(name: &str, description: &str) -> RawUnit {
        (
            name.to_string(),
            description.to_string(),
            "loaded".to_string(),
            "active".to_string(),
            "running".to_string(),
            String::new(),
            object_path("/org/freedesktop/systemd1/unit/x"),
            0,
            String::new(),
            object_path("/"),
        )
    }

    fn reply_with<B>(body: &B) -> Message
    where
        B: serde::Serialize + zbus::zvariant::DynamicType,
    {
        Message::method("/org/freedesktop/systemd1", "ListUnits")
            .unwrap()
            .build(body)
            .unwrap()
    }

    #[test]
    fn test_decode_keeps_reply_order() {
        let units = vec![
            unit("sshd.service", "OpenSSH server daemon"),
            unit("dbus.socket", "D-Bus System Message Bus Socket"),
            unit("NetworkManager.service", "Network Manager"),
        ];

        let names = decode_unit_names(&reply_with(&units)).unwrap();
        assert_eq!(names, vec!["sshd.service", "dbus.socket", "NetworkManager.service"]);
    }

    #[test]
    fn test_decode_empty_array() {
        let units: Vec<RawUnit> = Vec::new();
        assert!(decode_unit_names(&reply_with(&units)).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_body_shape_is_malformed() {
        let err = decode_unit_names(&reply_with(&(42u32,))).unwrap_err();
        assert!(matches!(err, EnumerationError::MalformedReply(_)));
    }

    #[test]
    fn test_array_of_plain_strings_is_malformed() {
        let names = vec!["sshd.service".to_string()];
        let err = decode_unit_names(&reply_with(&names)).unwrap_err();
        assert!(matches!(err, EnumerationError::MalformedReply(_)));
    }

    #[test]
    fn test_empty_body_is_malformed() {
        let err = decode_unit_names(&reply_with(&())).unwrap_err();
        assert!(matches!(err, EnumerationError::MalformedReply(_)));
    }
}
