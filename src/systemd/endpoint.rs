// Service List - Manager Endpoint
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Address of the service manager method that lists units.

use serde::{Deserialize, Serialize};

use super::{LIST_UNITS_METHOD, MANAGER_INTERFACE, SYSTEMD_BUS, SYSTEMD_PATH};

/// Which message bus to connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusKind {
    #[default]
    System,
    Session,
}

/// Where the unit listing call is sent.
///
/// Defaults to the systemd system manager. A session manager or a test
/// double on another bus name can be substituted through settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerEndpoint {
    pub bus: BusKind,
    pub destination: String,
    pub path: String,
    pub interface: String,
    pub method: String,
}

impl Default for ManagerEndpoint {
    fn default() -> Self {
        Self {
            bus: BusKind::System,
            destination: SYSTEMD_BUS.to_string(),
            path: SYSTEMD_PATH.to_string(),
            interface: MANAGER_INTERFACE.to_string(),
            method: LIST_UNITS_METHOD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_systemd_system_manager() {
        let endpoint = ManagerEndpoint::default();
        assert_eq!(endpoint.bus, BusKind::System);
        assert_eq!(endpoint.destination, "org.freedesktop.systemd1");
        assert_eq!(endpoint.path, "/org/freedesktop/systemd1");
        assert_eq!(endpoint.interface, "org.freedesktop.systemd1.Manager");
        assert_eq!(endpoint.method, "ListUnits");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let endpoint: ManagerEndpoint = serde_json::from_str(r#"{"bus": "session"}"#).unwrap();
        assert_eq!(endpoint.bus, BusKind::Session);
        assert_eq!(endpoint.destination, "org.freedesktop.systemd1");
        assert_eq!(endpoint.method, "ListUnits");
    }

    #[test]
    fn test_unknown_bus_kind_is_rejected() {
        let parsed = serde_json::from_str::<ManagerEndpoint>(r#"{"bus": "starter"}"#);
        assert!(parsed.is_err());
    }
}
