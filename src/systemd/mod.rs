// Service List - Systemd Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Systemd D-Bus access and service unit enumeration.

mod client;
mod endpoint;
mod enumerator;

pub use endpoint::{BusKind, ManagerEndpoint};
pub use enumerator::{enumerate_services, EnumerationError};

/// D-Bus bus name of the systemd manager.
pub const SYSTEMD_BUS: &str = "org.freedesktop.systemd1";

/// Object path of the systemd manager.
pub const SYSTEMD_PATH: &str = "/org/freedesktop/systemd1";

/// Manager interface exposing `ListUnits`.
pub const MANAGER_INTERFACE: &str = "org.freedesktop.systemd1.Manager";

/// Method returning every currently loaded unit.
pub const LIST_UNITS_METHOD: &str = "ListUnits";

/// Suffix identifying service units.
pub const SERVICE_SUFFIX: &str = ".service";
