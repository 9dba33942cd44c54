// Service List - Service Enumerator
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Reduces the manager's unit list to service unit names.

use std::collections::TryReserveError;

use thiserror::Error;
use tracing::debug;

use super::client::DbusUnitSource;
use super::{ManagerEndpoint, SERVICE_SUFFIX};

/// Errors that end an enumeration. No partial list accompanies any of them.
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// The bus could not be reached or refused the connection.
    #[error("Failed to connect to the bus: {0}")]
    Connection(#[source] zbus::Error),

    /// The method call itself failed.
    #[error("Unit listing call failed: {0}")]
    Call(#[source] zbus::Error),

    /// The reply was not an array of unit records.
    #[error("Unexpected unit listing reply: {0}")]
    MalformedReply(#[source] zbus::Error),

    /// The result list could not grow.
    #[error("Out of memory while collecting services")]
    Allocation(#[from] TryReserveError),
}

/// Something that can list the names of the currently loaded units.
pub trait UnitSource {
    /// Unit names in the order the manager reports them.
    fn list_unit_names(&self) -> Result<Vec<String>, EnumerationError>;
}

/// Whether a unit name denotes a service unit.
///
/// The name must be strictly longer than the suffix, so `.service` alone
/// does not qualify. Matching is case-sensitive.
pub fn is_service_unit(name: &str) -> bool {
    name.len() > SERVICE_SUFFIX.len() && name.ends_with(SERVICE_SUFFIX)
}

/// Keep the service units of `names`, preserving their order.
pub fn filter_services<I>(names: I) -> Result<Vec<String>, EnumerationError>
where
    I: IntoIterator<Item = String>,
{
    collect_services(names, |services| services.try_reserve(1))
}

/// Collect service units, calling `reserve` before each push.
///
/// A failed reservation drops everything collected so far.
fn collect_services<I, R>(names: I, mut reserve: R) -> Result<Vec<String>, EnumerationError>
where
    I: IntoIterator<Item = String>,
    R: FnMut(&mut Vec<String>) -> Result<(), TryReserveError>,
{
    let mut services = Vec::new();
    for name in names.into_iter().filter(|name| is_service_unit(name)) {
        reserve(&mut services)?;
        services.push(name);
    }
    Ok(services)
}

/// Lists service units from a [`UnitSource`].
///
/// Stateless: every call queries the source afresh.
#[derive(Debug, Clone, Default)]
pub struct ServiceEnumerator<S> {
    source: S,
}

impl<S: UnitSource> ServiceEnumerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Query the source once and return its service units.
    pub fn enumerate_services(&self) -> Result<Vec<String>, EnumerationError> {
        let names = self.source.list_unit_names()?;
        let total = names.len();
        let services = filter_services(names)?;

        debug!("{} of {} units are services", services.len(), total);
        Ok(services)
    }
}

/// Enumerate service units from the manager at `endpoint`.
pub fn enumerate_services(endpoint: &ManagerEndpoint) -> Result<Vec<String>, EnumerationError> {
    ServiceEnumerator::new(DbusUnitSource::new(endpoint.clone())).enumerate_services()
}
