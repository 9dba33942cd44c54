// Service List - Main Entry Point
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Service List - A GTK4/Libadwaita window listing systemd services.

use gtk4::glib;
use gtk4::prelude::*;
use tracing_subscriber::EnvFilter;

mod application;
mod config;
mod systemd;
mod ui;

use application::Application;

/// Application ID for the service list.
const APP_ID: &str = "org.servicelist.ServiceList";

fn main() -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    glib::set_application_name("Service Manager");

    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = Application::new(APP_ID);
    app.run()
}
