// Service List - UI Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! User interface components.

mod main_window;
mod service_list;

pub use main_window::MainWindow;
