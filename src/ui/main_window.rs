// Service List - Main Window
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Main application window holding the service list.

use std::cell::RefCell;

use gtk4::prelude::*;
use gtk4::subclass::prelude::*;
use gtk4::{gio, glib};
use libadwaita as adw;
use libadwaita::prelude::*;
use tracing::warn;

use super::service_list::{build_list_view, build_name_filter, count_label, populate};
use crate::config::Settings;
use crate::systemd::{self, ManagerEndpoint};

/// Window title.
const TITLE: &str = "Service Manager";

glib::wrapper! {
    /// The main application window.
    pub struct MainWindow(ObjectSubclass<imp::MainWindow>)
        @extends adw::ApplicationWindow, gtk4::ApplicationWindow, gtk4::Window, gtk4::Widget,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl MainWindow {
    /// Create a new main window.
    pub fn new(app: &impl IsA<gtk4::Application>, settings: &Settings) -> Self {
        let window: Self = glib::Object::builder()
            .property("application", app)
            .property("title", TITLE)
            .property("default-width", settings.window_width)
            .property("default-height", settings.window_height)
            .build();

        window.setup_ui();
        window
    }

    /// Setup the main UI.
    fn setup_ui(&self) {
        let imp = self.imp();

        let store = gtk4::StringList::new(&[]);
        let filter = build_name_filter();

        let header = adw::HeaderBar::new();
        let title = adw::WindowTitle::new(TITLE, "");
        header.set_title_widget(Some(&title));

        let search_entry = gtk4::SearchEntry::builder()
            .placeholder_text("Search services...")
            .build();
        let filter_clone = filter.clone();
        search_entry.connect_search_changed(move |entry| {
            filter_clone.set_search(Some(entry.text().as_str()));
        });
        header.pack_start(&search_entry);

        let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
        content.append(&header);
        content.append(&build_list_view(&store, &filter));
        self.set_content(Some(&content));

        imp.store.replace(Some(store));
        imp.title.replace(Some(title));
    }

    /// Schedule the one-time service listing.
    ///
    /// Runs once from an idle callback. The bus call happens on a blocking
    /// worker and rows are appended back on the main loop. There is no way
    /// to cancel or repeat it.
    pub fn schedule_load(&self, endpoint: ManagerEndpoint) {
        let window = self.clone();
        glib::idle_add_local_once(move || {
            glib::spawn_future_local(async move {
                let result =
                    gio::spawn_blocking(move || systemd::enumerate_services(&endpoint)).await;

                match result {
                    Ok(result) => window.show_services(result),
                    Err(_) => warn!("Service enumeration task panicked"),
                }
            });
        });
    }

    fn show_services(&self, result: Result<Vec<String>, systemd::EnumerationError>) {
        let imp = self.imp();

        let Some(store) = imp.store.borrow().clone() else {
            return;
        };
        let Some(count) = populate(&store, result) else {
            return;
        };

        if let Some(title) = imp.title.borrow().as_ref() {
            title.set_subtitle(&count_label(count));
        }
    }
}

mod imp {
    use super::*;
    use libadwaita::subclass::prelude::*;

    #[derive(Default)]
    pub struct MainWindow {
        pub store: RefCell<Option<gtk4::StringList>>,
        pub title: RefCell<Option<adw::WindowTitle>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for MainWindow {
        const NAME: &'static str = "ServiceListMainWindow";
        type Type = super::MainWindow;
        type ParentType = adw::ApplicationWindow;
    }

    impl ObjectImpl for MainWindow {}
    impl WidgetImpl for MainWindow {}
    impl WindowImpl for MainWindow {}
    impl ApplicationWindowImpl for MainWindow {}
    impl AdwApplicationWindowImpl for MainWindow {}
}
