// Service List - Application
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Main application struct and lifecycle management.

use std::cell::RefCell;

use gtk4::prelude::*;
use gtk4::subclass::prelude::*;
use gtk4::{gio, glib};
use libadwaita as adw;
use libadwaita::prelude::*;
use tracing::info;

use crate::config::Settings;
use crate::ui::MainWindow;

glib::wrapper! {
    /// The main application object.
    pub struct Application(ObjectSubclass<imp::Application>)
        @extends adw::Application, gtk4::Application, gio::Application,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl Application {
    /// Create a new application instance.
    pub fn new(app_id: &str) -> Self {
        glib::Object::builder()
            .property("application-id", app_id)
            .property("flags", gio::ApplicationFlags::FLAGS_NONE)
            .build()
    }

    /// Setup application actions.
    fn setup_actions(&self) {
        let quit_action = gio::ActionEntry::builder("quit")
            .activate(|app: &Self, _, _| {
                app.quit();
            })
            .build();

        let about_action = gio::ActionEntry::builder("about")
            .activate(|app: &Self, _, _| {
                app.show_about_dialog();
            })
            .build();

        self.add_action_entries([quit_action, about_action]);
    }

    /// Setup keyboard shortcuts.
    fn setup_shortcuts(&self) {
        self.set_accels_for_action("app.quit", &["<Control>q"]);
    }

    /// Show the about dialog.
    fn show_about_dialog(&self) {
        let dialog = adw::AboutDialog::builder()
            .application_name("Service Manager")
            .developer_name("Christos A. Daggas")
            .version(env!("CARGO_PKG_VERSION"))
            .license_type(gtk4::License::MitX11)
            .comments("List the systemd services on this machine")
            .build();

        if let Some(window) = self.active_window() {
            dialog.present(Some(&window));
        }
    }
}

mod imp {
    use super::*;
    use libadwaita::subclass::prelude::*;
    use std::cell::OnceCell;

    #[derive(Default)]
    pub struct Application {
        pub window: OnceCell<MainWindow>,
        pub settings: RefCell<Settings>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Application {
        const NAME: &'static str = "ServiceListApplication";
        type Type = super::Application;
        type ParentType = adw::Application;
    }

    impl ObjectImpl for Application {
        fn constructed(&self) {
            self.parent_constructed();
            self.settings.replace(Settings::load());
        }
    }

    impl ApplicationImpl for Application {
        fn activate(&self) {
            let app = self.obj();

            // A second activation only raises the existing window
            if let Some(window) = self.window.get() {
                window.present();
                return;
            }

            app.setup_actions();
            app.setup_shortcuts();

            let settings = self.settings.borrow().clone();
            let window = self.window.get_or_init(|| MainWindow::new(&*app, &settings));

            window.present();
            window.schedule_load(settings.endpoint);
        }

        fn startup(&self) {
            self.parent_startup();
            info!("Application starting up");
        }
    }

    impl GtkApplicationImpl for Application {}
    impl AdwApplicationImpl for Application {}
}
