// Service List - Service List View
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! List model plumbing and the scrollable list showing unit names.

use gtk4::prelude::*;
use tracing::{info, warn};

use crate::systemd::EnumerationError;

/// An ordered list that enumerated services are appended to.
pub trait ServiceSink {
    fn append(&self, name: &str);
}

impl ServiceSink for gtk4::StringList {
    fn append(&self, name: &str) {
        gtk4::StringList::append(self, name);
    }
}

/// Feed an enumeration result into `sink`.
///
/// Returns the number of rows appended, or `None` when the enumeration
/// failed. A failure appends nothing and is only logged.
pub fn populate<S>(sink: &S, result: Result<Vec<String>, EnumerationError>) -> Option<usize>
where
    S: ServiceSink + ?Sized,
{
    match result {
        Ok(services) => {
            for name in &services {
                sink.append(name);
            }
            info!("Listed {} services", services.len());
            Some(services.len())
        }
        Err(e) => {
            warn!("Failed to enumerate services: {}", e);
            None
        }
    }
}

/// Header text for a loaded list of `count` services.
pub fn count_label(count: usize) -> String {
    match count {
        1 => "1 service".to_string(),
        n => format!("{} services", n),
    }
}

/// Build a scrolled list view over `store`, narrowed by `filter`.
pub fn build_list_view(store: &gtk4::StringList, filter: &gtk4::StringFilter) -> gtk4::ScrolledWindow {
    let factory = gtk4::SignalListItemFactory::new();

    factory.connect_setup(|_, item| {
        let Some(item) = item.downcast_ref::<gtk4::ListItem>() else {
            return;
        };
        let label = gtk4::Label::builder()
            .halign(gtk4::Align::Start)
            .margin_start(12)
            .margin_end(12)
            .margin_top(6)
            .margin_bottom(6)
            .build();
        item.set_child(Some(&label));
    });

    factory.connect_bind(|_, item| {
        let Some(item) = item.downcast_ref::<gtk4::ListItem>() else {
            return;
        };
        let label = item.child().and_downcast::<gtk4::Label>();
        let object = item.item().and_downcast::<gtk4::StringObject>();
        if let (Some(label), Some(object)) = (label, object) {
            label.set_label(&object.string());
        }
    });

    let filtered = gtk4::FilterListModel::new(Some(store.clone()), Some(filter.clone()));
    let selection = gtk4::NoSelection::new(Some(filtered));
    let list_view = gtk4::ListView::new(Some(selection), Some(factory));

    gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .vscrollbar_policy(gtk4::PolicyType::Automatic)
        .vexpand(true)
        .hexpand(true)
        .child(&list_view)
        .build()
}

/// Case-insensitive substring filter over the row strings.
pub fn build_name_filter() -> gtk4::StringFilter {
    let expression = gtk4::PropertyExpression::new(
        gtk4::StringObject::static_type(),
        None::<&gtk4::Expression>,
        "string",
    );

    let filter = gtk4::StringFilter::new(Some(expression));
    filter.set_ignore_case(true);
    filter.set_match_mode(gtk4::StringFilterMatchMode::Substring);
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        rows: RefCell<Vec<String>>,
    }

    impl ServiceSink for RecordingSink {
        fn append(&self, name: &str) {
            self.rows.borrow_mut().push(name.to_string());
        }
    }

    #[test]
    fn test_populate_appends_in_order() {
        let sink = RecordingSink::default();
        let services = vec!["sshd.service".to_string(), "NetworkManager.service".to_string()];

        let count = populate(&sink, Ok(services));

        assert_eq!(count, Some(2));
        assert_eq!(*sink.rows.borrow(), vec!["sshd.service", "NetworkManager.service"]);
    }

    #[test]
    fn test_populate_empty_success() {
        let sink = RecordingSink::default();
        assert_eq!(populate(&sink, Ok(Vec::new())), Some(0));
        assert!(sink.rows.borrow().is_empty());
    }

    #[test]
    fn test_populate_failure_appends_nothing() {
        let sink = RecordingSink::default();
        let err = EnumerationError::Connection(zbus::Error::Failure("access denied".to_string()));

        assert_eq!(populate(&sink, Err(err)), None);
        assert!(sink.rows.borrow().is_empty());
    }

    #[test]
    fn test_failure_leaves_no_count_to_show() {
        let sink = RecordingSink::default();
        let err = EnumerationError::Call(zbus::Error::Failure("no such service".to_string()));

        let label = populate(&sink, Err(err)).map(count_label);
        assert_eq!(label, None);
    }

    #[test]
    fn test_count_label_pluralises() {
        assert_eq!(count_label(0), "0 services");
        assert_eq!(count_label(1), "1 service");
        assert_eq!(count_label(42), "42 services");
    }

    #[test]
    fn test_populate_through_trait_object() {
        let sink = RecordingSink::default();
        let dyn_sink: &dyn ServiceSink = &sink;

        populate(dyn_sink, Ok(vec!["cron.service".to_string()]));
        assert_eq!(*sink.rows.borrow(), vec!["cron.service"]);
    }
}
