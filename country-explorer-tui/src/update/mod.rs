//! Update layer: state transitions
//!
//! Consumes one [`AppMessage`] at a time and mutates the [`App`]. Table and
//! search messages are forwarded to the core view controller, which
//! re-renders into the table state.

mod modal;
mod search;
mod table;

use crate::backend::FetchOutcome;
use crate::message::AppMessage;
use crate::model::{App, LoadState};

/// Apply a message to the application state
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Fetch(outcome) => apply_fetch(app, outcome),

        AppMessage::Table(table_msg) => {
            table::update(app, table_msg);
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ShowHelp => {
            app.countries_mut().modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

fn apply_fetch(app: &mut App, outcome: FetchOutcome) {
    match outcome {
        FetchOutcome::Loaded(countries) => {
            let count = countries.len();
            app.load_state = LoadState::Loaded;
            app.explorer.set_dataset(countries);
            app.set_status(format!("{count} countries loaded"));
        }
        FetchOutcome::Unavailable => {
            app.load_state = LoadState::Unavailable;
            app.set_status("Data unavailable");
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use country_explorer_core::Country;

    /// `"Country 01"` .. `"Country {count}"`.
    pub fn numbered(count: usize) -> Vec<Country> {
        (1..=count)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "name": {"common": format!("C{i}"), "official": format!("Country {i:02}")},
                    "cca3": format!("C{i:02}")
                }))
                .unwrap()
            })
            .collect()
    }

    pub fn loaded_app(count: usize) -> super::App {
        let mut app = super::App::new();
        super::update(
            &mut app,
            super::AppMessage::Fetch(super::FetchOutcome::Loaded(numbered(count))),
        );
        app
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::loaded_app;
    use super::*;

    #[test]
    fn loaded_dataset_renders() {
        let app = loaded_app(30);
        assert_eq!(app.load_state, LoadState::Loaded);
        assert_eq!(app.countries().rows.len(), 25);
        assert_eq!(app.status_message.as_deref(), Some("30 countries loaded"));
    }

    #[test]
    fn failed_fetch_leaves_table_empty() {
        let mut app = App::new();
        update(&mut app, AppMessage::Fetch(FetchOutcome::Unavailable));

        assert_eq!(app.load_state, LoadState::Unavailable);
        assert!(app.countries().rows.is_empty());
        assert!(!app.explorer.is_loaded());
        assert_eq!(app.status_message.as_deref(), Some("Data unavailable"));
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn help_opens_modal() {
        let mut app = App::new();
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.modal().is_open());
        assert!(!app.modal().is_detail());
    }

    #[test]
    fn clear_status() {
        let mut app = loaded_app(1);
        update(&mut app, AppMessage::ClearStatus);
        assert!(app.status_message.is_none());
    }
}
