//! Event handler

use std::time::Duration;

use anyhow::Result;
use country_explorer_core::SortDirection;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ModalMessage, SearchMessage, TableMessage};
use crate::model::App;

/// Poll for an input event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize redraws on the next loop iteration
        _ => AppMessage::Noop,
    }
}

/// Translate a key event
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Release/Repeat would double keys on Windows terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.modal().is_open() {
        return handle_modal_keys(key);
    }

    if app.input_mode.is_search() {
        return handle_search_keys(key);
    }

    handle_table_keys(key)
}

/// Keys while a modal is open
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

/// Keys while typing into the search bar
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_SEARCH.matches(&key) || DefaultKeymap::CLEAR_SEARCH_ALT.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Enter => AppMessage::Search(SearchMessage::Leave),
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Search(SearchMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// Keys on the table
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key)
        || DefaultKeymap::HELP_ALT.matches(&key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Search(SearchMessage::Enter);
    }
    if DefaultKeymap::CLEAR_SEARCH.matches(&key) || DefaultKeymap::CLEAR_SEARCH_ALT.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }
    if DefaultKeymap::TOGGLE_SORT.matches(&key) {
        return AppMessage::Table(TableMessage::ToggleSort);
    }
    if DefaultKeymap::SORT_ASC.matches(&key) {
        return AppMessage::Table(TableMessage::Sort(SortDirection::Ascending));
    }
    if DefaultKeymap::SORT_DESC.matches(&key) {
        return AppMessage::Table(TableMessage::Sort(SortDirection::Descending));
    }
    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        // ↑ or k: previous row
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Table(TableMessage::SelectPrevious),
        // ↓ or j: next row
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Table(TableMessage::SelectNext),
        KeyCode::Home => AppMessage::Table(TableMessage::SelectFirst),
        KeyCode::End => AppMessage::Table(TableMessage::SelectLast),
        // ←, h or PageUp: previous page
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
            AppMessage::Table(TableMessage::PrevPage)
        }
        // →, l or PageDown: next page
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
            AppMessage::Table(TableMessage::NextPage)
        }
        // Enter: open detail
        KeyCode::Enter => AppMessage::Table(TableMessage::Activate),
        KeyCode::Esc => AppMessage::ClearStatus,
        _ => AppMessage::Noop,
    }
}
