//! Search message handling

use crate::message::SearchMessage;
use crate::model::{App, InputMode};

/// Handle search messages
pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Enter => app.input_mode = InputMode::Search,
        SearchMessage::Leave => app.input_mode = InputMode::Normal,
        SearchMessage::Input(ch) => {
            let mut query = app.explorer.search_query().to_string();
            query.push(ch);
            app.explorer.on_search_changed(query);
        }
        SearchMessage::Backspace => {
            let mut query = app.explorer.search_query().to_string();
            if query.pop().is_some() {
                app.explorer.on_search_changed(query);
            }
        }
        SearchMessage::Clear => app.explorer.on_clear(),
    }
}
