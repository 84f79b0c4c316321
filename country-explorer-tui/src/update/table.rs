//! Table message handling

use crate::message::TableMessage;
use crate::model::App;

/// Handle table messages
pub fn update(app: &mut App, msg: TableMessage) {
    match msg {
        TableMessage::SelectPrevious => app.countries_mut().select_previous(),
        TableMessage::SelectNext => app.countries_mut().select_next(),
        TableMessage::SelectFirst => app.countries_mut().select_first(),
        TableMessage::SelectLast => app.countries_mut().select_last(),
        TableMessage::PrevPage => app.explorer.on_prev_page(),
        TableMessage::NextPage => app.explorer.on_next_page(),
        TableMessage::ToggleSort => app.explorer.toggle_sort(),
        TableMessage::Sort(direction) => app.explorer.on_sort_changed(direction),
        TableMessage::Activate => activate_selected(app),
    }
}

fn activate_selected(app: &mut App) {
    let Some(id) = app.countries().selected_row().map(|row| row.id().to_string()) else {
        return;
    };
    app.explorer.on_row_activated(&id);
}

#[cfg(test)]
mod tests {
    use country_explorer_core::SortDirection;

    use super::*;
    use crate::model::Modal;
    use crate::update::test_support::loaded_app;

    #[test]
    fn paging_moves_through_pages() {
        let mut app = loaded_app(30);
        update(&mut app, TableMessage::NextPage);
        assert_eq!(app.explorer.current_page(), 2);
        assert_eq!(app.countries().rows.len(), 5);
        assert!(!app.countries().next_enabled);

        update(&mut app, TableMessage::NextPage);
        assert_eq!(app.explorer.current_page(), 2);

        update(&mut app, TableMessage::PrevPage);
        assert_eq!(app.explorer.current_page(), 1);
    }

    #[test]
    fn sort_keys() {
        let mut app = loaded_app(3);
        update(&mut app, TableMessage::Sort(SortDirection::Descending));
        assert_eq!(app.countries().rows[0].official, "Country 03");

        update(&mut app, TableMessage::ToggleSort);
        assert_eq!(app.explorer.sort_direction(), SortDirection::Ascending);
        assert_eq!(app.countries().rows[0].official, "Country 01");
    }

    #[test]
    fn activate_opens_selected_detail() {
        let mut app = loaded_app(3);
        update(&mut app, TableMessage::SelectNext);
        update(&mut app, TableMessage::Activate);

        match &app.modal().active {
            Some(Modal::Detail(detail)) => {
                assert_eq!(detail.title, "Country 02");
                assert_eq!(detail.codes, "C02");
            }
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn activate_on_empty_table_is_noop() {
        let mut app = crate::model::App::new();
        update(&mut app, TableMessage::Activate);
        assert!(!app.modal().is_open());
    }

    #[test]
    fn cursor_moves() {
        let mut app = loaded_app(3);
        update(&mut app, TableMessage::SelectLast);
        assert_eq!(app.countries().selected, 2);
        update(&mut app, TableMessage::SelectPrevious);
        assert_eq!(app.countries().selected, 1);
        update(&mut app, TableMessage::SelectFirst);
        assert_eq!(app.countries().selected, 0);
    }
}
