//! Modal message handling

use crate::message::ModalMessage;
use crate::model::App;

/// Handle modal messages
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            if app.modal().is_detail() {
                app.explorer.on_detail_dismissed();
            } else {
                app.countries_mut().modal.close();
            }
        }
    }
}
