//! Application main loop
//!
//! Runs roughly every 100 ms (sooner when a key arrives):
//!
//! ```text
//! loop {
//!     terminal.draw(|f| view::render(&app, f))   // render
//!     if app.should_quit { break }
//!     if let Some(outcome) = fetch.poll() {      // dataset arrived?
//!         update::update(&mut app, AppMessage::Fetch(outcome))
//!     }
//!     if let Some(event) = poll_event() {        // wait up to 100 ms for input
//!         let msg = handle_event(event, &app);
//!         update::update(&mut app, msg)
//!     }
//! }
//! ```

use std::time::Duration;

use anyhow::Result;

use crate::backend::PendingFetch;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the main loop until the user quits.
pub fn run(terminal: &mut Term, app: &mut App, mut fetch: PendingFetch) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Quit?
        if app.should_quit {
            break;
        }

        // 3. Apply the fetch result once it is ready
        if let Some(outcome) = fetch.poll() {
            update::update(app, AppMessage::Fetch(outcome));
        }

        // 4. Poll input (100 ms timeout)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
