//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::api::SubmissionClient;
use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw<C: SubmissionClient>(frame: &mut Frame, app: &App<C>) {
    let (main_area, status_area) = layout::create_layout(frame.area());
    let state = app.controller.state();

    match state.accepted() {
        Some(accepted) => forms::draw_summary(frame, main_area, accepted),
        None => forms::draw_onboarding_form(frame, main_area, app.controller.form(), state),
    }

    layout::draw_status_bar(frame, status_area, state, &app.endpoint);
}
