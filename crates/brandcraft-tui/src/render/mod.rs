//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use brandcraft_app::{AppState, View};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI. Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    frame.render_widget(widgets::Header, areas.header);

    match &state.view {
        View::Form => {
            let form = widgets::BrandForm::new(&state.form).loading(state.loading, state.tick);
            frame.render_widget(form, areas.body);
        }
        View::Result(board) => {
            let copied = state.copied.as_ref().map(|ack| ack.hex.as_str());
            frame.render_widget(widgets::IdentityBoard::new(board).copied(copied), areas.body);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.footer);

    if let Some(alert) = &state.alert {
        frame.render_widget(widgets::AlertDialog::new(alert), area);
    }
}
