use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::form::FormState;

use super::components::{render_footer, render_form, render_output};

pub struct UiContext<'a> {
    pub form_state: &'a FormState,
    pub title: &'a str,
    pub status_message: &'a str,
    pub dirty: bool,
    pub error_count: usize,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);

    render_form(frame, columns[0], ctx.form_state, ctx.title);
    render_output(frame, columns[1], ctx.form_state.output());
    render_footer(frame, rows[1], &ctx);
}
