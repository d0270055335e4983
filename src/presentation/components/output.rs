use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::form::SubmittedOutput;

const PLACEHOLDER: &str = "Nothing submitted yet.";

pub fn render_output(frame: &mut Frame<'_>, area: Rect, output: Option<&SubmittedOutput>) {
    let block = Block::default().title("Output").borders(Borders::ALL);
    let widget = match output {
        Some(output) => Paragraph::new(output.rendered.clone()),
        None => Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(widget.wrap(Wrap { trim: false }).block(block), area);
}
