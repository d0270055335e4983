use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let mut lines = vec![status_line(ctx)];
    if let Some(help) = ctx.help {
        lines.push(Line::from(Span::styled(
            help.to_string(),
            Style::default().fg(Color::Yellow),
        )));
    }
    let footer = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

fn status_line(ctx: &UiContext<'_>) -> Line<'static> {
    let badge = if ctx.error_count > 0 {
        Span::styled(
            format!("[! {}]", ctx.error_count),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    };

    let message = match ctx.status_message.trim() {
        "" => "Ready".to_string(),
        text => text.to_string(),
    };

    let mut spans = vec![badge, Span::raw(" "), Span::raw(message)];
    if ctx.dirty {
        spans.push(Span::styled(
            " • unsaved changes",
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn badge_reflects_error_count() {
        let state = FormState::new();
        let mut ctx = UiContext {
            form_state: &state,
            title: "Create user",
            status_message: "Editing",
            dirty: true,
            error_count: 0,
            help: None,
        };
        assert_eq!(
            text(&status_line(&ctx)),
            "[ok] Editing • unsaved changes"
        );

        ctx.dirty = false;
        ctx.error_count = 3;
        assert_eq!(text(&status_line(&ctx)), "[! 3] Editing");
    }

    #[test]
    fn empty_status_falls_back_to_ready() {
        let state = FormState::new();
        let ctx = UiContext {
            form_state: &state,
            title: "Create user",
            status_message: "  ",
            dirty: false,
            error_count: 0,
            help: None,
        };
        assert_eq!(text(&status_line(&ctx)), "[ok] Ready");
    }
}
