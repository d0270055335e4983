use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::FieldPath,
    form::{ErrorSlot, FieldState, FocusTarget, FormState},
};

const HIGHLIGHT_SYMBOL: &str = "» ";

pub fn render_form(frame: &mut Frame<'_>, area: Rect, form_state: &FormState, title: &str) {
    let content_width = area.width.saturating_sub(4);
    let selected = form_state.focus_index();
    let targets = form_state.focus_targets();

    let mut renders = Vec::with_capacity(targets.len());
    for (idx, target) in targets.iter().enumerate() {
        renders.push(build_target_render(
            form_state,
            target,
            idx == selected,
            content_width,
        ));
    }

    let heights: Vec<usize> = renders.iter().map(|render| render.lines.len()).collect();
    let cursor_hint = renders
        .get(selected)
        .and_then(|render| render.cursor_hint.clone());

    let items: Vec<ListItem<'static>> = renders
        .into_iter()
        .map(|render| ListItem::new(render.lines))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    let list = List::new(items)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    frame.render_stateful_widget(list, area, &mut list_state);

    let Some(cursor) = cursor_hint else {
        return;
    };
    let first_visible = list_state.offset().min(selected);
    let line = heights[first_visible..selected].iter().sum::<usize>() + cursor.line_offset;
    let inner_height = area.height.saturating_sub(2) as usize;
    if line >= inner_height {
        return;
    }
    let cursor_y = area.y.saturating_add(1).saturating_add(line as u16);
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(HIGHLIGHT_SYMBOL.width() as u16)
        .saturating_add(2)
        .saturating_add(cursor.value_width);
    frame.set_cursor_position((cursor_x, cursor_y));
}

pub(crate) struct TargetRender {
    pub(crate) lines: Vec<Line<'static>>,
    cursor_hint: Option<CursorHint>,
}

#[derive(Clone)]
struct CursorHint {
    line_offset: usize,
    value_width: u16,
}

pub(crate) fn build_target_render(
    form_state: &FormState,
    target: &FocusTarget,
    is_selected: bool,
    max_width: u16,
) -> TargetRender {
    match target {
        FocusTarget::Field(path) => match form_state.field(path) {
            Some(field) => build_field_render(form_state, field, is_selected, max_width),
            None => TargetRender {
                lines: vec![Line::from(path.to_string())],
                cursor_hint: None,
            },
        },
        FocusTarget::AddTech => {
            let mut lines = vec![action_line("[ + Add technology ]", is_selected)];
            lines.extend(error_lines(
                form_state.error_slot(&FieldPath::Techs),
                max_width,
            ));
            TargetRender {
                lines,
                cursor_hint: None,
            }
        }
        FocusTarget::Submit => TargetRender {
            lines: vec![action_line("[ Save ]", is_selected)],
            cursor_hint: None,
        },
    }
}

fn build_field_render(
    form_state: &FormState,
    field: &FieldState,
    is_selected: bool,
    max_width: u16,
) -> TargetRender {
    let mut lines = Vec::new();
    let mut label = field.label();
    if field.dirty {
        label.push_str(" *");
    }
    let label_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(label, label_style)));

    let value = field.display_value();
    let value_width = UnicodeWidthStr::width(value.as_str());
    let cursor_hint = if is_selected {
        let border_style = Style::default().fg(Color::Yellow);
        let inner = value_width.min(max_width.max(4) as usize);
        let border_line = "─".repeat(inner.saturating_add(2));
        lines.push(Line::from(Span::styled(
            format!("┌{border_line}┐"),
            border_style,
        )));
        let value_line = lines.len();
        lines.push(Line::from(vec![
            Span::styled("│ ", border_style),
            Span::styled(
                value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │", border_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("└{border_line}┘"),
            border_style,
        )));
        Some(CursorHint {
            line_offset: value_line,
            value_width: value_width as u16,
        })
    } else {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(value, Style::default().fg(Color::White)),
        ]));
        None
    };

    lines.extend(error_lines(form_state.error_slot(&field.path), max_width));
    TargetRender { lines, cursor_hint }
}

fn action_line(text: &'static str, is_selected: bool) -> Line<'static> {
    let style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    Line::from(Span::styled(text, style))
}

fn error_lines(slot: ErrorSlot<'_>, max_width: u16) -> Vec<Line<'static>> {
    let ErrorSlot::HasError(message) = slot else {
        return Vec::new();
    };
    wrap(message, (max_width as usize).max(8))
        .into_iter()
        .map(|segment| {
            Line::from(Span::styled(
                format!("  {segment}"),
                Style::default().fg(Color::Red),
            ))
        })
        .collect()
}
