//! Add / edit form pane — replaces the detail pane while a form is open.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::{app::App, form::FormField};

/// Render the form into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let form = &app.form;

  let block = Block::default()
    .title(format!(" {} ", form.title()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));

  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Vec::new();
  for field in FormField::ALL {
    let focused = form.focus == field;
    let label_style = if focused {
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Gray)
    };

    let value = form.value(field);
    let value_span = match field {
      FormField::Category if focused => Span::styled(
        format!("◀ {value} ▶"),
        Style::default().add_modifier(Modifier::BOLD),
      ),
      FormField::Category => Span::raw(value.to_string()),
      _ if value.is_empty() && !focused => Span::styled(
        field.placeholder(),
        Style::default().fg(Color::DarkGray),
      ),
      _ if focused => Span::styled(
        format!("{value}_"),
        Style::default().add_modifier(Modifier::BOLD),
      ),
      _ => Span::raw(value.to_string()),
    };

    lines.push(Line::from(vec![
      Span::styled(format!("{:<10}", field.label()), label_style),
      value_span,
    ]));
    lines.push(Line::from(""));
  }

  lines.push(Line::from(vec![
    Span::styled(
      format!("[Enter] {}", form.submit_label()),
      Style::default().fg(Color::Green),
    ),
    Span::raw("   "),
    Span::styled("[Esc] Cancel", Style::default().fg(Color::DarkGray)),
  ]));

  f.render_widget(Paragraph::new(lines), inner);
}
