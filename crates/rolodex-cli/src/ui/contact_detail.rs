//! Contact detail pane — right panel, preview of the contact under the cursor.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Render the detail pane into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let contact = app.cursor_contact();

  let title = contact
    .map(|c| format!(" {} ", c.name))
    .unwrap_or_else(|| " Detail ".to_string());
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let inner = block.inner(area);
  f.render_widget(block, area);

  let Some(contact) = contact else {
    let hint = Paragraph::new("Select a contact, or press \"a\" to add one.")
      .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, inner);
    return;
  };

  let label = |text: &'static str| {
    Span::styled(
      format!("{text:<10}"),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )
  };

  let lines = vec![
    Line::from(vec![label("phone"), Span::raw(contact.phone.clone())]),
    Line::from(vec![label("email"), Span::raw(contact.email.clone())]),
    Line::from(vec![
      label("category"),
      Span::styled(
        contact.category.clone(),
        Style::default().fg(Color::Yellow),
      ),
    ]),
    Line::from(""),
    Line::from(Span::styled(
      format!("#{}", contact.id),
      Style::default().fg(Color::DarkGray),
    )),
  ];

  f.render_widget(Paragraph::new(lines), inner);
}
