//! TUI rendering — orchestrates all panes.

pub mod contact_detail;
pub mod contact_form;
pub mod contact_list;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, MessageKind, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, category bar, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(1), // categories
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_categories(f, rows[1], app);
  draw_body(f, rows[2], app);
  draw_status(f, rows[3], app);
}

/// `"1 Contact"` / `"N Contacts"`.
pub fn contact_count_label(n: usize) -> String {
  if n == 1 { "1 Contact".to_string() } else { format!("{n} Contacts") }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    format!(" Contact Manager  {}", contact_count_label(app.contacts.len())),
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{}  {date} ", app.client.base_url()),
    Style::default().fg(Color::Gray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.width() as u16;
  let right_width = right.width() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Category bar ─────────────────────────────────────────────────────────────

fn draw_categories(f: &mut Frame, area: Rect, app: &App) {
  let selected = app.selected_tab();
  let mut spans = vec![Span::raw(" ")];
  for (i, tab) in app.category_tabs().into_iter().enumerate() {
    let style = if i == selected {
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Gray)
    };
    spans.push(Span::styled(format!(" {tab} "), style));
    spans.push(Span::raw(" "));
  }
  f.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  // Split into left list pane (40%) and right pane (60%).
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
    .split(area);

  contact_list::draw(f, cols[0], app);

  match app.screen {
    Screen::ContactForm => contact_form::draw(f, cols[1], app),
    _ => contact_detail::draw(f, cols[1], app),
  }
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match &app.screen {
    Screen::ContactList if app.filter_active => (
      "SEARCH",
      "Type to filter  Esc clear  Enter done".to_string(),
    ),
    Screen::ContactList => (
      "NORMAL",
      "↑↓/jk move  Tab category  / search  a add  e edit  d delete  r reload  q quit"
        .to_string(),
    ),
    Screen::ContactForm => (
      "FORM",
      format!(
        "Tab/↑↓ field  ←→ category  Enter {}  Esc cancel",
        app.form.submit_label().to_lowercase()
      ),
    ),
    Screen::ConfirmDelete(id) => {
      let name = app
        .contacts
        .iter()
        .find(|c| c.id == *id)
        .map(|c| c.name.as_str())
        .unwrap_or("this contact");
      ("DELETE", format!("Delete {name}? (y/n)"))
    }
  };

  let (text, text_style) = match (&app.message, &app.screen) {
    // The confirmation prompt wins over any lingering message.
    (Some(m), screen) if !matches!(screen, Screen::ConfirmDelete(_)) => {
      let color = match m.kind {
        MessageKind::Success => Color::Green,
        MessageKind::Error => Color::Red,
      };
      (m.text.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD))
    }
    (_, Screen::ConfirmDelete(_)) => (hints, Style::default().fg(Color::Yellow)),
    _ => (hints, Style::default().fg(Color::DarkGray)),
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let text_span = Span::styled(format!("  {text}"), text_style);

  let line = Line::from(vec![mode_span, text_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
