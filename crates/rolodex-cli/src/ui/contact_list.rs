//! Contact list pane — left panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rolodex_core::contact::Contact;

use crate::app::App;

/// Render the contact list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let visible = app.visible_contacts();
  let total = app.contacts.len();

  // Title with count.
  let title = if visible.len() != total {
    format!(" Contacts ({}/{}) ", visible.len(), total)
  } else {
    format!(" Contacts ({}) ", total)
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  // If filter is active or set, show a filter bar at the bottom of the inner area.
  if (app.filter_active || !app.filter.is_empty()) && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  if app.loading {
    f.render_widget(
      Paragraph::new("Loading contacts…").style(Style::default().fg(Color::DarkGray)),
      inner_area,
    );
    return;
  }

  if visible.is_empty() {
    let lines = vec![
      Line::from("No contacts found"),
      Line::from(Span::styled(
        "Press \"a\" to add your first contact",
        Style::default().fg(Color::DarkGray),
      )),
    ];
    f.render_widget(Paragraph::new(lines), inner_area);
    return;
  }

  // Under `All`, a heading precedes each category's contacts. Headings are
  // not selectable, so track where the cursor lands among the rows.
  let mut items: Vec<ListItem> = Vec::new();
  let mut selected_row = 0;
  let mut index = 0;

  let mut push_contact = |items: &mut Vec<ListItem>, contact: &Contact| {
    if index == app.list_cursor {
      selected_row = items.len();
    }
    index += 1;
    items.push(contact_item(contact));
  };

  if app.selected_category.is_none() {
    for (category, contacts) in app.grouped_contacts() {
      items.push(ListItem::new(Line::from(Span::styled(
        category.to_string(),
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ))));
      for contact in contacts {
        push_contact(&mut items, contact);
      }
    }
  } else {
    for contact in visible.iter().copied() {
      push_contact(&mut items, contact);
    }
  }

  // Scrollable list with cursor tracking.
  let mut state = ListState::default();
  state.select(Some(selected_row));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    inner_area,
    &mut state,
  );
}

fn contact_item(contact: &Contact) -> ListItem<'static> {
  ListItem::new(Line::from(vec![
    Span::raw(format!("  {}", contact.name)),
    Span::styled(
      format!("  {}", contact.phone),
      Style::default().fg(Color::DarkGray),
    ),
  ]))
}
