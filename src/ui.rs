// UI module - Rendering logic for the TUI

use crate::app::App;
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};
use tui_big_text::{BigText, PixelSize};

/// Helper function to get border style based on whether a panel is focused
fn get_border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Counter and progress message
            Constraint::Min(0),    // Plants and details
            Constraint::Length(1), // Footer
        ])
        .split(size);

    render_summary(frame, app, main_layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[1]);

    render_plant_list(frame, app, columns[0]);
    render_details(frame, app, columns[1]);
    render_footer(frame, main_layout[2]);
}

fn render_summary<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let summary = app.tracker.summary();

    let block = Block::default()
        .title("Watered today")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(inner);

    let counter = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .lines(vec![format!("{}/{}", summary.done, summary.total).into()])
        .centered()
        .build();
    frame.render_widget(counter, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    let message = Paragraph::new(summary.progress().message())
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(message, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(summary.ratio())
        .label(format!("{} of {} plants", summary.done, summary.total));
    frame.render_widget(gauge, rows[2]);
}

fn render_plant_list<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let plants = app.tracker.plants();
    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = None;

    for (location, range) in app.sections() {
        items.push(
            ListItem::new(location.to_string()).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        );

        for index in range {
            if app.selected == Some(index) {
                selected_row = Some(items.len());
            }

            let watered = app.tracker.is_watered(index);
            let content = format!("  {}", plants[index].display_string(watered));
            let style = if watered {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            items.push(ListItem::new(content).style(style));
        }
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title("Plants")
                .borders(Borders::ALL)
                .border_style(get_border_style(true)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    list_state.select(selected_row);

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_details<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let expanded = app
        .expanded
        .and_then(|index| app.tracker.plants().get(index).map(|plant| (index, plant)));

    let block = Block::default()
        .title("Details")
        .borders(Borders::ALL)
        .border_style(get_border_style(expanded.is_some()));

    let Some((index, plant)) = expanded else {
        let hint = Paragraph::new("Press Enter to open a plant's care notes")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let status = if app.tracker.is_watered(index) {
        Span::styled("Watered today", Style::default().fg(Color::Green))
    } else {
        Span::styled("Not watered yet", Style::default().fg(Color::Red))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            plant.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Location: {}", plant.location)),
        Line::from(status),
        Line::from(""),
    ];
    for line in plant.notes.split('\n') {
        lines.push(Line::from(line.to_string()));
    }

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(details, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let footer_text = Line::from(vec![
        Span::styled(" space ", key),
        Span::raw(": watered  "),
        Span::styled("enter ", key),
        Span::raw(": details  "),
        Span::styled("↑/↓ ", key),
        Span::raw(": move  "),
        Span::styled("g ", key),
        Span::raw(": top  "),
        Span::styled("q ", key),
        Span::raw(": quit"),
    ]);

    frame.render_widget(Paragraph::new(footer_text), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{DateService, ManualClock};
    use crate::models::Plant;
    use crate::scheduler::ResetScheduler;
    use crate::storage::{DailyStateStore, MemoryStorage};
    use crate::tracker::Tracker;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App<MemoryStorage> {
        let dates = DateService::new(ManualClock::at(2024, 5, 10, 9, 0));
        let scheduler = ResetScheduler::start(dates.clone());
        let store = DailyStateStore::new(MemoryStorage::new(), dates);
        let plants = vec![
            Plant::new("fern", "Fern", "Bathroom", "Keep moist."),
            Plant::new("aloe", "Aloe", "Kitchen", ""),
        ];
        App::new(Tracker::new(plants, store), scheduler)
    }

    fn screen(app: &App<MemoryStorage>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_sections_and_start_message() {
        let text = screen(&app());
        assert!(text.contains("Bathroom"));
        assert!(text.contains("Kitchen"));
        assert!(text.contains("[ ] Fern"));
        assert!(text.contains("Everything still ahead of you"));
        assert!(text.contains("0 of 2 plants"));
    }

    #[test]
    fn shows_progress_and_expanded_details() {
        let mut app = app();
        app.toggle_watered();

        let text = screen(&app);
        assert!(text.contains("[x] Fern"));
        assert!(text.contains("Lovely, keep it up"));
        assert!(text.contains("1 of 2 plants"));
        assert!(text.contains("Location: Kitchen"));
    }
}
