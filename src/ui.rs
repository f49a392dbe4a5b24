use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::{
    App, CurrentScreen, FocusedPane,
    sorting::{Column, Indicator, SortState},
    track::Track,
};

/// Highlight for the column the catalog is currently sorted on.
const CLICKED_COLUMN: Color = Color::Rgb(29, 185, 84);

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const COLUMN_WIDTHS: [Constraint; 9] = [
    Constraint::Length(5),
    Constraint::Fill(3),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Length(14),
    Constraint::Length(13),
    Constraint::Length(16),
    Constraint::Length(10),
    Constraint::Length(3),
];

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    // A fetch in flight replaces the whole screen with the spinner.
    if app.store.state().spinner {
        render_spinner(app, frame, area);
        return;
    }
    let rect = render_notification(app, frame, area);
    match app.current_screen {
        CurrentScreen::TrackList(_) => render_track_list(app, frame, rect),
        CurrentScreen::Detail => render_detail(app, frame, rect),
    }
}

/// Error banner above everything else. Returns the area left for the screen.
fn render_notification(app: &App, frame: &mut Frame, rect: Rect) -> Rect {
    let Some(message) = &app.store.state().fetch_error else {
        return rect;
    };
    let layout = ratatui::layout::Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(rect);
    let notification = Paragraph::new(format!(" ✖ Could not load tracks: {message}"))
        .style(Style::new().white().on_red().bold());
    frame.render_widget(notification, layout[0]);
    layout[1]
}

fn render_track_list(app: &mut App, frame: &mut Frame, rect: Rect) {
    let layout = ratatui::layout::Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(rect);

    render_title(app, frame, layout[0]);
    render_search_box(app, frame, layout[1]);
    render_table(app, frame, layout[2]);
    render_controls(app, frame, layout[3]);
}

fn render_title(app: &App, frame: &mut Frame, rect: Rect) {
    let count = app.select_handler.items().len();
    let title = Paragraph::new(format!("Track List ({count})")).style(Style::new().bold());
    frame.render_widget(title, rect);
}

fn render_search_box(app: &App, frame: &mut Frame, rect: Rect) {
    let focused = app.current_screen == CurrentScreen::TrackList(FocusedPane::Search);
    let border_style = match focused {
        true => Style::new().fg(CLICKED_COLUMN),
        false => Style::new(),
    };
    let mut query = app.search_handler.query().to_string();
    if focused {
        query.push('▏');
    }
    let input = Paragraph::new(query).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Search by name:"),
    );
    frame.render_widget(input, rect);
}

fn render_table(app: &mut App, frame: &mut Frame, rect: Rect) {
    let table_block = Block::default().borders(Borders::ALL);
    if app.select_handler.is_empty() {
        let hint = Paragraph::new("No tracks to show. Try another search.")
            .alignment(Alignment::Center)
            .block(table_block);
        frame.render_widget(hint, rect);
        return;
    }

    let header = Row::new(
        Column::ALL
            .iter()
            .map(|column| header_cell(&app.sort_state, *column))
            .collect::<Vec<_>>(),
    )
    .style(Style::new().bold())
    .bottom_margin(1);
    let rows = app
        .select_handler
        .items()
        .iter()
        .map(track_row)
        .collect::<Vec<_>>();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(table_block)
        .row_highlight_style(Style::new().reversed())
        .highlight_symbol(">> ");
    frame.render_stateful_widget(table, rect, app.select_handler.state());
}

fn header_cell(sort_state: &SortState, column: Column) -> Cell<'static> {
    let mut spans = vec![Span::raw(column.label())];
    match sort_state.indicator(column) {
        Indicator::None => {}
        Indicator::Neutral => spans.push(Span::raw(" ↕")),
        Indicator::Order(order, clicked) => {
            let style = match clicked {
                true => Style::new().fg(CLICKED_COLUMN),
                false => Style::new().white(),
            };
            spans.push(Span::styled(format!(" {}", order.glyph()), style));
        }
    }
    Cell::from(Line::from(spans))
}

fn track_row(track: &Track) -> Row<'static> {
    Row::new(vec![
        Cell::from(track.cover_glyph()),
        Cell::from(track.track_name.clone()),
        Cell::from(track.artist_name.clone()),
        Cell::from(track.album().to_string()),
        Cell::from(track.release_day()),
        Cell::from(track.duration_label()),
        Cell::from(track.genre().to_string()),
        Cell::from(track.price_label()),
        Cell::from("→"),
    ])
}

fn render_detail(app: &App, frame: &mut Frame, rect: Rect) {
    let layout = ratatui::layout::Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(rect);

    let block = Block::default().borders(Borders::ALL).title("Track details");
    match &app.detail_track {
        Some(track) => {
            let lines = vec![
                detail_line("Title", track.track_name.clone()),
                detail_line("Artist", track.artist_name.clone()),
                detail_line("Album title", track.album().to_string()),
                detail_line("Release date", track.release_day()),
                detail_line("Song length", track.duration_label()),
                detail_line("Genre", track.genre().to_string()),
                detail_line("Price", track.price_label()),
                Line::default(),
                detail_line("Artwork", link(track.artwork_url_100.as_deref())),
                detail_line("Preview", link(track.preview_url.as_deref())),
                detail_line("Store page", link(track.track_view_url.as_deref())),
            ];
            let details = Paragraph::new(lines)
                .block(block.title_bottom(format!("track id {}", track.track_id)))
                .wrap(Wrap { trim: false });
            frame.render_widget(details, layout[0]);
        }
        None => {
            frame.render_widget(Paragraph::new("No track selected.").block(block), layout[0]);
        }
    }
    render_controls(app, frame, layout[1]);
}

fn detail_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:>13}  "), Style::new().bold()),
        Span::raw(value),
    ])
}

fn link(url: Option<&str>) -> String {
    url.unwrap_or("-").to_string()
}

fn render_spinner(app: &App, frame: &mut Frame, rect: Rect) {
    let glyph = SPINNER_FRAMES[(app.tick / 16) as usize % SPINNER_FRAMES.len()];
    let layout = ratatui::layout::Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(rect);
    let loading = Paragraph::new(format!("{glyph} Loading tracks…")).alignment(Alignment::Center);
    frame.render_widget(loading, layout[1]);
}

fn render_controls(app: &App, frame: &mut Frame, rect: Rect) {
    let hints = match app.current_screen {
        CurrentScreen::TrackList(FocusedPane::Search) => {
            "enter search | tab results | esc leave box | ctrl+c quit"
        }
        CurrentScreen::TrackList(FocusedPane::Results) => {
            "↑/↓ move | enter details | l/g/p sort | c clean search | tab search | q quit"
        }
        CurrentScreen::Detail => "esc back | q quit",
    };
    frame.render_widget(Paragraph::new(hints).style(Style::new().dim()), rect);
}
