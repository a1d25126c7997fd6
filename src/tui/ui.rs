//! UI rendering

use super::app::{App, Mode};
use super::help::{get_about_help, get_help_text};
use pagegrid_core::{Cell, TextAlign, Validation};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub(crate) const TOP_BAR_HEIGHT: u16 = 3;
pub(crate) const GRID_MIN_HEIGHT: u16 = 5;
pub(crate) const PAGINATION_HEIGHT: u16 = 3;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const GRID_COLUMN_SPACING: u16 = 1;
const SEARCH_MIN_WIDTH: u16 = 12;
const PAGE_BUTTON_WIDTH: u16 = 12;

/// Buttons on the toolbar, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToolbarButton {
    Undo,
    Redo,
    Align(TextAlign),
}

impl ToolbarButton {
    pub(crate) const ALL: [ToolbarButton; 5] = [
        ToolbarButton::Undo,
        ToolbarButton::Redo,
        ToolbarButton::Align(TextAlign::Left),
        ToolbarButton::Align(TextAlign::Center),
        ToolbarButton::Align(TextAlign::Right),
    ];

    fn label(self) -> &'static str {
        match self {
            ToolbarButton::Undo => "Undo",
            ToolbarButton::Redo => "Redo",
            ToolbarButton::Align(TextAlign::Left) => "Align Left",
            ToolbarButton::Align(TextAlign::Center) => "Align Center",
            ToolbarButton::Align(TextAlign::Right) => "Align Right",
        }
    }

    fn width(self) -> u16 {
        self.label().len() as u16 + 4
    }

    fn enabled(self, app: &App) -> bool {
        match self {
            ToolbarButton::Undo => app.grid.can_undo(),
            ToolbarButton::Redo => app.grid.can_redo(),
            ToolbarButton::Align(_) => true,
        }
    }
}

/// Something clickable on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HitTarget {
    Search,
    Toolbar(ToolbarButton),
    /// Index into the current page.
    Cell(usize),
    Previous,
    Next,
}

/// Screen regions shared by drawing and mouse hit-testing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ScreenLayout {
    pub search: Rect,
    pub toolbar: Vec<(ToolbarButton, Rect)>,
    pub grid: Rect,
    pub previous: Rect,
    pub page_label: Rect,
    pub next: Rect,
    pub status: Rect,
}

pub(crate) fn split_main_chunks(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOP_BAR_HEIGHT),
            Constraint::Min(GRID_MIN_HEIGHT),
            Constraint::Length(PAGINATION_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let mut top = vec![Constraint::Min(SEARCH_MIN_WIDTH)];
    top.extend(
        ToolbarButton::ALL
            .iter()
            .map(|button| Constraint::Length(button.width())),
    );
    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(top)
        .split(rows[0]);
    let toolbar = ToolbarButton::ALL
        .iter()
        .copied()
        .zip(top_chunks.iter().skip(1).copied())
        .collect();

    let pagination = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(PAGE_BUTTON_WIDTH),
            Constraint::Min(1),
            Constraint::Length(PAGE_BUTTON_WIDTH),
        ])
        .split(rows[2]);

    ScreenLayout {
        search: top_chunks[0],
        toolbar,
        grid: rows[1],
        previous: pagination[0],
        page_label: pagination[1],
        next: pagination[2],
        status: rows[3],
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

fn grid_inner(grid_area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(grid_area)
}

/// Width of one grid column including its trailing spacing.
fn column_width(inner: Rect, columns: usize) -> u16 {
    inner.width / columns.max(1) as u16
}

/// Map a click inside the grid to an index into the current page.
pub(crate) fn grid_cell_at(app: &App, grid_area: Rect, mouse_col: u16, mouse_row: u16) -> Option<usize> {
    let inner = grid_inner(grid_area);
    if !contains(inner, mouse_col, mouse_row) {
        return None;
    }
    let width = column_width(inner, app.columns);
    if width <= GRID_COLUMN_SPACING {
        return None;
    }

    let rel_x = mouse_col - inner.x;
    let col = (rel_x / width) as usize;
    if col >= app.columns || rel_x % width >= width - GRID_COLUMN_SPACING {
        return None;
    }
    let row = app.viewport_row + (mouse_row - inner.y) as usize;
    let visible = row * app.columns + col;
    (visible < app.page_len()).then_some(visible)
}

pub(crate) fn hit_test(app: &App, layout: &ScreenLayout, x: u16, y: u16) -> Option<HitTarget> {
    if contains(layout.search, x, y) {
        return Some(HitTarget::Search);
    }
    if let Some((button, _)) = layout.toolbar.iter().find(|(_, rect)| contains(*rect, x, y)) {
        return Some(HitTarget::Toolbar(*button));
    }
    if contains(layout.previous, x, y) {
        return Some(HitTarget::Previous);
    }
    if contains(layout.next, x, y) {
        return Some(HitTarget::Next);
    }
    grid_cell_at(app, layout.grid, x, y).map(HitTarget::Cell)
}

/// Draw the application UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let layout = split_main_chunks(f.area());

    // Update visible dimensions based on actual size
    app.set_width(f.area().width);
    app.visible_rows = (grid_inner(layout.grid).height as usize).max(1);
    app.update_viewport();

    draw_search(f, app, layout.search);
    for (button, area) in &layout.toolbar {
        draw_button(f, button.label(), button.enabled(app), *area);
    }
    draw_grid(f, app, layout.grid);
    draw_pagination(f, app, &layout);
    draw_status_bar(f, app, layout.status);

    if app.help_modal {
        draw_help_modal(f, app);
    }

    if let Some(message) = app.alert.as_deref() {
        draw_alert_modal(f, message);
    }
}

fn draw_search(f: &mut Frame, app: &App, area: Rect) {
    let term = app.grid.search_term();
    let content = if app.mode == Mode::Search {
        let (before, after) = term.split_at(app.search_cursor.min(term.len()));
        Line::from(format!("{}│{}", before, after))
    } else if term.is_empty() {
        Line::from(Span::styled("Search...", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(term.to_string())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(Style::default().fg(if app.mode == Mode::Search {
            Color::Cyan
        } else {
            Color::White
        }));
    f.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_button(f: &mut Frame, label: &str, enabled: bool, area: Rect) {
    let style = if enabled {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let paragraph = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    f.render_widget(paragraph, area);
}

fn alignment_of(cell: &Cell) -> Alignment {
    match cell.formatting.effective_align() {
        TextAlign::Left => Alignment::Left,
        TextAlign::Center => Alignment::Center,
        TextAlign::Right => Alignment::Right,
    }
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.mode {
        Mode::Edit => " Edit ",
        Mode::Search | Mode::Normal => " Pagegrid ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(match app.mode {
            Mode::Edit => Color::Yellow,
            Mode::Search | Mode::Normal => Color::White,
        }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = column_width(inner, app.columns);
    if width <= GRID_COLUMN_SPACING {
        return;
    }

    let selected = app.grid.selected();
    let offset = app.grid.pager().offset();
    for (visible, cell) in app.grid.visible_cells().iter().enumerate() {
        let row = visible / app.columns;
        if row < app.viewport_row || row >= app.viewport_row + app.visible_rows {
            continue;
        }
        let col = (visible % app.columns) as u16;
        let rect = Rect {
            x: inner.x + col * width,
            y: inner.y + (row - app.viewport_row) as u16,
            width: width - GRID_COLUMN_SPACING,
            height: 1,
        };

        let is_cursor = visible == app.cursor;
        let is_selected = selected == Some(offset + visible);
        let mut style = if is_selected {
            Style::default().fg(Color::Black).bg(Color::LightYellow)
        } else {
            Style::default().bg(Color::Rgb(40, 40, 40))
        };
        if is_cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            if !is_selected {
                style = style.fg(Color::Black).bg(Color::Cyan);
            }
        }

        let content = if is_selected && app.mode == Mode::Edit {
            let value = cell.value.as_str();
            let (before, after) = value.split_at(app.edit_cursor.min(value.len()));
            Line::from(format!("{}│{}", before, after))
        } else if cell.value.is_empty() {
            let hint = match cell.validation {
                Validation::Numeric => "0-9",
                Validation::Text { .. } => "a-z",
            };
            Line::from(Span::styled(hint, style.fg(Color::DarkGray)))
        } else {
            Line::from(cell.value.as_str())
        };

        f.render_widget(
            Paragraph::new(content).alignment(alignment_of(cell)).style(style),
            rect,
        );
    }
}

fn draw_pagination(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let pager = app.grid.pager();
    draw_button(f, "Previous", pager.has_previous(), layout.previous);
    draw_button(f, "Next", pager.has_next(), layout.next);
    let label = Paragraph::new(pager.label())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    f.render_widget(label, layout.page_label);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let position = match (app.cursor_index(), app.grid.selected()) {
        (Some(cursor), Some(selected)) => format!("cell {} (selected {})", cursor + 1, selected + 1),
        (Some(cursor), None) => format!("cell {}", cursor + 1),
        _ => String::new(),
    };

    let status = if !app.status_message.is_empty() {
        app.status_message.clone()
    } else {
        format!(
            "{}  |  [{}]  |  {}",
            position,
            app.keymap.name(),
            app.keymap.status_hint()
        )
    };

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else if !app.status_message.is_empty() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    f.render_widget(Paragraph::new(Line::from(Span::styled(status, style))), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Fixed-size box in the middle of `area`, shrunk to fit.
fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_alert_modal(f: &mut Frame, message: &str) {
    let width = (message.chars().count() as u16).saturating_add(6).max(30);
    let area = centered_box(width, 6, f.area());

    let modal_style = Style::default().fg(Color::White).bg(Color::Black);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Alert ")
        .border_style(Style::default().fg(Color::Red))
        .style(modal_style);

    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().add_modifier(Modifier::BOLD))),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .style(modal_style)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn draw_help_modal(f: &mut Frame, app: &App) {
    let area = centered_rect(80, 80, f.area());

    let modal_style = Style::default().fg(Color::White).bg(Color::Black);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" About Pagegrid ")
        .border_style(Style::default().fg(Color::Green))
        .style(modal_style);

    let mut lines: Vec<Line> = Vec::new();
    for text in get_about_help()
        .into_iter()
        .chain(std::iter::once(String::new()))
        .chain(get_help_text(&app.keymap))
    {
        let style = if text == "About Pagegrid" {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if text.starts_with("  ") {
            Style::default().fg(Color::White)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    let viewport_height = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(viewport_height);
    let effective_scroll = app.help_scroll.min(max_scroll);
    let scroll_y = u16::try_from(effective_scroll).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(modal_style)
        .scroll((scroll_y, 0))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
