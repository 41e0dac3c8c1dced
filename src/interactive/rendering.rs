//! TUI rendering with ratatui
//!
//! Header, letter grid, keyboard, result bar and help bar, stacked vertically.

use super::app::{App, KEY_HELP};
use crate::core::MatchState;
use crate::engine::GameStatus;
use crate::output::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;

const MATCHED: Color = Color::Rgb(0x77, 0xdd, 0x77);
const EXISTS: Color = Color::Rgb(0xcc, 0xcc, 0x00);
const NOT_MATCHED: Color = Color::Rgb(0x44, 0x44, 0x44);
const ACTIVE: Color = Color::Rgb(0x88, 0xaa, 0xff);
const LOST: Color = Color::Rgb(0xff, 0xcd, 0x44);

/// Presentation for a match state
#[must_use]
pub fn state_style(state: MatchState) -> Style {
    match state {
        MatchState::Matched => Style::default().fg(MATCHED).add_modifier(Modifier::BOLD),
        MatchState::Exists => Style::default().fg(EXISTS).add_modifier(Modifier::BOLD),
        MatchState::NotMatched => Style::default().fg(NOT_MATCHED),
        MatchState::NotChecked => Style::default(),
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board = app.game.board();
    let grid_height = span(board.row_count(), CELL_HEIGHT);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // Header
            Constraint::Length(grid_height),                    // Grid
            Constraint::Length(KEYBOARD_ROWS.len() as u16 + 1), // Keyboard
            Constraint::Length(1),                              // Result bar
            Constraint::Length(1),                              // Help bar
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_result(f, app, chunks[3]);
    render_help(f, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("lexis")
        .style(Style::default().fg(ACTIVE).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

/// Terminal extent of `count` cells of `size` each, clamped to `u16::MAX`
fn span(count: usize, size: u16) -> u16 {
    u16::try_from(count)
        .unwrap_or(u16::MAX)
        .saturating_mul(size)
}

/// Horizontally centred strip of `width` columns inside `area`
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let board = game.board();
    let grid = centered(area, span(board.col_count(), CELL_WIDTH));
    let cursor = game.cursor();
    let playing = game.status() == GameStatus::Playing;

    for (r, row) in board.rows().iter().enumerate() {
        let y = grid.y.saturating_add(span(r, CELL_HEIGHT));
        if y >= area.bottom() {
            break;
        }
        for (c, cell) in row.iter().enumerate() {
            let x = grid.x.saturating_add(span(c, CELL_WIDTH));
            if x >= area.right() {
                break;
            }
            let rect = Rect {
                x,
                y,
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            }
            .intersection(area);
            if rect.is_empty() {
                continue;
            }

            let style = state_style(cell.state());
            let border = if playing && (r, c) == cursor {
                Style::default().fg(ACTIVE)
            } else {
                style
            };
            let letter = Paragraph::new(cell.display_char().to_ascii_uppercase().to_string())
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border),
                );
            f.render_widget(letter, rect);
        }
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keys = app.game.keys();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    Span::styled(
                        format!(" {} ", c.to_ascii_uppercase()),
                        state_style(keys.get(c)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(keyboard, area);
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let (text, background) = match game.status() {
        GameStatus::Won => (
            format!(
                "You won! {}/{} attempts",
                game.attempts(),
                game.max_attempts()
            ),
            MATCHED,
        ),
        GameStatus::Lost => (
            format!(
                "Better luck next time! The answer was: {}",
                game.answer()
            ),
            LOST,
        ),
        GameStatus::Playing => {
            let (row, col) = game.cursor();
            (
                format!(
                    "Row: {}/{}, Col: {}",
                    row + 1,
                    game.max_attempts(),
                    col + 1
                ),
                ACTIVE,
            )
        }
    };

    let result = Paragraph::new(text)
        .style(Style::default().fg(Color::Black).bg(background))
        .alignment(Alignment::Center);
    f.render_widget(result, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let text = KEY_HELP
        .iter()
        .map(|(key, desc)| format!("{key} {desc}"))
        .collect::<Vec<_>>()
        .join(" • ");

    let help = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
