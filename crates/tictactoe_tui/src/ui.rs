//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use std::rc::Rc;
use tictactoe_core::{Mark, Position, ScoreRecord, Square};

const HELP: &str = "arrows/1-9 move · enter/click place · n new game · r reset score · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], &app.controller().scores());
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_scores(frame: &mut Frame, area: Rect, scores: &ScoreRecord) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let entries = [
        ("PLAYER", *scores.human_wins(), Color::Blue),
        ("DRAWS", *scores.draws(), Color::Gray),
        ("COMPUTER", *scores.computer_wins(), Color::Red),
    ];
    for (col, (label, value, color)) in cols.iter().zip(entries) {
        let text = Line::from(vec![
            Span::styled(format!("{} ", label), Style::default().fg(color)),
            Span::styled(value.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]);
        let widget = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, *col);
    }
}

/// Title, score, board, status and help bands.
fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Score
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area)
}

/// Three cell rows interleaved with two separator rows.
fn board_rows(board_band: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(center_rect(board_band, 40, 11))
}

/// Three cells interleaved with two separator columns.
fn row_columns(row: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(row)
}

/// Where each square is drawn on a screen of size `area`.
pub fn cell_rects(area: Rect) -> [(Position, Rect); 9] {
    let rows = board_rows(screen_chunks(area)[2]);
    Position::ALL.map(|pos| (pos, row_columns(rows[pos.row() * 2])[pos.col() * 2]))
}

/// Square under the terminal cell at (`column`, `row`), if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_rects(area)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(pos, _)| pos)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let rows = board_rows(area);

    for (i, chunk) in rows.iter().enumerate() {
        if i % 2 == 1 {
            draw_separator(frame, *chunk);
        } else {
            let cols = row_columns(*chunk);
            for (j, col) in cols.iter().enumerate() {
                if j % 2 == 1 {
                    draw_separator_vertical(frame, *col);
                } else if let Some(pos) = Position::from_coords(i / 2, j / 2) {
                    draw_cell(frame, *col, app, pos);
                }
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let engine = app.controller().engine();
    let winning = engine
        .winning_cells()
        .is_some_and(|line| line.contains(&pos));

    let (symbol, base_style) = match engine.board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && !engine.is_game_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::MatchController;
    use crate::settings::FirstPlayer;
    use rand::{SeedableRng, rngs::SmallRng};
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;
    use tictactoe_core::MoveSelector;

    #[test]
    fn test_renders_scores_and_status() {
        let controller = MatchController::new(
            FirstPlayer::Human,
            MoveSelector::with_mistake_chance(0.0),
            SmallRng::seed_from_u64(1),
        );
        let app = App::new(controller, Duration::ZERO);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
        terminal.draw(|f| draw(f, &app)).expect("draw");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Tic Tac Toe"));
        assert!(text.contains("PLAYER 0"));
        assert!(text.contains("COMPUTER 0"));
        assert!(text.contains("Your turn (X)"));
    }

    #[test]
    fn test_click_maps_to_drawn_cell() {
        let controller = MatchController::new(
            FirstPlayer::Human,
            MoveSelector::with_mistake_chance(0.0),
            SmallRng::seed_from_u64(1),
        );
        let app = App::new(controller, Duration::ZERO);
        let area = Rect::new(0, 0, 80, 30);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
        terminal.draw(|f| draw(f, &app)).expect("draw");
        let buffer = terminal.backend().buffer();

        for (pos, rect) in cell_rects(area) {
            // Empty squares show their keypad number on the cell's second line.
            let line: String = (rect.x..rect.right())
                .map(|x| buffer[(x, rect.y + 1)].symbol())
                .collect();
            assert!(line.contains(&(pos.to_index() + 1).to_string()));

            let (mid_x, mid_y) = (rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(cell_at(area, mid_x, mid_y), Some(pos));
            assert_eq!(cell_at(area, rect.x, rect.y), Some(pos));
        }
    }

    #[test]
    fn test_click_outside_board_hits_nothing() {
        let area = Rect::new(0, 0, 80, 30);
        assert_eq!(cell_at(area, 0, 0), None);
        assert_eq!(cell_at(area, 79, 29), None);

        let (_, top_left) = cell_rects(area)[0];
        // Separator column right of the first cell.
        assert_eq!(cell_at(area, top_left.right(), top_left.y), None);
    }
}
