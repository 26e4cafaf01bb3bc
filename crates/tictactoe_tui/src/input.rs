//! Keyboard mapping for the game screen.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor; positions at the edge stay put.
    Cursor(Position),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a keypad-numbered square.
    Place(Position),
    /// Start a new game.
    NewGame,
    /// Zero the score.
    ResetScores,
    /// Leave the game.
    Quit,
}

/// Moves the cursor one square in the arrow's direction, stopping at the
/// board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.coords();
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_coords(r, c))
        .unwrap_or(cursor)
}

/// Maps a key to a command given the current cursor.
pub fn command_for(cursor: Position, key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::Cursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char(c) if c.is_ascii_digit() => c
            .to_digit(10)
            .and_then(Position::from_keypad)
            .map(Command::Place),
        KeyCode::Char('n') => Some(Command::NewGame),
        KeyCode::Char('r') => Some(Command::ResetScores),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Down),
            Position::BottomCenter
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Left),
            Position::MiddleLeft
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Right),
            Position::MiddleRight
        );
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Up),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Left),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::TopRight, KeyCode::Right),
            Position::TopRight
        );
    }

    #[test]
    fn test_keys_map_to_commands() {
        let at = Position::Center;
        assert_eq!(
            command_for(at, KeyCode::Char('7')),
            Some(Command::Place(Position::BottomLeft))
        );
        assert_eq!(command_for(at, KeyCode::Char('0')), None);
        assert_eq!(
            command_for(at, KeyCode::Enter),
            Some(Command::PlaceAtCursor)
        );
        assert_eq!(command_for(at, KeyCode::Char('n')), Some(Command::NewGame));
        assert_eq!(
            command_for(at, KeyCode::Char('r')),
            Some(Command::ResetScores)
        );
        assert_eq!(command_for(at, KeyCode::Esc), Some(Command::Quit));
        assert_eq!(command_for(at, KeyCode::Char('x')), None);
    }
}
