//! Event handling functions for user input and application state updates.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    grid::Direction,
    types::{MainMenuItem, OptionsMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function waits up to `timeout` for a keyboard event and dispatches it to the handler of
/// the current screen. Key releases and repeats reported by some terminals are ignored.
///
/// # Errors
///
/// This function returns terminal I/O errors and errors from applying the key's command.
pub(crate) fn handle_events(app: &mut App, timeout: Duration) -> Result<()> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code, Instant::now())?;
            }
        }
    }

    Ok(())
}

/// Applies a single key press to the application.
///
/// The 'q' key quits from every screen; every other key means something different depending on
/// the screen being shown.
///
/// # Errors
///
/// This function returns errors from the in-game commands.
pub(crate) fn handle_key(app: &mut App, code: KeyCode, now: Instant) -> Result<()> {
    if code == KeyCode::Char('q') {
        app.exit = true;
        return Ok(());
    }

    match app.screen {
        Screen::MainMenu(item) => handle_main_menu(app, item, code),
        Screen::OptionsMenu(item) => handle_options_menu(app, item, code),
        Screen::InGame => handle_in_game(app, code, now)?,
    }

    Ok(())
}

/// Handles key presses on the main menu.
///
/// The 'j' and 'k' keys, or the arrow keys, move the highlight; 'l' or Enter selects.
fn handle_main_menu(app: &mut App, item: MainMenuItem, code: KeyCode) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => app.screen = Screen::MainMenu(item.next()),
        KeyCode::Char('k') | KeyCode::Up => app.screen = Screen::MainMenu(item.previous()),
        KeyCode::Char('l') | KeyCode::Enter => match item {
            MainMenuItem::StartGame => app.screen = Screen::InGame,
            MainMenuItem::Options => app.screen = Screen::OptionsMenu(OptionsMenuItem::Sound),
            MainMenuItem::Quit => app.exit = true,
        },
        _ => {}
    }
}

/// Handles key presses on the options menu.
///
/// Navigation works as on the main menu, with 'h' or Escape returning to it.
fn handle_options_menu(app: &mut App, item: OptionsMenuItem, code: KeyCode) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => app.screen = Screen::OptionsMenu(item.next()),
        KeyCode::Char('k') | KeyCode::Up => app.screen = Screen::OptionsMenu(item.previous()),
        KeyCode::Char('l') | KeyCode::Enter => match item {
            OptionsMenuItem::Sound => app.muted = !app.muted,
            OptionsMenuItem::Back => app.screen = Screen::MainMenu(MainMenuItem::Options),
        },
        KeyCode::Char('h') | KeyCode::Esc => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        _ => {}
    }
}

/// Handles key presses while walking the maze.
///
/// The arrow keys and 'w', 'a', 's', 'd' move the avatar. 'r' restarts the maze, 'n' carves a new
/// one, 'p' toggles the path hint, 'm' toggles the sound and Escape returns to the main menu.
fn handle_in_game(app: &mut App, code: KeyCode, now: Instant) -> Result<()> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => app.move_player(Direction::Up, now)?,
        KeyCode::Down | KeyCode::Char('s') => app.move_player(Direction::Down, now)?,
        KeyCode::Left | KeyCode::Char('a') => app.move_player(Direction::Left, now)?,
        KeyCode::Right | KeyCode::Char('d') => app.move_player(Direction::Right, now)?,
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('n') => app.regenerate()?,
        KeyCode::Char('p') => app.show_path = !app.show_path,
        KeyCode::Char('m') => app.muted = !app.muted,
        KeyCode::Esc => app.screen = Screen::MainMenu(MainMenuItem::StartGame),
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::tests::create_test_app, grid::Grid};

    /// Presses a sequence of keys at the same instant.
    fn press(app: &mut App, keys: &[KeyCode]) {
        let now = Instant::now();
        for &key in keys {
            handle_key(app, key, now).expect("key handling must not fail");
        }
    }

    #[test]
    fn test_q_quits_from_every_screen() {
        for screen in [
            Screen::MainMenu(MainMenuItem::Options),
            Screen::OptionsMenu(OptionsMenuItem::Back),
            Screen::InGame,
        ] {
            let (mut app, _) = create_test_app();
            app.screen = screen;

            press(&mut app, &[KeyCode::Char('q')]);

            assert!(app.exit, "q must quit from {screen:?}");
        }
    }

    #[test]
    fn test_main_menu_navigation() {
        let (mut app, _) = create_test_app();

        press(&mut app, &[KeyCode::Char('j'), KeyCode::Down]);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Quit));

        press(&mut app, &[KeyCode::Up]);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Options));

        press(&mut app, &[KeyCode::Char('k'), KeyCode::Enter]);
        assert_eq!(app.screen, Screen::InGame);
    }

    #[test]
    fn test_main_menu_quit_item_exits() {
        let (mut app, _) = create_test_app();
        app.screen = Screen::MainMenu(MainMenuItem::Quit);

        press(&mut app, &[KeyCode::Char('l')]);

        assert!(app.exit);
    }

    #[test]
    fn test_options_menu_toggles_sound() {
        let (mut app, _) = create_test_app();
        app.screen = Screen::MainMenu(MainMenuItem::Options);

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.screen, Screen::OptionsMenu(OptionsMenuItem::Sound));

        press(&mut app, &[KeyCode::Char('l')]);
        assert!(app.muted);
        press(&mut app, &[KeyCode::Enter]);
        assert!(!app.muted);

        press(&mut app, &[KeyCode::Char('j'), KeyCode::Char('l')]);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Options));
    }

    #[test]
    fn test_options_menu_escape_returns() {
        let (mut app, _) = create_test_app();
        app.screen = Screen::OptionsMenu(OptionsMenuItem::Sound);

        press(&mut app, &[KeyCode::Esc]);

        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Options));
    }

    #[test]
    fn test_in_game_movement_keys() {
        let (mut app, _) = create_test_app();
        app.screen = Screen::InGame;

        press(&mut app, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Up]);
        assert_eq!(
            app.session.navigation().visited().len(),
            1,
            "the entry is boxed in on the left and above"
        );

        let first = crate::app::tests::route(&app)
            .first()
            .copied()
            .expect("route is not empty");
        let key = match first {
            Direction::Right => KeyCode::Char('d'),
            Direction::Down => KeyCode::Char('s'),
            Direction::Up => KeyCode::Char('w'),
            Direction::Left => KeyCode::Char('a'),
        };
        press(&mut app, &[key]);

        assert!(app.session.navigation().is_moving());
        assert_eq!(app.session.navigation().visited().len(), 2);
    }

    #[test]
    fn test_in_game_toggles() {
        let (mut app, _) = create_test_app();
        app.screen = Screen::InGame;

        press(&mut app, &[KeyCode::Char('p'), KeyCode::Char('m')]);
        assert!(app.show_path);
        assert!(app.muted);

        press(&mut app, &[KeyCode::Char('p'), KeyCode::Char('m')]);
        assert!(!app.show_path);
        assert!(!app.muted);
    }

    #[test]
    fn test_in_game_reset_and_new_maze() {
        let (mut app, _) = create_test_app();
        app.screen = Screen::InGame;
        let old_grid = app.session.grid().clone();

        press(&mut app, &[KeyCode::Right, KeyCode::Down, KeyCode::Char('r')]);
        assert_eq!(app.session.navigation().current(), Grid::entry());
        assert_eq!(app.session.navigation().visited().len(), 1);
        assert_eq!(app.session.grid(), &old_grid, "reset keeps the maze");

        press(&mut app, &[KeyCode::Char('n')]);
        assert_eq!(app.session.navigation().visited().len(), 1);
        assert_eq!(app.session.grid().width(), old_grid.width());
    }

    #[test]
    fn test_in_game_escape_returns_to_menu() {
        let (mut app, _) = create_test_app();
        app.screen = Screen::InGame;

        press(&mut app, &[KeyCode::Esc]);

        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
        assert!(!app.exit);
    }
}
