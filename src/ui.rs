//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    grid::{Cell, Grid, Position},
    interpolation::ContinuousPosition,
    particles::{Particle, MAX_LIFE},
    pathfinding,
    types::{MainMenuItem, MenuType, OptionsMenuItem, Screen},
    App,
};

/// Offsets of the avatar's glow around its centre, in terminal cells.
const GLOW: [(f64, f64); 9] = [
    (0.0, 0.0),
    (0.4, 0.0),
    (-0.4, 0.0),
    (0.0, 0.3),
    (0.0, -0.3),
    (0.3, 0.2),
    (-0.3, 0.2),
    (0.3, -0.2),
    (-0.3, -0.2),
];

/// Controls listed under the maze.
const IN_GAME_CONTROLS: &str =
    "(arrows) move / (r) restart / (n) new maze / (p) path / (m) sound / (esc) menu";

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from layout lookups on the in-game screen.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::OptionsMenu(item) => options_menu(frame, item, app.muted),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the main and options menus.
///
/// This function creates the common layout and block structure used by both menus. The generic
/// part includes the centered positioning and border styling, while the specific menu content is
/// handled by the caller using the returned rows.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: &MenuType, hint: &str) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Percentage(35),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom(hint)
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value().into()]).split(inner_space)
}

/// Renders a list of menu entries into the rows laid out by [`init_menu`], highlighting one.
fn render_entries(frame: &mut Frame, rows: &[Rect], entries: &[&str], active: usize) {
    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (idx, (entry, row)) in entries.iter().zip(rows).enumerate() {
        let style = if idx == active {
            active_content_style
        } else {
            content_style
        };

        frame.render_widget(Line::raw(*entry).centered().style(style), *row);
    }
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "Options" and "Quit",
/// highlighting the currently selected one.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let rows = init_menu(
        frame,
        &MenuType::MainMenu(3),
        "(j) down / (k) up / (l) select",
    );
    let active = match item {
        MainMenuItem::StartGame => 0,
        MainMenuItem::Options => 1,
        MainMenuItem::Quit => 2,
    };

    render_entries(frame, &rows, &["Start Game", "Options", "Quit"], active);
}

/// Renders the options menu screen with the sound toggle.
///
/// This function displays the options menu with the current sound setting and a "Return" entry
/// going back to the main menu.
pub(crate) fn options_menu(frame: &mut Frame, item: OptionsMenuItem, muted: bool) {
    clear(frame);

    let rows = init_menu(
        frame,
        &MenuType::OptionsMenu(2),
        "(j) down / (k) up / (l) select / (h) return",
    );
    let sound = if muted { "Sound: off" } else { "Sound: on" };
    let active = match item {
        OptionsMenuItem::Sound => 0,
        OptionsMenuItem::Back => 1,
    };

    render_entries(frame, &rows, &[sound, "Return"], active);
}

/// Returns a `width` by `height` area centered within `area`.
///
/// # Errors
///
/// This function returns an error if the layout does not produce a middle area.
fn centered(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let row = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered row from vertical layout")?;

    Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(row)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered area from horizontal layout")
}

/// Projects maze coordinates onto the canvas.
///
/// The canvas spans one unit per terminal cell with its origin in the bottom-left corner, so rows
/// are flipped and columns are stretched by the cell width, landing in the middle of each cell.
#[derive(Clone, Copy, Debug)]
struct Projection {
    /// Terminal columns per maze cell.
    cell_width: f64,
    /// Number of maze rows.
    rows: f64,
}

impl Projection {
    /// Creates the projection for a grid drawn with the given cell width.
    fn new(grid: &Grid, cell_width: u16) -> Self {
        Self {
            cell_width: f64::from(cell_width),
            rows: f64::from(grid.height()),
        }
    }

    /// Maps a continuous maze position onto canvas coordinates.
    fn point(self, position: ContinuousPosition) -> (f64, f64) {
        (
            position
                .x
                .mul_add(self.cell_width, (self.cell_width - 1.) / 2.),
            self.rows - 1. - position.y,
        )
    }

    /// Maps a maze cell onto the canvas coordinates of every terminal cell it covers.
    fn cell(self, position: Position) -> impl Iterator<Item = (f64, f64)> {
        let left = f64::from(position.x) * self.cell_width;
        let y = self.rows - 1. - f64::from(position.y);

        (0_u16..4)
            .map(f64::from)
            .take_while(move |offset| *offset < self.cell_width)
            .map(move |offset| (left + offset, y))
    }

    /// Returns the canvas bounds for a canvas of the given size in terminal cells.
    fn bounds(width: u16, height: u16) -> ([f64; 2], [f64; 2]) {
        (
            [0., f64::from(width.saturating_sub(1))],
            [0., f64::from(height.saturating_sub(1))],
        )
    }
}

/// Renders the in-game screen with the maze, the avatar and the progress line.
///
/// This function draws the maze as coloured blocks (walls, explored cells, the exit and the
/// optional path hint) on one [`Canvas`], then the avatar's glow and its sparks on a second,
/// finer braille canvas layered on top. Once the victory has been announced a popup is shown over
/// the maze.
///
/// # Errors
///
/// This function may return errors from layout lookups.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let grid = app.session.grid();
    let maze_columns = grid.width().saturating_mul(app.cell_width);
    let maze_rows = grid.height();
    let projection = Projection::new(grid, app.cell_width);

    // Maze and padding on top, status block at the bottom
    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());
    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let status_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get status area from layout")?;

    let space = centered(maze_content_area, maze_columns, maze_rows)?;
    let status_area = centered(status_full_area, maze_columns.max(48), 3)?;

    let mut walls = Vec::new();
    let mut explored = Vec::new();
    for (position, cell) in grid.cells() {
        match cell {
            Cell::Wall => walls.extend(projection.cell(position)),
            Cell::Open if app.session.navigation().visited().contains(position) => {
                explored.extend(projection.cell(position));
            }
            Cell::Open => {}
        }
    }
    let exit: Vec<(f64, f64)> = projection.cell(grid.exit()).collect();
    let hint: Vec<(f64, f64)> = if app.show_path {
        pathfinding::solve(grid, app.session.navigation().target(), grid.exit())
            .unwrap_or_default()
            .into_iter()
            .flat_map(|position| projection.cell(position))
            .collect()
    } else {
        Vec::new()
    };

    let (x_bounds, y_bounds) = Projection::bounds(maze_columns, maze_rows);

    let maze = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Block)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &walls,
                color: Color::Green,
            });
            ctx.draw(&Points {
                coords: &explored,
                color: Color::DarkGray,
            });
            ctx.draw(&Points {
                coords: &hint,
                color: Color::Cyan,
            });
            ctx.draw(&Points {
                coords: &exit,
                color: Color::Yellow,
            });
        });

    let (center_x, center_y) = projection.point(app.session.avatar());
    let glow: Vec<(f64, f64)> = GLOW
        .iter()
        .map(|(dx, dy)| (center_x + dx, center_y + dy))
        .collect();
    let (bright_sparks, dim_sparks): (Vec<&Particle>, Vec<&Particle>) = app
        .particles
        .particles()
        .iter()
        .partition(|particle| particle.life > MAX_LIFE / 2);
    let bright_sparks: Vec<(f64, f64)> = bright_sparks
        .into_iter()
        .map(|particle| projection.point(particle.position))
        .collect();
    let dim_sparks: Vec<(f64, f64)> = dim_sparks
        .into_iter()
        .map(|particle| projection.point(particle.position))
        .collect();

    let avatar = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Braille)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &dim_sparks,
                color: Color::Magenta,
            });
            ctx.draw(&Points {
                coords: &bright_sparks,
                color: Color::LightMagenta,
            });
            ctx.draw(&Points {
                coords: &glow,
                color: Color::LightYellow,
            });
        });

    frame.render_widget(maze, space);
    frame.render_widget(avatar, space);

    status(app, frame, status_area);

    if app.session.announced() {
        let area = frame.area();
        victory(app, frame, area)?;
    }

    Ok(())
}

/// Renders the status block under the maze with the exploration progress and the controls.
fn status(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .title(IN_GAME_CONTROLS)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let inner = block.inner(area);

    let sound = if app.muted { "off" } else { "on" };
    let line = Line::raw(format!(
        "explored {}% / sound {sound}",
        app.session.progress_percent()
    ))
    .centered();

    frame.render_widget(block, area);
    frame.render_widget(line, inner);
}

/// Renders the victory popup centered over the given area.
///
/// # Errors
///
/// This function may return errors from layout lookups.
fn victory(app: &App, frame: &mut Frame, area: Rect) -> Result<()> {
    let popup = centered(area, 36, 4)?;
    let block = Block::bordered()
        .title("You found the way out")
        .title_bottom("(n) new maze / (r) walk again")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .border_type(BorderType::Rounded);
    let inner = block.inner(popup);

    let rows = Layout::vertical([Constraint::Max(1); 2]).split(inner);
    let explored = Line::raw(format!(
        "explored {}% of the maze",
        app.session.progress_percent()
    ))
    .centered();
    let cells = Line::raw(format!(
        "{} of {} cells",
        app.session.navigation().visited().len(),
        app.session.total_open()
    ))
    .centered();

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);
    if let [first, second] = rows.as_ref() {
        frame.render_widget(explored, *first);
        frame.render_widget(cells, *second);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::app::tests::{create_test_app, route};

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Collects the rendered buffer into a single string.
    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_main_menu() {
        let (mut app, _) = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::MainMenu(MainMenuItem::Options);

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
        let text = buffer_text(&terminal);
        assert!(text.contains("Start Game"), "main menu lists its entries");
        assert!(text.contains("Quit"), "main menu lists its entries");
    }

    #[test]
    fn test_draw_options_menu_shows_sound_state() {
        let (mut app, _) = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::OptionsMenu(OptionsMenuItem::Sound);
        app.muted = true;

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing options menu should succeed");
        assert!(buffer_text(&terminal).contains("Sound: off"));
    }

    #[test]
    fn test_draw_in_game() {
        let (mut app, _) = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;
        app.show_path = true;

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing in-game screen should succeed");
        assert!(
            buffer_text(&terminal).contains("explored"),
            "the status line shows the progress"
        );
    }

    #[test]
    fn test_draw_in_game_mid_move_with_sparks() {
        let (mut app, _) = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;
        let first = route(&app).first().copied().expect("route is not empty");
        app.move_player(first, Instant::now())
            .expect("moving must not fail");
        app.update(Instant::now()).expect("updating must not fail");

        let result = terminal.draw(|frame| {
            in_game(&app, frame).expect("in-game should render successfully");
        });

        assert!(result.is_ok(), "rendering a move in progress should succeed");
    }

    #[test]
    fn test_draw_victory_popup() {
        let (mut app, _) = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;
        let now = Instant::now();
        for direction in route(&app) {
            app.move_player(direction, now).expect("moving must not fail");
            while app.session.navigation().is_moving() {
                app.update(now).expect("updating must not fail");
            }
        }
        app.update(now + Duration::from_secs(1))
            .expect("updating must not fail");

        let result = terminal.draw(|frame| {
            in_game(&app, frame).expect("in-game should render successfully");
        });

        assert!(result.is_ok(), "rendering the victory popup should succeed");
        assert!(buffer_text(&terminal).contains("You found the way out"));
    }

    #[test]
    fn test_draw_in_game_on_a_tiny_terminal() {
        let (mut app, _) = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).expect("test terminal");
        app.screen = Screen::InGame;

        let result = terminal.draw(|frame| {
            in_game(&app, frame).expect("in-game should render on small terminals");
        });

        assert!(result.is_ok(), "rendering into a cramped area should succeed");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_init_menu_rows() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let layout = init_menu(frame, &MenuType::MainMenu(3), "hint");
            assert_eq!(layout.len(), 3, "main menu should have 3 items");
            let layout = init_menu(frame, &MenuType::OptionsMenu(2), "hint");
            assert_eq!(layout.len(), 2, "options menu should have 2 items");
        });

        assert!(result.is_ok(), "initializing menus should succeed");
    }

    #[test]
    fn test_projection() {
        let grid = Grid::new(5, 3).expect("5x3 is a valid grid");
        let projection = Projection::new(&grid, 2);

        let cells: Vec<(f64, f64)> = projection.cell(Position::new(1, 0)).collect();
        assert_eq!(cells.len(), 2, "a cell covers two terminal columns");
        assert!(cells
            .iter()
            .zip([(2.0, 2.0), (3.0, 2.0)])
            .all(|(&(x, y), (ex, ey))| (x - ex).abs() < 1e-9 && (y - ey).abs() < 1e-9));

        let (x, y) = projection.point(ContinuousPosition { x: 1.0, y: 2.0 });
        assert!((x - 2.5).abs() < 1e-9, "points land mid-cell, got {x}");
        assert!(y.abs() < 1e-9, "the last row sits at the bottom, got {y}");
    }
}
