//! Stateless screen rendering.

use super::app::App;
use crate::config::PaintColor;
use crate::geometry::CellRect;
use crate::render::{Canvas, Paint};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{self, Circle, Context, Line, Rectangle},
    },
};

/// Areas of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Space available to the board.
    pub board: Rect,
    /// Status box.
    pub status: Rect,
}

/// Splits the terminal into title, board and status.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(4), // Status
        ])
        .split(area);

    ScreenLayout {
        title: chunks[0],
        board: chunks[1],
        status: chunks[2],
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = screen_layout(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, screen.title);

    draw_board(frame, app);

    let status = format!(
        "{}\nNext: {} | Cursor: {} | click/Enter/1-9: place, arrows: move, q: save & quit",
        app.status_message(),
        app.view().board().next_mark(),
        app.cursor()
    );
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, screen.status);
}

fn draw_board(frame: &mut Frame, app: &App) {
    let view = app.view();
    let side = f64::from(view.geometry().side());
    let cursor_rect = view.geometry().cell_rect(app.cursor().to_index());
    let cursor_paint = Paint {
        color: PaintColor::Yellow,
        stroke_width: view.paint().stroke_width,
    };

    let board = canvas::Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, side])
        .y_bounds([0.0, side])
        .paint(|ctx| {
            let mut canvas = TerminalCanvas { ctx, side };
            view.draw(&mut canvas);
            if let Some(rect) = cursor_rect {
                canvas.draw_rect(rect, &cursor_paint);
            }
        });
    frame.render_widget(board, app.board_area());
}

/// Adapter from surface coordinates (y down) to the ratatui canvas (y up).
struct TerminalCanvas<'a, 'b> {
    ctx: &'a mut Context<'b>,
    side: f64,
}

impl Canvas for TerminalCanvas<'_, '_> {
    fn draw_rect(&mut self, rect: CellRect, paint: &Paint) {
        self.ctx.draw(&Rectangle {
            x: f64::from(rect.left),
            y: self.side - f64::from(rect.bottom),
            width: f64::from(rect.width()),
            height: f64::from(rect.height()),
            color: terminal_color(paint.color),
        });
    }

    fn draw_circle(&mut self, center: (f64, f64), radius: f64, paint: &Paint) {
        self.ctx.draw(&Circle {
            x: center.0,
            y: self.side - center.1,
            radius,
            color: terminal_color(paint.color),
        });
    }

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), paint: &Paint) {
        self.ctx.draw(&Line::new(
            from.0,
            self.side - from.1,
            to.0,
            self.side - to.1,
            terminal_color(paint.color),
        ));
    }
}

/// Maps a configured paint color to a terminal color.
pub fn terminal_color(color: PaintColor) -> Color {
    match color {
        PaintColor::Default => Color::Reset,
        PaintColor::Black => Color::Black,
        PaintColor::White => Color::White,
        PaintColor::Red => Color::Red,
        PaintColor::Green => Color::Green,
        PaintColor::Blue => Color::Blue,
        PaintColor::Yellow => Color::Yellow,
        PaintColor::Cyan => Color::Cyan,
        PaintColor::Magenta => Color::Magenta,
    }
}

/// Centers a `width` x `height` rectangle inside `area`, clamped to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
