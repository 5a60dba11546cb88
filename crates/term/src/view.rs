//! WellView: the terminal implementation of the engine's renderer.
//!
//! The screen is a fixed layout in the spirit of the classic curses game: the
//! well on the left with each logical column two characters wide, the next
//! block and stats panels beside it, and the controls panel on the right.
//! Engine callbacks only edit the framebuffer; `present` flushes the diff.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::{get_spawn_shape, Board, ScoreRecord};
use crate::engine::Renderer;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::terminal::Terminal;
use crate::types::{
    Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, FIRST_PLAYABLE_COL, LAST_PLAYABLE_COL,
};

/// Terminal columns per logical well column.
pub const CELL_W: u16 = 2;

const PLAYABLE_COLS: u16 = (LAST_PLAYABLE_COL - FIRST_PLAYABLE_COL + 1) as u16;

pub const WELL_X: u16 = 0;
pub const WELL_Y: u16 = 0;
pub const WELL_FRAME_W: u16 = PLAYABLE_COLS * CELL_W + 2;
pub const WELL_FRAME_H: u16 = BOARD_HEIGHT as u16 + 2;

pub const NEXT_X: u16 = WELL_X + WELL_FRAME_W + 1;
pub const NEXT_Y: u16 = WELL_Y;
pub const PANEL_W: u16 = 20;
pub const NEXT_H: u16 = 8;

pub const STATS_X: u16 = NEXT_X;
pub const STATS_Y: u16 = NEXT_Y + NEXT_H + 1;
pub const STATS_H: u16 = 9;

pub const CONTROLS_X: u16 = NEXT_X + PANEL_W + 1;
pub const CONTROLS_Y: u16 = WELL_Y;
pub const CONTROLS_H: u16 = WELL_FRAME_H;

/// Size of the whole screen.
pub const SCREEN_W: u16 = CONTROLS_X + PANEL_W;
pub const SCREEN_H: u16 = WELL_FRAME_H;

const GAME_OVER_W: u16 = 22;
const GAME_OVER_H: u16 = 10;

const BLACK: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(20, 20, 28);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
const TITLE: CellStyle = CellStyle::new(Rgb::new(240, 240, 240), BLACK).bold();
const TEXT: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(70, 70, 80), WELL_BG).dim();
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold();

const BLOCK: char = '█';
const EMPTY_CH: char = '·';

const CONTROLS: [&str; 7] = [
    "Controls :",
    "",
    "Move Left  -> j",
    "Move Right -> l",
    "Move Down  -> k",
    "Rotate     -> i",
    "Pause      -> p",
];
const QUIT_HINT: &str = "Quit       -> v";

/// Display color for a piece.
///
/// Follows the classic curses palette by tag: red, cyan, blue, yellow, white,
/// green, magenta.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(220, 60, 60),
        PieceKind::O => Rgb::new(60, 210, 220),
        PieceKind::J => Rgb::new(70, 110, 230),
        PieceKind::L => Rgb::new(235, 210, 60),
        PieceKind::Z => Rgb::new(230, 230, 230),
        PieceKind::S => Rgb::new(80, 210, 100),
        PieceKind::T => Rgb::new(200, 90, 210),
    }
}

fn block_style(kind: PieceKind) -> CellStyle {
    CellStyle::new(piece_color(kind), WELL_BG)
}

/// Screen position of a well cell, or `None` for the wall and anything outside.
pub fn cell_origin(row: i8, col: i8) -> Option<(u16, u16)> {
    if !(0..BOARD_HEIGHT as i8).contains(&row) || !(FIRST_PLAYABLE_COL..=LAST_PLAYABLE_COL).contains(&col) {
        return None;
    }
    let x = WELL_X + 1 + (col - FIRST_PLAYABLE_COL) as u16 * CELL_W;
    let y = WELL_Y + 1 + row as u16;
    Some((x, y))
}

/// Renders the game into a framebuffer and flushes it to a terminal.
pub struct WellView<W: Write = io::Stdout> {
    fb: FrameBuffer,
    terminal: Terminal<W>,
    /// What the well shows, so overlays can be lifted again.
    well: [Cell; BOARD_HEIGHT as usize * BOARD_WIDTH as usize],
}

impl WellView<io::Stdout> {
    pub fn new() -> Self {
        Self::with_terminal(Terminal::stdout())
    }
}

impl Default for WellView<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> WellView<W> {
    pub fn with_terminal(terminal: Terminal<W>) -> Self {
        let mut view = Self {
            fb: FrameBuffer::new(SCREEN_W, SCREEN_H),
            terminal,
            well: [None; BOARD_HEIGHT as usize * BOARD_WIDTH as usize],
        };
        view.draw_frame();
        view
    }

    /// Headless view writing escape sequences into `out`.
    pub fn with_writer(out: W) -> Self {
        Self::with_terminal(Terminal::with_writer(out))
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn terminal(&self) -> &Terminal<W> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<W> {
        &mut self.terminal
    }

    /// Repaint the static parts: borders, titles and the controls text.
    pub fn draw_frame(&mut self) {
        self.fb.clear(CellStyle::default().into_cell(' '));

        self.fb.draw_box(WELL_X, WELL_Y, WELL_FRAME_W, WELL_FRAME_H, BORDER);
        self.fb.fill_rect(
            WELL_X + 1,
            WELL_Y + 1,
            PLAYABLE_COLS * CELL_W,
            BOARD_HEIGHT as u16,
            EMPTY_CH,
            EMPTY,
        );

        self.fb.draw_box(NEXT_X, NEXT_Y, PANEL_W, NEXT_H, BORDER);
        self.fb.put_str(NEXT_X + 3, NEXT_Y, "# NEXT BLOCK #", TITLE);

        self.fb.draw_box(STATS_X, STATS_Y, PANEL_W, STATS_H, BORDER);
        self.fb.put_str(STATS_X + 5, STATS_Y, "# STATS #", TITLE);
        self.draw_stats(&ScoreRecord::default());

        self.fb.draw_box(CONTROLS_X, CONTROLS_Y, PANEL_W, CONTROLS_H, BORDER);
        for (i, line) in CONTROLS.iter().enumerate() {
            self.fb.put_str(CONTROLS_X + 2, CONTROLS_Y + 1 + i as u16, line, TEXT);
        }
        self.fb
            .put_str(CONTROLS_X + 2, CONTROLS_Y + 1 + CONTROLS.len() as u16, QUIT_HINT, TEXT);

        self.well = [None; BOARD_HEIGHT as usize * BOARD_WIDTH as usize];
    }

    /// Flush everything on the next `present`, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.terminal.invalidate();
    }

    fn put_well_cell(&mut self, row: i8, col: i8, cell: Cell) {
        let Some((x, y)) = cell_origin(row, col) else {
            return;
        };
        self.well[row as usize * BOARD_WIDTH as usize + col as usize] = cell;
        match cell {
            Some(kind) => self.fb.fill_rect(x, y, CELL_W, 1, BLOCK, block_style(kind)),
            None => self.fb.fill_rect(x, y, CELL_W, 1, EMPTY_CH, EMPTY),
        }
    }

    /// Repaint well rows from the shadow copy, removing any overlay on them.
    fn restore_well_rows(&mut self, rows: std::ops::Range<u16>) {
        for y in rows {
            let Some(row) = y.checked_sub(WELL_Y + 1) else {
                continue;
            };
            if row >= BOARD_HEIGHT as u16 {
                continue;
            }
            for col in FIRST_PLAYABLE_COL..=LAST_PLAYABLE_COL {
                let cell = self.well[row as usize * BOARD_WIDTH as usize + col as usize];
                self.put_well_cell(row as i8, col, cell);
            }
        }
    }

    fn draw_stats(&mut self, record: &ScoreRecord) {
        let x = STATS_X + 3;
        let inner_w = PANEL_W - 4;
        let rows = [
            ("Score : ", record.points),
            ("Lines : ", record.lines),
            ("Level : ", record.level),
        ];
        for (i, (label, value)) in rows.into_iter().enumerate() {
            let y = STATS_Y + 2 + 2 * i as u16;
            self.fb.fill_rect(x, y, inner_w, 1, ' ', TEXT);
            let end = self.fb.put_str(x, y, label, TEXT);
            self.fb.put_u32(end, y, value, TEXT);
        }
    }

    fn well_mid_row(&self) -> u16 {
        WELL_Y + WELL_FRAME_H / 2
    }
}

impl<W: Write> Renderer for WellView<W> {
    type Error = anyhow::Error;

    fn draw_cell(&mut self, row: i8, col: i8, cell: Cell) -> Result<()> {
        self.put_well_cell(row, col, cell);
        Ok(())
    }

    fn redraw_board(&mut self, board: &Board) -> Result<()> {
        for row in 0..board.height() as i8 {
            for col in FIRST_PLAYABLE_COL..=LAST_PLAYABLE_COL {
                let cell = board.get(row, col).flatten();
                self.put_well_cell(row, col, cell);
            }
        }
        Ok(())
    }

    fn show_score(&mut self, record: &ScoreRecord) -> Result<()> {
        self.draw_stats(record);
        Ok(())
    }

    fn show_next_piece(&mut self, kind: PieceKind) -> Result<()> {
        let x = NEXT_X + 2 + (PANEL_W - 4 - 4 * CELL_W) / 2;
        let y = NEXT_Y + 2;
        self.fb.fill_rect(x, y, 4 * CELL_W, 4, ' ', TEXT);

        let style = CellStyle::new(piece_color(kind), BLACK);
        for (dr, dc) in get_spawn_shape(kind) {
            self.fb
                .fill_rect(x + dc as u16 * CELL_W, y + dr as u16, CELL_W, 1, BLOCK, style);
        }
        Ok(())
    }

    fn show_game_over(&mut self, record: &ScoreRecord) -> Result<()> {
        let x = WELL_X + (WELL_FRAME_W - GAME_OVER_W) / 2;
        let y = WELL_Y + (WELL_FRAME_H - GAME_OVER_H) / 2;
        self.fb.fill_rect(x, y, GAME_OVER_W, GAME_OVER_H, ' ', TEXT);
        self.fb.draw_box(x, y, GAME_OVER_W, GAME_OVER_H, OVERLAY);
        self.fb.put_str(x + 6, y, " GAME OVER ", OVERLAY);
        self.fb.put_str(x + 3, y + 1, "# Your Score #", TITLE);

        let rows = [
            ("Score : ", record.points),
            ("Lines : ", record.lines),
            ("Level : ", record.level),
        ];
        for (i, (label, value)) in rows.into_iter().enumerate() {
            let end = self.fb.put_str(x + 4, y + 3 + i as u16, label, TEXT);
            self.fb.put_u32(end, y + 3 + i as u16, value, TEXT);
        }
        self.fb.put_str(x + 2, y + 7, "Save score? y/n", TITLE);
        self.fb.put_str(x + 2, y + 8, "r: play again", TEXT);
        Ok(())
    }

    fn show_paused(&mut self, paused: bool) -> Result<()> {
        let y = self.well_mid_row();
        if paused {
            let text = " PAUSED ";
            let x = WELL_X + (WELL_FRAME_W - text.len() as u16) / 2;
            self.fb.put_str(x, y, text, OVERLAY);
        } else {
            self.restore_well_rows(y..y + 1);
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.terminal.draw(&self.fb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> WellView<Vec<u8>> {
        WellView::with_writer(Vec::new())
    }

    #[test]
    fn layout_fits_a_classic_terminal() {
        assert_eq!((SCREEN_W, SCREEN_H), (74, 24));
        assert_eq!(WELL_FRAME_W, 32);
    }

    #[test]
    fn wall_column_is_never_drawn() {
        assert_eq!(cell_origin(0, 0), None);
        assert_eq!(cell_origin(0, 16), None);
        assert_eq!(cell_origin(22, 5), None);
        assert_eq!(cell_origin(0, 1), Some((1, 1)));
        assert_eq!(cell_origin(21, 15), Some((29, 22)));
    }

    #[test]
    fn pause_overlay_is_lifted_on_resume() {
        let mut view = view();
        let row = (view.well_mid_row() - 1) as i8;
        view.draw_cell(row, 8, Some(PieceKind::T)).unwrap();
        let before = view.frame().clone();

        view.show_paused(true).unwrap();
        assert!(view.frame().row_text(view.well_mid_row()).contains("PAUSED"));

        view.show_paused(false).unwrap();
        assert_eq!(view.frame(), &before);
    }
}
