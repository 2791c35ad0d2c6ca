//! Module for writing output to the terminal.
//! Contains the [`Screen`] type, its drawing interface, and the event loop
//! that hosts widgets such as [`crate::walker::Walker`].

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self as ct_event, DisableFocusChange, EnableFocusChange},
    execute, queue,
    style::{ResetColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::{
    cell::{Cell, PIXEL_HEIGHT, PIXEL_WIDTH},
    color::{Color, ColoredCell},
    event::Event,
    frames::Frame,
    units::{cell_length, index, pos_components},
    walker::Viewport,
};

/// Type used to write to the terminal. Contains public methods
/// to write pixels and sprite frames to the screen, as well as colors.
///
/// The point (0, 0) represents the top left pixel of the screen.
///
/// [`Screen::start_loop`] runs the terminal event/render loop; while it
/// runs, the screen reports itself as displayed to any attached
/// [`crate::walker::Walker`]. The [`Screen::rasterize`] method can be used
/// to generate plain bytes for tests or non-interactive output.
pub struct Screen {
    cells: Vec<ColoredCell>,
    width: u16,
    height: u16,
    displayed: bool,
    stop_requested: bool,
}

impl Screen {
    /// Create a new empty screen with the given dimensions in pixels.
    /// The resulting width and height are rounded up to the nearest multiple of
    /// [`PIXEL_WIDTH`] and [`PIXEL_HEIGHT`].
    pub fn new_pixels(width: u16, height: u16) -> Self {
        let mut screen = Self {
            cells: vec![],
            width: 0,
            height: 0,
            displayed: false,
            stop_requested: false,
        };
        screen.resize_pixels(width, height);
        screen
    }

    /// Create a screen covering the whole terminal, sized via crossterm.
    pub fn from_terminal() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::new_pixels(cols * PIXEL_WIDTH, rows * PIXEL_HEIGHT))
    }

    /// Resizes the pixel buffer, dropping previous contents.
    pub fn resize_pixels(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells =
            vec![ColoredCell::default(); cell_length(self.cell_width(), self.cell_height())];
    }

    /// Compute the width of the screen, in number of cells.
    pub fn cell_width(&self) -> u16 {
        self.width.div_ceil(PIXEL_WIDTH)
    }
    /// Compute the height of the screen, in number of cells.
    pub fn cell_height(&self) -> u16 {
        self.height.div_ceil(PIXEL_HEIGHT)
    }
    /// Compute the width of the screen, in number of pixels.
    pub fn pixel_width(&self) -> u16 {
        self.width
    }
    /// Compute the height of the screen, in number of pixels.
    pub fn pixel_height(&self) -> u16 {
        self.height
    }

    /// Clears all pixels and colors.
    pub fn clear(&mut self) {
        self.cells.fill(ColoredCell::default());
    }

    /// Sets the pixel at the given coordinates, tinting its cell with the
    /// given color. A `None` color leaves the cell's color untouched.
    ///
    /// **Ignores** out-of-bounds input.
    /// This may be preferred when drawing graphics that can partially clip off screen.
    pub fn set_colored(&mut self, x: u16, y: u16, color: Option<Color>) {
        if x < self.width && y < self.height {
            let ((cell_x, sub_x), (cell_y, sub_y)) = pos_components(x, y);
            let i = index(cell_x, cell_y, self.cell_width());
            let bit = Cell::from_bit_position(sub_x, sub_y)
                .expect("subcell position should be in range");
            self.cells[i].merge_cell(bit);
            if color.is_some() {
                self.cells[i].color = color;
            }
        }
    }

    #[allow(unused)]
    fn pixel_at(&self, x: u16, y: u16) -> bool {
        let ((cell_x, sub_x), (cell_y, sub_y)) = pos_components(x, y);
        let bit = Cell::from_bit_position(sub_x, sub_y).unwrap();
        self.cells[index(cell_x, cell_y, self.cell_width())].cell.bits & bit.bits != 0
    }

    /// Draws a frame with its top-left corner at (x, y), in the frame's
    /// tint. Pixels falling outside the screen are clipped.
    pub fn draw_frame(&mut self, frame: &Frame, x: i32, y: i32) {
        for fy in 0..frame.height_px() {
            for fx in 0..frame.width_px() {
                if !frame.pixel(fx, fy) {
                    continue;
                }
                let sx = x + fx as i32;
                let sy = y + fy as i32;
                if sx >= 0 && sy >= 0 {
                    self.set_colored(sx as u16, sy as u16, frame.color);
                }
            }
        }
    }

    /// Converts the screen to a utf-8 sequence of bytes that can be rendered in a terminal.
    /// Includes newlines in its output. Color data is not included; see
    /// [`Screen::start_loop`] for colored terminal output.
    pub fn rasterize(&self) -> Vec<u8> {
        let mut buf =
            Vec::with_capacity((self.cell_width() as usize * 3 + 1) * self.cell_height() as usize);
        for y in 0..self.cell_height() {
            for x in 0..self.cell_width() {
                let cell = self.cells[index(x, y, self.cell_width())].cell;
                buf.extend_from_slice(&cell.to_braille_utf8());
            }
            buf.push(b'\n');
        }
        buf
    }

    /// Writes the screen to `out` with per-cell colors. Assumes raw mode,
    /// so rows are positioned with explicit cursor moves.
    fn render_to(&self, out: &mut impl Write) -> io::Result<()> {
        let mut current: Option<Color> = None;
        queue!(out, ResetColor)?;
        for y in 0..self.cell_height() {
            queue!(out, cursor::MoveTo(0, y))?;
            for x in 0..self.cell_width() {
                let ColoredCell { cell, color } = self.cells[index(x, y, self.cell_width())];
                if color != current {
                    match color {
                        Some(c) => queue!(out, SetForegroundColor(c.to_crossterm_color()))?,
                        None => queue!(out, ResetColor)?,
                    }
                    current = color;
                }
                out.write_all(&cell.to_braille_utf8())?;
            }
        }
        queue!(out, ResetColor)?;
        Ok(())
    }

    /// Requests that a running [`Screen::start_loop`] exit after the
    /// current frame's callback returns.
    pub fn stop_loop(&mut self) {
        self.stop_requested = true;
    }

    /// Runs the terminal event/render loop at the given frame rate.
    ///
    /// Enters the alternate screen in raw mode with the cursor hidden and
    /// focus reporting enabled; everything is restored when the loop exits,
    /// including on callback error. The callback is invoked once per frame
    /// with the screen and the event received during that frame, if any.
    /// Terminal resizes also resize the pixel buffer before the callback
    /// runs.
    pub fn start_loop<F>(&mut self, fps: u32, mut callback: F) -> io::Result<()>
    where
        F: FnMut(&mut Screen, Option<Event>) -> io::Result<()>,
    {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide, EnableFocusChange)?;
        self.displayed = true;
        self.stop_requested = false;

        let result = self.run_loop(&mut out, fps, &mut callback);

        self.displayed = false;
        let restored = execute!(out, DisableFocusChange, cursor::Show, LeaveAlternateScreen)
            .and_then(|_| terminal::disable_raw_mode());
        result.and(restored)
    }

    fn run_loop(
        &mut self,
        out: &mut impl Write,
        fps: u32,
        callback: &mut impl FnMut(&mut Screen, Option<Event>) -> io::Result<()>,
    ) -> io::Result<()> {
        let budget = Duration::from_secs(1) / fps.max(1);
        loop {
            let frame_start = Instant::now();
            let raw = if ct_event::poll(budget)? {
                Some(ct_event::read()?)
            } else {
                None
            };
            if let Some(ct_event::Event::Resize(cols, rows)) = raw {
                self.resize_pixels(cols * PIXEL_WIDTH, rows * PIXEL_HEIGHT);
            }
            let event = raw.and_then(Event::from_crossterm_event);

            callback(self, event)?;
            if self.stop_requested {
                return Ok(());
            }

            self.render_to(out)?;
            out.flush()?;

            if let Some(rest) = budget.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }
}

impl Viewport for Screen {
    fn width_px(&self) -> u16 {
        self.width
    }

    fn is_displayed(&self) -> bool {
        self.displayed
    }
}
