//! Module for the ninja's walk cycle: [`Frame`] bitmaps and the
//! [`WalkCycle`] clock that steps through them.

#[cfg(feature = "images")]
mod images;
#[cfg(feature = "images")]
pub use images::*;

use std::time::Duration;

use smallvec::SmallVec;

use crate::color::{standard, Color};

/// Number of frames in the walk cycle.
pub const WALK_FRAMES: usize = 4;
/// Time each frame of the walk cycle is shown for. Frame cycling runs on
/// this fixed clock, independent of the positional walk animation.
pub const FRAME_TIME: Duration = Duration::from_millis(500);
/// Widest supported frame, bounded by the `u32` pixel row representation.
pub const MAX_FRAME_WIDTH: u16 = 32;

/// Stack allocation size for a frame's pixel rows
const FRAME_STACK_SIZE: usize = 24;

/// Sprite color variants. Frame assets are addressed by the
/// `walk[-white]{1..4}` naming convention, see [`Variant::frame_name`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Drawn in the terminal's default foreground color.
    #[default]
    Default,
    /// Drawn bright white.
    Light,
}

impl Variant {
    /// The asset name of the n-th frame (1-based), e.g. `walk3` for
    /// [`Variant::Default`] or `walk-white3` for [`Variant::Light`].
    pub fn frame_name(self, n: usize) -> String {
        match self {
            Variant::Default => format!("walk{n}"),
            Variant::Light => format!("walk-white{n}"),
        }
    }

    /// The tint applied to this variant's frames. `None` means the
    /// terminal's default foreground color.
    pub fn tint(self) -> Option<Color> {
        match self {
            Variant::Default => None,
            Variant::Light => Some(standard::BRIGHT_WHITE),
        }
    }
}

/// A monochrome pixel bitmap with an optional tint. One frame of the walk
/// cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Pixel rows; bit `x` of row `y` is the pixel at (x, y).
    rows: SmallVec<[u32; FRAME_STACK_SIZE]>,
    width: u16,
    /// Color the frame is drawn in. `None` leaves the terminal default.
    pub color: Option<Color>,
}

impl Frame {
    /// Creates a frame from rows of `#` (set) and `.` (unset) characters.
    ///
    /// Returns `None` if the rows have uneven lengths, exceed
    /// [`MAX_FRAME_WIDTH`], or contain any other character.
    pub fn from_art(rows: &[&str], color: Option<Color>) -> Option<Self> {
        let width = rows.first().map_or(0, |r| r.len());
        if width > MAX_FRAME_WIDTH as usize {
            return None;
        }
        let mut bits: SmallVec<[u32; FRAME_STACK_SIZE]> = SmallVec::new();
        for row in rows {
            if row.len() != width {
                return None;
            }
            let mut b = 0u32;
            for (x, c) in row.chars().enumerate() {
                match c {
                    '#' => b |= 1 << x,
                    '.' => {}
                    _ => return None,
                }
            }
            bits.push(b);
        }
        Some(Self {
            rows: bits,
            width: width as u16,
            color,
        })
    }

    /// Width of the frame in pixels.
    pub fn width_px(&self) -> u16 {
        self.width
    }

    /// Height of the frame in pixels.
    pub fn height_px(&self) -> u16 {
        self.rows.len() as u16
    }

    /// Whether the pixel at (x, y) is set. Out-of-range positions are unset.
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        x < self.width && (y as usize) < self.rows.len() && self.rows[y as usize] & (1 << x) != 0
    }

    /// Returns this frame mirrored across its vertical axis.
    pub fn hflipped(&self) -> Self {
        if self.width == 0 {
            return self.clone();
        }
        let shift = 32 - self.width as u32;
        Self {
            rows: self.rows.iter().map(|r| r.reverse_bits() >> shift).collect(),
            width: self.width,
            color: self.color,
        }
    }
}

/// The 4-frame walk animation.
///
/// The frame clock starts running as soon as the cycle is constructed.
/// Mirrored frames are precomputed upfront: the sprite is redrawn on every
/// tick of the host loop, so flipping at draw time would be wasted work.
#[derive(Debug, Clone)]
pub struct WalkCycle {
    frames: [Frame; WALK_FRAMES],
    mirrored: [Frame; WALK_FRAMES],
    elapsed: Duration,
}

impl WalkCycle {
    /// Creates a cycle from its four frames, in walk order.
    pub fn new(frames: [Frame; WALK_FRAMES]) -> Self {
        let mirrored = std::array::from_fn(|i| frames[i].hflipped());
        Self {
            frames,
            mirrored,
            elapsed: Duration::ZERO,
        }
    }

    /// The built-in ninja art for the given variant.
    pub fn builtin(variant: Variant) -> Self {
        let tint = variant.tint();
        Self::new(std::array::from_fn(|i| {
            Frame::from_art(BUILTIN_ART[i], tint).expect("built-in art should be well formed")
        }))
    }

    /// Advances the frame clock by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        let period = FRAME_TIME * WALK_FRAMES as u32;
        self.elapsed += dt;
        while self.elapsed >= period {
            self.elapsed -= period;
        }
    }

    /// Index of the frame currently shown.
    pub fn frame_index(&self) -> usize {
        (self.elapsed.as_millis() / FRAME_TIME.as_millis()) as usize % WALK_FRAMES
    }

    /// The frame currently shown, optionally mirrored.
    pub fn current(&self, mirrored: bool) -> &Frame {
        let i = self.frame_index();
        if mirrored {
            &self.mirrored[i]
        } else {
            &self.frames[i]
        }
    }
}

/// Built-in walk-cycle art, 16×16 pixels. Index `n` holds the `walk{n+1}`
/// frame; the [`Variant::Light`] cycle uses the same shapes with a tint.
const BUILTIN_ART: [&[&str]; WALK_FRAMES] = [WALK1, WALK2, WALK3, WALK4];

const WALK1: &[&str] = &[
    "................",
    ".....######.....",
    "....########....",
    "....########....",
    "....##.##.##....",
    "....########....",
    ".....######.....",
    "......####......",
    "....########....",
    "...##########...",
    "...#..####..#...",
    "......####......",
    ".....##..##.....",
    "....##....##....",
    "...##......##...",
    "..##........##..",
];

const WALK2: &[&str] = &[
    "................",
    ".....######.....",
    "....########....",
    "....########....",
    "....##.##.##....",
    "....########....",
    ".....######.....",
    "......####......",
    "....########....",
    "...##########...",
    "....#.####.#....",
    "......####......",
    "......####......",
    ".....##.##......",
    ".....##.##......",
    ".....##.##......",
];

const WALK3: &[&str] = &[
    "................",
    ".....######.....",
    "....########....",
    "....########....",
    "....##.##.##....",
    "....########....",
    ".....######.....",
    "......####......",
    "....########....",
    "...##########...",
    "...#..####..#...",
    "......####......",
    ".....##..##.....",
    "....##....##....",
    "....##....##....",
    "...##......##...",
];

const WALK4: &[&str] = &[
    "................",
    ".....######.....",
    "....########....",
    "....########....",
    "....##.##.##....",
    "....########....",
    ".....######.....",
    "......####......",
    "....########....",
    "...##########...",
    "....#.####.#....",
    "......####......",
    "......####......",
    "......#..#......",
    ".....##..##.....",
    ".....##..##.....",
];
