//! Methods for adding color when drawing types such as [`crate::frames::Frame`] and [`crate::cell::Cell`] to the screen.
//!
//! This uses [`crossterm::style::Color`] to represent ANSI terminal colors.

use crossterm::style;

use crate::cell::Cell;

/// An 8-bit ANSI terminal color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Color(pub u8);

macro_rules! define_standard_colors {
    ($($num:literal $name:ident $str:literal $($note:literal)?),+) => {
        $(
            #[doc = "The ANSI standard"]
            #[doc = $str]
            #[doc = "color. Its appearance varies across terminals and themes."]
            $(#[doc = $note])?
            pub const $name: Color = Color::new($num);
        )+
    };
}

/// This module contains the 16 ANSI standard colors, supported by almost all terminals. If you want your program to be
/// maximally visible on all terminals, and don't mind the colors looking slightly different, you can use these.
pub mod standard {
    use super::Color;
    define_standard_colors! {
        0 BLACK "black",
        1 RED "red",
        2 GREEN "green",
        3 YELLOW "yellow",
        4 BLUE "blue",
        5 MAGENTA "magenta",
        6 CYAN "cyan",
        7 WHITE "white" "Note: This color is not equivalent to RGB white on most terminals.",
        8 BRIGHT_BLACK "bright black",
        9 BRIGHT_RED "bright red",
        10 BRIGHT_GREEN "bright green",
        11 BRIGHT_YELLOW "bright yellow",
        12 BRIGHT_BLUE "bright blue",
        13 BRIGHT_MAGENTA "bright magenta",
        14 BRIGHT_CYAN "bright cyan",
        15 BRIGHT_WHITE "bright white"
    }
}

impl Color {
    /// Creates a new color from an 8-bit ANSI color value.
    pub const fn new(color: u8) -> Self {
        Self(color)
    }

    /// Returns the equivalent crossterm color, for the purposes of integration
    pub fn to_crossterm_color(self) -> style::Color {
        style::Color::AnsiValue(self.0)
    }
}

/// A [`Cell`] with associated [`Color`] data.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ColoredCell {
    pub cell: Cell,
    pub color: Option<Color>,
}

impl ColoredCell {
    /// Creates a new [`ColoredCell`] from parameters
    pub fn new(cell: Cell, color: Option<Color>) -> Self {
        Self { cell, color }
    }

    /// Combines this cell's pixel data with the argument [`Cell`] with a bitwise OR.
    pub fn merge_cell(&mut self, cell: Cell) {
        self.cell = self.cell | cell;
    }
}
