//! # `shinobi`
//!
//! `shinobi` is a tiny decorative widget for terminal UIs: an animated
//! ninja that walks back and forth along an edge of the screen.
//!
//! The sprite is rendered with unicode Braille characters. A 4-frame walk
//! cycle runs on its own clock while a linear tween carries the sprite
//! between the two edge bounds of its strip, mirroring the art at every
//! turn. The walk halts when the screen stops being displayed and resumes
//! when the terminal regains focus.
pub mod anim;
pub mod cell;
pub mod color;
pub mod event;
pub mod frames;
pub mod screen;
pub(crate) mod units;
pub mod walker;
