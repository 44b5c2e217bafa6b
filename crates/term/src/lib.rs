//! Terminal "game renderer" module.
//!
//! A small rendering layer for playing in a terminal. It avoids widget
//! libraries and draws into a plain framebuffer that is then flushed to the
//! terminal with crossterm.
//!
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] owns the real terminal and writes frame diffs to it

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, tile_label, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
