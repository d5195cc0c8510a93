//! A window for animating simple drawing programs one frame at a time.
//!
//! Programs draw lines, shapes, text and images onto an offscreen canvas and
//! call `paint_frame` to show it. Each painted frame then waits for the
//! toolbar: play runs frames continuously, frame advance releases one.
//!
//! ```no_run
//! use animframe::{AnimationFrame, Style};
//!
//! let mut frame = AnimationFrame::new()?;
//! for size in (10..400).step_by(10) {
//!     frame.draw_circle(250, 250, size, Style::Stroke);
//!     frame.paint_frame()?;
//! }
//! # Ok::<(), animframe::FrameError>(())
//! ```

#[macro_use]
extern crate bitflags;

mod config;
mod error;
mod frame;
mod images;
mod surface;
mod toolbar;
mod transport;
mod window;

pub use crate::config::FrameConfig;
pub use crate::error::{FrameError, Result};
pub use crate::frame::{AnimationFrame, Style};
pub use crate::images::{Bitmap, ImageStore};
pub use crate::surface::{Headless, Input, Surface};
pub use crate::toolbar::TOOLBAR_HEIGHT;
pub use crate::transport::Transport;
pub use crate::window::WindowSurface;
pub use framebuffer::{Color, GraphicBuffer};
