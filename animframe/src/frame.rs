use crate::config::FrameConfig;
use crate::error::{FrameError, Result};
use crate::images::ImageStore;
use crate::surface::{Headless, Input, Surface};
use crate::toolbar::{self, Button, TOOLBAR_HEIGHT};
use crate::transport::Transport;
use crate::window::WindowSurface;
use framebuffer::{Canvas, Color, FrameBuffer, GraphicBuffer, GLYPH_SIZE};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Whether a shape is filled in or only outlined
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Style {
    Fill,
    Stroke,
}

impl Default for Style {
    fn default() -> Style {
        Style::Fill
    }
}

/// A window for drawing animations one frame at a time.
///
/// Drawing calls go to an offscreen buffer. `paint_frame` shows that buffer
/// and then waits for the play or frame advance button; the next drawing call
/// after a paint starts again from a blank canvas.
pub struct AnimationFrame {
    config: FrameConfig,
    surface: Box<dyn Surface>,
    offscreen: Canvas<Color, FrameBuffer>,
    visible: FrameBuffer,
    transport: Transport,
    color: Color,
    images: ImageStore,
    clear_pending: bool,
    closed: bool,
    frames_painted: u64,
    stream: Option<Box<dyn Write>>,
}

fn blank(width: u32, height: u32, color: Color) -> Canvas<Color, FrameBuffer> {
    let mut gfx = Canvas::new(FrameBuffer::new(width, height), Color::white(), color);
    gfx.fill();
    gfx.set_fill(color);
    gfx
}

fn window_size(width: u32, height: u32) -> (usize, usize) {
    (width as usize, (height + TOOLBAR_HEIGHT) as usize)
}

impl AnimationFrame {
    /// Opens a 500x500 window with the default settings
    pub fn new() -> Result<AnimationFrame> {
        AnimationFrame::with_config(FrameConfig::default())
    }

    /// Opens a window using the given settings
    pub fn with_config(config: FrameConfig) -> Result<AnimationFrame> {
        let (width, height) = window_size(config.width, config.height);
        let surface = WindowSurface::new(&config.title, width, height)?;
        AnimationFrame::with_surface(config, Box::new(surface))
    }

    /// Runs without a window, playing every frame straight through
    pub fn headless(mut config: FrameConfig) -> AnimationFrame {
        config.autoplay = true;
        config.startup_delay_ms = 0;
        AnimationFrame::build(config, Box::new(Headless::new()))
    }

    /// Shows frames on the given surface, then waits out the startup delay
    pub fn with_surface(config: FrameConfig, surface: Box<dyn Surface>) -> Result<AnimationFrame> {
        let mut frame = AnimationFrame::build(config, surface);
        frame.present()?;

        let delay = frame.config.startup_delay();
        frame.wait(delay);
        Ok(frame)
    }

    fn build(config: FrameConfig, surface: Box<dyn Surface>) -> AnimationFrame {
        let color = Color::black();
        let offscreen = blank(config.width, config.height, color);
        let visible = offscreen.buffer().clone();

        AnimationFrame {
            transport: Transport::new(config.autoplay),
            images: ImageStore::new(config.asset_dir.clone()),
            config,
            surface,
            offscreen,
            visible,
            color,
            clear_pending: false,
            closed: false,
            frames_painted: 0,
            stream: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.offscreen.width()
    }

    pub fn height(&self) -> u32 {
        self.offscreen.height()
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Number of frames painted so far
    pub fn frames_painted(&self) -> u64 {
        self.frames_painted
    }

    /// The drawing in progress
    pub fn offscreen(&self) -> &FrameBuffer {
        self.offscreen.buffer()
    }

    /// What the window showed at the last paint
    pub fn visible(&self) -> &FrameBuffer {
        &self.visible
    }

    /// Writes every painted frame to the given stream as a binary PPM image
    pub fn stream_to(&mut self, output: impl Write + 'static) {
        self.stream = Some(Box::new(output));
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the pen color used by every drawing call that follows
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.offscreen.set_fill(color);
        self.offscreen.set_stroke(color);
    }

    /// Starts a fresh canvas if a frame has been painted since the last
    /// drawing call
    fn begin_drawing(&mut self) {
        if self.clear_pending {
            self.offscreen.set_fill(Color::white());
            self.offscreen.fill();
            self.offscreen.set_fill(self.color);
            self.clear_pending = false;
        }
    }

    /// Draws a straight line from (x1, y1) to (x2, y2)
    pub fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.begin_drawing();
        self.offscreen.stroke_line(x1, y1, x2, y2);
    }

    /// Draws a rectangle with its top left corner at (x, y)
    pub fn draw_rect(&mut self, x: i64, y: i64, width: i64, height: i64, style: Style) {
        self.begin_drawing();
        match style {
            Style::Fill => self.offscreen.fill_rect(x, y, width, height),
            Style::Stroke => self.offscreen.stroke_rect(x, y, width, height),
        }
    }

    /// Draws a circle centred on (x, y). The size is the diameter.
    pub fn draw_circle(&mut self, x: i64, y: i64, diameter: i64, style: Style) {
        self.begin_drawing();
        if diameter <= 0 {
            return;
        }

        let radius = diameter / 2;
        match style {
            Style::Fill => self.offscreen.fill_circle(x, y, radius),
            Style::Stroke => self.offscreen.stroke_circle(x, y, radius),
        }
    }

    /// Draws a filled square of the given side centred on (x, y)
    pub fn draw_square(&mut self, x: i64, y: i64, side: i64) {
        self.draw_rect(x - side / 2, y - side / 2, side, side, Style::Fill);
    }

    /// Draws text starting at x with its baseline at y. The size is roughly
    /// the glyph height in pixels.
    pub fn draw_string(&mut self, text: &str, x: i64, y: i64, size: f32) {
        self.begin_drawing();
        let scale = ((size / GLYPH_SIZE as f32).round() as i64).max(1);
        self.offscreen.fill_text(x, y, scale, text);
    }

    /// Registers an image file from the asset directory under its file name
    pub fn set_image(&mut self, name: &str) -> Result<()> {
        self.images.load(name)
    }

    pub fn images(&mut self) -> &mut ImageStore {
        &mut self.images
    }

    /// Draws a registered image centred on (x, y), scaled to the given
    /// percentage of its natural size. Unregistered names draw nothing.
    pub fn draw_image(&mut self, name: &str, x: i64, y: i64, percent: u32) {
        self.begin_drawing();
        let bitmap = match self.images.get(name) {
            Some(bitmap) => bitmap,
            None => {
                debug!(name, "drawing an unregistered image");
                return;
            }
        };

        let width = (bitmap.width() as f64 * percent as f64 / 100.0) as i64;
        let height = (bitmap.height() as f64 * percent as f64 / 100.0) as i64;
        self.offscreen
            .blit_scaled(bitmap, x - width / 2, y - height / 2, width, height);
    }

    /// Pauses the program for roughly the given number of milliseconds while
    /// keeping the window responsive. This is not a timer.
    pub fn sleep(&mut self, ms: u64) {
        self.wait(Duration::from_millis(ms));
    }

    fn wait(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        let interval = self.config.poll_interval().max(Duration::from_millis(1));

        loop {
            self.pump();
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep(interval.min(deadline - now));
        }
    }

    /// Resizes the drawing area. The canvas starts over blank unless the size
    /// is unchanged.
    pub fn set_size(&mut self, width: u32, height: u32) -> Result<()> {
        if width == self.width() && height == self.height() {
            return Ok(());
        }

        let (window_width, window_height) = window_size(width, height);
        self.surface.resize(window_width, window_height)?;

        self.offscreen = blank(width, height, self.color);
        self.visible = self.offscreen.buffer().clone();
        self.clear_pending = false;
        self.config.width = width;
        self.config.height = height;
        info!(width, height, "resized drawing area");
        self.present()
    }

    /// Shows everything drawn since the last frame, then waits for the play
    /// or frame advance button before returning.
    ///
    /// Returns `FrameError::Closed` once the window has been closed.
    pub fn paint_frame(&mut self) -> Result<()> {
        if self.closed {
            return Err(FrameError::Closed);
        }

        self.visible.clone_from(self.offscreen.buffer());
        self.clear_pending = true;
        self.frames_painted += 1;
        self.record()?;
        self.present()?;
        debug!(frame = self.frames_painted, "painted frame");

        loop {
            self.pump();
            if self.closed {
                return Err(FrameError::Closed);
            }

            if self.transport.pass() {
                break;
            }
            thread::sleep(self.config.poll_interval());
        }

        // A single step drops the toolbar back to paused
        self.present()?;
        let delay = self.config.step_delay();
        self.wait(delay);
        Ok(())
    }

    fn record(&mut self) -> Result<()> {
        if let Some(stream) = self.stream.as_mut() {
            self.visible.write(stream)?;
            stream.flush()?;
        }

        if let Some(dir) = self.config.record_dir.as_ref() {
            fs::create_dir_all(dir)?;
            let path = dir.join(format!("frame_{:05}.ppm", self.frames_painted));
            let mut file = BufWriter::new(File::create(&path)?);
            self.visible.write(&mut file)?;
            file.flush()?;
        }

        Ok(())
    }

    /// Composes the toolbar and the visible frame and shows them
    fn present(&mut self) -> Result<()> {
        let (width, height) = window_size(self.visible.width(), self.visible.height());
        let mut pixels = vec![0u32; width * height];

        toolbar::render(self.visible.width(), &self.transport).blit_into(&mut pixels, width, height, 0, 0);
        self.visible
            .blit_into(&mut pixels, width, height, 0, TOOLBAR_HEIGHT as i64);

        self.surface.present(&pixels, width, height)
    }

    /// Handles whatever input the surface has collected
    fn pump(&mut self) {
        if self.closed {
            return;
        }

        let inputs = match self.surface.poll() {
            Ok(inputs) => inputs,
            Err(err) => {
                warn!(%err, "window stopped responding");
                self.closed = true;
                return;
            }
        };

        let before = self.transport;
        for input in inputs {
            match input {
                Input::Close => {
                    info!("window closed");
                    self.closed = true;
                    return;
                }
                Input::PlayPause => self.transport.toggle_play(),
                Input::Step => self.transport.frame_advance(),
                Input::Click { x, y } => match toolbar::hit(x, y) {
                    Some(Button::PlayPause) => self.transport.toggle_play(),
                    Some(Button::FrameAdvance) => self.transport.frame_advance(),
                    None => {}
                },
            }
        }

        if self.transport != before {
            debug!(
                playing = self.transport.is_playing(),
                stepping = self.transport.is_stepping(),
                "transport changed"
            );
            if let Err(err) = self.present() {
                warn!(%err, "failed to redraw toolbar");
            }
        }
    }
}
