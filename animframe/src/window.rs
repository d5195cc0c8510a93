use crate::error::Result;
use crate::surface::{Input, Surface};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use tracing::debug;

/// A fixed-size desktop window backed by minifb
pub struct WindowSurface {
    window: Window,
    title: String,
    pixels: Vec<u32>,
    width: usize,
    height: usize,
    mouse_down: bool,
}

fn open(title: &str, width: usize, height: usize) -> Result<Window> {
    let options = WindowOptions {
        resize: false,
        ..WindowOptions::default()
    };
    Ok(Window::new(title, width, height, options)?)
}

impl WindowSurface {
    pub fn new(title: &str, width: usize, height: usize) -> Result<WindowSurface> {
        let window = open(title, width, height)?;
        debug!(width, height, "opened window");
        Ok(WindowSurface {
            window,
            title: title.to_string(),
            pixels: vec![0; width * height],
            width,
            height,
            mouse_down: false,
        })
    }
}

impl Surface for WindowSurface {
    fn present(&mut self, pixels: &[u32], width: usize, height: usize) -> Result<()> {
        self.pixels.clear();
        self.pixels.extend_from_slice(pixels);
        self.width = width;
        self.height = height;
        self.window.update_with_buffer(&self.pixels, width, height)?;
        Ok(())
    }

    fn poll(&mut self) -> Result<Vec<Input>> {
        let mut inputs = Vec::new();
        if !self.window.is_open() {
            inputs.push(Input::Close);
            return Ok(inputs);
        }

        // minifb only processes events when the window is updated
        self.window
            .update_with_buffer(&self.pixels, self.width, self.height)?;
        if !self.window.is_open() {
            inputs.push(Input::Close);
            return Ok(inputs);
        }

        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            match key {
                Key::Space => inputs.push(Input::PlayPause),
                Key::Right => inputs.push(Input::Step),
                _ => {}
            }
        }

        let down = self.window.get_mouse_down(MouseButton::Left);
        if down && !self.mouse_down {
            if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Discard) {
                inputs.push(Input::Click {
                    x: x as i64,
                    y: y as i64,
                });
            }
        }
        self.mouse_down = down;

        Ok(inputs)
    }

    fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        if width == self.width && height == self.height {
            return Ok(());
        }

        // The window is not user-resizable, so a new size means a new window
        self.window = open(&self.title, width, height)?;
        self.pixels = vec![0; width * height];
        self.width = width;
        self.height = height;
        debug!(width, height, "reopened window");
        Ok(())
    }
}
