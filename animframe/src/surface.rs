use crate::error::Result;

/// Input gathered from a surface since the last poll
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// Left mouse press, in window coordinates
    Click { x: i64, y: i64 },
    /// Keyboard shortcut for the play/pause button
    PlayPause,
    /// Keyboard shortcut for the frame advance button
    Step,
    Close,
}

/// Somewhere to show frames: a desktop window, or nothing at all
pub trait Surface {
    /// Shows a 0RGB pixel buffer of the given size
    fn present(&mut self, pixels: &[u32], width: usize, height: usize) -> Result<()>;

    /// Processes pending events and returns the input they produced
    fn poll(&mut self) -> Result<Vec<Input>>;

    /// Changes the size of the visible area
    fn resize(&mut self, width: usize, height: usize) -> Result<()>;
}

/// A surface with no window. Frames go nowhere and no input ever arrives, so
/// it is only useful with autoplay.
#[derive(Debug, Default)]
pub struct Headless;

impl Headless {
    pub fn new() -> Headless {
        Headless
    }
}

impl Surface for Headless {
    fn present(&mut self, _pixels: &[u32], _width: usize, _height: usize) -> Result<()> {
        Ok(())
    }

    fn poll(&mut self) -> Result<Vec<Input>> {
        Ok(Vec::new())
    }

    fn resize(&mut self, _width: usize, _height: usize) -> Result<()> {
        Ok(())
    }
}
