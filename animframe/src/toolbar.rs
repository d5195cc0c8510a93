use crate::transport::Transport;
use framebuffer::{Canvas, Color, FrameBuffer};

/// Height of the strip above the drawing area
pub const TOOLBAR_HEIGHT: u32 = 28;

const BUTTON_SIZE: i64 = 24;
const BUTTON_GAP: i64 = 2;
const ICON_INSET: i64 = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Button {
    PlayPause,
    FrameAdvance,
}

impl Button {
    fn left(self) -> i64 {
        match self {
            Button::PlayPause => BUTTON_GAP,
            Button::FrameAdvance => BUTTON_GAP * 2 + BUTTON_SIZE,
        }
    }

    fn top(self) -> i64 {
        (TOOLBAR_HEIGHT as i64 - BUTTON_SIZE) / 2
    }

    fn contains(self, x: i64, y: i64) -> bool {
        x >= self.left()
            && x < self.left() + BUTTON_SIZE
            && y >= self.top()
            && y < self.top() + BUTTON_SIZE
    }
}

/// Finds the button under a point in window coordinates
pub fn hit(x: i64, y: i64) -> Option<Button> {
    [Button::PlayPause, Button::FrameAdvance]
        .iter()
        .copied()
        .find(|button| button.contains(x, y))
}

/// Draws the toolbar for the given playback state
pub fn render(width: u32, transport: &Transport) -> FrameBuffer {
    let face = Color::rgb(238, 238, 238);
    let edge = Color::rgb(184, 184, 184);
    let icon = Color::rgb(0, 0, 255);
    let disabled = Color::rgb(160, 160, 160);

    let buffer = FrameBuffer::new(width, TOOLBAR_HEIGHT);
    let mut gfx = Canvas::new(buffer, face, edge);
    gfx.fill();
    gfx.stroke_line(0, TOOLBAR_HEIGHT as i64 - 1, width as i64 - 1, TOOLBAR_HEIGHT as i64 - 1);

    let play = Button::PlayPause;
    gfx.stroke_rect(play.left(), play.top(), BUTTON_SIZE, BUTTON_SIZE);
    gfx.set_fill(icon);
    let (x, y) = (play.left() + ICON_INSET, play.top() + ICON_INSET);
    if transport.is_playing() {
        gfx.fill_rect(x + 3, y + 2, 6, 16);
        gfx.fill_rect(x + 11, y + 2, 6, 16);
    } else {
        gfx.fill_triangle((x + 2, y + 2), (x + 18, y + 10), (x + 2, y + 18));
    }

    let advance = Button::FrameAdvance;
    gfx.stroke_rect(advance.left(), advance.top(), BUTTON_SIZE, BUTTON_SIZE);
    gfx.set_fill(if transport.can_advance() { icon } else { disabled });
    let (x, y) = (advance.left() + ICON_INSET, advance.top() + ICON_INSET);
    gfx.fill_triangle((x + 8, y + 2), (x + 18, y + 10), (x + 8, y + 18));
    gfx.fill_rect(x + 2, y + 2, 4, 16);

    gfx.into_buffer()
}
