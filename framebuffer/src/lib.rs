use font8x8::{UnicodeFonts, BASIC_FONTS};
use std::io;

/// Width and height of a single unscaled glyph
pub const GLYPH_SIZE: i64 = 8;

/// A simple RGB color with transparency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: u8,
}

impl Color {
    /// Creates a new color from R, G and B components
    pub fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color {
            r,
            g,
            b,
            alpha: 255,
        }
    }

    /// Creates a new color from R, G, B and transparency components
    pub fn rgba(r: u8, g: u8, b: u8, alpha: u8) -> Color {
        Color { r, g, b, alpha }
    }

    /// Creates an opaque color from a 0xRRGGBB value
    pub fn from_hex(hex: u32) -> Color {
        Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Packs the color as 0x00RRGGBB, dropping transparency
    pub fn to_rgb32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Creates a new color from alpha blending this color and the other color,
    /// ignoring this color's alpha if it is present. The output color's alpha
    /// is the same as this alpha.
    pub fn blend(&self, other: Color) -> Color {
        let base_blend = (255 - other.alpha) as u16;

        let (r, g, b) = {
            let blend = |a, b| ((a as u16 * base_blend) + (b as u16 * other.alpha as u16)) / 255;
            (
                blend(self.r, other.r) as u8,
                blend(self.g, other.g) as u8,
                blend(self.b, other.b) as u8,
            )
        };

        Color::rgba(r, g, b, self.alpha)
    }

    /// Returns a Color representing pure white
    pub fn white() -> Color {
        Color::rgb(255, 255, 255)
    }

    /// Returns a Color representing pure black
    pub fn black() -> Color {
        Color::rgb(0, 0, 0)
    }
}

pub trait GraphicBuffer<T: Copy> {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn put_point(&mut self, x: i64, y: i64, color: T);
    fn get_point(&self, x: i64, y: i64) -> Option<T>;
}

/// A graphical buffer containing pixel colors
#[derive(Clone)]
pub struct FrameBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Creates a new FrameBuffer with a black background
    pub fn new(width: u32, height: u32) -> FrameBuffer {
        FrameBuffer {
            pixels: vec![0; (width * height * 3) as usize],
            width,
            height,
        }
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || x >= self.width as i64 || y < 0 || y >= self.height as i64 {
            None
        } else {
            Some(((y * (self.width as i64) * 3) + (x * 3)) as usize)
        }
    }

    /// Dumps the framebuffer as a binary PPM image
    pub fn write(&self, output: &mut impl io::Write) -> io::Result<()> {
        let header = format!("P6\n{} {}\n255\n", self.width, self.height);
        output.write_all(header.as_bytes())?;
        output.write_all(&self.pixels)
    }

    /// Copies the framebuffer into a 0RGB pixel slice laid out with
    /// dest_width pixels per row, placing this buffer's origin at (x, y).
    /// Anything falling outside the destination is clipped.
    pub fn blit_into(&self, dest: &mut [u32], dest_width: usize, dest_height: usize, x: i64, y: i64) {
        for py in 0..self.height as i64 {
            let dy = y + py;
            if dy < 0 || dy >= dest_height as i64 {
                continue;
            }

            for px in 0..self.width as i64 {
                let dx = x + px;
                if dx < 0 || dx >= dest_width as i64 {
                    continue;
                }

                let offset = ((py * (self.width as i64) * 3) + (px * 3)) as usize;
                let rgb = Color::rgb(
                    self.pixels[offset],
                    self.pixels[offset + 1],
                    self.pixels[offset + 2],
                );
                dest[(dy as usize) * dest_width + (dx as usize)] = rgb.to_rgb32();
            }
        }
    }
}

impl GraphicBuffer<Color> for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_point(&self, x: i64, y: i64) -> Option<Color> {
        self.offset(x, y).map(|offset| {
            Color::rgb(
                self.pixels[offset],
                self.pixels[offset + 1],
                self.pixels[offset + 2],
            )
        })
    }

    fn put_point(&mut self, x: i64, y: i64, color: Color) {
        let offset = match self.offset(x, y) {
            None => return,
            Some(offset) => offset,
        };

        if color.alpha == 0 {
            return;
        } else if color.alpha == 255 {
            self.pixels[offset] = color.r;
            self.pixels[offset + 1] = color.g;
            self.pixels[offset + 2] = color.b;
        } else {
            let base = Color::rgb(
                self.pixels[offset],
                self.pixels[offset + 1],
                self.pixels[offset + 2],
            );
            let mixed = base.blend(color);
            self.pixels[offset] = mixed.r;
            self.pixels[offset + 1] = mixed.g;
            self.pixels[offset + 2] = mixed.b;
        }
    }
}

/*
Ref: http://members.chello.at/~easyfilter/Bresenham.pdf, p.13

Walks the pixels of the line between (x, y) and (x2, y2), both ends included,
picking whichever next pixel keeps the error term E closest to the line:

   0 = (py - y) * dx - (px - x) * dy

Stepping in x adds -dy to E, stepping in y adds dx, and a diagonal step adds
both. Callers clip the ends to the buffer first.
 */
fn trace_line<F: FnMut(i64, i64)>(x: i64, y: i64, x2: i64, y2: i64, mut plot: F) {
    let deltax = (x2 - x).abs();
    let stepx = (x2 - x).signum();

    let deltay = -(y2 - y).abs();
    let stepy = (y2 - y).signum();

    let mut error = deltax + deltay;

    let mut px = x;
    let mut py = y;
    loop {
        plot(px, py);

        let next_error = 2 * error;
        if next_error >= deltay {
            if px == x2 {
                break;
            }

            error += deltay;
            px += stepx;
        }

        if next_error <= deltax {
            if py == y2 {
                break;
            }

            error += deltax;
            py += stepy;
        }
    }
}

/*
Liang-Barsky: clips the segment to the box [0, right] x [0, bottom] by
narrowing the parameter range [t0, t1] against each edge in turn. Each clipped
end is measured from its own original end.
 */
fn clip_line(x: i64, y: i64, x2: i64, y2: i64, right: i64, bottom: i64) -> Option<(i64, i64, i64, i64)> {
    if right < 0 || bottom < 0 {
        return None;
    }

    let (fx, fy) = (x as f64, y as f64);
    let (fx2, fy2) = (x2 as f64, y2 as f64);
    let dx = fx2 - fx;
    let dy = fy2 - fy;

    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    let edges = [
        (-dx, fx),
        (dx, right as f64 - fx),
        (-dy, fy),
        (dy, bottom as f64 - fy),
    ];
    for &(p, q) in edges.iter() {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    let clamp = |v: f64, max: i64| (v.round() as i64).max(0).min(max);
    let (sx, sy) = if t0 > 0.0 {
        (clamp(fx + t0 * dx, right), clamp(fy + t0 * dy, bottom))
    } else {
        (x, y)
    };
    let (ex, ey) = if t1 < 1.0 {
        (clamp(fx2 - (1.0 - t1) * dx, right), clamp(fy2 - (1.0 - t1) * dy, bottom))
    } else {
        (x2, y2)
    };
    Some((sx, sy, ex, ey))
}

/// Visible part of the span start..start + len along an axis of the given size
fn clip_span(start: i64, len: i64, size: u32) -> std::ops::Range<i64> {
    let lo = start.max(0);
    let hi = start.saturating_add(len).min(size as i64);
    lo..hi.max(lo)
}

/*
Midpoint circle around the origin, assuming we're in the second quadrant where
the curve's slope is positive:

- px + 1, py + 1 ~> E' = 2*px + 2*py + 2 + E
- px + 1, py     ~> E' = 2*px + 1 + E
- px, py + 1     ~> E' = 2*py + 1 + E

The starting error is for (-r, 0):

E_1 = (-r + 1)^2 + 1^2 - r^2 ~> -2r + 2

The callback receives each (relx, rely) offset once per step, with relx <= 0
and rely >= 0; callers mirror it into the other quadrants.
 */
fn trace_circle<F: FnMut(i64, i64)>(r: i64, mut visit: F) {
    let mut error = -2 * r + 2;

    let mut relx = -r;
    let mut rely = 0;

    while relx <= 0 {
        let next_error = 2 * error;
        let advance_y = next_error <= 2 * rely + 1;
        visit(relx, rely);

        if next_error >= 2 * relx + 1 {
            relx += 1;
            error += 2 * relx + 1;
        }

        if advance_y {
            rely += 1;
            error += 2 * rely + 1;
        }
    }
}

/// Performs drawing operations on an underlying graphical buffer
pub struct Canvas<Element: Copy, Buffer: GraphicBuffer<Element>> {
    buffer: Buffer,
    fill: Element,
    stroke: Element,
}

impl<Element: Copy, Buffer: GraphicBuffer<Element>> Canvas<Element, Buffer> {
    /// Initializes a canvas on top of the given buffer with the given fill and
    /// stroke colors
    pub fn new(buffer: Buffer, fill: Element, stroke: Element) -> Canvas<Element, Buffer> {
        Canvas {
            buffer,
            fill,
            stroke,
        }
    }

    /// Gets the underlying buffer for the canvas
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Consumes the canvas, returning its buffer
    pub fn into_buffer(self) -> Buffer {
        self.buffer
    }

    /// Gets the width of the underlying buffer
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Gets the height of the underlying buffer
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Gets the given point from the underlying canvas
    pub fn get_point(&self, x: i64, y: i64) -> Option<Element> {
        self.buffer.get_point(x, y)
    }

    /// Puts the given point from the underlying canvas
    pub fn put_point(&mut self, x: i64, y: i64, color: Element) {
        self.buffer.put_point(x, y, color)
    }

    /// Sets the current fill color
    pub fn set_fill(&mut self, fill: Element) {
        self.fill = fill;
    }

    /// Sets the current stroke color
    pub fn set_stroke(&mut self, stroke: Element) {
        self.stroke = stroke;
    }

    /// Draws a single pixel at the given point using the current fill
    pub fn fill_point(&mut self, x: i64, y: i64) {
        self.buffer.put_point(x, y, self.fill);
    }

    /// Fills the entire buffer using the currently assigned fill value
    pub fn fill(&mut self) {
        for y in 0..self.buffer.height() {
            for x in 0..self.buffer.width() {
                self.fill_point(x as i64, y as i64);
            }
        }
    }

    /// Sets every visible pixel of the region to the given value
    fn paint_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Element) {
        let cols = clip_span(x, width, self.buffer.width());
        for py in clip_span(y, height, self.buffer.height()) {
            for px in cols.clone() {
                self.buffer.put_point(px, py, color);
            }
        }
    }

    /// Fills the given region of the framebuffer with the current fill color
    pub fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64) {
        self.paint_rect(x, y, width, height, self.fill);
    }

    /// Draws a border around the given region of the framebuffer with the
    /// current stroke color
    pub fn stroke_rect(&mut self, x: i64, y: i64, width: i64, height: i64) {
        if width <= 0 || height <= 0 {
            return;
        }

        let stroke = self.stroke;
        let right = x.saturating_add(width - 1);
        let bottom = y.saturating_add(height - 1);
        self.paint_rect(x, y, width, 1, stroke);
        if height > 1 {
            self.paint_rect(x, bottom, width, 1, stroke);
        }
        self.paint_rect(x, y.saturating_add(1), 1, height - 2, stroke);
        if width > 1 {
            self.paint_rect(right, y.saturating_add(1), 1, height - 2, stroke);
        }
    }

    /// Traces the visible part of a line with the given value
    fn paint_line(&mut self, x: i64, y: i64, x2: i64, y2: i64, color: Element) {
        let right = self.buffer.width() as i64 - 1;
        let bottom = self.buffer.height() as i64 - 1;
        if let Some((x, y, x2, y2)) = clip_line(x, y, x2, y2, right, bottom) {
            let buffer = &mut self.buffer;
            trace_line(x, y, x2, y2, |px, py| buffer.put_point(px, py, color));
        }
    }

    /// Draws a straight line between the two points using the current stroke
    /// color
    pub fn stroke_line(&mut self, x: i64, y: i64, x2: i64, y2: i64) {
        self.paint_line(x, y, x2, y2, self.stroke);
    }

    /// Draws a straight line between the two points using the current fill
    /// color
    pub fn fill_line(&mut self, x: i64, y: i64, x2: i64, y2: i64) {
        self.paint_line(x, y, x2, y2, self.fill);
    }

    /// Draws a circle's perimeter around the given point using the current
    /// stroke color
    pub fn stroke_circle(&mut self, x: i64, y: i64, r: i64) {
        if r < 0 {
            return;
        }

        let stroke = self.stroke;
        let buffer = &mut self.buffer;
        trace_circle(r, |relx, rely| {
            buffer.put_point(x + relx, y + rely, stroke); // Quadrant II
            buffer.put_point(x - relx, y + rely, stroke); // Quadrant I
            buffer.put_point(x + relx, y - rely, stroke); // Quadrant IV
            buffer.put_point(x - relx, y - rely, stroke); // Quadrant III
        });
    }

    /// Fills a circle around the given point
    pub fn fill_circle(&mut self, x: i64, y: i64, r: i64) {
        if r < 0 {
            return;
        }

        // relx only grows during the walk, so the first offset seen on each
        // row is its widest
        let mut rows: Vec<(i64, i64)> = Vec::new();
        trace_circle(r, |relx, rely| {
            if rows.last().map_or(true, |&(_, last)| last != rely) {
                rows.push((relx, rely));
            }
        });

        for (relx, rely) in rows {
            self.fill_line(x + relx, y + rely, x - relx, y + rely);
            self.fill_line(x + relx, y - rely, x - relx, y - rely);
        }
    }

    /// Fills the triangle between three points with the current fill color
    pub fn fill_triangle(&mut self, a: (i64, i64), b: (i64, i64), c: (i64, i64)) {
        let edge = |p: (i64, i64), q: (i64, i64), x: i64, y: i64| {
            (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
        };

        let area = edge(a, b, c.0, c.1);
        if area == 0 {
            self.fill_line(a.0, a.1, b.0, b.1);
            self.fill_line(b.0, b.1, c.0, c.1);
            return;
        }

        let left = a.0.min(b.0).min(c.0).max(0);
        let right = a.0.max(b.0).max(c.0).min(self.buffer.width() as i64 - 1);
        let top = a.1.min(b.1).min(c.1).max(0);
        let bottom = a.1.max(b.1).max(c.1).min(self.buffer.height() as i64 - 1);

        for py in top..=bottom {
            for px in left..=right {
                let w0 = edge(b, c, px, py);
                let w1 = edge(c, a, px, py);
                let w2 = edge(a, b, px, py);

                let inside = if area > 0 {
                    w0 >= 0 && w1 >= 0 && w2 >= 0
                } else {
                    w0 <= 0 && w1 <= 0 && w2 <= 0
                };

                if inside {
                    self.fill_point(px, py);
                }
            }
        }
    }

    /// Draws text in the current fill color using 8x8 bitmap glyphs, each
    /// pixel scaled to a scale x scale block. The baseline sits under the
    /// seventh glyph row, so descenders hang below it.
    pub fn fill_text(&mut self, x: i64, baseline: i64, scale: i64, text: &str) {
        let scale = scale.max(1);
        let glyph_span = GLYPH_SIZE.saturating_mul(scale);
        let top = baseline.saturating_sub((GLYPH_SIZE - 1).saturating_mul(scale));
        if top >= self.buffer.height() as i64 || top.saturating_add(glyph_span) <= 0 {
            return;
        }

        let mut cursor = x;
        for ch in text.chars() {
            if cursor >= self.buffer.width() as i64 {
                break;
            }

            let next = cursor.saturating_add(glyph_span);
            let glyph = match BASIC_FONTS.get(ch) {
                Some(glyph) if next > 0 => glyph,
                _ => {
                    cursor = next;
                    continue;
                }
            };

            for (row, bits) in glyph.iter().enumerate() {
                // Bit 0 is the leftmost pixel
                for col in 0..GLYPH_SIZE {
                    if (*bits >> col) & 1 == 0 {
                        continue;
                    }

                    let px = cursor.saturating_add(col.saturating_mul(scale));
                    let py = top.saturating_add((row as i64).saturating_mul(scale));
                    self.fill_rect(px, py, scale, scale);
                }
            }

            cursor = next;
        }
    }

    /// Copies another buffer into the given rectangle, scaling it with
    /// nearest-neighbour sampling
    pub fn blit_scaled<Source: GraphicBuffer<Element>>(
        &mut self,
        source: &Source,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) {
        let src_width = source.width() as i64;
        let src_height = source.height() as i64;
        if width <= 0 || height <= 0 || src_width == 0 || src_height == 0 {
            return;
        }

        // Only walk the destination pixels that land inside this buffer
        let rows = clip_span(y, height, self.buffer.height());
        let cols = clip_span(x, width, self.buffer.width());
        for py in rows {
            let dy = py as i128 - y as i128;
            let sy = (dy * src_height as i128 / height as i128) as i64;
            for px in cols.clone() {
                let dx = px as i128 - x as i128;
                let sx = (dx * src_width as i128 / width as i128) as i64;
                if let Some(color) = source.get_point(sx, sy) {
                    self.buffer.put_point(px, py, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32) -> Canvas<Color, FrameBuffer> {
        let mut gfx = Canvas::new(FrameBuffer::new(width, height), Color::white(), Color::black());
        gfx.fill();
        gfx
    }

    fn count(gfx: &Canvas<Color, FrameBuffer>, color: Color) -> usize {
        let mut total = 0;
        for y in 0..gfx.height() as i64 {
            for x in 0..gfx.width() as i64 {
                if gfx.get_point(x, y) == Some(color) {
                    total += 1;
                }
            }
        }
        total
    }

    #[test]
    fn hex_colors_pack_back_to_the_same_value() {
        let color = Color::from_hex(0x12_34_56);
        assert_eq!(color, Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(color.to_rgb32(), 0x12_34_56);
    }

    #[test]
    fn translucent_points_blend_with_the_background() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.put_point(0, 0, Color::white());
        fb.put_point(0, 0, Color::rgba(0, 0, 0, 0));
        assert_eq!(fb.get_point(0, 0), Some(Color::white()));

        fb.put_point(0, 0, Color::rgba(0, 0, 0, 128));
        assert_eq!(fb.get_point(0, 0), Some(Color::rgb(127, 127, 127)));
    }

    #[test]
    fn points_outside_the_buffer_are_ignored() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_point(-1, 0, Color::white());
        fb.put_point(4, 0, Color::white());
        fb.put_point(0, 2, Color::white());
        assert_eq!(fb.get_point(0, 2), None);
        assert_eq!(fb.get_point(3, 1), Some(Color::black()));
    }

    #[test]
    fn ppm_output_has_header_and_pixels() {
        let fb = FrameBuffer::new(3, 2);
        let mut out = Vec::new();
        fb.write(&mut out).unwrap();

        let header = b"P6\n3 2\n255\n";
        assert!(out.starts_with(header));
        assert_eq!(out.len(), header.len() + 3 * 2 * 3);
    }

    #[test]
    fn blit_clips_to_the_destination() {
        let mut gfx = canvas(2, 2);
        gfx.put_point(1, 1, Color::rgb(255, 0, 0));

        let mut dest = vec![0u32; 3 * 3];
        gfx.buffer().blit_into(&mut dest, 3, 3, 2, 2);
        assert_eq!(dest[2 * 3 + 2], 0xff_ff_ff);
        assert_eq!(dest.iter().filter(|p| **p != 0).count(), 1);

        gfx.buffer().blit_into(&mut dest, 3, 3, 1, 0);
        assert_eq!(dest[3 + 2], 0xff_00_00);
    }

    #[test]
    fn lines_include_both_endpoints_in_any_direction() {
        let mut gfx = canvas(10, 10);
        gfx.stroke_line(8, 2, 1, 2);
        assert_eq!(count(&gfx, Color::black()), 8);
        assert_eq!(gfx.get_point(1, 2), Some(Color::black()));
        assert_eq!(gfx.get_point(8, 2), Some(Color::black()));

        let mut gfx = canvas(10, 10);
        gfx.stroke_line(0, 0, 5, 5);
        for i in 0..=5 {
            assert_eq!(gfx.get_point(i, i), Some(Color::black()));
        }
        assert_eq!(count(&gfx, Color::black()), 6);
    }

    #[test]
    fn stroked_rectangles_only_touch_the_border() {
        let mut gfx = canvas(10, 10);
        gfx.stroke_rect(1, 1, 4, 3);
        assert_eq!(count(&gfx, Color::black()), 10);
        assert_eq!(gfx.get_point(2, 2), Some(Color::white()));
        assert_eq!(gfx.get_point(4, 3), Some(Color::black()));

        gfx.stroke_rect(0, 0, 0, 5);
        assert_eq!(count(&gfx, Color::black()), 10);
    }

    #[test]
    fn filled_rectangles_cover_their_area() {
        let mut gfx = canvas(10, 10);
        gfx.set_fill(Color::black());
        gfx.fill_rect(2, 3, 4, 2);
        assert_eq!(count(&gfx, Color::black()), 8);

        gfx.fill_rect(0, 0, -3, 4);
        assert_eq!(count(&gfx, Color::black()), 8);
    }

    #[test]
    fn circles_are_symmetric_around_their_center() {
        let mut gfx = canvas(21, 21);
        gfx.stroke_circle(10, 10, 6);

        assert_eq!(gfx.get_point(4, 10), Some(Color::black()));
        assert_eq!(gfx.get_point(16, 10), Some(Color::black()));
        assert_eq!(gfx.get_point(10, 4), Some(Color::black()));
        assert_eq!(gfx.get_point(10, 16), Some(Color::black()));
        assert_eq!(gfx.get_point(10, 10), Some(Color::white()));

        for y in 0..21 {
            for x in 0..21 {
                assert_eq!(gfx.get_point(x, y), gfx.get_point(20 - x, y));
                assert_eq!(gfx.get_point(x, y), gfx.get_point(x, 20 - y));
            }
        }
    }

    #[test]
    fn negative_circles_draw_nothing() {
        let mut gfx = canvas(10, 10);
        gfx.stroke_circle(5, 5, -3);
        gfx.set_fill(Color::black());
        gfx.fill_circle(5, 5, -3);
        assert_eq!(count(&gfx, Color::black()), 0);

        gfx.fill_circle(5, 5, 0);
        assert_eq!(count(&gfx, Color::black()), 1);
        assert_eq!(gfx.get_point(5, 5), Some(Color::black()));
    }

    #[test]
    fn filled_circles_have_no_holes() {
        let mut gfx = canvas(21, 21);
        gfx.set_fill(Color::black());
        gfx.fill_circle(10, 10, 6);

        for y in 5..=15 {
            for x in 5..=15 {
                let inside = (x - 10i64).pow(2) + (y - 10i64).pow(2) <= 25;
                if inside {
                    assert_eq!(gfx.get_point(x, y), Some(Color::black()), "({}, {})", x, y);
                }
            }
        }
        assert_eq!(gfx.get_point(0, 0), Some(Color::white()));
    }

    #[test]
    fn triangles_fill_regardless_of_winding() {
        let mut gfx = canvas(20, 20);
        gfx.set_fill(Color::black());
        gfx.fill_triangle((2, 2), (18, 10), (2, 18));
        let clockwise = count(&gfx, Color::black());
        assert!(gfx.get_point(5, 10) == Some(Color::black()));
        assert!(gfx.get_point(17, 3) == Some(Color::white()));

        let mut gfx = canvas(20, 20);
        gfx.set_fill(Color::black());
        gfx.fill_triangle((2, 2), (2, 18), (18, 10));
        assert_eq!(count(&gfx, Color::black()), clockwise);
    }

    #[test]
    fn text_sits_on_the_baseline_and_advances() {
        let mut gfx = canvas(40, 20);
        gfx.set_fill(Color::black());
        gfx.fill_text(0, 10, 1, "I");

        let mut rows = Vec::new();
        for y in 0..20 {
            if (0..8).any(|x| gfx.get_point(x, y) == Some(Color::black())) {
                rows.push(y);
            }
        }
        assert!(!rows.is_empty());
        assert!(*rows.first().unwrap() >= 3);
        assert!(*rows.last().unwrap() <= 10);

        let before = count(&gfx, Color::black());
        gfx.fill_text(0, 10, 1, " ");
        assert_eq!(count(&gfx, Color::black()), before);

        let mut gfx2 = canvas(40, 20);
        gfx2.set_fill(Color::black());
        gfx2.fill_text(0, 10, 1, " I");
        assert_eq!(count(&gfx2, Color::black()), before);
        assert!((0..8).all(|x| (0..20).all(|y| gfx2.get_point(x, y) == Some(Color::white()))));
    }

    #[test]
    fn scaled_text_covers_blocks() {
        let mut small = canvas(64, 32);
        small.set_fill(Color::black());
        small.fill_text(0, 20, 1, "A");

        let mut large = canvas(64, 32);
        large.set_fill(Color::black());
        large.fill_text(0, 20, 2, "A");

        assert_eq!(count(&large, Color::black()), 4 * count(&small, Color::black()));
    }

    #[test]
    fn blits_scale_with_nearest_neighbour() {
        let mut src = FrameBuffer::new(2, 1);
        src.put_point(0, 0, Color::rgb(255, 0, 0));
        src.put_point(1, 0, Color::rgb(0, 0, 255));

        let mut gfx = canvas(8, 8);
        gfx.blit_scaled(&src, 0, 0, 4, 2);

        assert_eq!(gfx.get_point(0, 0), Some(Color::rgb(255, 0, 0)));
        assert_eq!(gfx.get_point(1, 1), Some(Color::rgb(255, 0, 0)));
        assert_eq!(gfx.get_point(2, 0), Some(Color::rgb(0, 0, 255)));
        assert_eq!(gfx.get_point(3, 1), Some(Color::rgb(0, 0, 255)));
        assert_eq!(gfx.get_point(4, 0), Some(Color::white()));
        assert_eq!(gfx.get_point(0, 2), Some(Color::white()));
    }

    #[test]
    fn oversized_rectangles_cover_only_the_buffer() {
        let mut gfx = canvas(50, 40);
        gfx.set_fill(Color::black());
        gfx.fill_rect(-1_000_000_000, -1_000_000_000, 2_000_000_000, 2_000_000_000);
        assert_eq!(count(&gfx, Color::black()), 50 * 40);

        let mut gfx = canvas(50, 40);
        gfx.stroke_rect(-10, 5, i64::MAX, 20);
        assert_eq!(gfx.get_point(0, 5), Some(Color::black()));
        assert_eq!(gfx.get_point(49, 24), Some(Color::black()));
        assert_eq!(gfx.get_point(10, 10), Some(Color::white()));
        assert_eq!(count(&gfx, Color::black()), 2 * 50);
    }

    #[test]
    fn lines_far_outside_the_buffer_are_clipped() {
        let mut gfx = canvas(50, 40);
        gfx.stroke_line(0, 20, 200_000_000, 20);
        assert_eq!(count(&gfx, Color::black()), 50);
        assert!((0..50).all(|x| gfx.get_point(x, 20) == Some(Color::black())));

        let mut gfx = canvas(50, 40);
        gfx.stroke_line(-1_000_000, -1_000_000, 1_000_000, 1_000_000);
        for i in 0..40 {
            assert_eq!(gfx.get_point(i, i), Some(Color::black()), "({}, {})", i, i);
        }
        assert_eq!(count(&gfx, Color::black()), 40);

        let mut gfx = canvas(50, 40);
        gfx.stroke_line(i64::MIN, 0, i64::MAX, 0);
        assert_eq!(gfx.get_point(0, 0), Some(Color::black()));
        gfx.stroke_line(-100, -5, 100, -5);
        assert!((0..40).all(|y| gfx.get_point(49, y) == Some(Color::white())));
    }

    #[test]
    fn huge_text_and_blits_stay_within_the_buffer() {
        let mut gfx = canvas(50, 40);
        gfx.set_fill(Color::black());
        gfx.fill_text(0, 20, i64::MAX, "A");
        gfx.fill_text(i64::MIN, i64::MAX, 40_000, "AB");
        gfx.fill_text(0, 20, 5_000, "");

        let mut src = FrameBuffer::new(2, 2);
        src.put_point(0, 0, Color::rgb(255, 0, 0));
        let mut gfx = canvas(50, 40);
        gfx.blit_scaled(&src, -1_000_000_000, -1_000_000_000, 4_000_000_000, 4_000_000_000);
        // The visible corner samples only the red source pixel
        assert_eq!(count(&gfx, Color::rgb(255, 0, 0)), 50 * 40);
    }
}
