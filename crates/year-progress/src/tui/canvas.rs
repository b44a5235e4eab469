use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use year_progress_core::{Canvas, Rgb};

/// Canvas writing into a region of a ratatui buffer.
///
/// Coordinates are relative to `area`; anything outside it is clipped.
pub(super) struct BufferCanvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferCanvas<'a> {
    pub(super) fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buf.area);
        Self { buf, area }
    }
}

impl Canvas for BufferCanvas<'_> {
    fn clear(&mut self) {
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.reset();
                }
            }
        }
    }

    fn print(&mut self, x: u16, y: u16, text: &str, color: Rgb) {
        if x >= self.area.width || y >= self.area.height {
            return;
        }
        let max_width = usize::from(self.area.width - x);
        self.buf.set_stringn(
            self.area.x + x,
            self.area.y + y,
            text,
            max_width,
            Style::default().fg(to_color(color)),
        );
    }
}

pub(super) const fn to_color(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::Rgb(r, g, b)
}

/// Center a `width` x `height` region inside `area`, shrinking it to fit.
pub(super) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
