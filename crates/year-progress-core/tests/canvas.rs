#![allow(missing_docs)]

use year_progress_core::{BarRenderer, BarSpec, Canvas, Rgb};

/// Fixed grid recording the last character and color written to each cell.
struct GridCanvas {
    width: usize,
    cells: Vec<Vec<(char, Option<Rgb>)>>,
}

impl GridCanvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            cells: vec![vec![(' ', None); width]; height],
        }
    }

    fn row(&self, y: usize) -> String {
        self.cells[y].iter().map(|(ch, _)| *ch).collect::<String>().trim_end().to_owned()
    }

    fn color_at(&self, x: usize, y: usize) -> Option<Rgb> {
        self.cells[y][x].1
    }
}

impl Canvas for GridCanvas {
    fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill((' ', None));
        }
    }

    fn print(&mut self, x: u16, y: u16, text: &str, color: Rgb) {
        let Some(row) = self.cells.get_mut(usize::from(y)) else {
            return;
        };
        for (offset, ch) in text.chars().enumerate() {
            let col = usize::from(x) + offset;
            if col >= self.width {
                break;
            }
            row[col] = (ch, Some(color));
        }
    }
}

#[test]
fn foreground_overwrites_leading_ticks_inside_bracket() {
    let mut canvas = GridCanvas::new(40, 2);
    let spec = BarSpec::new(30).with_count(3, 10);
    BarRenderer::default().draw(&spec, 0, 1, &mut canvas);

    assert_eq!(
        canvas.row(1),
        "[\u{2593}\u{2593}\u{2593}\u{2593}\u{2593}\u{2593}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}] 30% (3/10)"
    );
    assert_eq!(canvas.color_at(0, 1), Some(Rgb::WHITE));
    assert_eq!(canvas.color_at(1, 1), Some(Rgb::GREEN));
    assert_eq!(canvas.color_at(6, 1), Some(Rgb::GREEN));
    assert_eq!(canvas.color_at(7, 1), Some(Rgb::WHITE));
    assert_eq!(canvas.color_at(22, 1), Some(Rgb::WHITE));
}

#[test]
fn drawn_row_matches_plain_text() {
    let renderer = BarRenderer::default();
    let spec = BarSpec::new(85).highlight(Rgb::LIFESPAN_HIGHLIGHT);
    let mut canvas = GridCanvas::new(40, 1);
    renderer.draw(&spec, 0, 0, &mut canvas);

    assert_eq!(canvas.row(0), renderer.format_text(&spec));
    assert_eq!(canvas.color_at(17, 0), Some(Rgb::LIFESPAN_HIGHLIGHT));
    assert_eq!(canvas.color_at(18, 0), Some(Rgb::WHITE));
}

#[test]
fn empty_bar_leaves_track_untouched() {
    let mut canvas = GridCanvas::new(40, 1);
    BarRenderer::default().draw(&BarSpec::new(0), 0, 0, &mut canvas);
    assert_eq!(canvas.color_at(1, 0), Some(Rgb::WHITE));

    canvas.clear();
    assert_eq!(canvas.row(0), "");
}
