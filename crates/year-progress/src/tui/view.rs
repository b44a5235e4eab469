use ratatui::Frame;
use year_progress_core::{BarRenderer, BarSpec, Canvas, LifespanConfig, ProgressSnapshot, Rgb};

use super::canvas::{BufferCanvas, centered};
use super::constants::{
    CANVAS_WIDTH, DAY_ROW, LEFT_COLUMN, LIFESPAN_ROW, MONTH_ROW, TITLE_ROW, YEAR_ROW,
};
use crate::config::LaunchConfig;

const LABEL_COLOR: Rgb = Rgb::WHITE;

/// One positioned item of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Row {
    Label(String),
    Bar(BarSpec),
}

/// Layout of the title, period labels and bars.
pub(super) struct Dashboard {
    renderer: BarRenderer,
    config: LaunchConfig,
}

impl Dashboard {
    pub(super) const fn new(renderer: BarRenderer, config: LaunchConfig) -> Self {
        Self { renderer, config }
    }

    pub(super) const fn lifespan(&self) -> Option<&LifespanConfig> {
        self.config.lifespan.as_ref()
    }

    pub(super) const fn size(&self) -> (u16, u16) {
        (CANVAS_WIDTH, self.config.canvas_rows())
    }

    pub(super) fn rows(&self, snap: &ProgressSnapshot) -> Vec<(u16, Row)> {
        let year = snap.at.year();
        let month = snap.at.month().to_string();
        let month_abbrev = month.get(..3).unwrap_or(&month);

        let mut rows = vec![
            (TITLE_ROW, Row::Label(format!("Year Progress: {year} Edition"))),
            (DAY_ROW, Row::Label("Today:".to_owned())),
            (DAY_ROW + 1, Row::Bar(BarSpec::from_progress(&snap.day))),
            (MONTH_ROW, Row::Label(format!("{month_abbrev}:"))),
            (MONTH_ROW + 1, Row::Bar(BarSpec::from_progress(&snap.month))),
            (YEAR_ROW, Row::Label(format!("{year}:"))),
            (YEAR_ROW + 1, Row::Bar(BarSpec::from_progress(&snap.year))),
        ];
        if let Some(lifespan) = &snap.lifespan {
            rows.push((LIFESPAN_ROW, Row::Label("Life:".to_owned())));
            rows.push((
                LIFESPAN_ROW + 1,
                Row::Bar(BarSpec::from_progress(lifespan).highlight(Rgb::LIFESPAN_HIGHLIGHT)),
            ));
        }
        rows
    }

    pub(super) fn paint<C: Canvas + ?Sized>(&self, snap: &ProgressSnapshot, canvas: &mut C) {
        canvas.clear();
        for (y, row) in self.rows(snap) {
            match row {
                Row::Label(text) => canvas.print(LEFT_COLUMN, y, &text, LABEL_COLOR),
                Row::Bar(spec) => self.renderer.draw(&spec, LEFT_COLUMN, y, canvas),
            }
        }
    }

    /// Uncolored rendering, one string per canvas row.
    pub(super) fn plain_lines(&self, snap: &ProgressSnapshot) -> Vec<String> {
        let (_, height) = self.size();
        let mut lines = vec![String::new(); usize::from(height)];
        for (y, row) in self.rows(snap) {
            if let Some(line) = lines.get_mut(usize::from(y)) {
                *line = match row {
                    Row::Label(text) => text,
                    Row::Bar(spec) => self.renderer.format_text(&spec),
                };
            }
        }
        lines
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>, snap: &ProgressSnapshot) {
        let (width, height) = self.size();
        let area = centered(f.area(), width, height);
        let mut canvas = BufferCanvas::new(f.buffer_mut(), area);
        self.paint(snap, &mut canvas);
    }
}
