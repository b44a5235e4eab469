use crate::error::{ProgressError, Result};
use crate::progress::PeriodProgress;

/// Default share of the bar represented by one tick.
pub const DEFAULT_PERCENT_PER_TICK: u8 = 5;

/// 24-bit color of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Filled ticks.
    pub const GREEN: Self = Self(0, 255, 0);
    /// Frame, unfilled ticks and annotations.
    pub const WHITE: Self = Self(255, 255, 255);
    /// Filled ticks of the lifespan bar.
    pub const LIFESPAN_HIGHLIGHT: Self = Self(255, 0, 0);
}

/// Tick characters and their colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGlyphs {
    /// Glyph for completed ticks.
    pub filled: char,
    /// Glyph for remaining ticks.
    pub unfilled: char,
    /// Color of completed ticks.
    pub filled_color: Rgb,
    /// Color of the frame, remaining ticks and suffix.
    pub unfilled_color: Rgb,
}

impl Default for BarGlyphs {
    fn default() -> Self {
        Self {
            filled: '\u{2593}',
            unfilled: '\u{2591}',
            filled_color: Rgb::GREEN,
            unfilled_color: Rgb::WHITE,
        }
    }
}

/// What to draw for a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSpec {
    percent: u8,
    percent_per_tick: u8,
    show_percent: bool,
    show_count: bool,
    current: u32,
    max: u32,
    highlight: Option<Rgb>,
}

impl BarSpec {
    /// Bar for `percent` with the percentage suffix and no count.
    #[must_use]
    pub const fn new(percent: u8) -> Self {
        Self {
            percent,
            percent_per_tick: DEFAULT_PERCENT_PER_TICK,
            show_percent: true,
            show_count: false,
            current: 0,
            max: 0,
            highlight: None,
        }
    }

    /// Bar for a computed period, with its `(current/max)` count shown.
    #[must_use]
    pub const fn from_progress(progress: &PeriodProgress) -> Self {
        Self {
            show_count: true,
            current: progress.current(),
            max: progress.max(),
            ..Self::new(progress.percent())
        }
    }

    /// Change the share of the bar each tick represents.
    ///
    /// Widths that do not divide 100 drop the remainder, yielding a shorter bar.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::InvalidTickWidth`] for 0 or anything over 100.
    pub fn percent_per_tick(mut self, percent_per_tick: u8) -> Result<Self> {
        if percent_per_tick == 0 || percent_per_tick > 100 {
            return Err(ProgressError::InvalidTickWidth(percent_per_tick));
        }
        self.percent_per_tick = percent_per_tick;
        Ok(self)
    }

    /// Toggle the ` N%` suffix.
    #[must_use]
    pub const fn show_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    /// Show ` (current/max)` after the bar.
    #[must_use]
    pub const fn with_count(mut self, current: u32, max: u32) -> Self {
        self.show_count = true;
        self.current = current;
        self.max = max;
        self
    }

    /// Hide the count suffix.
    #[must_use]
    pub const fn without_count(mut self) -> Self {
        self.show_count = false;
        self
    }

    /// Draw filled ticks in `color` instead of the glyph set's filled color.
    #[must_use]
    pub const fn highlight(mut self, color: Rgb) -> Self {
        self.highlight = Some(color);
        self
    }

    /// Percentage the bar represents.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// Number of ticks in a full bar.
    #[must_use]
    pub fn max_ticks(&self) -> usize {
        usize::from(100 / self.percent_per_tick)
    }

    /// Number of ticks drawn as filled.
    #[must_use]
    pub fn filled_ticks(&self) -> usize {
        usize::from(self.clamped_percent() / self.percent_per_tick)
    }

    /// Number of ticks drawn as unfilled.
    #[must_use]
    pub fn unfilled_ticks(&self) -> usize {
        self.max_ticks().saturating_sub(self.filled_ticks())
    }

    const fn clamped_percent(&self) -> u8 {
        if self.percent > 100 { 100 } else { self.percent }
    }
}

/// Text printed at a cell position in one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Column of the first character.
    pub x: u16,
    /// Row.
    pub y: u16,
    /// Characters to print.
    pub text: String,
    /// Foreground color.
    pub color: Rgb,
}

/// Two overlapping runs forming one bar.
///
/// The background holds the frame, every tick as unfilled and the suffix.
/// The foreground overwrites the leading cells with filled ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawLayers {
    /// Full-width run drawn first.
    pub background: TextRun,
    /// Filled ticks drawn one column right of the background.
    pub foreground: TextRun,
}

/// Character-cell surface the renderer draws onto.
pub trait Canvas {
    /// Erase every cell.
    fn clear(&mut self);
    /// Print `text` starting at `(x, y)` in `color`.
    fn print(&mut self, x: u16, y: u16, text: &str, color: Rgb);
}

/// Formats bars with an injected glyph set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarRenderer {
    glyphs: BarGlyphs,
}

impl BarRenderer {
    /// Renderer drawing with `glyphs`.
    #[must_use]
    pub const fn new(glyphs: BarGlyphs) -> Self {
        Self { glyphs }
    }

    /// Glyph set in use.
    #[must_use]
    pub const fn glyphs(&self) -> &BarGlyphs {
        &self.glyphs
    }

    /// Single-line text form, e.g. `[▓▓▓░░] 60% (3/5)`.
    #[must_use]
    pub fn format_text(&self, spec: &BarSpec) -> String {
        debug_assert!(spec.percent <= 100, "percent {} out of range", spec.percent);
        let mut out = String::with_capacity(spec.max_ticks() * 3 + 24);
        out.push('[');
        push_repeated(&mut out, self.glyphs.filled, spec.filled_ticks());
        push_repeated(&mut out, self.glyphs.unfilled, spec.unfilled_ticks());
        out.push(']');
        push_suffix(&mut out, spec);
        out
    }

    /// Background and foreground runs for a bar whose bracket sits at `(x, y)`.
    #[must_use]
    pub fn draw_layers(&self, spec: &BarSpec, x: u16, y: u16) -> DrawLayers {
        debug_assert!(spec.percent <= 100, "percent {} out of range", spec.percent);
        let mut track = String::with_capacity(spec.max_ticks() * 3 + 24);
        track.push('[');
        push_repeated(&mut track, self.glyphs.unfilled, spec.max_ticks());
        track.push(']');
        push_suffix(&mut track, spec);

        let mut fill = String::with_capacity(spec.filled_ticks() * 3);
        push_repeated(&mut fill, self.glyphs.filled, spec.filled_ticks());

        DrawLayers {
            background: TextRun {
                x,
                y,
                text: track,
                color: self.glyphs.unfilled_color,
            },
            foreground: TextRun {
                x: x.saturating_add(1),
                y,
                text: fill,
                color: spec.highlight.unwrap_or(self.glyphs.filled_color),
            },
        }
    }

    /// Print both layers of a bar onto `canvas`, background first.
    pub fn draw<C: Canvas + ?Sized>(&self, spec: &BarSpec, x: u16, y: u16, canvas: &mut C) {
        let DrawLayers {
            background,
            foreground,
        } = self.draw_layers(spec, x, y);
        canvas.print(background.x, background.y, &background.text, background.color);
        if !foreground.text.is_empty() {
            canvas.print(foreground.x, foreground.y, &foreground.text, foreground.color);
        }
    }
}

fn push_repeated(out: &mut String, glyph: char, count: usize) {
    out.extend(std::iter::repeat_n(glyph, count));
}

fn push_suffix(out: &mut String, spec: &BarSpec) {
    use std::fmt::Write as _;

    if spec.show_percent {
        let _ = write!(out, " {}%", spec.clamped_percent());
    }
    if spec.show_count {
        let _ = write!(out, " ({}/{})", spec.current, spec.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> BarRenderer {
        BarRenderer::new(BarGlyphs {
            filled: '#',
            unfilled: '-',
            ..BarGlyphs::default()
        })
    }

    fn expect_ok<T>(result: Result<T>, ctx: &str) -> T {
        match result {
            Ok(value) => value,
            Err(err) => panic!("{ctx}: {err}"),
        }
    }

    #[test]
    fn format_text_truncates_partial_ticks() {
        let text = renderer().format_text(&BarSpec::new(47));
        assert_eq!(text, "[#########-----------] 47%");
    }

    #[test]
    fn format_text_appends_count() {
        let spec = BarSpec::new(50).with_count(720, 1440);
        assert_eq!(renderer().format_text(&spec), "[##########----------] 50% (720/1440)");
    }

    #[test]
    fn format_text_without_suffixes() {
        let spec = BarSpec::new(100).show_percent(false);
        assert_eq!(renderer().format_text(&spec), "[####################]");
    }

    #[test]
    fn format_text_uses_default_glyphs() {
        let spec = expect_ok(BarSpec::new(40).percent_per_tick(20), "tick width");
        assert_eq!(
            BarRenderer::default().format_text(&spec),
            "[\u{2593}\u{2593}\u{2591}\u{2591}\u{2591}] 40%"
        );
    }

    #[test]
    fn non_dividing_tick_width_drops_remainder() {
        let spec = expect_ok(BarSpec::new(100).percent_per_tick(30), "tick width");
        assert_eq!(spec.max_ticks(), 3);
        assert_eq!(renderer().format_text(&spec.show_percent(false)), "[###]");
    }

    #[test]
    fn rejects_zero_and_oversized_tick_width() {
        assert!(matches!(
            BarSpec::new(10).percent_per_tick(0),
            Err(ProgressError::InvalidTickWidth(0))
        ));
        assert!(BarSpec::new(10).percent_per_tick(101).is_err());
    }

    #[test]
    fn from_progress_shows_count() {
        let progress = expect_ok(
            PeriodProgress::new(crate::progress::Period::Month, 15, 30),
            "progress",
        );
        let spec = BarSpec::from_progress(&progress);
        assert_eq!(renderer().format_text(&spec), "[##########----------] 50% (15/30)");
    }

    #[test]
    fn draw_layers_split_track_and_fill() {
        let spec = BarSpec::new(25).with_count(1, 4);
        let layers = renderer().draw_layers(&spec, 2, 7);

        assert_eq!(layers.background.text, "[--------------------] 25% (1/4)");
        assert_eq!((layers.background.x, layers.background.y), (2, 7));
        assert_eq!(layers.background.color, Rgb::WHITE);

        assert_eq!(layers.foreground.text, "#####");
        assert_eq!((layers.foreground.x, layers.foreground.y), (3, 7));
        assert_eq!(layers.foreground.color, Rgb::GREEN);
    }

    #[test]
    fn highlight_overrides_fill_color_only() {
        let spec = BarSpec::new(60).highlight(Rgb::LIFESPAN_HIGHLIGHT);
        let layers = renderer().draw_layers(&spec, 0, 0);
        assert_eq!(layers.foreground.color, Rgb::LIFESPAN_HIGHLIGHT);
        assert_eq!(layers.background.color, Rgb::WHITE);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn out_of_range_percent_is_loud_in_debug() {
        let _ = renderer().format_text(&BarSpec::new(150));
    }
}
