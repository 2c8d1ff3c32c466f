//! ScoreboardView: maps a `core::GameSnapshot` into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, one line per regulation frame:
//!
//! ```text
//! Round  1 - [ 8,  /]    Current:  15, Total:  15
//! Round  4 - [ X,  _]    Current:  25, Total:  58
//! Round 10 - [ 9,  /, X] Current:  20, Total: 149
//! ```
//!
//! The frame receiving the next ball is wrapped in a band of `v` above and `^`
//! below. Once play moves into the bonus slots no frame is marked.

use crate::core::GameSnapshot;
use crate::style::{Line, Rgb, Span, SpanStyle};
use crate::types::{Frame, FINAL_FRAME, MARKER_WIDTH, NUM_PINS};

const MARKER: SpanStyle = SpanStyle::fg(Rgb::new(90, 160, 230));
const STRIKE: SpanStyle = SpanStyle::fg(Rgb::new(240, 200, 60)).bold();
const SPARE: SpanStyle = SpanStyle::fg(Rgb::new(80, 200, 120)).bold();
const SCORE: SpanStyle = SpanStyle::fg(Rgb::new(220, 220, 220)).bold();
const PENDING: SpanStyle = SpanStyle::fg(Rgb::new(140, 140, 150)).dim();

/// Text scoreboard for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreboardView {
    marker_width: usize,
}

impl Default for ScoreboardView {
    fn default() -> Self {
        Self {
            marker_width: MARKER_WIDTH,
        }
    }
}

impl ScoreboardView {
    pub fn new(marker_width: usize) -> Self {
        Self { marker_width }
    }

    /// Render the snapshot as styled lines, markers included.
    pub fn lines(&self, snap: &GameSnapshot) -> Vec<Line> {
        let mut lines = Vec::with_capacity(FINAL_FRAME + 2);

        for (index, frame) in snap.regulation_frames().iter().enumerate() {
            let current = snap.is_current(index);
            if current {
                lines.push(self.marker('v'));
            }

            lines.push(self.frame_line(snap, index, frame));

            if current {
                lines.push(self.marker('^'));
            }
        }

        lines
    }

    /// Render the snapshot as plain text, one `\n`-terminated line per row.
    pub fn render(&self, snap: &GameSnapshot) -> String {
        let mut out = String::new();
        for line in self.lines(snap) {
            out.push_str(&line.plain());
            out.push('\n');
        }
        out
    }

    fn marker(&self, ch: char) -> Line {
        let band: String = std::iter::repeat(ch).take(self.marker_width).collect();
        Line::new().with(Span::styled(band, MARKER))
    }

    fn frame_line(&self, snap: &GameSnapshot, index: usize, frame: &Frame) -> Line {
        let mut line = Line::new().with(Span::plain(format!("Round {:>2} - [", index + 1)));

        if frame.is_strike {
            line.push(Span::styled(" X", STRIKE));
            line.push(Span::plain(",  _"));
        } else {
            line.push(Span::plain(format!(
                "{:>2}, ",
                frame.pins_on_first_roll.unwrap_or(0)
            )));
            if frame.is_spare {
                line.push(Span::styled(" /", SPARE));
            } else {
                line.push(Span::plain(format!(
                    "{:>2}",
                    frame.pins_on_second_roll.unwrap_or(0)
                )));
            }
        }

        if index == FINAL_FRAME - 1 {
            line.push(Span::plain(", "));
            match snap.fill_ball().unwrap_or(0) {
                NUM_PINS => line.push(Span::styled("X", STRIKE)),
                pins => line.push(Span::plain(pins.to_string())),
            }
            line.push(Span::plain("] "));
        } else {
            line.push(Span::plain("]    "));
        }

        line.push(Span::plain(format!("Current: {:>3}, ", frame.current_score)));
        let total_style = if frame.is_resolved() { SCORE } else { PENDING };
        line.push(Span::styled(
            format!("Total: {:>3}", frame.total_score),
            total_style,
        ));

        line
    }
}
