//! TerminalRenderer: writes scoreboard lines to a terminal stream.
//!
//! Styling goes through crossterm commands queued into an internal byte buffer,
//! which is flushed to the output in one write per draw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::scoreboard::ScoreboardView;
use crate::style::{Line, Rgb, SpanStyle};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    color: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            color,
        }
    }

    /// Draw the scoreboard for `snap`.
    pub fn draw(&mut self, view: &ScoreboardView, snap: &GameSnapshot) -> Result<()> {
        self.draw_lines(&view.lines(snap))
    }

    pub fn draw_lines(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write one unstyled line of text.
    pub fn say(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(text.as_bytes());
        self.buf.push(b'\n');
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode `lines` into `out`, with crossterm styling when `color` is set.
///
/// This builds the byte stream without touching stdout.
pub fn encode_lines_into(lines: &[Line], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        for span in line.spans() {
            if color && !span.style.is_plain() {
                apply_style_into(out, span.style)?;
                out.queue(Print(&span.text))?;
                out.queue(ResetColor)?;
                out.queue(SetAttribute(Attribute::Reset))?;
            } else {
                out.extend_from_slice(span.text.as_bytes());
            }
        }
        out.push(b'\n');
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: SpanStyle) -> Result<()> {
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
