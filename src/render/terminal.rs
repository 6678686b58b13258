//! Terminal rendering surface.

use std::io::{self, Write};

use crate::counter::{AuxMessage, CounterView};

const SPINNER: [char; 4] = ['⠋', '⠙', '⠸', '⠴'];
const CLEAR_LINE: &str = "\r\x1b[2K";

/// Draws counter views to any writer.
///
/// Live frames overwrite a single line; [`TerminalRenderer::finish`] prints the
/// settled card.
pub struct TerminalRenderer<W: Write> {
    out: W,
    live: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// `live` enables in-place frame redraws (only sensible on a TTY).
    pub fn new(out: W, live: bool) -> Self {
        Self { out, live }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Redraw the in-progress line. Ignored when not live.
    pub fn draw_frame(&mut self, view: &CounterView, tick: usize) -> io::Result<()> {
        if !self.live {
            return Ok(());
        }
        write!(self.out, "{CLEAR_LINE}{}", frame_line(view, tick))?;
        self.out.flush()
    }

    /// Print the final card.
    pub fn finish(&mut self, view: &CounterView) -> io::Result<()> {
        if self.live {
            write!(self.out, "{CLEAR_LINE}")?;
        }
        writeln!(self.out, "[{}] {}", view.status_label, view.caption())?;
        writeln!(self.out, "{}", view.headline())?;
        if let Some(message) = view.message.filter(|m| *m != AuxMessage::Spinner) {
            writeln!(self.out, "{}", message.text())?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn frame_line(view: &CounterView, tick: usize) -> String {
    let mut line = format!("[{}] {}", view.status_label, view.headline());
    if view.message == Some(AuxMessage::Spinner) {
        line.push(' ');
        line.push(SPINNER[tick % SPINNER.len()]);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterStatus;

    fn rendered(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_frame_shows_spinner_while_loading() {
        let view = CounterView::new(CounterStatus::Loading, Some(41999));
        assert_eq!(frame_line(&view, 0), "[LIVE] 👀 41,999 visitors and counting ⠋");
        assert_eq!(frame_line(&view, 5), "[LIVE] 👀 41,999 visitors and counting ⠙");

        let ready = CounterView::new(CounterStatus::Ready, Some(42000));
        assert_eq!(frame_line(&ready, 0), "[LIVE] 👀 42,000 visitors and counting");
    }

    #[test]
    fn test_static_output_skips_frames() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        renderer
            .draw_frame(&CounterView::new(CounterStatus::Loading, None), 0)
            .unwrap();
        renderer
            .finish(&CounterView::new(CounterStatus::Error, None))
            .unwrap();

        assert_eq!(
            rendered(renderer),
            "[OFFLINE] Real-time counter powered by CountAPI\n\
             👀 — visitors and counting\n\
             Showing last known total. The live counter will update when connectivity returns.\n"
        );
    }

    #[test]
    fn test_live_output_clears_line() {
        let mut renderer = TerminalRenderer::new(Vec::new(), true);
        let view = CounterView::new(CounterStatus::Ready, Some(42000));
        renderer.draw_frame(&view, 0).unwrap();
        renderer.finish(&view).unwrap();

        let out = rendered(renderer);
        assert!(out.starts_with(CLEAR_LINE));
        assert!(out.ends_with("👀 42,000 visitors and counting\nUpdated just now.\n"));
    }
}
