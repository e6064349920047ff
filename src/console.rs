//! Console collaborators: geometry probe and frame presentation.
//!
//! The window only decides *where* things go. Reading the console size and
//! getting a composed frame onto the screen are delegated to a [`Console`].
//! Applications use a `ratatui::Terminal` over crossterm; tests use a
//! `Terminal<TestBackend>` or [`Headless`].

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::buffer::Buffer;
use ratatui::layout::Size;
use ratatui::Terminal;
use std::io::{self, Stdout};

/// Terminal over the process's standard output.
pub type StdoutTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Console geometry probe plus frame sink.
pub trait Console {
    /// Current console size in cells.
    ///
    /// Errors are treated as a zero-sized (headless) console by the window.
    fn size(&self) -> io::Result<Size>;

    /// Put a fully composed frame on screen.
    fn present(&mut self, frame: &Buffer) -> io::Result<()>;
}

impl<B: Backend> Console for Terminal<B> {
    fn size(&self) -> io::Result<Size> {
        Terminal::size(self)
    }

    fn present(&mut self, frame: &Buffer) -> io::Result<()> {
        self.draw(|f| {
            let area = f.area().intersection(frame.area);
            let target = f.buffer_mut();
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    target[(x, y)] = frame[(x, y)].clone();
                }
            }
        })?;
        Ok(())
    }
}

/// Put stdout in raw mode on the alternate screen and wrap it in a terminal.
///
/// Pair with [`restore_terminal`] before the process exits, including on
/// error paths.
pub fn enter_terminal() -> io::Result<StdoutTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave the alternate screen and disable raw mode.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Console with a fixed size and no output.
///
/// Stands in for a terminal when none is attached (CI, batch jobs, layout-only
/// tests). A zero height reproduces the "no console information" case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headless {
    size: Size,
    frames: usize,
    last_frame: Option<Buffer>,
}

impl Headless {
    /// Headless console of `width` × `height` cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Size::new(width, height),
            frames: 0,
            last_frame: None,
        }
    }

    /// Change the reported size, as a terminal resize would.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = Size::new(width, height);
    }

    /// Number of frames presented so far.
    pub fn frames_presented(&self) -> usize {
        self.frames
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&Buffer> {
        self.last_frame.as_ref()
    }
}

impl Console for Headless {
    fn size(&self) -> io::Result<Size> {
        Ok(self.size)
    }

    fn present(&mut self, frame: &Buffer) -> io::Result<()> {
        self.frames += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
