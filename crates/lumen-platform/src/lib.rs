//! Headless platform runner.
//!
//! `HeadlessApp` is the host for a root function: it owns the scheduler,
//! keeps the last frame, queues input events and processes them one at a
//! time, composing a fresh frame between events whenever state read by the
//! previous frame has changed.

mod common;

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::Context as _;
use lumen_core::*;
use lumen_ui::paint_markup;
use thiserror::Error;

use crate::common::{Command, parse_command, resolve_target};

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no control {target} in frame #{generation}")]
    NoSuchControl { target: Target, generation: u64 },
    #[error("control {target} has no click handler")]
    Inert { target: Target },
}

type Root = Box<dyn FnMut(&mut Scheduler) -> View>;

pub struct HeadlessApp {
    root: Root,
    sched: Scheduler,
    frame: Option<Frame>,
    queue: VecDeque<InputEvent>,
}

impl HeadlessApp {
    /// Mounts `root`. Nothing is composed until the first frame is requested.
    pub fn new(root: impl FnMut(&mut Scheduler) -> View + 'static) -> Self {
        Self {
            root: Box::new(root),
            sched: Scheduler::new(),
            frame: None,
            queue: VecDeque::new(),
        }
    }

    /// Current frame, composing a new one first if the last is stale.
    pub fn frame(&mut self) -> &Frame {
        let frame = match self.frame.take() {
            Some(frame) if !self.sched.is_invalidated() => frame,
            _ => {
                let frame = self.sched.compose(&mut self.root, paint_markup);
                log::debug!(
                    "frame #{}: {} controls",
                    frame.generation,
                    frame.hit_regions.len()
                );
                frame
            }
        };
        self.frame.insert(frame)
    }

    pub fn markup(&mut self) -> String {
        self.frame().markup.clone()
    }

    /// Number of compositions so far.
    pub fn generation(&self) -> u64 {
        self.sched.generation()
    }

    pub fn is_invalidated(&self) -> bool {
        self.sched.is_invalidated()
    }

    pub fn dispatch(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Processes queued events in order. Each event is resolved against a
    /// frame that reflects every earlier event. Stops at the first failure;
    /// events after it stay queued.
    pub fn pump(&mut self) -> Result<usize, PlatformError> {
        let mut handled = 0;
        while let Some(event) = self.queue.pop_front() {
            self.handle(event)?;
            handled += 1;
        }
        Ok(handled)
    }

    pub fn click(&mut self, label: &str) -> Result<(), PlatformError> {
        self.click_nth(label, 0)
    }

    pub fn click_nth(&mut self, label: &str, index: usize) -> Result<(), PlatformError> {
        self.dispatch(InputEvent::Activate(Target::Label {
            label: label.to_string(),
            index,
        }));
        self.pump().map(|_| ())
    }

    fn handle(&mut self, event: InputEvent) -> Result<(), PlatformError> {
        let InputEvent::Activate(target) = event;
        let frame = self.frame();
        let generation = frame.generation;
        let Some(hit) = resolve_target(frame, &target) else {
            return Err(PlatformError::NoSuchControl { target, generation });
        };
        let Some(on_click) = hit.on_click.clone() else {
            return Err(PlatformError::Inert { target });
        };
        log::debug!("activate {target} (#{})", hit.id);
        on_click();
        Ok(())
    }

    /// Drops all remembered state and runs unmount cleanups.
    pub fn unmount(&mut self) {
        self.queue.clear();
        self.frame = None;
        self.sched.dispose();
    }
}

impl Drop for HeadlessApp {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Writes every frame's markup as one line.
pub struct WriterBackend<W: Write> {
    out: W,
}

impl<W: Write> WriterBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RenderBackend for WriterBackend<W> {
    fn frame(&mut self, frame: &Frame) -> std::io::Result<()> {
        writeln!(self.out, "{}", frame.markup)?;
        self.out.flush()
    }
}

/// Runs `root` headlessly, driven by line commands from `input`:
///
/// - `show` prints the current frame
/// - `click <label> [n]` activates the n-th control labelled `label`, then
///   prints the resulting frame
/// - `quit` (or end of input) stops
///
/// The first frame is printed on start. Unknown commands and missing
/// controls are reported on `output` and do not stop the loop.
pub fn run_headless_app(
    root: impl FnMut(&mut Scheduler) -> View + 'static,
    input: impl BufRead,
    output: impl Write,
) -> anyhow::Result<()> {
    let mut app = HeadlessApp::new(root);
    let mut backend = WriterBackend::new(output);
    backend
        .frame(app.frame())
        .context("writing initial frame")?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        match parse_command(&line) {
            None => continue,
            Some(Command::Quit) => break,
            Some(Command::Show) => {}
            Some(Command::Click { label, index }) => {
                if let Err(e) = app.click_nth(&label, index) {
                    log::warn!("{e}");
                    writeln!(backend.out, "error: {e}").context("writing error")?;
                    continue;
                }
            }
            Some(Command::Unknown(cmd)) => {
                writeln!(backend.out, "error: unknown command '{cmd}'")
                    .context("writing error")?;
                continue;
            }
        }
        backend.frame(app.frame()).context("writing frame")?;
    }
    Ok(())
}
