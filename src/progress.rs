//! Progress bars that share one output stream.
//!
//! A [`ProgressBar`] is neither `Clone` nor `Unpin`, so a list of them is kept
//! in a [`StableVec`] where they are never moved after being built. Bars are
//! built in place from `(writer, prefix)` bundles, either one by one in a loop
//! or by feeding the bundles through [`transform`] into a [`BackEmplacer`].
//!
//! [`BackEmplacer`]: crate::adapter::BackEmplacer

use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    io::Write,
    marker::PhantomPinned,
    rc::Rc,
};

use crate::{
    adapter::{back_emplacer, back_inserter},
    algorithm::{generate_n, transform},
    construct::Construct,
    container::StableVec,
    error::{Error, Result},
};

pub const PROGRESS_STEP: f64 = 10.0;

/// A writer shared by several bars.
pub type SharedWriter<W> = Rc<RefCell<W>>;

pub fn shared_writer<W>(writer: W) -> SharedWriter<W> {
    Rc::new(RefCell::new(writer))
}

pub struct ProgressBar<W> {
    out: SharedWriter<W>,
    prefix: String,
    progress: Cell<f64>,
    _pin: PhantomPinned,
}

impl<W> ProgressBar<W> {
    pub fn new(out: SharedWriter<W>, prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(Error::EmptyPrefix);
        }
        Ok(ProgressBar {
            out,
            prefix,
            progress: Cell::new(0.0),
            _pin: PhantomPinned,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    pub fn tick(&self) {
        self.progress.set(self.progress.get() + PROGRESS_STEP);
    }
}

impl<W> ProgressBar<W>
where
    W: Write,
{
    /// Writes one `prefix[progress] data` line to the shared writer.
    pub fn write_progress(&self, data: &str) -> Result<()> {
        let mut out = self.out.try_borrow_mut().map_err(|_| Error::WriterBusy)?;
        writeln!(out, "{}[{}] {}", self.prefix, self.progress.get(), data)?;
        Ok(())
    }
}

impl<W> std::fmt::Debug for ProgressBar<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBar")
            .field("prefix", &self.prefix)
            .field("progress", &self.progress.get())
            .finish_non_exhaustive()
    }
}

impl<W, P> Construct<(SharedWriter<W>, P)> for ProgressBar<W>
where
    P: Into<String>,
{
    type Error = Error;

    fn construct((out, prefix): (SharedWriter<W>, P)) -> Result<Self> {
        ProgressBar::new(out, prefix)
    }
}

impl<'a, W, P> Construct<(&'a SharedWriter<W>, P)> for ProgressBar<W>
where
    P: Into<String>,
{
    type Error = Error;

    fn construct((out, prefix): (&'a SharedWriter<W>, P)) -> Result<Self> {
        ProgressBar::new(out.clone(), prefix)
    }
}

/// Names `task0` through `task{n-1}`.
pub fn task_names(n: usize) -> Vec<String> {
    let mut tasks = Vec::with_capacity(n);
    let mut next = 0;
    generate_n(back_inserter(&mut tasks), n, || {
        let name = format!("task{}", next);
        next += 1;
        name
    })
    .unwrap_or_else(|never: Infallible| match never {});
    tasks
}

/// Builds one bar per task with an explicit loop.
pub fn bars_with_loop<W>(
    out: &SharedWriter<W>,
    tasks: &[String],
) -> Result<StableVec<ProgressBar<W>>> {
    let mut bars: StableVec<ProgressBar<W>> = StableVec::new();
    for task in tasks {
        bars.emplace((out, task.as_str()))?;
    }
    Ok(bars)
}

/// Builds one bar per task by feeding `(writer, task)` bundles through
/// [`transform`].
pub fn bars_with_algorithm<W>(
    out: &SharedWriter<W>,
    tasks: &[String],
) -> Result<StableVec<ProgressBar<W>>> {
    let mut bars: StableVec<ProgressBar<W>> = StableVec::new();
    transform(
        tasks,
        |task| (out.clone(), task.as_str()),
        back_emplacer(&mut bars),
    )?;
    Ok(bars)
}

/// Advances every bar by one step and reports it.
pub fn log_progress<'a, W, I>(bars: I) -> Result<()>
where
    W: Write + 'a,
    I: IntoIterator<Item = &'a ProgressBar<W>>,
{
    for bar in bars {
        bar.tick();
        bar.write_progress("step")?;
    }
    Ok(())
}
