//! Building sequences by constructing each element in place from a bundle of
//! constructor arguments.
//!
//! A container that implements [`EmplaceBack`] can append an element built
//! from an argument tuple. A [`BackEmplacer`] borrows such a container and
//! exposes it as an output cursor, so the generic algorithms in [`algorithm`]
//! can fill it.

mod util;

pub mod adapter;
pub mod algorithm;
pub mod construct;
pub mod container;
pub mod cursor;
pub mod error;
pub mod probe;
pub mod progress;
pub mod typelist;

pub use adapter::{back_emplacer, back_inserter, BackEmplacer, BackInserter};
pub use construct::Construct;
pub use container::{EmplaceBack, EmplaceTarget, StableVec};
pub use cursor::OutputCursor;
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use crate::{
        algorithm::transform,
        back_emplacer,
        progress::{shared_writer, ProgressBar},
        StableVec,
    };

    #[test]
    fn builds_bars_from_bundles() -> anyhow::Result<()> {
        let streambuf = shared_writer(Vec::<u8>::new());
        let mut bars: StableVec<ProgressBar<Vec<u8>>> = StableVec::new();
        transform(
            ["task0", "task1", "task2"],
            |task| (&streambuf, task),
            back_emplacer(&mut bars),
        )?;
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[2].prefix(), "task2");
        Ok(())
    }
}
