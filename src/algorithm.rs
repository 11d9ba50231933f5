//! Single-pass algorithms that write their results through an [`OutputCursor`].
//!
//! Each algorithm returns the cursor when it finishes so that the caller can
//! keep writing through it. The first error raised by the cursor stops the
//! algorithm; values written before it are kept.

use crate::cursor::OutputCursor;

pub fn transform<I, F, V, O>(input: I, mut f: F, mut out: O) -> Result<O, O::Error>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> V,
    O: OutputCursor<V>,
{
    for (index, item) in input.into_iter().enumerate() {
        if let Err(e) = out.put(f(item)) {
            log::debug!("transform stopped at element {}", index);
            return Err(e);
        }
        out.step();
        log::trace!("transform wrote element {}", index);
    }
    Ok(out)
}

pub fn copy<I, O>(input: I, out: O) -> Result<O, O::Error>
where
    I: IntoIterator,
    O: OutputCursor<I::Item>,
{
    transform(input, |item| item, out)
}

/// Writes `n` values produced by successive calls to `generator`.
pub fn generate_n<G, V, O>(out: O, n: usize, mut generator: G) -> Result<O, O::Error>
where
    G: FnMut() -> V,
    O: OutputCursor<V>,
{
    transform(0..n, |_| generator(), out)
}

pub fn fill_n<V, O>(out: O, n: usize, value: &V) -> Result<O, O::Error>
where
    V: Clone,
    O: OutputCursor<V>,
{
    generate_n(out, n, || value.clone())
}
