//! Fair contiguous splitting of a configuration into chunks.

use faultline_core::{Config, Element};

/// Partitions a configuration into `n` contiguous chunks.
///
/// The union of the chunks, in order, must reconstruct the input exactly.
/// Domains may substitute a semantically aware splitter (e.g. one that only
/// cuts at token boundaries) as long as that property holds.
pub trait Splitter<E: Element> {
    /// Split `config` into `n` chunks
    fn split(&self, config: &Config<E>, n: usize) -> Vec<Config<E>>;
}

/// Default splitter: divide the remaining elements by the remaining chunk
/// count at each step, spreading any remainder over the later chunks.
///
/// Guarantees exactly `n` chunks, all non-empty whenever `n <= len`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkSplitter;

impl<E: Element> Splitter<E> for ChunkSplitter {
    fn split(&self, config: &Config<E>, n: usize) -> Vec<Config<E>> {
        let elems = config.as_slice();
        let mut chunks = Vec::with_capacity(n);
        let mut start = 0;
        for i in 0..n {
            let size = (elems.len() - start) / (n - i);
            chunks.push(Config::from(elems[start..start + size].to_vec()));
            start += size;
        }
        chunks
    }
}
