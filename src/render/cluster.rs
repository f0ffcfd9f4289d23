//! Color clustering for the two-color extended render mode.

use super::palette::Rgb;

/// Capability interface for ranking the dominant colors of a sample set.
///
/// Implementations return up to `max_results` `(color, count)` pairs,
/// most frequent first. The converter only ever asks for two results,
/// but the interface leaves room for smarter quantizers.
pub trait ColorCluster {
    fn cluster(&self, colors: &[Rgb], max_results: usize) -> Vec<(Rgb, usize)>;
}

/// Exact-color frequency counter.
///
/// A cell contributes at most 8 samples, so identical colors are simply
/// counted and ranked; ties keep first-seen order.
#[derive(Debug, Default)]
pub struct FrequencyCluster;

impl ColorCluster for FrequencyCluster {
    fn cluster(&self, colors: &[Rgb], max_results: usize) -> Vec<(Rgb, usize)> {
        let mut counts: Vec<(Rgb, usize)> = Vec::new();
        for &color in colors {
            match counts.iter_mut().find(|(c, _)| *c == color) {
                Some((_, n)) => *n += 1,
                None => counts.push((color, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(max_results);
        counts
    }
}
