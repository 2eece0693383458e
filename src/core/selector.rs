//! Uniform random entry selection.

use rand::Rng;

use super::Entry;

/// Pick one entry uniformly at random.
///
/// Returns the picked index together with the entry, or `None` if
/// `entries` is empty. Picks are independent; the same entry may come up
/// twice in a row.
pub fn select_entry<'a, R: Rng + ?Sized>(
    entries: &'a [Entry],
    rng: &mut R,
) -> Option<(usize, &'a Entry)> {
    if entries.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..entries.len());
    Some((index, &entries[index]))
}
