//! Nearest-color lookup over a floss catalog.

use crate::catalog::{Catalog, ColorEntry};
use crate::color::Rgb;

/// The `n` catalog entries nearest to `target_hex`, nearest first, with
/// their distances.
///
/// Ties keep catalog order. An invalid target yields an empty set, and an `n`
/// past the catalog size returns the whole catalog sorted by distance.
pub fn closest_entries<'a>(
    target_hex: &str,
    catalog: &'a Catalog,
    n: usize,
) -> Vec<(&'a ColorEntry, f64)> {
    let Some(target) = Rgb::from_hex(target_hex) else {
        log::trace!("closest: {target_hex:?} is not a six digit hex, no matches");
        return Vec::new();
    };
    let mut scored: Vec<(&ColorEntry, f64)> = catalog
        .iter()
        .map(|entry| (entry, target.distance(&entry.rgb())))
        .collect();
    // Stable, so equal distances stay in catalog order.
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));
    scored.truncate(n);
    scored
}

/// Codes of the `n` catalog entries nearest to `target_hex`, nearest first.
///
/// Callers are expected to check [`crate::is_valid_hex`] first; an invalid
/// target is treated as an empty closest set.
pub fn closest<'a>(target_hex: &str, catalog: &'a Catalog, n: usize) -> Vec<&'a str> {
    closest_entries(target_hex, catalog, n)
        .into_iter()
        .map(|(entry, _)| entry.code())
        .collect()
}
