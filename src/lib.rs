//! # floem-floss
//!
//! DMC floss color matching and search ranking, with a search view for
//! [Floem](https://github.com/lapce/floem).
//!
//! The ranking engine is plain data in, plain data out: a [`Query`] of hex
//! and/or text is run against an immutable [`Catalog`], producing
//! [`RankedEntry`] rows ordered by tier (floss code typed as hex, exact hex,
//! nearest colors, rest). [`floss_search`] wraps it in a view with a hex
//! field, a text filter, and per-row skein counts.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_floss::{rank, Catalog, Query};
//!
//! let catalog = Catalog::dmc().unwrap();
//! let ranked = rank(&Query::new().with_hex("#C72B3B"), &catalog);
//! assert_eq!(ranked[0].entry.code(), "321");
//! ```

mod catalog;
mod color;
mod constants;
mod errors;
#[cfg(all(feature = "eyedropper", target_os = "macos"))]
mod eyedropper;
mod floss_row;
mod inputs;
mod inventory;
mod matcher;
mod math;
mod ranker;
mod search_panel;

pub use catalog::{Catalog, ColorEntry, FlossRecord};
pub use color::{distance, hex_to_rgb, Rgb};
pub use errors::CatalogError;
pub use inventory::{analyze_pattern, FlossRequirement, Inventory, RequirementRow, RequirementStatus};
pub use matcher::{closest, closest_entries};
pub use math::{is_valid_hex, normalize_hex, sanitize_hex_input};
pub use ranker::{rank, Highlight, Query, RankedEntry, RankerOptions, SearchRanker};

use std::sync::{Arc, Once};

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the floss search view with default ranking options.
///
/// `inventory` is owned by the caller (it is usually persisted per user);
/// the view reads it for display and writes it from the −/+ buttons.
pub fn floss_search(catalog: Arc<Catalog>, inventory: RwSignal<Inventory>) -> impl IntoView {
    floss_search_with_options(catalog, RankerOptions::default(), inventory)
}

/// Creates the floss search view with explicit ranking options.
pub fn floss_search_with_options(
    catalog: Arc<Catalog>,
    options: RankerOptions,
    inventory: RwSignal<Inventory>,
) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    search_panel::search_panel(catalog, options, inventory)
}
