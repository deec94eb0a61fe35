//! Search panel: hex and text inputs over the ranked floss list.

use std::sync::Arc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::catalog::Catalog;
use crate::color::Rgb;
use crate::constants;
#[cfg(all(feature = "eyedropper", target_os = "macos"))]
use crate::eyedropper::eyedropper_button;
use crate::floss_row::{floss_row, FlossRow};
use crate::inputs::{copy_button, hex_input, text_search_input};
use crate::inventory::Inventory;
use crate::ranker::{Query, RankerOptions, SearchRanker};

/// Creates the search panel over `catalog`.
///
/// Every edit of either field re-ranks the whole catalog; `inventory` is only
/// shown and edited per row, never consulted by the ranking.
pub(crate) fn search_panel(
    catalog: Arc<Catalog>,
    options: RankerOptions,
    inventory: RwSignal<Inventory>,
) -> impl IntoView {
    let hex = RwSignal::new(String::new());
    let text = RwSignal::new(String::new());

    let rows = move || {
        let query = Query {
            hex_input: Some(hex.get()),
            text_input: Some(text.get()),
        };
        SearchRanker::new(&catalog)
            .with_options(options)
            .rank(&query)
            .into_iter()
            .map(FlossRow::from)
            .collect::<Vec<_>>()
    };

    // Preview swatch for the typed color; panel gray until it parses
    let preview = empty().style(move |st| {
        let fill = match Rgb::from_hex(&hex.get()) {
            Some(rgb) => Color::rgb8(rgb.r, rgb.g, rgb.b),
            None => Color::rgb8(242, 242, 242),
        };
        st.width(constants::PREVIEW_SIZE)
            .height(constants::PREVIEW_SIZE)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(180, 180, 180))
            .background(fill)
    });

    v_stack((
        // Color query row
        h_stack((
            #[cfg(all(feature = "eyedropper", target_os = "macos"))]
            eyedropper_button(hex),
            hex_input(hex),
            copy_button(move || hex.get()),
            // Spacer pushes swatch to the right
            empty().style(|s| s.flex_grow(1.0)),
            preview,
        ))
        .style(|st| st.items_center().gap(constants::GAP)),
        // Text filter row
        text_search_input(text),
        scroll(
            dyn_stack(rows, |row: &FlossRow| row.key(), move |row| {
                floss_row(row, inventory)
            })
            .style(|s| s.flex_col().width_full()),
        )
        .style(|s| {
            s.flex_grow(1.0)
                .width_full()
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(constants::RADIUS)
                .background(Color::WHITE)
        }),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}
