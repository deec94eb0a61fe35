//! One ranked floss in the result list.

use floem::prelude::*;
#[cfg(feature = "inventory")]
use floem::reactive::{SignalUpdate, SignalWith};
use floem::reactive::RwSignal;
#[cfg(feature = "inventory")]
use lucide_icons::Icon;

use crate::color::Rgb;
use crate::constants;
#[cfg(feature = "inventory")]
use crate::inputs::icon_button;
use crate::inputs::copy_button;
use crate::inventory::Inventory;
use crate::ranker::{Highlight, RankedEntry};

const EXACT_BG: Color = Color::rgb8(220, 237, 200);
const CLOSE_BG: Color = Color::rgb8(255, 243, 205);

/// Owned copy of a ranked entry, so rows can outlive the ranking pass.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FlossRow {
    pub code: String,
    pub name: String,
    pub hex: String,
    pub rgb: Rgb,
    pub priority: u32,
    pub highlight: Highlight,
}

impl FlossRow {
    /// Rows are rebuilt when their tier or highlight changes.
    pub fn key(&self) -> (String, u32, Highlight) {
        (self.code.clone(), self.priority, self.highlight)
    }
}

impl From<RankedEntry<'_>> for FlossRow {
    fn from(ranked: RankedEntry<'_>) -> Self {
        Self {
            code: ranked.entry.code().to_string(),
            name: ranked.entry.name().to_string(),
            hex: ranked.entry.hex().to_string(),
            rgb: ranked.entry.rgb(),
            priority: ranked.priority,
            highlight: ranked.highlight,
        }
    }
}

pub(crate) fn swatch(rgb: Rgb, size: f32) -> impl IntoView {
    empty().style(move |s| {
        s.width(size)
            .height(size)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(204, 204, 204))
            .background(Color::rgb8(rgb.r, rgb.g, rgb.b))
    })
}

#[cfg(feature = "inventory")]
fn inventory_stepper(code: String, inventory: RwSignal<Inventory>) -> impl IntoView {
    let dec_code = code.clone();
    let inc_code = code.clone();
    h_stack((
        icon_button(Icon::Minus, move || {
            inventory.update(|inv| {
                inv.decrement(&dec_code);
            });
        }),
        label(move || inventory.with(|inv| inv.count(&code))).style(|s| {
            s.min_width(24.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
        icon_button(Icon::Plus, move || {
            inventory.update(|inv| {
                inv.increment(&inc_code);
            });
        }),
    ))
    .style(|s| s.items_center().gap(2.0))
}

/// Swatch, code, name, hex, copy button and (with `inventory`) the skein
/// counter, on a background keyed by highlight.
pub(crate) fn floss_row(row: FlossRow, inventory: RwSignal<Inventory>) -> impl IntoView {
    #[cfg(not(feature = "inventory"))]
    let _ = inventory;

    let FlossRow {
        code,
        name,
        hex,
        rgb,
        highlight,
        ..
    } = row;
    let background = match highlight {
        Highlight::Exact => EXACT_BG,
        Highlight::Close => CLOSE_BG,
        Highlight::None => Color::WHITE,
    };
    let copied_hex = hex.clone();
    #[cfg(feature = "inventory")]
    let stepper_code = code.clone();

    h_stack((
        swatch(rgb, constants::SWATCH_SIZE),
        label(move || code.clone()).style(|s| {
            s.width(constants::CODE_WIDTH)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
        }),
        label(move || name.clone()).style(|s| {
            s.width(constants::NAME_WIDTH)
                .font_size(constants::INPUT_FONT)
        }),
        label(move || hex.clone()).style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        empty().style(|s| s.flex_grow(1.0)),
        copy_button(move || copied_hex.clone()),
        #[cfg(feature = "inventory")]
        inventory_stepper(stepper_code, inventory),
    ))
    .style(move |s| {
        s.height(constants::ROW_HEIGHT)
            .width_full()
            .items_center()
            .gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .background(background)
            .border_bottom(1.0)
            .border_color(Color::rgb8(240, 240, 240))
    })
}

#[cfg(test)]
mod tests {
    use super::FlossRow;
    use crate::catalog::Catalog;
    use crate::ranker::{rank, Highlight, Query};

    #[test]
    fn given_ranked_entry_when_converted_then_row_keeps_tier_and_highlight() {
        let catalog = Catalog::dmc().unwrap();
        let ranked = rank(&Query::new().with_hex("#C72B3B"), &catalog);
        let row = FlossRow::from(ranked[0].clone());
        assert_eq!(row.code, "321");
        assert_eq!(row.hex, "#C72B3B");
        assert_eq!(row.key(), ("321".to_string(), 2, Highlight::Exact));
    }
}
