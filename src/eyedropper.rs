//! macOS screen color sampler feeding the hex query.
//!
//! `NSColorSampler` shows the system magnifier; the picked pixel is
//! converted to sRGB and written into the hex field, which re-ranks the list
//! like any typed color.

use std::cell::Cell;

use block2::RcBlock;
use objc2::rc::{Allocated, Id};
use objc2::runtime::{AnyClass, AnyObject};
use objc2::{msg_send, msg_send_id};

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalUpdate};
use lucide_icons::Icon;

use crate::color::Rgb;
use crate::inputs::icon_button;

/// Reads the sRGB channels of an `NSColor`, or `None` if it has no sRGB form.
unsafe fn srgb_components(color: *mut AnyObject) -> Option<Rgb> {
    if color.is_null() {
        return None;
    }
    let space_cls = AnyClass::get("NSColorSpace")?;
    let srgb_space: *const AnyObject = msg_send![space_cls, sRGBColorSpace];
    if srgb_space.is_null() {
        return None;
    }
    let srgb: *const AnyObject = msg_send![&*color, colorUsingColorSpace: &*srgb_space];
    if srgb.is_null() {
        return None;
    }
    let (mut r, mut g, mut b, mut a) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
    let _: () = msg_send![&*srgb, getRed: &mut r, green: &mut g, blue: &mut b, alpha: &mut a];
    Some(Rgb::from_unit(r, g, b))
}

/// Runs the system sampler and hands the picked color to `on_pick`.
///
/// Cancelling (Esc) never calls `on_pick`. Main thread only; Floem event
/// handlers satisfy this.
pub(crate) fn sample_color(on_pick: impl FnOnce(Rgb) + 'static) {
    let Some(cls) = AnyClass::get("NSColorSampler") else {
        log::warn!("NSColorSampler unavailable, eyedropper disabled");
        return;
    };

    let sampler: Allocated<AnyObject> = unsafe { msg_send_id![cls, alloc] };
    let sampler: Id<AnyObject> = unsafe { msg_send_id![sampler, init] };

    type Callback = Cell<Option<Box<dyn FnOnce(Rgb)>>>;
    let callback: Callback = Cell::new(Some(Box::new(on_pick)));

    let block = RcBlock::new(move |color: *mut AnyObject| {
        let Some(rgb) = (unsafe { srgb_components(color) }) else {
            return;
        };
        if let Some(cb) = callback.take() {
            cb(rgb);
        }
    });

    unsafe {
        let _: () = msg_send![&*sampler, showSamplerWithSelectionHandler: &*block];
    }
}

/// Pipette button writing the sampled color into `hex` as `#RRGGBB`.
pub(crate) fn eyedropper_button(hex: RwSignal<String>) -> impl IntoView {
    icon_button(Icon::Pipette, move || {
        sample_color(move |picked| {
            log::debug!("eyedropper picked {}", picked.to_hex());
            hex.set(picked.to_hex());
        });
    })
}
