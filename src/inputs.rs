//! Input components for the floss search: hex field, text field, and icon
//! buttons.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use lucide_icons::Icon;

use crate::constants;
use crate::math;

fn field_style(s: floem::style::Style, width: f32) -> floem::style::Style {
    s.width(width)
        .padding(2.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

/// A hex input field that syncs bidirectionally with an RwSignal<String>.
///
/// Every keystroke is clamped to `#RRGGBB` length and pushed to `hex_signal`,
/// partial values included; the ranker decides what is a usable color.
/// Enter or focus loss writes the clamped text back, normalized to `#RRGGBB`
/// when complete.
pub(crate) fn hex_input(hex_signal: RwSignal<String>) -> impl IntoView {
    let text = RwSignal::new(hex_signal.get_untracked());

    // External hex_signal → text (only update if not equivalent)
    create_effect(move |_| {
        let val = hex_signal.get();
        if math::sanitize_hex_input(&text.get_untracked()) != val {
            text.set(val);
        }
    });

    // text → hex_signal on every keystroke, clamped
    create_effect(move |_| {
        let clamped = math::sanitize_hex_input(&text.get());
        if hex_signal.get_untracked() != clamped {
            hex_signal.set(clamped);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        let clamped = math::sanitize_hex_input(&raw);
        let committed = math::normalize_hex(&clamped).unwrap_or(clamped);
        if raw != committed {
            text.set(committed);
        }
    };
    let on_commit_clone = on_commit;

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| field_style(s, constants::HEX_INPUT_WIDTH))
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit_clone();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// Free-text filter over floss code and name.
pub(crate) fn text_search_input(text: RwSignal<String>) -> impl IntoView {
    h_stack((
        label(|| Icon::Search.unicode().to_string()).style(|s| {
            s.font_size(14.0)
                .font_family("lucide".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text).style(|s| field_style(s, constants::TEXT_INPUT_WIDTH)),
    ))
    .style(|s| s.items_center().gap(4.0))
}

/// A small lucide icon button that runs `on_press` on release.
pub(crate) fn icon_button(icon: Icon, on_press: impl Fn() + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(move || icon.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}

/// Copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    icon_button(Icon::Copy, move || copy_to_clipboard(&get_text()))
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                log::warn!("clipboard write failed: {err}");
            }
        }
        Err(err) => log::warn!("clipboard unavailable: {err}"),
    }
}
