//! Standalone demo: opens a window searching the bundled DMC catalog.

use std::sync::Arc;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_floss::{floss_search, Catalog, Inventory};

fn main() {
    let catalog = match Catalog::dmc() {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            eprintln!("failed to load DMC catalog: {err}");
            std::process::exit(1);
        }
    };
    let inventory = RwSignal::new(Inventory::new());

    floem::Application::new()
        .window(
            move |_| {
                floss_search(catalog.clone(), inventory).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((520.0, 640.0))
                    .title("floem-floss"),
            ),
        )
        .run();
}
