//! Browser side of the Preservation Assistant console.
//!
//! Page templates load this module and call one `ready*` function once their
//! DOM is in place; the remaining exports back inline actions such as
//! `viewJobDetails`. Decisions are made in `pa_console`; this crate only
//! reads the page, talks to the server and writes the results back.

#[cfg(target_arch = "wasm32")]
mod bindgen;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod edit_item;
#[cfg(target_arch = "wasm32")]
mod http;
#[cfg(target_arch = "wasm32")]
mod ids;
#[cfg(target_arch = "wasm32")]
mod job_details;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod pages;
#[cfg(target_arch = "wasm32")]
mod registry;
#[cfg(target_arch = "wasm32")]
mod state;
#[cfg(target_arch = "wasm32")]
mod users;

#[cfg(target_arch = "wasm32")]
pub use pages::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    logger::init(log::LevelFilter::Info);
}
