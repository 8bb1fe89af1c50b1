#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod browser;
mod canvas;
pub mod constants;
pub mod dom;
pub mod events;
mod mount;
pub mod overlay;
mod page;
pub mod toast;

pub use mount::{mount_intro, mount_starfield, IntroMount, StarfieldMount};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = page::boot() {
        log::error!("[page] boot error: {:?}", e);
    }
    Ok(())
}
