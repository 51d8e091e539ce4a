#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!(
        "Starting Campus Portal frontend (API at {})",
        portal_frontend::config::api_base_url()
    );
    portal_frontend::router::mount_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("portal-frontend runs in the browser; build it for wasm32-unknown-unknown");
}
