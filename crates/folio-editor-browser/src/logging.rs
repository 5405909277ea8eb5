//! Console logging for the browser.

use tracing::Level;
use tracing::subscriber::set_global_default;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

/// Default filter directives. Per-move traces stay off unless asked for.
pub const DEFAULT_FILTER: &str = "info,folio_editor_core=debug,folio_editor_browser=debug";

/// Install the panic hook and a `tracing` subscriber that writes to the
/// browser console.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging() {
    init_logging_with(DEFAULT_FILTER);
}

/// Like [`init_logging`] with custom `EnvFilter` directives, e.g.
/// `"folio_editor_core=trace"` to see every drag move.
pub fn init_logging_with(directives: &str) {
    console_error_panic_hook::set_once();

    let console_level = if cfg!(debug_assertions) {
        Level::TRACE
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let filter = EnvFilter::new(directives);
    let reg = Registry::default().with(filter).with(wasm_layer);

    if set_global_default(reg).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
