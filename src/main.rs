//! Research report page entry point
//!
//! Trunk-style WASM binary: installs the panic hook, waits for the document
//! to finish parsing, then renders the sample research report into the
//! `report-root` mount element. The render runs exactly once per page load.

use biohack_ui::dom::browser::BrowserDom;
use biohack_ui::lifecycle::RenderTrigger;
use biohack_ui::render;
use biohack_ui::report::Report;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let Some(browser) = BrowserDom::from_window() else {
        web_sys::console::error_1(&"no browser document available, skipping report render".into());
        return;
    };

    let dom = browser.clone();
    RenderTrigger::install(&browser, move || {
        let mount = dom.mount_point();
        render::render(&dom, &Report::sample(), mount.as_ref());
    });
}
