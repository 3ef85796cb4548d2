//! Research report tree renderer
//!
//! One synchronous pass over the report: the full element tree is built
//! detached, then swapped into the mount point, so the page shows either the
//! complete report or nothing from it. A build failure swaps in the error
//! panel instead. Every call is a full rebuild; there is no diffing and no
//! partial update.

use crate::dom::Dom;
use crate::error::RenderError;
use crate::report::{Approach, HealthHack, Mechanism, Product, Report};

/// Title of the panel shown when a render pass fails.
pub const ERROR_TITLE: &str = "Error Rendering Research Report";

/// Render `report` into `mount`, replacing whatever was there.
///
/// With no mount point this logs a diagnostic and does nothing. Build
/// failures never escape: the mount ends up holding either the complete
/// report tree or the error panel.
pub fn render<D: Dom>(dom: &D, report: &Report, mount: Option<&D::Node>) {
    let Some(mount) = mount else {
        dom.log_error("report mount point not found, skipping render");
        return;
    };

    let outcome = build_report(dom, report).and_then(|tree| {
        dom.clear_children(mount);
        dom.append_child(mount, &tree)
    });

    match outcome {
        Ok(()) => dom.log_info("research report rendered"),
        Err(err) => {
            dom.log_error(&format!("error rendering research report: {err}"));
            show_error(dom, mount, &err);
        }
    }
}

fn build_report<D: Dom>(dom: &D, report: &Report) -> Result<D::Node, RenderError> {
    let container = dom.create_element("div")?;
    dom.set_class(&container, "research-report border p-3 my-4 bg-light");

    let heading = dom.create_element("h2")?;
    dom.set_class(&heading, "text-primary mb-4");
    dom.set_text(&heading, &report.health_target);
    dom.append_child(&container, &heading)?;

    let mechanisms = dom.create_element("div")?;
    dom.set_class(&mechanisms, "mechanisms-list");
    for mechanism in &report.mechanisms {
        let card = build_mechanism(dom, mechanism)?;
        dom.append_child(&mechanisms, &card)?;
    }
    dom.append_child(&container, &mechanisms)?;

    Ok(container)
}

fn build_mechanism<D: Dom>(dom: &D, mechanism: &Mechanism) -> Result<D::Node, RenderError> {
    let card = dom.create_element("div")?;
    dom.set_class(&card, "mechanism-card card mb-4");

    let header = dom.create_element("div")?;
    dom.set_class(&header, "card-header bg-info text-white");
    dom.set_text(&header, &format!("Mechanism: {}", mechanism.name));
    dom.append_child(&card, &header)?;

    let body = dom.create_element("div")?;
    dom.set_class(&body, "card-body");
    for approach in &mechanism.approaches {
        let section = build_approach(dom, approach)?;
        dom.append_child(&body, &section)?;
    }
    dom.append_child(&card, &body)?;

    Ok(card)
}

fn build_approach<D: Dom>(dom: &D, approach: &Approach) -> Result<D::Node, RenderError> {
    let section = dom.create_element("div")?;
    dom.set_class(&section, "approach-section mb-3 border-bottom pb-3");

    let header = dom.create_element("h4")?;
    dom.set_class(&header, "text-success");
    dom.set_text(&header, &format!("Approach: {}", approach.name));
    dom.append_child(&section, &header)?;

    for hack in &approach.health_hacks {
        let block = build_hack(dom, hack)?;
        dom.append_child(&section, &block)?;
    }

    Ok(section)
}

fn build_hack<D: Dom>(dom: &D, hack: &HealthHack) -> Result<D::Node, RenderError> {
    let block = dom.create_element("div")?;
    dom.set_class(&block, "hack-section ms-3 mb-2");

    let header = dom.create_element("h5")?;
    dom.set_text(&header, &format!("Health Hack: {}", hack.name));
    dom.append_child(&block, &header)?;

    let products = dom.create_element("ul")?;
    dom.set_class(&products, "list-group");
    for product in &hack.products {
        let item = build_product(dom, product)?;
        dom.append_child(&products, &item)?;
    }
    dom.append_child(&block, &products)?;

    Ok(block)
}

fn build_product<D: Dom>(dom: &D, product: &Product) -> Result<D::Node, RenderError> {
    let item = dom.create_element("li")?;
    dom.set_class(&item, "list-group-item");

    let name = dom.create_element("strong")?;
    dom.set_text(&name, &product.name);
    dom.append_child(&item, &name)?;

    let gap = dom.create_element("br")?;
    dom.append_child(&item, &gap)?;

    let description = dom.create_element("p")?;
    dom.set_class(&description, "mb-0 mt-1");
    dom.set_text(&description, &product.description);
    dom.append_child(&item, &description)?;

    Ok(item)
}

/// Replace the mount content with the error panel for `err`.
fn show_error<D: Dom>(dom: &D, mount: &D::Node, err: &RenderError) {
    dom.clear_children(mount);

    let attached = build_panel(dom, err).and_then(|panel| dom.append_child(mount, &panel));
    if attached.is_err() {
        dom.log_error("failed to attach the render error panel");
    }
}

fn build_panel<D: Dom>(dom: &D, err: &RenderError) -> Result<D::Node, RenderError> {
    let panel = dom.create_element("div")?;
    dom.set_class(&panel, "alert alert-danger");

    let title = dom.create_element("h3")?;
    dom.set_text(&title, ERROR_TITLE);
    dom.append_child(&panel, &title)?;

    let message = dom.create_element("p")?;
    dom.set_text(&message, &err.to_string());
    dom.append_child(&panel, &message)?;

    Ok(panel)
}
