pub mod app;
pub mod components;

use components::counter::Counter;

/// Mounts a counter widget onto `root` and renders its initial label.
///
/// The caller supplies the mount element explicitly; the widget never
/// reaches into the ambient document. Click handling is wired up as part
/// of the render, so the label reads "count is 0" immediately and bumps
/// by one on every click from then on.
pub fn attach(root: web_sys::Element) {
    yew::Renderer::<Counter>::with_root(root).render();
}
