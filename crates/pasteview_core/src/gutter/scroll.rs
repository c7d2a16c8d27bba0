//! Minimal scroll policy for bringing a gutter entry into view.

/// Scroll target that brings an element into view with the smallest jump.
///
/// An element above the viewport aligns its top with the viewport top; one
/// below aligns its bottom with the viewport bottom. A visible element needs
/// no scroll and yields `None`.
pub fn minimal_scroll_target(
    element_top: f32,
    element_outer_height: f32,
    view_top: f32,
    view_height: f32,
) -> Option<f32> {
    if element_top < view_top {
        Some(element_top)
    } else if element_top + element_outer_height > view_top + view_height {
        Some(element_top - view_height + element_outer_height)
    } else {
        None
    }
}
