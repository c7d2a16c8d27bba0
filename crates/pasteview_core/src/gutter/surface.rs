//! Host interfaces the gutter drives: the rendered surface, the scrollable
//! viewport, and the navigational location.
//!
//! Entry indices are zero-based positions in the gutter (entry `0` carries
//! label `1`). Measurements are in CSS pixels.

/// The two highlight overlays aligned to gutter entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HighlightBar {
    /// Follows the pointer; never persisted.
    Hover,
    /// Marks the clicked line; mirrored into the location fragment.
    Perma,
}

/// Rendered gutter, source block and highlight bars.
pub trait GutterSurface {
    /// Replace every gutter entry with labels `1..=count`, in order.
    ///
    /// Per-entry handlers bound before this call are gone afterwards.
    fn render_entries(&mut self, count: usize);

    /// Top of an entry relative to the gutter container, `None` when absent.
    fn entry_offset_top(&self, entry: usize) -> Option<f32>;

    /// Entry height including margins.
    fn entry_outer_height(&self, entry: usize) -> Option<f32>;

    /// Offset of the gutter container itself inside its scrolling ancestor.
    fn container_offset_top(&self) -> f32;

    /// Width of the source text block, `None` when the page has none.
    fn source_width(&self) -> Option<f32>;

    /// Re-measure the gutter width and shift the text area beside it.
    fn apply_gutter_width(&mut self);

    /// Move `bar` to `top`, size it to `width` and make it visible.
    fn place_bar(&mut self, bar: HighlightBar, top: f32, width: f32);

    fn hide_bar(&mut self, bar: HighlightBar);

    /// Attach hover/click handlers to each current entry.
    fn bind_entry_handlers(&mut self);

    /// Attach one delegated handler on the container.
    fn bind_container_handlers(&mut self);
}

/// Window scroll state.
pub trait Viewport {
    fn scroll_top(&self) -> f32;
    fn height(&self) -> f32;
    fn set_scroll_top(&mut self, top: f32);
}

/// Navigational location fragment (`#...`).
pub trait Location {
    /// Current fragment including the leading `#`, or empty.
    fn fragment(&self) -> String;

    /// Replace the current history entry's fragment; `None` removes it.
    ///
    /// Implementations must not push a new history entry.
    fn replace_fragment(&mut self, fragment: Option<&str>);
}
