//! Line-number gutter synchronizer.
//!
//! [`LineGutter`] keeps a gutter of line labels in step with a source block
//! (read-only paste view) or the live editor, and ties click-to-select
//! highlighting to the `#L<n>` location fragment. All state lives on the
//! instance; the host page wires its events to the named methods.

pub mod scroll;
pub mod surface;


pub use scroll::minimal_scroll_target;
pub use surface::{GutterSurface, HighlightBar, Location, Viewport};

use crate::fragment::LineFragment;
use crate::text::count_lines;
use tracing::debug;

/// Where the gutter's text comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceMode {
    /// Fixed paste body: counted and rendered once.
    Static,
    /// Editable buffer: re-rendered on every change notification.
    Live,
}

/// Gutter state for one page.
#[derive(Debug)]
pub struct LineGutter<S, V, L> {
    surface: S,
    viewport: V,
    location: L,
    mode: SourceMode,
    tracked: bool,
    rendered_lines: Option<usize>,
    render_count: u64,
    selected: Option<LineFragment>,
    hovered: Option<usize>,
}

fn entry_index(line: usize) -> Option<usize> {
    line.checked_sub(1)
}

impl<S, V, L> LineGutter<S, V, L>
where
    S: GutterSurface,
    V: Viewport,
    L: Location,
{
    pub fn new(surface: S, viewport: V, location: L, mode: SourceMode) -> Self {
        Self {
            surface,
            viewport,
            location,
            mode,
            tracked: false,
            rendered_lines: None,
            render_count: 0,
            selected: None,
            hovered: None,
        }
    }

    /// Build a gutter only when the page actually has a gutter container.
    ///
    /// Pages without one get `None` and every gutter behavior is skipped.
    pub fn mount(surface: Option<S>, viewport: V, location: L, mode: SourceMode) -> Option<Self> {
        match surface {
            Some(surface) => Some(Self::new(surface, viewport, location, mode)),
            None => {
                debug!("no gutter container on this page; line numbers disabled");
                None
            }
        }
    }

    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    /// Line count of the last render, `None` before the first one.
    pub fn rendered_lines(&self) -> Option<usize> {
        self.rendered_lines
    }

    /// Number of renders that actually rebuilt the gutter.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn selected_line(&self) -> Option<usize> {
        self.selected.map(LineFragment::line)
    }

    pub fn hovered_line(&self) -> Option<usize> {
        self.hovered
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Rebuild the gutter with one entry per line.
    ///
    /// Rendering the count that is already displayed does nothing. Live
    /// gutters re-measure their width after every rebuild.
    ///
    /// # Returns
    /// `true` when the gutter was rebuilt.
    pub fn render(&mut self, line_count: usize) -> bool {
        if self.rendered_lines == Some(line_count) {
            return false;
        }
        self.surface.render_entries(line_count);
        self.rendered_lines = Some(line_count);
        self.render_count += 1;
        debug!(lines = line_count, "rendered gutter");

        match self.mode {
            // Fresh entries carry no handlers in static mode.
            SourceMode::Static if self.tracked => self.surface.bind_entry_handlers(),
            SourceMode::Static => {}
            SourceMode::Live => self.surface.apply_gutter_width(),
        }
        true
    }

    /// Start tracking `text`.
    ///
    /// Static sources render once and bind per-entry handlers; later calls
    /// are ignored. Live sources bind one container handler and then behave
    /// like [`Self::on_content_changed`].
    pub fn track(&mut self, text: &str) {
        match self.mode {
            SourceMode::Static => {
                if self.tracked {
                    debug!("static gutter already tracked; ignoring");
                    return;
                }
                self.render(count_lines(text));
                self.surface.bind_entry_handlers();
                self.tracked = true;
            }
            SourceMode::Live => {
                if !self.tracked {
                    self.surface.bind_container_handlers();
                    self.tracked = true;
                }
                self.on_content_changed(text);
            }
        }
    }

    /// Handle a change notification from the live editor.
    ///
    /// Nothing happens unless the line count changed; a rebuild re-measures
    /// the width and then re-aligns or drops the selection.
    pub fn on_content_changed(&mut self, text: &str) {
        if self.mode != SourceMode::Live {
            debug!("content change on a static gutter; ignoring");
            return;
        }
        let line_count = count_lines(text);
        if !self.render(line_count) {
            return;
        }

        if let Some(selected) = self.selected {
            if selected.line() > line_count {
                self.deselect();
            } else {
                self.position_highlight(selected.line(), HighlightBar::Perma);
            }
        }
        if self.hovered.is_some_and(|line| line > line_count) {
            self.handle_hover_end();
        }
    }

    /// Align `bar` with the gutter entry for `line` (1-based).
    ///
    /// The vertical offset is the entry offset plus the container offset so
    /// the bar stays aligned when the gutter sits in a scrolled ancestor.
    ///
    /// # Returns
    /// `false` when the entry or the source block is missing.
    pub fn position_highlight(&mut self, line: usize, bar: HighlightBar) -> bool {
        let Some(top) = self.entry_top(line) else {
            return false;
        };
        let Some(width) = self.surface.source_width() else {
            return false;
        };
        self.surface.place_bar(bar, top, width);
        true
    }

    /// Change the persistent selection.
    ///
    /// The Perma bar, the selection state and the location fragment move
    /// together; the fragment is replaced without adding history. A line
    /// without a gutter entry is still persisted but shows no bar.
    pub fn set_selected_line(&mut self, line: Option<LineFragment>) {
        match line {
            Some(line) => {
                if !self.position_highlight(line.line(), HighlightBar::Perma) {
                    self.surface.hide_bar(HighlightBar::Perma);
                }
                self.selected = Some(line);
                self.location.replace_fragment(Some(&line.to_string()));
            }
            None => {
                self.clear_selection();
                self.location.replace_fragment(None);
            }
        }
    }

    /// Parse a location fragment into a line reference.
    pub fn resolve_line_from_fragment(fragment: &str) -> Option<LineFragment> {
        LineFragment::parse(fragment)
    }

    /// Toggle the persistent selection on `line`.
    pub fn handle_entry_click(&mut self, line: usize) {
        if self.selected_line() == Some(line) {
            self.deselect();
            return;
        }
        let Some(fragment) = LineFragment::new(line) else {
            return;
        };
        if self.entry_top(line).is_none() || self.surface.source_width().is_none() {
            return;
        }
        self.set_selected_line(Some(fragment));
        debug!(line, "selected line");
    }

    pub fn handle_hover(&mut self, line: usize) {
        if self.position_highlight(line, HighlightBar::Hover) {
            self.hovered = Some(line);
        }
    }

    pub fn handle_hover_end(&mut self) {
        self.surface.hide_bar(HighlightBar::Hover);
        self.hovered = None;
    }

    /// Restore the selection named by `fragment` on load or back/forward.
    ///
    /// A fragment that does not resolve to an existing entry leaves the
    /// gutter unselected. The location itself is not rewritten.
    pub fn handle_navigation(&mut self, fragment: &str) {
        let target = Self::resolve_line_from_fragment(fragment)
            .filter(|line| self.rendered_lines.is_some_and(|count| line.line() <= count));
        let Some(target) = target else {
            self.clear_selection();
            return;
        };
        if !self.position_highlight(target.line(), HighlightBar::Perma) {
            self.clear_selection();
            return;
        }
        self.selected = Some(target);
        self.scroll_into_view_minimal(target.line());
        debug!(line = target.line(), "restored selection from fragment");
    }

    /// [`Self::handle_navigation`] for the current location.
    pub fn handle_current_location(&mut self) {
        let fragment = self.location.fragment();
        self.handle_navigation(&fragment);
    }

    /// Scroll the viewport just enough to show the entry for `line`.
    ///
    /// # Returns
    /// `true` when the viewport moved.
    pub fn scroll_into_view_minimal(&mut self, line: usize) -> bool {
        let Some(top) = self.entry_top(line) else {
            return false;
        };
        let height = entry_index(line)
            .and_then(|entry| self.surface.entry_outer_height(entry))
            .unwrap_or(0.0);
        match minimal_scroll_target(top, height, self.viewport.scroll_top(), self.viewport.height())
        {
            Some(target) => {
                self.viewport.set_scroll_top(target);
                true
            }
            None => false,
        }
    }

    /// Re-align visible bars after a breakpoint crossing or resize.
    pub fn on_layout_environment_change(&mut self) {
        if let Some(selected) = self.selected {
            self.position_highlight(selected.line(), HighlightBar::Perma);
        }
        if let Some(hovered) = self.hovered {
            self.position_highlight(hovered, HighlightBar::Hover);
        }
    }

    fn entry_top(&self, line: usize) -> Option<f32> {
        let entry = entry_index(line)?;
        let offset = self.surface.entry_offset_top(entry)?;
        Some(offset + self.surface.container_offset_top())
    }

    fn clear_selection(&mut self) {
        self.surface.hide_bar(HighlightBar::Perma);
        self.selected = None;
    }

    fn deselect(&mut self) {
        self.set_selected_line(None);
        debug!("cleared line selection");
    }
}
