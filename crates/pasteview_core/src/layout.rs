//! Responsive breakpoint tracking for the paste page.

use crate::config::Config;
use crate::gutter::{GutterSurface, LineGutter, Location, Viewport};
use tracing::debug;

/// Which container hosts the paste controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlPlacement {
    Phone,
    Desktop,
}

impl ControlPlacement {
    /// Placement for a narrow-layout media query result.
    pub fn for_match(narrow: bool) -> Self {
        if narrow {
            Self::Phone
        } else {
            Self::Desktop
        }
    }

    /// Element id of the container the controls move into.
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Phone => "phone-paste-control-container",
            Self::Desktop => "desktop-paste-control-container",
        }
    }
}

/// Forwards a media query's result only when it actually changes.
///
/// Browsers may report the same result repeatedly (listener registration,
/// resize storms); repeated results are swallowed.
#[derive(Clone, Debug)]
pub struct MediaQueryWatcher {
    query: String,
    last_match: Option<bool>,
}

impl MediaQueryWatcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            last_match: None,
        }
    }

    /// Watch the configured narrow-layout query.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.narrow_layout_query.clone())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn last_match(&self) -> Option<bool> {
        self.last_match
    }

    /// Record a result; the first observation always counts as a change.
    ///
    /// # Returns
    /// The new control placement when the result changed, otherwise `None`.
    pub fn observe(&mut self, matches: bool) -> Option<ControlPlacement> {
        if self.last_match == Some(matches) {
            return None;
        }
        self.last_match = Some(matches);
        let placement = ControlPlacement::for_match(matches);
        debug!(query = %self.query, matches, ?placement, "media query changed");
        Some(placement)
    }

    /// [`Self::observe`], re-aligning the gutter's bars on every change.
    pub fn observe_with_gutter<S, V, L>(
        &mut self,
        matches: bool,
        gutter: Option<&mut LineGutter<S, V, L>>,
    ) -> Option<ControlPlacement>
    where
        S: GutterSurface,
        V: Viewport,
        L: Location,
    {
        let placement = self.observe(matches)?;
        if let Some(gutter) = gutter {
            gutter.on_layout_environment_change();
        }
        Some(placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_NARROW_LAYOUT_QUERY;

    #[test]
    fn first_observation_is_forwarded() {
        let mut watcher = MediaQueryWatcher::new(DEFAULT_NARROW_LAYOUT_QUERY);
        assert_eq!(watcher.last_match(), None);
        assert_eq!(watcher.observe(false), Some(ControlPlacement::Desktop));
        assert_eq!(watcher.last_match(), Some(false));
    }

    #[test]
    fn repeated_results_are_swallowed() {
        let mut watcher = MediaQueryWatcher::new(DEFAULT_NARROW_LAYOUT_QUERY);
        assert_eq!(watcher.observe(true), Some(ControlPlacement::Phone));
        assert_eq!(watcher.observe(true), None);
        assert_eq!(watcher.observe(false), Some(ControlPlacement::Desktop));
        assert_eq!(watcher.observe(false), None);
    }

    #[test]
    fn from_config_uses_configured_query() {
        let config = Config {
            narrow_layout_query: "screen and (max-width: 480px)".to_string(),
            ..Config::default()
        };
        let watcher = MediaQueryWatcher::from_config(&config);
        assert_eq!(watcher.query(), "screen and (max-width: 480px)");
    }

    #[test]
    fn placement_maps_to_container_ids() {
        assert_eq!(
            ControlPlacement::Phone.container_id(),
            "phone-paste-control-container"
        );
        assert_eq!(
            ControlPlacement::Desktop.container_id(),
            "desktop-paste-control-container"
        );
    }
}
