//! `#L<n>` deep-link fragment codec.
//!
//! The fragment is the only addressable state of the paste view. Selecting
//! line `n` writes `#Ln`; loading a page with `#Ln` restores the selection.

use crate::constants::LINE_FRAGMENT_PREFIX;
use std::fmt;
use std::num::NonZeroUsize;

/// A 1-based line reference carried in the location fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineFragment(NonZeroUsize);

impl LineFragment {
    /// Build a reference to `line`; `None` for line 0.
    pub fn new(line: usize) -> Option<Self> {
        NonZeroUsize::new(line).map(Self)
    }

    /// The 1-based line number.
    pub fn line(self) -> usize {
        self.0.get()
    }

    /// Parse a location fragment.
    ///
    /// The leading `#` is optional. Anything but `L` followed by ASCII digits
    /// with a non-zero value resolves to `None`.
    pub fn parse(fragment: &str) -> Option<Self> {
        let body = fragment.strip_prefix('#').unwrap_or(fragment);
        let digits = body.strip_prefix(&LINE_FRAGMENT_PREFIX[1..])?;
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        digits.parse::<usize>().ok().and_then(Self::new)
    }
}

impl fmt::Display for LineFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", LINE_FRAGMENT_PREFIX, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::LineFragment;

    #[test]
    fn parses_canonical_fragment() {
        assert_eq!(LineFragment::parse("#L2").map(LineFragment::line), Some(2));
        assert_eq!(
            LineFragment::parse("#L1048576").map(LineFragment::line),
            Some(1_048_576)
        );
        assert_eq!(LineFragment::parse("L7").map(LineFragment::line), Some(7));
    }

    #[test]
    fn rejects_non_matching_fragments() {
        for fragment in [
            "", "#", "#foo", "#L", "#L0", "#L-1", "#L+3", "#L3a", "#l3", "#L 3", "#3",
            "#L99999999999999999999999999",
        ] {
            assert_eq!(LineFragment::parse(fragment), None, "fragment: {fragment:?}");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for line in [1usize, 2, 10, 4096] {
            let fragment = LineFragment::new(line).expect("non-zero").to_string();
            assert_eq!(fragment, format!("#L{line}"));
            assert_eq!(LineFragment::parse(&fragment).map(LineFragment::line), Some(line));
        }
    }

    #[test]
    fn zero_is_not_a_line() {
        assert!(LineFragment::new(0).is_none());
    }
}
