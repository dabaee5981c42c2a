//! Viewport width → items-per-view resolution.

use serde::{Deserialize, Serialize};

use super::CarouselError;

/// A single `(min_width, items_per_view)` threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: u32,
    pub items_per_view: usize,
}

impl Breakpoint {
    pub const fn new(min_width: u32, items_per_view: usize) -> Self {
        Self {
            min_width,
            items_per_view,
        }
    }

    fn usable(&self) -> bool {
        self.items_per_view >= 1
    }
}

/// Ordered threshold table, ascending by `min_width`.
///
/// Construction rejects tables that could never yield a count of at least
/// one, so [`BreakpointTable::resolve`] is infallible afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
}

impl BreakpointTable {
    pub fn new(mut entries: Vec<Breakpoint>) -> Result<Self, CarouselError> {
        if entries.is_empty() {
            return Err(CarouselError::EmptyBreakpoints);
        }
        if !entries.iter().any(Breakpoint::usable) {
            return Err(CarouselError::NoUsableBreakpoint);
        }
        // Stable: entries sharing a `min_width` keep their definition order.
        entries.sort_by_key(|bp| bp.min_width);
        Ok(Self { entries })
    }

    /// Items visible at `width`.
    ///
    /// The greatest `min_width` not exceeding `width` wins; among equal
    /// thresholds the last one defined wins. Below every threshold the
    /// smallest usable entry (the mobile default) applies.
    pub fn resolve(&self, width: u32) -> usize {
        let usable = || self.entries.iter().filter(|bp| bp.usable());
        usable()
            .filter(|bp| bp.min_width <= width)
            .last()
            .or_else(|| usable().next())
            .map(|bp| bp.items_per_view)
            .unwrap_or(1)
    }

    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }
}

impl<'de> Deserialize<'de> for BreakpointTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<Breakpoint>::deserialize(deserializer)?;
        Self::new(entries).map_err(serde::de::Error::custom)
    }
}

/// Tablet threshold in CSS pixels.
pub const TABLET_MIN_WIDTH: u32 = 768;
/// Desktop threshold in CSS pixels.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

/// Per-device slide counts as configured on a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidesPerView {
    pub mobile: usize,
    pub tablet: usize,
    pub desktop: usize,
}

impl Default for SlidesPerView {
    fn default() -> Self {
        Self {
            mobile: 1,
            tablet: 2,
            desktop: 3,
        }
    }
}

impl SlidesPerView {
    /// Entries for the site-wide `0 / 768 / 1024` thresholds.
    pub fn breakpoints(&self) -> Vec<Breakpoint> {
        vec![
            Breakpoint::new(0, self.mobile),
            Breakpoint::new(TABLET_MIN_WIDTH, self.tablet),
            Breakpoint::new(DESKTOP_MIN_WIDTH, self.desktop),
        ]
    }

    pub fn table(&self) -> Result<BreakpointTable, CarouselError> {
        BreakpointTable::new(self.breakpoints())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> BreakpointTable {
        BreakpointTable::new(vec![
            Breakpoint::new(0, 1),
            Breakpoint::new(768, 2),
            Breakpoint::new(1024, 3),
        ])
        .unwrap()
    }

    #[test]
    fn tablet_width_resolves_to_two() {
        assert_eq!(standard().resolve(900), 2);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let table = standard();
        assert_eq!(table.resolve(0), 1);
        assert_eq!(table.resolve(767), 1);
        assert_eq!(table.resolve(768), 2);
        assert_eq!(table.resolve(1024), 3);
        assert_eq!(table.resolve(4000), 3);
    }

    #[test]
    fn unsorted_input_is_ordered() {
        let table = BreakpointTable::new(vec![
            Breakpoint::new(1024, 4),
            Breakpoint::new(0, 1),
        ])
        .unwrap();
        assert_eq!(table.entries()[0].min_width, 0);
        assert_eq!(table.resolve(1200), 4);
    }

    #[test]
    fn last_defined_wins_on_equal_threshold() {
        let table = BreakpointTable::new(vec![
            Breakpoint::new(0, 1),
            Breakpoint::new(768, 2),
            Breakpoint::new(768, 5),
        ])
        .unwrap();
        assert_eq!(table.resolve(800), 5);
    }

    #[test]
    fn narrow_viewport_falls_back_to_smallest_entry() {
        let table = BreakpointTable::new(vec![
            Breakpoint::new(320, 1),
            Breakpoint::new(1024, 3),
        ])
        .unwrap();
        assert_eq!(table.resolve(100), 1);
    }

    #[test]
    fn zero_count_entries_are_skipped() {
        let table = BreakpointTable::new(vec![
            Breakpoint::new(0, 0),
            Breakpoint::new(768, 2),
        ])
        .unwrap();
        assert_eq!(table.resolve(300), 2);
        assert_eq!(table.resolve(900), 2);
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(
            BreakpointTable::new(Vec::new()),
            Err(CarouselError::EmptyBreakpoints)
        );
    }

    #[test]
    fn all_zero_table_is_rejected() {
        assert_eq!(
            BreakpointTable::new(vec![Breakpoint::new(0, 0), Breakpoint::new(768, 0)]),
            Err(CarouselError::NoUsableBreakpoint)
        );
    }

    #[test]
    fn deserialize_validates() {
        let ok: BreakpointTable =
            serde_json::from_str(r#"[{"min_width":0,"items_per_view":1}]"#).unwrap();
        assert_eq!(ok.resolve(2000), 1);
        assert!(serde_json::from_str::<BreakpointTable>("[]").is_err());
    }

    #[test]
    fn slides_per_view_defaults_match_site_layout() {
        let table = SlidesPerView::default().table().unwrap();
        assert_eq!(table, standard());
    }
}
