//! Paginated carousel navigation.
//!
//! Layers, leaves first:
//! - [`breakpoints`]: viewport width → items-per-view.
//! - [`pages`]: slide ↔ page arithmetic.
//! - [`controller`]: the stateful, direction-agnostic navigation core.
//! - [`adapter`]: what a renderer needs (arrow wiring, dots, key and swipe
//!   mapping), including the RTL mirroring of arrows.
//!
//! Nothing here touches the DOM; the Dioxus section in
//! `components::feature_section` is one consumer.

pub mod adapter;
pub mod breakpoints;
pub mod controller;
pub mod pages;

pub use adapter::{ArrowControl, ArrowSide, NavCommand, PaginationDot, SwipeDirection};
pub use breakpoints::{Breakpoint, BreakpointTable, SlidesPerView};
pub use controller::{CarouselConfig, NavigationController, SlideListener};
pub use pages::PageMap;

/// Fatal configuration problems; a carousel cannot be built from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("breakpoint table is empty")]
    EmptyBreakpoints,
    #[error("no breakpoint resolves to at least one item per view")]
    NoUsableBreakpoint,
}
