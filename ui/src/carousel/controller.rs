//! Navigation state for a paginated carousel.
//!
//! The controller only knows positions: `next_page` always moves toward
//! higher slide indices, whatever the text direction. Mirroring arrows for
//! right-to-left locales happens in [`super::adapter`].

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::breakpoints::{Breakpoint, BreakpointTable};
use super::pages::PageMap;
use super::CarouselError;

/// Construction-time settings for one carousel instance.
///
/// The breakpoint entries are validated by [`NavigationController::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    pub total_items: usize,
    pub breakpoints: Vec<Breakpoint>,
    #[serde(default)]
    pub rtl: bool,
    #[serde(default)]
    pub initial_slide: usize,
    /// Width used for the first items-per-view resolution.
    #[serde(default)]
    pub viewport_width: u32,
}

impl CarouselConfig {
    pub fn new(total_items: usize, breakpoints: Vec<Breakpoint>) -> Self {
        Self {
            total_items,
            breakpoints,
            rtl: false,
            initial_slide: 0,
            viewport_width: 0,
        }
    }

    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn initial_slide(mut self, slide: usize) -> Self {
        self.initial_slide = slide;
        self
    }

    pub fn viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = width;
        self
    }
}

/// Called with the new slide index after every change.
pub type SlideListener = Rc<dyn Fn(usize)>;

#[derive(Clone)]
pub struct NavigationController {
    breakpoints: BreakpointTable,
    rtl: bool,
    viewport_width: u32,
    pages: PageMap,
    current_slide: usize,
    listener: Option<SlideListener>,
}

impl NavigationController {
    pub fn new(config: CarouselConfig) -> Result<Self, CarouselError> {
        let CarouselConfig {
            total_items,
            breakpoints,
            rtl,
            initial_slide,
            viewport_width,
        } = config;

        let breakpoints = BreakpointTable::new(breakpoints)?;
        let pages = PageMap::new(total_items, breakpoints.resolve(viewport_width));
        let mut controller = Self {
            breakpoints,
            rtl,
            viewport_width,
            pages,
            current_slide: 0,
            listener: None,
        };
        controller.current_slide = controller.clamp_slide(initial_slide);
        Ok(controller)
    }

    pub fn set_listener(&mut self, listener: SlideListener) {
        self.listener = Some(listener);
    }

    /// Rebuild for a new text direction, keeping position and listener.
    pub fn with_direction(&self, rtl: bool) -> Self {
        Self {
            rtl,
            ..self.clone()
        }
    }

    /// Re-resolve items-per-view for a new viewport width.
    ///
    /// The slide index is kept, so the page index may change.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
        let items_per_view = self.breakpoints.resolve(width);
        if items_per_view != self.pages.items_per_view() {
            debug!(
                width,
                items_per_view, "carousel: items-per-view changed on resize"
            );
            self.pages = PageMap::new(self.pages.total_items(), items_per_view);
        }
    }

    // Commands. Each returns whether the slide index changed.

    pub fn move_to_slide(&mut self, index: usize) -> bool {
        let target = self.clamp_slide(index);
        self.commit(target)
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let Some(last_page) = self.last_page() else {
            return false;
        };
        let target = self.pages.page_to_slide(page.min(last_page));
        self.commit(target)
    }

    pub fn next_page(&mut self) -> bool {
        match self.last_page() {
            Some(last_page) if self.current_page() < last_page => {
                self.go_to_page(self.current_page() + 1)
            }
            _ => false,
        }
    }

    pub fn prev_page(&mut self) -> bool {
        match self.current_page() {
            0 => false,
            page => self.go_to_page(page - 1),
        }
    }

    // Queries.

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn current_page(&self) -> usize {
        self.pages.slide_to_page(self.current_slide)
    }

    pub fn page_count(&self) -> usize {
        self.pages.page_count()
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page() == 0
    }

    /// Also true for an empty carousel.
    pub fn is_last_page(&self) -> bool {
        self.last_page()
            .map_or(true, |last_page| self.current_page() == last_page)
    }

    pub fn items_per_view(&self) -> usize {
        self.pages.items_per_view()
    }

    pub fn total_items(&self) -> usize {
        self.pages.total_items()
    }

    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn page_map(&self) -> PageMap {
        self.pages
    }

    fn last_page(&self) -> Option<usize> {
        self.page_count().checked_sub(1)
    }

    fn clamp_slide(&self, index: usize) -> usize {
        index.min(self.pages.total_items().saturating_sub(1))
    }

    fn commit(&mut self, target: usize) -> bool {
        if target == self.current_slide {
            return false;
        }
        debug!(
            from = self.current_slide,
            to = target,
            "carousel: slide changed"
        );
        self.current_slide = target;
        if let Some(listener) = &self.listener {
            listener(target);
        }
        true
    }
}

impl fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("breakpoints", &self.breakpoints)
            .field("rtl", &self.rtl)
            .field("viewport_width", &self.viewport_width)
            .field("pages", &self.pages)
            .field("current_slide", &self.current_slide)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl PartialEq for NavigationController {
    fn eq(&self, other: &Self) -> bool {
        self.breakpoints == other.breakpoints
            && self.rtl == other.rtl
            && self.viewport_width == other.viewport_width
            && self.pages == other.pages
            && self.current_slide == other.current_slide
    }
}
