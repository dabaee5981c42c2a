//! Render-facing view of a [`NavigationController`].
//!
//! All direction handling lives here. The controller keeps positional
//! semantics; under RTL the *visual* right arrow is wired to `Prev` and the
//! left arrow to `Next`. Disabled state is always derived from the
//! positional page index, so nothing gets flipped twice.

use super::controller::NavigationController;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowSide {
    Left,
    Right,
}

impl ArrowSide {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ArrowSide::Left => "carousel__arrow--left",
            ArrowSide::Right => "carousel__arrow--right",
        }
    }
}

/// Everything a renderer may ask the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    GoToPage(usize),
    MoveToSlide(usize),
}

/// Direction of an already recognized swipe (content moves that way).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// One arrow button as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowControl {
    pub side: ArrowSide,
    pub command: NavCommand,
    pub disabled: bool,
    /// Which chevron to draw; always follows the visual side.
    pub points_right: bool,
}

impl ArrowControl {
    /// Accessible label message id.
    pub fn label_key(&self) -> &'static str {
        match self.command {
            NavCommand::Next => "carousel-next-page",
            _ => "carousel-previous-page",
        }
    }

    /// Primary styling goes to the arrow that advances.
    pub fn is_primary(&self) -> bool {
        self.command == NavCommand::Next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationDot {
    pub page: usize,
    pub active: bool,
}

impl PaginationDot {
    pub fn command(&self) -> NavCommand {
        NavCommand::GoToPage(self.page)
    }
}

/// Command wired to the arrow drawn on `side`.
pub fn command_for(side: ArrowSide, rtl: bool) -> NavCommand {
    match (side, rtl) {
        (ArrowSide::Left, false) | (ArrowSide::Right, true) => NavCommand::Prev,
        (ArrowSide::Right, false) | (ArrowSide::Left, true) => NavCommand::Next,
    }
}

/// Both arrows in visual order: left, then right.
pub fn arrows(controller: &NavigationController) -> [ArrowControl; 2] {
    let rtl = controller.is_rtl();
    [ArrowSide::Left, ArrowSide::Right].map(|side| {
        let command = command_for(side, rtl);
        let disabled = match command {
            NavCommand::Next => controller.is_last_page(),
            _ => controller.is_first_page(),
        };
        ArrowControl {
            side,
            command,
            disabled,
            points_right: side == ArrowSide::Right,
        }
    })
}

pub fn dots(controller: &NavigationController) -> Vec<PaginationDot> {
    let current = controller.current_page();
    (0..controller.page_count())
        .map(|page| PaginationDot {
            page,
            active: page == current,
        })
        .collect()
}

/// Arrows and dots are only worth drawing with more than one page.
pub fn controls_visible(controller: &NavigationController) -> bool {
    controller.page_count() > 1
}

/// Keyboard mapping by `KeyboardEvent.key` name.
///
/// Arrow keys follow the on-screen arrows, so they mirror under RTL.
pub fn command_for_key(key: &str, controller: &NavigationController) -> Option<NavCommand> {
    let rtl = controller.is_rtl();
    match key {
        "ArrowLeft" => Some(command_for(ArrowSide::Left, rtl)),
        "ArrowRight" => Some(command_for(ArrowSide::Right, rtl)),
        "Home" => Some(NavCommand::GoToPage(0)),
        "End" => Some(NavCommand::GoToPage(
            controller.page_count().saturating_sub(1),
        )),
        _ => None,
    }
}

/// Swiping content to the left reveals what sits on the right, so it acts
/// like pressing the right arrow.
pub fn command_for_swipe(direction: SwipeDirection, rtl: bool) -> NavCommand {
    match direction {
        SwipeDirection::Left => command_for(ArrowSide::Right, rtl),
        SwipeDirection::Right => command_for(ArrowSide::Left, rtl),
    }
}

/// Run `command`; returns whether the slide index changed.
pub fn apply(controller: &mut NavigationController, command: NavCommand) -> bool {
    match command {
        NavCommand::Next => controller.next_page(),
        NavCommand::Prev => controller.prev_page(),
        NavCommand::GoToPage(page) => controller.go_to_page(page),
        NavCommand::MoveToSlide(slide) => controller.move_to_slide(slide),
    }
}
