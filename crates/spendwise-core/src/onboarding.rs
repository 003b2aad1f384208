//! Onboarding carousel controller
//!
//! A horizontally paged deck of intro pages with a single source of truth for
//! the current page index. Two producers feed it: the passive path reconciles
//! the index against continuous scroll offsets, the active path jumps pages
//! imperatively. The imperative path updates the index synchronously and hands
//! back a fire-and-forget [`ScrollTo`] for the view layer to animate; it never
//! waits for the animation.

use serde::{Deserialize, Serialize};

/// Indicator cell width for the current page's dot.
pub const DOT_ACTIVE_WIDTH: u16 = 3;
/// Indicator cell width for every other dot.
pub const DOT_INACTIVE_WIDTH: u16 = 1;

/// Symbolic icon shown in the bottom sheet of an onboarding page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageIcon {
    Wallet,
    PieChart,
    Trophy,
}

/// One unit of onboarding content.
#[derive(Debug, Clone)]
pub struct Page {
    pub id: u32,
    /// Reference to the page's hero image asset.
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: PageIcon,
}

/// The fixed onboarding deck, ordered.
pub fn onboarding_pages() -> Vec<Page> {
    vec![
        Page {
            id: 1,
            image: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=800&h=1200&fit=crop",
            title: "Track Every Expense",
            description: "Easily record and categorize your daily expenses to understand where your money goes.",
            icon: PageIcon::Wallet,
        },
        Page {
            id: 2,
            image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=1200&fit=crop",
            title: "Smart Budget Management",
            description: "Set budgets for different categories and get alerts when you're close to your limits.",
            icon: PageIcon::PieChart,
        },
        Page {
            id: 3,
            image: "https://images.unsplash.com/photo-1579621970563-ebec7560ff3e?w=800&h=1200&fit=crop",
            title: "Achieve Financial Goals",
            description: "Visualize your spending patterns and make informed decisions to reach your financial goals.",
            icon: PageIcon::Trophy,
        },
    ]
}

/// Fire-and-forget request to animate the viewport to an absolute offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTo {
    pub offset: f32,
}

/// Carousel state controller. Owns `current_index`; nothing else mutates it.
#[derive(Debug)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    /// A carousel always has at least one page.
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_last(&self) -> bool {
        self.current == self.len - 1
    }

    /// Skip is shown on every page except the last; the finish affordance
    /// takes its place there. Exactly one of the two is ever visible.
    pub fn skip_visible(&self) -> bool {
        !self.is_last()
    }

    /// Passive reconciliation: derive the dominant page from the scroll
    /// offset. Safe to call at any frequency; a repeat offset is a no-op.
    /// Returns whether the index changed.
    pub fn on_scroll(&mut self, offset: f32, viewport_width: f32) -> bool {
        if viewport_width <= 0.0 {
            // Not laid out yet
            return false;
        }
        let candidate = (offset / viewport_width).round().max(0.0) as usize;
        let candidate = candidate.min(self.len - 1);
        if candidate != self.current {
            self.current = candidate;
            true
        } else {
            false
        }
    }

    /// Imperative jump. Out-of-range indices are clamped, matching the
    /// clamping on the passive path so the two producers agree. The index is
    /// updated before the returned animation request is even issued.
    pub fn go_to_page(&mut self, index: usize, viewport_width: f32) -> ScrollTo {
        let index = index.min(self.len - 1);
        self.current = index;
        ScrollTo {
            offset: index as f32 * viewport_width,
        }
    }

    /// Advance one page; no-op on the last page.
    pub fn next(&mut self, viewport_width: f32) -> Option<ScrollTo> {
        if self.is_last() {
            return None;
        }
        Some(self.go_to_page(self.current + 1, viewport_width))
    }

    /// Step back one page; no-op on the first page.
    pub fn previous(&mut self, viewport_width: f32) -> Option<ScrollTo> {
        if self.current == 0 {
            return None;
        }
        Some(self.go_to_page(self.current - 1, viewport_width))
    }

    /// Indicator rule: dot width is a pure function of equality with the
    /// current index. No separate "active dot" state exists.
    pub fn dot_width(&self, index: usize) -> u16 {
        if index == self.current {
            DOT_ACTIVE_WIDTH
        } else {
            DOT_INACTIVE_WIDTH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 80.0;

    #[test]
    fn scroll_reconciles_to_rounded_index() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.on_scroll(2.0 * W, W));
        assert_eq!(carousel.current_index(), 2);

        // Mid-drag offsets round to the dominant page
        assert!(carousel.on_scroll(0.4 * W, W));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.on_scroll(0.6 * W, W));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn scroll_is_idempotent() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.on_scroll(W, W));
        assert!(!carousel.on_scroll(W, W));
        assert!(!carousel.on_scroll(W + 0.1, W));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn scroll_ignores_zero_viewport() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.on_scroll(160.0, 0.0));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn scroll_clamps_overshoot_and_negative_offsets() {
        let mut carousel = Carousel::new(3);
        carousel.on_scroll(10.0 * W, W);
        assert_eq!(carousel.current_index(), 2);
        carousel.on_scroll(-3.0 * W, W);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn go_to_page_updates_index_before_animation() {
        let mut carousel = Carousel::new(3);
        let request = carousel.go_to_page(2, W);
        // Index reflects the target immediately; the scroll catches up later
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(request.offset, 2.0 * W);
    }

    #[test]
    fn go_to_page_clamps_out_of_range() {
        let mut carousel = Carousel::new(3);
        let request = carousel.go_to_page(5, W);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(request.offset, 2.0 * W);
    }

    #[test]
    fn next_stops_at_last_page() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.next(W).is_some());
        assert!(carousel.next(W).is_some());
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.next(W).is_none());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn previous_stops_at_first_page() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.previous(W).is_none());
        carousel.go_to_page(2, W);
        assert!(carousel.previous(W).is_some());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn skip_and_finish_are_mutually_exclusive() {
        let mut carousel = Carousel::new(3);
        for index in 0..3 {
            carousel.go_to_page(index, W);
            assert_eq!(carousel.skip_visible(), index < 2);
            assert_eq!(carousel.is_last(), index == 2);
            assert_ne!(carousel.skip_visible(), carousel.is_last());
        }
    }

    #[test]
    fn dot_width_keys_off_current_index() {
        let mut carousel = Carousel::new(3);
        carousel.go_to_page(1, W);
        assert_eq!(carousel.dot_width(0), DOT_INACTIVE_WIDTH);
        assert_eq!(carousel.dot_width(1), DOT_ACTIVE_WIDTH);
        assert_eq!(carousel.dot_width(2), DOT_INACTIVE_WIDTH);
    }

    #[test]
    fn single_page_deck_is_immediately_last() {
        let mut carousel = Carousel::new(1);
        assert!(carousel.is_last());
        assert!(!carousel.skip_visible());
        assert!(carousel.next(W).is_none());
    }

    #[test]
    fn deck_content_is_ordered() {
        let pages = onboarding_pages();
        assert!(pages.len() >= 1);
        let ids: Vec<u32> = pages.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
