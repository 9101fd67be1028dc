//! Keep the highlighted row visible.
use std::time::Duration;

/// The default auto-scroll repeat interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(40);

/// A scrollable viewport over a vertical list of rows.
///
/// Offsets grow downward; `offset` is the distance between the top of
/// the content and the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    offset: f32,
    height: f32,
}

impl Viewport {
    /// Creates a viewport of the given height, scrolled to the top.
    #[must_use]
    pub fn new(height: f32) -> Self {
        Self {
            offset: 0.0,
            height: height.max(0.0),
        }
    }

    /// The current scroll offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The viewport height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Scrolls the minimum amount needed to bring a row into view.
    ///
    /// Nearest alignment: a row above the viewport aligns to the top
    /// edge, a row below aligns to the bottom edge, and a row already
    /// in view does not move the viewport at all.
    pub fn scroll_to_nearest(&mut self, row_top: f32, row_height: f32) {
        let row_bottom = row_top + row_height;

        if row_top < self.offset {
            self.offset = row_top;
        } else if row_bottom > self.offset + self.height {
            self.offset = row_bottom - self.height;
        }
    }
}

/// The direction of a scroll affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the first row.
    Up,
    /// Towards the last row.
    Down,
}

/// A repeating cursor-stepping task driven by hovering a scroll
/// affordance.
///
/// The level owning the task feeds it elapsed time; every full
/// interval yields one cursor step. Dropping the task is its
/// cancellation. A level holds at most one, and replaces it before
/// starting another, so repeats can never overlap.
#[derive(Debug, Clone)]
pub struct AutoScroll {
    direction: Direction,
    interval: Duration,
    carry: Duration,
}

impl AutoScroll {
    /// Creates a repeating task with the default 40ms interval.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            interval: DEFAULT_INTERVAL,
            carry: Duration::ZERO,
        }
    }

    /// Overrides the repeat interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    /// The direction this task steps in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Feeds elapsed time to the task and returns how many cursor
    /// steps are due.
    ///
    /// Unused remainder time carries over, so uneven tick sizes still
    /// produce steady stepping.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.carry += elapsed;

        let mut steps = 0;
        while self.carry >= self.interval {
            self.carry -= self.interval;
            steps += 1;
        }

        steps
    }
}
