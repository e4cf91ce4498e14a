//! Testimonial carousel: cursor and autoplay.
//!
//! DESIGN
//! ======
//! The cursor wraps in both directions over a fixed, non-empty card count.
//! Autoplay is an explicit state machine rather than a loose flag so the
//! difference between a hover pause (resumes on leave) and a manual
//! navigation (never resumes) is encoded in one place. Transitions return a
//! [`TimerCommand`]; the browser binding owns the interval handle and applies
//! the command, which keeps at most one timer alive.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Arrow-key navigation inside the carousel container.
#[must_use]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowRight" | "ArrowDown" => Some(Direction::Next),
        "ArrowLeft" | "ArrowUp" => Some(Direction::Previous),
        _ => None,
    }
}

/// Index of the highlighted card, always `< len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// A cursor at index 0, or `None` when there is nothing to point at.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of cards the cursor wraps over.
    #[must_use]
    pub fn count(&self) -> usize {
        self.len
    }

    /// Move one card in `direction`, wrapping at either end.
    pub fn step(&mut self, direction: Direction) -> usize {
        self.index = match direction {
            Direction::Next => (self.index + 1) % self.len,
            Direction::Previous => (self.index + self.len - 1) % self.len,
        };
        self.index
    }
}

/// What the binding should do with the interval handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    /// Drop any existing interval and create a fresh one.
    Start,
    /// Drop the interval.
    Stop,
    /// Leave the handle as it is.
    Keep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Autoplay {
    Running,
    PausedByHover,
    /// A manual previous/next ended autoplay for the rest of the page's life.
    StoppedByInteraction,
    /// Reduced motion requested; autoplay never starts.
    Disabled,
}

impl Autoplay {
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        if reduced_motion { Self::Disabled } else { Self::Running }
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        self == Self::Running
    }

    pub fn hover_enter(&mut self) -> TimerCommand {
        if *self == Self::Running {
            *self = Self::PausedByHover;
            return TimerCommand::Stop;
        }
        TimerCommand::Keep
    }

    pub fn hover_leave(&mut self) -> TimerCommand {
        if *self == Self::PausedByHover {
            *self = Self::Running;
            return TimerCommand::Start;
        }
        TimerCommand::Keep
    }

    pub fn manual_navigation(&mut self) -> TimerCommand {
        match self {
            Self::Disabled | Self::StoppedByInteraction => TimerCommand::Keep,
            Self::Running | Self::PausedByHover => {
                *self = Self::StoppedByInteraction;
                TimerCommand::Stop
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselCore {
    cursor: Cursor,
    autoplay: Autoplay,
    /// Hover targets the pointer is currently inside. The buttons may be
    /// nested in the container, so only the outermost enter and leave count.
    hover_depth: usize,
}

impl CarouselCore {
    /// `None` when there are no cards.
    #[must_use]
    pub fn new(len: usize, reduced_motion: bool) -> Option<Self> {
        Some(Self { cursor: Cursor::new(len)?, autoplay: Autoplay::new(reduced_motion), hover_depth: 0 })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    #[must_use]
    pub fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    /// Command to apply once the cards are mounted.
    #[must_use]
    pub fn start(&self) -> TimerCommand {
        if self.autoplay.is_running() { TimerCommand::Start } else { TimerCommand::Keep }
    }

    /// User-driven previous/next. Returns the new index and the timer command.
    pub fn navigate(&mut self, direction: Direction) -> (usize, TimerCommand) {
        let index = self.cursor.step(direction);
        (index, self.autoplay.manual_navigation())
    }

    /// Autoplay interval fired. Advances only while running.
    pub fn tick(&mut self) -> Option<usize> {
        self.autoplay
            .is_running()
            .then(|| self.cursor.step(Direction::Next))
    }

    /// Pointer entered a hover target. Pauses on the first one only.
    pub fn hover_enter(&mut self) -> TimerCommand {
        self.hover_depth += 1;
        if self.hover_depth > 1 {
            return TimerCommand::Keep;
        }
        self.autoplay.hover_enter()
    }

    /// Pointer left a hover target. Resumes once no target is hovered.
    pub fn hover_leave(&mut self) -> TimerCommand {
        let Some(depth) = self.hover_depth.checked_sub(1) else {
            return TimerCommand::Keep;
        };
        self.hover_depth = depth;
        if depth > 0 {
            return TimerCommand::Keep;
        }
        self.autoplay.hover_leave()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hover_depth > 0
    }
}
