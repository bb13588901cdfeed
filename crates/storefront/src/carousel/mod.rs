//! Hero carousel.
//!
//! [`Carousel`] is the state machine: which slide is showing and how far the
//! progress bar has filled. [`spawn`] drives it from a periodic tokio timer.
//!
//! Progress is counted in whole ticks. A slide lasts
//! `ceil(slide_duration / tick_interval)` ticks, so the rotation happens on an
//! exact tick count and the percentage shown to the user is derived from it.
//!
//! Manual navigation resets progress but leaves the timer alone: the next
//! tick fires on the usual cadence.

mod driver;
mod slides;

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

pub use driver::{CarouselHandle, spawn};
pub use slides::{Slide, hero_slides};

/// Reference slide duration.
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(7000);
/// Reference tick interval.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors building a carousel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one slide.
    #[error("carousel has no slides")]
    NoSlides,
    /// The tick interval must be positive.
    #[error("tick interval must be greater than zero")]
    ZeroInterval,
}

/// How long each slide shows and how often the timer ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    slide_duration: Duration,
    tick_interval: Duration,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            slide_duration: DEFAULT_SLIDE_DURATION,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl CarouselTiming {
    /// Create a timing.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::ZeroInterval`] if `tick_interval` is zero.
    pub fn new(slide_duration: Duration, tick_interval: Duration) -> Result<Self, CarouselError> {
        if tick_interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self {
            slide_duration,
            tick_interval,
        })
    }

    #[must_use]
    pub const fn slide_duration(&self) -> Duration {
        self.slide_duration
    }

    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Ticks per slide: `ceil(slide_duration / tick_interval)`, at least 1.
    #[must_use]
    pub fn ticks_per_slide(&self) -> u32 {
        let slide = self.slide_duration.as_nanos();
        let tick = self.tick_interval.as_nanos().max(1);
        u32::try_from(slide.div_ceil(tick)).unwrap_or(u32::MAX).max(1)
    }
}

/// Observable carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideState {
    /// 0-based index of the slide showing.
    pub current_index: usize,
    /// Ticks elapsed on the current slide, always `< ticks_per_slide`.
    pub elapsed_ticks: u32,
    pub ticks_per_slide: u32,
}

impl SlideState {
    /// Progress bar fill in `[0, 100)`.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.elapsed_ticks) * 100.0 / f64::from(self.ticks_per_slide.max(1))
    }
}

/// The carousel state machine.
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    timing: CarouselTiming,
    ticks_per_slide: u32,
    current_index: usize,
    elapsed_ticks: u32,
}

impl Carousel {
    /// Create a carousel showing the first slide with an empty progress bar.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::NoSlides`] if `slides` is empty.
    pub fn new(slides: Vec<Slide>, timing: CarouselTiming) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self {
            slides,
            ticks_per_slide: timing.ticks_per_slide(),
            timing,
            current_index: 0,
            elapsed_ticks: 0,
        })
    }

    /// The home page hero with the given timing.
    #[must_use]
    pub fn hero(timing: CarouselTiming) -> Self {
        Self {
            slides: hero_slides(),
            ticks_per_slide: timing.ticks_per_slide(),
            timing,
            current_index: 0,
            elapsed_ticks: 0,
        }
    }

    #[must_use]
    pub const fn timing(&self) -> CarouselTiming {
        self.timing
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// The slide showing.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current_index)
    }

    #[must_use]
    pub const fn state(&self) -> SlideState {
        SlideState {
            current_index: self.current_index,
            elapsed_ticks: self.elapsed_ticks,
            ticks_per_slide: self.ticks_per_slide,
        }
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.state().progress_percent()
    }

    /// One timer tick. Returns `true` if the slide advanced.
    pub fn tick(&mut self) -> bool {
        self.elapsed_ticks += 1;
        if self.elapsed_ticks >= self.ticks_per_slide {
            self.current_index = (self.current_index + 1) % self.slides.len();
            self.elapsed_ticks = 0;
            true
        } else {
            false
        }
    }

    /// Jump to a slide and reset progress. The index wraps around.
    pub fn go_to_slide(&mut self, index: usize) {
        self.current_index = index % self.slides.len();
        self.elapsed_ticks = 0;
    }

    /// Manual "next".
    pub fn next_slide(&mut self) {
        self.go_to_slide(self.current_index + 1);
    }

    /// Manual "previous".
    pub fn previous_slide(&mut self) {
        let count = self.slides.len();
        self.go_to_slide(self.current_index + count - 1);
    }

    /// `"01 / 04"`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{:02} / {:02}", self.current_index + 1, self.slides.len())
    }
}
