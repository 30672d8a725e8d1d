//! Environment signal contracts consumed by the adaptive layout policy.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

/// Viewport width used when the host cannot report one.
pub const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
/// Viewport height used when the host cannot report one.
pub const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

/// Preferred color scheme reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    /// `prefers-color-scheme: dark` (also the fallback).
    Dark,
    /// `prefers-color-scheme: light`.
    Light,
}

/// Raw environment readings. Every field has a conservative fallback so a failing detection
/// never aborts layout computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSignals {
    /// Inner viewport width in CSS pixels.
    pub viewport_width: i32,
    /// Inner viewport height in CSS pixels.
    pub viewport_height: i32,
    /// `devicePixelRatio`.
    pub device_pixel_ratio: f64,
    /// Touch input present (`ontouchstart` or `maxTouchPoints > 0`).
    pub touch: bool,
    /// `(hover: hover)`.
    pub hover: bool,
    /// `(pointer: fine)`.
    pub fine_pointer: bool,
    /// `(prefers-reduced-motion: reduce)`.
    pub reduced_motion: bool,
    /// `(prefers-contrast: high)`.
    pub high_contrast: bool,
    /// `(prefers-color-scheme: ...)`.
    pub color_scheme: ColorScheme,
}

impl Default for EnvironmentSignals {
    fn default() -> Self {
        Self {
            viewport_width: FALLBACK_VIEWPORT_WIDTH,
            viewport_height: FALLBACK_VIEWPORT_HEIGHT,
            device_pixel_ratio: 1.0,
            touch: false,
            hover: true,
            fine_pointer: true,
            reduced_motion: false,
            high_contrast: false,
            color_scheme: ColorScheme::Dark,
        }
    }
}

impl EnvironmentSignals {
    /// Returns the fallback signals with a specific viewport size.
    pub fn with_viewport(width: i32, height: i32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            ..Self::default()
        }
    }

    /// Returns the signals of a touch-primary device (touch, no hover, coarse pointer).
    pub fn touch_primary(self) -> Self {
        Self {
            touch: true,
            hover: false,
            fine_pointer: false,
            ..self
        }
    }
}

/// Host service reporting the current environment signals.
pub trait EnvironmentProbe {
    /// Reads the current signals. Implementations must not fail; they fall back per field.
    fn probe(&self) -> EnvironmentSignals;
}

#[derive(Debug, Clone, Default)]
/// Probe returning caller-controlled signals, for tests and non-browser targets.
pub struct StaticEnvironmentProbe {
    signals: Rc<RefCell<EnvironmentSignals>>,
}

impl StaticEnvironmentProbe {
    /// Creates a probe reporting `signals` until [`Self::set`] is called.
    pub fn new(signals: EnvironmentSignals) -> Self {
        Self {
            signals: Rc::new(RefCell::new(signals)),
        }
    }

    /// Replaces the reported signals. Clones observe the change.
    pub fn set(&self, signals: EnvironmentSignals) {
        *self.signals.borrow_mut() = signals;
    }
}

impl EnvironmentProbe for StaticEnvironmentProbe {
    fn probe(&self) -> EnvironmentSignals {
        *self.signals.borrow()
    }
}
