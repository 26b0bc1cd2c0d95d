//! Hero panel tilt from the pointer (desktop) or gyroscope (mobile).

use crate::constants::{GYRO_TILT_MAX_DEG, POINTER_TILT_MAX_DEG};
use crate::error::ConfigError;
use crate::spring::{Spring, SpringConfig};
use crate::state::InputState;

/// Result of probing the device-orientation API once at startup.
///
/// `Enabled` carries whatever keeps the orientation feed alive (the web
/// frontend stores its event listener there).
#[derive(Debug)]
pub enum OrientationCapability<H> {
    Unsupported,
    Denied,
    Enabled(H),
}

impl<H> OrientationCapability<H> {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unsupported => "unsupported",
            Self::Denied => "denied",
            Self::Enabled(_) => "enabled",
        }
    }
}

/// Which input drives the tilt for the lifetime of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltSource {
    Pointer,
    Orientation,
    /// Mobile device without usable orientation data: the panel stays flat.
    Disabled,
}

impl TiltSource {
    /// Only mobile pages read the gyroscope, so desktops never probe or
    /// attach an orientation listener.
    #[inline]
    pub fn wants_orientation(is_mobile: bool) -> bool {
        is_mobile
    }

    pub fn select<H>(is_mobile: bool, capability: &OrientationCapability<H>) -> Self {
        match (is_mobile, capability.is_enabled()) {
            (false, _) => Self::Pointer,
            (true, true) => Self::Orientation,
            (true, false) => Self::Disabled,
        }
    }
}

/// Linear map from an input interval onto an output interval. Inputs are
/// clamped, so the output never leaves the output interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeMap {
    pub input: [f32; 2],
    pub output: [f32; 2],
}

impl RangeMap {
    pub const fn new(input: [f32; 2], output: [f32; 2]) -> Self {
        Self { input, output }
    }

    #[inline]
    pub fn map(&self, v: f32) -> f32 {
        let [i0, i1] = self.input;
        let [o0, o1] = self.output;
        let span = i1 - i0;
        if span.abs() <= f32::EPSILON || !v.is_finite() {
            return o0;
        }
        let t = ((v - i0) / span).clamp(0.0, 1.0);
        o0 + (o1 - o0) * t
    }

    /// `(min, max)` of the output interval regardless of direction.
    pub fn bounds(&self) -> (f32, f32) {
        let [a, b] = self.output;
        (a.min(b), a.max(b))
    }
}

/// Target angles and bounds for both tilt sources, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Panel-relative pointer y to rotateX.
    pub pointer_x: RangeMap,
    /// Panel-relative pointer x to rotateY.
    pub pointer_y: RangeMap,
    /// Normalized pitch/roll to degrees.
    pub gyro: RangeMap,
    pub spring: SpringConfig,
}

impl Default for TiltConfig {
    fn default() -> Self {
        let p = POINTER_TILT_MAX_DEG;
        let g = GYRO_TILT_MAX_DEG;
        Self {
            pointer_x: RangeMap::new([0.0, 1.0], [p, -p]),
            pointer_y: RangeMap::new([0.0, 1.0], [-p, p]),
            gyro: RangeMap::new([-1.0, 1.0], [-g, g]),
            spring: SpringConfig::default(),
        }
    }
}

impl TiltConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for m in [self.pointer_x, self.pointer_y, self.gyro] {
            let [min, max] = m.input;
            if !(max > min) {
                return Err(ConfigError::TiltRange { min, max });
            }
        }
        self.spring.validate()
    }
}

/// Panel rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelRotation {
    pub x_deg: f32,
    pub y_deg: f32,
}

impl PanelRotation {
    pub fn css_transform(&self) -> String {
        format!("rotateX({:.3}deg) rotateY({:.3}deg)", self.x_deg, self.y_deg)
    }
}

#[derive(Clone, Debug)]
pub struct ParallaxController {
    source: TiltSource,
    config: TiltConfig,
    rotate_x: Spring,
    rotate_y: Spring,
}

impl ParallaxController {
    /// Springs start at the target for `initial`, so the panel does not swing
    /// in on load.
    pub fn new(source: TiltSource, config: TiltConfig, initial: &InputState) -> Self {
        let (bx, by) = Self::bounds_for(source, &config);
        let target = Self::target_for(source, &config, initial);
        Self {
            source,
            config,
            rotate_x: Spring::new(config.spring, target.x_deg, bx.0, bx.1),
            rotate_y: Spring::new(config.spring, target.y_deg, by.0, by.1),
        }
    }

    pub fn source(&self) -> TiltSource {
        self.source
    }

    fn bounds_for(source: TiltSource, config: &TiltConfig) -> ((f32, f32), (f32, f32)) {
        match source {
            TiltSource::Pointer => (config.pointer_x.bounds(), config.pointer_y.bounds()),
            TiltSource::Orientation => (config.gyro.bounds(), config.gyro.bounds()),
            TiltSource::Disabled => ((0.0, 0.0), (0.0, 0.0)),
        }
    }

    /// Unsmoothed rotation the panel is heading toward.
    pub fn target_for(source: TiltSource, config: &TiltConfig, input: &InputState) -> PanelRotation {
        match source {
            TiltSource::Pointer => PanelRotation {
                x_deg: config.pointer_x.map(input.panel_pointer.y),
                y_deg: config.pointer_y.map(input.panel_pointer.x),
            },
            TiltSource::Orientation => match input.tilt {
                Some(t) => PanelRotation {
                    x_deg: config.gyro.map(t.pitch),
                    y_deg: config.gyro.map(t.roll),
                },
                None => PanelRotation::default(),
            },
            TiltSource::Disabled => PanelRotation::default(),
        }
    }

    pub fn target(&self, input: &InputState) -> PanelRotation {
        Self::target_for(self.source, &self.config, input)
    }

    pub fn step(&mut self, input: &InputState, dt_sec: f32) -> PanelRotation {
        let target = self.target(input);
        PanelRotation {
            x_deg: self.rotate_x.step(target.x_deg, dt_sec),
            y_deg: self.rotate_y.step(target.y_deg, dt_sec),
        }
    }

    pub fn current(&self) -> PanelRotation {
        PanelRotation {
            x_deg: self.rotate_x.value(),
            y_deg: self.rotate_y.value(),
        }
    }
}
