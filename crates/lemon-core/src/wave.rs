//! Procedural wave field driving the background mesh depth.

use crate::constants::*;

/// One directional or radial sinusoid: `amp * f(coord * freq + t * speed)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveTerm {
    pub amp: f32,
    pub freq: f32,
    pub speed: f32,
}

/// Amplitudes and frequencies of the four summed wave terms.
///
/// `cross` is the product term `sin(x) * cos(y)` and uses `cross_y` for its
/// second factor. `radial` and `ripple` travel outward from the origin, so
/// their speed is subtracted from the phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    pub cross: WaveTerm,
    pub cross_y: WaveTerm,
    pub diagonal: WaveTerm,
    pub radial: WaveTerm,
    pub ripple: WaveTerm,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            cross: WaveTerm {
                amp: WAVE_CROSS_AMP,
                freq: 0.2,
                speed: 2.0,
            },
            cross_y: WaveTerm {
                amp: 1.0,
                freq: 0.2,
                speed: 1.5,
            },
            diagonal: WaveTerm {
                amp: WAVE_DIAGONAL_AMP,
                freq: 0.3,
                speed: 1.8,
            },
            radial: WaveTerm {
                amp: WAVE_RADIAL_AMP,
                freq: 0.3,
                speed: 2.2,
            },
            ripple: WaveTerm {
                amp: WAVE_RIPPLE_AMP,
                freq: 0.1,
                speed: 3.0,
            },
        }
    }
}

impl WaveParams {
    /// Height of the field at planar position `(x, y)` and phase time `t`.
    #[inline]
    pub fn height(&self, x: f32, y: f32, t: f32) -> f32 {
        let r = (x * x + y * y).sqrt();
        let c = self.cross;
        let cy = self.cross_y;
        let d = self.diagonal;
        let rad = self.radial;
        let rip = self.ripple;

        c.amp * (x * c.freq + t * c.speed).sin() * (y * cy.freq + t * cy.speed).cos()
            + d.amp * ((x + y) * d.freq + t * d.speed).sin()
            + rad.amp * (r * rad.freq - t * rad.speed).cos()
            + rip.amp * (r * rip.freq - t * rip.speed).sin()
    }

    /// Largest magnitude the field can reach: the sum of the amplitudes.
    pub fn amplitude_bound(&self) -> f32 {
        self.cross.amp.abs() * self.cross_y.amp.abs()
            + self.diagonal.amp.abs()
            + self.radial.amp.abs()
            + self.ripple.amp.abs()
    }
}

/// Field height with the default parameters.
#[inline]
pub fn wave_height(x: f32, y: f32, t: f32) -> f32 {
    WaveParams::default().height(x, y, t)
}
