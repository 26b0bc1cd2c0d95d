use thiserror::Error;

/// Rejected scene configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid needs at least one segment per side")]
    NoSegments,
    #[error("grid size must be positive, got {0}")]
    GridSize(f32),
    #[error("camera min depth {min} exceeds base depth {base}")]
    DepthBounds { min: f32, base: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("tilt range [{min}, {max}] is inverted")]
    TiltRange { min: f32, max: f32 },
}
