// Scene tuning constants shared by the core and the web frontend.

// Grid mesh
pub const GRID_SIZE: f32 = 80.0; // world units per side
pub const GRID_SEGMENTS: u32 = 40; // 41x41 vertices

// Mesh placement (applied as translate * rotateX)
pub const MESH_OFFSET: [f32; 3] = [0.0, -8.0, -15.0];
pub const MESH_TILT_X: f32 = -std::f32::consts::FRAC_PI_3;

// Wave field amplitudes
pub const WAVE_CROSS_AMP: f32 = 0.8;
pub const WAVE_DIAGONAL_AMP: f32 = 0.6;
pub const WAVE_RADIAL_AMP: f32 = 0.7;
pub const WAVE_RIPPLE_AMP: f32 = 0.5;

// Seconds -> wave phase units (source clock ran at ms * 0.0002)
pub const WAVE_TIME_SCALE: f32 = 0.2;

// Pointer lift
pub const LIFT_RADIUS: f32 = 6.0;
pub const LIFT_SCALE: f32 = 3.0;
pub const LIFT_POINTER_GAIN: f32 = 3.0; // NDC pointer is scaled before comparing

// Camera rig
pub const CAMERA_BASE_DEPTH: f32 = 40.0;
pub const CAMERA_MIN_DEPTH: f32 = 10.0; // never dive through the mesh
pub const CAMERA_DIVE_INTENSITY: f32 = 0.03; // depth units per scrolled pixel
pub const CAMERA_TILT_PER_SCROLL: f32 = 0.0001; // radians per scrolled pixel
pub const CAMERA_FOVY_DEG: f32 = 65.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 2000.0;

// Parallax tilt (degrees)
pub const POINTER_TILT_MAX_DEG: f32 = 10.0;
pub const GYRO_TILT_MAX_DEG: f32 = 5.0;
pub const GYRO_CLAMP_DEG: f32 = 30.0; // raw beta/gamma clamp before normalizing

// Spring filter
pub const SPRING_STIFFNESS: f32 = 150.0;
pub const SPRING_DAMPING: f32 = 15.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_DT_SEC: f32 = 0.1; // tab switches should not fling the panel
pub const SPRING_REST_EPSILON: f32 = 0.01;
