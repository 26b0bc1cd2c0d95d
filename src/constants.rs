// Page wiring and background look. Animation tuning (wave, camera, spring)
// lives in lemon_core::constants.

// Element ids provided by index.html
pub const CANVAS_ID: &str = "bg-canvas";
pub const HERO_TILT_ID: &str = "hero-tilt";
pub const HERO_STAGE_ID: &str = "hero-stage"; // unrotated wrapper the pointer is measured against
pub const CONTACTS_DESKTOP_ID: &str = "contacts-desktop";
pub const CONTACTS_MOBILE_ID: &str = "contacts-mobile";
pub const GALLERY_DESKTOP_ID: &str = "gallery-desktop";
pub const GALLERY_MOBILE_ID: &str = "gallery-mobile";

// Reveal animation hooks (see style.css)
pub const REVEAL_ON_LOAD_ATTR: &str = "data-reveal";
pub const REVEAL_ON_VIEW_ATTR: &str = "data-reveal-view";
pub const REVEALED_CLASS: &str = "revealed";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -60px 0px";

// Wireframe colour: amber #fbbf24 at 25% opacity
pub const MESH_COLOR: [f32; 4] = [0.984, 0.749, 0.141, 0.25];

// Linear fog toward cornsilk #fff8dc, in view-space depth units
pub const FOG_COLOR: [f32; 4] = [1.0, 0.973, 0.863, 1.0];
pub const FOG_NEAR: f32 = 35.0;
pub const FOG_FAR: f32 = 90.0;

// Height range used to shade the wireframe (crest brighter than trough)
pub const SHADE_HEIGHT_SPAN: f32 = 6.0;
