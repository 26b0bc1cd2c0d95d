// Static page content: contact strip, gallery layout and social link.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactIcon {
    Clock,
    MapPin,
    Phone,
    Mail,
}

impl ContactIcon {
    /// Inner markup of a 24x24 stroke icon.
    pub fn svg_body(&self) -> &'static str {
        match self {
            ContactIcon::Clock => {
                r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#
            }
            ContactIcon::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            ContactIcon::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            ContactIcon::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
        }
    }

    pub fn svg(&self) -> String {
        format!(
            r#"<svg class="contact__icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.svg_body()
        )
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ContactItem {
    pub icon: ContactIcon,
    pub desktop_label: &'static str,
    pub mobile_label: &'static str,
    pub href: Option<&'static str>,
}

impl ContactItem {
    #[inline]
    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }

    #[inline]
    pub fn label(&self, compact: bool) -> &'static str {
        if compact {
            self.mobile_label
        } else {
            self.desktop_label
        }
    }
}

pub const CONTACTS: [ContactItem; 4] = [
    ContactItem {
        icon: ContactIcon::Clock,
        desktop_label: "Program 08:00-00:00",
        mobile_label: "08:00-00:00",
        href: None,
    },
    ContactItem {
        icon: ContactIcon::MapPin,
        desktop_label: "Gorneni, Giurgiu",
        mobile_label: "Gorneni, Giurgiu",
        href: Some("https://maps.google.com/?q=Lemon+Restaurant+Gorneni+Giurgiu"),
    },
    ContactItem {
        icon: ContactIcon::Phone,
        desktop_label: "0733368272",
        mobile_label: "0733368272",
        href: Some("tel:+40733368272"),
    },
    ContactItem {
        icon: ContactIcon::Mail,
        desktop_label: "lemonrestaurant@yahoo.com",
        mobile_label: "lemonrestaurant@yahoo.com",
        href: Some("mailto:lemonrestaurant@yahoo.com"),
    },
];

pub const SOCIAL_URL: &str = "https://www.tiktok.com/@lemon_restaurant";
pub const SOCIAL_LABEL: &str = "TikTok";
pub const SOCIAL_ICON_PATH: &str = "M19.59 6.69a4.83 4.83 0 0 1-3.77-4.25V2h-3.45v13.67a2.89 2.89 0 0 1-5.2 1.74 2.89 2.89 0 0 1 2.31-4.64 2.93 2.93 0 0 1 .88.13V9.4a6.84 6.84 0 0 0-.88-.05A6.33 6.33 0 0 0 5.16 20.5a6.33 6.33 0 0 0 10.86-4.43V7.83a8.16 8.16 0 0 0 4.77 1.52v-3.4a4.85 4.85 0 0 1-1-.26z";
pub const SOCIAL_REVEAL_DELAY_SEC: f32 = 1.0;

// ---------------- Gallery ----------------

/// Top-left cell of a desktop gallery tile (1-based CSS grid lines).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSlot {
    pub col: u8,
    pub row: u8,
}

pub const GALLERY_COLUMNS: u8 = 12;
pub const TILE_COL_SPAN: u8 = 3;
pub const TILE_ROW_SPAN: u8 = 2;

const fn slot(col: u8, row: u8) -> GridSlot {
    GridSlot { col, row }
}

pub const DESKTOP_TILES: [GridSlot; 12] = [
    slot(1, 1),
    slot(5, 1),
    slot(9, 2),
    slot(2, 3),
    slot(6, 3),
    slot(10, 1),
    slot(1, 5),
    slot(4, 5),
    slot(8, 4),
    slot(3, 7),
    slot(7, 6),
    slot(5, 8),
];

pub const DESKTOP_ROTATIONS_DEG: [i8; 12] = [1, -2, 3, -1, 2, -3, 1, -2, 2, -1, 3, -2];

pub const TILE_EMOJIS: [&str; 12] = [
    "🍽️", "🍕", "🥘", "🍖", "🥗", "🍰", "☕", "🍝", "🥙", "🍲", "🧀", "🍷",
];

pub const MOBILE_TILE_COUNT: usize = 7;
pub const MOBILE_SLIDE_PX: i32 = 200;

impl GridSlot {
    /// Inline `grid-column` / `grid-row` placement for this tile.
    pub fn css(&self) -> String {
        format!(
            "grid-column:{} / span {};grid-row:{} / span {}",
            self.col, TILE_COL_SPAN, self.row, TILE_ROW_SPAN
        )
    }

    #[inline]
    pub fn last_col(&self) -> u8 {
        self.col + TILE_COL_SPAN - 1
    }
}

/// Staircase tiles alternate sides and fly in from that side.
#[inline]
pub fn mobile_slide_from_px(index: usize) -> i32 {
    if index % 2 == 0 {
        -MOBILE_SLIDE_PX
    } else {
        MOBILE_SLIDE_PX
    }
}

#[inline]
pub fn mobile_rotation_deg(index: usize) -> i8 {
    match index % 3 {
        0 => 1,
        1 => -2,
        _ => 3,
    }
}

#[inline]
pub fn desktop_reveal_delay_sec(index: usize) -> f32 {
    0.1 + index as f32 * 0.08
}

#[inline]
pub fn mobile_reveal_delay_sec(index: usize) -> f32 {
    index as f32 * 0.08
}

#[inline]
pub fn contact_reveal_delay_sec(index: usize) -> f32 {
    1.7 + index as f32 * 0.1
}

pub fn photo_src(index: usize) -> String {
    format!("photos/photo-{}.jpg", index + 1)
}

pub fn photo_caption(index: usize) -> String {
    format!("Foto {}", index + 1)
}

#[inline]
pub fn tile_emoji(index: usize) -> &'static str {
    TILE_EMOJIS[index % TILE_EMOJIS.len()]
}
