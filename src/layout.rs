pub const CARD_WIDTH: u32 = 535;
pub const MIN_CARD_HEIGHT: u32 = 220;
pub const BASE_OFFSET: u32 = 45;
pub const ROW_HEIGHT: u32 = 25;

/// Height of a card with `rows` visible metric rows.
pub fn card_height(rows: usize) -> u32 {
    let rows = u32::try_from(rows).unwrap_or(u32::MAX);
    BASE_OFFSET
        .saturating_add(rows.saturating_mul(ROW_HEIGHT))
        .max(MIN_CARD_HEIGHT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    pub fn from_rtl(rtl: bool) -> Self {
        if rtl {
            Self::RightToLeft
        } else {
            Self::LeftToRight
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeftToRight => "ltr",
            Self::RightToLeft => "rtl",
        }
    }
}

/// Fixed pixel offsets of the card elements.
///
/// The animated variants leave room for the slide-in transforms; the static
/// variants are shifted to where the animations would have ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub title_x: f32,
    pub title_y: f32,
    pub text_x: f32,
    pub data_x: f32,
    pub icon_x: f32,
    pub image_x: f32,
    pub image_y: f32,
    pub username_x: f32,
    pub username_y: f32,
    pub followers_x: f32,
    pub followers_y: f32,
}

impl CardLayout {
    pub fn select(animated: bool, direction: Direction) -> Self {
        let rtl = direction == Direction::RightToLeft;
        let (title_x, title_y) = match (animated, rtl) {
            (true, false) => (5.0, -10.0),
            (true, true) => (510.0, -10.0),
            (false, false) => (15.0, 0.0),
            (false, true) => (520.0, 0.0),
        };
        let (text_x, data_x, icon_x) = if rtl {
            (215.0, 15.0, 225.0)
        } else {
            (25.0, 225.0, 0.0)
        };
        let (image_x, image_y, username_x, username_y, followers_x, followers_y) = if animated {
            (125.0, 65.0, 109.9, 130.0, 110.0, 151.0)
        } else {
            (120.0, 70.0, 119.9, 140.0, 120.0, 161.0)
        };
        Self {
            title_x,
            title_y,
            text_x,
            data_x,
            icon_x,
            image_x,
            image_y,
            username_x,
            username_y,
            followers_x,
            followers_y,
        }
    }
}
