pub mod ramp;
pub mod scale;
pub mod style;

pub use ramp::{red_yellow_green, viridis, Interpolator};
pub use scale::{Scale, ScaleKind, NEUTRAL_COLOR};
pub use style::{style_for, BadgeStyle, BADGE_ALPHA};
