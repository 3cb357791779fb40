//! Indicator banners
//!
//! Two independent overlays a host can mount:
//! - [`PersistentIndicator`] shows while its visibility flag is set
//! - [`TimedIndicator`] shows on a rising edge of its flag and hides itself
//!   after an auto-hide window
//!
//! Both take [`IndicatorProps`] on every render and draw the same banner.

mod auto_hide;
mod indicator_props;
mod indicator_render;
mod persistent_indicator;
mod timed_indicator;

pub use auto_hide::{AutoHideTimer, DEFAULT_AUTO_HIDE};
pub use indicator_props::IndicatorProps;
pub use indicator_render::{
    BANNER_HEIGHT, Banner, BannerKind, BannerLayout, BannerPosition, banner_area, render_banner,
};
pub use persistent_indicator::{DEFAULT_REFRESH_MESSAGE, PersistentIndicator, Visibility};
pub use timed_indicator::{DEFAULT_RESTORE_MESSAGE, IndicatorPhase, TimedIndicator};
