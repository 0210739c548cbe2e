//! Configuration of the range slider's dimensions and paint.
//!
//! A [`RangeSliderStyle`] is declared in density-independent units and
//! resolved once per scale factor into a [`ResolvedStyle`], which the slider
//! keeps for its lifetime. The paint part ([`TrackPaint`]) is handed to the
//! renderer by reference on every frame; nothing in it is mutated while
//! drawing.
//!
//! ```
//! use tessera_range_slider::{Color, Dp, Px, style::RangeSliderStyleBuilder};
//!
//! let style = RangeSliderStyleBuilder::default()
//!     .handle_size(Dp(20.0))
//!     .selected_color(Color::from_hex_rgb(0x2962FF))
//!     .build()
//!     .expect("all fields have defaults");
//! let resolved = style.resolve(2.0).expect("valid scale factor");
//! assert_eq!(resolved.handle_size.width, Px(40));
//! ```

use derive_builder::Builder;

use crate::{
    color::Color,
    dp::Dp,
    error::StyleError,
    px::{Padding, Px, PxSize},
    surface::BlurMask,
};

const DEFAULT_TRACK_THICKNESS: Dp = Dp(2.0);
const DEFAULT_HANDLE_SIZE: Dp = Dp(35.0);
const DEFAULT_PADDING: Dp = Dp(16.0);
const DEFAULT_WIDTH: Dp = Dp(100.0);
const DEFAULT_HEIGHT: Dp = Dp(50.0);
const DEFAULT_PRESSED_BLUR_RADIUS: f32 = 50.0;

/// Declarative slider style.
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(pattern = "owned")]
pub struct RangeSliderStyle {
    /// Thickness of the track bar; the end caps have half of it as radius.
    #[builder(default = "DEFAULT_TRACK_THICKNESS")]
    pub track_thickness: Dp,

    /// Edge length of the square handle glyphs.
    #[builder(default = "DEFAULT_HANDLE_SIZE")]
    pub handle_size: Dp,

    /// Padding used when the host lays the slider out without its own.
    #[builder(default = "DEFAULT_PADDING")]
    pub padding_left: Dp,

    /// See [`padding_left`](Self::padding_left).
    #[builder(default = "DEFAULT_PADDING")]
    pub padding_right: Dp,

    /// Width reported by `preferred_size` when the host does not fix it.
    #[builder(default = "DEFAULT_WIDTH")]
    pub default_width: Dp,

    /// Height reported by `preferred_size` when the host does not fix it.
    #[builder(default = "DEFAULT_HEIGHT")]
    pub default_height: Dp,

    /// Color of the track between the two handles.
    #[builder(default = "Color::SELECTED_TRACK")]
    pub selected_color: Color,

    /// Color of the track outside the handles.
    #[builder(default = "Color::UNSELECTED_TRACK")]
    pub unselected_color: Color,

    /// Inner blur radius, in physical pixels, of a handle being dragged.
    #[builder(default = "DEFAULT_PRESSED_BLUR_RADIUS")]
    pub pressed_blur_radius: f32,
}

impl Default for RangeSliderStyle {
    fn default() -> Self {
        Self {
            track_thickness: DEFAULT_TRACK_THICKNESS,
            handle_size: DEFAULT_HANDLE_SIZE,
            padding_left: DEFAULT_PADDING,
            padding_right: DEFAULT_PADDING,
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
            selected_color: Color::SELECTED_TRACK,
            unselected_color: Color::UNSELECTED_TRACK,
            pressed_blur_radius: DEFAULT_PRESSED_BLUR_RADIUS,
        }
    }
}

impl RangeSliderStyle {
    /// Converts every dimension to physical pixels for `scale_factor`.
    pub fn resolve(&self, scale_factor: f64) -> Result<ResolvedStyle, StyleError> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(StyleError::InvalidScaleFactor(scale_factor));
        }
        Ok(self.resolve_unchecked(scale_factor))
    }

    /// Resolves at a scale factor of `1.0`, which cannot fail.
    pub fn resolved_at_unit_scale(&self) -> ResolvedStyle {
        self.resolve_unchecked(1.0)
    }

    fn resolve_unchecked(&self, scale_factor: f64) -> ResolvedStyle {
        let px = |dp: Dp| dp.to_px(scale_factor);
        ResolvedStyle {
            track_thickness: px(self.track_thickness),
            handle_size: PxSize::square(px(self.handle_size)),
            padding: Padding::new(px(self.padding_left), px(self.padding_right)),
            default_size: PxSize::new(px(self.default_width), px(self.default_height)),
            paint: TrackPaint {
                selected: self.selected_color,
                unselected: self.unselected_color,
                pressed_blur: BlurMask::inner(self.pressed_blur_radius),
            },
        }
    }
}

/// A style converted to physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    /// Track bar thickness.
    pub track_thickness: Px,
    /// Handle glyph size; both handles share it.
    pub handle_size: PxSize,
    /// Padding used by `resize_with_default_padding`.
    pub padding: Padding,
    /// Wrap-content size.
    pub default_size: PxSize,
    /// Immutable paint descriptors for the renderer.
    pub paint: TrackPaint,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        RangeSliderStyle::default().resolved_at_unit_scale()
    }
}

/// Colors and effects used to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPaint {
    /// Fill of the selected region (and of the whole track underneath).
    pub selected: Color,
    /// Fill of the track ends outside the handles.
    pub unselected: Color,
    /// Effect applied to the glyph of the handle being dragged.
    pub pressed_blur: BlurMask,
}
