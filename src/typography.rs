//! Vertical rhythm and modular type scale.
//!
//! Spacing and font sizes are derived from a base font size, a base line
//! height and a scale ratio, the same way Typography.js themes compute them.
//! The defaults reproduce the wordpress-2016 theme that Gatsby blogs ship
//! with, so `rhythm(1)` is `1.75rem` and `scale(1.5)` yields a
//! `3.95285rem` font on a `4.375rem` line.

use crate::style::Style;

/// Typography settings used to compute spacing and font sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    /// Base font size in pixels
    pub base_font_size: f64,
    /// Line height as a multiple of the base font size
    pub base_line_height: f64,
    /// Ratio between successive steps of the type scale
    pub scale_ratio: f64,
    /// Minimum space kept above and below scaled text, in pixels
    pub min_line_padding: f64,
    /// Allow half-line increments when fitting scaled text
    pub round_to_nearest_half_line: bool,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            base_font_size: 16.0,
            base_line_height: 1.75,
            scale_ratio: 2.5,
            min_line_padding: 2.0,
            round_to_nearest_half_line: true,
        }
    }
}

impl Typography {
    /// Returns vertical spacing equal to `lines` base lines, in rem.
    ///
    /// # Examples
    ///
    /// ```
    /// use depsite::Typography;
    ///
    /// let typography = Typography::default();
    /// assert_eq!(typography.rhythm(1.0), "1.75rem");
    /// assert_eq!(typography.rhythm(24.0), "42rem");
    /// ```
    pub fn rhythm(&self, lines: f64) -> String {
        format_rem(lines * self.base_line_height)
    }

    /// Returns font size and line height for a step on the type scale.
    ///
    /// The font size is `scale_ratio ^ value` times the base font size. The
    /// line height is the smallest whole (or half) number of base lines that
    /// fits the font plus the minimum padding on both sides.
    ///
    /// # Arguments
    ///
    /// * `value`: Step on the scale, 0 for body text
    ///
    /// # Returns
    ///
    /// Style carrying `font-size` and `line-height`
    pub fn scale(&self, value: f64) -> Style {
        let font_px = self.scale_ratio.powf(value) * self.base_font_size;
        let lines = self.lines_for(font_px);

        Style::new()
            .set("font-size", format_rem(font_px / self.base_font_size))
            .set("line-height", self.rhythm(lines))
    }

    fn line_height_px(&self) -> f64 {
        self.base_font_size * self.base_line_height
    }

    fn lines_for(&self, font_px: f64) -> f64 {
        let needed = (font_px + 2.0 * self.min_line_padding) / self.line_height_px();
        if self.round_to_nearest_half_line {
            (needed * 2.0).ceil() / 2.0
        } else {
            needed.ceil()
        }
    }
}

/// Formats a rem length with at most five decimals.
fn format_rem(value: f64) -> String {
    let fixed = format!("{:.5}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let number = if trimmed == "-0" { "0" } else { trimmed };
    format!("{}rem", number)
}
