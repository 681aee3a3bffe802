use crate::util::range::NumRange;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// An RGBA color. Values are stored as floats between 0 and 1 (inclusive).
/// This uses f32 because the extra precision from f64 is pointless.
///
/// Deserialization does not range-check the components, so any config that
/// holds a color should validate it with [Color4::validate].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color4 {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color4 {
    /// The valid range of values for each component in RGBA
    const COMPONENT_RANGE: NumRange<f32> = NumRange::new(0.0, 1.0);

    pub const WHITE: Self = Self::new_int(255, 255, 255, 255);
    pub const BLACK: Self = Self::new_int(0, 0, 0, 255);
    pub const TRANSPARENT: Self = Self::new_int(0, 0, 0, 0);

    /// Create a new RGBA color with components in the range [0.0, 1.0].
    /// Returns an error if any of the components are out of range.
    pub fn new(
        red: f32,
        green: f32,
        blue: f32,
        alpha: f32,
    ) -> anyhow::Result<Self> {
        let color = Self {
            red,
            green,
            blue,
            alpha,
        };
        color.validate()?;
        Ok(color)
    }

    /// Create a new RGBA color from integer components in the [0,255] range.
    pub const fn new_int(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: alpha as f32 / 255.0,
        }
    }

    /// Make sure every component is within [0.0, 1.0]
    pub fn validate(&self) -> anyhow::Result<()> {
        for (component_name, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            Self::COMPONENT_RANGE.ensure_contains(value).map_err(|_| {
                anyhow!(
                    "Color component {} must be in {}, but was {}",
                    component_name,
                    Self::COMPONENT_RANGE,
                    value
                )
            })?;
        }
        Ok(())
    }

    /// Convert this color to a set of 4 bytes: `(red, green, blue, alpha)`
    pub fn to_ints(self) -> (u8, u8, u8, u8) {
        (
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
            (self.alpha * 255.0).round() as u8,
        )
    }

    /// Convert the RGB components of this color to an HTML color code:
    /// `#rrggbb`. Alpha is dropped, use [Self::opacity] alongside this.
    pub fn to_html(self) -> String {
        let (r, g, b, _) = self.to_ints();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Alpha as an SVG/CSS opacity value
    pub fn opacity(self) -> f32 {
        self.alpha
    }
}
