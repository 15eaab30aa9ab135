//! Gradient fills
//!
//! A [`Gradient`] is built from colors and optional stop locations. The
//! device-ready form, [`ResolvedGradient`], is computed the first time it is
//! asked for and cached for the lifetime of the gradient, so a gradient held by
//! a chain that is rendered every frame resolves its stops once.

use std::cell::OnceCell;

use serde::Serialize;
use smallvec::SmallVec;
use thiserror::Error;

use crate::color::Color;

/// Gradient construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    /// A gradient needs at least one color
    #[error("gradient needs at least one color")]
    NoColors,

    /// Explicit locations must pair up with colors one to one
    #[error("gradient has {colors} colors but {locations} stop locations")]
    LocationCount { colors: usize, locations: usize },
}

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    /// 0.0 to 1.0
    pub offset: f32,
    pub color: Color,
}

/// Stops in the form a device draws from
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedGradient {
    pub stops: Vec<GradientStop>,
    /// Continue the end colors past the 0.0 and 1.0 stops
    pub extend: bool,
}

/// Gradient colors with optional explicit stop locations
#[derive(Clone, Debug)]
pub struct Gradient {
    colors: SmallVec<[Color; 4]>,
    locations: Option<SmallVec<[f32; 4]>>,
    extend: bool,
    resolved: OnceCell<ResolvedGradient>,
}

impl Gradient {
    /// Evenly spaced gradient through `colors`
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Result<Self, GradientError> {
        let colors: SmallVec<[Color; 4]> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(GradientError::NoColors);
        }
        Ok(Self {
            colors,
            locations: None,
            extend: true,
            resolved: OnceCell::new(),
        })
    }

    /// Create a simple gradient between two colors
    pub fn simple(from: Color, to: Color) -> Self {
        Self {
            colors: smallvec::smallvec![from, to],
            locations: None,
            extend: true,
            resolved: OnceCell::new(),
        }
    }

    /// Place each color at an explicit location instead of spacing evenly
    pub fn with_locations(
        mut self,
        locations: impl IntoIterator<Item = f32>,
    ) -> Result<Self, GradientError> {
        let locations: SmallVec<[f32; 4]> = locations.into_iter().collect();
        if locations.len() != self.colors.len() {
            return Err(GradientError::LocationCount {
                colors: self.colors.len(),
                locations: locations.len(),
            });
        }
        self.locations = Some(locations);
        self.resolved = OnceCell::new();
        Ok(self)
    }

    /// Whether end colors continue past the first and last stop
    pub fn with_extend(mut self, extend: bool) -> Self {
        self.extend = extend;
        self.resolved = OnceCell::new();
        self
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn extend(&self) -> bool {
        self.extend
    }

    /// Resolved stops, computed on first call
    pub fn resolved(&self) -> &ResolvedGradient {
        self.resolved.get_or_init(|| {
            tracing::trace!(colors = self.colors.len(), "resolving gradient stops");
            ResolvedGradient {
                stops: self.compute_stops(),
                extend: self.extend,
            }
        })
    }

    /// True once [`Gradient::resolved`] has run
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    fn compute_stops(&self) -> Vec<GradientStop> {
        match &self.locations {
            Some(locations) => self
                .colors
                .iter()
                .zip(locations.iter())
                .map(|(&color, &offset)| GradientStop { offset, color })
                .collect(),
            None => {
                let last = self.colors.len().saturating_sub(1);
                self.colors
                    .iter()
                    .enumerate()
                    .map(|(i, &color)| GradientStop {
                        offset: if last == 0 {
                            0.0
                        } else {
                            i as f32 / last as f32
                        },
                        color,
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_spacing() {
        let gradient =
            Gradient::new([Color::RED, Color::GREEN, Color::BLUE, Color::WHITE]).unwrap();
        let offsets: Vec<f32> = gradient.resolved().stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets.len(), 4);
        assert_eq!(offsets[0], 0.0);
        assert!((offsets[1] - 1.0 / 3.0).abs() < 1e-6);
        assert!((offsets[2] - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(offsets[3], 1.0);
        assert_eq!(gradient.resolved().stops[0].color, Color::RED);
        assert_eq!(gradient.resolved().stops[3].color, Color::WHITE);
    }

    #[test]
    fn test_single_color() {
        let gradient = Gradient::new([Color::RED]).unwrap();
        assert_eq!(
            gradient.resolved().stops,
            vec![GradientStop {
                offset: 0.0,
                color: Color::RED
            }]
        );
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Gradient::new(std::iter::empty()).unwrap_err(),
            GradientError::NoColors
        );
        assert_eq!(
            Gradient::simple(Color::RED, Color::BLUE)
                .with_locations([0.0, 0.5, 1.0])
                .unwrap_err(),
            GradientError::LocationCount {
                colors: 2,
                locations: 3
            }
        );
    }

    #[test]
    fn test_explicit_locations_and_extend() {
        let gradient = Gradient::simple(Color::RED, Color::BLUE)
            .with_locations([0.25, 0.75])
            .unwrap()
            .with_extend(false);
        let resolved = gradient.resolved();
        assert_eq!(resolved.stops[0].offset, 0.25);
        assert_eq!(resolved.stops[1].offset, 0.75);
        assert!(!resolved.extend);
    }

    #[test]
    fn test_resolves_once() {
        let gradient = Gradient::simple(Color::BLACK, Color::WHITE);
        assert!(!gradient.is_resolved());
        let first: *const ResolvedGradient = gradient.resolved();
        assert!(gradient.is_resolved());
        let second: *const ResolvedGradient = gradient.resolved();
        assert_eq!(first, second);
    }
}
