//! Pointer-reactive 3D tilt for cards.
//!
//! Pure geometry: given the card's bounding box and the pointer position,
//! produce the glow offset and the rotation. The browser side writes the
//! result into the card's inline style.

use serde::Deserialize;

/// Tilt tuning, `[tilt]` in `site.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Rotation at the card edge, in degrees.
    pub max_angle_deg: f64,
    pub perspective_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_angle_deg: 5.0,
            perspective_px: 1000.0,
        }
    }
}

/// Viewport-relative bounding box, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Pointer offset inside the card, exposed as `--mouse-x` / `--mouse-y`.
    pub mouse_x: f64,
    pub mouse_y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl TiltConfig {
    pub fn tilt(&self, rect: Rect, client_x: f64, client_y: f64) -> Tilt {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        Tilt {
            mouse_x: x,
            mouse_y: y,
            rotate_x: axis_angle(y, rect.height / 2.0) * -self.max_angle_deg,
            rotate_y: axis_angle(x, rect.width / 2.0) * self.max_angle_deg,
        }
    }

    pub fn transform(&self, tilt: &Tilt) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            self.perspective_px,
            clean(tilt.rotate_x),
            clean(tilt.rotate_y)
        )
    }

    /// Transform for a card the pointer just left.
    pub fn neutral_transform(&self) -> String {
        self.transform(&Tilt {
            mouse_x: 0.0,
            mouse_y: 0.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
        })
    }
}

impl Tilt {
    pub fn mouse_x_px(&self) -> String {
        format!("{}px", clean(self.mouse_x))
    }

    pub fn mouse_y_px(&self) -> String {
        format!("{}px", clean(self.mouse_y))
    }
}

/// Offset from centre as a fraction of the half-extent, 0 for a collapsed box.
fn axis_angle(offset: f64, center: f64) -> f64 {
    if center == 0.0 {
        return 0.0;
    }
    (offset - center) / center
}

// `-0` would otherwise print as "-0".
fn clean(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn centre_is_neutral() {
        let config = TiltConfig::default();
        let tilt = config.tilt(CARD, 200.0, 100.0);
        assert_eq!(tilt.mouse_x_px(), "100px");
        assert_eq!(tilt.mouse_y_px(), "50px");
        assert_eq!(config.transform(&tilt), config.neutral_transform());
        assert_eq!(
            config.neutral_transform(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg)"
        );
    }

    #[test]
    fn corners_reach_the_max_angle() {
        let config = TiltConfig::default();

        let top_left = config.tilt(CARD, 100.0, 50.0);
        assert_eq!(top_left.rotate_x, 5.0);
        assert_eq!(top_left.rotate_y, -5.0);

        let bottom_right = config.tilt(CARD, 300.0, 150.0);
        assert_eq!(
            config.transform(&bottom_right),
            "perspective(1000px) rotateX(-5deg) rotateY(5deg)"
        );
    }

    #[test]
    fn rotation_is_proportional() {
        let config = TiltConfig::default();
        let tilt = config.tilt(CARD, 250.0, 75.0);
        assert_eq!(tilt.rotate_y, 2.5);
        assert_eq!(tilt.rotate_x, 2.5);
    }

    #[test]
    fn collapsed_box_does_not_produce_nan() {
        let config = TiltConfig::default();
        let flat = Rect {
            width: 0.0,
            height: 0.0,
            ..CARD
        };
        let tilt = config.tilt(flat, 130.0, 60.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!(tilt.mouse_x_px(), "30px");
    }

    #[test]
    fn config_values_are_used() {
        let config = TiltConfig {
            max_angle_deg: 10.0,
            perspective_px: 600.0,
        };
        let tilt = config.tilt(CARD, 300.0, 100.0);
        assert_eq!(
            config.transform(&tilt),
            "perspective(600px) rotateX(0deg) rotateY(10deg)"
        );
    }
}
