use glam::Vec3;

/// A discrete control action produced by the UI.
///
/// Direction variants select the rotation increment the render loop applies
/// every frame; the selection persists until replaced. Zoom variants are
/// one-shot steps applied to the view transform as soon as they are drained.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
    ZoomIn,
    ZoomOut,
}

impl Command {
    /// Per-frame rotation increment as `(angle in degrees, axis)`.
    ///
    /// `None` and both zoom steps map to the zero tuple, which the view
    /// transform treats as a no-op without normalizing the axis.
    pub fn rotation(self) -> (f32, Vec3) {
        match self {
            Command::Left => (-1.0, Vec3::new(0.0, 1.0, 0.0)),
            Command::Right => (1.0, Vec3::new(0.0, 1.0, 0.0)),
            Command::Up => (1.0, Vec3::new(1.0, 0.0, 0.0)),
            Command::Down => (-1.0, Vec3::new(-1.0, 0.0, 0.0)),
            Command::None | Command::ZoomIn | Command::ZoomOut => (0.0, Vec3::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_rotation_table() {
        assert_eq!(Command::None.rotation(), (0.0, Vec3::ZERO));
        assert_eq!(Command::Left.rotation(), (-1.0, Vec3::new(0.0, 1.0, 0.0)));
        assert_eq!(Command::Right.rotation(), (1.0, Vec3::new(0.0, 1.0, 0.0)));
        assert_eq!(Command::Up.rotation(), (1.0, Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(Command::Down.rotation(), (-1.0, Vec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn zoom_steps_carry_no_rotation() {
        assert_eq!(Command::ZoomIn.rotation(), (0.0, Vec3::ZERO));
        assert_eq!(Command::ZoomOut.rotation(), (0.0, Vec3::ZERO));
    }

    #[test]
    fn default_is_none() {
        assert_eq!(Command::default(), Command::None);
    }
}
