use winit::dpi::PhysicalSize;

/// Drawable surface size in physical pixels.
///
/// Owned by the window runtime; applications only read it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn from_physical(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }

    /// True when the viewport has a finite, non-zero area.
    ///
    /// A minimized window reports `0x0`; nothing should be updated or drawn then.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width divided by height, or `None` for an invalid viewport.
    #[inline]
    pub fn aspect_ratio(self) -> Option<f32> {
        self.is_valid().then(|| self.width / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_of_default_window() {
        assert_eq!(Viewport::new(1800.0, 900.0).aspect_ratio(), Some(2.0));
    }

    #[test]
    fn aspect_ratio_portrait() {
        assert_eq!(Viewport::new(400.0, 800.0).aspect_ratio(), Some(0.5));
    }

    #[test]
    fn zero_height_has_no_aspect_ratio() {
        assert!(Viewport::new(800.0, 0.0).aspect_ratio().is_none());
        assert!(!Viewport::new(800.0, 0.0).is_valid());
    }

    #[test]
    fn non_finite_is_invalid() {
        assert!(!Viewport::new(f32::INFINITY, 10.0).is_valid());
        assert!(!Viewport::new(10.0, f32::NAN).is_valid());
    }

    #[test]
    fn from_physical_copies_size() {
        let vp = Viewport::from_physical(PhysicalSize::new(1280, 720));
        assert_eq!(vp, Viewport::new(1280.0, 720.0));
    }
}
