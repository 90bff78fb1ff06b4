//! Values synthesized for channels the source does not carry.

use crate::Element;

/// Policy for channels absent from the source layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillMode {
    /// Integer minimum, or `0.0` for floats.
    Min,
    /// Integer maximum, or `1.0` for floats. Opaque alpha.
    #[default]
    Max,
}

/// Concrete fill value for element type `T`.
///
/// Both kernels call this; the vectorized kernel broadcasts the `u8` result.
#[inline]
pub fn fill_value<T: Element>(mode: FillMode) -> T {
    match mode {
        FillMode::Min => T::MIN,
        FillMode::Max => T::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_extremes() {
        assert_eq!(fill_value::<u8>(FillMode::Min), 0);
        assert_eq!(fill_value::<u8>(FillMode::Max), 255);
    }

    #[test]
    fn u16_extremes() {
        assert_eq!(fill_value::<u16>(FillMode::Min), 0);
        assert_eq!(fill_value::<u16>(FillMode::Max), 65535);
    }

    #[test]
    fn f32_unit_range() {
        assert_eq!(fill_value::<f32>(FillMode::Min), 0.0);
        assert_eq!(fill_value::<f32>(FillMode::Max), 1.0);
    }

    #[test]
    fn default_is_max() {
        assert_eq!(FillMode::default(), FillMode::Max);
        assert_eq!(fill_value::<u8>(FillMode::default()), 255);
    }
}
