use crate::offset::Offset;

/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + Send + Sync + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    /// t can exceed [0, 1] range for overshoot effects
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for Offset {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Offset::from_f32(
            from.x as f32 + (to.x - from.x) as f32 * t,
            from.y as f32 + (to.y - from.y) as f32 * t,
        )
    }
}
