/// A state that can be advanced by its derivative over a step.
///
/// Step strategies only ever touch state through this trait: they evaluate a
/// derivative, then call [`step`](StepIntegrable::step) with some multiple of
/// the step size. Any scheme that can be written as a sequence of
/// `state + derivative * delta` updates works with any implementing type.
///
/// `Delta` is usually the time increment as a plain `f64`, but nothing here
/// assumes time; arc length or any other independent variable works too.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns `self + derivative * delta`.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

/// Scalars step as `x + dx * delta`.
impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

/// Fixed-size arrays step componentwise.
impl<const N: usize> StepIntegrable<f64> for [f64; N] {
    type Derivative = [f64; N];

    fn step(&self, derivative: [f64; N], delta: f64) -> Self {
        std::array::from_fn(|i| self[i] + derivative[i] * delta)
    }
}
