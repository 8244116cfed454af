use crate::error::GrowthResult;
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in our growth systems.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Represents a discrete-time dynamical system (a map).
pub trait DynamicalSystem<T: Scalar> {
    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates the map x_{t+1} = f(t, x_t).
    /// x: current state
    /// t: current period
    /// out: buffer to write x_{t+1}
    ///
    /// Fails when f is undefined at x; `out` is unspecified in that case.
    fn apply(&self, t: T, x: &[T], out: &mut [T]) -> GrowthResult<()>;
}

/// A trait for steppers that can advance a system forward.
pub trait Steppable<T: Scalar> {
    /// Performs one step of size dt.
    /// t: current period (updated after step)
    /// state: current state (updated after step)
    /// dt: step size
    ///
    /// On error neither `t` nor `state` is modified.
    fn step(
        &mut self,
        system: &impl DynamicalSystem<T>,
        t: &mut T,
        state: &mut [T],
        dt: T,
    ) -> GrowthResult<()>;
}
