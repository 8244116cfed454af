use crate::error::{GrowthError, GrowthResult};
use crate::traits::{DynamicalSystem, Scalar, Steppable};

/// Discrete Map Stepper
/// Just evaluates x_{n+1} = f(x_n).
/// dt is treated as 1 iteration regardless of value, but we track t as t + dt.
#[derive(Debug, Clone)]
pub struct DiscreteMap<T: Scalar> {
    tmp: Vec<T>,
}

impl<T: Scalar> DiscreteMap<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            tmp: vec![T::zero(); dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for DiscreteMap<T> {
    fn step(
        &mut self,
        system: &impl DynamicalSystem<T>,
        t: &mut T,
        state: &mut [T],
        dt: T,
    ) -> GrowthResult<()> {
        let dim = system.dimension();
        if state.len() != dim || self.tmp.len() != dim {
            return Err(GrowthError::InvalidArgument(format!(
                "State dimension mismatch. Expected {}, got {} (stepper sized for {}).",
                dim,
                state.len(),
                self.tmp.len()
            )));
        }

        // f(x) goes into scratch so a failed evaluation leaves the state alone.
        system.apply(*t, state, &mut self.tmp)?;
        state.copy_from_slice(&self.tmp);

        // For maps, dt usually = 1.
        *t = *t + dt;
        Ok(())
    }
}
