pub mod error;
pub mod model;
pub mod solvers;
/// The `solow_core` crate simulates the Solow-Swan growth model as a discrete map
/// on capital per worker.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `DynamicalSystem` (fallible maps), `Steppable` (steppers).
/// - **Solvers**: `DiscreteMap`, which iterates x_{t+1} = f(x_t) one period at a time.
/// - **Model**: `SolowParams` (the law of motion) and `SolowModel` (the stateful simulator).
/// - **Error**: `GrowthError`, reported for bad period counts and undefined production.
pub mod traits;

pub use error::{GrowthError, GrowthResult};
pub use model::{SolowModel, SolowParams};
