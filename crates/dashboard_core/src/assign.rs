//! Department and rating assignment for freshly fetched users.
//!
//! The remote directory carries neither field, so both are drawn once per
//! successful fetch. The draw sits behind [`AttributeAssigner`] so callers
//! can pin it down with a seed or replace it outright.

use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::{
    domain::{Department, Employee, Performance},
    protocol::ApiUser,
};

pub trait AttributeAssigner: Send {
    fn department(&mut self) -> Department;
    fn performance(&mut self) -> Performance;
}

/// Uniform draws over the six departments and ratings `1..=5`.
pub struct RandomAssigner<R = StdRng> {
    rng: R,
}

impl RandomAssigner<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomAssigner<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> AttributeAssigner for RandomAssigner<R> {
    fn department(&mut self) -> Department {
        Department::ALL[self.rng.gen_range(0..Department::ALL.len())]
    }

    fn performance(&mut self) -> Performance {
        Performance::saturating(self.rng.gen_range(Performance::MIN..=Performance::MAX))
    }
}

pub fn assign_attributes(
    users: Vec<ApiUser>,
    assigner: &mut dyn AttributeAssigner,
) -> Vec<Employee> {
    users
        .into_iter()
        .map(|user| Employee {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            age: user.age,
            department: assigner.department(),
            performance: assigner.performance(),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/assign_tests.rs"]
mod tests;
