//! Solver framework for daily puzzle solutions
//!
//! A solver is split into a parsing step ([`AocParser`]) and one
//! [`PartSolver`] impl per part. `#[derive(AocSolver)]` ties the parts
//! together into a [`Solver`], and `#[derive(AutoRegisterSolver)]` submits it
//! to the plugin [`SolverRegistry`] so a driver can find it by year and day.
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder, RegisterableSolver};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 1)]
//! struct Sum;
//!
//! impl AocParser for Sum {
//!     type SharedData<'a> = Vec<u64>;
//!
//!     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
//!         input
//!             .split_whitespace()
//!             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sum {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u64>().to_string())
//!     }
//! }
//!
//! let registry = Sum
//!     .register_with(SolverRegistryBuilder::new(), 2024, 1, &[])
//!     .unwrap()
//!     .build();
//! let mut solver = registry.create_solver(2024, 1, "1 2 3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
