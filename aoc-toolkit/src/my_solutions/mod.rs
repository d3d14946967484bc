//! Registered puzzle solvers, one module per year.

pub mod year_2024;
