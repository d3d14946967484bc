//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;
use crate::utils::error::DpCacheError;

/// Lazily evaluated memo table over a [`DpProblem`]
///
/// Each index is computed at most once; later lookups clone the stored value.
/// Interior mutability lets recursive lookups share one `&self`.
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    in_progress: RefCell<HashSet<I>>,
    _phantom: PhantomData<fn() -> K>,
}

impl DpCache<(), (), (), ()> {
    /// Start building a cache from a backend and a problem
    pub fn builder() -> DpCacheBuilder<(), ()> {
        DpCacheBuilder {
            backend: (),
            problem: (),
        }
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone + Hash + Eq,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            in_progress: RefCell::new(HashSet::new()),
            _phantom: PhantomData,
        }
    }

    /// The value at `index`, resolving and caching its dependencies first
    ///
    /// # Errors
    ///
    /// [`DpCacheError::Cycle`] when `index` depends on itself.
    pub fn get(&self, index: &I) -> Result<K, DpCacheError> {
        let cached = self.backend.borrow().get(index).cloned();
        if let Some(value) = cached {
            return Ok(value);
        }

        if !self.in_progress.borrow_mut().insert(index.clone()) {
            return Err(DpCacheError::Cycle);
        }
        let resolved: Result<Vec<K>, DpCacheError> = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect();
        self.in_progress.borrow_mut().remove(index);

        let value = self.problem.compute(index, resolved?);
        self.backend
            .borrow_mut()
            .insert(index.clone(), value.clone());
        Ok(value)
    }

    /// Number of values computed so far
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}

/// Builder for [`DpCache`]; both a backend and a problem must be supplied
pub struct DpCacheBuilder<B, P> {
    backend: B,
    problem: P,
}

impl<B, P> DpCacheBuilder<B, P> {
    pub fn backend<B2>(self, backend: B2) -> DpCacheBuilder<B2, P> {
        DpCacheBuilder {
            backend,
            problem: self.problem,
        }
    }

    pub fn problem<P2>(self, problem: P2) -> DpCacheBuilder<B, P2> {
        DpCacheBuilder {
            backend: self.backend,
            problem,
        }
    }

    pub fn build<I, K>(self) -> DpCache<I, K, B, P>
    where
        I: Clone + Hash + Eq,
        K: Clone,
        B: Backend<I, K>,
        P: DpProblem<I, K>,
    {
        DpCache::with_problem(self.backend, self.problem)
    }
}
