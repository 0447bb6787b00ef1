//! Fixed-length vector of per-scenario values with elementwise arithmetic

use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, Mul};

/// One value per fund-growth scenario
///
/// The length is fixed at construction. Binary operations expect both
/// operands to come from the same run and therefore have equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioVector(Vec<f64>);

impl ScenarioVector {
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Self(values.to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Growth factors `1 + r` for a vector of rates
    pub fn growth_factors(&self) -> Self {
        self + 1.0
    }

    /// Apply `f` to every element
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.iter().map(|&v| f(v)).collect())
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for ScenarioVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl Index<usize> for ScenarioVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl Mul<&ScenarioVector> for &ScenarioVector {
    type Output = ScenarioVector;

    fn mul(self, rhs: &ScenarioVector) -> ScenarioVector {
        debug_assert_eq!(self.len(), rhs.len(), "scenario vectors differ in length");
        ScenarioVector(self.0.iter().zip(&rhs.0).map(|(a, b)| a * b).collect())
    }
}

impl Add<f64> for &ScenarioVector {
    type Output = ScenarioVector;

    fn add(self, rhs: f64) -> ScenarioVector {
        self.map(|v| v + rhs)
    }
}

impl Add<f64> for ScenarioVector {
    type Output = ScenarioVector;

    fn add(mut self, rhs: f64) -> ScenarioVector {
        self.0.iter_mut().for_each(|v| *v += rhs);
        self
    }
}
