//! Search domain types with enforced invariants.
//!
//! - Policy: probability distribution over the full action space, summing to 1.0
//! - Value: game value in range [-1, 1]

use crate::{Result, ZeroError};

/// Tolerance for policy sum validation.
const POLICY_SUM_TOLERANCE: f32 = 1e-5;

/// A probability distribution over actions.
///
/// Invariant: All values are non-negative and sum to 1.0 (±1e-5).
///
/// # Example
/// ```
/// use zero_core::Policy;
///
/// let policy = Policy::new(vec![0.3, 0.5, 0.2]).unwrap();
/// assert!((policy.sum() - 1.0).abs() < 1e-5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Policy(Vec<f32>);

impl Policy {
    /// Create a new policy from a probability distribution.
    ///
    /// # Errors
    /// Returns `ZeroError::InvalidPolicy` if the vector is empty, contains a
    /// negative or non-finite entry, or does not sum to 1.0.
    pub fn new(probs: Vec<f32>) -> Result<Self> {
        check_entries(&probs)?;

        let sum: f32 = probs.iter().sum();
        if (sum - 1.0).abs() > POLICY_SUM_TOLERANCE {
            return Err(ZeroError::InvalidPolicy(format!(
                "policy sum {sum} is not 1.0 (tolerance {POLICY_SUM_TOLERANCE})"
            )));
        }

        Ok(Self(probs))
    }

    /// Create a policy from raw non-negative weights, normalizing them to sum to 1.0.
    ///
    /// # Errors
    /// Returns error if any weight is negative or all weights are zero.
    pub fn from_unnormalized(weights: Vec<f32>) -> Result<Self> {
        check_entries(&weights)?;

        let sum: f32 = weights.iter().sum();
        if sum <= 0.0 {
            return Err(ZeroError::InvalidPolicy(
                "cannot normalize: all weights are zero".to_string(),
            ));
        }

        Ok(Self(weights.into_iter().map(|w| w / sum).collect()))
    }

    /// Restrict a raw evaluator policy to the `legal` indices and renormalize.
    ///
    /// Mass on indices outside `legal` is discarded. When the legal entries
    /// carry no mass at all the result is uniform over `legal`.
    ///
    /// # Errors
    /// Returns error if `legal` is empty, an index is out of range, or a legal
    /// entry is negative or non-finite.
    pub fn masked(raw: &[f32], legal: &[usize]) -> Result<Self> {
        if legal.is_empty() {
            return Err(ZeroError::InvalidPolicy(
                "cannot mask policy with no legal actions".to_string(),
            ));
        }

        let mut probs = vec![0.0; raw.len()];
        let mut sum = 0.0;
        for &index in legal {
            let p = *raw.get(index).ok_or_else(|| {
                ZeroError::InvalidPolicy(format!(
                    "legal index {index} outside policy of length {}",
                    raw.len()
                ))
            })?;
            if !p.is_finite() || p < 0.0 {
                return Err(ZeroError::InvalidPolicy(format!(
                    "legal index {index} has prior {p}"
                )));
            }
            probs[index] = p;
            sum += p;
        }

        if sum > 0.0 {
            for &index in legal {
                probs[index] /= sum;
            }
        } else {
            let uniform = 1.0 / legal.len() as f32;
            for &index in legal {
                probs[index] = uniform;
            }
        }

        Ok(Self(probs))
    }

    /// Create a uniform policy over the given number of actions.
    ///
    /// # Errors
    /// Returns error if num_actions is zero.
    pub fn uniform(num_actions: usize) -> Result<Self> {
        if num_actions == 0 {
            return Err(ZeroError::InvalidPolicy(
                "cannot create uniform policy with 0 actions".to_string(),
            ));
        }

        Ok(Self(vec![1.0 / num_actions as f32; num_actions]))
    }

    /// A policy with all mass on `index`.
    pub fn one_hot(num_actions: usize, index: usize) -> Result<Self> {
        if index >= num_actions {
            return Err(ZeroError::InvalidPolicy(format!(
                "one-hot index {index} outside {num_actions} actions"
            )));
        }
        let mut probs = vec![0.0; num_actions];
        probs[index] = 1.0;
        Ok(Self(probs))
    }

    /// Get the probability at the given index.
    pub fn get(&self, index: usize) -> Option<f32> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f32 {
        self.0.iter().sum()
    }

    /// Index of the maximum probability; ties resolve to the lowest index.
    pub fn argmax(&self) -> usize {
        let mut best = 0;
        for (i, &p) in self.0.iter().enumerate() {
            if p > self.0[best] {
                best = i;
            }
        }
        best
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl std::ops::Index<usize> for Policy {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

fn check_entries(values: &[f32]) -> Result<()> {
    if values.is_empty() {
        return Err(ZeroError::InvalidPolicy(
            "policy cannot be empty".to_string(),
        ));
    }
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(ZeroError::InvalidPolicy(
            "policy contains negative or non-finite values".to_string(),
        ));
    }
    Ok(())
}

/// A game value estimate.
///
/// Invariant: Value is in range [-1, 1], from the perspective of the player
/// to move: +1 winning, -1 losing, 0 drawn or balanced.
///
/// # Example
/// ```
/// use zero_core::Value;
///
/// let value = Value::new(0.5).unwrap();
/// assert_eq!(value.negate().get(), -0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Value(f32);

impl Value {
    pub const WIN: Self = Self(1.0);
    pub const LOSS: Self = Self(-1.0);
    pub const DRAW: Self = Self(0.0);

    /// # Errors
    /// Returns `ZeroError::InvalidValue` if the value is NaN or outside [-1, 1].
    pub fn new(value: f32) -> Result<Self> {
        if !(-1.0..=1.0).contains(&value) {
            return Err(ZeroError::InvalidValue(format!(
                "value {value} is outside range [-1, 1]"
            )));
        }
        Ok(Self(value))
    }

    /// Create a value by clamping to [-1, 1], for accumulated floating point drift.
    pub fn clamped(value: f32) -> Self {
        Self(value.clamp(-1.0, 1.0))
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// The same position seen by the opponent.
    pub fn negate(self) -> Self {
        Self(-self.0)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<Value> for f32 {
    fn from(v: Value) -> f32 {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_new_valid() {
        let policy = Policy::new(vec![0.3, 0.5, 0.2]).unwrap();
        assert_eq!(policy.len(), 3);
        assert!((policy.sum() - 1.0).abs() < POLICY_SUM_TOLERANCE);
    }

    #[test]
    fn test_policy_new_rejects_bad_input() {
        assert!(Policy::new(vec![0.3, 0.3, 0.3]).is_err());
        assert!(Policy::new(vec![0.5, -0.2, 0.7]).is_err());
        assert!(Policy::new(vec![f32::NAN, 1.0]).is_err());
        assert!(Policy::new(vec![]).is_err());
    }

    #[test]
    fn test_policy_from_unnormalized() {
        let policy = Policy::from_unnormalized(vec![1.0, 2.0, 1.0]).unwrap();
        assert!((policy[0] - 0.25).abs() < 1e-5);
        assert!((policy[1] - 0.50).abs() < 1e-5);
        assert!(Policy::from_unnormalized(vec![0.0, 0.0]).is_err());
    }

    #[test]
    fn test_policy_masked_discards_illegal_mass() {
        // Index 1 is illegal and carries most of the raw mass.
        let policy = Policy::masked(&[0.1, 0.8, 0.1], &[0, 2]).unwrap();
        assert!((policy[0] - 0.5).abs() < 1e-6);
        assert_eq!(policy[1], 0.0);
        assert!((policy[2] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_policy_masked_zero_mass_falls_back_to_uniform() {
        let policy = Policy::masked(&[0.0, 1.0, 0.0, 0.0], &[0, 2, 3]).unwrap();
        for index in [0, 2, 3] {
            assert!((policy[index] - 1.0 / 3.0).abs() < 1e-6);
        }
        assert_eq!(policy[1], 0.0);
    }

    #[test]
    fn test_policy_masked_errors() {
        assert!(Policy::masked(&[1.0], &[]).is_err());
        assert!(Policy::masked(&[1.0], &[3]).is_err());
        assert!(Policy::masked(&[-1.0, 2.0], &[0, 1]).is_err());
        // Negative mass on an illegal index is ignored.
        assert!(Policy::masked(&[-1.0, 2.0], &[1]).is_ok());
    }

    #[test]
    fn test_policy_argmax_prefers_lowest_index_on_ties() {
        let policy = Policy::new(vec![0.4, 0.2, 0.4]).unwrap();
        assert_eq!(policy.argmax(), 0);
    }

    #[test]
    fn test_policy_one_hot() {
        let policy = Policy::one_hot(4, 2).unwrap();
        assert_eq!(policy.as_slice(), &[0.0, 0.0, 1.0, 0.0]);
        assert!(Policy::one_hot(4, 4).is_err());
    }

    #[test]
    fn test_value_range() {
        assert!(Value::new(1.0).is_ok());
        assert!(Value::new(-1.0).is_ok());
        assert!(Value::new(1.1).is_err());
        assert!(Value::new(f32::NAN).is_err());
        assert_eq!(Value::clamped(-1.5).get(), -1.0);
        assert_eq!(Value::WIN.negate(), Value::LOSS);
    }
}
