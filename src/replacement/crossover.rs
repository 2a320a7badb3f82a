//! Built-in crossover operators.
//!
//! - [`SinglePoint`]: one-point cut, any vector genome
//! - [`OrderedSegment`]: segment of parent A, rest in parent B's order
//! - [`OrderCrossover`]: Davis' OX, keeps relative order around a segment
//!
//! The permutation operators never duplicate or drop elements when both
//! parents are permutations of the same set.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use super::types::Crossover;
use crate::error::{Result, SearchError};
use rand::{Rng, RngCore};

/// One-point crossover: `a[..cut] ++ b[cut..]`.
///
/// The cut is drawn from `0..min(len a, len b)`; a longer `b` contributes
/// its tail, so the child has `b`'s length.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePoint;

impl<T: Clone> Crossover<Vec<T>> for SinglePoint {
    fn crossover(&self, a: &Vec<T>, b: &Vec<T>, rng: &mut dyn RngCore) -> Result<Vec<T>> {
        let size = a.len().min(b.len());
        if size == 0 {
            return Ok(b.clone());
        }
        let cut = rng.random_range(0..size);
        let mut child = Vec::with_capacity(b.len());
        child.extend_from_slice(&a[..cut]);
        child.extend_from_slice(&b[cut..]);
        Ok(child)
    }

    fn name(&self) -> &'static str {
        "single-point"
    }
}

/// Permutation breed: a random slice `a[i..j]` followed by the elements of
/// `b` not in that slice, in `b`'s order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedSegment;

impl<T: Clone + PartialEq> Crossover<Vec<T>> for OrderedSegment {
    fn crossover(&self, a: &Vec<T>, b: &Vec<T>, rng: &mut dyn RngCore) -> Result<Vec<T>> {
        let start = rng.random_range(0..=a.len());
        let end = rng.random_range(start..=a.len());
        let segment = &a[start..end];

        let mut child = segment.to_vec();
        child.extend(b.iter().filter(|item| !segment.contains(item)).cloned());
        Ok(child)
    }

    fn name(&self) -> &'static str {
        "ordered-segment"
    }
}

/// Order Crossover (OX) for permutations of `0..n`.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Select a random segment `[start, end]` from parent `a`
/// 2. Copy segment to child at the same positions
/// 3. Fill remaining positions with elements from `b`, in their order
///    starting after the segment, skipping elements already present
///
/// Parents of different lengths, or that are not permutations of
/// `0..n`, are rejected.
///
/// # Complexity
/// O(n) time, O(n) space
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderCrossover;

impl Crossover<Vec<usize>> for OrderCrossover {
    fn crossover(&self, a: &Vec<usize>, b: &Vec<usize>, rng: &mut dyn RngCore) -> Result<Vec<usize>> {
        let n = a.len();
        if n != b.len() {
            return Err(SearchError::DimensionMismatch {
                expected: n,
                actual: b.len(),
            });
        }
        check_permutation(a)?;
        check_permutation(b)?;
        if n < 2 {
            return Ok(a.clone());
        }

        let (start, end) = random_segment(n, rng);
        let mut child = vec![usize::MAX; n];
        let mut in_segment = vec![false; n];

        for i in start..=end {
            child[i] = a[i];
            in_segment[a[i]] = true;
        }

        // Fill from donor, starting after segment end, wrapping around
        let mut pos = (end + 1) % n;
        for offset in 0..n {
            let val = b[(end + 1 + offset) % n];
            if !in_segment[val] {
                child[pos] = val;
                in_segment[val] = true;
                pos = (pos + 1) % n;
            }
        }

        Ok(child)
    }

    fn name(&self) -> &'static str {
        "order-crossover"
    }
}

/// Fails unless `perm` holds every value of `0..perm.len()` exactly once.
fn check_permutation(perm: &[usize]) -> Result<()> {
    let n = perm.len();
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return Err(SearchError::InvalidDomain(format!(
                "{perm:?} is not a permutation of 0..{n}"
            )));
        }
        seen[v] = true;
    }
    Ok(())
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment(n: usize, rng: &mut dyn RngCore) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::random_permutation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_permutation(v: &[usize], n: usize) -> bool {
        let mut sorted = v.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_single_point_prefix_and_suffix() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = vec![1u8; 8];
        let b = vec![0u8; 8];
        for _ in 0..50 {
            let child = SinglePoint.crossover(&a, &b, &mut rng).unwrap();
            assert_eq!(child.len(), 8);
            let ones = child.iter().take_while(|&&g| g == 1).count();
            assert!(child[ones..].iter().all(|&g| g == 0));
            assert!(ones < 8, "cut is drawn below the length");
        }
    }

    #[test]
    fn test_single_point_empty_parent() {
        let mut rng = StdRng::seed_from_u64(42);
        let child = SinglePoint.crossover(&vec![], &vec![3, 4], &mut rng).unwrap();
        assert_eq!(child, vec![3, 4]);
    }

    #[test]
    fn test_ordered_segment_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = random_permutation(12, &mut rng);
            let b = random_permutation(12, &mut rng);
            let child = OrderedSegment.crossover(&a, &b, &mut rng).unwrap();
            assert!(is_permutation(&child, 12), "{child:?}");
        }
    }

    #[test]
    fn test_order_crossover_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let a = random_permutation(10, &mut rng);
            let b = random_permutation(10, &mut rng);
            let child = OrderCrossover.crossover(&a, &b, &mut rng).unwrap();
            assert!(is_permutation(&child, 10), "{child:?}");
        }
    }

    #[test]
    fn test_order_crossover_identical_parents() {
        let mut rng = StdRng::seed_from_u64(7);
        let a: Vec<usize> = (0..6).collect();
        assert_eq!(OrderCrossover.crossover(&a, &a, &mut rng).unwrap(), a);
    }

    #[test]
    fn test_order_crossover_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(OrderCrossover
            .crossover(&vec![0, 1, 2], &vec![0, 1], &mut rng)
            .is_err());
    }

    #[test]
    fn test_order_crossover_rejects_non_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        let valid = vec![0, 1, 2, 3];
        for bad in [vec![0, 0, 1, 2], vec![0, 1, 2, 4]] {
            for (a, b) in [(&bad, &valid), (&valid, &bad)] {
                assert!(matches!(
                    OrderCrossover.crossover(a, b, &mut rng),
                    Err(SearchError::InvalidDomain(_))
                ));
            }
        }
    }
}
