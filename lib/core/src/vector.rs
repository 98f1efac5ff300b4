/// A sparse vector of term weights.
///
/// Only non-zero entries are stored, sorted by dimension index. `dim` is the
/// size of the vector space the entries live in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl Vector {
    /// Build from `(index, weight)` pairs in any order.
    ///
    /// Duplicate indices are summed; zero weights and indices outside `dim`
    /// are dropped.
    #[must_use]
    pub fn new(dim: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(i, _)| i < dim);
        entries.sort_by_key(|&(i, _)| i);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (i, w) in entries {
            match merged.last_mut() {
                Some((last, acc)) if *last == i => *acc += w,
                _ => merged.push((i, w)),
            }
        }
        merged.retain(|&(_, w)| w != 0.0);

        Self {
            dim,
            entries: merged,
        }
    }

    #[must_use]
    pub fn from_dense(data: &[f64]) -> Self {
        Self {
            dim: data.len(),
            entries: data
                .iter()
                .enumerate()
                .filter(|(_, w)| **w != 0.0)
                .map(|(i, w)| (i, *w))
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// True for a zero-dimensional vector
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Number of non-zero entries
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map_or(0.0, |pos| self.entries[pos].1)
    }

    #[must_use]
    pub fn to_dense(&self) -> Vec<f64> {
        let mut data = vec![0.0; self.dim];
        for &(i, w) in &self.entries {
            data[i] = w;
        }
        data
    }

    /// Dot product over the shared non-zero indices
    pub fn dot(&self, other: &Vector) -> f64 {
        if self.dim != other.dim {
            return 0.0;
        }

        let (a, b) = (&self.entries, &other.entries);
        let (mut p, mut q) = (0, 0);
        let mut sum = 0.0;
        while p < a.len() && q < b.len() {
            match a[p].0.cmp(&b[q].0) {
                std::cmp::Ordering::Less => p += 1,
                std::cmp::Ordering::Greater => q += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[p].1 * b[q].1;
                    p += 1;
                    q += 1;
                }
            }
        }
        sum
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Compute cosine similarity with another vector.
    ///
    /// Returns 0.0 when either vector has zero norm or the dimensions differ.
    pub fn cosine_similarity(&self, other: &Vector) -> f64 {
        if self.dim != other.dim {
            return 0.0;
        }

        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        self.dot(other) / (norm_a * norm_b)
    }

    /// Normalize the vector to unit length
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f64::EPSILON {
            let inv_norm = 1.0 / norm;
            for (_, w) in &mut self.entries {
                *w *= inv_norm;
            }
        }
    }

    /// Get normalized copy
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }
}
