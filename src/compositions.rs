use std::collections::{BTreeSet, HashMap};

use log::{debug, trace};

use crate::error::{invalid, Result};
use crate::intervals::Row;

/// Memo table for composition enumeration.
///
/// Entries are never evicted, so a cache kept across calls grows with every
/// distinct argument it has seen. The free functions [`compositions`] and
/// [`weak_compositions`] use a fresh cache per call.
#[derive(Clone, Debug, Default)]
pub struct CompositionCache {
    ascending_memo: HashMap<(u32, u32, u32), Vec<Row<u32>>>,
    weak_memo: HashMap<(u32, u32), Vec<Row<u32>>>,
}

impl CompositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ascending_memo.len() + self.weak_memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.ascending_memo.clear();
        self.weak_memo.clear();
    }

    /// All ways to write `n` as `k` positive parts in non-decreasing order.
    pub fn compositions(&mut self, n: u32, k: u32) -> Result<BTreeSet<Row<u32>>> {
        if k < 1 {
            return invalid(format!("cannot split {n} into {k} parts"));
        }
        if n < k {
            return invalid(format!("{n} is too small to split into {k} positive parts"));
        }
        let found = self.ascending(n, k, 1).into_iter().collect::<BTreeSet<_>>();
        debug!("{} compositions of {n} into {k} parts", found.len());
        Ok(found)
    }

    fn ascending(&mut self, n: u32, k: u32, min: u32) -> Vec<Row<u32>> {
        if let Some(hit) = self.ascending_memo.get(&(n, k, min)) {
            trace!("memo hit for ({n}, {k}, {min})");
            return hit.clone();
        }
        let mut result = vec![];
        if k == 1 {
            if n >= min {
                result.push(vec![n]);
            }
        } else {
            for first in min..n {
                for tail in self.ascending(n - first, k - 1, first) {
                    let mut parts = Vec::with_capacity(k as usize);
                    parts.push(first);
                    parts.extend(tail);
                    result.push(parts);
                }
            }
        }
        self.ascending_memo.insert((n, k, min), result.clone());
        result
    }

    /// Every ordered way to write `total` as `parts` non-negative values, in lexicographic order.
    pub fn weak_compositions(&mut self, parts: u32, total: u32) -> Result<Vec<Row<u32>>> {
        if parts < 1 {
            return invalid(format!("cannot split {total} into {parts} parts"));
        }
        let found = self.weak(parts, total);
        debug!("{} weak compositions of {total} into {parts} parts", found.len());
        Ok(found)
    }

    fn weak(&mut self, parts: u32, total: u32) -> Vec<Row<u32>> {
        if let Some(hit) = self.weak_memo.get(&(parts, total)) {
            trace!("memo hit for ({parts}, {total})");
            return hit.clone();
        }
        let mut result = vec![];
        if parts == 1 {
            result.push(vec![total]);
        } else {
            for first in 0..=total {
                for tail in self.weak(parts - 1, total - first) {
                    let mut seq = Vec::with_capacity(parts as usize);
                    seq.push(first);
                    seq.extend(tail);
                    result.push(seq);
                }
            }
        }
        self.weak_memo.insert((parts, total), result.clone());
        result
    }
}

pub fn compositions(n: u32, k: u32) -> Result<BTreeSet<Row<u32>>> {
    CompositionCache::new().compositions(n, k)
}

pub fn weak_compositions(parts: u32, total: u32) -> Result<Vec<Row<u32>>> {
    CompositionCache::new().weak_compositions(parts, total)
}
