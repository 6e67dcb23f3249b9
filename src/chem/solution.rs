use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fixed_point::FixedPoint2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolutionError {
    #[error("adding {requested} would exceed remaining capacity {available}")]
    OverCapacity {
        requested: FixedPoint2,
        available: FixedPoint2,
    },
}

/// A single reagent entry inside a solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReagentQuantity {
    pub reagent: String,
    pub quantity: FixedPoint2,
}

impl ReagentQuantity {
    pub fn new(reagent: impl Into<String>, quantity: FixedPoint2) -> Self {
        Self {
            reagent: reagent.into(),
            quantity,
        }
    }
}

/// Ordered reagent multiset with a volume cap.
///
/// `volume` is always the sum of the entries and never exceeds `max_volume`:
/// every add either fits or is rejected whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    contents: Vec<ReagentQuantity>,
    volume: FixedPoint2,
    max_volume: FixedPoint2,
    #[serde(skip)]
    primary_reagent: Option<String>,
}

impl Default for Solution {
    fn default() -> Self {
        Self::new(FixedPoint2::ZERO)
    }
}

impl Solution {
    pub fn new(max_volume: FixedPoint2) -> Self {
        Self {
            contents: Vec::new(),
            volume: FixedPoint2::ZERO,
            max_volume,
            primary_reagent: None,
        }
    }

    /// A scratch solution with no practical cap.
    pub fn unbounded() -> Self {
        Self::new(FixedPoint2::MAX)
    }

    /// Build a solution sized exactly to hold `reagents`.
    pub fn with_reagents<I>(reagents: I) -> Self
    where
        I: IntoIterator<Item = ReagentQuantity>,
    {
        let mut solution = Self::unbounded();
        for rq in reagents {
            if rq.quantity.is_positive() {
                solution.push(rq.reagent, rq.quantity);
            }
        }
        solution.max_volume = solution.volume;
        solution.refresh_derived();
        solution
    }

    pub fn volume(&self) -> FixedPoint2 {
        self.volume
    }

    pub fn max_volume(&self) -> FixedPoint2 {
        self.max_volume
    }

    pub fn available_volume(&self) -> FixedPoint2 {
        (self.max_volume - self.volume).max(FixedPoint2::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn contents(&self) -> &[ReagentQuantity] {
        &self.contents
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReagentQuantity> {
        self.contents.iter()
    }

    pub fn quantity_of(&self, reagent: &str) -> FixedPoint2 {
        self.contents
            .iter()
            .find(|rq| rq.reagent == reagent)
            .map_or(FixedPoint2::ZERO, |rq| rq.quantity)
    }

    pub fn contains(&self, reagent: &str) -> bool {
        self.quantity_of(reagent).is_positive()
    }

    /// Cached reagent with the largest quantity, as of the last
    /// [`refresh_derived`](Self::refresh_derived).
    pub fn primary_reagent(&self) -> Option<&str> {
        self.primary_reagent.as_deref()
    }

    pub fn grow_capacity(&mut self, by: FixedPoint2) {
        if by.is_positive() {
            self.max_volume += by;
        }
    }

    /// Raise `max_volume` to at least `min`. Never shrinks.
    pub fn ensure_capacity(&mut self, min: FixedPoint2) {
        if min > self.max_volume {
            self.max_volume = min;
        }
    }

    fn push(&mut self, reagent: String, quantity: FixedPoint2) {
        match self.contents.iter_mut().find(|rq| rq.reagent == reagent) {
            Some(rq) => rq.quantity += quantity,
            None => self.contents.push(ReagentQuantity { reagent, quantity }),
        }
        self.volume += quantity;
    }

    pub fn add_reagent(
        &mut self,
        reagent: impl Into<String>,
        quantity: FixedPoint2,
    ) -> Result<(), SolutionError> {
        if !quantity.is_positive() {
            return Ok(());
        }
        let available = self.available_volume();
        if quantity > available {
            return Err(SolutionError::OverCapacity {
                requested: quantity,
                available,
            });
        }
        self.push(reagent.into(), quantity);
        Ok(())
    }

    /// Merge every reagent of `other` in. All-or-nothing.
    pub fn add_solution(&mut self, other: &Solution) -> Result<(), SolutionError> {
        let available = self.available_volume();
        if other.volume > available {
            return Err(SolutionError::OverCapacity {
                requested: other.volume,
                available,
            });
        }
        for rq in &other.contents {
            if rq.quantity.is_positive() {
                self.push(rq.reagent.clone(), rq.quantity);
            }
        }
        Ok(())
    }

    /// Remove up to `quantity` of `reagent`; returns the amount removed.
    pub fn remove_reagent(&mut self, reagent: &str, quantity: FixedPoint2) -> FixedPoint2 {
        let Some(idx) = self.contents.iter().position(|rq| rq.reagent == reagent) else {
            return FixedPoint2::ZERO;
        };
        let entry = &mut self.contents[idx];
        let removed = entry.quantity.min(quantity.max(FixedPoint2::ZERO));
        entry.quantity -= removed;
        if !entry.quantity.is_positive() {
            self.contents.remove(idx);
        }
        self.volume -= removed;
        removed
    }

    pub fn remove_all(&mut self) {
        self.contents.clear();
        self.volume = FixedPoint2::ZERO;
    }

    /// Take `quantity` (or everything, if less is present) out of this
    /// solution, proportionally across reagents.
    pub fn split_solution(&mut self, quantity: FixedPoint2) -> Solution {
        if !quantity.is_positive() || self.is_empty() {
            return Solution::new(FixedPoint2::ZERO);
        }
        if quantity >= self.volume {
            let taken = std::mem::take(&mut self.contents);
            self.volume = FixedPoint2::ZERO;
            return Solution::with_reagents(taken);
        }

        let total = self.volume.hundredths() as i128;
        let want = quantity.hundredths() as i128;
        let mut taken = Vec::with_capacity(self.contents.len());
        let mut remaining = quantity;
        let last = self.contents.len() - 1;
        for (i, rq) in self.contents.iter_mut().enumerate() {
            let share = if i == last {
                remaining.min(rq.quantity)
            } else {
                let raw = rq.quantity.hundredths() as i128 * want / total;
                FixedPoint2::from_hundredths(raw as i64).min(remaining)
            };
            if share.is_positive() {
                rq.quantity -= share;
                remaining -= share;
                taken.push(ReagentQuantity::new(rq.reagent.clone(), share));
            }
        }
        self.contents.retain(|rq| rq.quantity.is_positive());
        self.volume = self.contents.iter().map(|rq| rq.quantity).sum();

        let split = Solution::with_reagents(taken);
        if remaining.is_positive() {
            // Rounding left a few hundredths behind; take them from the largest entry.
            let mut split = split;
            if let Some(rq) = self.contents.iter_mut().max_by_key(|rq| rq.quantity) {
                let extra = remaining.min(rq.quantity);
                rq.quantity -= extra;
                split.max_volume += extra;
                split.push(rq.reagent.clone(), extra);
            }
            self.contents.retain(|rq| rq.quantity.is_positive());
            self.volume = self.contents.iter().map(|rq| rq.quantity).sum();
            split.refresh_derived();
            return split;
        }
        split
    }

    /// Recompute cached values derived from the contents.
    pub fn refresh_derived(&mut self) {
        let mut best: Option<&ReagentQuantity> = None;
        for rq in &self.contents {
            if best.is_none_or(|b| rq.quantity > b.quantity) {
                best = Some(rq);
            }
        }
        self.primary_reagent = best.map(|rq| rq.reagent.clone());
    }
}
