//! The intercepted sequence.
//!
//! [`HookedList`] is an ordered, indexable container whose every structural
//! change runs through its [`Hooks`]. Each public operation is decomposed into
//! elementary steps:
//!
//! | Operation | Steps |
//! |-----------|-------|
//! | [`append`](HookedList::append), [`insert`](HookedList::insert) | one add |
//! | [`extend`](HookedList::extend), [`concat_in_place`](HookedList::concat_in_place) | one add per value, each at the live end |
//! | [`set`](HookedList::set) | one replace |
//! | [`set_slice`](HookedList::set_slice) | pairwise replaces, then surplus adds or removes |
//! | [`remove`](HookedList::remove), [`pop`](HookedList::pop), [`delete`](HookedList::delete) | one remove |
//! | [`clear`](HookedList::clear) | one remove per element, last to first |
//! | [`sort`](HookedList::sort), [`reverse`](HookedList::reverse) | one replace per moved position |
//!
//! A guard returning [`Verdict::Cancel`](crate::Verdict::Cancel) skips only the
//! step it was asked about. Steps accepted earlier in the same operation stay
//! applied, including when a later step fails.
//!
//! # Re-entrancy
//!
//! Hooks receive `&mut HookedList<T>` and may run any operation on it, or on
//! other lists they captured. After a guard returns, the step's target is
//! re-resolved against the live storage. Adds clamp to the current length.
//! Value removes relocate the value. Positional removes and replaces never
//! act on an element their guard was not shown: if the guard changed the list
//! at all, the step is dropped as stale.
//!
//! # Example
//!
//! ```
//! use hookedup_list::{HookedList, Hooks, Verdict};
//!
//! let hooks = Hooks::new()
//!     .pre_add(|list: &mut HookedList<u32>, _: &u32| Ok(Verdict::proceed_if(list.len() < 4)));
//!
//! let list = HookedList::with_items(0..7, hooks).unwrap();
//! assert_eq!(list, [0, 1, 2, 3]);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::ops::Index;

use crate::error::{ListError, ListResult};
use crate::hooks::{HookEvent, Hooks, StepKind, Verdict};
use crate::slice::SliceSpec;

// ─────────────────────────────────────────────────────────────────────────────
// Step plumbing
// ─────────────────────────────────────────────────────────────────────────────

/// Where an add step lands once its guard has let it through.
#[derive(Debug, Clone, Copy)]
enum Placement {
    /// After the last element.
    End,
    /// At the given position, clamped to the live length.
    At(usize),
}

/// Result of running one elementary step.
#[derive(Debug)]
enum Outcome<R = ()> {
    /// Storage was mutated; carries the displaced value for removes.
    Applied(R),
    /// The guard vetoed the step.
    Cancelled,
    /// The guard changed the list out from under the step.
    Stale,
}

impl<R> Outcome<R> {
    fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

/// Positional steps do not follow their element once a guard has changed
/// the list.
fn displaced<T>(_: &[T], _: usize) -> Option<usize> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// HookedList
// ─────────────────────────────────────────────────────────────────────────────

/// An ordered sequence whose adds, removes and replaces run through hooks.
///
/// Indices on the mutating API are `isize`: negative values count from the
/// end, so `-1` is the last element.
pub struct HookedList<T> {
    /// Backing storage. Only this type's step functions mutate it.
    items: Vec<T>,
    /// Callbacks fixed at construction.
    hooks: Hooks<T>,
    /// Bumped on every change to `items`. Tells a pending step whether its
    /// guard reshaped the list.
    revision: u64,
}

impl<T> Default for HookedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HookedList<T> {
    /// Creates an empty list without hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hooks(Hooks::new())
    }

    /// Creates an empty list that runs every mutation through `hooks`.
    #[must_use]
    pub fn with_hooks(hooks: Hooks<T>) -> Self {
        Self {
            items: Vec::new(),
            hooks,
            revision: 0,
        }
    }

    /// Creates a list without hooks holding `values`.
    pub fn from_items(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: values.into_iter().collect(),
            hooks: Hooks::new(),
            revision: 0,
        }
    }

    /// Returns the hooks this list was built with.
    #[must_use]
    pub fn hooks(&self) -> &Hooks<T> {
        &self.hooks
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the contents.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the contents.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the element at `index`, which may be negative.
    pub fn get(&self, index: isize) -> ListResult<&T> {
        let index = self.resolve_index(index)?;
        Ok(&self.items[index])
    }

    /// First element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Consumes the list and returns its contents.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Maps a possibly negative index onto a live position.
    fn resolve_index(&self, index: isize) -> ListResult<usize> {
        let len = self.items.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };

        match resolved {
            Some(position) if position < len => Ok(position),
            _ => Err(ListError::IndexOutOfRange { index, len }),
        }
    }
}

impl<T: PartialEq> HookedList<T> {
    /// Returns `true` if an element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> ListResult<usize> {
        self.items
            .iter()
            .position(|item| item == value)
            .ok_or(ListError::ValueNotFound)
    }

    /// Number of elements equal to `value`.
    #[must_use]
    pub fn count(&self, value: &T) -> usize {
        self.items.iter().filter(|item| *item == value).count()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Elementary steps
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Clone> HookedList<T> {
    /// Runs the guard registered for `event`, if any.
    fn guard_element(&mut self, event: HookEvent, value: &T) -> ListResult<Verdict> {
        match self.hooks.element_guard(event) {
            Some(guard) => Ok(guard(self, value)?),
            None => Ok(Verdict::Proceed),
        }
    }

    /// Runs the observer registered for `event`, if any.
    fn observe_element(&mut self, event: HookEvent, value: &T) -> ListResult<()> {
        if let Some(observer) = self.hooks.element_observer(event) {
            observer(self, value)?;
        }
        Ok(())
    }

    fn add_step(&mut self, placement: Placement, value: T) -> ListResult<Outcome> {
        if self.guard_element(HookEvent::PreAdd, &value)?.is_cancel() {
            tracing::trace!(event = %HookEvent::PreAdd, len = self.items.len(), "step cancelled");
            return Ok(Outcome::Cancelled);
        }

        let len = self.items.len();
        let index = match placement {
            Placement::End => len,
            Placement::At(index) => index.min(len),
        };

        let observed = self
            .hooks
            .is_registered(HookEvent::PostAdd)
            .then(|| value.clone());
        self.items.insert(index, value);
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(kind = %StepKind::Add, index, len = self.items.len(), "step applied");

        if let Some(value) = observed {
            self.observe_element(HookEvent::PostAdd, &value)?;
        }
        Ok(Outcome::Applied(()))
    }

    /// Removes the element at `index`. When the guard changed the list,
    /// `resolve` re-targets the step against the live storage, or drops it.
    fn remove_step(
        &mut self,
        index: usize,
        resolve: impl FnOnce(&[T], usize) -> Option<usize>,
    ) -> ListResult<Outcome<T>> {
        let revision = self.revision;
        if let Some(guard) = self.hooks.element_guard(HookEvent::PreRemove) {
            let Some(candidate) = self.items.get(index).cloned() else {
                return Ok(Outcome::Stale);
            };
            if guard(self, &candidate)?.is_cancel() {
                tracing::trace!(event = %HookEvent::PreRemove, index, "step cancelled");
                return Ok(Outcome::Cancelled);
            }
        }

        let target = if self.revision == revision {
            (index < self.items.len()).then_some(index)
        } else {
            resolve(&self.items, index)
        };
        let Some(index) = target else {
            tracing::trace!(kind = %StepKind::Remove, index, "stale step dropped");
            return Ok(Outcome::Stale);
        };

        let removed = self.items.remove(index);
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(kind = %StepKind::Remove, index, len = self.items.len(), "step applied");

        self.observe_element(HookEvent::PostRemove, &removed)?;
        Ok(Outcome::Applied(removed))
    }

    fn replace_step(&mut self, index: usize, new: T) -> ListResult<Outcome> {
        let revision = self.revision;
        if let Some(guard) = self.hooks.replace_guard() {
            let Some(old) = self.items.get(index).cloned() else {
                return Ok(Outcome::Stale);
            };
            if guard(self, &old, &new)?.is_cancel() {
                tracing::trace!(event = %HookEvent::PreReplace, index, "step cancelled");
                return Ok(Outcome::Cancelled);
            }
        }

        if self.revision != revision {
            tracing::trace!(kind = %StepKind::Replace, index, "stale step dropped");
            return Ok(Outcome::Stale);
        }

        let observer = self.hooks.replace_observer();
        let Some(slot) = self.items.get_mut(index) else {
            tracing::trace!(kind = %StepKind::Replace, index, "stale step dropped");
            return Ok(Outcome::Stale);
        };
        self.revision = self.revision.wrapping_add(1);

        match observer {
            Some(observer) => {
                let current = new.clone();
                let old = core::mem::replace(slot, new);
                tracing::trace!(kind = %StepKind::Replace, index, "step applied");
                observer(self, &old, &current)?;
            }
            None => {
                *slot = new;
                tracing::trace!(kind = %StepKind::Replace, index, "step applied");
            }
        }
        Ok(Outcome::Applied(()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Creates a list with `hooks`, seeding it from `values` through the add
    /// pipeline so that `pre-add` and `post-add` fire for every seed element.
    pub fn with_items(values: impl IntoIterator<Item = T>, hooks: Hooks<T>) -> ListResult<Self> {
        let mut list = Self::with_hooks(hooks);
        list.extend(values)?;
        Ok(list)
    }

    /// Returns a new list sharing these hooks, seeded with this list's
    /// contents followed by `values`. Every element goes through `pre-add`.
    pub fn concat(&self, values: impl IntoIterator<Item = T>) -> ListResult<Self> {
        let seed: Vec<T> = self.items.iter().cloned().chain(values).collect();
        Self::with_items(seed, self.hooks.clone())
    }

    /// Copies the contents into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Copies the elements addressed by `slice`.
    pub fn slice(&self, slice: impl Into<SliceSpec>) -> ListResult<Vec<T>> {
        let resolved = slice.into().resolve(self.items.len())?;
        Ok(resolved
            .positions()
            .map(|position| self.items[position].clone())
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Adding
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds `value` after the last element.
    pub fn append(&mut self, value: T) -> ListResult<()> {
        self.add_step(Placement::End, value)?;
        Ok(())
    }

    /// Adds `value` before position `index`.
    ///
    /// Negative indices count from the end; indices past either end clamp,
    /// so inserting never fails on bounds.
    pub fn insert(&mut self, index: isize, value: T) -> ListResult<()> {
        let len = self.items.len();
        let position = if index < 0 {
            len.saturating_sub(index.unsigned_abs())
        } else {
            index.unsigned_abs()
        };
        self.add_step(Placement::At(position), value)?;
        Ok(())
    }

    /// Appends every value in order. Each add is attempted at the end index
    /// current at that moment, so a cancelled add leaves no gap.
    pub fn extend(&mut self, values: impl IntoIterator<Item = T>) -> ListResult<()> {
        tracing::debug!(op = "extend", len = self.items.len(), "compound operation");
        for value in values {
            self.add_step(Placement::End, value)?;
        }
        Ok(())
    }

    /// In-place concatenation (`+=`). Same steps as [`extend`](Self::extend).
    pub fn concat_in_place(&mut self, values: impl IntoIterator<Item = T>) -> ListResult<()> {
        self.extend(values)
    }

    /// In-place repetition (`*=`).
    ///
    /// `0` clears the list. Otherwise the current contents are appended
    /// `times - 1` more times, each copy element by element through `pre-add`.
    pub fn repeat_in_place(&mut self, times: usize) -> ListResult<()> {
        tracing::debug!(op = "repeat", times, len = self.items.len(), "compound operation");
        if times == 0 {
            return self.clear();
        }

        let snapshot = self.items.clone();
        for _ in 1..times {
            self.extend(snapshot.iter().cloned())?;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Replacing
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the element at `index` (`seq[i] = v`).
    pub fn set(&mut self, index: isize, value: T) -> ListResult<()> {
        let position = self.resolve_index(index)?;
        self.replace_step(position, value)?;
        Ok(())
    }

    /// Assigns `values` to the positions addressed by `slice` (`seq[a:b] = values`).
    ///
    /// For contiguous slices the overlapping positions are replaced pairwise,
    /// left to right. Surplus incoming values are then added one by one after
    /// the last replaced position; surplus existing elements are removed one by
    /// one. Every surplus existing element gets exactly one removal attempt:
    /// when it is vetoed the cursor moves past it.
    ///
    /// Extended slices (step other than 1) require exactly as many values as
    /// addressed positions and decompose into replaces only.
    pub fn set_slice(
        &mut self,
        slice: impl Into<SliceSpec>,
        values: impl IntoIterator<Item = T>,
    ) -> ListResult<()> {
        let slice = slice.into();
        let values: Vec<T> = values.into_iter().collect();
        let resolved = slice.resolve(self.items.len())?;
        tracing::debug!(
            op = "set_slice",
            addressed = resolved.len(),
            incoming = values.len(),
            "compound operation"
        );

        if !slice.is_contiguous() {
            if resolved.len() != values.len() {
                return Err(ListError::ExtendedSliceMismatch {
                    expected: resolved.len(),
                    actual: values.len(),
                });
            }
            for (position, value) in resolved.positions().zip(values) {
                self.replace_step(position, value)?;
            }
            return Ok(());
        }

        let span = resolved.span();
        let existing = span.len();
        let overlap = existing.min(values.len());
        let mut incoming = values.into_iter();

        for (offset, value) in incoming.by_ref().take(overlap).enumerate() {
            self.replace_step(span.start + offset, value)?;
        }

        let mut cursor = span.start + overlap;
        for value in incoming {
            if self.add_step(Placement::At(cursor), value)?.is_applied() {
                cursor += 1;
            }
        }

        for _ in overlap..existing {
            if !self.remove_step(cursor, displaced)?.is_applied() {
                cursor += 1;
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Removing
    // ─────────────────────────────────────────────────────────────────────────

    /// Removes and returns the last element.
    ///
    /// When the removal is vetoed the element stays in place but is still
    /// returned.
    pub fn pop(&mut self) -> ListResult<T> {
        self.pop_at(-1)
    }

    /// Removes and returns the element at `index`.
    ///
    /// When the removal is vetoed the element stays in place but is still
    /// returned.
    pub fn pop_at(&mut self, index: isize) -> ListResult<T> {
        let position = self.resolve_index(index)?;
        let observed = self.items[position].clone();
        match self.remove_step(position, displaced)? {
            Outcome::Applied(removed) => Ok(removed),
            Outcome::Cancelled | Outcome::Stale => Ok(observed),
        }
    }

    /// Removes the element at `index` (`del seq[i]`).
    pub fn delete(&mut self, index: isize) -> ListResult<()> {
        let position = self.resolve_index(index)?;
        self.remove_step(position, displaced)?;
        Ok(())
    }

    /// Removes the elements addressed by `slice` (`del seq[a:b]`).
    ///
    /// Extended slices remove from the highest position to the lowest so
    /// that pending positions are not renumbered.
    pub fn delete_slice(&mut self, slice: impl Into<SliceSpec>) -> ListResult<()> {
        let slice = slice.into();
        if slice.is_contiguous() {
            return self.set_slice(slice, core::iter::empty());
        }

        let mut positions: Vec<usize> = slice.resolve(self.items.len())?.positions().collect();
        positions.sort_unstable_by(|a, b| b.cmp(a));
        tracing::debug!(op = "delete_slice", addressed = positions.len(), "compound operation");
        for position in positions {
            self.remove_step(position, displaced)?;
        }
        Ok(())
    }

    /// Removes every element, from the last position to the first.
    pub fn clear(&mut self) -> ListResult<()> {
        let len = self.items.len();
        tracing::debug!(op = "clear", len, "compound operation");
        for position in (0..len).rev() {
            self.remove_step(position, displaced)?;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reordering
    // ─────────────────────────────────────────────────────────────────────────

    /// Sorts stably with `compare`, as replaces only.
    pub fn sort_by<F>(&mut self, compare: F) -> ListResult<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let order = self.sorted_order(compare);
        self.apply_order(&order, |_, _| false)
    }

    /// Sorts stably by the key `key` extracts, as replaces only.
    pub fn sort_by_key<K, F>(&mut self, mut key: F) -> ListResult<()>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)))
    }

    /// Reverses the order, as replaces only.
    pub fn reverse(&mut self) -> ListResult<()> {
        let order: Vec<usize> = (0..self.items.len()).rev().collect();
        tracing::debug!(op = "reverse", len = order.len(), "compound operation");
        self.apply_order(&order, |_, _| false)
    }

    /// Stable permutation that sorts the current contents by `compare`.
    fn sorted_order<F>(&self, mut compare: F) -> Vec<usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let items = &self.items;
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| compare(&items[a], &items[b]));
        tracing::debug!(op = "sort", len = order.len(), "compound operation");
        order
    }

    /// Moves the element at `order[i]` to position `i`, in ascending position
    /// order. Positions whose source is unchanged, or whose incoming value
    /// `same` judges equal to the current one, fire nothing.
    fn apply_order(&mut self, order: &[usize], same: impl Fn(&T, &T) -> bool) -> ListResult<()> {
        let items = &self.items;
        let moves: Vec<(usize, T)> = order
            .iter()
            .enumerate()
            .filter(|&(position, &source)| {
                position != source && !same(&items[position], &items[source])
            })
            .map(|(position, &source)| (position, items[source].clone()))
            .collect();

        for (position, value) in moves {
            self.replace_step(position, value)?;
        }
        Ok(())
    }
}

impl<T: Clone + PartialEq> HookedList<T> {
    /// Removes the first element equal to `value`.
    ///
    /// Fails with [`ListError::ValueNotFound`] before any hook runs when no
    /// element matches. If a guard moves the value, the first remaining copy
    /// is removed; if it removes the value, nothing else is.
    pub fn remove(&mut self, value: &T) -> ListResult<()> {
        let position = self.index_of(value)?;
        let target = value.clone();
        self.remove_step(position, move |items, position| {
            if items.get(position) == Some(&target) {
                Some(position)
            } else {
                items.iter().position(|item| *item == target)
            }
        })?;
        Ok(())
    }
}

impl<T: Clone + Ord> HookedList<T> {
    /// Sorts stably in ascending order, as replaces only. Positions that
    /// already hold an equal value are left alone.
    pub fn sort(&mut self) -> ListResult<()> {
        let order = self.sorted_order(Ord::cmp);
        self.apply_order(&order, |current, incoming| current == incoming)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Clone> Clone for HookedList<T> {
    /// Copies the contents directly and shares the hooks. No hook fires.
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            hooks: self.hooks.clone(),
            revision: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for HookedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookedList")
            .field("items", &self.items)
            .field("hooks", &self.hooks)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Display for HookedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> Index<usize> for HookedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> AsRef<[T]> for HookedList<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a HookedList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for HookedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: PartialEq> PartialEq for HookedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for HookedList<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for HookedList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.items == *other
    }
}

impl<T: PartialEq> PartialEq<[T]> for HookedList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for HookedList<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.items == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for HookedList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhooked_list_behaves_like_vec() {
        let mut list = HookedList::from_items([3, 1, 2]);
        list.append(4).unwrap();
        list.insert(0, 0).unwrap();
        list.set(-1, 5).unwrap();
        assert_eq!(list, [0, 3, 1, 2, 5]);

        assert_eq!(list.pop().unwrap(), 5);
        list.remove(&3).unwrap();
        list.sort().unwrap();
        assert_eq!(list, vec![0, 1, 2]);

        list.reverse().unwrap();
        assert_eq!(list.as_slice(), &[2, 1, 0]);
    }

    #[test]
    fn resolve_index_handles_negative_positions() {
        let list = HookedList::from_items(['a', 'b', 'c']);
        assert_eq!(list.get(0).unwrap(), &'a');
        assert_eq!(list.get(-1).unwrap(), &'c');
        assert_eq!(list.get(-3).unwrap(), &'a');
        assert!(matches!(
            list.get(-4),
            Err(ListError::IndexOutOfRange { index: -4, len: 3 })
        ));
        assert!(matches!(
            list.get(3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn insert_clamps_like_a_sequence() {
        let mut list = HookedList::from_items([1, 2, 3]);
        list.insert(100, 9).unwrap();
        list.insert(-100, 0).unwrap();
        list.insert(-1, 7).unwrap();
        assert_eq!(list, [0, 1, 2, 3, 7, 9]);
    }

    #[test]
    fn empty_list_pop_is_out_of_range() {
        let mut list: HookedList<i32> = HookedList::new();
        assert!(matches!(
            list.pop(),
            Err(ListError::IndexOutOfRange { index: -1, len: 0 })
        ));
    }

    #[test]
    fn order_moves_skip_unchanged_positions() {
        let mut list = HookedList::from_items([1, 2, 3]);
        let order = [0, 2, 1];
        list.apply_order(&order, |_, _| false).unwrap();
        assert_eq!(list, [1, 3, 2]);
    }

    #[test]
    fn display_renders_like_a_list() {
        let list = HookedList::from_items(["a", "b"]);
        assert_eq!(list.to_string(), r#"["a", "b"]"#);
        assert_eq!(HookedList::<u8>::new().to_string(), "[]");
    }

    #[test]
    fn read_helpers() {
        let list = HookedList::from_items([5, 6, 5]);
        assert!(list.contains(&6));
        assert_eq!(list.count(&5), 2);
        assert_eq!(list.index_of(&6).unwrap(), 1);
        assert!(matches!(list.index_of(&7), Err(ListError::ValueNotFound)));
        assert_eq!(list.first(), Some(&5));
        assert_eq!(list.last(), Some(&5));
        assert_eq!(list[1], 6);
        assert_eq!(list.iter().sum::<i32>(), 16);
        assert_eq!((&list).into_iter().count(), 3);
        assert_eq!(list.slice(..).unwrap(), vec![5, 6, 5]);
    }

    #[test]
    fn clone_shares_hooks_without_firing() {
        let hooks = Hooks::new().pre_add(|_: &mut HookedList<i32>, _: &i32| Ok(Verdict::Cancel));
        let list = HookedList::with_hooks(hooks);
        let copy = list.clone();
        assert!(copy.hooks().is_registered(HookEvent::PreAdd));
        assert!(copy.is_empty());
    }
}
