//! Ordered, duplicate-free solution sequence.

use std::collections::{HashSet, VecDeque};

use super::types::Element;

/// An ordered sequence of distinct elements.
///
/// Insertion order is the aging order of the carousel phase: elements
/// leave from the front and enter at the back, both in O(1). A hash set
/// mirrors the deque so membership tests and set differences never scan
/// the sequence.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Element>", into = "Vec<Element>")
)]
pub struct Solution {
    order: VecDeque<Element>,
    members: HashSet<Element>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, element: Element) -> bool {
        self.members.contains(&element)
    }

    /// Appends `element` at the back (youngest position).
    ///
    /// Returns `false` and leaves the solution unchanged if the element is
    /// already present.
    pub fn push_back(&mut self, element: Element) -> bool {
        if !self.members.insert(element) {
            return false;
        }
        self.order.push_back(element);
        true
    }

    /// Removes and returns the oldest element.
    pub fn pop_front(&mut self) -> Option<Element> {
        let element = self.order.pop_front()?;
        self.members.remove(&element);
        Some(element)
    }

    /// Removes and returns the most recently inserted element.
    pub fn pop_back(&mut self) -> Option<Element> {
        let element = self.order.pop_back()?;
        self.members.remove(&element);
        Some(element)
    }

    /// Oldest element, if any.
    pub fn front(&self) -> Option<Element> {
        self.order.front().copied()
    }

    /// Most recently inserted element, if any.
    pub fn back(&self) -> Option<Element> {
        self.order.back().copied()
    }

    /// Iterates in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.order.iter()
    }

    /// Elements of `self` that are not in `other`, in unspecified order.
    pub fn difference<'a>(&'a self, other: &'a Solution) -> impl Iterator<Item = Element> + 'a {
        self.members.difference(&other.members).copied()
    }

    /// Copies the sequence into a vector, oldest first.
    pub fn to_vec(&self) -> Vec<Element> {
        self.order.iter().copied().collect()
    }
}

/// Two solutions are equal when they hold the same elements in the same order.
impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for Solution {}

/// Builds a solution from a sequence, keeping the first occurrence of
/// each repeated element.
impl FromIterator<Element> for Solution {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut solution = Solution::new();
        for element in iter {
            solution.push_back(element);
        }
        solution
    }
}

impl From<Vec<Element>> for Solution {
    fn from(elements: Vec<Element>) -> Self {
        elements.into_iter().collect()
    }
}

impl From<Solution> for Vec<Element> {
    fn from(solution: Solution) -> Self {
        solution.order.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Element;
    type IntoIter = std::collections::vec_deque::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
