//! # runetrie
//!
//! Multi-pattern exact matching with the Aho-Corasick algorithm over Unicode code points.
//!
//! The automaton is a trie of `char`-labeled states augmented with failure and output
//! links. It is built once from an ordered list of patterns and can then be searched
//! any number of times, from any number of threads. Every occurrence is reported,
//! including overlapping and nested ones, at UTF-8 byte offsets of the text.
//!
//! ## Examples
//!
//! ```
//! use runetrie::Automaton;
//!
//! let patterns = vec!["a", "ab", "bab", "bc", "bca", "c", "caa"];
//! let pma = Automaton::new(patterns);
//!
//! let matches = pma.search("abccab").unwrap();
//!
//! assert_eq!(vec![0, 4], matches[&0]);
//! assert_eq!(vec![0, 4], matches[&1]);
//! assert_eq!(vec![1], matches[&3]);
//! assert_eq!(vec![2, 3], matches[&5]);
//! assert_eq!(4, matches.len());
//! ```
//!
//! Offsets count bytes, not characters:
//!
//! ```
//! use runetrie::Automaton;
//!
//! let pma = Automaton::new(["бв", "в"]);
//!
//! let mut it = pma.find_overlapping_iter("абвваб");
//!
//! let m = it.next().unwrap();
//! assert_eq!((2, 6, 0), (m.start(), m.end(), m.pattern()));
//!
//! let m = it.next().unwrap();
//! assert_eq!((4, 6, 1), (m.start(), m.end(), m.pattern()));
//!
//! let m = it.next().unwrap();
//! assert_eq!((6, 8, 1), (m.start(), m.end(), m.pattern()));
//!
//! assert_eq!(None, it.next());
//! ```

mod builder;
pub mod dictionary;
mod dump;
pub mod errors;
mod iter;
mod state;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::builder::AutomatonBuilder;
use crate::state::{State, ROOT_STATE_ID};

pub use crate::errors::RunetrieError;
pub use crate::iter::FindOverlappingIterator;

/// Occurrences found by [`Automaton::search`]: pattern index to ascending start offsets.
pub type Matches = BTreeMap<usize, Vec<usize>>;

/// Match result.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match {
    length: usize,
    end: usize,
    pattern: usize,
}

impl Match {
    /// Starting byte position of the match.
    #[inline(always)]
    pub const fn start(&self) -> usize {
        self.end - self.length
    }

    /// Ending byte position of the match.
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Index of the matched pattern in the input list.
    #[inline(always)]
    pub const fn pattern(&self) -> usize {
        self.pattern
    }
}

/// Pattern match automaton implemented with the Aho-Corasick algorithm.
///
/// The automaton is immutable once built. Searching only reads it, so a single
/// instance can be shared between threads without synchronization.
#[derive(Clone)]
pub struct Automaton {
    states: Vec<State>,
    num_patterns: usize,
}

impl Automaton {
    /// Creates a new [`Automaton`] from input patterns.
    /// The index `i` is associated with `patterns[i]`.
    ///
    /// Construction never fails:
    ///
    ///  - an empty pattern is ignored and never matches, and
    ///  - when a pattern occurs more than once, the last index wins.
    ///
    /// # Arguments
    ///
    /// * `patterns` - List of patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use runetrie::Automaton;
    ///
    /// let pma = Automaton::new(["abc", "", "abc"]);
    ///
    /// assert_eq!(1, pma.num_patterns());
    /// assert_eq!(Some(2), pma.contains("abc"));
    /// assert_eq!(None, pma.contains(""));
    /// ```
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        AutomatonBuilder::new().build(patterns)
    }

    /// Finds every occurrence of every pattern in the given haystack.
    ///
    /// Returns a mapping from pattern index to the start byte offsets of its occurrences
    /// in ascending order. Patterns without occurrences are absent from the mapping.
    /// `None` means nothing was found, which is always the case for an empty haystack
    /// or an automaton without patterns.
    ///
    /// # Arguments
    ///
    /// * `haystack` - String to search for.
    ///
    /// # Examples
    ///
    /// ```
    /// use runetrie::Automaton;
    ///
    /// let pma = Automaton::new(["ab", "b", "x"]);
    ///
    /// let matches = pma.search("abab").unwrap();
    /// assert_eq!(vec![0, 2], matches[&0]);
    /// assert_eq!(vec![1, 3], matches[&1]);
    /// assert!(!matches.contains_key(&2));
    ///
    /// assert_eq!(None, pma.search("yyy"));
    /// assert_eq!(None, pma.search(""));
    /// ```
    pub fn search(&self, haystack: &str) -> Option<Matches> {
        if self.num_patterns == 0 || haystack.is_empty() {
            return None;
        }
        let mut matches = Matches::new();
        for m in self.find_overlapping_iter(haystack) {
            matches.entry(m.pattern()).or_default().push(m.start());
        }
        Some(matches).filter(|matches| !matches.is_empty())
    }

    /// Returns an iterator of overlapping matches in the given haystack.
    ///
    /// Matches are reported in increasing order of their end positions. Among those
    /// ending at the same position, the longest comes first, followed by the patterns
    /// on its output chain from the nearest to the farthest.
    ///
    /// # Arguments
    ///
    /// * `haystack` - String to search for.
    ///
    /// # Examples
    ///
    /// ```
    /// use runetrie::Automaton;
    ///
    /// let patterns = vec!["bcd", "ab", "a"];
    /// let pma = Automaton::new(patterns);
    ///
    /// let mut it = pma.find_overlapping_iter("abcd");
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((0, 1, 2), (m.start(), m.end(), m.pattern()));
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((0, 2, 1), (m.start(), m.end(), m.pattern()));
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((1, 4, 0), (m.start(), m.end(), m.pattern()));
    ///
    /// assert_eq!(None, it.next());
    /// ```
    pub fn find_overlapping_iter<'a, 'h>(
        &'a self,
        haystack: &'h str,
    ) -> FindOverlappingIterator<'a, 'h> {
        FindOverlappingIterator::new(self, haystack)
    }

    /// Returns the index of the given pattern if it is registered.
    pub fn contains<P>(&self, pattern: P) -> Option<usize>
    where
        P: AsRef<str>,
    {
        let mut state_id = ROOT_STATE_ID;
        for c in pattern.as_ref().chars() {
            state_id = self.states[state_id].child_id(c)?;
        }
        self.states[state_id].terminal.map(|terminal| terminal.index)
    }

    /// Returns the total number of states this automaton has, including the root.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of distinct patterns registered.
    pub fn num_patterns(&self) -> usize {
        self.num_patterns
    }

    /// Returns the total amount of heap used by this automaton in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.states.capacity() * std::mem::size_of::<State>()
            + self.states.iter().map(State::heap_bytes).sum::<usize>()
    }

    /// Moves from `state_id` on `c`, following failure links until a state with a
    /// matching child is found. Falls back to the root, which accepts any character.
    #[inline(always)]
    fn next_state_id(&self, mut state_id: usize, c: char) -> usize {
        loop {
            if let Some(child_id) = self.states[state_id].child_id(c) {
                return child_id;
            }
            if state_id == ROOT_STATE_ID {
                return ROOT_STATE_ID;
            }
            state_id = self.states[state_id].fail;
        }
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

/// Builds an [`Automaton`] from an ordered list of patterns.
///
/// Shorthand for [`Automaton::new`].
pub fn build<I, P>(patterns: I) -> Automaton
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    Automaton::new(patterns)
}

/// Searches `haystack` with `automaton`.
///
/// Shorthand for [`Automaton::search`].
pub fn search(automaton: &Automaton, haystack: &str) -> Option<Matches> {
    automaton.search(haystack)
}
