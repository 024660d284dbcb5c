use std::collections::BTreeMap;

// The root state id.
pub(crate) const ROOT_STATE_ID: usize = 0;

/// Mapping edge labels to child ids using `BTreeMap`.
pub(crate) type EdgeMap = BTreeMap<char, usize>;

/// Pattern registered on a terminal state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Terminal {
    /// Ordinal position of the pattern in the input list.
    pub(crate) index: usize,

    /// The number of bytes of the pattern in UTF-8.
    pub(crate) length: usize,
}

/// State of the trie, stored in the arena of [`Automaton`](crate::Automaton).
///
/// Links between states are arena indices, so the parent, failure and output
/// back-references never own anything.
#[derive(Clone, Debug)]
pub(crate) struct State {
    pub(crate) label: Option<char>,
    pub(crate) parent: Option<usize>,
    pub(crate) depth: usize,
    pub(crate) edges: EdgeMap,
    pub(crate) terminal: Option<Terminal>,
    pub(crate) fail: usize,
    pub(crate) output: Option<usize>,
}

impl State {
    pub(crate) fn root() -> Self {
        Self {
            label: None,
            parent: None,
            depth: 0,
            edges: EdgeMap::new(),
            terminal: None,
            fail: ROOT_STATE_ID,
            output: None,
        }
    }

    pub(crate) fn new(label: char, parent: usize, depth: usize) -> Self {
        Self {
            label: Some(label),
            parent: Some(parent),
            depth,
            edges: EdgeMap::new(),
            terminal: None,
            fail: ROOT_STATE_ID,
            output: None,
        }
    }

    #[inline(always)]
    pub(crate) fn child_id(&self, c: char) -> Option<usize> {
        self.edges.get(&c).copied()
    }

    /// Returns the first state to report when this state is reached:
    /// itself if terminal, otherwise the head of its output chain.
    #[inline(always)]
    pub(crate) fn first_output(&self, state_id: usize) -> Option<usize> {
        if self.terminal.is_some() {
            Some(state_id)
        } else {
            self.output
        }
    }

    pub(crate) fn heap_bytes(&self) -> usize {
        self.edges.len() * (std::mem::size_of::<char>() + std::mem::size_of::<usize>())
    }
}
