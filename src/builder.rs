use crate::state::{State, Terminal, ROOT_STATE_ID};
use crate::Automaton;

/// Builder of an [`Automaton`].
///
/// Construction runs in three passes:
///
/// 1. [`add`](Self::add) assembles the trie, recording the states created at each depth;
/// 2. [`build_fails`](Self::build_fails) resolves failure links level by level;
/// 3. [`build_outputs`](Self::build_outputs) resolves output links.
pub(crate) struct AutomatonBuilder {
    states: Vec<State>,
    // levels[d] holds the ids of the states at depth d + 1.
    levels: Vec<Vec<usize>>,
    num_patterns: usize,
}

impl AutomatonBuilder {
    pub(crate) fn new() -> Self {
        Self {
            states: vec![State::root()],
            levels: vec![],
            num_patterns: 0,
        }
    }

    /// Builds an [`Automaton`] from input patterns.
    /// The index `i` is associated with `patterns[i]`.
    pub(crate) fn build<I, P>(mut self, patterns: I) -> Automaton
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        for (index, pattern) in patterns.into_iter().enumerate() {
            self.add(index, pattern.as_ref());
        }
        let levels = std::mem::take(&mut self.levels);
        self.build_fails(&levels);
        self.build_outputs(&levels);
        Automaton {
            states: self.states,
            num_patterns: self.num_patterns,
        }
    }

    /// Inserts a pattern into the trie.
    ///
    /// An empty pattern never reaches the per-character loop, so it leaves the root
    /// non-terminal and is ignored. A duplicate pattern overwrites the terminal of
    /// the earlier one.
    pub(crate) fn add(&mut self, index: usize, pattern: &str) {
        if pattern.is_empty() {
            return;
        }

        let mut state_id = ROOT_STATE_ID;
        for c in pattern.chars() {
            state_id = match self.states[state_id].child_id(c) {
                Some(child_id) => child_id,
                None => self.push_child(state_id, c),
            };
        }

        let terminal = Terminal {
            index,
            length: pattern.len(),
        };
        if self.states[state_id].terminal.replace(terminal).is_none() {
            self.num_patterns += 1;
        }
    }

    fn push_child(&mut self, parent_id: usize, c: char) -> usize {
        let child_id = self.states.len();
        let depth = self.states[parent_id].depth + 1;
        self.states.push(State::new(c, parent_id, depth));
        self.states[parent_id].edges.insert(c, child_id);
        if self.levels.len() < depth {
            self.levels.resize_with(depth, Vec::new);
        }
        self.levels[depth - 1].push(child_id);
        child_id
    }

    /// Resolves failure links in increasing depth order, so that the failure link
    /// of every parent is settled before its children are visited.
    pub(crate) fn build_fails(&mut self, levels: &[Vec<usize>]) {
        for &state_id in levels.iter().flatten() {
            let s = &self.states[state_id];
            let (parent_id, c) = match (s.parent, s.label) {
                (Some(parent_id), Some(c)) => (parent_id, c),
                _ => continue,
            };
            let new_fail_id = if parent_id == ROOT_STATE_ID {
                ROOT_STATE_ID
            } else {
                let mut fail_id = self.states[parent_id].fail;
                loop {
                    if let Some(child_fail_id) = self.states[fail_id].child_id(c) {
                        break child_fail_id;
                    }
                    if fail_id == ROOT_STATE_ID {
                        break ROOT_STATE_ID;
                    }
                    fail_id = self.states[fail_id].fail;
                }
            };
            self.states[state_id].fail = new_fail_id;
        }
    }

    /// Resolves output links.
    ///
    /// The failure link of a state is strictly shallower, so in level order its
    /// output link is already settled and the chain never has to be walked again.
    pub(crate) fn build_outputs(&mut self, levels: &[Vec<usize>]) {
        for &state_id in levels.iter().flatten() {
            let fail_id = self.states[state_id].fail;
            let output = self.states[fail_id].first_output(fail_id);
            self.states[state_id].output = output;
        }
    }
}
