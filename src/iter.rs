use std::str::CharIndices;

use crate::state::ROOT_STATE_ID;
use crate::{Automaton, Match};

/// Iterator created by [`Automaton::find_overlapping_iter()`].
pub struct FindOverlappingIterator<'a, 'h> {
    pub(crate) pma: &'a Automaton,
    pub(crate) haystack: CharIndices<'h>,
    pub(crate) state_id: usize,
    pub(crate) end: usize,
    // The next state of the output chain to report at `end`.
    pub(crate) output_id: Option<usize>,
}

impl<'a, 'h> FindOverlappingIterator<'a, 'h> {
    pub(crate) fn new(pma: &'a Automaton, haystack: &'h str) -> Self {
        Self {
            pma,
            haystack: haystack.char_indices(),
            state_id: ROOT_STATE_ID,
            end: 0,
            output_id: None,
        }
    }
}

impl Iterator for FindOverlappingIterator<'_, '_> {
    type Item = Match;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(output_id) = self.output_id {
                let out = &self.pma.states[output_id];
                self.output_id = out.output;
                if let Some(terminal) = out.terminal {
                    return Some(Match {
                        length: terminal.length,
                        end: self.end,
                        pattern: terminal.index,
                    });
                }
                continue;
            }

            let (pos, c) = self.haystack.next()?;
            self.end = pos + c.len_utf8();
            self.state_id = self.pma.next_state_id(self.state_id, c);
            self.output_id = self.pma.states[self.state_id].first_output(self.state_id);
        }
    }
}
