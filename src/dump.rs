use std::fmt;

use crate::state::ROOT_STATE_ID;
use crate::Automaton;

impl Automaton {
    /// Writes a human-readable description of every state, depth first and
    /// indented by depth: its path, terminal, failure link, output link and
    /// number of children.
    ///
    /// # Errors
    ///
    /// [`fmt::Error`] is returned when `wtr` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use runetrie::Automaton;
    ///
    /// let pma = Automaton::new(["ab", "b"]);
    ///
    /// let mut out = String::new();
    /// pma.dump(&mut out).unwrap();
    /// assert!(out.contains(
    ///     "    path: \"b\"\n    terminal: index = 1, len = 1\n    fail: \"\"\n    output: none\n"
    /// ));
    /// ```
    pub fn dump<W>(&self, mut wtr: W) -> fmt::Result
    where
        W: fmt::Write,
    {
        let mut stack = vec![ROOT_STATE_ID];
        while let Some(state_id) = stack.pop() {
            let s = &self.states[state_id];
            let indent = "    ".repeat(s.depth);
            writeln!(wtr, "{}path: {:?}", indent, self.path(state_id))?;
            match s.terminal {
                Some(t) => writeln!(
                    wtr,
                    "{}terminal: index = {}, len = {}",
                    indent, t.index, t.length
                )?,
                None => writeln!(wtr, "{}terminal: none", indent)?,
            }
            if state_id == ROOT_STATE_ID {
                writeln!(wtr, "{}fail: none", indent)?;
            } else {
                writeln!(wtr, "{}fail: {:?}", indent, self.path(s.fail))?;
            }
            match s.output {
                Some(output_id) => {
                    writeln!(wtr, "{}output: {:?}", indent, self.path(output_id))?
                }
                None => writeln!(wtr, "{}output: none", indent)?,
            }
            writeln!(wtr, "{}children: {}", indent, s.edges.len())?;
            stack.extend(s.edges.values().rev());
        }
        Ok(())
    }

    /// Returns the string spelled from the root to the state.
    pub(crate) fn path(&self, mut state_id: usize) -> String {
        let mut path = vec![];
        while let (Some(c), Some(parent_id)) = (
            self.states[state_id].label,
            self.states[state_id].parent,
        ) {
            path.push(c);
            state_id = parent_id;
        }
        path.iter().rev().collect()
    }
}

impl fmt::Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.dump(f)
    }
}
