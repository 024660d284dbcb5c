use super::*;

use crate::state::ROOT_STATE_ID;

fn find_state(pma: &Automaton, path: &str) -> Option<usize> {
    let mut state_id = ROOT_STATE_ID;
    for c in path.chars() {
        state_id = pma.states[state_id].child_id(c)?;
    }
    Some(state_id)
}

fn collect(pma: &Automaton, haystack: &str) -> Vec<(usize, usize, usize)> {
    pma.find_overlapping_iter(haystack)
        .map(|m| (m.start(), m.end(), m.pattern()))
        .collect()
}

#[test]
fn test_empty_automaton() {
    let pma = Automaton::new(Vec::<String>::new());
    assert_eq!(1, pma.num_states());
    assert_eq!(0, pma.num_patterns());
    assert_eq!(None, pma.states[ROOT_STATE_ID].terminal);
    assert_eq!(None, pma.states[ROOT_STATE_ID].label);
    assert_eq!(None, pma.states[ROOT_STATE_ID].parent);
}

#[test]
fn test_links() {
    /*
     * (path, terminal, fail, output)
     */
    let expected = [
        ("", false, "", None),
        ("a", true, "", None),
        ("ab", true, "b", None),
        ("b", false, "", None),
        ("ba", false, "a", Some("a")),
        ("bab", true, "ab", Some("ab")),
        ("bc", true, "c", Some("c")),
        ("bca", true, "ca", Some("a")),
        ("c", true, "", None),
        ("ca", false, "a", Some("a")),
        ("caa", true, "a", Some("a")),
    ];

    let pma = Automaton::new(["a", "ab", "bab", "bc", "bca", "c", "caa"]);
    assert_eq!(expected.len(), pma.num_states());
    assert_eq!(7, pma.num_patterns());

    for &(path, terminal, fail, output) in &expected {
        let state_id = find_state(&pma, path).unwrap();
        let s = &pma.states[state_id];
        assert_eq!(terminal, s.terminal.is_some(), "terminal of {:?}", path);
        if state_id != ROOT_STATE_ID {
            assert_eq!(fail, pma.path(s.fail), "fail of {:?}", path);
        }
        assert_eq!(
            output.map(String::from),
            s.output.map(|output_id| pma.path(output_id)),
            "output of {:?}",
            path
        );
    }
}

#[test]
fn test_parent_child_consistency() {
    let pma = Automaton::new(["он", "она", "оно", "они", "нас", "наш"]);
    for (state_id, s) in pma.states.iter().enumerate().skip(1) {
        let parent = &pma.states[s.parent.unwrap()];
        assert_eq!(Some(state_id), parent.child_id(s.label.unwrap()));
        assert_eq!(parent.depth + 1, s.depth);
    }
}

#[test]
fn test_fails_reach_root() {
    let pma = Automaton::new(["aaaa", "aaa", "aa", "baaa", "abab", "bb"]);
    for s in &pma.states {
        let mut fail_id = s.fail;
        let mut depth = s.depth;
        let mut steps = 0;
        while fail_id != ROOT_STATE_ID {
            assert!(pma.states[fail_id].depth < depth);
            depth = pma.states[fail_id].depth;
            fail_id = pma.states[fail_id].fail;
            steps += 1;
        }
        assert!(steps <= s.depth);
    }
}

#[test]
fn test_output_chain_visits_terminal_suffixes() {
    let pma = Automaton::new(["aaaa", "aaa", "aa", "a", "baaa"]);
    let state_id = find_state(&pma, "baaa").unwrap();
    let mut chain = vec![];
    let mut output = pma.states[state_id].output;
    while let Some(output_id) = output {
        chain.push(pma.path(output_id));
        output = pma.states[output_id].output;
    }
    assert_eq!(vec!["aaa", "aa", "a"], chain);
}

#[test]
fn test_fail_to_root_when_no_suffix() {
    let pma = Automaton::new(["xy", "yz"]);
    let state_id = find_state(&pma, "xy").unwrap();
    assert_eq!(find_state(&pma, "y"), Some(pma.states[state_id].fail));
    let state_id = find_state(&pma, "yz").unwrap();
    assert_eq!(ROOT_STATE_ID, pma.states[state_id].fail);
}

#[test]
fn test_search_regression() {
    let pma = Automaton::new(["a", "ab", "bab", "bc", "bca", "c", "caa"]);
    let expected: Matches = [
        (0, vec![0, 4]),
        (1, vec![0, 4]),
        (3, vec![1]),
        (5, vec![2, 3]),
    ]
    .into_iter()
    .collect();
    assert_eq!(Some(expected), pma.search("abccab"));
}

#[test]
fn test_search_multibyte_regression() {
    let pma = Automaton::new(["а", "аб", "баб", "бв", "бва", "в", "ваа"]);
    let expected: Matches = [
        (0, vec![0, "абвв".len()]),
        (1, vec![0, "абвв".len()]),
        (3, vec!["а".len()]),
        (5, vec!["аб".len(), "абв".len()]),
    ]
    .into_iter()
    .collect();
    assert_eq!(Some(expected), pma.search("абвваб"));
}

#[test]
fn test_iterator_order_at_same_end() {
    let pma = Automaton::new(["a", "ab", "bab", "bc", "bca", "c", "caa"]);
    assert_eq!(
        vec![
            (0, 1, 0),
            (0, 2, 1),
            (1, 3, 3),
            (2, 3, 5),
            (3, 4, 5),
            (4, 5, 0),
            (4, 6, 1),
        ],
        collect(&pma, "abccab")
    );
}

#[test]
fn test_nested_matches() {
    let pma = Automaton::new(["he", "she", "his", "hers"]);
    assert_eq!(
        vec![(1, 4, 1), (2, 4, 0), (2, 6, 3)],
        collect(&pma, "ushers")
    );
}

#[test]
fn test_mixed_widths() {
    let pma = Automaton::new(["é", "😀x", "x"]);
    assert_eq!(
        vec![(1, 3, 0), (3, 8, 1), (7, 8, 2)],
        collect(&pma, "aé😀x")
    );
}

#[test]
fn test_empty_pattern_is_ignored() {
    let pma = Automaton::new(["", "a"]);
    assert_eq!(2, pma.num_states());
    assert_eq!(1, pma.num_patterns());
    assert_eq!(None, pma.contains(""));
    assert_eq!(vec![(0, 1, 1), (1, 2, 1)], collect(&pma, "aa"));
}

#[test]
fn test_duplicate_last_write_wins() {
    let pma = Automaton::new(["ab", "b", "ab"]);
    assert_eq!(2, pma.num_patterns());
    assert_eq!(Some(2), pma.contains("ab"));
    let matches = pma.search("ab").unwrap();
    assert_eq!(None, matches.get(&0));
    assert_eq!(Some(&vec![0]), matches.get(&2));
    assert_eq!(Some(&vec![1]), matches.get(&1));
}

#[test]
fn test_contains() {
    let pma = Automaton::new(["全世界", "世界", "に"]);
    assert_eq!(Some(0), pma.contains("全世界"));
    assert_eq!(Some(1), pma.contains("世界"));
    assert_eq!(Some(2), pma.contains("に"));
    assert_eq!(None, pma.contains("全世"));
    assert_eq!(None, pma.contains("世界中"));
}

#[test]
fn test_search_idempotent() {
    let pma = Automaton::new(["全世界", "世界", "に"]);
    let first = pma.search("全世界中に世界");
    assert_eq!(first, pma.search("全世界中に世界"));
    assert_eq!(Some(&vec![3, 15]), first.as_ref().and_then(|m| m.get(&1)));
}

#[test]
fn test_dump() {
    let pma = Automaton::new(["ab", "b"]);
    let expected = "\
path: \"\"
terminal: none
fail: none
output: none
children: 2
    path: \"a\"
    terminal: none
    fail: \"\"
    output: none
    children: 1
        path: \"ab\"
        terminal: index = 0, len = 2
        fail: \"b\"
        output: \"b\"
        children: 0
    path: \"b\"
    terminal: index = 1, len = 1
    fail: \"\"
    output: none
    children: 0
";
    assert_eq!(expected, format!("{:?}", pma));
}

#[test]
fn test_free_functions() {
    let pma = build(vec![String::from("ab"), String::from("b")]);
    assert_eq!(pma.search("abab"), search(&pma, "abab"));
}

#[test]
fn test_default() {
    let pma = Automaton::default();
    assert_eq!(1, pma.num_states());
    assert_eq!(None, pma.search("abc"));
}
