use std::sync::Arc;
use std::thread;

use runetrie::Automaton;

#[test]
fn test_automaton_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<Automaton>();
    assert_sync::<Automaton>();
}

#[test]
fn test_concurrent_search() {
    let pma = Automaton::new(["а", "аб", "баб", "бв", "бва", "в", "ваа"]);
    let expected = pma.search("абвваб");

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(expected, pma.search("абвваб"));
                }
            });
        }
    });
}

#[test]
fn test_concurrent_search_with_different_texts() {
    let pma = Arc::new(Automaton::new(["he", "she", "his", "hers"]));
    let texts = ["ushers", "his hers", "she", "nothing"];

    let handles: Vec<_> = texts
        .iter()
        .map(|&text| {
            let pma = Arc::clone(&pma);
            thread::spawn(move || pma.search(text))
        })
        .collect();

    for (handle, text) in handles.into_iter().zip(texts) {
        assert_eq!(pma.search(text), handle.join().unwrap());
    }
}
