use runetrie::dictionary::load_dictionary_file;

fn main() {
    for path in ["data/dictionary.en.txt", "data/dictionary.ru.txt"] {
        println!("== {} ==", path);
        let patterns = load_dictionary_file(path).unwrap();
        show_memory_stats(&patterns);
    }
}

fn show_memory_stats(patterns: &[String]) {
    {
        let pma = runetrie::Automaton::new(patterns);
        println!(
            "runetrie: {} patterns, {} states",
            pma.num_patterns(),
            pma.num_states()
        );
        format_memory("runetrie", pma.heap_bytes());
    }
    {
        let pma = aho_corasick::AhoCorasick::new(patterns).unwrap();
        format_memory("aho_corasick", pma.memory_usage());
    }
}

fn format_memory(title: &str, bytes: usize) {
    println!(
        "{}: {} bytes, {:.3} MiB",
        title,
        bytes,
        bytes as f64 / (1024.0 * 1024.0)
    );
}
