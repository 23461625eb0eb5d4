use super::load_segmenter;

pub fn info(dict_file: Option<&str>) {
    let segmenter = load_segmenter(dict_file);
    let stats = segmenter.table().stats();
    println!("Keys:        {}", stats.keys);
    println!("Words:       {}", stats.words);
    println!("Prefixes:    {}", stats.keys - stats.words);
    println!("Total freq:  {}", stats.total);
}

pub fn lookup(dict_file: Option<&str>, word: &str) {
    let segmenter = load_segmenter(dict_file);
    match segmenter.table().freq(word) {
        Some(0) => println!("{word}: prefix only"),
        Some(freq) => {
            let total = segmenter.table().total().max(1);
            let log_prob = (freq as f64).ln() - (total as f64).ln();
            println!("{word}: freq={freq} log_prob={log_prob:.4}");
        }
        None => println!("{word}: not found"),
    }
}
