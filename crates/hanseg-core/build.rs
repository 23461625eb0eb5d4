fn main() {
    // Validate embedded resources at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_dict("src/dict/default_dict.txt", include_str!("src/dict/default_dict.txt"));
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

fn validate_dict(path: &str, content: &str) {
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(' ');
        let word = fields.next().unwrap_or("");
        let freq = fields.next().and_then(|f| f.parse::<u64>().ok());
        if word.is_empty() || freq.is_none() {
            panic!("{path}:{} is not a valid dictionary entry: {line}", idx + 1);
        }
    }
}
