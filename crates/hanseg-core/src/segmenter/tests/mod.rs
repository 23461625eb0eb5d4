mod laws;

use crate::dict::FrequencyTable;

pub(super) fn table(content: &str) -> FrequencyTable {
    FrequencyTable::load_str(content, "test").unwrap()
}

pub(super) fn cut_vec<'a>(t: &FrequencyTable, sentence: &'a str) -> Vec<&'a str> {
    super::cut(t, sentence).collect()
}
