use crate::trie::Trie;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct LoadStats {
    /// Whitespace-delimited tokens read, duplicates included.
    pub tokens: u64,
    /// Tokens seen for the first time, compared case-sensitively.
    pub distinct: u64,
    /// Distinct tokens whose insertion stopped at a non-letter.
    pub skipped: u64,
}

/// Builds a trie from whitespace-delimited text. Each distinct token is
/// inserted on its first occurrence and every occurrence adds weight.
pub fn load(reader: impl std::io::BufRead) -> std::io::Result<(Trie, LoadStats)> {
    let mut trie = Trie::new();
    let mut stats = LoadStats::default();
    let mut seen = std::collections::HashSet::new();

    for line in reader.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            stats.tokens += 1;
            if !seen.contains(word) {
                seen.insert(word.to_string());
                stats.distinct += 1;
                if !trie.insert(word) {
                    stats.skipped += 1;
                }
            }
            trie.accumulate_weight(word);
        }
    }

    Ok((trie, stats))
}
