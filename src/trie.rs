use crate::node::Node;

/// Case-insensitive prefix tree over `a`-`z` with per-node occurrence weights.
#[derive(Default, Debug)]
pub struct Trie {
    root: Node,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `word`, reusing any existing prefix path, and marks its last node
    /// terminal. Insertion stops at the first non-letter: nodes created before
    /// it are kept and nothing is marked terminal. Returns whether the word was
    /// fully recorded.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for letter in word.chars() {
            node = match node.add_child(Node::new(letter)) {
                Ok(child) => child,
                Err(err) => {
                    log::trace!(word = word, error:% = err; "insertion aborted");
                    return false;
                }
            };
        }
        node.set_terminal();
        true
    }

    fn find(&self, prefix: &str) -> Option<&Node> {
        prefix
            .chars()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }

    /// True if some inserted word starts with `prefix`. Always true for `""`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// True if `word` itself was inserted.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.find(word).map_or(false, |node| node.is_terminal())
    }

    /// Occurrences that passed through `prefix`, or `None` if it is absent.
    pub fn weight(&self, prefix: &str) -> Option<u64> {
        self.find(prefix).map(|node| node.weight())
    }

    /// Counts one occurrence of `word` on every node of its path, starting at
    /// the root. Stops at the first letter with no child; never creates nodes.
    pub fn accumulate_weight(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        node.increment_weight();
        for letter in word.chars() {
            let Ok(child) = node.get_child_mut(letter) else {
                return;
            };
            child.increment_weight();
            node = child;
        }
    }

    /// Up to `limit` completions of `prefix`, in the order they were found.
    ///
    /// Every child of the prefix node is tried, heaviest first. Below that
    /// level the walk is greedy: it stops at the first terminal node and
    /// yields that word, otherwise it follows only the heaviest child. Lighter
    /// siblings and longer words past a terminal node are never visited, so
    /// this is not a global top-`limit` by weight. The prefix itself is not
    /// returned.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut suggestions = vec![];
        let Some(start) = self.find(prefix) else {
            return suggestions;
        };

        for child in start.children_sorted_by_weight_desc() {
            if suggestions.len() >= limit {
                break;
            }
            let mut word = prefix.to_string();
            walk_heaviest(child, &mut word, &mut suggestions);
        }

        suggestions
    }

    pub fn print_tree(&self) {
        print!("{self}");
    }
}

fn walk_heaviest(mut node: &Node, word: &mut String, suggestions: &mut Vec<String>) {
    loop {
        word.push(node.letter());
        if node.is_terminal() {
            suggestions.push(word.clone());
            break;
        }

        let Some(&next) = node.children_sorted_by_weight_desc().first() else {
            break;
        };
        node = next;
    }
}

/// Depth-first dump, two spaces per level, `.` after terminal letters.
impl std::fmt::Display for Trie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut stack = self.root.children().rev().map(|v| (v, 0)).collect::<Vec<_>>();

        while let Some((node, depth)) = stack.pop() {
            writeln!(
                f,
                "{:indent$}{}{} ({})",
                "",
                node.letter(),
                if node.is_terminal() { "." } else { "" },
                node.weight(),
                indent = depth * 2,
            )?;
            stack.extend(node.children().rev().map(|v| (v, depth + 1)));
        }

        Ok(())
    }
}
