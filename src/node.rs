pub const ALPHABET_LEN: usize = 26;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("not an ascii letter: {0:?}")]
    InvalidCharacter(char),

    #[error("no child for letter {0:?}")]
    NoSuchChild(char),
}

/// One letter position in the trie. The root carries `'\0'` as its letter.
#[derive(Default, Debug)]
pub struct Node {
    letter: char,
    children: [Option<Box<Node>>; ALPHABET_LEN],
    is_terminal: bool,
    weight: u64,
}

/// Maps a letter to its child slot, ignoring case.
pub fn slot_for(letter: char) -> Result<usize, Error> {
    if !letter.is_ascii_alphabetic() {
        return Err(Error::InvalidCharacter(letter));
    }
    Ok(letter.to_ascii_lowercase() as usize - 'a' as usize)
}

impl Node {
    pub fn new(letter: char) -> Self {
        Self {
            letter,
            children: Default::default(),
            is_terminal: false,
            weight: 0,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn set_terminal(&mut self) {
        self.is_terminal = true;
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Saturates at `u64::MAX`.
    pub fn increment_weight(&mut self) {
        self.weight = self.weight.saturating_add(1);
    }

    /// Attaches `node` in the slot for its letter and returns whatever occupies
    /// that slot afterwards. An existing child is kept and `node` is dropped.
    pub fn add_child(&mut self, node: Node) -> Result<&mut Node, Error> {
        let slot = slot_for(node.letter)?;
        Ok(&mut **self.children[slot].get_or_insert_with(|| Box::new(node)))
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn has_child(&self, letter: char) -> bool {
        self.child(letter).is_some()
    }

    pub fn get_child(&self, letter: char) -> Result<&Node, Error> {
        self.children[slot_for(letter)?]
            .as_deref()
            .ok_or(Error::NoSuchChild(letter))
    }

    pub fn get_child_mut(&mut self, letter: char) -> Result<&mut Node, Error> {
        self.children[slot_for(letter)?]
            .as_deref_mut()
            .ok_or(Error::NoSuchChild(letter))
    }

    /// Like [`Node::get_child`], but folds both failure kinds into `None`.
    pub fn child(&self, letter: char) -> Option<&Node> {
        self.get_child(letter).ok()
    }

    /// Non-empty children in slot order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Node> + '_ {
        self.children.iter().flatten().map(|v| v.as_ref())
    }

    /// Non-empty children, heaviest first. Equal weights keep slot order.
    pub fn children_sorted_by_weight_desc(&self) -> Vec<&Node> {
        let mut children = self.children().collect::<Vec<_>>();
        // stable sort, so ties stay in letter order
        children.sort_by(|a, b| b.weight.cmp(&a.weight));
        children
    }
}

/// Tears the subtree down with an explicit stack, so a long chain of
/// single-child nodes does not recurse once per letter.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = self
            .children
            .iter_mut()
            .filter_map(Option::take)
            .collect::<Vec<_>>();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_ignore_case() {
        assert_eq!(slot_for('a'), Ok(0));
        assert_eq!(slot_for('A'), Ok(0));
        assert_eq!(slot_for('z'), Ok(25));
        assert_eq!(slot_for('Q'), slot_for('q'));
    }

    #[test]
    fn slots_reject_non_letters() {
        for c in ['1', '-', ' ', '\'', '\0', 'é', 'ß'] {
            assert_eq!(slot_for(c), Err(Error::InvalidCharacter(c)));
        }
    }

    #[test]
    fn add_child_keeps_existing_subtree() {
        let mut root = Node::default();
        root.add_child(Node::new('d'))
            .unwrap()
            .add_child(Node::new('o'))
            .unwrap();

        let kept = root.add_child(Node::new('D')).unwrap();
        assert_eq!(kept.letter(), 'd');
        assert!(kept.has_child('o'));
        assert_eq!(root.children().count(), 1);
    }

    #[test]
    fn add_child_rejects_non_letters() {
        let mut root = Node::default();
        assert_eq!(
            root.add_child(Node::new('3')).err(),
            Some(Error::InvalidCharacter('3'))
        );
        assert_eq!(root.children().count(), 0);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut root = Node::default();
        root.add_child(Node::new('x')).unwrap();

        assert!(root.has_child('X'));
        assert_eq!(root.get_child('X').unwrap().letter(), 'x');
        assert_eq!(root.get_child('y').err(), Some(Error::NoSuchChild('y')));
        assert_eq!(root.get_child('!').err(), Some(Error::InvalidCharacter('!')));
        assert!(!root.has_child('!'));
    }

    #[test]
    fn weight_saturates() {
        let mut node = Node::new('a');
        node.increment_weight();
        assert_eq!(node.weight(), 1);

        node.weight = u64::MAX;
        node.increment_weight();
        assert_eq!(node.weight(), u64::MAX);
    }

    #[test]
    fn children_sorted_heaviest_first_with_letter_tiebreak() {
        let mut root = Node::default();
        for (letter, weight) in [('c', 2), ('a', 2), ('b', 5), ('d', 0)] {
            root.add_child(Node::new(letter)).unwrap().weight = weight;
        }

        let letters = root
            .children_sorted_by_weight_desc()
            .iter()
            .map(|n| n.letter())
            .collect::<String>();
        assert_eq!(letters, "bacd");
    }

    #[test]
    fn dropping_deep_chain() {
        let mut root = Node::default();
        let mut node = &mut root;
        for _ in 0..200_000 {
            node = node.add_child(Node::new('z')).unwrap();
        }
        drop(root);
    }
}
