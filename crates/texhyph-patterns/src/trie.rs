// Pattern trie: character-keyed tree of weight vectors
//
// Every node stands for one segment (the letters on the path from the
// root). A node either carries the weights of a pattern from the table or
// is a placeholder that only links deeper nodes; placeholder weights are
// all zero, so walking through one never changes a result.

use std::fmt;

use hashbrown::HashMap;
use texhyph_core::weights::{Weight, format_weights};

use crate::pattern::Pattern;

// ---------------------------------------------------------------------------
// PatternNode
// ---------------------------------------------------------------------------

/// One node of the pattern trie.
///
/// Invariant: `weights.len() == segment.chars().count() + 1`, and a child's
/// segment is its parent's segment plus exactly one trailing character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternNode {
    segment: String,
    weights: Vec<Weight>,
    /// The table token this node was built from; `None` for placeholders.
    source: Option<String>,
    children: HashMap<char, PatternNode>,
}

impl PatternNode {
    fn placeholder(segment: String) -> Self {
        let len = segment.chars().count();
        Self {
            segment,
            weights: vec![0; len + 1],
            source: None,
            children: HashMap::new(),
        }
    }

    /// The letters matched from the root to this node.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// One weight per position around the letters of [`segment`](Self::segment).
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Whether this node exists only to link deeper nodes.
    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }

    /// The table token that defined this node, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The character that leads from the parent to this node. `None` at the root.
    pub fn last_char(&self) -> Option<char> {
        self.segment.chars().next_back()
    }

    /// The child reached by `c`.
    pub fn child(&self, c: char) -> Option<&PatternNode> {
        self.children.get(&c)
    }

    /// Children in no particular order.
    pub fn children(&self) -> impl Iterator<Item = &PatternNode> {
        self.children.values()
    }

    /// Walk down from this node along `rest`.
    ///
    /// Yields this node first, then one node per character of `rest` for
    /// as long as a child matches the next character.
    pub fn walk<'a>(&'a self, rest: &'a [char]) -> Walk<'a> {
        Walk {
            next: Some(self),
            rest,
        }
    }

    fn count_patterns(&self) -> usize {
        let own = usize::from(!self.is_placeholder());
        own + self.children.values().map(Self::count_patterns).sum::<usize>()
    }
}

/// Human-readable dump: `(f [1, 0] (o [0, 0, 0] (o [0, 2, 0, 0])))`.
///
/// Children are listed in character order so dumps are stable; matching
/// never depends on that order.
impl fmt::Display for PatternNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut first = true;
        if let Some(c) = self.last_char() {
            write!(f, "{c} {}", format_weights(&self.weights))?;
            first = false;
        }
        let mut children: Vec<&PatternNode> = self.children.values().collect();
        children.sort_by_key(|node| node.last_char());
        for child in children {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{child}")?;
            first = false;
        }
        write!(f, ")")
    }
}

/// Iterator returned by [`PatternNode::walk`].
pub struct Walk<'a> {
    next: Option<&'a PatternNode>,
    rest: &'a [char],
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a PatternNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        if let Some((&c, tail)) = self.rest.split_first() {
            self.next = node.child(c);
            self.rest = tail;
        }
        Some(node)
    }
}

// ---------------------------------------------------------------------------
// PatternTrie
// ---------------------------------------------------------------------------

/// What happened when a pattern was inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// The segment had no pattern yet (a new node or a promoted placeholder).
    Added,
    /// A pattern with the same segment existed and was overwritten.
    Replaced {
        /// Source token of the overwritten pattern.
        previous: String,
    },
    /// The token had no letters and was not stored.
    Ignored,
}

/// Trie of hyphenation patterns keyed by character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTrie {
    root: PatternNode,
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: PatternNode::placeholder(String::new()),
        }
    }

    /// Insert a decoded pattern.
    ///
    /// Missing intermediate nodes are created as placeholders. If the final
    /// node already holds a pattern, its weights are overwritten (last write
    /// wins) and the old source token is returned in
    /// [`Insertion::Replaced`]. Existing children are kept either way.
    pub fn insert(&mut self, pattern: Pattern) -> Insertion {
        if pattern.segment.is_empty() {
            return Insertion::Ignored;
        }

        let mut prefix = String::with_capacity(pattern.segment.len());
        let mut node = &mut self.root;
        for &c in &pattern.segment {
            prefix.push(c);
            node = node
                .children
                .entry(c)
                .or_insert_with(|| PatternNode::placeholder(prefix.clone()));
        }

        node.weights = pattern.weights;
        match node.source.replace(pattern.source) {
            None => Insertion::Added,
            Some(previous) => Insertion::Replaced { previous },
        }
    }

    /// Decode and insert a pattern token such as `hy3ph`.
    pub fn insert_token(&mut self, token: &str) -> Insertion {
        self.insert(Pattern::parse(token))
    }

    /// The top-level node for patterns starting with `c`.
    ///
    /// `None` when no pattern starts with `c`, which is not an error.
    pub fn lookup(&self, c: char) -> Option<&PatternNode> {
        self.root.child(c)
    }

    /// The root node. Its segment is empty and it never matches anything.
    pub fn root(&self) -> &PatternNode {
        &self.root
    }

    /// Number of stored patterns (placeholders excluded).
    pub fn len(&self) -> usize {
        self.root.count_patterns()
    }

    /// Returns true if no pattern has been stored.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}
