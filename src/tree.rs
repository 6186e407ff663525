//! Syntax tree for natural-language text
//!
//! Text is represented as a tree of typed nodes: a root containing
//! sentences, each sentence containing word, punctuation, and whitespace
//! tokens. Every node carries its source span so diagnostics can point
//! back at the exact text they describe.

use serde::{Deserialize, Serialize};

/// A single location in the source text.
///
/// Lines and columns are 1-based, offsets are 0-based byte-agnostic
/// character counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// A half-open region of source text: `start` is the first character,
/// `end` points one past the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: Point,
    pub end: Point,
}

impl Span {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}

/// Node types produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Sentence,
    Word,
    Punctuation,
    WhiteSpace,
}

/// A node in the text tree.
///
/// Interior nodes (`Root`, `Sentence`) carry children; token nodes
/// (`Word`, `Punctuation`, `WhiteSpace`) carry the literal text they
/// cover in `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Flow control for [`Node::visit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Descend into this node's children.
    Continue,
    /// Do not descend into this node's children.
    Skip,
}

impl Node {
    /// Create a token node covering `span` with literal text `value`.
    pub fn token(kind: NodeKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            span,
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Create an interior node; its span stretches from the first child's
    /// start to the last child's end.
    pub fn parent(kind: NodeKind, children: Vec<Node>) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
            _ => Span::default(),
        };
        Self {
            kind,
            span,
            value: String::new(),
            children,
        }
    }

    /// Render the text this node covers by concatenating token values in
    /// order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if self.children.is_empty() {
            out.push_str(&self.value);
        } else {
            for child in &self.children {
                child.collect_text(out);
            }
        }
    }

    /// Preorder traversal. The callback decides per node whether its
    /// children are visited; returning [`Visit::Skip`] from a matched node
    /// prevents descending into it after it has been handled.
    pub fn visit<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Node) -> Visit,
    {
        if f(self) == Visit::Skip {
            return;
        }
        for child in &self.children {
            child.visit(f);
        }
    }

    /// The word tokens contained in this node, in source order.
    ///
    /// Does not descend into nested sentences: a sentence's own words are
    /// its own business.
    pub fn words(&self) -> Vec<&Node> {
        let mut words = Vec::new();
        for child in &self.children {
            child.visit(&mut |node| match node.kind {
                NodeKind::Word => {
                    words.push(node);
                    Visit::Skip
                }
                NodeKind::Sentence => Visit::Skip,
                _ => Visit::Continue,
            });
        }
        words
    }

    /// The sentence nodes contained in this tree, in source order.
    pub fn sentences(&self) -> Vec<&Node> {
        let mut sentences = Vec::new();
        self.visit(&mut |node| {
            if node.kind == NodeKind::Sentence {
                sentences.push(node);
                Visit::Skip
            } else {
                Visit::Continue
            }
        });
        sentences
    }
}
