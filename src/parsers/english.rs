//! English sentence/word tokenizer
//!
//! Builds a `Root > Sentence > (Word | Punctuation | WhiteSpace)` tree with
//! exact source spans. Words are maximal alphanumeric runs, permitting
//! interior apostrophes and hyphens ("don't", "well-known"). Sentences end
//! at a terminal punctuation run (`.`, `!`, `?`, `…`), with any trailing
//! closing quotes or brackets attached, when followed by whitespace or end
//! of input. Whitespace between sentences belongs to the root.
//!
//! Abbreviations are not special-cased: "U.S. law" splits. That tradeoff
//! keeps the tokenizer total and predictable; readability scoring treats
//! each fragment as its own (usually gated) sentence.

use crate::tree::{Node, NodeKind, Point, Span};

/// Characters that end a sentence.
fn is_terminal(value: &str) -> bool {
    matches!(value, "." | "!" | "?" | "…")
}

/// Closing characters that stay attached to the sentence they follow.
fn is_closing(value: &str) -> bool {
    matches!(value, "\"" | "'" | "\u{201d}" | "\u{2019}" | ")" | "]")
}

/// Parse `text` into a syntax tree rooted at a [`NodeKind::Root`] node.
///
/// Total over all inputs: empty or punctuation-only text yields a root
/// whose sentences simply contain no words.
pub fn parse(text: &str) -> Node {
    let tokens = tokenize(text);
    let mut children: Vec<Node> = Vec::new();
    let mut current: Vec<Node> = Vec::new();

    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];

        // Whitespace outside a sentence belongs to the root.
        if current.is_empty() && token.kind == NodeKind::WhiteSpace {
            children.push(token.clone());
            index += 1;
            continue;
        }

        current.push(token.clone());

        if token.kind == NodeKind::Punctuation && is_terminal(&token.value) {
            // Attach closing quotes/brackets to the sentence.
            let mut next = index + 1;
            while next < tokens.len()
                && tokens[next].kind == NodeKind::Punctuation
                && is_closing(&tokens[next].value)
            {
                current.push(tokens[next].clone());
                next += 1;
            }

            // Only a following whitespace token (or end of input) closes the
            // sentence; "3.14" keeps its dot.
            let at_boundary = next >= tokens.len() || tokens[next].kind == NodeKind::WhiteSpace;
            if at_boundary {
                children.push(Node::parent(NodeKind::Sentence, std::mem::take(&mut current)));
            }
            index = next;
            continue;
        }

        index += 1;
    }

    if !current.is_empty() {
        children.push(Node::parent(NodeKind::Sentence, current));
    }

    Node::parent(NodeKind::Root, children)
}

/// Split `text` into word, punctuation, and whitespace tokens with spans.
fn tokenize(text: &str) -> Vec<Node> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut column = 1;
    let mut index = 0;

    while index < chars.len() {
        let start = Point::new(line, column, index);
        let c = chars[index];

        if c.is_whitespace() {
            let mut value = String::new();
            while index < chars.len() && chars[index].is_whitespace() {
                value.push(chars[index]);
                if chars[index] == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
                index += 1;
            }
            let end = Point::new(line, column, index);
            tokens.push(Node::token(NodeKind::WhiteSpace, value, Span::new(start, end)));
        } else if c.is_alphanumeric() {
            let mut value = String::new();
            while index < chars.len() {
                let ch = chars[index];
                let part_of_word = ch.is_alphanumeric()
                    || (matches!(ch, '\'' | '\u{2019}' | '-')
                        && !value.is_empty()
                        && index + 1 < chars.len()
                        && chars[index + 1].is_alphanumeric());
                if !part_of_word {
                    break;
                }
                value.push(ch);
                column += 1;
                index += 1;
            }
            let end = Point::new(line, column, index);
            tokens.push(Node::token(NodeKind::Word, value, Span::new(start, end)));
        } else {
            column += 1;
            index += 1;
            let end = Point::new(line, column, index);
            tokens.push(Node::token(
                NodeKind::Punctuation,
                c.to_string(),
                Span::new(start, end),
            ));
        }
    }

    tokens
}
