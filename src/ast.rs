//! Syntax-tree nodes handed from the parser to the reader.
//!
//! A node carries the grammar rule that produced it, the literal token text
//! for leaves, and ordered children for interior nodes. S-expression nodes
//! keep their bracket punctuation as `Punct` leaf children; the reader is
//! responsible for skipping those.

/// Grammar rule that produced a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tag {
    Root,
    Sexpr,
    Integer,
    Decimal,
    Symbol,
    Punct,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ast {
    pub tag: Tag,
    pub contents: String,
    pub children: Vec<Ast>,
}

impl Ast {
    pub fn leaf<S: AsRef<str>>(tag: Tag, contents: S) -> Ast {
        Ast {
            tag,
            contents: contents.as_ref().to_string(),
            children: Vec::new(),
        }
    }

    pub fn node(tag: Tag, children: Vec<Ast>) -> Ast {
        Ast {
            tag,
            contents: String::new(),
            children,
        }
    }

    pub fn count_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.count_nodes())
            .sum::<usize>()
    }
}
