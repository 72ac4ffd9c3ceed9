use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    Literal(char),
    AnyChar,                // .
    DigitClass,             // \d
    WordClass,              // \w
    Bracket { set: HashSet<char>, negated: bool }, // [abc] or [^abc]
    Sequence(Vec<Ast>),
    Alternation(Vec<Ast>),  // |
    ZeroOrOne(Box<Ast>),    // ?
    OneOrMore(Box<Ast>),    // +
    ZeroOrMore(Box<Ast>),   // *
    Group(Box<Ast>, usize), // (pattern), capture index
    StartAnchor,            // ^
    EndAnchor,              // $
    Backreference(usize),   // \1 .. \9
}

/// Highest capture index used anywhere in the program.
pub fn group_count(nodes: &[Ast]) -> usize {
    nodes.iter().map(max_group_index).max().unwrap_or(0)
}

fn max_group_index(node: &Ast) -> usize {
    match node {
        Ast::Group(inner, index) => (*index).max(max_group_index(inner)),
        Ast::Sequence(items) | Ast::Alternation(items) => {
            items.iter().map(max_group_index).max().unwrap_or(0)
        }
        Ast::ZeroOrOne(inner) | Ast::OneOrMore(inner) | Ast::ZeroOrMore(inner) => {
            max_group_index(inner)
        }
        _ => 0,
    }
}
