use std::collections::HashSet;

use crate::ast::Ast;

/// Continuation invoked with the position after the node's consumed span.
/// Returning `None` sends the matcher back into the node's remaining
/// alternatives (shorter repetitions, later branches, smaller group spans).
type Continuation<'c, 'a> = &'c mut dyn FnMut(&mut Matcher<'a>, usize) -> Option<usize>;

pub struct Matcher<'a> {
    input: &'a [char],
    captures: Vec<Option<String>>,
}

impl<'a> Matcher<'a> {
    pub fn new(input: &'a [char], group_count: usize) -> Self {
        Self {
            input,
            // +1 because groups are 1-indexed
            captures: vec![None; group_count + 1],
        }
    }

    /// Runs the whole program from `start`, returning the end position of
    /// the first accepted witness. Captures are cleared per attempt and
    /// reflect that witness on success.
    pub fn match_at(&mut self, program: &[Ast], start: usize) -> Option<usize> {
        for capture in &mut self.captures {
            *capture = None;
        }
        self.match_sequence(program, start, &mut |_: &mut Matcher<'a>, end: usize| Some(end))
    }

    pub fn captures(&self) -> &[Option<String>] {
        &self.captures
    }

    fn match_sequence(
        &mut self,
        nodes: &[Ast],
        pos: usize,
        cont: Continuation<'_, 'a>,
    ) -> Option<usize> {
        match nodes.split_first() {
            None => cont(self, pos),
            Some((head, rest)) => {
                self.match_node(head, pos, &mut |m: &mut Matcher<'a>, next: usize| {
                    m.match_sequence(rest, next, &mut *cont)
                })
            }
        }
    }

    fn match_node(&mut self, node: &Ast, pos: usize, cont: Continuation<'_, 'a>) -> Option<usize> {
        match node {
            Ast::Literal(c) => {
                let next = self.match_literal(pos, *c)?;
                cont(self, next)
            }
            Ast::AnyChar => {
                let next = self.match_wildcard(pos)?;
                cont(self, next)
            }
            Ast::DigitClass => {
                let next = self.match_digit(pos)?;
                cont(self, next)
            }
            Ast::WordClass => {
                let next = self.match_word(pos)?;
                cont(self, next)
            }
            Ast::Bracket { set, negated } => {
                let next = self.match_bracket(pos, set, *negated)?;
                cont(self, next)
            }
            Ast::Backreference(index) => {
                let next = self.match_backreference(pos, *index)?;
                cont(self, next)
            }
            Ast::StartAnchor => {
                if pos == 0 {
                    cont(self, pos)
                } else {
                    None
                }
            }
            Ast::EndAnchor => {
                if pos == self.input.len() {
                    cont(self, pos)
                } else {
                    None
                }
            }
            Ast::Sequence(items) => self.match_sequence(items, pos, cont),
            Ast::Alternation(branches) => {
                let entry = self.snapshot_captures();
                for branch in branches {
                    if let Some(end) = self.match_node(branch, pos, &mut *cont) {
                        return Some(end);
                    }
                    self.restore_captures(entry.clone());
                }
                None
            }
            Ast::Group(inner, index) => {
                let entry = self.snapshot_captures();
                let index = *index;
                let result = self.match_node(inner, pos, &mut |m: &mut Matcher<'a>, end: usize| {
                    let text: String = m.input[pos..end].iter().collect();
                    if index < m.captures.len() {
                        m.captures[index] = Some(text);
                    }
                    cont(m, end)
                });
                if result.is_none() {
                    self.restore_captures(entry);
                }
                result
            }
            Ast::OneOrMore(inner) => self.match_one_or_more(inner, pos, cont),
            Ast::ZeroOrMore(inner) => self.match_zero_or_more(inner, pos, cont),
            Ast::ZeroOrOne(inner) => {
                let entry = self.snapshot_captures();
                if let Some(end) = self.match_node(inner, pos, &mut *cont) {
                    return Some(end);
                }
                self.restore_captures(entry);
                cont(self, pos)
            }
        }
    }

    fn match_one_or_more(
        &mut self,
        inner: &Ast,
        pos: usize,
        cont: Continuation<'_, 'a>,
    ) -> Option<usize> {
        let entry = self.snapshot_captures();
        let result = self.match_node(inner, pos, &mut |m: &mut Matcher<'a>, next: usize| {
            if next == pos {
                // a zero-width repetition counts once and stops
                cont(m, next)
            } else {
                m.match_zero_or_more(inner, next, &mut *cont)
            }
        });
        if result.is_none() {
            self.restore_captures(entry);
        }
        result
    }

    // Greedy: extend with one more repetition first, falling back to the
    // tail at the current position only when every longer shape fails.
    fn match_zero_or_more(
        &mut self,
        inner: &Ast,
        pos: usize,
        cont: Continuation<'_, 'a>,
    ) -> Option<usize> {
        let entry = self.snapshot_captures();
        let extended = self.match_node(inner, pos, &mut |m: &mut Matcher<'a>, next: usize| {
            if next == pos {
                return None;
            }
            m.match_zero_or_more(inner, next, &mut *cont)
        });
        if let Some(end) = extended {
            return Some(end);
        }
        self.restore_captures(entry);
        cont(self, pos)
    }

    fn match_literal(&self, pos: usize, literal: char) -> Option<usize> {
        if pos < self.input.len() && self.input[pos] == literal {
            Some(pos + 1)
        } else {
            None
        }
    }

    fn match_wildcard(&self, pos: usize) -> Option<usize> {
        if pos < self.input.len() {
            Some(pos + 1)
        } else {
            None
        }
    }

    fn match_digit(&self, pos: usize) -> Option<usize> {
        if pos < self.input.len() && self.input[pos].is_ascii_digit() {
            Some(pos + 1)
        } else {
            None
        }
    }

    fn match_word(&self, pos: usize) -> Option<usize> {
        if pos < self.input.len() {
            let ch = self.input[pos];
            if ch.is_ascii_alphanumeric() || ch == '_' {
                return Some(pos + 1);
            }
        }
        None
    }

    fn match_bracket(&self, pos: usize, set: &HashSet<char>, negated: bool) -> Option<usize> {
        if pos < self.input.len() {
            let ch = self.input[pos];
            if set.contains(&ch) != negated {
                return Some(pos + 1);
            }
        }
        None
    }

    fn match_backreference(&self, pos: usize, index: usize) -> Option<usize> {
        if index == 0 || index >= self.captures.len() {
            return None;
        }
        let captured = match &self.captures[index] {
            Some(text) => text,
            None => return None,
        };

        let captured_chars: Vec<char> = captured.chars().collect();
        if pos + captured_chars.len() > self.input.len() {
            return None;
        }
        for (i, &ch) in captured_chars.iter().enumerate() {
            if self.input[pos + i] != ch {
                return None;
            }
        }
        Some(pos + captured_chars.len())
    }

    fn snapshot_captures(&self) -> Vec<Option<String>> {
        self.captures.clone()
    }

    fn restore_captures(&mut self, snapshot: Vec<Option<String>>) {
        self.captures = snapshot;
    }
}
