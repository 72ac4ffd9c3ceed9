use std::cell::RefCell;

use nom::{
    branch::alt,
    character::complete::{anychar, char, none_of},
    combinator::{map, opt, value},
    error::{ErrorKind, ParseError},
    multi::many0,
    sequence::preceded,
    Err, IResult,
};

use crate::ast::Ast;
use crate::error::PatternError;

type PResult<'a, T> = IResult<&'a str, T, PatternError>;

// nom reports generic combinator failures through this trait; anything that
// matters is raised as a specific variant via Err::Failure before it gets
// here.
impl<'a> ParseError<&'a str> for PatternError {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        match input.chars().next() {
            Some(c) => PatternError::Unexpected(c),
            None => PatternError::UnexpectedEnd,
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

struct ParseContext {
    group_counter: RefCell<usize>,
}

impl ParseContext {
    fn new() -> Self {
        Self {
            group_counter: RefCell::new(0),
        }
    }

    // Called at the moment a '(' is consumed, so indices follow the source
    // order of opening parentheses.
    fn next_group_index(&self) -> usize {
        let mut counter = self.group_counter.borrow_mut();
        *counter += 1;
        *counter
    }
}

/// Compiles a pattern string into the top-level node sequence.
///
/// Anchors are only legal at the pattern edges: a leading `^` becomes the
/// first element, an unescaped trailing `$` the last. Both scope over the
/// whole top-level alternation.
pub fn parse_pattern(pattern: &str) -> Result<Vec<Ast>, PatternError> {
    let (pattern, anchored_start) = match pattern.strip_prefix('^') {
        Some(rest) => (rest, true),
        None => (pattern, false),
    };
    let (pattern, anchored_end) = split_end_anchor(pattern);

    let context = ParseContext::new();
    let body = match alternation(pattern, &context) {
        Ok(("", body)) => body,
        Ok((leftover, _)) => return Err(stall_error(leftover)),
        Err(Err::Error(err)) | Err(Err::Failure(err)) => return Err(err),
        Err(Err::Incomplete(_)) => return Err(PatternError::UnexpectedEnd),
    };

    let mut program = Vec::new();
    if anchored_start {
        program.push(Ast::StartAnchor);
    }
    match body {
        Ast::Sequence(items) => program.extend(items),
        node => program.push(node),
    }
    if anchored_end {
        program.push(Ast::EndAnchor);
    }
    Ok(program)
}

// A trailing '$' is the end anchor unless it is escaped; an even number of
// preceding backslashes means the '$' itself is bare.
fn split_end_anchor(pattern: &str) -> (&str, bool) {
    if let Some(stripped) = pattern.strip_suffix('$') {
        let backslashes = stripped.chars().rev().take_while(|&c| c == '\\').count();
        if backslashes % 2 == 0 {
            return (stripped, true);
        }
    }
    (pattern, false)
}

// The grammar only ever stalls on a metacharacter that cannot start an atom.
fn stall_error(rest: &str) -> PatternError {
    match rest.chars().next() {
        None => PatternError::UnclosedGroup,
        Some(')') => PatternError::UnmatchedCloseParen,
        Some(q @ ('+' | '?' | '*')) => PatternError::DanglingQuantifier(q),
        Some(a @ ('^' | '$')) => PatternError::MisplacedAnchor(a),
        Some(other) => PatternError::Unexpected(other),
    }
}

fn alternation<'a>(input: &'a str, context: &ParseContext) -> PResult<'a, Ast> {
    let (input, first) = sequence(input, context)?;
    let (input, mut rest) = many0(preceded(char('|'), |i| sequence(i, context)))(input)?;

    if rest.is_empty() {
        return Ok((input, first));
    }
    let mut branches = Vec::with_capacity(rest.len() + 1);
    branches.push(first);
    branches.append(&mut rest);
    Ok((input, Ast::Alternation(branches)))
}

fn sequence<'a>(input: &'a str, context: &ParseContext) -> PResult<'a, Ast> {
    let (input, mut parts) = many0(|i| quantified(i, context))(input)?;

    let node = if parts.len() == 1 {
        parts.remove(0)
    } else {
        Ast::Sequence(parts)
    };
    Ok((input, node))
}

fn quantified<'a>(input: &'a str, context: &ParseContext) -> PResult<'a, Ast> {
    let (input, base) = atom(input, context)?;
    let (input, quantifier) = opt(alt((char('+'), char('?'), char('*'))))(input)?;

    let node = match quantifier {
        Some('+') => Ast::OneOrMore(Box::new(base)),
        Some('?') => Ast::ZeroOrOne(Box::new(base)),
        Some('*') => Ast::ZeroOrMore(Box::new(base)),
        _ => base,
    };
    Ok((input, node))
}

fn atom<'a>(input: &'a str, context: &ParseContext) -> PResult<'a, Ast> {
    alt((
        dot,
        bracket,
        escape,
        |i| group(i, context),
        literal,
    ))(input)
}

fn dot(input: &str) -> PResult<'_, Ast> {
    value(Ast::AnyChar, char('.'))(input)
}

// Metacharacters are handled by the surrounding rules; everything else,
// including ']', '{', '}' and '-', is an ordinary literal.
fn literal(input: &str) -> PResult<'_, Ast> {
    map(none_of("^$.*+?()[|\\"), Ast::Literal)(input)
}

fn escape(input: &str) -> PResult<'_, Ast> {
    let (rest, _) = char('\\')(input)?;
    let (rest, escaped) = match anychar::<&str, PatternError>(rest) {
        Ok(ok) => ok,
        Err(_) => return Err(Err::Failure(PatternError::DanglingEscape)),
    };

    let node = match escaped {
        'd' => Ast::DigitClass,
        'w' => Ast::WordClass,
        c @ '1'..='9' => Ast::Backreference((c as u8 - b'0') as usize),
        c => Ast::Literal(c),
    };
    Ok((rest, node))
}

fn bracket(input: &str) -> PResult<'_, Ast> {
    let (rest, _) = char('[')(input)?;
    let (rest, negated) = opt(char('^'))(rest)?;
    let (rest, members) = many0(bracket_member)(rest)?;
    let (rest, _) = match char::<&str, PatternError>(']')(rest) {
        Ok(ok) => ok,
        Err(_) => return Err(Err::Failure(PatternError::UnclosedClass)),
    };
    if members.is_empty() {
        return Err(Err::Failure(PatternError::EmptyClass));
    }
    Ok((
        rest,
        Ast::Bracket {
            set: members.into_iter().collect(),
            negated: negated.is_some(),
        },
    ))
}

// '\x' inside a class contributes the literal 'x', which is also the only
// way to put ']' in the set.
fn bracket_member(input: &str) -> PResult<'_, char> {
    alt((preceded(char('\\'), anychar), none_of("]")))(input)
}

fn group<'a>(input: &'a str, context: &ParseContext) -> PResult<'a, Ast> {
    let (rest, _) = char('(')(input)?;
    let index = context.next_group_index();
    let (rest, inner) = alternation(rest, context)?;
    let (rest, _) = match char::<&str, PatternError>(')')(rest) {
        Ok(ok) => ok,
        Err(_) => return Err(Err::Failure(stall_error(rest))),
    };
    Ok((rest, Ast::Group(Box::new(inner), index)))
}
