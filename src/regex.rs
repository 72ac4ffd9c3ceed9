use crate::ast::{self, Ast};
use crate::error::PatternError;
use crate::matcher::Matcher;
use crate::parser;

/// A compiled pattern. Compilation happens once; the tree is immutable and
/// reusable across match attempts.
#[derive(Debug, Clone)]
pub struct Regex {
    program: Vec<Ast>,
    group_count: usize,
    debug: bool,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let program = parser::parse_pattern(pattern)?;
        let group_count = ast::group_count(&program);
        Ok(Self {
            program,
            group_count,
            debug: false,
        })
    }

    /// Traces match attempts on stderr; stdout stays reserved for results.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.exec(line).is_some()
    }

    /// Captures of the first successful attempt, 1-indexed (slot 0 is
    /// never populated). `None` when the line does not match.
    pub fn captures(&self, line: &str) -> Option<Vec<Option<String>>> {
        self.exec(line)
    }

    fn exec(&self, line: &str) -> Option<Vec<Option<String>>> {
        let chars: Vec<char> = line.chars().collect();
        let mut matcher = Matcher::new(&chars, self.group_count);

        // The final start position only matters for patterns that admit
        // empty matches, e.g. `a?$`.
        let last_start = if self.anchored_at_start() { 0 } else { chars.len() };
        for start in 0..=last_start {
            if self.debug {
                eprintln!("regrep: attempt at index {start}");
            }
            if let Some(end) = matcher.match_at(&self.program, start) {
                if self.debug {
                    eprintln!("regrep: matched {start}..{end}");
                }
                return Some(matcher.captures().to_vec());
            }
        }
        None
    }

    fn anchored_at_start(&self) -> bool {
        matches!(self.program.first(), Some(Ast::StartAnchor))
    }
}
