use super::common::{StripError, ends_declaration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InDeclaration { opened_on: usize },
}

/// Round and curly bracket depth accumulated over a declaration. A heuristic
/// continuation signal only; brackets in strings and comments are counted too.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BracketBalance {
    round: i64,
    curly: i64,
}

impl BracketBalance {
    fn absorb(&mut self, line: &str) {
        for c in line.chars() {
            match c {
                '(' => self.round += 1,
                ')' => self.round -= 1,
                '{' => self.curly += 1,
                '}' => self.curly -= 1,
                _ => {}
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.round <= 0 && self.curly <= 0
    }

    fn ensure_closed(&self, line: usize) -> Result<(), StripError> {
        if self.round > 0 {
            return Err(StripError::UnbalancedRoundBrackets {
                line,
                depth: self.round,
            });
        }
        if self.curly > 0 {
            return Err(StripError::UnbalancedCurlyBrackets {
                line,
                depth: self.curly,
            });
        }
        Ok(())
    }
}

/// Drops every line of each declaration whose first token is `marker`.
///
/// A declaration ends on the first line that matches a terminator suffix while
/// both bracket depths are closed. Lines split on `\n` only, so a `\r\n` file
/// works and a file using bare `\r` is one line. Kept lines are copied with
/// their original terminators; a removed line takes its terminator with it.
pub fn strip_declarations(text: &str, marker: &'static str) -> Result<String, StripError> {
    let mut state = ScanState::Outside;
    let mut balance = BracketBalance::default();
    let mut result = String::with_capacity(text.len());

    for (index, line) in text.split_inclusive('\n').enumerate() {
        let line_no = index + 1;
        state = match state {
            ScanState::Outside => {
                if !line.trim_start().starts_with(marker) {
                    result.push_str(line);
                    continue;
                }
                balance.absorb(line);
                if ends_declaration(line) {
                    balance = BracketBalance::default();
                    ScanState::Outside
                } else {
                    ScanState::InDeclaration { opened_on: line_no }
                }
            }
            ScanState::InDeclaration { .. } => {
                balance.absorb(line);
                if ends_declaration(line) && balance.is_closed() {
                    balance.ensure_closed(line_no)?;
                    balance = BracketBalance::default();
                    ScanState::Outside
                } else {
                    state
                }
            }
        };
    }

    if let ScanState::InDeclaration { opened_on } = state {
        return Err(StripError::UnterminatedDeclaration {
            marker,
            line: opened_on,
        });
    }
    Ok(result)
}
