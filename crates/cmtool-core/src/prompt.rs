use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&self, question: &str) -> bool;
}

/// `yes`/`y` and `no`/`n`; anything else is unrecognised.
#[must_use]
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Line-based confirmation over any reader/writer pair. Re-asks until a
/// recognised answer arrives; end of input counts as "no".
pub struct LinePrompt<R, W> {
    io: RefCell<(R, W)>,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            io: RefCell::new((reader, writer)),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner()
    }
}

impl LinePrompt<StdinLock<'static>, Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&self, question: &str) -> bool {
        let mut io = self.io.borrow_mut();
        let (reader, writer) = &mut *io;

        let _ = write!(writer, "{question} [y/n] ");
        let _ = writer.flush();

        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) | Err(_) => return false,
                Ok(_) => {}
            }

            if let Some(answer) = parse_answer(&line) {
                return answer;
            }

            let _ = writeln!(writer, "Please respond with 'yes' or 'no' (or 'y' or 'n').");
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (bool, String) {
        let prompt = LinePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let answer = prompt.confirm("Delete?");
        let (_, out) = prompt.into_inner();
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y\n"), Some(true));
        assert_eq!(parse_answer(" yes "), Some(true));
        assert_eq!(parse_answer("n"), Some(false));
        assert_eq!(parse_answer("no\r\n"), Some(false));
        assert_eq!(parse_answer("yep"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn test_prompt_accepts_yes() {
        let (answer, out) = ask("y\n");
        assert!(answer);
        assert_eq!(out, "Delete? [y/n] ");
    }

    #[test]
    fn test_prompt_loops_until_recognised() {
        let (answer, out) = ask("maybe\n\nno\n");
        assert!(!answer);
        assert_eq!(
            out.matches("Please respond with 'yes' or 'no'").count(),
            2
        );
    }

    #[test]
    fn test_prompt_eof_is_no() {
        let (answer, _) = ask("what\n");
        assert!(!answer);
    }
}
