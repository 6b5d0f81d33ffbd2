use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType, SetTitle};

pub const APP_NAME: &str = "PhraseTrain";

/// Line-based terminal I/O used by every menu and by practice answers.
pub trait Console {
    /// One line of input with surrounding whitespace removed.
    fn read_line(&mut self) -> Result<String>;
    fn write(&mut self, text: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;

    fn println(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        self.write(text)?;
        self.read_line()
    }

    fn pause(&mut self) -> Result<()> {
        self.prompt("Press enter to continue...")?;
        Ok(())
    }

    /// `Choice (y/N) >> `; only an explicit `y` counts.
    fn confirm(&mut self) -> Result<bool> {
        let choice = self.prompt("Choice (y/N) >> ")?;
        Ok(choice.eq_ignore_ascii_case("y"))
    }

    /// Clears the screen and prints `PhraseTrain | <title>` underlined; the
    /// same text becomes the terminal title.
    fn header(&mut self, title: &str) -> Result<()> {
        let text = if title.is_empty() {
            APP_NAME.to_string()
        } else {
            format!("{APP_NAME} | {title}")
        };
        self.clear()?;
        self.println(&text)?;
        self.println(&"-".repeat(text.chars().count()))?;
        self.set_title(&text)
    }
}

pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    /// Screen clearing and title escapes; off for piped or plain output.
    decorate: bool,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W, decorate: bool) -> Self {
        Self {
            input,
            output,
            decorate,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("standard input closed");
        }
        Ok(line.trim().to_string())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.decorate {
            queue!(
                self.output,
                Clear(ClearType::All),
                Clear(ClearType::Purge),
                MoveTo(0, 0)
            )?;
        } else {
            self.write("\n")?;
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        if self.decorate {
            queue!(self.output, SetTitle(title))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(c: &TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(c.output()).to_string()
    }

    #[test]
    fn test_prompt_trims_input() {
        let mut c = console("  hola  \n");
        assert_eq!(c.prompt("Phrase >> ").unwrap(), "hola");
        assert_eq!(output(&c), "Phrase >> ");
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut c = console("");
        let err = c.read_line().unwrap_err();
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_confirm_requires_y() {
        let mut c = console("Y\nyes\n\n");
        assert!(c.confirm().unwrap());
        assert!(!c.confirm().unwrap());
        assert!(!c.confirm().unwrap());
    }

    #[test]
    fn test_header_underlines_title() {
        let mut c = console("");
        c.header("basics").unwrap();
        assert_eq!(output(&c), "\nPhraseTrain | basics\n--------------------\n");
    }

    #[test]
    fn test_decorated_clear_emits_escapes() {
        let mut c = TerminalConsole::new(Cursor::new(Vec::<u8>::new()), Vec::new(), true);
        c.header("").unwrap();
        let out = String::from_utf8_lossy(c.output()).to_string();
        assert!(out.contains("\x1b[2J"));
        assert!(out.contains("PhraseTrain\n-----------\n"));
    }
}
