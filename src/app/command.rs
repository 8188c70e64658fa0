use crate::domain::model::ExperienceFilter;

pub const HELP: &str = "\
Commands:
  search <keyword>    search for jobs (e.g. search react developer)
  exp <level>         filter by experience: all, 0-1 year, 1-2 years, 2-3 years, 3-5 years, 5+ years
  next | prev         move between result pages
  page <n>            jump to page n
  show                redraw the current view
  help                show this message
  quit                exit";

/// 互動模式下的一行輸入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Experience(ExperienceFilter),
    Next,
    Previous,
    Page(usize),
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "" | "show" => Ok(Command::Show),
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "exp" | "experience" => rest.parse().map(Command::Experience),
            "next" | "n" => Ok(Command::Next),
            "prev" | "p" => Ok(Command::Previous),
            "page" => rest
                .parse()
                .map(Command::Page)
                .map_err(|_| format!("Invalid page number: '{}'", rest)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{}'. Type 'help' for usage.", other)),
        }
    }
}
