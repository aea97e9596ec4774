//! Command parsing and evaluation against the dream journal.
//!
//! Evaluation is synchronous except for commands that consult the oracle; those come back as
//! an [`OracleTask`] the component runs on the local executor.

use platform_host::{
    format_clock, format_date, DreamJournal, DreamOracle, GenerationError, TagKind,
};

/// Lines printed when the terminal opens or is cleared.
pub const BANNER: [&str; 3] = [
    "DreamLog 98 Terminal v1.0",
    "Type \"help\" for available commands",
    "Ready to explore your subconscious...",
];
/// Prompt shown before the input.
pub const PROMPT: &str = "dreamlog@subconscious:~$";
/// Printed after `wake` once the delay elapses.
pub const WAKE_FAREWELL: &str = "Connection to dream realm closed.";

const HELP: [&str; 14] = [
    "Available commands:",
    "  help - Show this help message",
    "  ls - List dream entries",
    "  analyze [title] - Analyze a dream by title",
    "  complete [title] - Continue a dream with AI",
    "  detect [type] [title] - Detect emotions/symbols/characters",
    "  summarize - Summarize recent dreams",
    "  symbols - Show recurring symbols",
    "  emotions - Show emotional patterns",
    "  date - Show the current dream time",
    "  whoami - Show who is dreaming",
    "  clear - Clear terminal",
    "  wake - Exit dream state",
    "",
];
const PATTERN_LIMIT: usize = 5;
const SUMMARY_THEME_LIMIT: usize = 4;
const FALLBACK_THEMES: &str = "transformation, flying, water, mirrors";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One transcript row.
pub enum TranscriptEntry {
    /// Echo of a submitted command.
    Prompt {
        /// Raw command text.
        command: String,
    },
    /// Regular output.
    Output {
        /// Line text.
        text: String,
    },
    /// Failure or usage message.
    Error {
        /// Line text.
        text: String,
    },
    /// Terminal chrome such as the banner.
    System {
        /// Line text.
        text: String,
    },
}

impl TranscriptEntry {
    fn output(text: impl Into<String>) -> Self {
        Self::Output { text: text.into() }
    }

    fn error(text: impl Into<String>) -> Self {
        Self::Error { text: text.into() }
    }

    /// Text as printed.
    pub fn render(&self) -> String {
        match self {
            Self::Prompt { command } => format!("> {command}"),
            Self::Output { text } | Self::Error { text } | Self::System { text } => text.clone(),
        }
    }
}

/// Fresh transcript holding the banner and a blank line.
pub fn banner_transcript() -> Vec<TranscriptEntry> {
    BANNER
        .iter()
        .chain(std::iter::once(&""))
        .map(|text| TranscriptEntry::System {
            text: text.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A parsed command line.
pub enum DreamCommand {
    /// `help`
    Help,
    /// `ls`
    List,
    /// `analyze <title>`; `None` when the title is missing.
    Analyze(Option<String>),
    /// `complete <title>`
    Complete(Option<String>),
    /// `detect <kind> <title>`; `None` when no kind was given.
    Detect(Option<(String, String)>),
    /// `summarize`
    Summarize,
    /// `symbols`
    Symbols,
    /// `emotions`
    Emotions,
    /// `date`
    Date,
    /// `whoami`
    Whoami,
    /// `clear`
    Clear,
    /// `wake`
    Wake,
    /// Anything else, carrying the raw line.
    Unknown(String),
}

impl DreamCommand {
    /// Parses a line; commands are case-insensitive. Blank input yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let raw = line.trim();
        let lowered = raw.to_lowercase();
        let mut words = lowered.split_whitespace();
        let name = words.next()?;
        let rest = words.collect::<Vec<_>>();
        let title = || (!rest.is_empty()).then(|| rest.join(" "));

        Some(match name {
            "help" => Self::Help,
            "ls" => Self::List,
            "analyze" => Self::Analyze(title()),
            "complete" => Self::Complete(title()),
            "detect" => Self::Detect(
                rest.split_first()
                    .map(|(kind, title)| (kind.to_string(), title.join(" "))),
            ),
            "summarize" => Self::Summarize,
            "symbols" => Self::Symbols,
            "emotions" => Self::Emotions,
            "date" => Self::Date,
            "whoami" => Self::Whoami,
            "clear" => Self::Clear,
            "wake" => Self::Wake,
            _ => Self::Unknown(raw.to_string()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What an oracle-backed command asks for.
pub enum OracleTaskKind {
    /// Interpretation.
    Analyze,
    /// Continuation.
    Complete,
    /// Tag detection.
    Detect(TagKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Deferred oracle work for a resolved entry.
pub struct OracleTask {
    /// Requested operation.
    pub kind: OracleTaskKind,
    /// Title of the resolved entry.
    pub title: String,
    /// Entry text sent to the oracle.
    pub content: String,
}

impl OracleTask {
    /// Line printed before the oracle answers.
    pub fn announcement(&self) -> TranscriptEntry {
        let text = match self.kind {
            OracleTaskKind::Analyze => format!("Analyzing dream: \"{}\"...", self.title),
            OracleTaskKind::Complete => format!("Completing dream: \"{}\"...", self.title),
            OracleTaskKind::Detect(kind) => {
                format!("Detecting {} in \"{}\"...", kind_name(kind), self.title)
            }
        };
        TranscriptEntry::output(text)
    }

    /// Consults the oracle and formats the answer.
    pub async fn run(self, oracle: &DreamOracle) -> Vec<TranscriptEntry> {
        match self.kind {
            OracleTaskKind::Analyze => {
                respond(oracle.analyze_dream(&self.content).await, None, || {
                    "Analysis failed. The dream realm is unreachable.".to_string()
                })
            }
            OracleTaskKind::Complete => respond(
                oracle.complete_dream(&self.content).await,
                Some("Dream continuation:".to_string()),
                || "Dream completion failed. The muse is silent.".to_string(),
            ),
            OracleTaskKind::Detect(kind) => {
                let found = match kind {
                    TagKind::Emotions => oracle.detect_emotions(&self.content).await,
                    TagKind::Symbols => oracle.detect_symbols(&self.content).await,
                    TagKind::Characters => oracle.detect_characters(&self.content).await,
                };
                let name = kind_name(kind);
                respond(
                    found.map(|tags| tags.join(", ")),
                    Some(format!("{} detected:", capitalize(name))),
                    || format!("Detection failed. The {name} remain hidden."),
                )
            }
        }
    }
}

fn respond(
    result: Result<String, GenerationError>,
    heading: Option<String>,
    failure: impl FnOnce() -> String,
) -> Vec<TranscriptEntry> {
    match result {
        Ok(text) => heading
            .into_iter()
            .chain(text.lines().map(str::to_string))
            .map(TranscriptEntry::output)
            .chain(std::iter::once(TranscriptEntry::output("")))
            .collect(),
        Err(err) => {
            leptos::logging::warn!("terminal: oracle request failed: {err}");
            vec![TranscriptEntry::error(failure()), TranscriptEntry::output("")]
        }
    }
}

fn kind_name(kind: TagKind) -> &'static str {
    match kind {
        TagKind::Emotions => "emotions",
        TagKind::Symbols => "symbols",
        TagKind::Characters => "characters",
    }
}

fn parse_kind(raw: &str) -> Option<TagKind> {
    match raw {
        "emotions" => Some(TagKind::Emotions),
        "symbols" => Some(TagKind::Symbols),
        "characters" => Some(TagKind::Characters),
        _ => None,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ten-cell bar for a percentage.
pub fn percentage_bar(percentage: u32) -> String {
    let filled = (percentage / 10).min(10) as usize;
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(10 - filled))
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of evaluating a command.
pub enum Evaluation {
    /// Append these lines.
    Print(Vec<TranscriptEntry>),
    /// Reset to the banner.
    Clear,
    /// Print the lines now and the farewell after a pause.
    Wake(Vec<TranscriptEntry>),
    /// Print the announcement, then the oracle's answer.
    Consult(OracleTask),
}

fn print(lines: &[&str]) -> Evaluation {
    Evaluation::Print(lines.iter().map(|line| TranscriptEntry::output(*line)).collect())
}

fn usage(text: &str) -> Evaluation {
    Evaluation::Print(vec![TranscriptEntry::error(text), TranscriptEntry::output("")])
}

fn consult(journal: &DreamJournal, kind: OracleTaskKind, query: &str) -> Evaluation {
    match journal.find_by_title(query) {
        Some(entry) => Evaluation::Consult(OracleTask {
            kind,
            title: entry.title.clone(),
            content: entry.content.clone(),
        }),
        None => usage(&format!("Dream \"{query}\" not found.")),
    }
}

/// Evaluates `command` against the current journal.
pub fn evaluate(command: &DreamCommand, journal: &DreamJournal, now_ms: u64) -> Evaluation {
    let entries = journal.entries();
    match command {
        DreamCommand::Help => print(&HELP),
        DreamCommand::List if entries.is_empty() => {
            print(&["No dreams found. Start journaling to see entries.", ""])
        }
        DreamCommand::List => Evaluation::Print(
            std::iter::once(TranscriptEntry::output("Dream entries:"))
                .chain(entries.iter().enumerate().map(|(index, entry)| {
                    TranscriptEntry::output(format!(
                        "  {}. {} ({})",
                        index + 1,
                        entry.title,
                        entry.date_label()
                    ))
                }))
                .chain(std::iter::once(TranscriptEntry::output("")))
                .collect(),
        ),
        DreamCommand::Analyze(None) => usage("Usage: analyze [dream_title]"),
        DreamCommand::Analyze(Some(title)) => consult(journal, OracleTaskKind::Analyze, title),
        DreamCommand::Complete(None) => usage("Usage: complete [dream_title]"),
        DreamCommand::Complete(Some(title)) => consult(journal, OracleTaskKind::Complete, title),
        DreamCommand::Detect(None) => {
            usage("Usage: detect [emotions|symbols|characters] [dream_title]")
        }
        DreamCommand::Detect(Some((kind, title))) => match parse_kind(kind) {
            Some(kind) => consult(journal, OracleTaskKind::Detect(kind), title),
            None => usage("Invalid detection type. Use: emotions, symbols, or characters"),
        },
        DreamCommand::Summarize if entries.is_empty() => print(&["No dreams to summarize.", ""]),
        DreamCommand::Summarize => {
            let themes = journal
                .tag_frequencies(TagKind::Symbols, SUMMARY_THEME_LIMIT)
                .into_iter()
                .map(|row| row.tag)
                .collect::<Vec<_>>();
            let themes = if themes.is_empty() {
                FALLBACK_THEMES.to_string()
            } else {
                themes.join(", ")
            };
            let latest = entries.last().map_or("N/A", |entry| entry.title.as_str());
            Evaluation::Print(vec![
                TranscriptEntry::output("Dream Summary:"),
                TranscriptEntry::output(format!("Total dreams logged: {}", entries.len())),
                TranscriptEntry::output(format!("Most recent: {latest}")),
                TranscriptEntry::output(format!("Common themes: {themes}")),
                TranscriptEntry::output(""),
            ])
        }
        DreamCommand::Symbols if entries.is_empty() => {
            print(&["No dreams to analyze for symbols.", ""])
        }
        DreamCommand::Symbols => Evaluation::Print(
            std::iter::once(TranscriptEntry::output("Recurring symbols detected:"))
                .chain(
                    journal
                        .tag_frequencies(TagKind::Symbols, PATTERN_LIMIT)
                        .into_iter()
                        .map(|row| {
                            TranscriptEntry::output(format!(
                                "  {} - appears in {}% of dreams",
                                row.tag, row.percentage
                            ))
                        }),
                )
                .chain(std::iter::once(TranscriptEntry::output("")))
                .collect(),
        ),
        DreamCommand::Emotions if entries.is_empty() => {
            print(&["No dreams to analyze for emotions.", ""])
        }
        DreamCommand::Emotions => Evaluation::Print(
            std::iter::once(TranscriptEntry::output("Emotional patterns:"))
                .chain(
                    journal
                        .tag_frequencies(TagKind::Emotions, PATTERN_LIMIT)
                        .into_iter()
                        .map(|row| {
                            TranscriptEntry::output(format!(
                                "  {}: {} {}%",
                                row.tag,
                                percentage_bar(row.percentage),
                                row.percentage
                            ))
                        }),
                )
                .chain(std::iter::once(TranscriptEntry::output("")))
                .collect(),
        ),
        DreamCommand::Date => Evaluation::Print(vec![
            TranscriptEntry::output(format!(
                "Current dream time: {} {} UTC",
                format_date(now_ms),
                format_clock(now_ms)
            )),
            TranscriptEntry::output(""),
        ]),
        DreamCommand::Whoami => print(&["dreamer@subconscious", ""]),
        DreamCommand::Clear => Evaluation::Clear,
        DreamCommand::Wake => Evaluation::Wake(vec![TranscriptEntry::output(
            "Exiting dream state...",
        )]),
        DreamCommand::Unknown(raw) => Evaluation::Print(vec![
            TranscriptEntry::error(format!("Command not found: {raw}")),
            TranscriptEntry::output("Type \"help\" for available commands."),
            TranscriptEntry::output(""),
        ]),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Submitted commands with an optional recall cursor.
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Records a submitted line and resets recall.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = None;
    }

    /// Steps toward older lines; sticks at the oldest.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Steps toward newer lines. Walking past the newest clears recall and yields an empty line.
    ///
    /// Returns `None` when recall is not active.
    pub fn newer(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            return Some("");
        }
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{
        DreamEntry, SimulatedTextService, TextGenerationFuture, TextGenerationService,
        SIMULATED_ANALYSIS,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    struct Offline;

    impl TextGenerationService for Offline {
        fn generate<'a>(
            &'a self,
            _prompt: &'a str,
        ) -> TextGenerationFuture<'a, Result<String, GenerationError>> {
            Box::pin(async { Err(GenerationError::Transport("offline".into())) })
        }
    }

    fn journal() -> DreamJournal {
        let mut journal = DreamJournal::default();
        let mut flight = DreamEntry::new("dream-1", "Flying Over Water", "I flew over the sea", 0);
        flight.symbols = vec!["water".into(), "flying".into()];
        flight.emotions = vec!["joy".into()];
        journal.add(flight);
        let mut mirror = DreamEntry::new("dream-2", "The Mirror", "A silver mirror spoke", 0);
        mirror.symbols = vec!["water".into(), "mirror".into()];
        mirror.emotions = vec!["joy".into(), "fear".into()];
        journal.add(mirror);
        journal
    }

    fn texts(evaluation: Evaluation) -> Vec<String> {
        match evaluation {
            Evaluation::Print(lines) | Evaluation::Wake(lines) => {
                lines.iter().map(TranscriptEntry::render).collect()
            }
            other => panic!("expected printed lines, got {other:?}"),
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_keeps_unknown_lines() {
        assert_eq!(DreamCommand::parse("   "), None);
        assert_eq!(DreamCommand::parse("LS"), Some(DreamCommand::List));
        assert_eq!(
            DreamCommand::parse("analyze The  Mirror"),
            Some(DreamCommand::Analyze(Some("the mirror".into())))
        );
        assert_eq!(DreamCommand::parse("complete"), Some(DreamCommand::Complete(None)));
        assert_eq!(
            DreamCommand::parse("detect symbols"),
            Some(DreamCommand::Detect(Some(("symbols".into(), String::new()))))
        );
        assert_eq!(
            DreamCommand::parse("Fly Away"),
            Some(DreamCommand::Unknown("Fly Away".into()))
        );
    }

    #[test]
    fn listing_numbers_entries_with_dates() {
        let lines = texts(evaluate(&DreamCommand::List, &journal(), 0));
        assert_eq!(
            lines,
            vec![
                "Dream entries:",
                "  1. Flying Over Water (1970-01-01)",
                "  2. The Mirror (1970-01-01)",
                "",
            ]
        );
    }

    #[test]
    fn empty_journal_has_friendly_messages() {
        let empty = DreamJournal::default();
        assert_eq!(
            texts(evaluate(&DreamCommand::Summarize, &empty, 0))[0],
            "No dreams to summarize."
        );
        assert_eq!(
            texts(evaluate(&DreamCommand::Emotions, &empty, 0))[0],
            "No dreams to analyze for emotions."
        );
    }

    #[test]
    fn patterns_report_share_of_dreams() {
        let journal = journal();
        let symbols = texts(evaluate(&DreamCommand::Symbols, &journal, 0));
        assert_eq!(symbols[1], "  water - appears in 100% of dreams");

        let emotions = texts(evaluate(&DreamCommand::Emotions, &journal, 0));
        assert_eq!(emotions[1], "  joy: \u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588} 100%");
        assert_eq!(emotions[2], format!("  fear: {} 50%", percentage_bar(50)));
    }

    #[test]
    fn summary_uses_recorded_symbols() {
        let lines = texts(evaluate(&DreamCommand::Summarize, &journal(), 0));
        assert_eq!(lines[1], "Total dreams logged: 2");
        assert_eq!(lines[2], "Most recent: The Mirror");
        assert!(lines[3].starts_with("Common themes: water"));
    }

    #[test]
    fn oracle_commands_resolve_titles_by_substring() {
        let journal = journal();
        let Evaluation::Consult(task) =
            evaluate(&DreamCommand::Analyze(Some("mirror".into())), &journal, 0)
        else {
            panic!("expected oracle task");
        };
        assert_eq!(task.title, "The Mirror");
        assert_eq!(task.announcement().render(), "Analyzing dream: \"The Mirror\"...");

        let missing = texts(evaluate(&DreamCommand::Complete(Some("castle".into())), &journal, 0));
        assert_eq!(missing[0], "Dream \"castle\" not found.");

        let invalid = texts(evaluate(
            &DreamCommand::Detect(Some(("colours".into(), "mirror".into()))),
            &journal,
            0,
        ));
        assert_eq!(invalid[0], "Invalid detection type. Use: emotions, symbols, or characters");
    }

    #[test]
    fn oracle_answers_and_failures_are_printed() {
        let task = OracleTask {
            kind: OracleTaskKind::Analyze,
            title: "The Mirror".into(),
            content: "A silver mirror spoke".into(),
        };
        let answered = block_on(task.clone().run(&DreamOracle::new(Rc::new(SimulatedTextService))));
        assert_eq!(answered.len(), SIMULATED_ANALYSIS.lines().count() + 1);

        let detect = OracleTask {
            kind: OracleTaskKind::Detect(TagKind::Symbols),
            ..task
        };
        let failed = block_on(detect.run(&DreamOracle::new(Rc::new(Offline))));
        assert_eq!(
            failed[0],
            TranscriptEntry::Error {
                text: "Detection failed. The symbols remain hidden.".into()
            }
        );
    }

    #[test]
    fn history_walks_back_and_returns_to_an_empty_line() {
        let mut history = CommandHistory::default();
        assert_eq!(history.older(), None);
        history.push("ls");
        history.push("help");

        assert_eq!(history.newer(), None);
        assert_eq!(history.older(), Some("help"));
        assert_eq!(history.older(), Some("ls"));
        assert_eq!(history.older(), Some("ls"));
        assert_eq!(history.newer(), Some("help"));
        assert_eq!(history.newer(), Some(""));
        assert_eq!(history.newer(), None);
    }

    #[test]
    fn unknown_commands_point_at_help() {
        let lines = texts(evaluate(&DreamCommand::Unknown("fly".into()), &DreamJournal::default(), 0));
        assert_eq!(lines[0], "Command not found: fly");
    }
}
