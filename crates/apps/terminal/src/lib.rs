//! Dream Terminal app: a command prompt over the dream journal and the oracle.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod commands;

use std::time::Duration;

use desktop_app_contract::AppServices;
use leptos::ev::KeyboardEvent;
use leptos::*;
use platform_host::unix_time_ms_now;
use system_ui::prelude::*;

pub use commands::{
    banner_transcript, evaluate, CommandHistory, DreamCommand, Evaluation, OracleTask,
    TranscriptEntry, PROMPT,
};

const MAX_TERMINAL_ENTRIES: usize = 200;
const WAKE_DELAY: Duration = Duration::from_secs(1);

fn append_entries(transcript: &mut Vec<TranscriptEntry>, entries: Vec<TranscriptEntry>) {
    transcript.extend(entries);
    if transcript.len() > MAX_TERMINAL_ENTRIES {
        let overflow = transcript.len() - MAX_TERMINAL_ENTRIES;
        transcript.drain(0..overflow);
    }
}

fn line_tone(entry: &TranscriptEntry) -> TextTone {
    match entry {
        TranscriptEntry::Prompt { .. } => TextTone::Warning,
        TranscriptEntry::Output { .. } => TextTone::Success,
        TranscriptEntry::Error { .. } => TextTone::Danger,
        TranscriptEntry::System { .. } => TextTone::Accent,
    }
}

#[component]
/// Dream Terminal window contents.
pub fn DreamTerminalApp(
    /// Session services.
    services: AppServices,
) -> impl IntoView {
    let journal = services.journal;
    let oracle = store_value(services.oracle);
    let transcript = create_rw_signal(banner_transcript());
    let input = create_rw_signal(String::new());
    let history = store_value(CommandHistory::default());
    let pending = create_rw_signal(0usize);
    let screen_ref = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    let print = move |entries: Vec<TranscriptEntry>| {
        transcript.update(|transcript| append_entries(transcript, entries));
    };

    create_effect(move |_| {
        transcript.track();
        if let Some(screen) = screen_ref.get() {
            screen.set_scroll_top(screen.scroll_height());
        }
    });

    let submit = move |line: String| {
        input.set(String::new());
        let Some(command) = DreamCommand::parse(&line) else {
            return;
        };
        history.update_value(|history| history.push(line.clone()));
        print(vec![TranscriptEntry::Prompt {
            command: line.trim().to_string(),
        }]);

        let evaluation = journal
            .signal()
            .with_untracked(|journal| evaluate(&command, journal, unix_time_ms_now()));
        match evaluation {
            Evaluation::Print(entries) => print(entries),
            Evaluation::Clear => transcript.set(banner_transcript()),
            Evaluation::Wake(entries) => {
                print(entries);
                set_timeout(
                    move || {
                        print(vec![
                            TranscriptEntry::Output {
                                text: commands::WAKE_FAREWELL.to_string(),
                            },
                            TranscriptEntry::Output {
                                text: String::new(),
                            },
                        ])
                    },
                    WAKE_DELAY,
                );
            }
            Evaluation::Consult(task) => {
                print(vec![task.announcement()]);
                pending.update(|count| *count += 1);
                let oracle = oracle.get_value();
                spawn_local(async move {
                    let answer = task.run(&oracle).await;
                    print(answer);
                    pending.update(|count| *count = count.saturating_sub(1));
                });
            }
        }
    };

    let recall = move |older: bool| {
        let line = history.try_update_value(|history| {
            let step = if older { history.older() } else { history.newer() };
            step.map(str::to_string)
        });
        if let Some(Some(line)) = line {
            input.set(line);
        }
    };

    let indexed_entries = move || {
        transcript
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <AppShell layout_class="app-terminal-shell">
            <TerminalSurface
                node_ref=screen_ref
                on_click=Callback::new(move |_| {
                    if let Some(input) = input_ref.get_untracked() {
                        let _ = input.focus();
                    }
                })
            >
                <TerminalTranscript>
                    <For each=indexed_entries key=|(idx, entry)| (*idx, entry.clone()) let:row>
                        {
                            let (_, entry) = row;
                            view! { <TerminalLine tone=line_tone(&entry)>{entry.render()}</TerminalLine> }
                        }
                    </For>
                </TerminalTranscript>
                <TerminalPrompt>
                    <Text role=TextRole::Code tone=TextTone::Accent>{PROMPT}</Text>
                    <TextField
                        node_ref=input_ref
                        aria_label="Terminal command"
                        value=input
                        on_input=Callback::new(move |ev| input.set(event_target_value(&ev)))
                        on_keydown=Callback::new(move |ev: KeyboardEvent| match ev.key().as_str() {
                            "Enter" => submit(input.get_untracked()),
                            "ArrowUp" => {
                                ev.prevent_default();
                                recall(true);
                            }
                            "ArrowDown" => {
                                ev.prevent_default();
                                recall(false);
                            }
                            "l" | "L" if ev.ctrl_key() => {
                                ev.prevent_default();
                                transcript.set(banner_transcript());
                            }
                            _ => {}
                        })
                    />
                </TerminalPrompt>
            </TerminalSurface>

            <StatusBar>
                <StatusBarItem>
                    {move || if pending.get() > 0 { "Consulting the dream realm..." } else { "Ready" }}
                </StatusBarItem>
                <StatusBarItem>{move || format!("{} line(s)", transcript.with(Vec::len))}</StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn transcript_keeps_the_newest_entries() {
        let mut transcript = banner_transcript();
        let flood = (0..MAX_TERMINAL_ENTRIES + 10)
            .map(|n| TranscriptEntry::Output {
                text: n.to_string(),
            })
            .collect();
        append_entries(&mut transcript, flood);

        assert_eq!(transcript.len(), MAX_TERMINAL_ENTRIES);
        assert_eq!(
            transcript.last().map(TranscriptEntry::render),
            Some((MAX_TERMINAL_ENTRIES + 9).to_string())
        );
    }

    #[test]
    fn banner_opens_with_the_version_line() {
        assert_eq!(banner_transcript()[0].render(), "DreamLog 98 Terminal v1.0");
        assert_eq!(line_tone(&banner_transcript()[0]), TextTone::Accent);
    }
}
