//! Lucid Mode: reality-check training over the journal's lucid dreams.

use std::time::Duration;

use desktop_app_contract::AppServices;
use leptos::*;
use platform_host::{DreamCategory, DreamEntry, DreamFilter};
use system_ui::prelude::*;

use crate::{cycle, random_unit, truncate};

/// How often a surprise reality check may fire.
pub const REMINDER_INTERVAL: Duration = Duration::from_secs(30);
/// Chance per interval.
pub const REMINDER_PROBABILITY: f64 = 0.1;
/// How long an unanswered reminder stays up.
pub const REMINDER_DURATION: Duration = Duration::from_secs(5);

const RECENT_LUCID_LIMIT: usize = 3;
const EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One training card.
pub struct Exercise {
    /// Card title.
    pub title: &'static str,
    /// Why it works.
    pub description: &'static str,
    /// What to do.
    pub instruction: &'static str,
}

/// Training cards, cycled with Previous/Next.
pub const EXERCISES: [Exercise; 5] = [
    Exercise {
        title: "Reality Check: Hands",
        description: "Look at your hands. In dreams, they often appear distorted or have extra fingers.",
        instruction: "Count your fingers carefully. Do they look normal?",
    },
    Exercise {
        title: "Reality Check: Text",
        description: "Read some text, look away, then read it again. In dreams, text often changes.",
        instruction: "Find some text and read it twice. Does it stay the same?",
    },
    Exercise {
        title: "Reality Check: Time",
        description: "Check a clock or watch twice. In dreams, time is often inconsistent.",
        instruction: "Look at a clock, look away, then check again. Is the time logical?",
    },
    Exercise {
        title: "Dream Recall Exercise",
        description: "Spend 5 minutes trying to remember your last dream in detail.",
        instruction: "Close your eyes and visualize your most recent dream. Write down what you remember.",
    },
    Exercise {
        title: "Intention Setting",
        description: "Set a clear intention to become lucid in your next dream.",
        instruction: "Repeat: 'Tonight I will realize I am dreaming' while visualizing becoming lucid.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Figures the achievements are judged on.
pub struct LucidStats {
    /// Live lucid entries.
    pub lucid_dreams: usize,
    /// Rounded lucid share of all live entries.
    pub lucidity_rate: u32,
    /// Lucid entries in a row at the end of the journal.
    pub streak: usize,
    /// Reality checks performed this session.
    pub reality_checks: u32,
}

impl LucidStats {
    /// Derives the journal-backed figures.
    pub fn from_entries(entries: &[DreamEntry], reality_checks: u32) -> Self {
        let lucid_dreams = entries
            .iter()
            .filter(|entry| entry.category == DreamCategory::Lucid)
            .count();
        let lucidity_rate = if entries.is_empty() {
            0
        } else {
            ((lucid_dreams as f64 / entries.len() as f64) * 100.0).round() as u32
        };
        let streak = entries
            .iter()
            .rev()
            .take_while(|entry| entry.category == DreamCategory::Lucid)
            .count();
        Self {
            lucid_dreams,
            lucidity_rate,
            streak,
            reality_checks,
        }
    }

    /// Achievement names with their unlock state, in display order.
    pub fn achievements(&self) -> [(&'static str, &'static str, bool); 6] {
        [
            ("\u{1F31F}", "First Lucid Dream", self.lucid_dreams >= 1),
            ("\u{1F441}", "Reality Check Master", self.reality_checks >= 10),
            ("\u{1F525}", "Lucid Streak", self.streak >= 3),
            ("\u{1F680}", "Dream Explorer", self.lucid_dreams >= 5),
            ("\u{1F9E0}", "Consciousness Pioneer", self.lucidity_rate >= 25),
            ("\u{1F319}", "Oneironaute", self.lucid_dreams >= 10),
        ]
    }
}

#[component]
/// Lucid Mode window contents.
pub fn LucidModeApp(
    /// Session services.
    services: AppServices,
) -> impl IntoView {
    let journal = services.journal;
    let reality_checks = create_rw_signal(0u32);
    let exercise = create_rw_signal(0usize);
    let reminder = create_rw_signal(false);

    let stats = create_memo(move |_| {
        let checks = reality_checks.get();
        journal.with(|journal| LucidStats::from_entries(journal.entries(), checks))
    });
    let recent_lucid = Signal::derive(move || {
        journal.with(|journal| {
            let lucid = journal.filtered(DreamFilter::Category(DreamCategory::Lucid));
            lucid
                .iter()
                .skip(lucid.len().saturating_sub(RECENT_LUCID_LIMIT))
                .map(|entry| {
                    (
                        entry.id.clone(),
                        entry.title.clone(),
                        entry.date_label(),
                        truncate(&entry.content, EXCERPT_CHARS),
                    )
                })
                .collect::<Vec<_>>()
        })
    });

    if let Ok(interval) = set_interval_with_handle(
        move || {
            if reminder.get_untracked() || random_unit() >= REMINDER_PROBABILITY {
                return;
            }
            reminder.set(true);
            set_timeout(move || reminder.set(false), REMINDER_DURATION);
        },
        REMINDER_INTERVAL,
    ) {
        on_cleanup(move || interval.clear());
    }

    let perform_check = move || {
        reality_checks.update(|count| *count += 1);
        reminder.set(false);
    };
    let current = move || EXERCISES[exercise.get()];

    view! {
        <AppShell layout_class="app-lucid-shell">
            <Show when=move || reminder.get() fallback=|| ()>
                <Panel ui_slot="reality-check">
                    <Heading>
                        <Icon icon=IconName::Eye size=IconSize::Md />
                        "Reality Check!"
                    </Heading>
                    <Text>"Are you dreaming right now? Check your hands, read some text, or look at a clock!"</Text>
                    <Button variant=ButtonVariant::Primary on_click=Callback::new(move |_| perform_check())>"I'm Awake"</Button>
                    <Button on_click=Callback::new(move |_| reminder.set(false))>"Dismiss"</Button>
                </Panel>
            </Show>

            <ToolBar aria_label="Lucid training summary">
                <Icon icon=IconName::Eye size=IconSize::Md />
                <Heading>"Lucid Dream Training Center"</Heading>
                <Text role=TextRole::Caption>{move || format!("Lucidity Rate: {}%", stats.get().lucidity_rate)}</Text>
                <Text role=TextRole::Caption>{move || format!("Reality Checks: {}", stats.get().reality_checks)}</Text>
            </ToolBar>

            <div class="reflection-layout">
                <Pane ui_slot="stats" aria_label="Lucid dream stats">
                    <PaneHeader title="Lucid Dream Stats" />
                    <Text>{move || format!("Total Lucid Dreams: {}", stats.get().lucid_dreams)}</Text>
                    <Text>{move || format!("Lucidity Rate: {}%", stats.get().lucidity_rate)}</Text>
                    <Text>{move || format!("Current Streak: {}", stats.get().streak)}</Text>
                    <Text>{move || format!("Reality Checks: {}", stats.get().reality_checks)}</Text>

                    <PaneHeader title="Achievements" />
                    {move || {
                        stats
                            .get()
                            .achievements()
                            .into_iter()
                            .map(|(glyph, name, unlocked)| {
                                let tone = if unlocked { TextTone::Primary } else { TextTone::Secondary };
                                view! {
                                    <div class="lucid-achievement" data-ui-unlocked=unlocked.to_string()>
                                        <span aria-hidden="true">{glyph}</span>
                                        <Text tone=tone>{name}</Text>
                                        {unlocked.then(|| view! { <Badge tone=TextTone::Success>"\u{2713}"</Badge> })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Pane>

                <Pane ui_slot="exercise" aria_label="Training exercise">
                    <PaneHeader
                        title=Signal::derive(move || {
                            format!("Training Exercise {} of {}", exercise.get() + 1, EXERCISES.len())
                        })
                    >
                        <Button size=ButtonSize::Sm on_click=Callback::new(move |_| {
                            exercise.update(|index| *index = cycle(*index, EXERCISES.len(), false))
                        })>
                            "Previous"
                        </Button>
                        <Button size=ButtonSize::Sm on_click=Callback::new(move |_| {
                            exercise.update(|index| *index = cycle(*index, EXERCISES.len(), true))
                        })>
                            "Next"
                        </Button>
                    </PaneHeader>
                    <Heading tone=TextTone::Warning>{move || current().title}</Heading>
                    <Text>{move || current().description}</Text>
                    <Panel ui_slot="instructions">
                        <Text role=TextRole::Label>"Instructions:"</Text>
                        <Text>{move || current().instruction}</Text>
                    </Panel>
                    <ToolBar aria_label="Reality checks">
                        <Button
                            variant=ButtonVariant::Primary
                            leading_icon=IconName::Eye
                            on_click=Callback::new(move |_| perform_check())
                        >
                            "Perform Reality Check"
                        </Button>
                        <Button on_click=Callback::new(move |_| reminder.set(true))>"Practice Alert"</Button>
                    </ToolBar>

                    <Show when=move || recent_lucid.with(|rows| !rows.is_empty()) fallback=|| ()>
                        <PaneHeader title="Recent Lucid Dreams" />
                        <For each=move || recent_lucid.get() key=|row| row.0.clone() let:row>
                            <Panel ui_slot="lucid-dream">
                                <Text tone=TextTone::Warning>{row.1}</Text>
                                <Text role=TextRole::Caption>{row.2}</Text>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>{row.3}</Text>
                            </Panel>
                        </For>
                    </Show>
                </Pane>
            </div>

            <StatusBar>
                <StatusBarItem>"Lucid Dream Training Mode Active"</StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: &str, content: &str) -> DreamEntry {
        DreamEntry {
            category: DreamCategory::classify(content),
            ..DreamEntry::new(id, id, content, 0)
        }
    }

    #[test]
    fn stats_count_rate_and_trailing_streak() {
        let entries = vec![
            entry("1", "I became aware I was dreaming"),
            entry("2", "a quiet garden"),
            entry("3", "lucid flight"),
            entry("4", "I took control of the dream"),
        ];
        let stats = LucidStats::from_entries(&entries, 2);
        assert_eq!(
            stats,
            LucidStats {
                lucid_dreams: 3,
                lucidity_rate: 75,
                streak: 2,
                reality_checks: 2,
            }
        );
    }

    #[test]
    fn achievements_unlock_on_thresholds() {
        let stats = LucidStats {
            lucid_dreams: 1,
            lucidity_rate: 25,
            streak: 0,
            reality_checks: 10,
        };
        let unlocked: Vec<&str> = stats
            .achievements()
            .into_iter()
            .filter(|(_, _, unlocked)| *unlocked)
            .map(|(_, name, _)| name)
            .collect();
        assert_eq!(
            unlocked,
            vec!["First Lucid Dream", "Reality Check Master", "Consciousness Pioneer"]
        );
        assert_eq!(LucidStats::from_entries(&[], 0).lucidity_rate, 0);
    }
}
