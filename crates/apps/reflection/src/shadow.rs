//! Shadow Work: guided prompts plus a keyword read of nightmares.

use desktop_app_contract::AppServices;
use leptos::*;
use platform_host::{DreamCategory, DreamEntry, DreamFilter};
use system_ui::prelude::*;

use crate::cycle;

/// Words that mark a dream as touching a dark theme.
pub const DARK_THEME_KEYWORDS: [&str; 5] = ["dark", "shadow", "fear", "angry", "guilt"];

/// Notice shown after a reflection is kept.
pub const SAVED_NOTICE: &str = "Shadow work reflection saved to your private journal.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One reflection prompt.
pub struct ShadowPrompt {
    /// Prompt title.
    pub title: &'static str,
    /// Question put to the dreamer.
    pub question: &'static str,
    /// Framing text under the question.
    pub guidance: &'static str,
}

/// Prompts, cycled with Previous/Next.
pub const PROMPTS: [ShadowPrompt; 6] = [
    ShadowPrompt {
        title: "Confronting the Shadow",
        question: "What aspects of yourself do you try to hide from others?",
        guidance: "The shadow contains parts of ourselves we've rejected. Acknowledging these aspects is the first step to integration.",
    },
    ShadowPrompt {
        title: "Fear as Teacher",
        question: "What is your greatest fear trying to teach you?",
        guidance: "Our fears often point to areas where we need growth. What wisdom might your fear be offering?",
    },
    ShadowPrompt {
        title: "Anger's Message",
        question: "When you feel angry in dreams, what boundaries are being crossed?",
        guidance: "Anger in dreams often signals violated boundaries or unmet needs. What is your anger protecting?",
    },
    ShadowPrompt {
        title: "The Rejected Self",
        question: "What qualities do you judge harshly in others?",
        guidance: "What we judge in others often reflects our own rejected shadow aspects. How might you reclaim these qualities?",
    },
    ShadowPrompt {
        title: "Nightmare Wisdom",
        question: "If your nightmare had a message for you, what would it be?",
        guidance: "Nightmares often carry important messages about unresolved issues or suppressed emotions.",
    },
    ShadowPrompt {
        title: "Integration Practice",
        question: "How can you honor both your light and dark aspects?",
        guidance: "True wholeness comes from accepting all parts of ourselves. How can you integrate your shadow with compassion?",
    },
];

/// Archetype names and what each points at.
pub const ARCHETYPES: [(&str, &str); 6] = [
    ("The Destroyer", "Represents necessary endings and transformation"),
    ("The Rebel", "Challenges authority and breaks limiting rules"),
    ("The Victim", "Shows where you give away your power"),
    ("The Critic", "Points to perfectionism and self-judgment"),
    ("The Addict", "Reveals compulsive patterns and dependencies"),
    ("The Saboteur", "Undermines success out of fear"),
];

const INSIGHT_RULES: [(&[&str], &str); 5] = [
    (
        &["chase", "run"],
        "Running from something may represent avoiding an aspect of yourself",
    ),
    (
        &["dark", "shadow"],
        "Darkness often symbolizes the unconscious or hidden aspects",
    ),
    (
        &["monster", "evil"],
        "Monsters may represent rejected parts of your psyche",
    ),
    (
        &["angry", "rage"],
        "Anger might indicate suppressed emotions or violated boundaries",
    ),
    (
        &["guilt", "shame"],
        "Guilt/shame may point to self-judgment or unintegrated aspects",
    ),
];

/// Whether the dream text mentions any dark-theme keyword.
pub fn has_dark_theme(entry: &DreamEntry) -> bool {
    let content = entry.content.to_lowercase();
    DARK_THEME_KEYWORDS
        .iter()
        .any(|word| content.contains(word))
}

/// Keyword-driven insights for one dream, in rule order.
pub fn shadow_insights(content: &str) -> Vec<&'static str> {
    let content = content.to_lowercase();
    INSIGHT_RULES
        .iter()
        .filter(|(words, _)| words.iter().any(|word| content.contains(word)))
        .map(|(_, insight)| *insight)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Reflections kept for the session; never written into the dream journal.
pub struct ReflectionLog {
    entries: Vec<String>,
}

impl ReflectionLog {
    /// Keeps a trimmed reflection; blank text is refused.
    pub fn save(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.entries.push(text.to_string());
        true
    }

    /// Number of saved reflections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was saved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[component]
/// Shadow Work window contents.
pub fn ShadowWorkApp(
    /// Session services.
    services: AppServices,
) -> impl IntoView {
    let journal = services.journal;
    let prompt = create_rw_signal(0usize);
    let draft = create_rw_signal(String::new());
    let notice = create_rw_signal(None::<&'static str>);
    let selected = create_rw_signal(String::new());
    let log = store_value(ReflectionLog::default());

    let nightmares = create_memo(move |_| {
        journal.with(|journal| {
            journal
                .filtered(DreamFilter::Category(DreamCategory::Nightmare))
                .into_iter()
                .map(|entry| (entry.id.clone(), entry.title.clone(), entry.content.clone()))
                .collect::<Vec<_>>()
        })
    });
    let dark_themes = Signal::derive(move || {
        journal.with(|journal| journal.entries().iter().filter(|e| has_dark_theme(e)).count())
    });
    let insights = Signal::derive(move || {
        let id = selected.get();
        nightmares.with(|rows| {
            rows.iter()
                .find(|(row_id, _, _)| *row_id == id)
                .map(|(_, _, content)| shadow_insights(content))
                .unwrap_or_default()
        })
    });

    let save = move || {
        let saved = draft.with_untracked(|text| log.try_update_value(|log| log.save(text)));
        if saved == Some(true) {
            logging::log!("shadow work: {} reflections this session", log.with_value(ReflectionLog::len));
            notice.set(Some(SAVED_NOTICE));
            draft.set(String::new());
        }
    };
    let current = move || PROMPTS[prompt.get()];

    view! {
        <AppShell layout_class="app-shadow-shell">
            <ToolBar aria_label="Shadow work summary">
                <Icon icon=IconName::Moon size=IconSize::Md />
                <Heading>"Shadow Work - Integrating the Dark"</Heading>
                <Text role=TextRole::Caption tone=TextTone::Danger>
                    {move || format!("Nightmares: {}", nightmares.with(Vec::len))}
                </Text>
                <Text role=TextRole::Caption tone=TextTone::Danger>
                    {move || format!("Dark Themes: {}", dark_themes.get())}
                </Text>
            </ToolBar>

            <div class="reflection-layout">
                <Pane ui_slot="archetypes" aria_label="Shadow archetypes">
                    <PaneHeader title="Shadow Archetypes" />
                    {ARCHETYPES
                        .into_iter()
                        .map(|(name, description)| view! {
                            <Panel ui_slot="archetype">
                                <Text tone=TextTone::Danger>{name}</Text>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>{description}</Text>
                            </Panel>
                        })
                        .collect_view()}

                    <Show when=move || nightmares.with(|rows| !rows.is_empty()) fallback=|| ()>
                        <PaneHeader title="Nightmare Analysis" />
                        <SelectField
                            aria_label="Nightmare to analyze"
                            value=selected
                            on_change=Callback::new(move |ev| selected.set(event_target_value(&ev)))
                        >
                            <option value="">"Select a nightmare..."</option>
                            <For each=move || nightmares.get() key=|row| row.0.clone() let:row>
                                <option value=row.0>{row.1}</option>
                            </For>
                        </SelectField>
                        <For each=move || insights.get() key=|insight| *insight let:insight>
                            <Text role=TextRole::Caption tone=TextTone::Warning>{insight}</Text>
                        </For>
                    </Show>
                </Pane>

                <Pane ui_slot="exercise" aria_label="Shadow work exercise">
                    <PaneHeader
                        title=Signal::derive(move || {
                            format!("Shadow Work Exercise {} of {}", prompt.get() + 1, PROMPTS.len())
                        })
                    >
                        <Button size=ButtonSize::Sm on_click=Callback::new(move |_| {
                            prompt.update(|index| *index = cycle(*index, PROMPTS.len(), false))
                        })>
                            "Previous"
                        </Button>
                        <Button size=ButtonSize::Sm on_click=Callback::new(move |_| {
                            prompt.update(|index| *index = cycle(*index, PROMPTS.len(), true))
                        })>
                            "Next"
                        </Button>
                    </PaneHeader>
                    <Heading tone=TextTone::Danger>{move || current().title}</Heading>
                    <Panel ui_slot="question">
                        <Text role=TextRole::Label>"Reflection Question:"</Text>
                        <Text>{move || format!("\"{}\"", current().question)}</Text>
                    </Panel>
                    <Panel ui_slot="guidance">
                        <Text role=TextRole::Label>"Guidance:"</Text>
                        <Text tone=TextTone::Secondary>{move || current().guidance}</Text>
                    </Panel>

                    <PaneHeader title="Private Reflection" />
                    <TextArea
                        placeholder="Write your honest reflections here... This is a safe space for exploring your shadow."
                        aria_label="Private reflection"
                        value=draft
                        on_input=Callback::new(move |ev| {
                            notice.set(None);
                            draft.set(event_target_value(&ev));
                        })
                    />
                    <ToolBar aria_label="Reflection actions">
                        <Button
                            variant=ButtonVariant::Primary
                            leading_icon=IconName::Save
                            on_click=Callback::new(move |_| save())
                        >
                            "Save Reflection"
                        </Button>
                        <Button on_click=Callback::new(move |_| draft.set(String::new()))>"Clear"</Button>
                    </ToolBar>
                    {move || notice.get().map(|text| view! { <Text tone=TextTone::Success>{text}</Text> })}

                    <Panel ui_slot="integration">
                        <Text role=TextRole::Label>"Integration Reminder:"</Text>
                        <Text role=TextRole::Caption>
                            "Shadow work is about integration, not elimination. The goal is to acknowledge and accept all parts of yourself with compassion. What you resist persists; what you embrace transforms."
                        </Text>
                    </Panel>
                </Pane>
            </div>

            <StatusBar>
                <StatusBarItem>"Shadow Work Session Active - Practice Self-Compassion"</StatusBarItem>
                <StatusBarItem>"Remember: Integration, not elimination"</StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn insights_follow_rule_order() {
        assert_eq!(
            shadow_insights("A MONSTER chased me through the dark and I felt shame"),
            vec![
                "Running from something may represent avoiding an aspect of yourself",
                "Darkness often symbolizes the unconscious or hidden aspects",
                "Monsters may represent rejected parts of your psyche",
                "Guilt/shame may point to self-judgment or unintegrated aspects",
            ]
        );
        assert!(shadow_insights("a sunny picnic").is_empty());
    }

    #[test]
    fn dark_themes_match_any_keyword() {
        assert!(has_dark_theme(&DreamEntry::new("1", "t", "Guilt followed me", 0)));
        assert!(!has_dark_theme(&DreamEntry::new("2", "t", "bright meadow", 0)));
    }

    #[test]
    fn blank_reflections_are_refused() {
        let mut log = ReflectionLog::default();
        assert!(!log.save("   \n"));
        assert!(log.is_empty());
        assert!(log.save("  I avoid conflict  "));
        assert_eq!(log.len(), 1);
    }
}
