//! Dream Mail app: an Outlook-style client whose inbox is written by characters from recent
//! dreams.
//!
//! Letters are regenerated whenever the number of recorded dreams changes. Sending is
//! simulated; nothing leaves the browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod inbox;

use desktop_app_contract::AppServices;
use leptos::*;
use platform_host::{format_date, unix_time_ms_now, DreamEmail, DEFAULT_EMAIL_SUBJECT};
use system_ui::prelude::*;

pub use inbox::{inbox_requests, sender_address, Compose, Inbox, MailMessage, MailRequest};

/// Whether check `seq` is still the newest; false once the window has closed.
fn is_latest_check(check_seq: StoredValue<u64>, seq: u64) -> bool {
    check_seq.try_get_value() == Some(seq)
}

#[component]
/// Dream Mail window contents.
pub fn DreamMailApp(
    /// Session services.
    services: AppServices,
) -> impl IntoView {
    let journal = services.journal;
    let oracle = store_value(services.oracle);
    let inbox = create_rw_signal(Inbox::default());
    let compose = create_rw_signal(None::<Compose>);
    let receiving = create_rw_signal(false);
    let notice = create_rw_signal(None::<String>);
    // Results from an older check are dropped once a newer one starts.
    let check_seq = store_value(0u64);

    let check_mail = move || {
        let seq = check_seq.get_value().wrapping_add(1);
        check_seq.set_value(seq);
        receiving.set(true);
        let requests = journal
            .signal()
            .with_untracked(|journal| inbox_requests(journal.entries(), unix_time_ms_now()));
        let oracle = oracle.get_value();
        spawn_local(async move {
            let mut messages = Vec::with_capacity(requests.len());
            for request in requests {
                let email = match oracle
                    .generate_dream_email(&request.themes, &request.character)
                    .await
                {
                    Ok(email) => email,
                    Err(err) => {
                        logging::warn!("mail: letter from {} failed: {err}", request.from);
                        DreamEmail {
                            subject: DEFAULT_EMAIL_SUBJECT.to_string(),
                            content: String::new(),
                        }
                    }
                };
                messages.push(request.into_message(email));
            }
            if !is_latest_check(check_seq, seq) {
                return;
            }
            inbox.update(|inbox| inbox.replace(messages));
            receiving.set(false);
        });
    };

    let dream_count = create_memo(move |_| journal.with(|journal| journal.entries().len()));
    create_effect(move |_| {
        dream_count.track();
        check_mail();
    });

    let selected = create_memo(move |_| inbox.with(|inbox| inbox.selected().cloned()));
    let has_selection = Signal::derive(move || selected.with(Option::is_some));
    let no_selection = Signal::derive(move || !has_selection.get());
    let rows = Signal::derive(move || {
        inbox.with(|inbox| {
            inbox
                .messages()
                .iter()
                .map(|m| (m.id.clone(), m.from.clone(), m.subject.clone(), m.read, m.starred))
                .collect::<Vec<_>>()
        })
    });

    let start_compose = move |draft: Compose| {
        notice.set(None);
        compose.set(Some(draft));
    };
    let from_selected = move |template: fn(&MailMessage) -> Compose| {
        if let Some(message) = selected.get_untracked() {
            start_compose(template(&message));
        }
    };
    let edit = move |apply: &dyn Fn(&mut Compose)| {
        compose.update(|draft| {
            if let Some(draft) = draft.as_mut() {
                apply(draft);
            }
        });
    };

    let compose_view = move || {
        view! {
            <Panel ui_slot="compose">
                <div class="mail-compose-field">
                    <Text role=TextRole::Label>"To:"</Text>
                    <TextField
                        placeholder="Enter dream realm address..."
                        aria_label="Recipient"
                        value=Signal::derive(move || compose.with(|c| c.as_ref().map(|c| c.to.clone()).unwrap_or_default()))
                        on_input=Callback::new(move |ev| {
                            let to = event_target_value(&ev);
                            edit(&|c| c.to = to.clone());
                        })
                    />
                </div>
                <div class="mail-compose-field">
                    <Text role=TextRole::Label>"Subject:"</Text>
                    <TextField
                        placeholder="Message from the waking world..."
                        aria_label="Subject"
                        value=Signal::derive(move || compose.with(|c| c.as_ref().map(|c| c.subject.clone()).unwrap_or_default()))
                        on_input=Callback::new(move |ev| {
                            let subject = event_target_value(&ev);
                            edit(&|c| c.subject = subject.clone());
                        })
                    />
                </div>
                <TextArea
                    placeholder="Write your message to the dream realm..."
                    aria_label="Message body"
                    value=Signal::derive(move || compose.with(|c| c.as_ref().map(|c| c.body.clone()).unwrap_or_default()))
                    on_input=Callback::new(move |ev| {
                        let body = event_target_value(&ev);
                        edit(&|c| c.body = body.clone());
                    })
                />
                <ToolBar aria_label="Compose actions">
                    <Button
                        variant=ButtonVariant::Primary
                        leading_icon=IconName::Forward
                        on_click=Callback::new(move |_| {
                            compose.set(None);
                            notice.set(Some(inbox::SENT_NOTICE.to_string()));
                        })
                    >
                        "Send"
                    </Button>
                    <Button on_click=Callback::new(move |_| compose.set(None))>"Cancel"</Button>
                </ToolBar>
            </Panel>
        }
    };

    let reader = move || match selected.get() {
        Some(message) => {
            let id = message.id.clone();
            view! {
                <Pane ui_slot="reader" aria_label="Message">
                    <PaneHeader title=message.subject.clone() meta=format_date(message.received_at_ms)>
                        <Button
                            size=ButtonSize::Sm
                            leading_icon=IconName::Star
                            pressed=message.starred
                            aria_label="Star message"
                            on_click=Callback::new(move |_| inbox.update(|inbox| inbox.toggle_star(&id)))
                        >
                            {if message.starred { "Starred" } else { "Star" }}
                        </Button>
                    </PaneHeader>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        {format!("From: {}", message.from)}
                    </Text>
                    <div class="mail-body">{message.content}</div>
                </Pane>
            }
            .into_view()
        }
        None => view! {
            <EmptyState>
                {move || {
                    if receiving.get() {
                        "Receiving messages from the dream realm..."
                    } else {
                        "Select an email to view its contents"
                    }
                }}
            </EmptyState>
        }
        .into_view(),
    };

    view! {
        <AppShell layout_class="app-mail-shell">
            <ToolBar aria_label="Mail actions">
                <Button
                    leading_icon=IconName::Mail
                    on_click=Callback::new(move |_| start_compose(Compose::default()))
                >
                    "Compose"
                </Button>
                <Button disabled=receiving on_click=Callback::new(move |_| check_mail())>
                    {move || if receiving.get() { "Receiving..." } else { "Check Mail" }}
                </Button>
                <Button
                    leading_icon=IconName::Reply
                    disabled=no_selection
                    on_click=Callback::new(move |_| from_selected(Compose::reply))
                >
                    "Reply"
                </Button>
                <Button
                    leading_icon=IconName::Forward
                    disabled=no_selection
                    on_click=Callback::new(move |_| from_selected(Compose::forward))
                >
                    "Forward"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    leading_icon=IconName::Trash
                    disabled=no_selection
                    on_click=Callback::new(move |_| {
                        if let Some(message) = selected.get_untracked() {
                            inbox.update(|inbox| inbox.delete(&message.id));
                        }
                    })
                >
                    "Delete"
                </Button>
            </ToolBar>

            <div class="mail-layout">
                <Pane ui_slot="inbox" aria_label="Inbox">
                    <PaneHeader
                        title="Dream Inbox"
                        meta=Signal::derive(move || format!("{} unread", inbox.with(Inbox::unread_count)))
                    />
                    <ListSurface aria_label="Messages">
                        <For each=move || rows.get() key=|row| row.clone() let:row>
                            {
                                let (id, from, subject, read, starred) = row;
                                let row_id = id.clone();
                                view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        ui_slot="mail-row"
                                        selected=Signal::derive(move || {
                                            selected.with(|m| m.as_ref().is_some_and(|m| m.id == row_id))
                                        })
                                        on_click=Callback::new(move |_| inbox.update(|inbox| inbox.open(&id)))
                                    >
                                        <span data-ui-unread=(!read).to_string()>
                                            {if starred { "\u{2605} " } else { "" }}
                                            {from}
                                        </span>
                                        <span class="mail-row-subject">{subject}</span>
                                    </Button>
                                }
                            }
                        </For>
                    </ListSurface>
                </Pane>

                <Show when=move || compose.with(Option::is_some) fallback=reader>
                    {compose_view}
                </Show>
            </div>

            <StatusBar>
                <StatusBarItem>"Connected to Dream Realm Mail Server"</StatusBarItem>
                <StatusBarItem>{move || notice.get().unwrap_or_default()}</StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_for_a_closed_window_are_dropped() {
        let _ = leptos::create_runtime();
        let (check_seq, disposer) = as_child_of_current_owner(|_: ()| store_value(3u64))(());
        assert!(is_latest_check(check_seq, 3));
        assert!(!is_latest_check(check_seq, 2));

        drop(disposer);
        assert!(!is_latest_check(check_seq, 3));
    }
}
