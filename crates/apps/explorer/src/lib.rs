//! My Dreams app: an Explorer-style browser over the dream journal.
//!
//! Folders map to journal views, cards can be checked and sent to Forgotten Dreams, and the
//! journal can be exported to or imported from JSON.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod browser;

use desktop_app_contract::AppServices;
use leptos::*;
use platform_host::{unix_time_ms_now, DreamSort, Trend};
use system_ui::prelude::*;

pub use browser::{export_file_name, BrowserState, DreamCard, Folder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Menu {
    File,
    Edit,
    View,
}

const SORT_OPTIONS: [(DreamSort, &str); 3] = [
    (DreamSort::Date, "Sort by Date"),
    (DreamSort::Title, "Sort by Title"),
    (DreamSort::Length, "Sort by Length"),
];

fn trend_tone(trend: Trend) -> TextTone {
    match trend {
        Trend::Increasing => TextTone::Danger,
        Trend::Stable => TextTone::Accent,
        Trend::Decreasing => TextTone::Success,
    }
}

#[cfg(target_arch = "wasm32")]
fn download_json(file_name: &str, json: &str) {
    use wasm_bindgen::JsCast;

    let href = format!(
        "data:application/json;charset=utf-8,{}",
        String::from(js_sys::encode_uri_component(json))
    );
    let Some(anchor) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.create_element("a").ok())
        .and_then(|node| node.dyn_into::<web_sys::HtmlAnchorElement>().ok())
    else {
        return;
    };
    anchor.set_download(file_name);
    anchor.set_href(&href);
    anchor.click();
}

#[cfg(not(target_arch = "wasm32"))]
fn download_json(_: &str, _: &str) {}

#[component]
/// My Dreams window contents.
pub fn MyDreamsApp(
    /// Session services.
    services: AppServices,
) -> impl IntoView {
    let journal = services.journal;
    let state = create_rw_signal(BrowserState::default());
    let open_menu = create_rw_signal(None::<Menu>);
    let importing = create_rw_signal(false);
    let import_text = create_rw_signal(String::new());
    let notice = create_rw_signal(None::<String>);

    let cards = create_memo(move |_| {
        let now = unix_time_ms_now();
        state.with(|state| {
            journal.with(|journal| {
                state
                    .visible(journal, now)
                    .into_iter()
                    .map(DreamCard::from)
                    .collect::<Vec<_>>()
            })
        })
    });
    let visible_ids = move || {
        cards.with_untracked(|cards| cards.iter().map(|card| card.id.clone()).collect::<Vec<_>>())
    };
    let selected_count = Signal::derive(move || state.with(BrowserState::selected_count));

    let menu_toggle = move |menu: Menu| {
        open_menu.update(|open| *open = if *open == Some(menu) { None } else { Some(menu) });
    };
    let close_menu = move || open_menu.set(None);

    let delete_selected = move || {
        let ids = state.try_update(BrowserState::take_selection).unwrap_or_default();
        if ids.is_empty() {
            return;
        }
        let mut moved = 0usize;
        for id in &ids {
            match journal.remove(id) {
                Ok(()) => moved += 1,
                Err(err) => logging::warn!("explorer: delete failed: {err}"),
            }
        }
        notice.set(Some(format!("{moved} dream(s) moved to Forgotten Dreams")));
    };

    let export = move || {
        let now = unix_time_ms_now();
        match journal.snapshot().export_json() {
            Ok(json) => download_json(&export_file_name(now), &json),
            Err(err) => logging::warn!("explorer: export failed: {err}"),
        }
    };

    let import = move || {
        let raw = import_text.get_untracked();
        match journal.import_json(&raw) {
            Ok(count) => {
                notice.set(Some(format!("Successfully imported {count} dreams!")));
                import_text.set(String::new());
                importing.set(false);
            }
            Err(err) => {
                logging::warn!("explorer: import failed: {err}");
                notice.set(Some(
                    "Error importing dreams. Please check the file format.".to_string(),
                ));
            }
        }
    };

    let menu_surface = move || {
        open_menu.get().map(|menu| match menu {
            Menu::File => view! {
                <MenuSurface aria_label="File">
                    <MenuItem on_click=Callback::new(move |_| {
                        close_menu();
                        importing.set(true);
                    })>"Import Dreams..."</MenuItem>
                    <MenuItem on_click=Callback::new(move |_| {
                        close_menu();
                        export();
                    })>"Export Dreams..."</MenuItem>
                </MenuSurface>
            }
            .into_view(),
            Menu::Edit => view! {
                <MenuSurface aria_label="Edit">
                    <MenuItem on_click=Callback::new(move |_| {
                        close_menu();
                        let ids = visible_ids();
                        state.update(|s| s.select_all(ids.iter().map(String::as_str)));
                    })>"Select All"</MenuItem>
                    <MenuItem on_click=Callback::new(move |_| {
                        close_menu();
                        let ids = visible_ids();
                        state.update(|s| s.invert(ids.iter().map(String::as_str)));
                    })>"Invert Selection"</MenuItem>
                    <MenuSeparator />
                    <MenuItem on_click=Callback::new(move |_| {
                        close_menu();
                        delete_selected();
                    })>"Delete Selected"</MenuItem>
                </MenuSurface>
            }
            .into_view(),
            Menu::View => view! {
                <MenuSurface aria_label="View">
                    <MenuItem on_click=Callback::new(move |_| {
                        close_menu();
                        state.update(|s| s.grid = false);
                    })>
                        {move || if state.with(|s| s.grid) { "List View" } else { "List View \u{2713}" }}
                    </MenuItem>
                    <MenuItem on_click=Callback::new(move |_| {
                        close_menu();
                        state.update(|s| s.grid = true);
                    })>
                        {move || if state.with(|s| s.grid) { "Grid View \u{2713}" } else { "Grid View" }}
                    </MenuItem>
                </MenuSurface>
            }
            .into_view(),
        })
    };

    view! {
        <AppShell layout_class="app-explorer-shell">
            <MenuBar>
                <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| menu_toggle(Menu::File))>"File"</Button>
                <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| menu_toggle(Menu::Edit))>"Edit"</Button>
                <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| menu_toggle(Menu::View))>"View"</Button>
            </MenuBar>
            {menu_surface}

            <ToolBar aria_label="Browse dreams">
                <TextField
                    placeholder="Search dreams..."
                    aria_label="Search dreams"
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_input=Callback::new(move |ev| {
                        let search = event_target_value(&ev);
                        state.update(|s| s.search = search);
                    })
                />
                <SelectField
                    aria_label="Sort dreams"
                    value=Signal::derive(move || browser::sort_key(state.with(|s| s.sort)).to_string())
                    on_change=Callback::new(move |ev| {
                        let sort = browser::parse_sort(&event_target_value(&ev));
                        state.update(|s| s.sort = sort);
                    })
                >
                    {SORT_OPTIONS
                        .into_iter()
                        .map(|(sort, label)| view! { <option value=browser::sort_key(sort)>{label}</option> })
                        .collect_view()}
                </SelectField>
                <Show when=move || { selected_count.get() > 0 } fallback=|| ()>
                    <Button
                        variant=ButtonVariant::Danger
                        leading_icon=IconName::Trash
                        on_click=Callback::new(move |_| delete_selected())
                    >
                        {move || format!("Delete ({})", selected_count.get())}
                    </Button>
                </Show>
            </ToolBar>

            <Show when=move || importing.get() fallback=|| ()>
                <Panel ui_slot="import">
                    <Text role=TextRole::Label>"Paste an exported dream archive:"</Text>
                    <TextArea
                        aria_label="Dream archive JSON"
                        value=import_text
                        on_input=Callback::new(move |ev| import_text.set(event_target_value(&ev)))
                    />
                    <ToolBar aria_label="Import actions">
                        <Button variant=ButtonVariant::Primary on_click=Callback::new(move |_| import())>"Import"</Button>
                        <Button on_click=Callback::new(move |_| importing.set(false))>"Cancel"</Button>
                    </ToolBar>
                </Panel>
            </Show>

            <div class="explorer-workspace">
                <Pane ui_slot="folders" aria_label="Dream folders">
                    <PaneHeader title="Dream Folders" />
                    <Tree>
                        {Folder::ALL
                            .into_iter()
                            .map(|folder| {
                                let count = move || {
                                    let now = unix_time_ms_now();
                                    journal.with(|journal| journal.count(folder.filter(now)))
                                };
                                view! {
                                    <TreeItem
                                        selected=Signal::derive(move || state.with(|s| s.folder == folder))
                                        on_click=Callback::new(move |_| state.update(|s| s.folder = folder))
                                    >
                                        <Icon icon=IconName::Folder size=IconSize::Sm />
                                        <span>{folder.label()}</span>
                                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                                            {move || format!("({})", count())}
                                        </Text>
                                    </TreeItem>
                                }
                            })
                            .collect_view()}
                    </Tree>

                    <PaneHeader title="Emotional Patterns" />
                    <For
                        each=move || journal.with(|journal| journal.emotional_analysis())
                        key=|row| (row.emotion.clone(), row.percentage)
                        let:row
                    >
                        {
                            let share = u16::try_from(row.percentage.min(100)).unwrap_or(100);
                            view! {
                                <div class="explorer-emotion" data-ui-slot="emotion">
                                    <Text role=TextRole::Caption>{row.emotion.clone()}</Text>
                                    <ProgressBar max=100 value=share />
                                    <Text role=TextRole::Caption tone=trend_tone(row.trend)>
                                        {format!("{}%", row.percentage)}
                                    </Text>
                                </div>
                            }
                        }
                    </For>
                </Pane>

                <Pane ui_slot="dreams" aria_label="Dreams">
                    <PaneHeader
                        title=Signal::derive(move || state.with(|s| s.folder.label()).to_string())
                        meta=Signal::derive(move || format!("{} dreams", cards.with(Vec::len)))
                    />
                    <Show
                        when=move || cards.with(|cards| !cards.is_empty())
                        fallback=move || view! { <EmptyState>{move || state.with(BrowserState::empty_message)}</EmptyState> }
                    >
                        <ListSurface aria_label="Dream entries" grid=Signal::derive(move || state.with(|s| s.grid))>
                            <For each=move || cards.get() key=|card| card.clone() let:card>
                                {
                                    let toggle_id = card.id.clone();
                                    let check_id = card.id.clone();
                                    let checked_id = card.id.clone();
                                    view! {
                                        <div
                                            class="explorer-card"
                                            data-ui-slot="card"
                                            data-ui-selected=move || state.with(|s| s.is_selected(&checked_id)).to_string()
                                            on:click=move |_| state.update(|s| s.toggle(&toggle_id))
                                        >
                                            <div class="explorer-card-header" on:click=|ev| ev.stop_propagation()>
                                                <CheckboxField
                                                    aria_label=format!("Select {}", card.title)
                                                    checked=Signal::derive({
                                                        let id = check_id.clone();
                                                        move || state.with(|s| s.is_selected(&id))
                                                    })
                                                    on_change=Callback::new(move |_| state.update(|s| s.toggle(&check_id)))
                                                />
                                                <Icon icon=IconName::Journal size=IconSize::Sm />
                                                <Heading role=TextRole::Label>{card.title.clone()}</Heading>
                                                <Text role=TextRole::Caption tone=TextTone::Secondary>{card.date.clone()}</Text>
                                            </div>
                                            <Text>{card.preview.clone()}</Text>
                                            <div class="explorer-card-badges">
                                                {card
                                                    .badges
                                                    .clone()
                                                    .into_iter()
                                                    .map(|badge| view! { <Badge>{badge.clone()}</Badge> })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                }
                            </For>
                        </ListSurface>
                    </Show>
                </Pane>
            </div>

            <StatusBar>
                <StatusBarItem>{move || format!("Total dreams: {}", journal.with(|j| j.entries().len()))}</StatusBarItem>
                <StatusBarItem>{move || notice.get().unwrap_or_default()}</StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sort_options_round_trip_through_select_values() {
        for (sort, _) in SORT_OPTIONS {
            assert_eq!(browser::parse_sort(browser::sort_key(sort)), sort);
        }
        assert_eq!(trend_tone(Trend::Increasing), TextTone::Danger);
    }
}
