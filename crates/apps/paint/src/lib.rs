//! Dream Canvas app: a Win98-style paint program over an in-memory pixel surface.
//!
//! Tool logic lives in [`session`] and [`canvas`] so it runs without a browser; the component
//! blits the surface to an HTML canvas after every change.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod canvas;
pub mod session;

use desktop_app_contract::AppServices;
use leptos::*;
use platform_host::{format_date, unix_time_ms_now};
use system_ui::prelude::*;

pub use canvas::{PixelCanvas, PixelPoint, Rgb};
pub use session::{PaintSession, Tool, XorShift, PALETTE};

/// Download name for a saved canvas.
pub fn export_file_name(now_ms: u64) -> String {
    format!("dream_{}.png", format_date(now_ms))
}

/// Paints a dreamscape into `session`; false once the window has closed.
fn paint_dreamscape(session: StoredValue<PaintSession>, symbols: &[String], seed: u64) -> bool {
    let mut rng = XorShift::new(seed);
    session
        .try_update_value(|s| s.generate_dreamscape(symbols, &mut rng))
        .is_some()
}

fn event_point(ev: &web_sys::MouseEvent) -> PixelPoint {
    PixelPoint::new(ev.offset_x(), ev.offset_y())
}

#[cfg(target_arch = "wasm32")]
mod surface {
    use leptos::{html, HtmlElement};
    use wasm_bindgen::{Clamped, JsCast};

    use crate::canvas::PixelCanvas;

    /// Copies the pixel surface onto the element.
    pub fn blit(element: &HtmlElement<html::Canvas>, canvas: &PixelCanvas) {
        let Ok(Some(context)) = element.get_context("2d") else {
            return;
        };
        let Ok(context) = context.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
            return;
        };
        match web_sys::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(canvas.data()),
            canvas.width(),
            canvas.height(),
        ) {
            Ok(image) => {
                if let Err(err) = context.put_image_data(&image, 0.0, 0.0) {
                    leptos::logging::warn!("paint: blit failed: {err:?}");
                }
            }
            Err(err) => leptos::logging::warn!("paint: image data rejected: {err:?}"),
        }
    }

    /// Triggers a PNG download of the element's contents.
    pub fn download(element: &HtmlElement<html::Canvas>, file_name: &str) {
        let Ok(url) = element.to_data_url() else {
            return;
        };
        let Some(anchor) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.create_element("a").ok())
            .and_then(|node| node.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        else {
            return;
        };
        anchor.set_download(file_name);
        anchor.set_href(&url);
        anchor.click();
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod surface {
    use leptos::{html, HtmlElement};

    use crate::canvas::PixelCanvas;

    pub fn blit(_: &HtmlElement<html::Canvas>, _: &PixelCanvas) {}

    pub fn download(_: &HtmlElement<html::Canvas>, _: &str) {}
}

#[component]
/// Dream Canvas window contents.
pub fn DreamCanvasApp(
    /// Session services.
    services: AppServices,
) -> impl IntoView {
    let journal = services.journal;
    let oracle = store_value(services.oracle);
    let session = store_value(PaintSession::default());
    let revision = create_rw_signal(0u64);
    let drawn = create_rw_signal(0u64);
    let drawing = create_rw_signal(false);
    let generating = create_rw_signal(false);
    let status = create_rw_signal(None::<String>);
    let canvas_ref = create_node_ref::<html::Canvas>();

    let bump = move |counter: RwSignal<u64>| counter.update(|r| *r = r.wrapping_add(1));
    // Settings changes only refresh the chrome; surface changes also re-blit.
    let apply = move |f: &dyn Fn(&mut PaintSession) -> bool| {
        if session.try_update_value(|s| f(s)).unwrap_or(false) {
            bump(drawn);
        }
        bump(revision);
    };

    create_effect(move |_| {
        drawn.track();
        if let Some(element) = canvas_ref.get() {
            session.with_value(|s| surface::blit(&element, s.canvas()));
        }
    });

    let generate = move || {
        if generating.get_untracked() {
            return;
        }
        generating.set(true);
        let latest = journal
            .signal()
            .with_untracked(|journal| journal.entries().last().cloned());
        let oracle = oracle.get_value();
        spawn_local(async move {
            let symbols = match latest {
                Some(entry) => {
                    match oracle.image_prompt(&entry.content).await {
                        Ok(prompt) => status.set(Some(prompt)),
                        Err(err) => logging::warn!("paint: image prompt failed: {err}"),
                    }
                    entry.symbols
                }
                None => Vec::new(),
            };
            if !paint_dreamscape(session, &symbols, unix_time_ms_now()) {
                return;
            }
            bump(drawn);
            generating.set(false);
        });
    };

    let current = move || {
        revision.track();
        session.with_value(|s| (s.tool(), s.color(), s.brush_size()))
    };

    view! {
        <AppShell layout_class="app-paint-shell">
            <MenuBar>
                <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| {
                    apply(&|s| {
                        s.clear();
                        true
                    });
                })>
                    "New"
                </Button>
                <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| {
                    apply(&PaintSession::undo);
                })>
                    "Undo"
                </Button>
            </MenuBar>

            <ToolBar aria_label="Paint tools">
                {Tool::ALL
                    .into_iter()
                    .map(|tool| {
                        view! {
                            <Button
                                size=ButtonSize::Sm
                                pressed=Signal::derive(move || current().0 == tool)
                                on_click=Callback::new(move |_| {
                                    apply(&|s| {
                                        s.select_tool(tool);
                                        false
                                    });
                                })
                            >
                                {tool.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
                <RangeField
                    min="1"
                    max="20"
                    aria_label="Brush size"
                    value=Signal::derive(move || current().2.to_string())
                    on_input=Callback::new(move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            apply(&|s| {
                                s.set_brush_size(size);
                                false
                            });
                        }
                    })
                />
                <Text role=TextRole::Caption>{move || format!("Size: {}", current().2)}</Text>
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Sparkle
                    disabled=generating
                    on_click=Callback::new(move |_| generate())
                >
                    {move || if generating.get() { "Generating..." } else { "AI Dream" }}
                </Button>
                <Button
                    leading_icon=IconName::Save
                    on_click=Callback::new(move |_| {
                        if let Some(element) = canvas_ref.get_untracked() {
                            surface::download(&element, &export_file_name(unix_time_ms_now()));
                        }
                    })
                >
                    "Save"
                </Button>
            </ToolBar>

            <div class="paint-palette" role="listbox" aria-label="Colour palette">
                {PALETTE
                    .into_iter()
                    .filter_map(|hex| Rgb::from_hex(hex).map(|rgb| (hex, rgb)))
                    .map(|(hex, rgb)| {
                        view! {
                            <Swatch
                                color=hex
                                selected=Signal::derive(move || current().1 == rgb)
                                on_click=Callback::new(move |_| {
                                    apply(&|s| {
                                        s.select_color(rgb);
                                        false
                                    });
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="paint-stage">
                <canvas
                    node_ref=canvas_ref
                    class="paint-surface"
                    width=session::CANVAS_WIDTH
                    height=session::CANVAS_HEIGHT
                    on:mousedown=move |ev| {
                        if ev.button() != 0 {
                            return;
                        }
                        drawing.set(true);
                        let at = event_point(&ev);
                        apply(&|s| s.press(at));
                    }
                    on:mousemove=move |ev| {
                        if drawing.get_untracked() {
                            let at = event_point(&ev);
                            apply(&|s| s.drag(at));
                        }
                    }
                    on:mouseup=move |ev| {
                        if drawing.get_untracked() {
                            drawing.set(false);
                            let at = event_point(&ev);
                            apply(&|s| s.release(at));
                        }
                    }
                    on:mouseleave=move |ev| {
                        if drawing.get_untracked() {
                            drawing.set(false);
                            let at = event_point(&ev);
                            apply(&|s| s.release(at));
                        }
                    }
                ></canvas>
            </div>

            <StatusBar>
                <StatusBarItem>
                    {move || {
                        let (tool, color, _) = current();
                        format!("{} | {}", tool.label(), color.to_hex())
                    }}
                </StatusBarItem>
                <StatusBarItem>{move || status.get().unwrap_or_default()}</StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn export_name_carries_the_date() {
        assert_eq!(export_file_name(0), "dream_1970-01-01.png");
    }

    #[test]
    fn dreamscape_for_a_closed_window_is_skipped() {
        let _ = leptos::create_runtime();
        let (session, disposer) =
            as_child_of_current_owner(|_: ()| store_value(PaintSession::new(16, 12)))(());
        let blank = session.with_value(|s| s.canvas().data().to_vec());

        assert!(paint_dreamscape(session, &["moon".to_string()], 7));
        assert_ne!(session.with_value(|s| s.canvas().data().to_vec()), blank);

        drop(disposer);
        assert!(!paint_dreamscape(session, &[], 7));
    }
}
