//! Terminal portfolio UI: the prompt, the screen, quick links, the theme toggle, and toasts.
//!
//! The component wires browser adapters from [`portfolio_host_web`] into a
//! [`shell_engine::TerminalController`] and owns every key and pointer binding. The controller
//! never sees UI events.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod prompt;
pub mod renderer;
pub mod toast;

use std::rc::Rc;

use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::leptos_dom::helpers::AnimationFrameRequestHandle;
use leptos::*;
use portfolio_content::{HomeDir, Profile};
use portfolio_host::{SafeUrlOpener, ThemeController, ThemeService};
use portfolio_host_web::{
    apply_document_theme, page_base_url, preferred_theme, prefers_coarse_pointer,
    WebExternalUrlService, WebPrefsStore,
};
use shell_contract::Theme;
use shell_engine::{LineContent, RenderedLine, ShellConfig, ShellServices, TerminalController};
use url::Url;

use crate::{
    prompt::{apply_suggestion, suggestions_for, SuggestionKind},
    renderer::{segment_display, ScreenLine, SegmentDisplay, SignalRenderer},
    toast::ToastNotifier,
};

/// Aliases offered as quick-link buttons, when the profile defines them.
const QUICK_LINK_ALIASES: [&str; 3] = ["cv", "github", "linkedin"];
const PROMPT_PLACEHOLDER: &str = "Type a command (try: help)";

fn segment_view(display: SegmentDisplay) -> View {
    match display {
        SegmentDisplay::Text(text) => text.into_view(),
        SegmentDisplay::Span { class, text } => view! { <span class=class>{text}</span> }.into_view(),
        SegmentDisplay::Anchor { href, text } => view! {
            <a href=href target="_blank" rel="noopener noreferrer">{text}</a>
        }
        .into_view(),
    }
}

fn line_view(line: RenderedLine, base: &Url) -> View {
    let class = format!("line {}", line.class.css_class());
    match line.content {
        LineContent::Inline(segments) => {
            let body = segments
                .into_iter()
                .map(|segment| segment_view(segment_display(segment, base)))
                .collect_view();
            view! { <div class=class class:nowrap=!line.wrap>{body}</div> }.into_view()
        }
        LineContent::Pre(text) => view! {
            <div class=class><pre class="pre">{text}</pre></div>
        }
        .into_view(),
    }
}

#[component]
/// Full-page terminal portfolio.
///
/// Boots the shell with the bundled profile, applies the stored or preferred theme, and renders
/// the intro on the first animation frame so the screen can be measured.
pub fn TerminalApp() -> impl IntoView {
    let profile = match Profile::bundled() {
        Ok(profile) => profile,
        Err(err) => {
            logging::warn!("profile manifest rejected: {err}");
            return view! { <p class="boot-error">"Profile content failed to load."</p> }
                .into_view();
        }
    };
    let base = match page_base_url() {
        Ok(base) => base,
        Err(err) => {
            logging::warn!("page base url unavailable: {err}");
            return view! { <p class="boot-error">"Page address could not be read."</p> }
                .into_view();
        }
    };

    let config = ShellConfig {
        is_mobile: prefers_coarse_pointer(),
        ..ShellConfig::default()
    };
    let is_mobile = config.is_mobile;
    let shell_id = config.shell_id.clone();
    let aliases = profile.open_aliases();
    let quick_links = QUICK_LINK_ALIASES
        .into_iter()
        .filter(|alias| aliases.contains_key(*alias))
        .collect::<Vec<_>>();

    let lines = create_rw_signal(Vec::<ScreenLine>::new());
    let screen = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();
    let input = create_rw_signal(String::new());
    let toast_message = create_rw_signal(String::new());
    let toast_visible = create_rw_signal(false);
    let active_theme = create_rw_signal(Theme::Dark);
    let submitted = create_rw_signal(false);
    // Bumped after each run so history-based suggestions refresh.
    let runs = create_rw_signal(0usize);

    let notifier = Rc::new(ToastNotifier::new(toast_message, toast_visible));
    let theme = Rc::new(ThemeController::new(
        Rc::new(WebPrefsStore),
        notifier.clone(),
        preferred_theme(),
        Rc::new(move |theme: Theme| {
            if let Err(err) = apply_document_theme(theme) {
                logging::warn!("theme apply failed: {err}");
            }
            active_theme.set(theme);
        }),
        Rc::new(|message: &str| logging::warn!("{message}")),
    ));
    let services = ShellServices {
        renderer: Rc::new(SignalRenderer::new(lines, screen)),
        home: Rc::new(HomeDir::from_profile(&profile)),
        profile: Rc::new(profile),
        theme: theme.clone(),
        opener: SafeUrlOpener::new(base.clone(), Rc::new(WebExternalUrlService), notifier),
    };
    let controller = store_value(Rc::new(TerminalController::new(
        portfolio_commands::builtin_registry(),
        services,
        config,
    )));
    let theme = store_value(theme);
    let base = store_value(base);

    let focus_prompt = move || {
        if let Some(element) = input_ref.get_untracked() {
            let _ = element.focus();
        }
    };

    request_animation_frame(move || {
        theme.with_value(|theme| theme.apply_initial());
        controller.with_value(|controller| controller.boot());
        if !is_mobile {
            focus_prompt();
        }
    });

    let resize_frame = store_value(None::<AnimationFrameRequestHandle>);
    let resize_listener = window_event_listener(ev::resize, move |_| {
        if let Some(frame) = resize_frame.get_value() {
            frame.cancel();
        }
        let frame = request_animation_frame_with_handle(move || {
            resize_frame.set_value(None);
            controller.with_value(|controller| controller.refresh_intro_if_pristine());
        });
        match frame {
            Ok(frame) => resize_frame.set_value(Some(frame)),
            Err(err) => logging::warn!("resize frame request failed: {err:?}"),
        }
    });
    on_cleanup(move || resize_listener.remove());

    let run_line = move |line: String, blur_after: bool| {
        if !line.trim().is_empty() {
            submitted.set(true);
        }
        let controller = controller.get_value();
        spawn_local(async move {
            controller.submit(&line).await;
            runs.update(|count| *count += 1);
            if blur_after {
                if let Some(element) = input_ref.get_untracked() {
                    let _ = element.blur();
                }
            } else {
                focus_prompt();
            }
        });
    };

    let submit_prompt = move |blur_after: bool| {
        if controller.with_value(|controller| controller.is_running()) {
            return;
        }
        let line = input.get_untracked();
        input.set(String::new());
        run_line(line, blur_after);
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.alt_key() || ev.ctrl_key() || ev.meta_key() {
            return;
        }
        let next = match ev.key().as_str() {
            "ArrowUp" => {
                ev.prevent_default();
                controller.with_value(|controller| controller.history_up())
            }
            "ArrowDown" => {
                ev.prevent_default();
                controller.with_value(|controller| controller.history_down())
            }
            "Tab" if !ev.shift_key() => {
                ev.prevent_default();
                let current = input.get_untracked();
                Some(controller.with_value(|controller| controller.autocomplete(&current)))
            }
            _ => None,
        };
        if let Some(next) = next {
            input.set(next);
        }
    };

    let suggestions = create_memo(move |_| {
        let _ = runs.get();
        let current = input.get();
        controller.with_value(|controller| suggestions_for(controller, &current))
    });

    let screen_lines = move || lines.get();
    let render_line = move |entry: ScreenLine| base.with_value(|base| line_view(entry.line, base));

    view! {
        <div class="terminal">
            <header class="titlebar">
                <span class="title">{format!("{shell_id}: ~")}</span>
                <nav class="quick-links" aria-label="Quick links">
                    {quick_links
                        .into_iter()
                        .map(|alias| {
                            view! {
                                <button
                                    type="button"
                                    class="quick-link"
                                    on:click=move |_| run_line(format!("open {alias}"), is_mobile)
                                >
                                    {alias}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    type="button"
                    class="theme-toggle"
                    aria-pressed=move || (active_theme.get() == Theme::Light).to_string()
                    aria-label=move || format!("Switch to {} theme", active_theme.get().opposite())
                    on:click=move |_| theme.with_value(|theme| theme.toggle())
                >
                    {move || active_theme.get().opposite().to_string()}
                </button>
            </header>

            <div class="screen" node_ref=screen role="log" aria-live="polite">
                <For each=screen_lines key=|entry| entry.id children=render_line />
            </div>

            <form
                class="prompt"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    submit_prompt(false);
                }
            >
                <label class="ps1" for="prompt-input">{shell_id.clone()}</label>
                <span class="ps1-suffix">":~$"</span>
                <input
                    id="prompt-input"
                    class="prompt-input"
                    type="text"
                    node_ref=input_ref
                    prop:value=move || input.get()
                    placeholder=move || (!submitted.get()).then_some(PROMPT_PLACEHOLDER)
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    autocomplete="off"
                    autocapitalize="off"
                    spellcheck="false"
                />
            </form>

            <Show when=move || is_mobile fallback=|| ()>
                <div class="mobile-assist">
                    <div class="mobile-suggestions" role="listbox" aria-label="Suggestions">
                        <For
                            each=move || {
                                let current = suggestions.get();
                                let kind = current.kind;
                                current
                                    .values
                                    .into_iter()
                                    .map(move |value| (kind, value))
                                    .collect::<Vec<_>>()
                            }
                            key=|(_, value)| value.clone()
                            children=move |(kind, value): (SuggestionKind, String)| {
                                let title = value.clone();
                                let label = value.clone();
                                let aria_label = format!("Insert {value}");
                                view! {
                                    <button
                                        type="button"
                                        class="mobile-suggestion"
                                        title=title
                                        aria-label=aria_label
                                        on:click=move |_| input.set(apply_suggestion(&value, kind))
                                    >
                                        {label}
                                    </button>
                                }
                            }
                        />
                    </div>
                    <button type="button" class="mobile-enter" on:click=move |_| submit_prompt(true)>
                        "Enter"
                    </button>
                </div>
            </Show>

            <div
                class="toast"
                class:show=move || toast_visible.get()
                aria-hidden=move || (!toast_visible.get()).to_string()
                role="status"
            >
                {move || toast_message.get()}
            </div>
        </div>
    }
    .into_view()
}
