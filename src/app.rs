//! Page wiring.
//!
//! Installs the listeners that live for the whole page:
//! - `keyup` on the document, dispatched through the shortcut table
//! - `click` on the document, turning trigger clicks into [`ResolveLink`] commands
//! - page load, which injects the stylesheet, the extra column and the help overlay

use leetx_core::config::selectors::SEARCH_INPUT;
use leetx_core::link::LinkHandler;
use leetx_core::sort_filter::{Resolution, SortFilterRequest, apply};
use leetx_core::{Action, ConfigError, KeyInput, KeyTarget, LinkError, ResolveLink, Shortcuts, Side};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{KeyboardEvent, MouseEvent, console};

use crate::components::HelpOverlay;
use crate::config::{HELP_ROOT_ID, STYLESHEET};
use crate::utils::dom;
use crate::utils::fetch::BrowserFetcher;
use crate::utils::page::{DomLinkUi, DomPage};
use crate::utils::table;

/// State shared by every listener for the lifetime of the page.
pub struct Enhancer {
    shortcuts: &'static Shortcuts,
    help_visible: RwSignal<bool>,
    links: LinkHandler<BrowserFetcher, DomLinkUi>,
}

/// Build the shortcut table once and attach all listeners.
///
/// # Note
/// The state and listener closures are intentionally leaked; they must
/// survive until the browser navigates away.
pub fn install() -> Result<(), ConfigError> {
    let shortcuts: &'static Shortcuts = Box::leak(Box::new(Shortcuts::configured()?));
    let app: &'static Enhancer = Box::leak(Box::new(Enhancer {
        shortcuts,
        help_visible: RwSignal::new(false),
        links: LinkHandler::new(BrowserFetcher, DomLinkUi),
    }));

    let Some(document) = dom::document() else {
        console::warn_1(&"Document not available, enhancement disabled".into());
        return Ok(());
    };

    let on_keyup = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
        app.on_key_up(&ev);
    }) as Box<dyn Fn(KeyboardEvent)>);
    let _ = document.add_event_listener_with_callback("keyup", on_keyup.as_ref().unchecked_ref());
    on_keyup.forget();

    let on_click = Closure::wrap(Box::new(move |ev: MouseEvent| {
        app.on_click(&ev);
    }) as Box<dyn Fn(MouseEvent)>);
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    // The module may start after `load` has already fired.
    if document.ready_state() == "complete" {
        app.decorate_page();
    } else if let Some(window) = dom::window() {
        let on_load = Closure::wrap(Box::new(move || {
            app.decorate_page();
        }) as Box<dyn Fn()>);
        let _ = window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        on_load.forget();
    }

    Ok(())
}

impl Enhancer {
    fn decorate_page(&'static self) {
        let Some(document) = dom::document() else { return };

        dom::inject_style(STYLESHEET);

        let inserted = table::append_columns(&document, &dom::location_href());
        if inserted > 0 {
            console::debug_1(&format!("Inserted {inserted} link cells").into());
        }

        self.mount_help(&document);
    }

    fn mount_help(&'static self, document: &web_sys::Document) {
        let Some(body) = document.body() else { return };
        let Ok(root) = document.create_element("div") else { return };
        root.set_id(HELP_ROOT_ID);
        if body.append_child(&root).is_err() {
            return;
        }

        let shortcuts = self.shortcuts;
        let visible = self.help_visible;
        mount_to(root.unchecked_into::<web_sys::HtmlElement>(), move || {
            view! { <HelpOverlay shortcuts=shortcuts visible=visible /> }
        })
        .forget();
    }

    fn on_key_up(&self, ev: &KeyboardEvent) {
        let target = if dom::is_text_field(ev.target()) {
            KeyTarget::TextField
        } else {
            KeyTarget::Other
        };
        let input = KeyInput {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
            target,
        };

        let Some(action) = self.shortcuts.dispatch(&input) else {
            return;
        };
        ev.prevent_default();
        self.run(action);
    }

    fn run(&self, action: &Action) {
        match action {
            Action::FocusSearch => {
                if !dom::focus_and_select(SEARCH_INPUT) {
                    console::warn_1(&"Search box not found".into());
                }
            }
            Action::SortFilter(request) => report_sort_filter(request, apply(&DomPage, request)),
            Action::ToggleHelp => self.help_visible.update(|v| *v = !*v),
        }
    }

    fn on_click(&'static self, ev: &MouseEvent) {
        let Some(command) = table::trigger_command(ev.target()) else {
            return;
        };
        ev.prevent_default();
        wasm_bindgen_futures::spawn_local(self.resolve_link(command));
    }

    async fn resolve_link(&'static self, command: ResolveLink) {
        if let Err(err @ LinkError::FetchFailed { .. }) = self.links.handle(&command).await {
            console::error_1(&err.to_string().into());
        }
    }
}

/// Log a sort/filter outcome; none of them reach the user.
fn report_sort_filter(
    request: &SortFilterRequest,
    result: Result<Resolution, leetx_core::SortFilterError>,
) {
    match result {
        Ok(Resolution::Navigate(url)) => console::debug_1(&format!("Navigating to {url}").into()),
        Ok(Resolution::AlreadySatisfied) => {
            let message = match (request.side, request.sort_order) {
                (Side::Right, Some(order)) => format!(
                    "List already sorted for {} as {}.",
                    request.category,
                    order.describe()
                ),
                (Side::Right, None) => format!("List already sorted for {}.", request.category),
                (Side::Left, _) => format!("{} category already selected.", request.category),
            };
            console::info_1(&message.into());
        }
        Err(err) => console::warn_1(&err.to_string().into()),
    }
}
