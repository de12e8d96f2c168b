use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use super::{Header, JsonViewer, MarkdownPreviewer, RegexTester, Sidebar, SnippetManager};
use crate::config::KEY_ACTIVE_TOOL;
use crate::hooks::use_stored_state;
use crate::tools::Tool;

/// Key presses aimed at a form field are typing, not shortcuts.
fn typing_in_field(e: &KeyboardEvent) -> bool {
    let Some(target) = e.target() else {
        return false;
    };
    target.is_instance_of::<HtmlInputElement>()
        || target.is_instance_of::<HtmlTextAreaElement>()
        || target.is_instance_of::<HtmlSelectElement>()
}

#[function_component(App)]
pub fn app() -> Html {
    let tool = use_stored_state(KEY_ACTIVE_TOOL, Tool::default);

    // Number keys switch tools.
    {
        let tool = tool.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|w| {
                EventListener::new(&w, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let modified = event.ctrl_key() || event.meta_key() || event.alt_key();
                    if modified || typing_in_field(event) {
                        return;
                    }
                    if let Some(next) = Tool::from_shortcut(&event.key()) {
                        event.prevent_default();
                        tool.set(next);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_select = {
        let tool = tool.clone();
        Callback::from(move |t: Tool| tool.set(t))
    };

    let content = match *tool {
        Tool::Regex => html! { <RegexTester /> },
        Tool::Json => html! { <JsonViewer /> },
        Tool::Markdown => html! { <MarkdownPreviewer /> },
        Tool::Snippets => html! { <SnippetManager /> },
    };

    html! {
      <div class="app">
        <Header />
        <div class="layout">
          <Sidebar active={*tool} on_select={on_select} />
          <main class="main">
            <h1 class="tool-title">{ tool.label() }</h1>
            { content }
          </main>
        </div>
      </div>
    }
}
