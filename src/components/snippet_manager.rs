use gloo::console::warn;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::setter;
use crate::notice::{notice_view, use_notice};
use crate::snippets::{self, Draft, Snippet, LANGUAGES};
use crate::storage::BrowserStore;

/// Which dialog is open.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Dialog {
    Add,
    Edit(String),
}

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

fn snippet_card(
    snippet: &Snippet,
    on_edit: Callback<MouseEvent>,
    on_delete: Callback<MouseEvent>,
    on_copy: Callback<MouseEvent>,
    on_share: Callback<MouseEvent>,
) -> Html {
    html! {
      <div class="snippet" key={snippet.id.clone()}>
        <div class="block-head">
          <div class="block-title">{ snippet.title.clone() }</div>
          <div class="btnrow">
            <button class="btn small" onclick={on_copy}>{ "Copy" }</button>
            <button class="btn small" onclick={on_share}>{ "Share" }</button>
            <button class="btn small" onclick={on_edit}>{ "Edit" }</button>
            <button class="btn small danger" onclick={on_delete}>{ "Delete" }</button>
          </div>
        </div>
        <div class="kv">
          <span class="tag">{ snippet.language.clone() }</span>
          <span class="smallnote">{ snippet.created_label() }</span>
        </div>
        <pre class="code">{ snippet.code.clone() }</pre>
      </div>
    }
}

#[function_component(SnippetManager)]
pub fn snippet_manager() -> Html {
    let list = use_state(|| snippets::load(&BrowserStore));
    let dialog = use_state(|| None::<Dialog>);
    let draft = use_state(Draft::default);
    let notice = use_notice();

    // Store first, then show; a failed write still updates the view.
    let commit = {
        let list = list.clone();
        move |next: Vec<Snippet>| {
            if let Err(e) = snippets::save(&BrowserStore, &next) {
                warn!(format!("Could not save snippets: {e}"));
            }
            list.set(next);
        }
    };

    let open_add = {
        let dialog = dialog.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            draft.set(Draft::default());
            dialog.set(Some(Dialog::Add));
        })
    };

    let close = {
        let dialog = dialog.clone();
        Callback::from(move |_| dialog.set(None))
    };

    let on_submit = {
        let list = list.clone();
        let dialog = dialog.clone();
        let draft = draft.clone();
        let notice = notice.clone();
        let commit = commit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(mode) = (*dialog).clone() else {
                return;
            };
            let result = match &mode {
                Dialog::Add => snippets::add(&list, &draft, now_ms()),
                Dialog::Edit(id) => snippets::update(&list, id, &draft),
            };
            match result {
                Ok(next) => {
                    commit(next);
                    dialog.set(None);
                    notice.ok(match mode {
                        Dialog::Add => "Snippet saved",
                        Dialog::Edit(_) => "Snippet updated",
                    });
                }
                Err(e) => notice.error(e.to_string()),
            }
        })
    };

    let on_language = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let mut next = (*draft).clone();
            next.language = select.value();
            draft.set(next);
        })
    };

    let cards = list.iter().map(|s| {
        let on_edit = {
            let dialog = dialog.clone();
            let draft = draft.clone();
            let s = s.clone();
            Callback::from(move |_| {
                draft.set(Draft::from_snippet(&s));
                dialog.set(Some(Dialog::Edit(s.id.clone())));
            })
        };
        let on_delete = {
            let list = list.clone();
            let notice = notice.clone();
            let commit = commit.clone();
            let id = s.id.clone();
            Callback::from(move |_| {
                commit(snippets::remove(&list, &id));
                notice.ok("Snippet deleted");
            })
        };
        let on_copy = {
            let notice = notice.clone();
            let code = s.code.clone();
            Callback::from(move |_| notice.copy(code.clone(), "Code copied to clipboard"))
        };
        let on_share = {
            let notice = notice.clone();
            let text = s.share_text();
            Callback::from(move |_| notice.copy(text.clone(), "Snippet copied for sharing"))
        };
        snippet_card(s, on_edit, on_delete, on_copy, on_share)
    });

    let body = if list.is_empty() {
        html! {
          <div class="empty">
            <p>{ "No snippets yet." }</p>
            <button class="btn primary" onclick={open_add.clone()}>{ "Add Snippet" }</button>
          </div>
        }
    } else {
        html! { <div class="snippets">{ for cards }</div> }
    };

    let dialog_view = match &*dialog {
        None => html! {},
        Some(mode) => html! {
          <div class="overlay">
            <form class="dialog" onsubmit={on_submit}>
              <div class="block-title">
                { if *mode == Dialog::Add { "Add Snippet" } else { "Edit Snippet" } }
              </div>
              <div class="textline">
                <input
                  type="text"
                  value={draft.title.clone()}
                  oninput={setter(&draft, |d: &mut Draft, v| d.title = v)}
                  placeholder="Title"
                />
              </div>
              <div class="textline">
                <select onchange={on_language}>
                  { for LANGUAGES.iter().map(|lang| html! {
                      <option value={*lang} selected={*lang == draft.language}>{ *lang }</option>
                  })}
                </select>
              </div>
              <textarea
                value={draft.code.clone()}
                oninput={setter(&draft, |d: &mut Draft, v| d.code = v)}
                placeholder="Code"
                spellcheck="false"
              />
              <div class="btnrow">
                <button type="button" class="btn" onclick={close}>{ "Cancel" }</button>
                <button type="submit" class="btn primary">{ "Save" }</button>
              </div>
            </form>
          </div>
        },
    };

    html! {
      <div class="panel">
        <div class="block-head">
          <div class="block-title">{ format!("{} saved", list.len()) }</div>
          <div class="btnrow">
            <button class="btn primary" onclick={open_add}>{ "Add Snippet" }</button>
          </div>
        </div>

        { body }
        { dialog_view }
        { notice_view(notice.current()) }
      </div>
    }
}
