use gloo_file::callbacks::FileReader;
use yew::prelude::*;

use crate::config::{
    DEFAULT_MARKDOWN, HTML_DOWNLOAD_NAME, KEY_MARKDOWN_INPUT, KEY_MARKDOWN_PREVIEW_VISIBLE,
    MARKDOWN_DOWNLOAD_NAME, MIME_HTML, MIME_MARKDOWN,
};
use crate::files::{download_file, read_picked_file};
use crate::hooks::{bind_text, use_stored_state};
use crate::markdown::render_markdown;
use crate::notice::{notice_view, use_notice};

#[function_component(MarkdownPreviewer)]
pub fn markdown_previewer() -> Html {
    let input = use_stored_state(KEY_MARKDOWN_INPUT, || DEFAULT_MARKDOWN.to_string());
    let preview_visible = use_stored_state(KEY_MARKDOWN_PREVIEW_VISIBLE, || true);
    let reader = use_state(|| None::<FileReader>);
    let notice = use_notice();

    let rendered = use_memo((*input).clone(), |s| render_markdown(s));

    let on_toggle = {
        let preview_visible = preview_visible.clone();
        Callback::from(move |_| preview_visible.set(!*preview_visible))
    };

    let on_copy_md = {
        let input = input.clone();
        let notice = notice.clone();
        Callback::from(move |_| notice.copy((*input).clone(), "Markdown copied to clipboard"))
    };

    let on_copy_html = {
        let rendered = rendered.clone();
        let notice = notice.clone();
        Callback::from(move |_| notice.copy((*rendered).clone(), "HTML copied to clipboard"))
    };

    let save = |name: &'static str, mime: &'static str, body: String, success: &'static str| {
        let notice = notice.clone();
        Callback::from(move |_| match download_file(name, mime, &body) {
            Ok(()) => notice.ok(success),
            Err(e) => notice.error(e.to_string()),
        })
    };
    let on_save_md = save(
        MARKDOWN_DOWNLOAD_NAME,
        MIME_MARKDOWN,
        (*input).clone(),
        "Markdown saved to file",
    );
    let on_save_html = save(
        HTML_DOWNLOAD_NAME,
        MIME_HTML,
        (*rendered).clone(),
        "HTML saved to file",
    );

    let on_upload = {
        let input = input.clone();
        let reader = reader.clone();
        let notice = notice.clone();
        Callback::from(move |e: Event| {
            let input = input.clone();
            let notice = notice.clone();
            let task = read_picked_file(&e, move |res| match res {
                Ok(text) => {
                    input.set(text);
                    notice.ok("Markdown file loaded");
                }
                Err(e) => notice.error(format!("Failed to read file: {e}")),
            });
            reader.set(task);
        })
    };

    html! {
      <div class="panel">
        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "Markdown" }</div>
            <div class="btnrow">
              <button class="btn" onclick={on_toggle}>
                { if *preview_visible { "Hide Preview" } else { "Show Preview" } }
              </button>
              <button class="btn" onclick={on_copy_md}>{ "Copy MD" }</button>
              <button class="btn" onclick={on_copy_html}>{ "Copy HTML" }</button>
              <button class="btn" onclick={on_save_md}>{ "Save .md" }</button>
              <button class="btn" onclick={on_save_html}>{ "Save .html" }</button>
              <label class="btn">
                { "Upload" }
                <input
                  type="file"
                  accept=".md,.markdown,.txt,text/markdown,text/plain"
                  onchange={on_upload}
                />
              </label>
            </div>
          </div>

          <div class={if *preview_visible { "split" } else { "split single" }}>
            <textarea
              value={(*input).clone()}
              oninput={bind_text(input.clone())}
              placeholder="Write markdown here..."
              spellcheck="false"
            />
            if *preview_visible {
              <div class="preview markdown-body">
                { Html::from_html_unchecked(AttrValue::from((*rendered).clone())) }
              </div>
            }
          </div>
        </div>

        { notice_view(notice.current()) }
      </div>
    }
}
