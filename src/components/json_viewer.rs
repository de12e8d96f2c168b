use gloo::console::log;
use gloo_file::callbacks::FileReader;
use yew::prelude::*;

use crate::config::{
    default_json_input, DEFAULT_JSON_INDENT, JSON_DOWNLOAD_NAME, KEY_JSON_INPUT, MIME_JSON,
};
use crate::files::{download_file, read_picked_file};
use crate::hooks::{bind_text, use_stored_state};
use crate::json_tool::{format_json, minify_json, sort_keys, validate_json, FormatError};
use crate::notice::{notice_view, use_notice};

#[function_component(JsonViewer)]
pub fn json_viewer() -> Html {
    let input = use_stored_state(KEY_JSON_INPUT, default_json_input);
    let formatted = {
        let initial = format_json(&input, DEFAULT_JSON_INDENT).unwrap_or_else(|_| (*input).clone());
        use_state(move || initial)
    };
    let reader = use_state(|| None::<FileReader>);
    let notice = use_notice();

    let error = use_memo((*input).clone(), |s| validate_json(s).err());

    // Each action rewrites both the input and the output.
    let action = |run: fn(&str) -> Result<String, FormatError>, success: &'static str| {
        let input = input.clone();
        let formatted = formatted.clone();
        let notice = notice.clone();
        Callback::from(move |_| match run(&input) {
            Ok(out) => {
                formatted.set(out.clone());
                input.set(out);
                notice.ok(success);
            }
            Err(e) => notice.error(e.to_string()),
        })
    };

    let on_format = action(|s| format_json(s, DEFAULT_JSON_INDENT), "JSON formatted successfully");
    let on_minify = action(minify_json, "JSON minified successfully");
    let on_sort = action(|s| sort_keys(s, DEFAULT_JSON_INDENT), "Keys sorted");

    let on_copy = {
        let formatted = formatted.clone();
        let notice = notice.clone();
        Callback::from(move |_| notice.copy((*formatted).clone(), "JSON copied to clipboard"))
    };

    let on_save = {
        let input = input.clone();
        let formatted = formatted.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            if let Err(e) = validate_json(&input) {
                notice.error(format!("Cannot save invalid JSON. {e}"));
                return;
            }
            match download_file(JSON_DOWNLOAD_NAME, MIME_JSON, &formatted) {
                Ok(()) => notice.ok("JSON saved to file"),
                Err(e) => notice.error(e.to_string()),
            }
        })
    };

    let on_upload = {
        let input = input.clone();
        let formatted = formatted.clone();
        let reader = reader.clone();
        let notice = notice.clone();
        Callback::from(move |e: Event| {
            let input = input.clone();
            let formatted = formatted.clone();
            let notice = notice.clone();
            let task = read_picked_file(&e, move |res| match res {
                Ok(text) => {
                    match format_json(&text, DEFAULT_JSON_INDENT) {
                        Ok(pretty) => {
                            log!("JSON file loaded");
                            formatted.set(pretty);
                            notice.ok("JSON file loaded");
                        }
                        Err(e) => notice.error(e.to_string()),
                    }
                    input.set(text);
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
            <div class="block-title">{ "Input" }</div>
            <div class="btnrow">
              <button class="btn" onclick={on_format}>{ "Format" }</button>
              <button class="btn" onclick={on_minify}>{ "Minify" }</button>
              <button class="btn" onclick={on_sort}>{ "Sort Keys" }</button>
              <label class="btn">
                { "Upload" }
                <input type="file" accept="application/json,.json" onchange={on_upload} />
              </label>
            </div>
          </div>
          <textarea
            class={if error.is_some() { "invalid" } else { "" }}
            value={(*input).clone()}
            oninput={bind_text(input.clone())}
            placeholder="Paste JSON here..."
            spellcheck="false"
          />
          if let Some(err) = &*error {
            <div class="alert" role="alert">{ err.to_string() }</div>
          }
        </div>

        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "Formatted" }</div>
            <div class="btnrow">
              <button class="btn" onclick={on_copy}>{ "Copy" }</button>
              <button class="btn" onclick={on_save}>{ "Save" }</button>
            </div>
          </div>
          <pre class="diff">{ (*formatted).clone() }</pre>
        </div>

        { notice_view(notice.current()) }
      </div>
    }
}
