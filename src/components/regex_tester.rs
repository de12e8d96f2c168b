use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::config::{
    DEFAULT_REGEX_FLAGS, DEFAULT_REPLACEMENT, DEFAULT_TEST_STRING, KEY_REGEX_ACTIVE_TAB,
    KEY_REGEX_FLAGS, KEY_REGEX_PATTERN, KEY_REGEX_REPLACE, KEY_REGEX_TEST_STRING,
};
use crate::hooks::{bind_text, use_stored_state};
use crate::notice::{notice_view, use_notice, NoticeHandle};
use crate::regex_tool::{evaluate, MatchRecord, Segment};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ResultTab {
    #[default]
    Match,
    Replace,
}

fn match_count_label(n: usize) -> String {
    if n == 1 {
        "1 Match".to_string()
    } else {
        format!("{n} Matches")
    }
}

fn copy_button(
    notice: &NoticeHandle,
    text: String,
    success: &'static str,
    label: &'static str,
) -> Html {
    let notice = notice.clone();
    let onclick = Callback::from(move |_| notice.copy(text.clone(), success));
    html! { <button class="btn small" {onclick}>{ label }</button> }
}

fn match_card(
    index: usize,
    m: &MatchRecord,
    names: &[Option<String>],
    notice: &NoticeHandle,
) -> Html {
    html! {
      <div class="match">
        <div class="match-head">
          <span class="tag">{ format!("Match {}", index + 1) }</span>
          <span class="smallnote">{ format!("at {}", m.offset) }</span>
          { copy_button(notice, m.text.clone(), "Match copied to clipboard", "Copy") }
        </div>
        <pre class="match-text">{ m.text.clone() }</pre>
        if !m.groups.is_empty() {
          <ul class="groups">
            { for m.groups.iter().enumerate().map(|(i, g)| {
                let name = names.get(i).cloned().flatten();
                html! {
                  <li>
                    <span class="group-id">{ format!("${}", i + 1) }</span>
                    if let Some(name) = name {
                      <span class="group-name">{ format!("<{name}>") }</span>
                    }
                    <span>{ ": " }</span>
                    <code>{ g.clone().unwrap_or_else(|| "undefined".to_string()) }</code>
                  </li>
                }
            })}
          </ul>
        }
      </div>
    }
}

#[function_component(RegexTester)]
pub fn regex_tester() -> Html {
    let pattern = use_stored_state(KEY_REGEX_PATTERN, String::new);
    let flags = use_stored_state(KEY_REGEX_FLAGS, || DEFAULT_REGEX_FLAGS.to_string());
    let subject = use_stored_state(KEY_REGEX_TEST_STRING, || DEFAULT_TEST_STRING.to_string());
    let replacement = use_stored_state(KEY_REGEX_REPLACE, || DEFAULT_REPLACEMENT.to_string());
    let tab = use_stored_state(KEY_REGEX_ACTIVE_TAB, ResultTab::default);
    let notice = use_notice();

    let evaluation = use_memo(
        (
            (*pattern).clone(),
            (*flags).clone(),
            (*subject).clone(),
            (*replacement).clone(),
        ),
        |(p, f, s, r)| evaluate(p, f, s, r),
    );

    let set_tab = |t: ResultTab| {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(t))
    };

    let tab_button = |t: ResultTab, label: &'static str| {
        let is_active = *tab == t;
        html! {
          <button
            class={if is_active { "tab active" } else { "tab" }}
            role="tab"
            aria-selected={is_active.to_string()}
            onclick={set_tab(t)}
          >
            { label }
          </button>
        }
    };

    let preview = html! {
      <pre class="highlight">
        { for evaluation.segments(subject.as_str()).into_iter().map(|seg| match seg {
            Segment::Plain(s) => html! { <>{ s }</> },
            Segment::Marked(s) => html! { <mark>{ s }</mark> },
        })}
      </pre>
    };

    let result = match *tab {
        ResultTab::Match => html! {
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ match_count_label(evaluation.matches.len()) }</div>
            </div>
            { preview }
            <div class="matches">
              { for evaluation.matches.iter().enumerate().map(|(i, m)| {
                  match_card(i, m, &evaluation.group_names, &notice)
              })}
            </div>
          </div>
        },
        ResultTab::Replace => html! {
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Replace" }</div>
              <div class="btnrow">
                { copy_button(
                    &notice,
                    evaluation.replaced.clone(),
                    "Result copied to clipboard",
                    "Copy Result",
                ) }
              </div>
            </div>
            <div class="textline">
              <input
                type="text"
                value={(*replacement).clone()}
                oninput={bind_text(replacement.clone())}
                placeholder="Replacement ($1, $<name>, $&, \\1, &)"
              />
            </div>
            <pre class="diff">{ evaluation.replaced.clone() }</pre>
          </div>
        },
    };

    html! {
      <div class="panel">
        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "Pattern" }</div>
            <div class="btnrow">
              { copy_button(
                  &notice,
                  (*pattern).clone(),
                  "Pattern copied to clipboard",
                  "Copy Pattern",
              ) }
            </div>
          </div>

          <div class="textline pattern">
            <span class="slash">{ "/" }</span>
            <input
              type="text"
              class={if evaluation.error.is_some() { "invalid" } else { "" }}
              value={(*pattern).clone()}
              oninput={bind_text(pattern.clone())}
              placeholder=r#"Pattern (e.g. (\w+)=(\d+))"#
              spellcheck="false"
            />
            <span class="slash">{ "/" }</span>
            <input
              type="text"
              class="flags"
              value={(*flags).clone()}
              oninput={bind_text(flags.clone())}
              placeholder="gimsuy"
              spellcheck="false"
            />
          </div>

          if let Some(err) = &evaluation.error {
            <div class="alert" role="alert">{ err.to_string() }</div>
          }

          <textarea
            value={(*subject).clone()}
            oninput={bind_text(subject.clone())}
            placeholder="Text to test against..."
          />
          <div class="btnrow">
            { copy_button(
                &notice,
                (*subject).clone(),
                "Test string copied to clipboard",
                "Copy Test String",
            ) }
          </div>
        </div>

        <div class="tabs" role="tablist" aria-label="Result">
          { tab_button(ResultTab::Match, "Match") }
          { tab_button(ResultTab::Replace, "Replace") }
        </div>

        { result }

        { notice_view(notice.current()) }
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_is_singular_for_one() {
        assert_eq!(match_count_label(0), "0 Matches");
        assert_eq!(match_count_label(1), "1 Match");
        assert_eq!(match_count_label(7), "7 Matches");
    }

    #[test]
    fn result_tab_persists_by_name() {
        assert_eq!(serde_json::to_string(&ResultTab::Replace).unwrap(), "\"replace\"");
        assert_eq!(serde_json::from_str::<ResultTab>("\"match\"").unwrap(), ResultTab::Match);
    }
}
