//! Short-lived status messages shown under each tool.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::warn;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::clipboard::copy_to_clipboard;
use crate::config::NOTICE_TIMEOUT_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Ok,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Ok,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Clone)]
pub struct NoticeHandle {
    state: UseStateHandle<Option<Notice>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl NoticeHandle {
    pub fn current(&self) -> Option<Notice> {
        (*self.state).clone()
    }

    /// Show `notice`, replacing whatever is showing, and clear it after a
    /// few seconds.
    pub fn show(&self, notice: Notice) {
        self.state.set(Some(notice));
        let state = self.state.clone();
        let timeout = Timeout::new(NOTICE_TIMEOUT_MS, move || state.set(None));
        // dropping the previous timeout cancels it
        self.timer.borrow_mut().replace(timeout);
    }

    pub fn ok(&self, text: impl Into<String>) {
        self.show(Notice::ok(text));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(Notice::error(text));
    }

    /// Copy `text` to the clipboard and report the outcome.
    pub fn copy(&self, text: String, success: &'static str) {
        let notice = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match copy_to_clipboard(text).await {
                Ok(()) => notice.ok(success),
                Err(e) => {
                    warn!(e.to_string());
                    notice.error(e.to_string());
                }
            }
        });
    }
}

#[hook]
pub fn use_notice() -> NoticeHandle {
    let state = use_state(|| None::<Notice>);
    let timer = use_mut_ref(|| None::<Timeout>);
    NoticeHandle { state, timer }
}

pub fn notice_view(notice: Option<Notice>) -> Html {
    match notice {
        None => html! { <div class="smallnote">{ " " }</div> },
        Some(Notice { kind: NoticeKind::Error, text }) => {
            html! { <div class="alert" role="alert">{ text }</div> }
        }
        Some(Notice { kind: NoticeKind::Ok, text }) => {
            html! { <div class="ok" role="status">{ text }</div> }
        }
    }
}
