use yew::prelude::*;

use crate::config::{APP_NAME, APP_VERSION, KEY_THEME};
use crate::hooks::use_stored_state;
use crate::theme::{self, Theme};

#[function_component(Header)]
pub fn header() -> Html {
    let theme = use_stored_state(KEY_THEME, Theme::default);

    {
        use_effect_with(*theme, move |t| {
            theme::apply(*t);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    html! {
      <header class="header">
        <div class="brand">
          <span class="brand-name">{ APP_NAME }</span>
          <span class="badge">{ format!("v{APP_VERSION}") }</span>
        </div>
        <button class="btn ghost" onclick={on_toggle} title="Toggle theme">
          { theme.toggle_label() }
        </button>
      </header>
    }
}
