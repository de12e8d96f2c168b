use yew::prelude::*;

use crate::config::KEY_SIDEBAR_COLLAPSED;
use crate::hooks::use_stored_state;
use crate::tools::Tool;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Tool,
    pub on_select: Callback<Tool>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let collapsed = use_stored_state(KEY_SIDEBAR_COLLAPSED, || false);

    let on_collapse = {
        let collapsed = collapsed.clone();
        Callback::from(move |_| collapsed.set(!*collapsed))
    };

    let cls = if *collapsed { "sidebar collapsed" } else { "sidebar" };

    html! {
      <nav class={cls} aria-label="Tools">
        <button
          class="btn ghost collapse"
          onclick={on_collapse}
          title={if *collapsed { "Expand sidebar" } else { "Collapse sidebar" }}
        >
          { if *collapsed { "»" } else { "«" } }
        </button>

        <ul class="toolnav">
          { for Tool::ALL.into_iter().map(|t| {
              let is_active = props.active == t;
              let on_select = props.on_select.clone();
              html! {
                <li>
                  <button
                    class={if is_active { "navbtn active" } else { "navbtn" }}
                    aria-current={if is_active { "page" } else { "false" }}
                    title={t.label()}
                    onclick={Callback::from(move |_| on_select.emit(t))}
                  >
                    <span class="icon">{ t.icon() }</span>
                    if !*collapsed {
                      <span class="label">{ t.label() }</span>
                      <kbd>{ t.shortcut() }</kbd>
                    }
                  </button>
                </li>
              }
          })}
        </ul>

        if !*collapsed {
          <div class="sidebar-foot smallnote">{ "Press 1-4 to switch tools" }</div>
        }
      </nav>
    }
}
