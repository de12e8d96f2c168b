use devpanel::App;

fn main() {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));
    match root {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => {
            gloo::console::warn!("No #app element, mounting on <body>");
            yew::Renderer::<App>::new().render()
        }
    };
}
