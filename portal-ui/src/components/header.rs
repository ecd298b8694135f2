//! Header Component
//!
//! Mounts the core header for the current route. The session check runs in
//! an effect keyed on the path, so an expired session alerts and redirects
//! once per navigation rather than once per re-render.

use hospital_portal::{render_header, Node};
use leptos::*;
use leptos_router::*;

use super::fragment::node_view;
use crate::state::use_portal;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_portal();
    let location = use_location();
    let on_action = state.on_action();
    let header = create_rw_signal(None::<Node>);

    create_effect(move |_| {
        let path = location.pathname.get();
        let host = state.host();
        header.set(render_header(&path, &state.ctx.session, &state.ctx.routes, &host));
    });

    view! {
        <div id="header">
            {move || header.with(|header| header.as_ref().map(|node| node_view(node, on_action)))}
        </div>
    }
}
