//! Fragment Mounting
//!
//! Turns core [`Node`] trees into Leptos views. A click on an element that
//! carries an action is forwarded to the given callback.

use hospital_portal::{Action, Node};
use leptos::html::{custom, Custom};
use leptos::*;

pub fn node_view(node: &Node, on_action: Callback<Action>) -> View {
    match node {
        Node::Text(value) => value.clone().into_view(),
        Node::Element(element) => {
            let mut view = custom(Custom::new(element.tag));

            if let Some(id) = &element.id {
                view = view.attr("id", id.clone());
            }
            if !element.classes.is_empty() {
                view = view.attr("class", element.classes.join(" "));
            }
            for (name, value) in &element.attrs {
                view = view.attr(*name, value.clone());
            }
            for child in &element.children {
                view = view.child(node_view(child, on_action));
            }

            if let Some(action) = element.on_click.clone() {
                view = view.on(ev::click, move |ev| {
                    ev.prevent_default();
                    on_action.call(action.clone());
                });
            }

            view.into_view()
        }
    }
}

/// Mount a list of nodes
#[component]
pub fn NodeList(
    #[prop(into)]
    nodes: Signal<Vec<Node>>,
    on_action: Callback<Action>,
) -> impl IntoView {
    move || {
        nodes.with(|nodes| {
            nodes
                .iter()
                .map(|node| node_view(node, on_action))
                .collect_view()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_portal::{doctor_card, Doctor, Role};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    fn doctor() -> Doctor {
        Doctor {
            id: 7,
            name: "Dr. Ana".into(),
            email: "ana@h.org".into(),
            phone: "5550000007".into(),
            specialty: "cardiology".into(),
            available_times: vec!["09:00-10:00".into()],
        }
    }

    fn mount(node: Node, on_action: Callback<Action>) {
        let document = leptos::document();
        let parent: web_sys::HtmlElement = document
            .create_element("div")
            .unwrap()
            .unchecked_into();
        document.body().unwrap().append_child(&parent).unwrap();
        mount_to(parent, move || node_view(&node, on_action));
    }

    #[wasm_bindgen_test]
    fn test_card_mounts_with_id_and_classes() {
        mount(doctor_card(&doctor(), None), Callback::new(|_: Action| {}));

        let card = leptos::document().get_element_by_id("doctor-card-7").unwrap();
        assert_eq!(card.class_name(), "doctor-card");
        let text = card.text_content().unwrap_or_default();
        assert!(text.contains("Dr. Ana"));
        assert!(text.contains("Available: 09:00-10:00"));
        assert!(card.query_selector("button").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_click_forwards_action() {
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicked);
        let on_action = Callback::new(move |action: Action| sink.borrow_mut().push(action));

        let mut admin_view = doctor();
        admin_view.id = 8;
        mount(doctor_card(&admin_view, Some(Role::Admin)), on_action);

        let button: web_sys::HtmlElement = leptos::document()
            .query_selector("#doctor-card-8 .delete-btn")
            .unwrap()
            .unwrap()
            .unchecked_into();
        button.click();

        let clicked = clicked.borrow();
        assert_eq!(clicked.len(), 1);
        assert!(matches!(&clicked[0], Action::DeleteDoctor { doctor_id: 8, .. }));
    }
}
