//! Sliding top-sheet overlay, used by the builder for confirmation dialogs.
//!
//! The sheet renders its children inside a fixed container that is shown and
//! hidden by toggling a `show` class on the DOM node, so CSS transitions
//! drive the slide-in. Callers keep a `NodeRef` to the sheet and use
//! [`open_sheet`]/[`close_sheet`].

use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_sheet(sheet_ref: &NodeRef) {
    toggle_sheet(sheet_ref, "add");
}

pub fn close_sheet(sheet_ref: &NodeRef) {
    toggle_sheet(sheet_ref, "remove");
}

// classList is toggled via a deferred snippet so the sheet node is guaranteed
// to be attached when the class flips, keeping the CSS transition intact.
fn toggle_sheet(sheet_ref: &NodeRef, op: &str) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        if let Some(window) = web_sys::window() {
            let func = js_sys::Function::new_no_args(&format!(
                "document.querySelector('#{}').classList.{}('show')",
                sheet.id(),
                op
            ));
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50);
        }
    }
}
