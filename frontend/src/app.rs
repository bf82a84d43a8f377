//! Root shell: the back-office builder on one view, the public page
//! rendering on the other.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::tables::builder::TableBuilderComponent;
use crate::components::tables::page_view::PageTablesComponent;

pub enum Msg {
    SetView(String),
    SetPreviewPage(i64),
}

pub struct App {
    active_view: String,
    preview_page_id: i64,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active_view: "builder".to_string(),
            preview_page_id: 1,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetView(view) => {
                self.active_view = view;
                true
            }
            Msg::SetPreviewPage(page_id) => {
                self.preview_page_id = page_id;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app-root">
                <nav class="app-nav">
                    <button
                        class={classes!("tab-btn", if self.active_view == "builder" { "active" } else { "" })}
                        onclick={link.callback(|_| Msg::SetView("builder".to_string()))}
                    >
                        {"Back office"}
                    </button>
                    <button
                        class={classes!("tab-btn", if self.active_view == "site" { "active" } else { "" })}
                        onclick={link.callback(|_| Msg::SetView("site".to_string()))}
                    >
                        {"Site preview"}
                    </button>
                </nav>
                {
                    if self.active_view == "builder" {
                        html! { <TableBuilderComponent /> }
                    } else {
                        html! {
                            <div class="site-preview">
                                <label class="field">
                                    <span>{"Detail page id"}</span>
                                    <input
                                        type="number"
                                        value={self.preview_page_id.to_string()}
                                        onchange={link.callback(|e: Event| {
                                            let value = e.target_unchecked_into::<HtmlInputElement>().value();
                                            Msg::SetPreviewPage(value.parse().unwrap_or(1))
                                        })}
                                    />
                                </label>
                                <PageTablesComponent detail_page_id={self.preview_page_id} />
                            </div>
                        }
                    }
                }
            </div>
        }
    }
}
