//! Table builder: staged editing of a dynamic table definition.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `TableBuilderProps`, `TableBuilderComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, fetch the catalog pages for the target selector and,
//!   when a `table_id` prop is given, load that table into the draft.
//!
//! All edits stay in memory until Save submits the whole draft; a failed
//! save never discards staged state.

use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TableBuilderProps;
pub use state::TableBuilderComponent;

use common::model::detail_page::DetailPage;
use common::model::table::TableDefinition;
use helpers::show_toast;

impl Component for TableBuilderComponent {
    type Message = Msg;
    type Properties = TableBuilderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TableBuilderComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            load_detail_pages(ctx.link().clone());
            if let Some(table_id) = ctx.props().table_id {
                load_table(ctx.link().clone(), table_id);
            }
        }
    }
}

fn load_detail_pages(link: Scope<TableBuilderComponent>) {
    spawn_local(async move {
        match Request::get("/api/detail_pages").send().await {
            Ok(response) if response.status() == 200 => {
                match response.json::<Vec<DetailPage>>().await {
                    Ok(pages) => link.send_message(Msg::DetailPagesLoaded(pages)),
                    Err(err) => show_toast(&format!("Could not read detail pages: {err}")),
                }
            }
            _ => show_toast("Could not load detail pages."),
        }
    });
}

fn load_table(link: Scope<TableBuilderComponent>, table_id: i64) {
    spawn_local(async move {
        match Request::get(&format!("/api/tables/{table_id}")).send().await {
            Ok(response) if response.status() == 200 => {
                match response.json::<TableDefinition>().await {
                    Ok(table) => link.send_message(Msg::TableLoaded(table)),
                    Err(err) => show_toast(&format!("Could not read table: {err}")),
                }
            }
            _ => show_toast("Could not load the table. Starting a new one."),
        }
    });
}
