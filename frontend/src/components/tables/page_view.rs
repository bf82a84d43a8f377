//! Public read path: every dynamic table attached to one detail page.
//!
//! Fetches `GET /api/tables/by_page/{id}` once per view (and again when the
//! page prop changes) and pushes each table through the renderer. Fetch
//! failures surface as an inline notice; there is no retry.

use common::model::table::TableDefinition;
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::renderer::TableRendererComponent;

pub enum Msg {
    Loaded(Vec<TableDefinition>),
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct PageTablesProps {
    pub detail_page_id: i64,
}

enum FetchState {
    Loading,
    Loaded(Vec<TableDefinition>),
    Failed(String),
}

pub struct PageTablesComponent {
    state: FetchState,
}

impl Component for PageTablesComponent {
    type Message = Msg;
    type Properties = PageTablesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { state: FetchState::Loading }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.state = FetchState::Loading;
        fetch_tables(ctx.link().clone(), ctx.props().detail_page_id);
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.state = match msg {
            Msg::Loaded(tables) => FetchState::Loaded(tables),
            Msg::Failed(message) => FetchState::Failed(message),
        };
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.state {
            FetchState::Loading => html! { <div class="page-tables">{"Loading tables..."}</div> },
            FetchState::Failed(message) => html! {
                <div class="page-tables notice">
                    {"Could not load the tables for this page: "}{ message }
                </div>
            },
            FetchState::Loaded(tables) if tables.is_empty() => html! {
                <div class="page-tables">{"No tables for this page yet."}</div>
            },
            FetchState::Loaded(tables) => html! {
                <div class="page-tables">
                    {
                        for tables.iter().map(|table| html! {
                            <TableRendererComponent key={table.id.to_string()} table={table.clone()} />
                        })
                    }
                </div>
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            fetch_tables(ctx.link().clone(), ctx.props().detail_page_id);
        }
    }
}

fn fetch_tables(link: Scope<PageTablesComponent>, detail_page_id: i64) {
    spawn_local(async move {
        match Request::get(&format!("/api/tables/by_page/{detail_page_id}")).send().await {
            Ok(response) if response.status() == 200 => {
                match response.json::<Vec<TableDefinition>>().await {
                    Ok(tables) => link.send_message(Msg::Loaded(tables)),
                    Err(err) => link.send_message(Msg::Failed(err.to_string())),
                }
            }
            Ok(response) => {
                let body = response.text().await.unwrap_or_default();
                link.send_message(Msg::Failed(body));
            }
            Err(err) => link.send_message(Msg::Failed(err.to_string())),
        }
    });
}
