//! Read-only interactive view of a dynamic table.
//!
//! The component state is deliberately tiny: a search term and at most one
//! sort key, both client-local and reset whenever the table prop changes
//! identity. Row projection (filter from the full set, then sort the
//! filtered subset) lives in `common::model::render`; this file only decides
//! how surviving rows are drawn.

use std::collections::HashSet;

use common::model::column::{Column, ColumnType};
use common::model::render::{cell_text, visible_rows, SortDirection};
use common::model::richtext::richtext_to_html;
use common::model::row::Row;
use common::model::table::TableDefinition;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

/// Shown in place of an image thumbnail whose URL failed to load.
const BROKEN_IMAGE_FALLBACK: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='48' height='48'%3E%3Crect width='48' height='48' fill='%23eceff1'/%3E%3Cpath d='M14 30l8-10 6 7 4-4 6 7H14z' fill='%23b0bec5'/%3E%3C/svg%3E";

pub enum Msg {
    SetSearch(String),
    ClearSearch,
    ToggleSort(String),
    ImageFailed(String),
}

#[derive(Properties, PartialEq)]
pub struct TableRendererProps {
    pub table: TableDefinition,
}

pub struct TableRendererComponent {
    search_term: String,
    sort_key: Option<String>,
    sort_direction: SortDirection,
    /// Image URLs that already fired `onerror`, swapped for the fallback.
    failed_images: HashSet<String>,
}

impl Component for TableRendererComponent {
    type Message = Msg;
    type Properties = TableRendererProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            search_term: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Ascending,
            failed_images: HashSet::new(),
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // Fresh table data invalidates all client-local view state.
        self.search_term.clear();
        self.sort_key = None;
        self.sort_direction = SortDirection::Ascending;
        self.failed_images.clear();
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetSearch(term) => {
                self.search_term = term;
                true
            }
            Msg::ClearSearch => {
                self.search_term.clear();
                true
            }
            Msg::ToggleSort(column_id) => {
                if self.sort_key.as_deref() == Some(column_id.as_str()) {
                    self.sort_direction = self.sort_direction.toggled();
                } else {
                    self.sort_key = Some(column_id);
                    self.sort_direction = SortDirection::Ascending;
                }
                true
            }
            Msg::ImageFailed(url) => self.failed_images.insert(url),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let table = &ctx.props().table;
        let link = ctx.link();

        let sort = self
            .sort_key
            .as_deref()
            .map(|column_id| (column_id, self.sort_direction));
        let visible = visible_rows(&table.columns, &table.rows, &self.search_term, sort);

        html! {
            <div class="dynamic-table">
                { self.build_caption(table) }
                { self.build_search_box(link) }
                {
                    if table.rows.is_empty() {
                        html! { <div class="table-empty">{"No data yet"}</div> }
                    } else if visible.is_empty() {
                        html! {
                            <div class="table-empty">
                                {"No matching results"}
                                <button class="link-btn" onclick={link.callback(|_| Msg::ClearSearch)}>
                                    {"Clear search"}
                                </button>
                            </div>
                        }
                    } else {
                        self.build_table(table, &visible, link)
                    }
                }
            </div>
        }
    }
}

impl TableRendererComponent {
    fn build_caption(&self, table: &TableDefinition) -> Html {
        html! {
            <div class="table-caption">
                {
                    if let Some(icon_url) = &table.icon_url {
                        html! { <img class="table-icon" src={icon_url.clone()} alt="" /> }
                    } else {
                        html! {}
                    }
                }
                <h3>{ &table.title }</h3>
                {
                    if let Some(description) = &table.description {
                        html! { <p class="table-description">{ description }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }

    fn build_search_box(&self, link: &Scope<Self>) -> Html {
        html! {
            <div class="table-search">
                <i class="material-icons">{"search"}</i>
                <input
                    type="text"
                    placeholder="Search all columns"
                    value={self.search_term.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input = e.target_unchecked_into::<HtmlInputElement>();
                        Msg::SetSearch(input.value())
                    })}
                />
            </div>
        }
    }

    fn build_table(&self, table: &TableDefinition, visible: &[&Row], link: &Scope<Self>) -> Html {
        html! {
            <table class="comparison-table">
                <thead>
                    <tr>
                        { for table.columns.iter().map(|column| self.build_header_cell(column, link)) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for visible.iter().map(|row| html! {
                            <tr key={row.id.clone()}>
                                {
                                    for table.columns.iter().enumerate().map(|(index, column)| html! {
                                        <td>{ self.build_cell(column, row.cell(index), link) }</td>
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }

    fn build_header_cell(&self, column: &Column, link: &Scope<Self>) -> Html {
        let sort_indicator = if self.sort_key.as_deref() == Some(column.id.as_str()) {
            match self.sort_direction {
                SortDirection::Ascending => "arrow_upward",
                SortDirection::Descending => "arrow_downward",
            }
        } else {
            "unfold_more"
        };

        let style = column
            .width
            .map(|width| format!("width: {}%;", width.min(100)));

        if column.column_type.is_sortable() {
            let column_id = column.id.clone();
            html! {
                <th class="sortable" style={style}
                    onclick={link.callback(move |_| Msg::ToggleSort(column_id.clone()))}>
                    <i class="material-icons type-icon">{ column.column_type.icon_name() }</i>
                    <span>{ &column.name }</span>
                    <i class="material-icons sort-icon">{ sort_indicator }</i>
                </th>
            }
        } else {
            html! {
                <th style={style}>
                    <i class="material-icons type-icon">{ column.column_type.icon_name() }</i>
                    <span>{ &column.name }</span>
                </th>
            }
        }
    }

    fn build_cell(&self, column: &Column, value: Option<&Value>, link: &Scope<Self>) -> Html {
        let text = cell_text(value);
        match column.column_type {
            ColumnType::Text | ColumnType::Number => {
                if text.is_empty() {
                    empty_cell()
                } else {
                    html! { <span>{ text }</span> }
                }
            }
            ColumnType::Image => self.build_image_cell(&text, link),
            ColumnType::Link => {
                if text.is_empty() {
                    empty_cell()
                } else {
                    html! {
                        <a href={text.clone()} target="_blank" rel="noopener noreferrer" class="cell-link">
                            <i class="material-icons">{"open_in_new"}</i>
                            { text }
                        </a>
                    }
                }
            }
            ColumnType::Richtext => {
                if text.is_empty() {
                    empty_cell()
                } else {
                    let rendered = richtext_to_html(&text);
                    html! {
                        <div class="cell-richtext">
                            { Html::from_html_unchecked(AttrValue::from(rendered)) }
                        </div>
                    }
                }
            }
            ColumnType::Boolean => match bool_value(value) {
                Some(true) => html! { <span class="pill pill-yes">{"Yes"}</span> },
                Some(false) => html! { <span class="pill pill-no">{"No"}</span> },
                None => empty_cell(),
            },
            ColumnType::Date => {
                if text.is_empty() {
                    empty_cell()
                } else {
                    html! { <span>{ localized_date(&text) }</span> }
                }
            }
        }
    }

    fn build_image_cell(&self, url: &str, link: &Scope<Self>) -> Html {
        if url.is_empty() {
            return html! {
                <div class="cell-image-missing">
                    <i class="material-icons">{"image"}</i>
                </div>
            };
        }
        let src = if self.failed_images.contains(url) {
            BROKEN_IMAGE_FALLBACK.to_string()
        } else {
            url.to_string()
        };
        let failed_url = url.to_string();
        html! {
            <img
                class="cell-thumb"
                src={src}
                alt=""
                onerror={link.callback(move |_: Event| Msg::ImageFailed(failed_url.clone()))}
            />
        }
    }
}

fn empty_cell() -> Html {
    html! { <span class="cell-empty">{"-"}</span> }
}

/// Loose truthiness for `boolean` cells, which may arrive as real booleans
/// or as their string form depending on how the cell was edited.
fn bool_value(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        Value::Number(number) => Some(number.as_f64().unwrap_or(0.0) != 0.0),
        _ => None,
    }
}

/// Localized date string via the browser; falls back to the raw value when
/// the cell does not parse as a date.
fn localized_date(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED))
}
