//! View rendering for the table builder.
//!
//! The UI is split across two tabs: "Editor" (metadata form, column list,
//! row grid) and "Preview" (the current draft pushed through the real
//! renderer, so what the operator sees is what the public page will show).
//! Destructive actions route through the confirmation top sheet.

use common::model::column::{Column, ColumnType};
use common::model::draft::DraftRow;
use common::model::render::cell_text;
use serde_json::Value;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::tables::renderer::TableRendererComponent;

use super::dialogs::confirm::confirm_dialog;
use super::helpers::{number_cell_value, parse_width, text_cell_value};
use super::messages::Msg;
use super::state::{PendingDelete, TableBuilderComponent};

pub fn view(component: &TableBuilderComponent, ctx: &Context<TableBuilderComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="table-builder">
            { build_toolbar(component, link) }
            { build_tab_bar(component, link) }
            {
                if component.active_tab == "editor" {
                    build_editor_tab(component, link)
                } else {
                    build_preview_tab(component)
                }
            }
            { confirm_dialog(component, link) }
        </div>
    }
}

fn build_toolbar(component: &TableBuilderComponent, link: &Scope<TableBuilderComponent>) -> Html {
    let save_label = if component.saving { "Saving..." } else { "Save" };
    html! {
        <div class="icon-toolbar">
            { icon_button("save", save_label, link.callback(|_| Msg::Save), component.saving) }
        </div>
    }
}

/// Tab bar with a red dot on "Editor" while unsaved changes exist.
fn build_tab_bar(component: &TableBuilderComponent, link: &Scope<TableBuilderComponent>) -> Html {
    let dirty = component.is_dirty();

    html! {
        <div class="tab-bar">
            <button
                class={classes!("tab-btn", if component.active_tab == "editor" { "active" } else { "" })}
                onclick={link.callback(|_| Msg::SetTab("editor".to_string()))}
                style="position: relative;"
            >
                {"Editor"}
                {
                    if dirty {
                        html! { <span class="dirty-dot" title="Unsaved changes" /> }
                    } else {
                        html! {}
                    }
                }
            </button>
            <button
                class={classes!("tab-btn", if component.active_tab == "preview" { "active" } else { "" })}
                onclick={link.callback(|_| Msg::SetTab("preview".to_string()))}
            >
                {"Preview"}
            </button>
        </div>
    }
}

fn build_editor_tab(component: &TableBuilderComponent, link: &Scope<TableBuilderComponent>) -> Html {
    html! {
        <>
            { build_metadata_section(component, link) }
            { build_columns_section(component, link) }
            { build_rows_section(component, link) }
        </>
    }
}

/// The draft rendered through the real renderer.
fn build_preview_tab(component: &TableBuilderComponent) -> Html {
    html! {
        <div class="builder-preview">
            <TableRendererComponent table={component.draft.preview_table()} />
        </div>
    }
}

fn build_metadata_section(
    component: &TableBuilderComponent,
    link: &Scope<TableBuilderComponent>,
) -> Html {
    html! {
        <section class="builder-section">
            <h4>{"Table"}</h4>
            <label class="field">
                <span>{"Title"}</span>
                <input
                    type="text"
                    value={component.draft.title.clone()}
                    placeholder="e.g. Tuition Comparison"
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </label>
            <label class="field">
                <span>{"Description"}</span>
                <textarea
                    value={component.draft.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
            </label>
            <label class="field">
                <span>{"Icon URL"}</span>
                <input
                    type="text"
                    value={component.draft.icon_url.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetIconUrl(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </label>
            <label class="field">
                <span>{"Detail page"}</span>
                <select onchange={link.callback(|e: Event| {
                    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                    Msg::SelectDetailPage(value.parse::<i64>().ok())
                })}>
                    <option value="" selected={component.draft.detail_page_id.is_none()}>
                        {"Select a page"}
                    </option>
                    {
                        for component.detail_pages.iter().map(|page| html! {
                            <option
                                value={page.id.to_string()}
                                selected={component.draft.detail_page_id == Some(page.id)}
                            >
                                { &page.title }
                            </option>
                        })
                    }
                </select>
            </label>
        </section>
    }
}

fn build_columns_section(
    component: &TableBuilderComponent,
    link: &Scope<TableBuilderComponent>,
) -> Html {
    html! {
        <section class="builder-section">
            <h4>{"Columns"}</h4>
            <div class="column-list">
                { for component.draft.columns.iter().map(|column| build_column_editor(column, link)) }
            </div>
            <div class="add-column-form">
                <input
                    type="text"
                    placeholder="Column name"
                    value={component.new_column_name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetNewColumnName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                { type_select(component.new_column_type, link.callback(Msg::SetNewColumnType)) }
                { icon_button("add", "Add column", link.callback(|_| Msg::AddColumn), false) }
            </div>
        </section>
    }
}

fn build_column_editor(column: &Column, link: &Scope<TableBuilderComponent>) -> Html {
    let rename_id = column.id.clone();
    let retype_id = column.id.clone();
    let width_id = column.id.clone();
    let delete_id = column.id.clone();

    html! {
        <div class="column-editor" key={column.id.clone()}>
            <i class="material-icons type-icon">{ column.column_type.icon_name() }</i>
            <input
                type="text"
                value={column.name.clone()}
                onchange={link.callback(move |e: Event| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::RenameColumn(rename_id.clone(), value)
                })}
            />
            {
                type_select(
                    column.column_type,
                    link.callback(move |column_type| {
                        Msg::ChangeColumnType(retype_id.clone(), column_type)
                    }),
                )
            }
            <input
                type="number"
                class="width-input"
                title="Relative width"
                placeholder="auto"
                value={column.width.map(|width| width.to_string()).unwrap_or_default()}
                onchange={link.callback(move |e: Event| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::SetColumnWidth(width_id.clone(), parse_width(&value))
                })}
            />
            <button
                class="icon-btn danger"
                title="Delete column"
                onclick={link.callback(move |_| {
                    Msg::RequestDelete(PendingDelete::Column(delete_id.clone()))
                })}
            >
                <i class="material-icons">{"delete"}</i>
            </button>
        </div>
    }
}

fn build_rows_section(
    component: &TableBuilderComponent,
    link: &Scope<TableBuilderComponent>,
) -> Html {
    let no_columns = component.draft.columns.is_empty();

    html! {
        <section class="builder-section">
            <h4>{"Rows"}</h4>
            {
                if no_columns {
                    html! { <p class="hint">{"Add a column before entering rows."}</p> }
                } else {
                    build_row_grid(component, link)
                }
            }
            { icon_button("playlist_add", "Add row", link.callback(|_| Msg::AddRow), no_columns) }
        </section>
    }
}

fn build_row_grid(component: &TableBuilderComponent, link: &Scope<TableBuilderComponent>) -> Html {
    html! {
        <table class="row-grid">
            <thead>
                <tr>
                    <th class="drag-col"></th>
                    { for component.draft.columns.iter().map(|column| html! { <th>{ &column.name }</th> }) }
                    <th class="actions-col"></th>
                </tr>
            </thead>
            <tbody>
                {
                    for component.draft.rows.iter().enumerate().map(|(index, row)| {
                        build_row_editor(component, index, row, link)
                    })
                }
            </tbody>
        </table>
    }
}

fn build_row_editor(
    component: &TableBuilderComponent,
    index: usize,
    row: &DraftRow,
    link: &Scope<TableBuilderComponent>,
) -> Html {
    let row_id = row.id.clone();
    let dragging = component.drag_index == Some(index);

    html! {
        <tr
            key={row.id.clone()}
            class={classes!(if dragging { "dragging" } else { "" })}
            ondragover={link.callback(move |e: DragEvent| {
                e.prevent_default();
                Msg::RowDragOver(index)
            })}
            ondrop={link.callback(|e: DragEvent| {
                e.prevent_default();
                Msg::RowDragEnd
            })}
        >
            <td
                class="drag-handle"
                title="Drag to reorder"
                draggable="true"
                ondragstart={link.callback(move |_: DragEvent| Msg::RowDragStart(index))}
                ondragend={link.callback(|_: DragEvent| Msg::RowDragEnd)}
            >
                <i class="material-icons">{"drag_indicator"}</i>
            </td>
            {
                for component.draft.columns.iter().map(|column| html! {
                    <td>{ cell_input(row, column, link) }</td>
                })
            }
            <td class="actions-col">
                <button
                    class="icon-btn danger"
                    title="Delete row"
                    onclick={link.callback(move |_| {
                        Msg::RequestDelete(PendingDelete::Row(row_id.clone()))
                    })}
                >
                    <i class="material-icons">{"delete"}</i>
                </button>
            </td>
        </tr>
    }
}

/// Input widget for one cell, picked by the column's declared type.
fn cell_input(row: &DraftRow, column: &Column, link: &Scope<TableBuilderComponent>) -> Html {
    let current = cell_text(row.cell(&column.id));
    let row_id = row.id.clone();
    let column_id = column.id.clone();

    match column.column_type {
        ColumnType::Number => html! {
            <input
                type="number"
                value={current}
                onchange={link.callback(move |e: Event| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateCell {
                        row_id: row_id.clone(),
                        column_id: column_id.clone(),
                        value: number_cell_value(&value),
                    }
                })}
            />
        },
        ColumnType::Richtext => html! {
            <textarea
                value={current}
                placeholder="Markdown"
                onchange={link.callback(move |e: Event| {
                    let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    Msg::UpdateCell {
                        row_id: row_id.clone(),
                        column_id: column_id.clone(),
                        value: text_cell_value(&value),
                    }
                })}
            />
        },
        ColumnType::Boolean => {
            let selected = row.cell(&column.id).and_then(Value::as_bool);
            html! {
                <select onchange={link.callback(move |e: Event| {
                    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                    Msg::UpdateCell {
                        row_id: row_id.clone(),
                        column_id: column_id.clone(),
                        value: match value.as_str() {
                            "yes" => Value::Bool(true),
                            "no" => Value::Bool(false),
                            _ => Value::Null,
                        },
                    }
                })}>
                    <option value="" selected={selected.is_none()}>{"-"}</option>
                    <option value="yes" selected={selected == Some(true)}>{"Yes"}</option>
                    <option value="no" selected={selected == Some(false)}>{"No"}</option>
                </select>
            }
        }
        ColumnType::Date => html! {
            <input
                type="date"
                value={current}
                onchange={link.callback(move |e: Event| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateCell {
                        row_id: row_id.clone(),
                        column_id: column_id.clone(),
                        value: text_cell_value(&value),
                    }
                })}
            />
        },
        // Text, image URL and link URL cells are all edited as plain text.
        ColumnType::Text | ColumnType::Image | ColumnType::Link => html! {
            <input
                type="text"
                value={current}
                onchange={link.callback(move |e: Event| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateCell {
                        row_id: row_id.clone(),
                        column_id: column_id.clone(),
                        value: text_cell_value(&value),
                    }
                })}
            />
        },
    }
}

/// Column-type picker used by the add-column form and each column editor.
fn type_select(current: ColumnType, on_change: Callback<ColumnType>) -> Html {
    html! {
        <select onchange={Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_change.emit(ColumnType::parse(&value).unwrap_or(ColumnType::Text));
        })}>
            {
                for ColumnType::ALL.into_iter().map(|kind| html! {
                    <option value={kind.as_str()} selected={kind == current}>
                        { kind.label() }
                    </option>
                })
            }
        </select>
    }
}

/// Renders a toolbar button with a Material icon and a label.
fn icon_button(
    icon_name: &str,
    label: &str,
    on_click: Callback<MouseEvent>,
    disabled: bool,
) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click} disabled={disabled}>
            <i class="material-icons">{icon_name}</i>
            <span class="icon-label">{label}</span>
        </button>
    }
}
