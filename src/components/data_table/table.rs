//! Tabular rendering with sortable headers and per-column filter inputs.

use erp_core::grid::{CellKind, Column, Record, RowAction, SortDirection};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::GridHandle;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/data_table/data_table.module.css");

#[component]
pub fn TableView<T>(grid: GridHandle<T>) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let columns = grid.columns.get_value();

    let headers = columns
        .iter()
        .cloned()
        .map(|column| view! { <HeaderCell grid=grid column=column /> })
        .collect_view();
    let filters = columns
        .iter()
        .cloned()
        .map(|column| view! { <FilterCell grid=grid column=column /> })
        .collect_view();

    view! {
        <table class=css::table>
            <thead>
                <tr>{headers}</tr>
                <tr class=css::filterRow>{filters}</tr>
            </thead>
            <tbody>
                {move || {
                    grid.data.track();
                    grid.rows
                        .get()
                        .into_iter()
                        .map(|index| view! { <Row grid=grid index=index /> })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn HeaderCell<T>(grid: GridHandle<T>, column: Column) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let key = column.key.clone();
    let direction = Signal::derive(move || {
        grid.sort.with(|sort| {
            sort.as_ref()
                .filter(|s| s.key == key)
                .map(|s| s.direction)
        })
    });
    let class = if column.sortable {
        format!("{} {}", css::headerCell, css::sortable)
    } else {
        css::headerCell.to_string()
    };
    let title = column.title.clone();

    view! {
        <th class=class on:click=move |_| grid.click_header(&column)>
            <span>{title}</span>
            {move || match direction.get() {
                Some(SortDirection::Ascending) => view! { <Icon icon=ic::SORT_ASC /> }.into_any(),
                Some(SortDirection::Descending) => view! { <Icon icon=ic::SORT_DESC /> }.into_any(),
                None => ().into_any(),
            }}
        </th>
    }
}

#[component]
fn FilterCell<T>(grid: GridHandle<T>, column: Column) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    if matches!(column.cell, CellKind::Actions(_)) {
        return view! { <th></th> }.into_any();
    }

    let key = column.key;
    let placeholder = format!("Filtrar por {}", column.title);
    let value = {
        let key = key.clone();
        Signal::derive(move || {
            grid.view_state
                .with(|s| s.filter(&key).unwrap_or_default().to_string())
        })
    };

    view! {
        <th>
            <input
                type="text"
                class=css::filterInput
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| grid.set_filter(key.clone(), event_target_value(&ev))
            />
        </th>
    }
    .into_any()
}

#[component]
fn Row<T>(grid: GridHandle<T>, index: usize) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let cells = grid.columns.with_value(|cols| {
        grid.data.with_untracked(|data| {
            let Some(record) = data.get(index) else {
                return Vec::new();
            };
            cols.iter()
                .map(|column| match column.display(record) {
                    Some(text) => view! { <td>{text}</td> }.into_any(),
                    None => view! {
                        <td class=css::actionsCell>
                            <RowActions grid=grid index=index actions=column.row_actions().to_vec() />
                        </td>
                    }
                    .into_any(),
                })
                .collect::<Vec<_>>()
        })
    });

    view! { <tr class=css::row>{cells}</tr> }
}

/// Action buttons of one record, shared by the table and card views.
#[component]
pub fn RowActions<T>(
    grid: GridHandle<T>,
    index: usize,
    actions: Vec<RowAction>,
) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    actions
        .into_iter()
        .map(|action| {
            view! {
                <button
                    class=css::actionButton
                    title=action.label()
                    on:click=move |_| grid.run_action(action, index)
                >
                    <Icon icon=ic::action_icon(action) />
                </button>
            }
        })
        .collect_view()
}
