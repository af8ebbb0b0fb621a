//! Card rendering of the visible rows, used on narrow screens.

use erp_core::grid::Record;
use leptos::prelude::*;

use super::GridHandle;
use super::table::RowActions;

stylance::import_crate_style!(css, "src/components/data_table/data_table.module.css");

#[component]
pub fn CardView<T>(grid: GridHandle<T>) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    view! {
        <div class=css::cards>
            {move || {
                grid.data.track();
                grid.rows
                    .get()
                    .into_iter()
                    .map(|index| view! { <Card grid=grid index=index /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn Card<T>(grid: GridHandle<T>, index: usize) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let (fields, actions) = grid.columns.with_value(|cols| {
        grid.data.with_untracked(|data| {
            let Some(record) = data.get(index) else {
                return (Vec::new(), Vec::new());
            };
            let fields = cols
                .iter()
                .filter_map(|column| {
                    column
                        .display(record)
                        .map(|text| (column.title.clone(), text))
                })
                .collect::<Vec<_>>();
            let actions = cols
                .iter()
                .flat_map(|column| column.row_actions().iter().copied())
                .collect::<Vec<_>>();
            (fields, actions)
        })
    });

    view! {
        <div class=css::card>
            <dl class=css::cardFields>
                {fields
                    .into_iter()
                    .map(|(title, text)| view! {
                        <dt class=css::cardLabel>{title}</dt>
                        <dd class=css::cardValue>{text}</dd>
                    })
                    .collect_view()}
            </dl>
            {(!actions.is_empty()).then(|| view! {
                <div class=css::cardActions>
                    <RowActions grid=grid index=index actions=actions />
                </div>
            })}
        </div>
    }
}
