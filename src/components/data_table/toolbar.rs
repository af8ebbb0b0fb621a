//! Table toolbar: search, row count and table-level actions.

use erp_core::grid::Record;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::GridHandle;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/data_table/data_table.module.css");

#[component]
pub fn Toolbar<T>(
    grid: GridHandle<T>,
    on_add: Option<Callback<()>>,
    add_label: String,
    on_toggle_grid: Callback<()>,
    on_toggle_maximize: Callback<()>,
    on_export: Callback<()>,
) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let search = Signal::derive(move || grid.view_state.with(|s| s.search.clone()));
    let row_count = Signal::derive(move || {
        let visible = grid.rows.with(Vec::len);
        let total = grid.data.with(Vec::len);
        if visible == total {
            format!("{} registros", total)
        } else {
            format!("{} de {} registros", visible, total)
        }
    });

    view! {
        <div class=css::toolbar>
            <label class=css::search>
                <Icon icon=ic::SEARCH />
                <input
                    type="search"
                    class=css::searchInput
                    placeholder="Buscar..."
                    prop:value=move || search.get()
                    on:input=move |ev| grid.set_search(event_target_value(&ev))
                />
            </label>

            <Show when=move || grid.has_view_state()>
                <button
                    class=css::toolButton
                    title="Limpiar filtros"
                    on:click=move |_| grid.clear_view_state()
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </Show>

            <span class=css::rowCount>{row_count}</span>

            <div class=css::toolbarActions>
                {on_add.map(|on_add| view! {
                    <button class=css::primaryButton on:click=move |_| on_add.run(())>
                        <Icon icon=ic::PLUS />
                        <span>{add_label}</span>
                    </button>
                })}
                <button
                    class=css::toolButton
                    title="Vista de tarjetas"
                    on:click=move |_| on_toggle_grid.run(())
                >
                    <Icon icon=ic::GRID />
                </button>
                <button
                    class=css::toolButton
                    title="Maximizar"
                    on:click=move |_| on_toggle_maximize.run(())
                >
                    <Icon icon=ic::MAXIMIZE />
                </button>
                <button
                    class=css::toolButton
                    title="Exportar CSV"
                    on:click=move |_| on_export.run(())
                >
                    <Icon icon=ic::DOWNLOAD />
                </button>
            </div>
        </div>
    }
}
