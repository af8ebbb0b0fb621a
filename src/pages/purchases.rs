use erp_core::grid::{Column, RowAction};
use erp_core::{Page, Purchase};
use leptos::prelude::*;

use super::{PageTitle, css, mock};
use crate::components::data_table::DataTable;

fn columns() -> Vec<Column> {
    vec![
        Column::new("code", "Código").sortable(),
        Column::new("date", "Fecha").sortable(),
        Column::new("invoice", "Factura").sortable(),
        Column::new("items", "Artículos").joined(", "),
        Column::new("subtotal", "Subtotal").sortable(),
        Column::new("tax", "IGV").sortable(),
        Column::new("total", "Total").sortable(),
        Column::new("id", "Acciones").actions([RowAction::View, RowAction::Delete]),
    ]
}

#[component]
pub fn Purchases() -> impl IntoView {
    let purchases = RwSignal::new(mock::purchases());

    view! {
        <div class=css::page>
            <PageTitle page=Page::Purchases />
            <DataTable
                data=purchases
                columns=columns()
                on_add=Callback::new(|_| log::info!("purchases: add"))
                add_label="REGISTRAR COMPRA"
                filename="compras"
                on_action=Callback::new(|(action, purchase): (RowAction, Purchase)| {
                    log::info!("purchases: {} {}", action.label(), purchase.code)
                })
            />
        </div>
    }
}
