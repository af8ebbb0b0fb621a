use erp_core::grid::{Column, RowAction};
use erp_core::{Article, Page};
use leptos::prelude::*;

use super::{PageTitle, css, mock};
use crate::components::data_table::DataTable;

fn columns() -> Vec<Column> {
    vec![
        Column::new("code", "Código").sortable(),
        Column::new("name", "Nombre").sortable(),
        Column::new("colors", "Colores").joined(", "),
        Column::new("sizes", "Tallas").joined(" / "),
        Column::new("price", "Precio").sortable(),
        Column::new("isPromotion", "Promoción").sortable(),
        Column::new("isActive", "Activo").sortable(),
        Column::new("id", "Acciones").actions([
            RowAction::View,
            RowAction::Edit,
            RowAction::Delete,
        ]),
    ]
}

#[component]
pub fn Articles() -> impl IntoView {
    let articles = RwSignal::new(mock::articles());

    view! {
        <div class=css::page>
            <PageTitle page=Page::Articles />
            <DataTable
                data=articles
                columns=columns()
                on_add=Callback::new(|_| log::info!("articles: add"))
                add_label="REGISTRAR ARTÍCULO"
                filename="articulos"
                on_action=Callback::new(|(action, article): (RowAction, Article)| {
                    log::info!("articles: {} {}", action.label(), article.code)
                })
            />
        </div>
    }
}
