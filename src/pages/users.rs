use erp_core::grid::{Column, RowAction};
use erp_core::{Page, User};
use leptos::prelude::*;

use super::{PageTitle, css, mock};
use crate::components::data_table::DataTable;

fn columns() -> Vec<Column> {
    vec![
        Column::new("username", "Usuario").sortable(),
        Column::new("name", "Nombre").sortable(),
        Column::new("email", "Email").sortable(),
        Column::new("roles", "Roles").joined(", "),
        Column::new("id", "Acciones").actions([
            RowAction::Edit,
            RowAction::ChangePassword,
            RowAction::Delete,
        ]),
    ]
}

fn handle_action(action: RowAction, user: &User) {
    match action {
        RowAction::Edit => log::info!("users: edit {}", user.username),
        RowAction::ChangePassword => log::info!("users: change password for {}", user.username),
        RowAction::Delete => log::info!("users: delete {}", user.username),
        RowAction::View => log::info!("users: view {}", user.username),
    }
}

#[component]
pub fn Users() -> impl IntoView {
    let users = RwSignal::new(mock::users());

    view! {
        <div class=css::page>
            <PageTitle page=Page::Users />
            <DataTable
                data=users
                columns=columns()
                on_add=Callback::new(|_| log::info!("users: add"))
                add_label="REGISTRAR USUARIO"
                filename="usuarios"
                on_action=Callback::new(|(action, user): (RowAction, User)| {
                    handle_action(action, &user)
                })
            />
        </div>
    }
}
