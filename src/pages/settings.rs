use erp_core::Page;
use leptos::prelude::*;

use super::{PageTitle, css, mock};
use crate::app::AppContext;

#[component]
pub fn Settings() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let company = mock::company();

    let profile = Signal::derive(move || {
        ctx.session.with(|s| {
            s.user()
                .map(|u| {
                    (
                        u.name.clone(),
                        u.email.clone(),
                        u.role_names().join(", "),
                    )
                })
                .unwrap_or_default()
        })
    });
    let branches = Signal::derive(move || ctx.session.with(|s| s.branches().to_vec()));
    let active_branch =
        Signal::derive(move || ctx.session.with(|s| s.branch().map(|b| b.id.clone())));

    let company_rows = [
        ("Razón social", company.name),
        ("RUC", company.identification),
        ("Dirección", company.address),
        ("Teléfono", company.phone),
        ("Email", company.email),
    ];

    view! {
        <div class=css::page>
            <PageTitle page=Page::Settings />

            <section class=css::section>
                <h2 class=css::sectionTitle>"Empresa"</h2>
                <dl class=css::details>
                    {company_rows
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        })
                        .collect_view()}
                </dl>
            </section>

            <section class=css::section>
                <h2 class=css::sectionTitle>"Perfil"</h2>
                <dl class=css::details>
                    <dt>"Nombre"</dt>
                    <dd>{move || profile.get().0}</dd>
                    <dt>"Email"</dt>
                    <dd>{move || profile.get().1}</dd>
                    <dt>"Roles"</dt>
                    <dd>{move || profile.get().2}</dd>
                </dl>
            </section>

            <section class=css::section>
                <h2 class=css::sectionTitle>"Sucursal activa"</h2>
                <div class=css::branchList>
                    <For
                        each=move || branches.get()
                        key=|branch| branch.id.clone()
                        children=move |branch| {
                            let id = branch.id.clone();
                            let is_active =
                                move || active_branch.with(|a| a.as_deref() == Some(id.as_str()));
                            let name = branch.name.clone();
                            view! {
                                <label class=css::branchOption>
                                    <input
                                        type="radio"
                                        name="branch"
                                        prop:checked=is_active
                                        on:change=move |_| ctx.set_branch(branch.clone())
                                    />
                                    <span>{name}</span>
                                </label>
                            }
                        }
                    />
                </div>
            </section>
        </div>
    }
}
