//! Generic searchable, filterable, sortable and exportable data table.
//!
//! Search text and column filters live in the URL query (see
//! [`GridViewState`]); sort order and the view toggles are local to the
//! mounted table.
//!
//! Components:
//! - [`DataTable`] - Toolbar plus table or card rendering of visible rows
//! - [`Toolbar`] - Search box, row count and action buttons
//! - [`TableView`] - Tabular rendering with sortable headers and filters
//! - [`CardView`] - Card rendering for narrow screens

mod cards;
mod table;
mod toolbar;

use erp_core::grid::{
    Column, GridViewState, Record, RowAction, SortState, csv_filename, cycle_sort,
    export_csv_string, visible_rows,
};
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::config::table::{DEFAULT_ADD_LABEL, DEFAULT_EXPORT_FILENAME, NARROW_SCREEN_QUERY};
use crate::utils::{CSV_MIME, download_text};

pub use cards::CardView;
pub use table::TableView;
pub use toolbar::Toolbar;

stylance::import_crate_style!(css, "src/components/data_table/data_table.module.css");

/// Shared state of one mounted table, handed to its child views.
pub struct GridHandle<T: Send + Sync + 'static> {
    ctx: AppContext,
    pub data: Signal<Vec<T>>,
    pub columns: StoredValue<Vec<Column>>,
    pub view_state: Memo<GridViewState>,
    pub sort: RwSignal<Option<SortState>>,
    pub rows: Memo<Vec<usize>>,
    pub on_action: Option<Callback<(RowAction, T)>>,
}

impl<T: Send + Sync + 'static> Clone for GridHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for GridHandle<T> {}

impl<T: Record + Clone + Send + Sync + 'static> GridHandle<T> {
    /// Write `next` into the URL query, keeping parameters owned by others.
    pub fn set_view_state(&self, next: GridViewState) {
        let existing = self.ctx.location.with_untracked(|l| l.query.clone());
        let query = self
            .columns
            .with_value(|cols| next.merge_into_query(&existing, cols));
        self.ctx.replace_query(query);
    }

    pub fn set_search(&self, search: String) {
        self.set_view_state(self.view_state.get_untracked().with_search(search));
    }

    pub fn set_filter(&self, key: String, value: String) {
        self.set_view_state(self.view_state.get_untracked().with_filter(key, value));
    }

    /// Drop the search term and every column filter.
    pub fn clear_view_state(&self) {
        self.set_view_state(GridViewState::default());
    }

    pub fn has_view_state(&self) -> bool {
        self.view_state.with(GridViewState::is_active)
    }

    /// Advance the sort for a click on `column`'s header.
    pub fn click_header(&self, column: &Column) {
        self.sort
            .update(|sort| *sort = cycle_sort(sort.take(), column));
    }

    pub fn run_action(&self, action: RowAction, index: usize) {
        let Some(on_action) = self.on_action else {
            return;
        };
        if let Some(record) = self.data.with_untracked(|d| d.get(index).cloned()) {
            on_action.run((action, record));
        }
    }

    /// Export the visible rows and hand the file to the browser.
    pub fn export(&self, filename: &str) {
        let rows = self.rows.get_untracked();
        let csv = self
            .data
            .with_untracked(|d| self.columns.with_value(|cols| export_csv_string(d, cols, &rows)));
        let filename = csv_filename(filename);
        match csv {
            Ok(content) => match download_text(&filename, CSV_MIME, &content) {
                Ok(()) => log::info!("export: {} rows to {}", rows.len(), filename),
                Err(e) => log::error!("export: {}", e),
            },
            Err(e) => log::error!("export: {}", e),
        }
    }
}

/// Data table over `data` described by `columns`.
///
/// # Props
///
/// - `on_add`: shows the add button when set; `add_label` overrides its text
/// - `filename`: export name without the `.csv` extension
/// - `on_action`: receives row action clicks as `(action, record)`
#[component]
pub fn DataTable<T>(
    #[prop(into)] data: Signal<Vec<T>>,
    columns: Vec<Column>,
    #[prop(optional)] on_add: Option<Callback<()>>,
    #[prop(into, optional)] add_label: Option<String>,
    #[prop(into, optional)] filename: Option<String>,
    #[prop(optional)] on_action: Option<Callback<(RowAction, T)>>,
) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let columns = StoredValue::new(columns);
    let view_state = Memo::new(move |_| {
        ctx.location
            .with(|l| columns.with_value(|cols| GridViewState::from_query(&l.query, cols)))
    });
    let sort = RwSignal::new(None::<SortState>);
    let rows = Memo::new(move |_| {
        let state = view_state.get();
        sort.with(|sort| {
            data.with(|d| columns.with_value(|cols| visible_rows(d, cols, &state, sort.as_ref())))
        })
    });

    let grid = GridHandle {
        ctx,
        data,
        columns,
        view_state,
        sort,
        rows,
        on_action,
    };

    // View toggles
    let narrow = use_media_query(NARROW_SCREEN_QUERY.to_string());
    let grid_choice = RwSignal::new(None::<bool>);
    let grid_view = Signal::derive(move || grid_choice.get().unwrap_or_else(|| narrow.get()));
    let maximized = RwSignal::new(false);

    let add_label = add_label.unwrap_or_else(|| DEFAULT_ADD_LABEL.to_string());
    let filename = filename.unwrap_or_else(|| DEFAULT_EXPORT_FILENAME.to_string());

    let container_class = move || {
        if maximized.get() {
            format!("{} {}", css::container, css::maximized)
        } else {
            css::container.to_string()
        }
    };

    view! {
        <div class=container_class>
            <Toolbar
                grid=grid
                on_add=on_add
                add_label=add_label
                on_toggle_grid=Callback::new(move |_| {
                    grid_choice.set(Some(!grid_view.get_untracked()))
                })
                on_toggle_maximize=Callback::new(move |_| maximized.update(|m| *m = !*m))
                on_export=Callback::new(move |_| grid.export(&filename))
            />
            <div class=css::body>
                <Show
                    when=move || grid_view.get()
                    fallback=move || view! { <TableView grid=grid /> }
                >
                    <CardView grid=grid />
                </Show>
                <Show when=move || rows.with(Vec::is_empty)>
                    <div class=css::empty>"Sin resultados"</div>
                </Show>
            </div>
        </div>
    }
}
