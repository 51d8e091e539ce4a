use leptos::*;

use crate::{
    components::layout::LoadingSpinner,
    reconcile::{ListState, Searchable},
};

/// Shown in place of any optional field the server left out.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn display_or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// One rendered table row per item.
pub trait TableRow {
    fn cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableState {
    Loading,
    Empty,
    Rows(Vec<Vec<String>>),
}

impl TableState {
    pub fn from_list<T: Searchable + TableRow + Clone>(state: &ListState<T>) -> Self {
        if state.is_loading() {
            return TableState::Loading;
        }
        let rows: Vec<_> = state.items().iter().map(TableRow::cells).collect();
        if rows.is_empty() {
            TableState::Empty
        } else {
            TableState::Rows(rows)
        }
    }
}

#[component]
pub fn DataTable(
    headers: &'static [&'static str],
    #[prop(into)] state: Signal<TableState>,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView {
    let empty_message = empty_message.unwrap_or_else(|| "No data found".to_string());
    let colspan = headers.len().to_string();

    move || match state.get() {
        TableState::Loading => view! { <LoadingSpinner /> }.into_view(),
        TableState::Empty => {
            let colspan = colspan.clone();
            let message = empty_message.clone();
            view! {
                <Table headers=headers>
                    <tr>
                        <td colspan=colspan class="px-4 py-6 text-center text-sm text-fg-muted">
                            {message}
                        </td>
                    </tr>
                </Table>
            }
            .into_view()
        }
        TableState::Rows(rows) => view! {
            <Table headers=headers>
                {rows
                    .into_iter()
                    .map(|cells| {
                        view! {
                            <tr class="border-t border-border">
                                {cells
                                    .into_iter()
                                    .map(|cell| view! { <td class="px-4 py-2 text-sm text-fg">{cell}</td> })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </Table>
        }
        .into_view(),
    }
}

#[component]
fn Table(headers: &'static [&'static str], children: Children) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
            <table class="min-w-full">
                <thead class="bg-surface-muted">
                    <tr>
                        {headers
                            .iter()
                            .map(|header| view! {
                                <th class="px-4 py-2 text-left text-xs font-semibold uppercase text-fg-muted">
                                    {*header}
                                </th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>{children()}</tbody>
            </table>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{escaped, render_to_string};

    const HEADERS: &[&str] = &["Name", "Batch", "Module"];

    #[test]
    fn empty_table_renders_one_row_spanning_all_columns() {
        let html = render_to_string(move || {
            view! { <DataTable headers=HEADERS state=Signal::derive(|| TableState::Empty) /> }
        });
        assert!(html.contains("colspan=\"3\""));
        assert!(html.contains("No data found"));
    }

    #[test]
    fn loading_table_shows_spinner_instead_of_rows() {
        let html = render_to_string(move || {
            view! { <DataTable headers=HEADERS state=Signal::derive(|| TableState::Loading) /> }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn rows_render_each_cell() {
        let html = render_to_string(move || {
            let state = TableState::Rows(vec![vec![
                "Amal".to_string(),
                "COM12".to_string(),
                NOT_AVAILABLE.to_string(),
            ]]);
            view! { <DataTable headers=HEADERS state=Signal::derive(move || state.clone()) /> }
        });
        assert!(html.contains("Amal"));
        assert!(html.contains("COM12"));
        assert!(html.contains(&escaped(NOT_AVAILABLE)));
    }
}
