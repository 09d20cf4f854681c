//! Page navigation for list views

use fiscamoto_core::{AppConfig, PaginationState};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub pagination: PaginationState,
    pub on_page_change: Callback<u32>,
    #[prop_or_default]
    pub on_limit_change: Option<Callback<u32>>,
}

/// Page buttons, previous/next and an item counter.
///
/// Renders nothing for an empty result set. Previous and next follow the
/// backend's `has_prev` and `has_next` flags.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let state = &props.pagination;
    if state.is_empty() {
        return html! {};
    }

    let go_to = |page: u32| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page))
    };

    let summary = state.item_range().map(|(first, last)| {
        html! {
            <p class="text-sm text-gray-600">
                {format!("Mostrando {first}–{last} de {}", state.total_items)}
            </p>
        }
    });

    let limit_select = props.on_limit_change.clone().map(|on_limit_change| {
        let onchange = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(limit) = select.value().parse() {
                on_limit_change.emit(limit);
            }
        });
        html! {
            <label class="flex items-center gap-2 text-sm text-gray-600">
                {"Por página"}
                <select class="border border-gray-300 rounded-md px-2 py-1" {onchange}>
                    {AppConfig::PAGE_SIZES.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == state.limit}>
                            {*size}
                        </option>
                    }).collect::<Html>()}
                </select>
            </label>
        }
    });

    let button = "px-3 py-1 rounded-md border text-sm disabled:opacity-50 disabled:cursor-not-allowed";

    html! {
        <div class="flex flex-wrap items-center justify-between gap-4 mt-4">
            {summary}
            <nav class="flex items-center gap-1" aria-label="Paginación">
                <button
                    class={classes!(button, "border-gray-300")}
                    disabled={!state.has_prev}
                    onclick={go_to(state.current_page.saturating_sub(1))}
                >
                    {"Anterior"}
                </button>
                {state.window().map(|page| {
                    let active = page == state.current_page;
                    html! {
                        <button
                            key={page}
                            class={classes!(
                                button,
                                if active { "bg-blue-600 text-white border-blue-600" } else { "border-gray-300" }
                            )}
                            aria-current={active.then_some("page")}
                            onclick={go_to(page)}
                        >
                            {page}
                        </button>
                    }
                }).collect::<Html>()}
                <button
                    class={classes!(button, "border-gray-300")}
                    disabled={!state.has_next}
                    onclick={go_to(state.current_page + 1)}
                >
                    {"Siguiente"}
                </button>
            </nav>
            {limit_select}
        </div>
    }
}
