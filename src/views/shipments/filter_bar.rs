use yew::prelude::*;

use crate::models::StatusFilter;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub active: StatusFilter,
    pub on_select: Callback<StatusFilter>,
}

/// Botones de filtro exclusivos; seleccionar solo re-renderiza la lista ya
/// cargada, nunca re-fetchea.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    html! {
        <div class="filter-bar">
            { for StatusFilter::ALL_FILTERS.iter().map(|filter| {
                let filter = *filter;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(filter))
                };
                let class = classes!(
                    "filter-btn",
                    (props.active == filter).then_some("active")
                );

                html! {
                    <button class={class} {onclick}>{filter.label()}</button>
                }
            }) }
        </div>
    }
}
