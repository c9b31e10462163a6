use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageNavProps {
    pub page: u32,
    pub total_pages: u32,
    pub on_change: Callback<u32>,
}

/// Previous/next controls for paginated tables.
#[function_component(PageNav)]
pub fn page_nav(props: &PageNavProps) -> Html {
    let page = props.page;
    let total_pages = props.total_pages;

    let on_prev = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            if page > 1 {
                on_change.emit(page - 1);
            }
        })
    };
    let on_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            if page < total_pages {
                on_change.emit(page + 1);
            }
        })
    };

    html! {
        <div class="join mt-4">
            <button class="join-item btn btn-sm" disabled={page <= 1} onclick={on_prev}>
                {"«"}
            </button>
            <span class="join-item btn btn-sm btn-disabled">
                {format!("Page {page} of {}", total_pages.max(1))}
            </span>
            <button class="join-item btn btn-sm" disabled={page >= total_pages} onclick={on_next}>
                {"»"}
            </button>
        </div>
    }
}
