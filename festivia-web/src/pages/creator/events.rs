use chrono::{NaiveDateTime, TimeZone, Utc};
use festivia_shared::models::{ApprovalStatus, EventSummary, NewEvent, PageQuery, Paged, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::FestiviaClient;
use crate::components::loading::Loading;
use crate::components::page_nav::PageNav;

/// Event management: the creator's paginated events and a submission
/// form for new ones. Submitted events await admin approval.
#[function_component(EventManagementPage)]
pub fn event_management_page() -> Html {
    let events = use_state(|| None::<Paged<EventSummary>>);
    let error = use_state(|| None::<String>);
    let page = use_state(|| 1u32);
    let title = use_state(String::new);
    let venue = use_state(String::new);
    let starts_at = use_state(String::new);
    let price = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let reload = {
        let events = events.clone();
        let error = error.clone();
        Callback::from(move |page: u32| {
            let events = events.clone();
            let error = error.clone();
            spawn_local(async move {
                let query = PageQuery {
                    page,
                    ..PageQuery::default()
                };
                match FestiviaClient::shared(Role::Creator).events(query).await {
                    Ok(payload) => events.set(Some(payload)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    {
        let reload = reload.clone();
        let page_value = *page;
        use_effect_with(page_value, move |&page| {
            reload.emit(page);
            || ()
        });
    }

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let onsubmit = {
        let title = title.clone();
        let venue = venue.clone();
        let starts_at = starts_at.clone();
        let price = price.clone();
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        let reload = reload.clone();
        let page = page.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            form_error.set(None);

            let Some(payload) = build_event(&title, &venue, &starts_at, &price) else {
                form_error.set(Some(
                    "Give the event a title, a venue, a future date, and a price".to_string(),
                ));
                return;
            };

            submitting.set(true);
            let form_error = form_error.clone();
            let submitting = submitting.clone();
            let reload = reload.clone();
            let current_page = *page;
            spawn_local(async move {
                match FestiviaClient::shared(Role::Creator)
                    .create_event(&payload)
                    .await
                {
                    Ok(_) => reload.emit(current_page),
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    let listing = if let Some(message) = &*error {
        html! { <div class="alert alert-error"><span>{message.clone()}</span></div> }
    } else if let Some(paged) = &*events {
        let rows = paged.items.iter().map(event_row).collect::<Html>();
        html! {
            <>
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Title"}</th>
                            <th>{"Venue"}</th>
                            <th>{"Starts"}</th>
                            <th>{"Price"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <PageNav page={paged.page} total_pages={paged.total_pages()} on_change={on_page_change} />
            </>
        }
    } else {
        html! { <Loading /> }
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Event management"}</h1>
            <form class="card bg-base-200 shadow p-4 grid grid-cols-1 md:grid-cols-5 gap-2 items-end" {onsubmit}>
                {text_input("Title", "text", &title)}
                {text_input("Venue", "text", &venue)}
                {text_input("Starts", "datetime-local", &starts_at)}
                {text_input("Price", "number", &price)}
                <button class="btn btn-primary" type="submit" disabled={*submitting}>
                    {if *submitting { "Submitting..." } else { "Submit event" }}
                </button>
                if let Some(message) = &*form_error {
                    <div class="alert alert-error md:col-span-5"><span>{message.clone()}</span></div>
                }
            </form>
            {listing}
        </div>
    }
}

fn build_event(
    title: &UseStateHandle<String>,
    venue: &UseStateHandle<String>,
    starts_at: &UseStateHandle<String>,
    price: &UseStateHandle<String>,
) -> Option<NewEvent> {
    let title = title.trim().to_string();
    let venue = venue.trim().to_string();
    if title.is_empty() || venue.is_empty() {
        return None;
    }
    // datetime-local inputs have no zone; event times are taken as UTC.
    let naive = NaiveDateTime::parse_from_str(starts_at.trim(), "%Y-%m-%dT%H:%M").ok()?;
    let starts_at = Utc.from_utc_datetime(&naive);
    let price = price.trim().parse::<f64>().ok().filter(|value| *value >= 0.0)?;
    Some(NewEvent {
        title,
        venue,
        starts_at,
        price,
    })
}

fn text_input(label: &'static str, kind: &'static str, handle: &UseStateHandle<String>) -> Html {
    let oninput = {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };
    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{label}</span></label>
            <input class="input input-bordered" type={kind} value={(**handle).clone()} {oninput} />
        </div>
    }
}

fn event_row(event: &EventSummary) -> Html {
    let status = match event.status {
        ApprovalStatus::Pending => html! { <span class="badge badge-warning">{"pending"}</span> },
        ApprovalStatus::Approved => html! { <span class="badge badge-success">{"approved"}</span> },
        ApprovalStatus::Rejected => html! { <span class="badge badge-error">{"rejected"}</span> },
    };
    html! {
        <tr>
            <td>{event.title.clone()}</td>
            <td>{event.venue.clone()}</td>
            <td>{event.starts_at.format("%Y-%m-%d %H:%M").to_string()}</td>
            <td class="font-mono">{format!("{:.2}", event.price)}</td>
            <td>{status}</td>
        </tr>
    }
}
