use festivia_shared::models::{FieldError, Role, Subscription, SubscriptionForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::FestiviaClient;
use crate::components::loading::Loading;

/// Subscription plans the creator offers, with a validated creation
/// form. Invalid input is surfaced inline per field and never sent to
/// the server.
#[function_component(PlansPage)]
pub fn plans_page() -> Html {
    let plans = use_state(|| None::<Vec<Subscription>>);
    let error = use_state(|| None::<String>);
    let form = use_state(SubscriptionForm::default);
    let field_errors = use_state(Vec::<FieldError>::new);
    let submitting = use_state(|| false);

    let reload = {
        let plans = plans.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let plans = plans.clone();
            let error = error.clone();
            spawn_local(async move {
                match FestiviaClient::shared(Role::Creator)
                    .list_subscriptions()
                    .await
                {
                    Ok(payload) => plans.set(Some(payload)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |()| {
            reload.emit(());
            || ()
        });
    }

    let onsubmit = {
        let form = form.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let reload = reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match form.to_payload() {
                Err(errors) => field_errors.set(errors),
                Ok(payload) => {
                    field_errors.set(Vec::new());
                    submitting.set(true);
                    let form = form.clone();
                    let error = error.clone();
                    let submitting = submitting.clone();
                    let reload = reload.clone();
                    spawn_local(async move {
                        match FestiviaClient::shared(Role::Creator)
                            .create_subscription(&payload)
                            .await
                        {
                            Ok(_) => {
                                form.set(SubscriptionForm::default());
                                reload.emit(());
                            }
                            Err(err) => error.set(Some(err.to_string())),
                        }
                        submitting.set(false);
                    });
                }
            }
        })
    };

    let listing = if let Some(message) = &*error {
        html! { <div class="alert alert-error"><span>{message.clone()}</span></div> }
    } else if let Some(plans) = &*plans {
        let rows = plans
            .iter()
            .map(|plan| {
                html! {
                    <tr>
                        <td>{plan.name.clone()}</td>
                        <td>{plan.description.clone()}</td>
                        <td class="font-mono">{format!("{:.2}", plan.price)}</td>
                        <td>{format!("{} days", plan.duration_days)}</td>
                        <td>
                            if plan.is_active {
                                <span class="badge badge-success">{"active"}</span>
                            } else {
                                <span class="badge badge-ghost">{"inactive"}</span>
                            }
                        </td>
                    </tr>
                }
            })
            .collect::<Html>();
        html! {
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Description"}</th>
                        <th>{"Price"}</th>
                        <th>{"Duration"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
    } else {
        html! { <Loading /> }
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Subscription plans"}</h1>
            <form class="card bg-base-200 shadow p-4 space-y-2 max-w-lg" {onsubmit}>
                {form_field(&form, &field_errors, "name", "Name", |f| f.name.clone(),
                    |f, v| f.name = v)}
                {form_field(&form, &field_errors, "description", "Description",
                    |f| f.description.clone(), |f, v| f.description = v)}
                {form_field(&form, &field_errors, "price", "Price",
                    |f| f.price.clone(), |f, v| f.price = v)}
                {form_field(&form, &field_errors, "duration_days", "Duration (days)",
                    |f| f.duration_days.clone(), |f, v| f.duration_days = v)}
                <button class="btn btn-primary" type="submit" disabled={*submitting}>
                    {if *submitting { "Creating..." } else { "Create plan" }}
                </button>
            </form>
            {listing}
        </div>
    }
}

fn form_field(
    form: &UseStateHandle<SubscriptionForm>,
    field_errors: &UseStateHandle<Vec<FieldError>>,
    field: &'static str,
    label: &'static str,
    get: fn(&SubscriptionForm) -> String,
    set: fn(&mut SubscriptionForm, String),
) -> Html {
    let message = SubscriptionForm::field_message(field_errors, field).map(ToString::to_string);
    let oninput = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                set(&mut next, input.value());
                form.set(next);
            }
        })
    };
    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{label}</span></label>
            <input class="input input-bordered" value={get(form)} {oninput} />
            if let Some(message) = message {
                <span class="label-text-alt text-error">{message}</span>
            }
        </div>
    }
}
