use festivia_shared::models::{Role, Subscription};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::FestiviaClient;
use crate::components::loading::Loading;

/// Subscription plans available to the signed-in user.
#[function_component(SubscriptionsPage)]
pub fn subscriptions_page() -> Html {
    let plans = use_state(|| None::<Vec<Subscription>>);
    let error = use_state(|| None::<String>);
    let busy_plan = use_state(|| None::<String>);

    let reload = {
        let plans = plans.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let plans = plans.clone();
            let error = error.clone();
            spawn_local(async move {
                match FestiviaClient::shared(Role::User).list_subscriptions().await {
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

    let on_subscribe = {
        let error = error.clone();
        let busy_plan = busy_plan.clone();
        let reload = reload.clone();
        Callback::from(move |plan_id: String| {
            let error = error.clone();
            let busy_plan = busy_plan.clone();
            let reload = reload.clone();
            busy_plan.set(Some(plan_id.clone()));
            error.set(None);
            spawn_local(async move {
                match FestiviaClient::shared(Role::User).subscribe(&plan_id).await {
                    Ok(_) => reload.emit(()),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy_plan.set(None);
            });
        })
    };

    if let Some(message) = &*error {
        return html! {
            <div class="alert alert-error"><span>{message.clone()}</span></div>
        };
    }
    let Some(plans) = &*plans else {
        return html! { <Loading /> };
    };

    let cards = plans
        .iter()
        .map(|plan| {
            let is_busy = busy_plan.as_deref() == Some(plan.id.as_str());
            let onclick = {
                let on_subscribe = on_subscribe.clone();
                let plan_id = plan.id.clone();
                Callback::from(move |_: MouseEvent| on_subscribe.emit(plan_id.clone()))
            };
            html! {
                <div class="card bg-base-200 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{plan.name.clone()}</h2>
                        <p>{plan.description.clone()}</p>
                        <p class="font-mono">
                            {format!("{:.2} / {} days", plan.price, plan.duration_days)}
                        </p>
                        <div class="card-actions justify-end">
                            <button
                                class="btn btn-primary btn-sm"
                                disabled={!plan.is_active || is_busy}
                                {onclick}
                            >
                                {if is_busy { "Subscribing..." } else { "Subscribe" }}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Subscriptions"}</h1>
            if plans.is_empty() {
                <p class="opacity-70">{"No plans are on offer right now."}</p>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">{cards}</div>
            }
        </div>
    }
}
