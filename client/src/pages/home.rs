//! Dashboard home: stat cards, recent activity, sales pipeline.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::home::{HomeState, Trend};
use crate::util::format::format_dollars;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = HomeState::default();
    let total = state.pipeline_total_cents();
    let deal_count = state.pipeline_deal_count();

    let stats = state
        .stats
        .iter()
        .map(|stat| {
            view! {
                <StatCard
                    label=stat.label
                    value=stat.value
                    delta=stat.delta
                    trend_up={stat.trend == Trend::Up}
                />
            }
        })
        .collect_view();

    let activity = state
        .activity
        .iter()
        .map(|item| {
            view! {
                <li class="activity__item">
                    <span class="activity__icon" aria-hidden="true">{item.kind.icon()}</span>
                    <span class="activity__text">{item.text}</span>
                    <span class="activity__time">{item.time}</span>
                </li>
            }
        })
        .collect_view();

    let pipeline = state
        .pipeline
        .iter()
        .map(|stage| {
            let width = format!("{}%", state.stage_width_pct(stage));
            view! {
                <div class="pipeline__row">
                    <span class="pipeline__name">{stage.name}</span>
                    <span class="pipeline__bar">
                        <span class="pipeline__fill" style:width=width></span>
                    </span>
                    <span class="pipeline__meta">
                        {format!("{} deals · {}", stage.deals, format_dollars(stage.value_cents))}
                    </span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="page home-page">
            <div class="stat-grid">{stats}</div>
            <div class="home-page__panels">
                <div class="panel">
                    <h2 class="panel__title">"Recent Activity"</h2>
                    <ul class="activity">{activity}</ul>
                </div>
                <div class="panel">
                    <h2 class="panel__title">"Sales Pipeline"</h2>
                    <p class="panel__subtitle">
                        {format!("{deal_count} open deals worth {}", format_dollars(total))}
                    </p>
                    <div class="pipeline">{pipeline}</div>
                </div>
            </div>
        </section>
    }
}
