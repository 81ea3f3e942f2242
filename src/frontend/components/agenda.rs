use leptos::prelude::*;

use crate::models::AgendaItem;

#[component]
fn AgendaEntry(item: AgendaItem) -> impl IntoView {
    let class = format!("agenda-item tone-{}", item.tone);
    let day = item.day_label();
    let month = item.month_label();

    let lines = item
        .title_lines
        .into_iter()
        .map(|line| view! { <span class="title-line">{line}</span> })
        .collect_view();

    let meeting = item.meeting.map(|meeting| {
        view! {
            <p class="agenda-meeting">
                <span class="meeting-theme">{meeting.theme}</span>
                {meeting.with_person.map(|person| view! { <span class="meeting-with">" avec " {person}</span> })}
            </p>
        }
    });

    view! {
        <li class=class data-id=item.id>
            <div class="agenda-date">
                <span class="agenda-day">{day}</span>
                <span class="agenda-month">{month}</span>
            </div>
            <div class="agenda-body">
                <h3 class="agenda-title">
                    {lines}
                    {item.title_emphasis.map(|emphasis| view! { <em>{emphasis}</em> })}
                </h3>
                {meeting}
                <p class="agenda-location">
                    {item.location}
                    {item.time_label.map(|time| view! { <span class="agenda-time">" · " {time}</span> })}
                </p>
            </div>
        </li>
    }
}

/// Upcoming events, earliest first.
#[component]
pub fn Agenda(items: Vec<AgendaItem>) -> impl IntoView {
    view! {
        <section id="agenda" class="section agenda">
            <h2 class="section-title">"Agenda"</h2>
            <ol class="agenda-list">
                {items.into_iter().map(|item| view! { <AgendaEntry item=item/> }).collect_view()}
            </ol>
        </section>
    }
}
