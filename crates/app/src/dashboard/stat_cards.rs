use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCircleCheck, LdCircleX, LdFileText, LdTriangleAlert, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{DashboardStat, Trend};
use shared_ui::{Card, CardContent};

/// Row of summary cards in a responsive grid.
#[component]
pub fn StatCards(stats: Vec<DashboardStat>) -> Element {
    rsx! {
        div { class: "stats-grid",
            for (idx, stat) in stats.into_iter().enumerate() {
                StatCard { key: "{stat.title}", position: idx, stat }
            }
        }
    }
}

#[component]
fn StatCard(position: usize, stat: DashboardStat) -> Element {
    let trend_class = match stat.trend {
        Trend::Positive => "stat-change positive",
        Trend::Negative => "stat-change negative",
    };

    rsx! {
        Card { class: "stat-card",
            CardContent {
                div { class: "stat-card-body",
                    div {
                        p { class: "stat-title", "{stat.title}" }
                        p { class: "stat-value", "{stat.value}" }
                        p { class: trend_class, "{stat.change}" }
                    }
                    div { class: "stat-icon", {stat_icon(position)} }
                }
            }
        }
    }
}

fn stat_icon(position: usize) -> Element {
    match position {
        0 => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 22, height: 22 } },
        1 => rsx! { Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 22, height: 22 } },
        2 => rsx! { Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 22, height: 22 } },
        3 => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 } },
        _ => rsx! { Icon::<LdCircleX> { icon: LdCircleX, width: 22, height: 22 } },
    }
}
