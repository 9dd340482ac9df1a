use dioxus::prelude::*;

mod config;
mod dashboard;
mod layout;
mod summary_task;

use dashboard::DashboardPage;
use layout::AppShell;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    config::load_config();
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(platform = client_platform(), "dashboard mounted"));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            AppShell {
                DashboardPage {}
            }
        }
    }
}
