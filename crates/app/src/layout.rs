use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdCreditCard, LdLayoutDashboard, LdLogOut, LdMenu, LdSettings, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::AVATAR_PRIMARY;
use shared_ui::{
    initials, Avatar, AvatarFallback, AvatarImage, SearchInput, Sidebar, SidebarContent,
    SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
    SidebarProvider, SidebarTrigger,
};

const BRAND: &str = "LeXi Ai";
const PROFILE_NAME: &str = "John Doe";
const UNREAD_NOTIFICATIONS: u32 = 3;

/// Sidebar + topbar frame around the page content. Navigation is
/// presentational: only "Workspaces" exists, so it is always active.
#[component]
pub fn AppShell(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "{BRAND}" }
                    }
                }

                SidebarContent {
                    SidebarMenu {
                        SidebarMenuItem {
                            SidebarMenuButton { active: true,
                                Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                "Workspaces"
                            }
                        }
                        SidebarMenuItem {
                            SidebarMenuButton {
                                Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                "Team Management"
                            }
                        }
                        SidebarMenuItem {
                            SidebarMenuButton {
                                Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 }
                                "Billings & Plans"
                            }
                        }
                        SidebarMenuItem {
                            SidebarMenuButton {
                                Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                "Settings"
                            }
                        }
                        SidebarMenuItem {
                            SidebarMenuButton {
                                Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                                "Contact Admin"
                            }
                        }
                    }
                }

                SidebarFooter {
                    SidebarMenuButton {
                        onclick: move |_| tracing::debug!("sign out pressed; no session to end"),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        "Sign Out"
                    }
                }
            }

            SidebarInset {
                Topbar {}
                div { class: "page-content", {children} }
            }
        }
    }
}

#[component]
fn Topbar() -> Element {
    rsx! {
        header { class: "topbar",
            SidebarTrigger {
                Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
            }
            div { class: "topbar-search",
                SearchInput { placeholder: "Search..." }
            }
            div { class: "topbar-actions",
                button {
                    class: "topbar-bell",
                    r#type: "button",
                    "aria-label": "Notifications",
                    Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                    if UNREAD_NOTIFICATIONS > 0 {
                        span { class: "topbar-bell-count", "{UNREAD_NOTIFICATIONS}" }
                    }
                }
                div { class: "topbar-profile",
                    Avatar {
                        AvatarImage { src: AVATAR_PRIMARY.to_string() }
                        AvatarFallback { "{initials(PROFILE_NAME)}" }
                    }
                    span { class: "topbar-profile-name", "{PROFILE_NAME}" }
                }
            }
        }
    }
}
