use yew::prelude::*;

use super::scroll_to_section;
use crate::data;
use crate::hooks::use_navigation;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_navigation(&data::SECTION_IDS);
    let state = nav.state.clone();

    let on_toggle = {
        let toggle = nav.toggle_menu.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    // Clicking any link scrolls to its section and collapses the overlay.
    let nav_link = |section: &'static str| {
        let close = nav.close_menu.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            scroll_to_section(section);
            close.emit(());
        })
    };

    let navbar_css = r#"
        .navbar {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 50;
            transition: background 0.3s ease, box-shadow 0.3s ease;
            background: transparent;
        }
        .navbar.scrolled {
            background: rgba(10, 10, 26, 0.92);
            backdrop-filter: blur(12px);
            box-shadow: 0 2px 16px rgba(0, 0, 0, 0.4);
        }
        .navbar-inner {
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 1.5rem;
            height: 5rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .navbar-logo {
            font-size: 1.5rem;
            font-weight: 700;
            color: #fff;
            text-decoration: none;
        }
        .navbar-links {
            display: flex;
            align-items: center;
            gap: 2rem;
        }
        .nav-link {
            color: #ccc;
            text-decoration: none;
            padding: 0.5rem 0.75rem;
            border-radius: 8px;
            transition: color 0.3s ease;
        }
        .nav-link:hover {
            color: #7EB2FF;
        }
        .nav-link.active {
            color: #7EB2FF;
            background: rgba(126, 178, 255, 0.12);
        }
        .navbar-cta {
            padding: 0.6rem 1.4rem;
            border: none;
            border-radius: 10px;
            background: #7EB2FF;
            color: #0a0a1a;
            font-weight: 600;
            cursor: pointer;
        }
        .menu-button {
            display: none;
            background: none;
            border: none;
            cursor: pointer;
            padding: 0.5rem;
        }
        .menu-button span {
            display: block;
            width: 24px;
            height: 2px;
            margin: 5px 0;
            background: #fff;
            border-radius: 2px;
            transition: transform 0.3s ease, opacity 0.3s ease;
        }
        .menu-button.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
        .menu-button.open span:nth-child(2) { opacity: 0; }
        .menu-button.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
        .mobile-menu {
            display: none;
            flex-direction: column;
            padding: 1rem 1.5rem 1.5rem;
            background: rgba(10, 10, 26, 0.97);
            border-top: 1px solid rgba(255, 255, 255, 0.08);
        }
        .mobile-menu .nav-link {
            padding: 0.9rem 0.75rem;
        }
        .scroll-progress {
            position: absolute;
            bottom: 0;
            left: 0;
            height: 2px;
            width: 100%;
            background: linear-gradient(90deg, #7EB2FF, #B388FF);
            transform-origin: 0 50%;
            transition: transform 0.1s linear;
        }
        @media (max-width: 768px) {
            .navbar-links, .navbar-cta { display: none; }
            .menu-button { display: block; }
            .mobile-menu { display: flex; }
        }
    "#;

    html! {
        <nav
            class={classes!("navbar", state.is_scrolled.then_some("scrolled"))}
            role="navigation"
            aria-label="Main navigation"
        >
            <style>{navbar_css}</style>
            <div class="navbar-inner">
                <a href="#home" class="navbar-logo" onclick={nav_link("home")}>
                    { data::LOGO }
                </a>
                <div class="navbar-links">
                    {
                        for data::NAV_ITEMS.iter().map(|item| {
                            let active = state.active_section == item.section;
                            html! {
                                <a
                                    href={format!("#{}", item.section)}
                                    class={classes!("nav-link", active.then_some("active"))}
                                    aria-current={active.then_some("page")}
                                    onclick={nav_link(item.section)}
                                >
                                    { item.label }
                                </a>
                            }
                        })
                    }
                </div>
                <button class="navbar-cta" onclick={nav_link(data::NAV_CTA.section)}>
                    { data::NAV_CTA.label }
                </button>
                <button
                    class={classes!("menu-button", state.menu_open.then_some("open"))}
                    aria-label="Toggle mobile menu"
                    aria-expanded={if state.menu_open { "true" } else { "false" }}
                    onclick={on_toggle}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if state.menu_open {
                <div id="mobile-menu" class="mobile-menu">
                    {
                        for data::NAV_ITEMS.iter().map(|item| {
                            let active = state.active_section == item.section;
                            html! {
                                <a
                                    href={format!("#{}", item.section)}
                                    class={classes!("nav-link", active.then_some("active"))}
                                    onclick={nav_link(item.section)}
                                >
                                    { item.label }
                                </a>
                            }
                        })
                    }
                </div>
            }
            if state.is_scrolled {
                <div
                    class="scroll-progress"
                    style={format!("transform: scaleX({:.4});", state.scroll_progress)}
                ></div>
            }
        </nav>
    }
}
