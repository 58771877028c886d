use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::services::Services;
use crate::config;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let landing_css = r#"
        .landing-page {
            background: #0a0a1a;
            min-height: 100vh;
        }
        .page-section {
            padding: 6rem 1.5rem;
            max-width: 1000px;
            margin: 0 auto;
            text-align: center;
        }
        .page-section h2 {
            font-size: 2.5rem;
            margin-bottom: 1.5rem;
            background: linear-gradient(45deg, #fff, #7EB2FF);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .page-section p {
            color: #bbb;
            font-size: 1.15rem;
            line-height: 1.7;
            max-width: 42rem;
            margin: 0 auto 1.5rem;
        }
        .contact-cta {
            padding: 1rem 2.5rem;
            border: none;
            border-radius: 12px;
            background: #7EB2FF;
            color: #0a0a1a;
            font-size: 1.1rem;
            font-weight: 600;
            cursor: pointer;
        }
        .projects-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
            gap: 1.5rem;
            margin-top: 2rem;
        }
        .project-card {
            padding: 2rem;
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 16px;
            background: rgba(255, 255, 255, 0.03);
            color: #ccc;
        }
        .landing-footer {
            padding: 2rem 1.5rem;
            text-align: center;
            color: #666;
            border-top: 1px solid rgba(255, 255, 255, 0.06);
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{landing_css}</style>
            <Navbar />
            <Hero />
            <Services />

            <section id="projects" class="page-section">
                <h2>{"Selected Work"}</h2>
                <p>{"A snapshot of what we have shipped lately, from storefronts to design systems."}</p>
                <div class="projects-grid">
                    <div class="project-card">{"E-commerce replatform — 3x faster checkout"}</div>
                    <div class="project-card">{"Fintech dashboard — realtime analytics at scale"}</div>
                    <div class="project-card">{"Health app — 4.9★ across app stores"}</div>
                </div>
            </section>

            <section id="about" class="page-section">
                <h2>{"About "}{ config::SITE_NAME }</h2>
                <p>{"We are a small team of engineers and designers who believe great \
                    software is equal parts craft and empathy. Every project gets a \
                    senior team, direct communication and no hand-offs."}</p>
            </section>

            <section id="contact" class="page-section">
                <h2>{"Let's Build Something"}</h2>
                <p>{"Tell us about your project and we'll get back to you within one business day."}</p>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                    <button class="contact-cta">{"hello@codeflick.dev"}</button>
                </a>
            </section>

            <footer class="landing-footer">
                { format!("© 2026 {}. All rights reserved.", config::SITE_NAME) }
            </footer>
        </div>
    }
}
