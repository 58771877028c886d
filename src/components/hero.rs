use yew::prelude::*;

use super::decor::{GradientText, NumberTicker, ShimmerButton};
use super::scroll_to_section;
use crate::data;

#[function_component(Hero)]
pub fn hero() -> Html {
    let go_to = |section: &'static str| {
        Callback::from(move |_: MouseEvent| scroll_to_section(section))
    };

    let hero_css = r#"
        .hero {
            position: relative;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
            text-align: center;
            padding: 6rem 1.5rem 4rem;
        }
        .hero-glow {
            position: absolute;
            border-radius: 50%;
            filter: blur(80px);
            animation: hero-pulse 6s ease-in-out infinite;
            pointer-events: none;
        }
        .hero-glow.one {
            top: 20%;
            left: 20%;
            width: 18rem;
            height: 18rem;
            background: rgba(126, 178, 255, 0.25);
        }
        .hero-glow.two {
            bottom: 15%;
            right: 18%;
            width: 24rem;
            height: 24rem;
            background: rgba(179, 136, 255, 0.2);
            animation-delay: 2s;
        }
        @keyframes hero-pulse {
            0%, 100% { opacity: 0.6; }
            50% { opacity: 1; }
        }
        .hero-content {
            position: relative;
            max-width: 60rem;
            z-index: 1;
        }
        .hero-badge {
            display: inline-block;
            padding: 0.5rem 1.25rem;
            border: 1px solid rgba(126, 178, 255, 0.3);
            border-radius: 999px;
            font-size: 0.9rem;
            margin-bottom: 2rem;
            backdrop-filter: blur(4px);
        }
        .hero-title {
            font-size: clamp(2.5rem, 7vw, 5rem);
            font-weight: 800;
            line-height: 1.1;
            color: #fff;
            margin-bottom: 2rem;
        }
        .hero-description {
            font-size: 1.25rem;
            color: #bbb;
            max-width: 44rem;
            margin: 0 auto 3rem;
            line-height: 1.6;
        }
        .hero-actions {
            display: flex;
            gap: 1rem;
            justify-content: center;
            flex-wrap: wrap;
            margin-bottom: 4rem;
        }
        .hero-secondary {
            padding: 1rem 2rem;
            border: 1px solid rgba(255, 255, 255, 0.25);
            border-radius: 12px;
            background: transparent;
            color: #fff;
            font-size: 1.1rem;
            cursor: pointer;
            transition: border-color 0.3s ease;
        }
        .hero-secondary:hover {
            border-color: #7EB2FF;
        }
        .hero-stats {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr));
            gap: 2rem;
        }
        .stat .ticker-value {
            display: block;
            font-size: 2rem;
            font-weight: 700;
            color: #7EB2FF;
        }
        .stat-label {
            color: #999;
            font-size: 0.9rem;
        }
    "#;

    html! {
        <section id="home" class="hero">
            <style>{hero_css}</style>
            <div class="hero-glow one"></div>
            <div class="hero-glow two"></div>
            <div class="hero-content">
                <div class="hero-badge">
                    <GradientText>{ data::HERO.badge }</GradientText>
                </div>
                <h1 class="hero-title">
                    <span>{ data::HERO.title_main }</span>
                    {" "}
                    <GradientText>{ data::HERO.title_highlight }</GradientText>
                </h1>
                <p class="hero-description">{ data::HERO.description }</p>
                <div class="hero-actions">
                    <ShimmerButton onclick={go_to(data::HERO.primary.section)}>
                        { data::HERO.primary.label }
                    </ShimmerButton>
                    <button class="hero-secondary" onclick={go_to(data::HERO.secondary.section)}>
                        { data::HERO.secondary.label }
                    </button>
                </div>
                <div class="hero-stats">
                    {
                        for data::HERO.stats.iter().map(|stat| html! {
                            <div class="stat">
                                <NumberTicker value={stat.value} suffix={stat.suffix} />
                                <span class="stat-label">{ stat.label }</span>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
