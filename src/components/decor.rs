//! Decorative building blocks: animated gradient text, a shimmer CTA
//! button and a count-up number ticker. All cosmetic, all CSS-driven
//! apart from the ticker's timer loop.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientTextProps {
    pub children: Children,
}

#[function_component(GradientText)]
pub fn gradient_text(props: &GradientTextProps) -> Html {
    let css = r#"
        .gradient-text {
            background: linear-gradient(90deg, #7EB2FF, #B388FF, #7EB2FF);
            background-size: 200% auto;
            -webkit-background-clip: text;
            background-clip: text;
            -webkit-text-fill-color: transparent;
            animation: gradient-shift 4s linear infinite;
        }
        @keyframes gradient-shift {
            to { background-position: 200% center; }
        }
    "#;
    html! {
        <span class="gradient-text">
            <style>{css}</style>
            { for props.children.iter() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShimmerButtonProps {
    pub children: Children,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub classes: Classes,
}

#[function_component(ShimmerButton)]
pub fn shimmer_button(props: &ShimmerButtonProps) -> Html {
    let css = r#"
        .shimmer-button {
            position: relative;
            overflow: hidden;
            padding: 1rem 2rem;
            border: none;
            border-radius: 12px;
            background: #7EB2FF;
            color: #0a0a1a;
            font-size: 1.1rem;
            font-weight: 600;
            cursor: pointer;
            transition: transform 0.2s ease;
        }
        .shimmer-button:hover {
            transform: scale(1.05);
        }
        .shimmer-button::after {
            content: "";
            position: absolute;
            top: 0;
            left: -150%;
            width: 50%;
            height: 100%;
            background: linear-gradient(120deg, transparent, rgba(255,255,255,0.6), transparent);
            animation: shimmer 2.5s infinite;
        }
        @keyframes shimmer {
            to { left: 150%; }
        }
    "#;
    html! {
        <button
            class={classes!("shimmer-button", props.classes.clone())}
            onclick={props.onclick.clone()}
        >
            <style>{css}</style>
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct NumberTickerProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Counts from zero up to `value` over roughly a second after mount.
#[function_component(NumberTicker)]
pub fn number_ticker(props: &NumberTickerProps) -> Html {
    let shown = use_state(|| 0u32);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |target: &u32| {
                let target = *target;
                shown.set(0);
                spawn_local(async move {
                    const STEPS: u32 = 40;
                    for step in 1..=STEPS {
                        TimeoutFuture::new(25).await;
                        shown.set(target * step / STEPS);
                    }
                });
                || ()
            },
            props.value,
        );
    }

    html! {
        <span class="ticker-value">{ *shown }{ props.suffix.clone() }</span>
    }
}
