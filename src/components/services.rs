use yew::prelude::*;

use crate::data;

#[function_component(Services)]
pub fn services() -> Html {
    let services_css = r#"
        .services-section {
            padding: 6rem 1.5rem;
            max-width: 1200px;
            margin: 0 auto;
        }
        .services-section h2 {
            font-size: 2.5rem;
            text-align: center;
            margin-bottom: 3rem;
            background: linear-gradient(45deg, #fff, #7EB2FF);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .services-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
            gap: 1.5rem;
        }
        .service-card {
            padding: 2rem;
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 16px;
            background: rgba(255, 255, 255, 0.03);
            transition: transform 0.3s ease, border-color 0.3s ease;
        }
        .service-card:hover {
            transform: translateY(-4px);
            border-color: rgba(126, 178, 255, 0.4);
        }
        .service-icon {
            font-size: 2rem;
        }
        .service-card h3 {
            color: #fff;
            margin: 1rem 0 0.5rem;
        }
        .service-card p {
            color: #aaa;
            line-height: 1.5;
        }
        .service-card ul {
            list-style: none;
            padding: 0;
            margin: 1rem 0;
        }
        .service-card li {
            color: #ccc;
            padding: 0.25rem 0;
        }
        .service-card li::before {
            content: "✓ ";
            color: #7EB2FF;
        }
        .service-price {
            color: #7EB2FF;
            font-weight: 600;
        }
    "#;

    html! {
        <section id="services" class="services-section">
            <style>{services_css}</style>
            <h2>{"What We Do"}</h2>
            <div class="services-grid">
                {
                    for data::SERVICES.iter().map(|service| html! {
                        <div class="service-card" key={service.id}>
                            <span class="service-icon">{ service.icon }</span>
                            <h3>{ service.title }</h3>
                            <p>{ service.description }</p>
                            <ul>
                                { for service.features.iter().map(|feature| html! {
                                    <li>{ *feature }</li>
                                }) }
                            </ul>
                            <span class="service-price">{"From "}{ service.starting_price }</span>
                        </div>
                    })
                }
            </div>
        </section>
    }
}
