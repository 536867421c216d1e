use yew::prelude::*;
use log::{info, Level};

mod components;
mod config;
mod transport;
mod wizard;

use components::{footer::Footer, form_wizard::FormWizard, nav::Nav};

const PILLARS: [(&str, &str); 3] = [
    (
        "Diagnóstico",
        "Entendemos cómo se toman hoy las decisiones en su organización y dónde se traban.",
    ),
    (
        "Diseño",
        "Construimos estructuras de gobierno y procesos de decisión a la medida de su realidad.",
    ),
    (
        "Acompañamiento",
        "Sostenemos el cambio junto a sus equipos hasta que la nueva forma de decidir se vuelve propia.",
    ),
];

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <main>
                <section id="inicio" class="hero">
                    <div class="hero-content">
                        <h1 class="hero-logo">{"BECTA Consulting"}</h1>
                        <p class="hero-subtitle">{"Arquitectura viva de la decisión"}</p>
                    </div>
                </section>
                <section id="enfoque" class="section">
                    <h2 class="section-title">{"Enfoque"}</h2>
                    <p class="emphasis-text">
                        {"Las organizaciones no fallan por falta de información, sino por cómo deciden con ella."}
                    </p>
                </section>
                <section id="pilares" class="section">
                    <h2 class="section-title">{"Pilares"}</h2>
                    <div class="pillars">
                        { for PILLARS.iter().map(|(title, text)| html! {
                            <article class="pillar">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </article>
                        }) }
                    </div>
                </section>
                <section id="contacto" class="section section-contact">
                    <h2 class="section-title">{"Conversemos"}</h2>
                    <p>{"Cuéntenos sobre su organización en cuatro pasos breves."}</p>
                    <FormWizard />
                </section>
            </main>
            <Footer />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    gloo_console::log!("%cBECTA Consulting", "font-size: 24px; font-weight: bold; color: #1a3a4a;");
    gloo_console::log!("%cArquitectura viva de la decisión", "font-size: 14px; color: #5a7a8a;");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
