use yew::prelude::*;
use chrono::Datelike;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-content">
                <p class="footer-brand">{"BECTA Consulting"}</p>
                <p class="footer-tagline">{"Arquitectura viva de la decisión"}</p>
                <p class="footer-copy">
                    {"© "}<span class="current-year">{year}</span>{" BECTA Consulting. Todos los derechos reservados."}
                </p>
            </div>
        </footer>
    }
}
