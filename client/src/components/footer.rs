use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <span class="footer__name">"LegalCloud Advisor"</span>
                    <p class="footer__tagline">
                        "Accessible legal guidance and case management for clients and legal professionals."
                    </p>
                </div>
                <ul class="footer__links">
                    <li><a href="/">"Home"</a></li>
                    <li><a href="/legal-ai">"Legal AI"</a></li>
                    <li><a href="/register">"Create an account"</a></li>
                </ul>
                <p class="footer__disclaimer">
                    "Information on this site is general guidance and not legal advice."
                </p>
            </div>
        </footer>
    }
}
