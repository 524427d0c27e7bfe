use crate::core::widgets::footer_text;
use js_sys::Date;
use yew::prelude::*;

const OWNER: &str = "Folio";

fn current_year() -> u32 {
    Date::new_0().get_full_year()
}

#[function_component(SiteFooter)]
pub(crate) fn site_footer() -> Html {
    let year = use_memo(|_| current_year(), ());
    html! {
        <footer class="footer footer-center p-10 bg-base-100 text-base-content">
            <p id="footer-year">{footer_text(*year, OWNER)}</p>
        </footer>
    }
}
