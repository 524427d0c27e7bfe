use crate::components::counter_game::CounterGame;
use crate::components::faq::Faq;
use crate::components::nav_menu::NavMenu;
use crate::components::project_modal::ProjectModal;
use crate::components::project_tabs::ProjectTabs;
use crate::components::site_footer::SiteFooter;
use crate::components::skill_slider::SkillSlider;
use crate::components::theme_toggle::ThemeToggle;
use crate::core::theme::ThemeMode;
use crate::features::contact::view::ContactFormView;
use gloo::console;
use gloo::utils::document;
use preferences::{load_theme, persist_theme};
use yew::prelude::*;

mod preferences;

#[function_component(FolioApp)]
pub fn folio_app() -> Html {
    let theme = use_state(load_theme);

    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                persist_theme(theme);
                || ()
            },
            theme,
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggle()))
    };

    html! {
        <div class="min-h-screen bg-base-200 text-base-content">
            <header class="navbar bg-base-100 shadow">
                <div class="flex-1">
                    <a class="btn btn-ghost text-xl" href="#about">{"Folio"}</a>
                </div>
                <div class="flex-none gap-2">
                    <NavMenu />
                    <ThemeToggle theme={*theme} on_toggle={on_toggle_theme} />
                </div>
            </header>
            <main class="container mx-auto grid gap-6 p-6 md:grid-cols-2">
                <ProjectTabs />
                <CounterGame />
                <SkillSlider />
                <ProjectModal />
                <Faq />
                <section id="contact" class="md:col-span-2">
                    <h2 class="text-2xl font-bold mb-4">{"Get in touch"}</h2>
                    <ContactFormView />
                </section>
            </main>
            <SiteFooter />
        </div>
    }
}

fn apply_theme(theme: ThemeMode) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
        console::error!("theme attribute update failed", err);
    }
}

/// Mount the app into `#root`, falling back to `<body>`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<FolioApp>::with_root(root).render();
    } else {
        yew::Renderer::<FolioApp>::new().render();
    }
}
