use dioxus::prelude::*;
use humanoid_book_site::content::{lint, SiteContent};
use humanoid_book_site::pages::{Home, Overview};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/overview")]
    Overview {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("failed to initialize logger: {err}");
    }

    let content = match SiteContent::bundled() {
        Ok(content) => content,
        Err(err) => {
            tracing::error!(%err, "cannot start without site content");
            return;
        }
    };

    for finding in lint::check(&content) {
        tracing::warn!(%finding, "content lint");
    }
    tracing::info!(
        chapters = content.interactive_hero.chapters.len(),
        footer_links = content.footer.link_count(),
        "site content loaded"
    );

    dioxus::LaunchBuilder::new().with_context(content).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
