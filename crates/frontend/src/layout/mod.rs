pub mod header;

use header::Header;
use leptos::prelude::*;

/// Page frame shared by the landing page and the dashboard.
///
/// ```text
/// +------------------------------------------+
/// |                Header                    |
/// +------------------------------------------+
/// |                content                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
