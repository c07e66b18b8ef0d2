use std::rc::Rc;

use gallery_runtime::{
    current_boot_config, GalleryProvider, HeroSection, IconGallery, SiteFooter,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use motion_icons::{LinkProps, NavigationLink};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Custom Icons Collection" />
        <Meta
            name="description"
            content="Handcrafted, hover-animated SVG icon components built with Leptos."
        />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=GalleryEntry />
                </Routes>
            </main>
        </Router>
    }
}

/// Navigation capability backed by the client-side router.
///
/// Forwards the link bag's destination to the router anchor and renders the
/// wrapped content unchanged. Extra attributes in the bag are not supported
/// by the router anchor and are ignored here.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterLink;

impl NavigationLink for RouterLink {
    fn wrap(&self, props: LinkProps, children: View) -> View {
        let href = props.to.unwrap_or_else(|| "/".to_string());
        view! { <A href=href>{children}</A> }.into_view()
    }
}

#[component]
pub fn GalleryEntry() -> impl IntoView {
    let boot = current_boot_config();
    let home_link: Rc<dyn NavigationLink> = Rc::new(RouterLink);

    view! {
        <GalleryProvider boot=boot>
            <HeroSection />
            <IconGallery />
            <SiteFooter home_link=home_link />
        </GalleryProvider>
    }
}
