//! Fetch, validate, render: the per-section hydration steps.
//!
//! Generic over the transport and the document so the same steps run in the
//! browser and in native tests. Loaded records are returned from the loader
//! and handed straight to the hydrator; nothing is cached between calls.

use crate::config::SiteConfig;
use crate::content::{MainContent, UpdatesContent};
use crate::fragment::{Expect, FragmentLoader, Transport};
use crate::hydrate::{ContainerLookup, insert_fragment, render_all};
use crate::templates;

/// Fetch an HTML partial into a container. `None` if either is missing.
pub async fn load_fragment_into<T, L>(
    loader: &FragmentLoader<T>,
    lookup: &L,
    path: &str,
    container_id: &str,
) -> Option<L::Target>
where
    T: Transport,
    L: ContainerLookup,
{
    let html = loader.load_fragment(path, Expect::Html).await.into_html()?;
    insert_fragment(lookup, container_id, &html)
}

/// Rendered containers of the home page (either may be absent).
pub struct MainSections<N> {
    pub testimonials: Option<N>,
    pub weapons: Option<N>,
}

pub async fn hydrate_main<T, L>(
    loader: &FragmentLoader<T>,
    lookup: &L,
    config: &SiteConfig,
) -> Option<MainSections<L::Target>>
where
    T: Transport,
    L: ContainerLookup,
{
    let content: MainContent = loader.load_json(&config.main_content_path).await?;
    let ids = &config.containers;
    Some(MainSections {
        testimonials: render_all(lookup, &ids.testimonials, &content.testimonials, templates::testimonial_card),
        weapons: render_all(lookup, &ids.weapons, &content.weapons, templates::weapon_card),
    })
}

/// Rendered containers of the updates page. Update cards still need their
/// expand toggles bound.
pub struct UpdatesSections<N> {
    pub battle_updates: Option<N>,
    pub chronicles: Option<N>,
}

pub async fn hydrate_updates<T, L>(
    loader: &FragmentLoader<T>,
    lookup: &L,
    config: &SiteConfig,
) -> Option<UpdatesSections<L::Target>>
where
    T: Transport,
    L: ContainerLookup,
{
    let content: UpdatesContent = loader.load_json(&config.updates_content_path).await?;
    let ids = &config.containers;
    Some(UpdatesSections {
        battle_updates: render_all(
            lookup,
            &ids.battle_updates,
            &content.battle_updates,
            templates::battle_update_card,
        ),
        chronicles: render_all(lookup, &ids.chronicles, &content.chronicles, templates::chronicle_card),
    })
}
