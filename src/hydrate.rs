//! Content hydrator: turn a record collection into markup and swap it into
//! a container.
//!
//! The markup for the whole collection is built before the container is
//! touched, so a failing template leaves the previous content in place.

use std::convert::Infallible;

/// A node whose content can be replaced wholesale.
pub trait RenderTarget {
    fn replace_markup(&self, markup: &str);
    fn markup(&self) -> String;
}

/// Finds render targets by id in the current document.
pub trait ContainerLookup {
    type Target: RenderTarget;

    fn container(&self, id: &str) -> Option<Self::Target>;
}

/// Replace the content of `container_id` with `template` applied to every
/// record, in input order.
///
/// Returns `Ok(None)` when the container is not on this page, `Ok(Some(_))`
/// with the updated container otherwise. A template error aborts before any
/// mutation.
pub fn render<L, R, F, E>(
    lookup: &L,
    container_id: &str,
    records: &[R],
    mut template: F,
) -> Result<Option<L::Target>, E>
where
    L: ContainerLookup,
    F: FnMut(&R) -> Result<String, E>,
{
    let Some(target) = lookup.container(container_id) else {
        log::debug!("no #{container_id} on this page, skipping render");
        return Ok(None);
    };
    let mut markup = String::new();
    for record in records {
        markup.push_str(&template(record)?);
    }
    target.replace_markup(&markup);
    log::debug!("rendered {} record(s) into #{container_id}", records.len());
    Ok(Some(target))
}

/// `render` for templates that cannot fail.
pub fn render_all<L, R>(
    lookup: &L,
    container_id: &str,
    records: &[R],
    template: impl Fn(&R) -> String,
) -> Option<L::Target>
where
    L: ContainerLookup,
{
    let rendered: Result<_, Infallible> =
        render(lookup, container_id, records, |r| Ok(template(r)));
    match rendered {
        Ok(target) => target,
        Err(never) => match never {},
    }
}

/// Replace a container's content with a single fragment.
pub fn insert_fragment<L: ContainerLookup>(
    lookup: &L,
    container_id: &str,
    markup: &str,
) -> Option<L::Target> {
    render_all(lookup, container_id, &[markup], |m| m.to_string())
}
