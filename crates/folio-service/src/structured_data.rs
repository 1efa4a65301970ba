//! schema.org JSON-LD for search engines.

use serde_json::{Value, json};

use folio_core::config::SiteConfig;
use folio_entity::{Locale, Photo};

/// Images listed in the gallery schema.
pub const GALLERY_SCHEMA_LIMIT: usize = 10;

fn base_url(site: &SiteConfig) -> &str {
    site.base_url.trim_end_matches('/')
}

/// Public detail page of a photo.
pub fn photo_page_url(site: &SiteConfig, photo: &Photo) -> String {
    format!("{}/photo/{}", base_url(site), photo.slug())
}

fn author(site: &SiteConfig) -> Value {
    json!({ "@type": "Person", "name": site.author })
}

/// The photographer.
pub fn person_schema(site: &SiteConfig) -> Value {
    let base = base_url(site);
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "@id": format!("{base}/#person"),
        "name": site.author,
        "url": base,
        "jobTitle": "Photographer",
        "sameAs": site.same_as,
    })
}

/// The site itself.
pub fn website_schema(site: &SiteConfig) -> Value {
    let base = base_url(site);
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "@id": format!("{base}/#website"),
        "name": site.name,
        "description": site.description,
        "url": base,
        "inLanguage": Locale::ALL.iter().map(Locale::as_str).collect::<Vec<_>>(),
        "publisher": { "@id": format!("{base}/#person") },
    })
}

/// A single photo.
pub fn image_object_schema(site: &SiteConfig, photo: &Photo, locale: Locale) -> Value {
    let url = photo_page_url(site, photo);
    json!({
        "@context": "https://schema.org",
        "@type": "ImageObject",
        "@id": url,
        "url": url,
        "contentUrl": photo.src,
        "name": photo.title,
        "description": photo.alt,
        "author": author(site),
        "creditText": site.author,
        "keywords": photo.category.label(locale),
        "inLanguage": locale.as_str(),
    })
}

/// The public gallery, listing the first [`GALLERY_SCHEMA_LIMIT`] photos.
pub fn image_gallery_schema(site: &SiteConfig, photos: &[Photo]) -> Value {
    let images: Vec<Value> = photos
        .iter()
        .take(GALLERY_SCHEMA_LIMIT)
        .map(|photo| {
            json!({
                "@type": "ImageObject",
                "name": photo.title,
                "contentUrl": photo.src,
                "description": photo.alt,
                "url": photo_page_url(site, photo),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ImageGallery",
        "name": site.name,
        "description": site.description,
        "url": base_url(site),
        "author": author(site),
        "image": images,
    })
}
