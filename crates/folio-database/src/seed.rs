//! Sample gallery used to populate an empty store.

use folio_entity::photo::{Category, NewPhoto};

/// The sample photos, in insertion order (the last one ends up on top).
pub fn sample_photos() -> Vec<NewPhoto> {
    let entries: [(&str, &str, Category, &str); 12] = [
        (
            "Mountain Sunrise",
            "Sunrise over mountain peaks",
            Category::Landscape,
            "mountain1/800/1200",
        ),
        (
            "Coastal Sunset",
            "Sunset over the sea under heavy clouds",
            Category::Landscape,
            "coast1/800/600",
        ),
        (
            "Lake Reflection",
            "Mountains mirrored in still water",
            Category::Landscape,
            "lake1/800/800",
        ),
        (
            "Urban Nightscape",
            "City lights on wet streets",
            Category::Urban,
            "city1/800/600",
        ),
        (
            "Modern Architecture",
            "Glass facade of a contemporary building",
            Category::Urban,
            "building1/800/1000",
        ),
        (
            "Geometric Facade",
            "Repeating window pattern",
            Category::Urban,
            "facade1/800/1200",
        ),
        (
            "Portrait in Golden Hour",
            "Portrait lit by low evening sun",
            Category::Portrait,
            "portrait1/800/1000",
        ),
        (
            "Studio Portrait",
            "Studio portrait on a dark backdrop",
            Category::Portrait,
            "portrait2/800/1200",
        ),
        (
            "Natural Light Portrait",
            "Window-lit portrait",
            Category::Portrait,
            "portrait3/800/800",
        ),
        (
            "Forest Path",
            "Trail through a green forest",
            Category::Nature,
            "forest1/800/1200",
        ),
        (
            "Autumn Colors",
            "Red and orange leaves",
            Category::Nature,
            "autumn1/800/600",
        ),
        (
            "Morning Mist",
            "Fog over a meadow at dawn",
            Category::Nature,
            "mist1/800/500",
        ),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (title, alt, category, path))| {
            let photo = NewPhoto::new(
                title,
                alt,
                category,
                format!("https://picsum.photos/seed/{path}"),
            );
            // Landscapes double as homepage backgrounds.
            if category == Category::Landscape && i % 2 == 0 {
                photo.hero()
            } else {
                photo
            }
        })
        .collect()
}
