//! Admin dashboard counts.

use serde::Serialize;

use folio_entity::photo::{Category, Photo};

/// Photo count for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    /// Category.
    pub category: Category,
    /// Photos in the category.
    pub count: usize,
    /// Share of all photos, one decimal place.
    pub percentage: f64,
}

/// Summary counts over the whole gallery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoStats {
    /// All photos.
    pub total: usize,
    /// Photos shown publicly.
    pub visible: usize,
    /// Soft-deleted photos.
    pub hidden: usize,
    /// Photos eligible as homepage hero.
    pub hero_eligible: usize,
    /// Non-empty categories, largest first.
    pub categories: Vec<CategoryCount>,
}

impl PhotoStats {
    /// Compute stats over `photos`.
    pub fn from_photos(photos: &[Photo]) -> Self {
        let total = photos.len();
        let hidden = photos.iter().filter(|p| p.hidden).count();
        let hero_eligible = photos.iter().filter(|p| p.hero_eligible).count();

        let mut categories: Vec<CategoryCount> = Category::ALL
            .into_iter()
            .map(|category| {
                let count = photos.iter().filter(|p| p.category == category).count();
                CategoryCount {
                    category,
                    count,
                    percentage: percentage(count, total),
                }
            })
            .filter(|c| c.count > 0)
            .collect();
        // Stable sort keeps the canonical category order among ties.
        categories.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            total,
            visible: total - hidden,
            hidden,
            hero_eligible,
            categories,
        }
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}
