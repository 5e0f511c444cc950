//! Product catalog: categories, special items, campaign data.
//!
//! The catalog is read-only for the engine. Campaign data arrives as JSON
//! (same shape the storefront backend emits); a built-in fallback set keeps
//! the game playable when no campaign could be loaded.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The three sort bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Nails,
    Makeup,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Nails, Category::Makeup, Category::Accessories];

    /// Display label for the bin
    pub fn label(&self) -> &'static str {
        match self {
            Category::Nails => "Unghii",
            Category::Makeup => "Machiaj",
            Category::Accessories => "Accesorii",
        }
    }

    /// Bin icon
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Nails => "💅",
            Category::Makeup => "💋",
            Category::Accessories => "✨",
        }
    }
}

/// Physical form of a product, used for card styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductForm {
    #[default]
    Bottle,
    Jar,
    Tube,
    Palette,
    Tool,
}

/// Special item tags. All of these are wildcard-matched against any
/// category input; hearts and clocks trigger side effects instead of
/// scoring, the voucher scores at a premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecialKind {
    Voucher,
    Heart,
    Clock,
}

/// Immutable catalog entry. Falling items reference products via `Arc`;
/// many items may share one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub form_factor: ProductForm,
    #[serde(default)]
    pub color_hex: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(rename = "specialType", default, skip_serializing_if = "Option::is_none")]
    pub special: Option<SpecialKind>,
}

impl Product {
    fn ordinary(
        id: &str,
        name: &str,
        category: Category,
        description: &str,
        form_factor: ProductForm,
        color_hex: &str,
        image_url: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            description: description.to_string(),
            form_factor,
            color_hex: color_hex.to_string(),
            image_url: image_url.to_string(),
            special: None,
        }
    }

    /// The one-time gift voucher. Carries a fallback category; sort logic
    /// treats it as a wildcard.
    pub fn voucher() -> Self {
        Self {
            id: "voucher_gold".to_string(),
            name: "VOUCHER CADOU -15%".to_string(),
            category: Category::Accessories,
            description: "Cupon de reducere".to_string(),
            form_factor: ProductForm::Palette,
            color_hex: "#FFD700".to_string(),
            image_url: String::new(),
            special: Some(SpecialKind::Voucher),
        }
    }

    /// Bonus-life power-up
    pub fn heart() -> Self {
        Self {
            id: "powerup_heart".to_string(),
            name: "+1 Viață".to_string(),
            category: Category::Accessories,
            description: "O inimă în plus".to_string(),
            form_factor: ProductForm::Jar,
            color_hex: "#FF0066".to_string(),
            image_url: String::new(),
            special: Some(SpecialKind::Heart),
        }
    }

    /// Time-slow power-up
    pub fn clock() -> Self {
        Self {
            id: "powerup_clock".to_string(),
            name: "Slow Time".to_string(),
            category: Category::Accessories,
            description: "Încetinește căderea".to_string(),
            form_factor: ProductForm::Jar,
            color_hex: "#4F46E5".to_string(),
            image_url: String::new(),
            special: Some(SpecialKind::Clock),
        }
    }
}

/// Campaign payload as delivered by the backend (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignData {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub products: Vec<Product>,
    #[serde(default)]
    pub grounding_urls: Vec<String>,
}

/// The session catalog: the ordinary product pool plus the three special
/// products the spawner substitutes in.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub title: String,
    pub description: String,
    products: Vec<Arc<Product>>,
    voucher: Arc<Product>,
    heart: Arc<Product>,
    clock: Arc<Product>,
}

impl Catalog {
    /// Build a catalog from campaign data. Special-tagged products in the
    /// payload are ignored; the engine supplies its own.
    pub fn from_campaign(data: CampaignData) -> Self {
        let products = data
            .products
            .into_iter()
            .filter(|p| p.special.is_none())
            .map(Arc::new)
            .collect();
        Self {
            title: data.title,
            description: data.description,
            products,
            voucher: Arc::new(Product::voucher()),
            heart: Arc::new(Product::heart()),
            clock: Arc::new(Product::clock()),
        }
    }

    /// Parse a campaign JSON payload
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<CampaignData>(json).map(Self::from_campaign)
    }

    /// Built-in festive product set used when no campaign is available
    pub fn fallback() -> Self {
        let products = vec![
            Product::ordinary(
                "n1",
                "ART Collection - Interstellar",
                Category::Nails,
                "Oja semipermanenta",
                ProductForm::Bottle,
                "#EBB0A0",
                "assets/products/interstellar.jpg",
            ),
            Product::ordinary(
                "n2",
                "Perfect Ruby Necklace",
                Category::Nails,
                "Oja semipermanenta",
                ProductForm::Bottle,
                "#800020",
                "assets/products/ruby-necklace.jpg",
            ),
            Product::ordinary(
                "n3",
                "Endless Red",
                Category::Nails,
                "Rubber Base",
                ProductForm::Bottle,
                "#800020",
                "assets/products/endless-red.jpg",
            ),
            Product::ordinary(
                "n4",
                "Ruby Collection - Flirty",
                Category::Nails,
                "Oja semipermanenta",
                ProductForm::Bottle,
                "#9B111E",
                "assets/products/flirty.jpg",
            ),
            Product::ordinary(
                "m1",
                "Cinematic - Natural",
                Category::Makeup,
                "Fond de ten waterproof",
                ProductForm::Tube,
                "#FF99CC",
                "assets/products/cinematic-natural.jpg",
            ),
            Product::ordinary(
                "m2",
                "My Peptide - Strawberry",
                Category::Makeup,
                "Balsam de buze glossy",
                ProductForm::Tube,
                "#E3C2A8",
                "assets/products/peptide-strawberry.jpg",
            ),
            Product::ordinary(
                "m3",
                "Ruj mat Cinematic",
                Category::Makeup,
                "Ruj mat",
                ProductForm::Tube,
                "#000000",
                "assets/products/cinematic-matte.jpg",
            ),
            Product::ordinary(
                "a1",
                "Cutie cadou - ART",
                Category::Accessories,
                "Gift Set",
                ProductForm::Tool,
                "#FFCFCF",
                "assets/products/gift-box.jpg",
            ),
            Product::ordinary(
                "a2",
                "Set 8 pensule",
                Category::Accessories,
                "Pensule machiaj",
                ProductForm::Tool,
                "#FFFFFF",
                "assets/products/brush-set.jpg",
            ),
            Product::ordinary(
                "a3",
                "Breloc pentru geanta",
                Category::Accessories,
                "Gift Set",
                ProductForm::Jar,
                "#FF69B4",
                "assets/products/keychain.jpg",
            ),
        ];
        Self {
            title: "The Season of You".to_string(),
            description: "Colecția festivă de iarnă".to_string(),
            products: products.into_iter().map(Arc::new).collect(),
            voucher: Arc::new(Product::voucher()),
            heart: Arc::new(Product::heart()),
            clock: Arc::new(Product::clock()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Ordinary products, in catalog order
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Uniform-random pick from the ordinary pool
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<Arc<Product>> {
        if self.products.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.products.len());
        Some(self.products[idx].clone())
    }

    pub fn voucher(&self) -> Arc<Product> {
        self.voucher.clone()
    }

    pub fn heart(&self) -> Arc<Product> {
        self.heart.clone()
    }

    pub fn clock(&self) -> Arc<Product> {
        self.clock.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_fallback_covers_all_categories() {
        let catalog = Catalog::fallback();
        assert!(!catalog.is_empty());
        for cat in Category::ALL {
            assert!(
                catalog.products().iter().any(|p| p.category == cat),
                "no fallback product for {cat:?}"
            );
        }
        // fallback pool must not contain wildcard items
        assert!(catalog.products().iter().all(|p| p.special.is_none()));
    }

    #[test]
    fn test_campaign_json_round_trip() {
        let json = r##"{
            "title": "Winter Drop",
            "description": "test",
            "products": [
                {
                    "id": "x1",
                    "name": "Test Polish",
                    "category": "NAILS",
                    "description": "",
                    "formFactor": "BOTTLE",
                    "colorHex": "#FFFFFF",
                    "imageUrl": "x.jpg"
                },
                {
                    "id": "gold",
                    "name": "Voucher",
                    "category": "ACCESSORIES",
                    "specialType": "VOUCHER"
                }
            ]
        }"##;
        let catalog = Catalog::from_json(json).expect("valid campaign json");
        assert_eq!(catalog.title, "Winter Drop");
        // the special-tagged entry is filtered out of the ordinary pool
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].category, Category::Nails);
    }

    #[test]
    fn test_pick_is_uniform_over_pool() {
        let catalog = Catalog::fallback();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let p = catalog.pick(&mut rng).expect("non-empty pool");
            assert!(p.special.is_none());
        }
    }

    #[test]
    fn test_empty_catalog_pick_is_none() {
        let catalog = Catalog::from_campaign(CampaignData {
            title: "empty".to_string(),
            description: String::new(),
            products: vec![],
            grounding_urls: vec![],
        });
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(catalog.is_empty());
        assert!(catalog.pick(&mut rng).is_none());
    }
}
