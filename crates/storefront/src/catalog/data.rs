//! The fragrance range and category list.

use lara_core::{CategoryId, Price, ProductId, Size};

use super::{Category, Product, ScentNotes, SizePrice};

const BRAND: &str = "LaraParfume";

const ROSE_PHOTO: u32 = 1_190_829;
const OCEAN_PHOTO: u32 = 965_989;
const AMBER_PHOTO: u32 = 1_961_795;

/// Stock photo URL on the image host.
fn photo(id: u32, width: u32) -> String {
    format!("https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w={width}")
}

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    /// 30ml, 50ml and 100ml prices in cents.
    prices: [i64; 3],
    original_price: Option<i64>,
    photos: &'static [u32],
    rating: f32,
    reviews: u32,
    description: &'static str,
    long_description: &'static str,
    category: &'static str,
    is_new: bool,
    is_sale: bool,
    top: &'static [&'static str],
    middle: &'static [&'static str],
    base: &'static [&'static str],
    ingredients: &'static str,
    concentration: &'static str,
    longevity: &'static str,
    sillage: &'static str,
    stock: u32,
}

const PRODUCTS: [ProductSeed; 8] = [
    ProductSeed {
        id: "1",
        name: "Midnight Rose",
        prices: [8_999, 12_999, 18_999],
        original_price: Some(14_999),
        photos: &[ROSE_PHOTO, OCEAN_PHOTO, AMBER_PHOTO],
        rating: 4.8,
        reviews: 156,
        description: "A romantic blend of rose and vanilla with hints of bergamot",
        long_description: "Midnight Rose pairs the elegance of rose with the warmth of vanilla. \
            It opens with a fresh touch of bergamot, blooms into a captivating rose bouquet at \
            the heart and settles on a sensual base of vanilla and soft musk.",
        category: "Floral",
        is_new: true,
        is_sale: true,
        top: &["Bergamot", "Pink Pepper", "Mandarin"],
        middle: &["Rose Petals", "Jasmine", "Peony"],
        base: &["Vanilla", "White Musk", "Sandalwood"],
        ingredients: "Alcohol Denat., Parfum (Fragrance), Aqua (Water), Benzyl Salicylate, \
            Linalool, Limonene, Geraniol, Citronellol",
        concentration: "Eau de Parfum",
        longevity: "6-8 hours",
        sillage: "Moderate to Strong",
        stock: 3,
    },
    ProductSeed {
        id: "2",
        name: "Ocean Breeze",
        prices: [5_999, 8_999, 12_999],
        original_price: None,
        photos: &[OCEAN_PHOTO, ROSE_PHOTO],
        rating: 4.6,
        reviews: 89,
        description: "Fresh aquatic scent with marine notes and citrus",
        long_description: "Ocean Breeze captures the freshness of the open sea. Aquatic notes \
            meet an energizing splash of citrus, making it an easy everyday signature.",
        category: "Fresh",
        is_new: false,
        is_sale: false,
        top: &["Sea Salt", "Lemon", "Grapefruit"],
        middle: &["Marine Notes", "Lily of the Valley", "Cucumber"],
        base: &["White Musk", "Driftwood", "Ambergris"],
        ingredients: "Alcohol Denat., Parfum (Fragrance), Aqua (Water), Limonene, Linalool, Citral",
        concentration: "Eau de Toilette",
        longevity: "4-6 hours",
        sillage: "Light to Moderate",
        stock: 5,
    },
    ProductSeed {
        id: "3",
        name: "Golden Amber",
        prices: [10_999, 15_999, 22_999],
        original_price: None,
        photos: &[AMBER_PHOTO, ROSE_PHOTO],
        rating: 4.9,
        reviews: 203,
        description: "Warm and sophisticated with amber and sandalwood",
        long_description: "Golden Amber wraps resinous amber around creamy sandalwood. A hint \
            of saffron lifts the opening before the scent deepens into a glowing, long-lasting \
            trail made for evenings.",
        category: "Oriental",
        is_new: true,
        is_sale: false,
        top: &["Saffron", "Cardamom", "Orange Blossom"],
        middle: &["Amber", "Labdanum", "Rose"],
        base: &["Sandalwood", "Tonka Bean", "Benzoin"],
        ingredients: "Alcohol Denat., Parfum (Fragrance), Aqua (Water), Coumarin, Linalool, \
            Benzyl Benzoate, Eugenol",
        concentration: "Eau de Parfum",
        longevity: "8-10 hours",
        sillage: "Strong",
        stock: 18,
    },
    ProductSeed {
        id: "4",
        name: "Lavender Dreams",
        prices: [5_499, 7_999, 11_499],
        original_price: None,
        photos: &[ROSE_PHOTO, OCEAN_PHOTO],
        rating: 4.7,
        reviews: 134,
        description: "Calming lavender with soft musk undertones",
        long_description: "Lavender Dreams is a gentle wind-down in a bottle. Provence lavender \
            and chamomile rest on a soft bed of musk for a calm, clean finish.",
        category: "Floral",
        is_new: false,
        is_sale: false,
        top: &["Lavender", "Bergamot"],
        middle: &["Chamomile", "Iris"],
        base: &["Soft Musk", "Cashmere Wood"],
        ingredients: "Alcohol Denat., Parfum (Fragrance), Aqua (Water), Linalool, Coumarin, \
            Geraniol",
        concentration: "Eau de Toilette",
        longevity: "4-6 hours",
        sillage: "Light",
        stock: 2,
    },
    ProductSeed {
        id: "5",
        name: "Vanilla Orchid",
        prices: [7_999, 11_999, 16_999],
        original_price: None,
        photos: &[ROSE_PHOTO, AMBER_PHOTO],
        rating: 4.5,
        reviews: 78,
        description: "Exotic vanilla with delicate orchid notes",
        long_description: "Vanilla Orchid blends Madagascar vanilla with the delicate sweetness \
            of white orchid, softened by a touch of coconut and warm musk.",
        category: "Floral",
        is_new: false,
        is_sale: false,
        top: &["Pear", "Pink Pepper"],
        middle: &["White Orchid", "Tuberose"],
        base: &["Vanilla", "Coconut", "Musk"],
        ingredients: "Alcohol Denat., Parfum (Fragrance), Aqua (Water), Benzyl Salicylate, \
            Coumarin, Limonene",
        concentration: "Eau de Parfum",
        longevity: "6-8 hours",
        sillage: "Moderate",
        stock: 12,
    },
    ProductSeed {
        id: "6",
        name: "Citrus Burst",
        prices: [5_999, 8_999, 12_999],
        original_price: None,
        photos: &[OCEAN_PHOTO, AMBER_PHOTO],
        rating: 4.4,
        reviews: 92,
        description: "Energizing citrus blend with grapefruit and lime",
        long_description: "Citrus Burst is a bright morning pick-me-up. Sparkling grapefruit and \
            lime meet green neroli over a light vetiver base.",
        category: "Fresh",
        is_new: false,
        is_sale: false,
        top: &["Grapefruit", "Lime", "Mandarin"],
        middle: &["Neroli", "Green Tea"],
        base: &["Vetiver", "White Musk"],
        ingredients: "Alcohol Denat., Parfum (Fragrance), Aqua (Water), Limonene, Citral, Linalool",
        concentration: "Eau de Toilette",
        longevity: "3-5 hours",
        sillage: "Light to Moderate",
        stock: 20,
    },
    ProductSeed {
        id: "7",
        name: "Spiced Cedar",
        prices: [9_499, 13_999, 19_999],
        original_price: None,
        photos: &[AMBER_PHOTO, OCEAN_PHOTO],
        rating: 4.6,
        reviews: 145,
        description: "Rich cedar with warming spices and hints of leather",
        long_description: "Spiced Cedar layers Atlas cedarwood with cinnamon and clove, finished \
            with a smooth leather accord for a confident, grown-up warmth.",
        category: "Woody",
        is_new: false,
        is_sale: false,
        top: &["Cinnamon", "Black Pepper", "Clove"],
        middle: &["Cedarwood", "Nutmeg"],
        base: &["Leather", "Vetiver", "Patchouli"],
        ingredients: "Alcohol Denat., Parfum (Fragrance), Aqua (Water), Eugenol, Cinnamal, \
            Linalool",
        concentration: "Eau de Parfum",
        longevity: "8-10 hours",
        sillage: "Moderate to Strong",
        stock: 9,
    },
    ProductSeed {
        id: "8",
        name: "Jasmine Noir",
        prices: [9_999, 14_999, 21_499],
        original_price: None,
        photos: &[ROSE_PHOTO, AMBER_PHOTO],
        rating: 4.8,
        reviews: 167,
        description: "Mysterious jasmine with dark chocolate undertones",
        long_description: "Jasmine Noir is night-blooming jasmine with a dark twist: bitter cocoa \
            and patchouli give the white flowers a mysterious, velvety depth.",
        category: "Oriental",
        is_new: true,
        is_sale: false,
        top: &["Black Currant", "Bergamot"],
        middle: &["Jasmine Sambac", "Dark Chocolate"],
        base: &["Patchouli", "Amber", "Vanilla"],
        ingredients: "Alcohol Denat., Parfum (Fragrance), Aqua (Water), Benzyl Benzoate, \
            Farnesol, Linalool",
        concentration: "Extrait de Parfum",
        longevity: "10-12 hours",
        sillage: "Strong",
        stock: 0,
    },
];

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl From<&ProductSeed> for Product {
    fn from(seed: &ProductSeed) -> Self {
        let sizes: Vec<SizePrice> = Size::ALL
            .into_iter()
            .zip(seed.prices)
            .map(|(size, cents)| SizePrice {
                size,
                price: Price::from_cents(cents),
            })
            .collect();
        let gallery: Vec<String> = seed.photos.iter().map(|id| photo(*id, 800)).collect();

        Self {
            id: ProductId::new(seed.id),
            name: seed.name.to_string(),
            price: Price::from_cents(seed.prices[1]),
            original_price: seed.original_price.map(Price::from_cents),
            image: gallery.first().cloned().unwrap_or_default(),
            gallery,
            rating: seed.rating,
            reviews: seed.reviews,
            description: seed.description.to_string(),
            long_description: seed.long_description.to_string(),
            category: seed.category.to_string(),
            is_new: seed.is_new,
            is_sale: seed.is_sale,
            sizes,
            notes: ScentNotes {
                top: names(seed.top),
                middle: names(seed.middle),
                base: names(seed.base),
            },
            ingredients: seed.ingredients.to_string(),
            brand: BRAND.to_string(),
            concentration: seed.concentration.to_string(),
            longevity: seed.longevity.to_string(),
            sillage: seed.sillage.to_string(),
            stock: seed.stock,
        }
    }
}

pub(super) fn products() -> Vec<Product> {
    PRODUCTS.iter().map(Product::from).collect()
}

/// (id, name, description, photo, product count, featured)
const CATEGORIES: [(&str, &str, &str, u32, u32, bool); 8] = [
    ("floral", "Floral", "Fresh, feminine bouquets of blooming flowers", ROSE_PHOTO, 24, true),
    ("woody", "Woody", "Elegant, masculine warmth of precious woods", AMBER_PHOTO, 18, true),
    ("citrus", "Citrus", "Zesty, uplifting citrus freshness", OCEAN_PHOTO, 15, false),
    ("oriental", "Oriental", "Luxurious, exotic spice and amber", AMBER_PHOTO, 21, true),
    ("fresh", "Fresh", "Calm, natural freshness", OCEAN_PHOTO, 12, false),
    ("gourmand", "Gourmand", "Sweet scents inspired by desserts", ROSE_PHOTO, 9, false),
    ("aquatic", "Aquatic", "The crisp freshness of the sea", OCEAN_PHOTO, 8, false),
    ("spicy", "Spicy", "Tempting warmth of spices", AMBER_PHOTO, 14, false),
];

pub(super) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(id, name, description, photo_id, count, featured)| Category {
            id: CategoryId::new(*id),
            name: (*name).to_string(),
            description: (*description).to_string(),
            image: photo(*photo_id, 600),
            product_count: *count,
            featured: *featured,
        })
        .collect()
}
