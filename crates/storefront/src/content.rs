//! Static marketing and dashboard content.
//!
//! Copy for the home page carousel, testimonials, the about page and the
//! fixed figures on the customer and admin dashboards. None of it changes
//! at runtime, so it is built once and stored in `AppState`.

use lara_core::{OrderId, OrderStatus, Price};

/// Stock photo URL on the image host.
fn photo(id: u32, width: u32) -> String {
    format!("https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w={width}")
}

// =============================================================================
// Home Page
// =============================================================================

/// A slide in the home page hero carousel.
#[derive(Debug, Clone)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub cta: String,
    pub cta_url: String,
}

/// A customer quote.
#[derive(Debug, Clone)]
pub struct Testimonial {
    pub name: String,
    pub avatar: String,
    /// Stars out of 5.
    pub rating: u8,
    pub comment: String,
    pub product: String,
    pub verified: bool,
}

impl Testimonial {
    /// Filled and empty stars, e.g. `★★★★☆`.
    #[must_use]
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        "★".repeat(filled) + &"☆".repeat(5 - filled)
    }
}

// =============================================================================
// About Page
// =============================================================================

#[derive(Debug, Clone)]
pub struct CompanyValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

/// Headline number on the about page ("10K+ happy customers").
#[derive(Debug, Clone)]
pub struct Milestone {
    pub value: String,
    pub label: String,
}

// =============================================================================
// Customer Dashboard
// =============================================================================

/// One bar of the monthly spending chart.
#[derive(Debug, Clone)]
pub struct MonthlySpend {
    pub month: String,
    pub amount: u32,
}

/// An entry in the "recent activity" feed.
#[derive(Debug, Clone)]
pub struct Activity {
    pub action: String,
    pub item: String,
    pub time: String,
    /// Icon hint: order, wishlist, review or profile.
    pub kind: String,
}

/// Shortcut tile on the dashboard overview.
#[derive(Debug, Clone)]
pub struct QuickAction {
    pub title: String,
    pub href: String,
}

// =============================================================================
// Admin Dashboard
// =============================================================================

/// Headline metric card.
#[derive(Debug, Clone)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    /// Change versus last month ("+12.5%").
    pub change: String,
}

/// A row of the admin "recent orders" table.
#[derive(Debug, Clone)]
pub struct AdminOrder {
    pub id: OrderId,
    pub customer: String,
    pub amount: Price,
    pub status: OrderStatus,
}

/// Sidebar navigation entry.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// All static site content.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub hero_slides: Vec<HeroSlide>,
    pub testimonials: Vec<Testimonial>,
    pub values: Vec<CompanyValue>,
    pub team: Vec<TeamMember>,
    pub milestones: Vec<Milestone>,
    pub monthly_spending: Vec<MonthlySpend>,
    pub recent_activity: Vec<Activity>,
    pub quick_actions: Vec<QuickAction>,
    pub admin_stats: Vec<StatCard>,
    pub admin_orders: Vec<AdminOrder>,
    pub admin_menu: Vec<MenuItem>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            hero_slides: hero_slides(),
            testimonials: testimonials(),
            values: values(),
            team: team(),
            milestones: milestones(),
            monthly_spending: monthly_spending(),
            recent_activity: recent_activity(),
            quick_actions: quick_actions(),
            admin_stats: admin_stats(),
            admin_orders: admin_orders(),
            admin_menu: admin_menu(),
        }
    }
}

impl SiteContent {
    /// Largest month in the spending chart, used to scale the bars.
    #[must_use]
    pub fn max_monthly_spend(&self) -> u32 {
        self.monthly_spending
            .iter()
            .map(|m| m.amount)
            .max()
            .unwrap_or(0)
    }
}

fn hero_slides() -> Vec<HeroSlide> {
    let slide = |title: &str, subtitle: &str, photo_id: u32, cta: &str| HeroSlide {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        image: photo(photo_id, 1600),
        cta: cta.to_string(),
        cta_url: "/products".to_string(),
    };

    vec![
        slide(
            "Discover Your Signature Scent",
            "Luxury fragrances that define your unique style",
            965_989,
            "Shop Now",
        ),
        slide(
            "New Collection",
            "Introducing our latest exclusive fragrances",
            1_190_829,
            "Explore Collection",
        ),
        slide(
            "Gift Sets Available",
            "Perfect presents for your loved ones",
            1_961_795,
            "Shop Gifts",
        ),
    ]
}

fn testimonials() -> Vec<Testimonial> {
    let quote = |name: &str, avatar: u32, comment: &str, product: &str| Testimonial {
        name: name.to_string(),
        avatar: photo(avatar, 100),
        rating: 5,
        comment: comment.to_string(),
        product: product.to_string(),
        verified: true,
    };

    vec![
        quote(
            "Sarah Johnson",
            415_829,
            "The Midnight Rose fragrance is absolutely divine! It's become my signature scent \
             and I get compliments everywhere I go.",
            "Midnight Rose",
        ),
        quote(
            "Michael Chen",
            1_222_271,
            "Excellent quality and fast shipping. The Ocean Breeze is perfect for summer days. \
             Will definitely order again!",
            "Ocean Breeze",
        ),
        quote(
            "Emma Williams",
            1_239_291,
            "I've been searching for the perfect oriental fragrance for years. Golden Amber \
             exceeded all my expectations!",
            "Golden Amber",
        ),
        quote(
            "David Miller",
            1_043_471,
            "The customer service is outstanding and the fragrances are top-notch. Lara Parfume \
             is now my go-to brand.",
            "Lavender Dreams",
        ),
    ]
}

fn values() -> Vec<CompanyValue> {
    [
        (
            "Quality Ingredients",
            "We source the finest natural essences and oils from around the world.",
        ),
        (
            "Crafted with Passion",
            "Each blend is developed by our perfumers over months of careful refinement.",
        ),
        (
            "Cruelty Free",
            "None of our fragrances or ingredients are ever tested on animals.",
        ),
        (
            "Customer First",
            "Free shipping on orders over $100 and a 30-day return policy.",
        ),
    ]
    .into_iter()
    .map(|(title, description)| CompanyValue {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn team() -> Vec<TeamMember> {
    [
        (
            "Lara Anindya",
            "Founder & Master Perfumer",
            "Trained in Grasse, Lara founded the house to bring artisan perfumery to everyone.",
        ),
        (
            "Dimas Pratama",
            "Head of Product",
            "Dimas turns each new accord into a finished fragrance, from bottle to box.",
        ),
        (
            "Sinta Maharani",
            "Customer Experience Lead",
            "Sinta and her team help customers find the scent that feels like theirs.",
        ),
    ]
    .into_iter()
    .map(|(name, role, bio)| TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
    })
    .collect()
}

fn milestones() -> Vec<Milestone> {
    [
        ("10K+", "Happy Customers"),
        ("50+", "Unique Fragrances"),
        ("15", "Years of Craft"),
        ("4.8", "Average Rating"),
    ]
    .into_iter()
    .map(|(value, label)| Milestone {
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect()
}

fn monthly_spending() -> Vec<MonthlySpend> {
    [
        ("Jan", 1200),
        ("Feb", 1900),
        ("Mar", 1500),
        ("Apr", 2100),
        ("May", 1800),
        ("Jun", 2400),
    ]
    .into_iter()
    .map(|(month, amount)| MonthlySpend {
        month: month.to_string(),
        amount,
    })
    .collect()
}

fn recent_activity() -> Vec<Activity> {
    [
        ("Order placed", "Midnight Rose", "2 hours ago", "order"),
        ("Added to wishlist", "Vanilla Orchid", "1 day ago", "wishlist"),
        ("Review submitted", "Ocean Breeze", "3 days ago", "review"),
        ("Profile updated", "Personal information", "1 week ago", "profile"),
    ]
    .into_iter()
    .map(|(action, item, time, kind)| Activity {
        action: action.to_string(),
        item: item.to_string(),
        time: time.to_string(),
        kind: kind.to_string(),
    })
    .collect()
}

fn quick_actions() -> Vec<QuickAction> {
    [
        ("Browse Products", "/products"),
        ("Track Orders", "/dashboard/orders"),
        ("View Wishlist", "/dashboard/wishlist"),
        ("Account Settings", "/dashboard/settings"),
    ]
    .into_iter()
    .map(|(title, href)| QuickAction {
        title: title.to_string(),
        href: href.to_string(),
    })
    .collect()
}

fn admin_stats() -> Vec<StatCard> {
    [
        ("Total Revenue", "$24,567", "+12.5%"),
        ("Total Orders", "156", "+8.2%"),
        ("Total Products", "48", "+2.1%"),
        ("Total Customers", "234", "+15.3%"),
    ]
    .into_iter()
    .map(|(title, value, change)| StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
    })
    .collect()
}

fn admin_orders() -> Vec<AdminOrder> {
    [
        ("ORD-001", "Sarah Johnson", 28_997, OrderStatus::Delivered),
        ("ORD-002", "Michael Chen", 15_999, OrderStatus::Shipped),
        ("ORD-003", "Emma Williams", 7_999, OrderStatus::Processing),
    ]
    .into_iter()
    .map(|(id, customer, cents, status)| AdminOrder {
        id: OrderId::new(id),
        customer: customer.to_string(),
        amount: Price::from_cents(cents),
        status,
    })
    .collect()
}

fn admin_menu() -> Vec<MenuItem> {
    [
        ("Dashboard", "/admin"),
        ("Products", "/products"),
        ("Categories", "/categories"),
        ("Storefront", "/"),
    ]
    .into_iter()
    .map(|(label, href)| MenuItem {
        label: label.to_string(),
        href: href.to_string(),
        active: href == "/admin",
    })
    .collect()
}
