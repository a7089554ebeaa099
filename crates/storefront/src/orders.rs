//! Customer order history.
//!
//! Orders are fixed sample records. The only thing a customer can change is
//! cancelling an open order, which is recorded per session and layered on
//! top of the stored status by [`OrderBook::for_customer`].

use chrono::NaiveDate;

use lara_core::{OrderId, OrderStatus, Price, ProductId};

/// One product line of a past order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// Unit price paid at the time of the order.
    pub price: Price,
    pub image: String,
}

impl OrderItem {
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub shipping_address: String,
    pub payment_method: String,
    pub tracking_number: Option<String>,
}

impl Order {
    /// Sum of the item line totals.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Whether the order id or any item name contains `term`, ignoring case.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.id.as_str().to_lowercase().contains(&term)
            || self
                .items
                .iter()
                .any(|item| item.name.to_lowercase().contains(&term))
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Status filter on the orders page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Parse a query-string value; anything unrecognized means "all".
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse::<OrderStatus>().ok())
            .map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => order.status == *status,
        }
    }
}

/// Orders page filters.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub status: StatusFilter,
    /// Matched against the order id and item names.
    pub search: String,
}

impl OrderQuery {
    #[must_use]
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders
            .iter()
            .filter(|o| self.status.matches(o) && o.matches_search(&self.search))
            .collect()
    }
}

/// Summary numbers above the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStats {
    pub total_orders: usize,
    pub delivered: usize,
    /// Pending or processing.
    pub pending: usize,
    /// Total of all orders that were not cancelled.
    pub total_spent: Price,
}

impl OrderStats {
    #[must_use]
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            total_orders: orders.len(),
            delivered: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Delivered)
                .count(),
            pending: orders.iter().filter(|o| o.status.is_open()).count(),
            total_spent: orders
                .iter()
                .filter(|o| o.status != OrderStatus::Cancelled)
                .map(Order::total)
                .sum(),
        }
    }
}

// =============================================================================
// Order Book
// =============================================================================

/// Why an order could not be cancelled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CancelError {
    #[error("order not found")]
    NotFound,
    #[error("order is already {0}")]
    NotCancellable(OrderStatus),
}

/// All known orders, newest first.
#[derive(Debug, Clone)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    #[must_use]
    pub const fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Sample order history shown to every customer.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_orders())
    }

    /// Orders as a customer sees them, with their cancellations applied.
    #[must_use]
    pub fn for_customer(&self, cancelled: &[OrderId]) -> Vec<Order> {
        self.orders
            .iter()
            .cloned()
            .map(|mut order| {
                if cancelled.contains(&order.id) {
                    order.status = OrderStatus::Cancelled;
                }
                order
            })
            .collect()
    }

    /// Check that a customer may cancel `id` given their earlier cancellations.
    ///
    /// # Errors
    ///
    /// Returns `CancelError::NotFound` for unknown ids and
    /// `CancelError::NotCancellable` once the order has shipped or was
    /// already cancelled.
    pub fn check_cancel(&self, id: &OrderId, cancelled: &[OrderId]) -> Result<(), CancelError> {
        let order = self
            .orders
            .iter()
            .find(|o| &o.id == id)
            .ok_or(CancelError::NotFound)?;

        let status = if cancelled.contains(id) {
            OrderStatus::Cancelled
        } else {
            order.status
        };

        if status.can_cancel() {
            Ok(())
        } else {
            Err(CancelError::NotCancellable(status))
        }
    }
}

/// Thumbnail URL on the image host.
fn thumbnail(photo: u32) -> String {
    format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=100")
}

fn item(product_id: &str, name: &str, quantity: u32, cents: i64, photo: u32) -> OrderItem {
    OrderItem {
        product_id: ProductId::new(product_id),
        name: name.to_string(),
        quantity,
        price: Price::from_cents(cents),
        image: thumbnail(photo),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-001"),
            placed_on: date(2024, 1, 15),
            status: OrderStatus::Delivered,
            items: vec![
                item("1", "Midnight Rose", 1, 12_999, 1_190_829),
                item("2", "Ocean Breeze", 2, 7_999, 965_989),
            ],
            shipping_address: "123 Main St, New York, NY 10001".to_string(),
            payment_method: "Credit Card ****1234".to_string(),
            tracking_number: Some("TRK123456789".to_string()),
        },
        Order {
            id: OrderId::new("ORD-002"),
            placed_on: date(2024, 1, 10),
            status: OrderStatus::Shipped,
            items: vec![item("3", "Golden Amber", 1, 15_999, 1_961_795)],
            shipping_address: "456 Oak Ave, Los Angeles, CA 90210".to_string(),
            payment_method: "PayPal".to_string(),
            tracking_number: Some("TRK987654321".to_string()),
        },
        Order {
            id: OrderId::new("ORD-003"),
            placed_on: date(2024, 1, 5),
            status: OrderStatus::Processing,
            items: vec![item("4", "Lavender Dreams", 1, 7_999, 1_190_829)],
            shipping_address: "789 Pine Rd, Chicago, IL 60601".to_string(),
            payment_method: "Credit Card ****5678".to_string(),
            tracking_number: None,
        },
        Order {
            id: OrderId::new("ORD-004"),
            placed_on: date(2024, 1, 1),
            status: OrderStatus::Pending,
            items: vec![
                item("5", "Vanilla Orchid", 1, 11_999, 965_989),
                item("6", "Citrus Burst", 1, 7_999, 1_961_795),
            ],
            shipping_address: "321 Elm St, Miami, FL 33101".to_string(),
            payment_method: "Credit Card ****9012".to_string(),
            tracking_number: None,
        },
    ]
}
