//! Configuration and constants for the CLI.

/// Default location of the exported order history
pub const DEFAULT_INPUT_PATH: &str = "swiggy_data.txt";

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of equal-width bins in the price histogram
pub const HISTOGRAM_BINS: usize = 48;

/// Number of restaurants/items shown in the ranking tables
pub const TOP_N: usize = 15;

// Bubble chart marker area is count * BUBBLE_SCALE (square points)
pub const BUBBLE_SCALE: f64 = 50.0;
pub const MARKER_OPACITY: f64 = 0.5;

/// Year colours, indexed by `year - first_year` and cycled when exhausted
pub const YEAR_PALETTE: &[&str] = &["#c41f21", "#f64d4a", "#fb5e4e", "#fd7f5d", "#fdaf87"];

// Field names for order records (exports differ between app versions)
pub const ID_FIELD_NAMES: &[&str] = &["order_id"];
pub const RESTAURANT_FIELD_NAMES: &[&str] = &["restaurant_name"];
pub const TIME_FIELD_NAMES: &[&str] = &["order_time"];
pub const BILL_FIELD_NAMES: &[&str] = &["order_restaurant_bill"];
pub const DELIVERY_FIELD_NAMES: &[&str] = &["order_delivery_charge"];
pub const NET_TOTAL_FIELD_NAMES: &[&str] = &["order_total", "net_total"];
pub const ITEMS_FIELD_NAMES: &[&str] = &["order_items"];
pub const ITEM_NAME_FIELD_NAMES: &[&str] = &["name"];
pub const QUANTITY_FIELD_NAMES: &[&str] = &["quantity"];
