//! Record shapes and their field lists.

use crate::error::GeneratorError;
use crate::field::{FieldKind, FieldSpec};
use rand::Rng;
use std::str::FromStr;

/// The named record type that determines which fields a record contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    User,
    Transaction,
    Event,
    /// Large nested user profile, used for payload-size testing
    Profile,
}

impl Shape {
    /// All shapes.
    pub const ALL: [Shape; 4] = [Shape::User, Shape::Transaction, Shape::Event, Shape::Profile];

    /// Shapes drawn from by [`ShapeSelector::Mixed`].
    pub const MIXED: [Shape; 3] = [Shape::User, Shape::Transaction, Shape::Event];

    /// Name used as the envelope's `schema_name`.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::User => "user",
            Shape::Transaction => "transaction",
            Shape::Event => "event",
            Shape::Profile => "profile",
        }
    }

    /// Fixed field list of this shape.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Shape::User => USER_FIELDS,
            Shape::Transaction => TRANSACTION_FIELDS,
            Shape::Event => EVENT_FIELDS,
            Shape::Profile => PROFILE_FIELDS,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Shape {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Shape::User),
            "transaction" => Ok(Shape::Transaction),
            "event" => Ok(Shape::Event),
            "profile" => Ok(Shape::Profile),
            _ => Err(GeneratorError::UnknownShape(s.to_string())),
        }
    }
}

/// Which shape to generate: always the same one, or a uniform pick per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeSelector {
    Fixed(Shape),
    #[default]
    Mixed,
}

impl ShapeSelector {
    /// Resolve the selector to a concrete shape for one record.
    pub fn resolve<R: Rng>(&self, rng: &mut R) -> Shape {
        match self {
            ShapeSelector::Fixed(shape) => *shape,
            ShapeSelector::Mixed => Shape::MIXED[rng.random_range(0..Shape::MIXED.len())],
        }
    }
}

impl std::fmt::Display for ShapeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeSelector::Fixed(shape) => write!(f, "{shape}"),
            ShapeSelector::Mixed => write!(f, "mixed"),
        }
    }
}

impl FromStr for ShapeSelector {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("mixed") {
            Ok(ShapeSelector::Mixed)
        } else {
            s.parse().map(ShapeSelector::Fixed)
        }
    }
}

const COUNTRIES: &[&str] = &[
    "USA", "UK", "Canada", "Germany", "France", "Japan", "Australia", "Brazil", "India", "China",
];

const CITIES: &[&str] = &[
    "New York", "London", "Toronto", "Berlin", "Paris", "Tokyo", "Sydney", "São Paulo", "Mumbai",
    "Beijing",
];

const TAGS: &[&str] = &[
    "premium",
    "sale",
    "new",
    "featured",
    "trending",
    "limited",
    "exclusive",
    "popular",
    "recommended",
    "bestseller",
];

const IP_ADDRESS: &str = "{int:1-255}.{int:0-255}.{int:0-255}.{int:0-255}";

const USER_AGENT: &str = "Mozilla/5.0 ({pick:Windows NT 10.0|Macintosh; Intel Mac OS X 10_15_7|X11; Linux x86_64}) {pick:Chrome/120.0|Firefox/121.0|Safari/17.0|Edge/120.0}";

const TIMESTAMP_WINDOW_DAYS: u32 = 365;

const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("user_id", FieldKind::Uuid),
    FieldSpec::new("username", FieldKind::Letters(12)),
    FieldSpec::new(
        "email",
        FieldKind::Pattern("{lower:8}@{pick:gmail.com|yahoo.com|outlook.com|company.com|test.org}"),
    ),
    FieldSpec::new("full_name", FieldKind::Pattern("{capital:6} {capital:8}")),
    FieldSpec::new("age", FieldKind::IntRange { min: 18, max: 80 }),
    FieldSpec::new(
        "phone",
        FieldKind::Pattern("+1-{int:200-999}-{int:100-999}-{int:1000-9999}"),
    ),
    FieldSpec::new("country", FieldKind::OneOf(COUNTRIES)),
    FieldSpec::new("city", FieldKind::OneOf(CITIES)),
    FieldSpec::new(
        "status",
        FieldKind::OneOf(&["active", "inactive", "pending", "suspended", "verified", "deleted"]),
    ),
    FieldSpec::new("is_verified", FieldKind::Bool),
    FieldSpec::new("is_premium", FieldKind::Bool),
    FieldSpec::new(
        "created_at",
        FieldKind::RecentTimestamp { days: TIMESTAMP_WINDOW_DAYS },
    ),
    FieldSpec::new(
        "last_login",
        FieldKind::RecentTimestamp { days: TIMESTAMP_WINDOW_DAYS },
    ),
    FieldSpec::new("login_count", FieldKind::IntRange { min: 0, max: 1000 }),
    FieldSpec::new(
        "account_balance",
        FieldKind::FloatRange { min: 0.0, max: 50000.0 },
    ),
    FieldSpec::new(
        "tags",
        FieldKind::Sample { pool: TAGS, min: 1, max: 4 },
    ),
];

const TRANSACTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("transaction_id", FieldKind::Uuid),
    FieldSpec::new("user_id", FieldKind::Uuid),
    FieldSpec::new("amount", FieldKind::FloatRange { min: 1.0, max: 5000.0 }),
    FieldSpec::new(
        "currency",
        FieldKind::OneOf(&["USD", "EUR", "GBP", "JPY", "CAD"]),
    ),
    FieldSpec::new(
        "payment_method",
        FieldKind::OneOf(&[
            "credit_card",
            "debit_card",
            "paypal",
            "bank_transfer",
            "crypto",
            "cash",
        ]),
    ),
    FieldSpec::new(
        "product_name",
        FieldKind::OneOf(&[
            "Laptop",
            "Phone",
            "Tablet",
            "Monitor",
            "Keyboard",
            "Mouse",
            "Headphones",
            "Camera",
            "Speaker",
            "Watch",
        ]),
    ),
    FieldSpec::new(
        "category",
        FieldKind::OneOf(&[
            "Electronics",
            "Clothing",
            "Food",
            "Books",
            "Sports",
            "Home",
            "Garden",
            "Automotive",
            "Health",
            "Beauty",
        ]),
    ),
    FieldSpec::new("quantity", FieldKind::IntRange { min: 1, max: 20 }),
    FieldSpec::new("discount_applied", FieldKind::Bool),
    FieldSpec::new(
        "discount_amount",
        FieldKind::FloatRange { min: 0.0, max: 500.0 },
    ),
    FieldSpec::new("tax_amount", FieldKind::FloatRange { min: 0.0, max: 200.0 }),
    FieldSpec::new("shipping_cost", FieldKind::FloatRange { min: 0.0, max: 50.0 }),
    FieldSpec::new(
        "status",
        FieldKind::OneOf(&["completed", "pending", "failed", "refunded", "cancelled"]),
    ),
    FieldSpec::new(
        "created_at",
        FieldKind::RecentTimestamp { days: TIMESTAMP_WINDOW_DAYS },
    ),
    FieldSpec::new(
        "updated_at",
        FieldKind::RecentTimestamp { days: TIMESTAMP_WINDOW_DAYS },
    ),
    FieldSpec::new("ip_address", FieldKind::Pattern(IP_ADDRESS)),
    FieldSpec::new("user_agent", FieldKind::Pattern(USER_AGENT)),
    FieldSpec::new("session_id", FieldKind::Uuid),
    FieldSpec::new(
        "referrer",
        FieldKind::OneOf(&["google", "facebook", "twitter", "direct", "email", "affiliate"]),
    ),
];

const EVENT_METADATA_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("custom_field_1", FieldKind::Letters(20)),
    FieldSpec::new("custom_field_2", FieldKind::IntRange { min: 1, max: 100000 }),
    FieldSpec::new("custom_field_3", FieldKind::Bool),
];

const EVENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("event_id", FieldKind::Uuid),
    FieldSpec::new(
        "event_type",
        FieldKind::OneOf(&[
            "page_view",
            "click",
            "scroll",
            "form_submit",
            "video_play",
            "download",
            "purchase",
            "signup",
            "logout",
        ]),
    ),
    FieldSpec::new("user_id", FieldKind::Uuid),
    FieldSpec::new("session_id", FieldKind::Uuid),
    FieldSpec::new(
        "timestamp",
        FieldKind::RecentTimestamp { days: TIMESTAMP_WINDOW_DAYS },
    ),
    FieldSpec::new("page_url", FieldKind::Pattern("https://example.com/{letters:10}")),
    FieldSpec::new("page_title", FieldKind::Pattern("Page {letters:15}")),
    FieldSpec::new("duration_ms", FieldKind::IntRange { min: 100, max: 60000 }),
    FieldSpec::new(
        "screen_width",
        FieldKind::OneOfInt(&[1920, 1366, 1440, 2560, 1280]),
    ),
    FieldSpec::new(
        "screen_height",
        FieldKind::OneOfInt(&[1080, 768, 900, 1440, 720]),
    ),
    FieldSpec::new(
        "browser",
        FieldKind::OneOf(&["Chrome", "Firefox", "Safari", "Edge", "Opera"]),
    ),
    FieldSpec::new(
        "os",
        FieldKind::OneOf(&["Windows", "macOS", "Linux", "iOS", "Android"]),
    ),
    FieldSpec::new(
        "device_type",
        FieldKind::OneOf(&["desktop", "mobile", "tablet"]),
    ),
    FieldSpec::new("ip_address", FieldKind::Pattern(IP_ADDRESS)),
    FieldSpec::new("country", FieldKind::OneOf(COUNTRIES)),
    FieldSpec::new("city", FieldKind::OneOf(CITIES)),
    FieldSpec::new("referrer", FieldKind::Pattern("https://{letters:8}.com")),
    FieldSpec::new("metadata", FieldKind::Nested(EVENT_METADATA_FIELDS)),
];

const PROFILE_ADDRESS_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("street", FieldKind::Alphanumeric(20)),
    FieldSpec::new("city", FieldKind::Alphanumeric(12)),
    FieldSpec::new("country", FieldKind::Alphanumeric(10)),
    FieldSpec::new("postal_code", FieldKind::Alphanumeric(6)),
];

const PROFILE_CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("phone", FieldKind::Pattern("+{int:1-999}-{alnum:10}")),
    FieldSpec::new("alternative_email", FieldKind::Pattern("{alnum:8}@{alnum:6}.org")),
];

const PROFILE_PREFERENCE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "communication_channels",
        FieldKind::Sample {
            pool: &["email", "phone", "sms", "whatsapp", "telegram"],
            min: 1,
            max: 4,
        },
    ),
    FieldSpec::new(
        "interests",
        FieldKind::StringList { min: 3, max: 10, len: 8 },
    ),
];

const PROFILE_PROFESSIONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("occupation", FieldKind::Alphanumeric(15)),
    FieldSpec::new(
        "skills",
        FieldKind::StringList { min: 5, max: 15, len: 8 },
    ),
    FieldSpec::new("years_of_experience", FieldKind::IntRange { min: 0, max: 30 }),
];

const PROFILE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id", FieldKind::Uuid),
    FieldSpec::new("name", FieldKind::Pattern("{alnum:10} {alnum:10}")),
    FieldSpec::new("email", FieldKind::Pattern("{alnum:8}@{alnum:6}.com")),
    FieldSpec::new("age", FieldKind::IntRange { min: 18, max: 80 }),
    FieldSpec::new("active", FieldKind::Bool),
    FieldSpec::new(
        "registration_date",
        FieldKind::Pattern("2024-{int:1-12:2}-{int:1-28:2}"),
    ),
    FieldSpec::new("address", FieldKind::Nested(PROFILE_ADDRESS_FIELDS)),
    FieldSpec::new("contact_details", FieldKind::Nested(PROFILE_CONTACT_FIELDS)),
    FieldSpec::new("preferences", FieldKind::Nested(PROFILE_PREFERENCE_FIELDS)),
    FieldSpec::new(
        "professional_info",
        FieldKind::Nested(PROFILE_PROFESSIONAL_FIELDS),
    ),
    FieldSpec::new(
        "additional_metadata",
        FieldKind::RandomKeys {
            count: 10,
            key_len: 6,
            min_len: 5,
            max_len: 20,
        },
    ),
];
