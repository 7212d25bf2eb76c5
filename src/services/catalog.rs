//! Static display lookups for category slugs

/// Icon for slugs without a mapping
pub const DEFAULT_ICON: &str = "💼";

/// Color for slugs without a mapping
pub const DEFAULT_COLOR: &str = "#4ecdc4";

const ICONS: &[(&str, &str)] = &[
    ("real-estate-agents", "🏠"),
    ("mortgage-broker", "💰"),
    ("plumbers", "🔧"),
    ("cabinet-maker---carpenter", "🔨"),
    ("cleaners", "🧽"),
    ("childcare-and-early-learning", "👶"),
    ("electricians", "⚡"),
    ("gutter-and-roofing-services", "🏠"),
    ("aircon-evaporative", "❄️"),
    ("car-mechanics-and-repairs", "🚗"),
    ("dentists", "🦷"),
    ("health-and-wellness", "🏥"),
    ("restaurants", "🍽️"),
    ("cafes", "☕"),
    ("beauty-and-personal-care", "💄"),
    ("education", "📚"),
    ("fitness", "💪"),
    ("legal-services", "⚖️"),
    ("financial-services", "💼"),
    ("technology", "💻"),
    ("transport", "🚌"),
    ("retail", "🛍️"),
    ("entertainment", "🎪"),
    ("construction", "🏗️"),
    ("landscaping", "🌱"),
    ("photography", "📸"),
    ("catering", "🍽️"),
    ("accounting", "📊"),
    ("insurance", "🛡️"),
    ("pet-services", "🐕"),
    ("home-services", "🏡"),
    ("automotive", "🚙"),
    ("medical", "⚕️"),
    ("tutoring", "📖"),
    ("consulting", "💭"),
];

const COLORS: &[(&str, &str)] = &[
    ("real-estate-agents", "#3B82F6"),
    ("mortgage-broker", "#10B981"),
    ("plumbers", "#F59E0B"),
    ("cabinet-maker---carpenter", "#8B5CF6"),
    ("cleaners", "#06B6D4"),
    ("childcare-and-early-learning", "#F97316"),
    ("electricians", "#EF4444"),
    ("gutter-and-roofing-services", "#6B7280"),
    ("aircon-evaporative", "#3B82F6"),
    ("car-mechanics-and-repairs", "#DC2626"),
    ("dentists", "#059669"),
    ("health-and-wellness", "#7C3AED"),
    ("restaurants", "#DC2626"),
    ("cafes", "#92400E"),
    ("beauty-and-personal-care", "#EC4899"),
    ("education", "#2563EB"),
    ("fitness", "#059669"),
    ("legal-services", "#374151"),
    ("financial-services", "#1F2937"),
    ("technology", "#6366F1"),
    ("transport", "#0891B2"),
    ("retail", "#7C2D12"),
    ("entertainment", "#BE185D"),
];

fn lookup(table: &'static [(&'static str, &'static str)], slug: &str) -> Option<&'static str> {
    table.iter().find(|(key, _)| *key == slug).map(|(_, v)| *v)
}

/// Emoji icon for a category slug
pub fn icon_for(slug: &str) -> &'static str {
    lookup(ICONS, slug).unwrap_or(DEFAULT_ICON)
}

/// Hex color for a category slug
pub fn color_for(slug: &str) -> &'static str {
    lookup(COLORS, slug).unwrap_or(DEFAULT_COLOR)
}
