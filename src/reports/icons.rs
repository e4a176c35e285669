/// Glyph shown before each labelled field. Labels missing here render bare.
pub static FIELD_ICONS: &[(&str, &str)] = &[
    ("Full Name", "👤"),
    ("Age", "🎂"),
    ("Birth Date", "📅"),
    ("Sex", "⚧️"),
    ("University", "🏛️"),
    ("Street Name", "🏠"),
    ("City", "🏙️"),
    ("State", "🇺🇸"),
    ("Country", "🌎"),
    ("Postal Code", "📮"),
    ("Company", "🏢"),
    ("Phone Number", "📞"),
    ("Occupation", "💼"),
    ("Nationality", "🌍"),
    ("Language", "🗣️"),
    ("Username", "🖥️"),
    ("Password", "🔐"),
    ("Weight", "⚖️"),
    ("Height", "📏"),
];

pub fn icon_for(label: &str) -> Option<&'static str> {
    FIELD_ICONS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, icon)| *icon)
}
