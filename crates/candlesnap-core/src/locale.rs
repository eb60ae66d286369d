// File: crates/candlesnap-core/src/locale.rs
// Summary: Localized string tables for title, axis, and footer text.

/// Every user-visible string the renderer draws, keyed by locale name.
/// Same lookup shape as `theme`: immutable tables, resolved once per render.
#[derive(Clone, Copy, Debug)]
pub struct Strings {
    pub name: &'static str,
    /// Heading drawn opposite the symbol line in the top region.
    pub chart_title: &'static str,
    /// Label in front of the footer price readout.
    pub last_price: &'static str,
    /// Branding line at the very bottom of the canvas.
    pub attribution: &'static str,
    /// Gregorian month names used by day/month time-axis labels.
    pub months: [&'static str; 12],
}

pub fn en() -> Strings {
    Strings {
        name: "en",
        chart_title: "Candlestick Chart",
        last_price: "Last Price",
        attribution: "generated by candlesnap",
        months: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun",
            "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
    }
}

pub fn fa() -> Strings {
    Strings {
        name: "fa",
        chart_title: "نمودار شمعی",
        last_price: "آخرین قیمت",
        attribution: "تولید شده توسط candlesnap",
        months: [
            "ژانویه", "فوریه", "مارس", "آوریل", "مه", "ژوئن",
            "ژوئیه", "اوت", "سپتامبر", "اکتبر", "نوامبر", "دسامبر",
        ],
    }
}

/// Return the built-in locale tables.
pub fn presets() -> Vec<Strings> {
    vec![en(), fa()]
}

/// Find a locale by its `name`, falling back to English.
pub fn find(name: &str) -> Strings {
    for s in presets() { if s.name.eq_ignore_ascii_case(name) { return s; } }
    en()
}
