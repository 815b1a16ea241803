/// Sentinel filter name that selects the whole directory for any axis.
pub const ALL_FILTER: &str = "all";

/// One selectable filter on a directory axis. A lender matches when any
/// keyword appears as a case-insensitive substring of the axis field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub name: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

pub fn find(catalog: &'static [FilterOption], name: &str) -> Option<&'static FilterOption> {
    catalog.iter().find(|option| option.name == name)
}

/// Lender categories, keyed off the `type` column.
pub static CATEGORY_FILTERS: &[FilterOption] = &[
    FilterOption {
        name: "all",
        label: "All Lenders",
        keywords: &[],
    },
    FilterOption {
        name: "development-bank",
        label: "Development Banks",
        keywords: &["MDB", "Development Bank", "Multilateral"],
    },
    FilterOption {
        name: "dfi",
        label: "DFIs",
        keywords: &["DFI", "Development Finance"],
    },
    FilterOption {
        name: "export-policy",
        label: "Export & Policy Banks",
        keywords: &["Export", "Policy", "ECA", "Export Credit"],
    },
    FilterOption {
        name: "commercial-bank",
        label: "Commercial Banks",
        keywords: &["Commercial Bank", "Investment Bank", "Global Bank"],
    },
    FilterOption {
        name: "bridge-lender",
        label: "Bridge Lenders",
        keywords: &["Bridge", "Specialty Finance"],
    },
    FilterOption {
        name: "private-equity",
        label: "Private Equity",
        keywords: &["Private Equity", "PE"],
    },
    FilterOption {
        name: "infrastructure",
        label: "Infrastructure Investors",
        keywords: &["Infrastructure", "Sovereign Wealth", "Pension Fund"],
    },
    FilterOption {
        name: "private-credit",
        label: "Private Credit",
        keywords: &["Private Credit", "Asset Manager", "Credit Manager"],
    },
];

/// Broad regions, keyed off the coverage text (regions with the
/// geographic-coverage fallback).
pub static REGION_FILTERS: &[FilterOption] = &[
    FilterOption {
        name: "all",
        label: "All Regions",
        keywords: &[],
    },
    FilterOption {
        name: "global",
        label: "Global",
        keywords: &["Global"],
    },
    FilterOption {
        name: "africa",
        label: "Africa",
        keywords: &["Africa"],
    },
    FilterOption {
        name: "asia",
        label: "Asia",
        keywords: &["Asia", "Asia-Pacific"],
    },
    FilterOption {
        name: "latin-america",
        label: "Latin America",
        keywords: &[
            "Latin America",
            "LatAm",
            "Caribbean",
            "Brazil",
            "Colombia",
            "Mexico",
        ],
    },
    FilterOption {
        name: "europe",
        label: "Europe",
        keywords: &["Europe", "European"],
    },
    FilterOption {
        name: "middle-east",
        label: "Middle East",
        keywords: &["Middle East"],
    },
    FilterOption {
        name: "north-america",
        label: "North America",
        keywords: &["US", "Canada", "United States"],
    },
    FilterOption {
        name: "emerging-markets",
        label: "Emerging Markets",
        keywords: &["Emerging", "developing countries", "EMs"],
    },
];

/// Individual countries, also keyed off the coverage text.
pub static COUNTRY_FILTERS: &[FilterOption] = &[
    FilterOption {
        name: "all",
        label: "All Countries",
        keywords: &[],
    },
    FilterOption {
        name: "australia",
        label: "Australia",
        keywords: &["Australia"],
    },
    FilterOption {
        name: "brazil",
        label: "Brazil",
        keywords: &["Brazil"],
    },
    FilterOption {
        name: "canada",
        label: "Canada",
        keywords: &["Canada"],
    },
    FilterOption {
        name: "china",
        label: "China",
        keywords: &["China"],
    },
    FilterOption {
        name: "colombia",
        label: "Colombia",
        keywords: &["Colombia"],
    },
    FilterOption {
        name: "finland",
        label: "Finland",
        keywords: &["Finland"],
    },
    FilterOption {
        name: "france",
        label: "France",
        keywords: &["France"],
    },
    FilterOption {
        name: "germany",
        label: "Germany",
        keywords: &["Germany"],
    },
    FilterOption {
        name: "india",
        label: "India",
        keywords: &["India"],
    },
    FilterOption {
        name: "italy",
        label: "Italy",
        keywords: &["Italy"],
    },
    FilterOption {
        name: "japan",
        label: "Japan",
        keywords: &["Japan"],
    },
    FilterOption {
        name: "mexico",
        label: "Mexico",
        keywords: &["Mexico"],
    },
    FilterOption {
        name: "netherlands",
        label: "Netherlands",
        keywords: &["Netherlands"],
    },
    FilterOption {
        name: "nigeria",
        label: "Nigeria",
        keywords: &["Nigeria"],
    },
    FilterOption {
        name: "pakistan",
        label: "Pakistan",
        keywords: &["Pakistan"],
    },
    FilterOption {
        name: "south-africa",
        label: "South Africa",
        keywords: &["South Africa"],
    },
    FilterOption {
        name: "south-korea",
        label: "South Korea",
        keywords: &["South Korea", "Korea"],
    },
    FilterOption {
        name: "spain",
        label: "Spain",
        keywords: &["Spain"],
    },
    FilterOption {
        name: "uk",
        label: "United Kingdom",
        keywords: &["UK", "United Kingdom"],
    },
    FilterOption {
        name: "us",
        label: "United States",
        keywords: &["US", "USA", "United States"],
    },
];
