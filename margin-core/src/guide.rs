//! Explainer text shown next to the calculator.
//!
//! The content is fixed. [`SECTIONS`] lists it in reading order; the shell
//! decides how to lay it out.

/// One-line help for the margin result.
pub const MARGIN_HELP: &str =
    "Gross profit margin measures the percentage of revenue that exceeds the cost of goods sold.";

pub const TITLE: &str = "Understanding Gross Profit Margin";

pub const FORMULA: &str =
    "Gross Profit Margin = ((Revenue - Cost of Goods Sold) / Revenue) × 100%";

/// How a section's items are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Bulleted,
    Numbered,
}

/// A list entry, optionally led by a short bold term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideItem {
    pub term: Option<&'static str>,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSection {
    /// `None` for the untitled opening paragraph.
    pub heading: Option<&'static str>,
    pub paragraph: Option<&'static str>,
    /// Set-off line such as the formula.
    pub callout: Option<&'static str>,
    pub items: &'static [GuideItem],
    pub list_style: ListStyle,
}

const fn term(
    term: &'static str,
    text: &'static str,
) -> GuideItem {
    GuideItem {
        term: Some(term),
        text,
    }
}

const fn plain(text: &'static str) -> GuideItem {
    GuideItem { term: None, text }
}

const WHY_IT_MATTERS: &[GuideItem] = &[
    term(
        "Measures efficiency",
        "A higher gross profit margin indicates that a company can produce its goods or services more efficiently.",
    ),
    term(
        "Competitive analysis",
        "Compare your margins with competitors to understand your market position.",
    ),
    term(
        "Pricing strategy",
        "Helps in setting appropriate prices for your products or services.",
    ),
    term(
        "Investment decisions",
        "Investors often examine gross profit margins when evaluating companies.",
    ),
    term(
        "Business planning",
        "Guides decisions on cost management, pricing, and growth strategies.",
    ),
];

const BENCHMARKS: &[GuideItem] = &[
    plain("Retail businesses typically have margins between 25% and 35%"),
    plain("Manufacturing companies often range from 25% to 40%"),
    plain("Service-based businesses may see margins of 40% to 75%"),
    plain("Software and technology companies can achieve margins of 70% to 90%"),
];

const STRATEGIES: &[GuideItem] = &[
    term(
        "Optimize pricing",
        "Regularly review and adjust your pricing strategy based on market conditions, customer value perception, and competitive analysis.",
    ),
    term(
        "Reduce COGS",
        "Negotiate better terms with suppliers, optimize your supply chain, or find alternative suppliers with better rates.",
    ),
    term(
        "Improve operational efficiency",
        "Streamline production processes, reduce waste, and implement technology to automate tasks.",
    ),
    term(
        "Focus on high-margin products",
        "Analyze which products or services generate the highest margins and consider reallocating resources accordingly.",
    ),
    term(
        "Volume purchasing",
        "Take advantage of bulk discounts by purchasing larger quantities when appropriate.",
    ),
];

pub const SECTIONS: &[GuideSection] = &[
    GuideSection {
        heading: None,
        paragraph: Some(
            "The gross profit margin is a key financial metric that measures the profitability of a business after accounting for the costs directly related to producing the goods or services it sells. It's one of the most important indicators of a company's financial health and operational efficiency.",
        ),
        callout: None,
        items: &[],
        list_style: ListStyle::Bulleted,
    },
    GuideSection {
        heading: Some("How to Calculate Gross Profit Margin"),
        paragraph: Some(
            "To calculate gross profit margin, you need two primary figures: your total revenue and the cost of goods sold (COGS). The formula is:",
        ),
        callout: Some(FORMULA),
        items: &[],
        list_style: ListStyle::Bulleted,
    },
    GuideSection {
        heading: Some("Why Gross Profit Margin Matters"),
        paragraph: None,
        callout: None,
        items: WHY_IT_MATTERS,
        list_style: ListStyle::Bulleted,
    },
    GuideSection {
        heading: Some("Industry Benchmarks"),
        paragraph: Some("Gross profit margins vary significantly across industries. For example:"),
        callout: None,
        items: BENCHMARKS,
        list_style: ListStyle::Bulleted,
    },
    GuideSection {
        heading: Some("Strategies to Improve Your Gross Profit Margin"),
        paragraph: None,
        callout: None,
        items: STRATEGIES,
        list_style: ListStyle::Numbered,
    },
    GuideSection {
        heading: Some("Pro Tip"),
        paragraph: Some(
            "While gross profit margin is important, it's best to analyze it alongside other financial metrics such as net profit margin, operating margin, and return on investment for a comprehensive view of your business's financial health.",
        ),
        callout: None,
        items: &[],
        list_style: ListStyle::Bulleted,
    },
];
