/// Product line taxonomy for the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductLine {
    TermLife,
    WholeLife,
    CriticalIllness,
    Education,
}

impl ProductLine {
    pub fn label(&self) -> &'static str {
        match self {
            ProductLine::TermLife => "Term life insurance",
            ProductLine::WholeLife => "Whole life insurance",
            ProductLine::CriticalIllness => "Critical illness insurance",
            ProductLine::Education => "Education plan",
        }
    }
}

/// One catalog entry. The catalog is a constant table; production data
/// would come from a product system upstream of this core.
#[derive(Debug, Clone)]
pub struct ProductEntry {
    pub name: &'static str,
    pub english_name: &'static str,
    pub line: ProductLine,
    /// Eligibility range in years, inclusive.
    pub entry_ages: (u8, u8),
    pub payment_terms: &'static str,
    pub highlights: &'static [&'static str],
}

pub const CATALOG: &[ProductEntry] = &[
    ProductEntry {
        name: "An Tâm Tài Chính",
        english_name: "Financial Peace of Mind",
        line: ProductLine::TermLife,
        entry_ages: (18, 65),
        payment_terms: "Monthly, Quarterly, Semi-annual, Annual",
        highlights: &[
            "Bảo hiểm tử kỳ với quyền lợi bảo vệ toàn diện",
            "Sum assured up to 30 times annual income",
        ],
    },
    ProductEntry {
        name: "Phúc Bảo An",
        english_name: "Secure Prosperity",
        line: ProductLine::WholeLife,
        entry_ages: (0, 65),
        payment_terms: "10, 15, 20 years",
        highlights: &[
            "Bảo hiểm trọn đời với tích lũy",
            "Death benefit: 100% sum assured plus accumulated bonuses",
        ],
    },
    ProductEntry {
        name: "Sống Khỏe",
        english_name: "Healthy Living",
        line: ProductLine::CriticalIllness,
        entry_ages: (18, 60),
        payment_terms: "10-20 years",
        highlights: &[
            "Bảo hiểm bệnh hiểm nghèo toàn diện",
            "Covers 45 critical illnesses",
            "Lump sum payment up to 2 billion VND",
        ],
    },
    ProductEntry {
        name: "Học Vấn Tương Lai",
        english_name: "Future Education",
        line: ProductLine::Education,
        entry_ages: (0, 15),
        payment_terms: "Flexible premium payment terms",
        highlights: &[
            "Kế hoạch giáo dục với quyền lợi bảo vệ",
            "Guaranteed education fund",
        ],
    },
];

impl ProductEntry {
    /// Text block for this entry, as interpolated into generation prompts
    /// and seeded into the passage index.
    pub fn render(&self) -> String {
        let mut out = format!(
            "\"{}\" ({}), {}\nEntry age: {}-{} years\nPremium payment: {}\n",
            self.name,
            self.english_name,
            self.line.label(),
            self.entry_ages.0,
            self.entry_ages.1,
            self.payment_terms,
        );
        for highlight in self.highlights {
            out.push_str(highlight);
            out.push('\n');
        }
        out
    }
}

/// The catalog as one text table.
pub fn render_catalog() -> String {
    let mut out = String::new();
    for (i, entry) in CATALOG.iter().enumerate() {
        out.push_str(&format!("{}. {}", i + 1, entry.render()));
        out.push('\n');
    }
    out
}
