use std::collections::BTreeSet;

use super::domain::{BusinessModel, Difficulty, MaturityLevel, ModelId};

struct SampleSpec {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    difficulty: u8,
    capital_requirement: &'static str,
    time_to_revenue: &'static str,
    maturity_level: MaturityLevel,
    base_success_rate: Option<f64>,
    revenue_streams: &'static [&'static str],
    use_cases: &'static [&'static str],
    examples: &'static [&'static str],
    risks: &'static [&'static str],
}

impl SampleSpec {
    fn build(&self) -> BusinessModel {
        BusinessModel {
            id: ModelId(self.id.to_string()),
            name: self.name.to_string(),
            description: self.description.to_string(),
            tags: self
                .tags
                .iter()
                .map(|tag| tag.to_string())
                .collect::<BTreeSet<_>>(),
            difficulty: Difficulty::new(self.difficulty).expect("sample difficulty in range"),
            capital_requirement: Some(self.capital_requirement.to_string()),
            time_to_revenue: Some(self.time_to_revenue.to_string()),
            maturity_level: self.maturity_level,
            base_success_rate: self.base_success_rate,
            revenue_streams: to_strings(self.revenue_streams),
            use_cases: to_strings(self.use_cases),
            examples: to_strings(self.examples),
            risks: to_strings(self.risks),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The teaching catalog bundled with the platform. Deliberately small:
/// two or three representative models per archetype so demos and tests
/// exercise every ranking path without external data files.
pub(super) fn sample_records() -> Vec<BusinessModel> {
    SAMPLES.iter().map(SampleSpec::build).collect()
}

const SAMPLES: &[SampleSpec] = &[
    SampleSpec {
        id: "bm-saas-subscription",
        name: "SaaS Subscription",
        description: "Deliver software over the cloud for a recurring monthly or annual fee.",
        tags: &["software", "cloud", "digital", "platform", "recurring"],
        difficulty: 2,
        capital_requirement: "Low",
        time_to_revenue: "Fast",
        maturity_level: MaturityLevel::Dominant,
        base_success_rate: Some(0.7),
        revenue_streams: &["Monthly subscriptions", "Annual plans", "Seat expansion"],
        use_cases: &["Developer tooling", "Team productivity", "Vertical workflows"],
        examples: &["Salesforce", "Xero"],
        risks: &["Churn", "Crowded categories"],
    },
    SampleSpec {
        id: "bm-data-monetization",
        name: "Data Monetization",
        description: "Aggregate proprietary data and sell insights, benchmarks, or API access.",
        tags: &["data", "ai", "digital", "developer"],
        difficulty: 4,
        capital_requirement: "Medium",
        time_to_revenue: "Medium",
        maturity_level: MaturityLevel::Emerging,
        base_success_rate: Some(0.5),
        revenue_streams: &["API metering", "Insight reports"],
        use_cases: &["Market intelligence", "Model training data"],
        examples: &["Nielsen", "Scale AI"],
        risks: &["Privacy regulation", "Data acquisition cost"],
    },
    SampleSpec {
        id: "bm-marketplace-commission",
        name: "Marketplace Commission",
        description: "Match buyers and sellers on a platform and take a cut of every transaction.",
        tags: &["platform", "digital", "community"],
        difficulty: 4,
        capital_requirement: "Medium",
        time_to_revenue: "Slow",
        maturity_level: MaturityLevel::Established,
        base_success_rate: Some(0.45),
        revenue_streams: &["Transaction commissions", "Promoted listings"],
        use_cases: &["Service marketplaces", "Peer-to-peer rental"],
        examples: &["Airbnb", "Upwork"],
        risks: &["Cold-start liquidity", "Disintermediation"],
    },
    SampleSpec {
        id: "bm-hardware-as-a-service",
        name: "Hardware as a Service",
        description: "Lease connected equipment with bundled maintenance instead of selling it outright.",
        tags: &["hardware", "iot", "infrastructure", "recurring", "high_capex"],
        difficulty: 5,
        capital_requirement: "High",
        time_to_revenue: "Slow",
        maturity_level: MaturityLevel::Emerging,
        base_success_rate: Some(0.4),
        revenue_streams: &["Equipment leases", "Maintenance contracts", "Usage telemetry upsells"],
        use_cases: &["Industrial sensing", "Medical devices"],
        examples: &["Rolls-Royce TotalCare"],
        risks: &["Capital intensity", "Asset utilization"],
    },
    SampleSpec {
        id: "bm-contract-manufacturing",
        name: "Contract Manufacturing",
        description: "Produce goods to specification for brands that own the customer relationship.",
        tags: &["manufacturing", "hardware", "infrastructure"],
        difficulty: 3,
        capital_requirement: "High",
        time_to_revenue: "Medium",
        maturity_level: MaturityLevel::Dominant,
        base_success_rate: Some(0.6),
        revenue_streams: &["Per-unit production fees", "Tooling charges"],
        use_cases: &["Electronics assembly", "Food production"],
        examples: &["Foxconn"],
        risks: &["Thin margins", "Customer concentration"],
    },
    SampleSpec {
        id: "bm-licensing-royalties",
        name: "IP Licensing & Royalties",
        description: "License patents or designs to operators and earn royalties without manufacturing.",
        tags: &["ip", "royalties", "research", "knowledge"],
        difficulty: 3,
        capital_requirement: "Low",
        time_to_revenue: "Slow",
        maturity_level: MaturityLevel::Established,
        base_success_rate: Some(0.5),
        revenue_streams: &["Per-unit royalties", "Up-front license fees"],
        use_cases: &["Battery chemistry", "Media franchises"],
        examples: &["ARM", "Dolby"],
        risks: &["Enforcement cost", "Single-licensee dependence"],
    },
    SampleSpec {
        id: "bm-revenue-based-finance",
        name: "Revenue-Based Financing",
        description: "Fund ventures in exchange for a fixed share of future revenue until a cap is met.",
        tags: &["finance", "fund", "loan", "blended"],
        difficulty: 4,
        capital_requirement: "High",
        time_to_revenue: "Medium",
        maturity_level: MaturityLevel::Emerging,
        base_success_rate: Some(0.45),
        revenue_streams: &["Revenue share collections", "Origination fees"],
        use_cases: &["E-commerce growth capital", "SaaS financing"],
        examples: &["Clearco"],
        risks: &["Borrower revenue volatility", "Cost of capital"],
    },
    SampleSpec {
        id: "bm-blended-impact-fund",
        name: "Blended Impact Fund",
        description: "Combine grant, debt, and equity capital to finance ventures with measurable impact.",
        tags: &["finance", "equity", "blended", "impact", "fund"],
        difficulty: 5,
        capital_requirement: "High",
        time_to_revenue: "Slow",
        maturity_level: MaturityLevel::Emerging,
        base_success_rate: Some(0.35),
        revenue_streams: &["Management fees", "Carried interest"],
        use_cases: &["Climate finance", "Development projects"],
        examples: &["Blue Haven Initiative"],
        risks: &["Impact measurement burden", "Long fund cycles"],
    },
    SampleSpec {
        id: "bm-community-cooperative",
        name: "Community Cooperative",
        description: "Member-owned venture returning surplus to the local community it serves.",
        tags: &["community", "local", "cooperative", "impact"],
        difficulty: 2,
        capital_requirement: "Low",
        time_to_revenue: "Medium",
        maturity_level: MaturityLevel::Established,
        base_success_rate: Some(0.55),
        revenue_streams: &["Member fees", "Service margins"],
        use_cases: &["Community energy", "Agricultural co-ops"],
        examples: &["REI", "Fonterra"],
        risks: &["Slow governance", "Limited growth capital"],
    },
    SampleSpec {
        id: "bm-green-energy-ppa",
        name: "Green Energy PPA",
        description: "Build renewable generation and sell output under long-term power purchase agreements.",
        tags: &["green", "sustainability", "impact", "infrastructure", "high_capex"],
        difficulty: 5,
        capital_requirement: "High",
        time_to_revenue: "Slow",
        maturity_level: MaturityLevel::Established,
        base_success_rate: Some(0.5),
        revenue_streams: &["Contracted energy sales", "Renewable certificates"],
        use_cases: &["Solar farms", "Wind projects"],
        examples: &["NextEra"],
        risks: &["Permitting delays", "Interest-rate exposure"],
    },
    SampleSpec {
        id: "bm-expert-consulting",
        name: "Expert Consulting",
        description: "Sell specialist knowledge as advisory engagements and retainers.",
        tags: &["services", "consulting", "knowledge", "education"],
        difficulty: 1,
        capital_requirement: "Low",
        time_to_revenue: "Fast",
        maturity_level: MaturityLevel::Dominant,
        base_success_rate: Some(0.65),
        revenue_streams: &["Day rates", "Retainers", "Workshops"],
        use_cases: &["Technical due diligence", "Commercialisation strategy"],
        examples: &["Boutique advisories"],
        risks: &["Founder dependence", "Utilization swings"],
    },
    SampleSpec {
        id: "bm-research-spinout",
        name: "Research Spin-Out",
        description: "Commercialise university research through a venture that licenses the underlying IP.",
        tags: &["research", "ip", "knowledge", "education"],
        difficulty: 4,
        capital_requirement: "Medium",
        time_to_revenue: "Slow",
        maturity_level: MaturityLevel::Emerging,
        base_success_rate: Some(0.4),
        revenue_streams: &["Licensed products", "Grant co-funding"],
        use_cases: &["Deep tech", "Biotech"],
        examples: &["Oxford Nanopore"],
        risks: &["Long development cycles", "Founder-institution tension"],
    },
];
