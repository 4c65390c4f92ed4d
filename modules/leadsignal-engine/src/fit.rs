// Product-fit scoring: five independent dimensions per catalog product,
// summed into a 0-100 match score. Every dimension carries an explanation
// string even at zero, so a reviewer can audit why a product ranked where
// it did.
//
// The weights below are behavior-compatible constants, not tuned values.

use leadsignal_common::{
    CompanyProfile, DimensionScore, DistributionModel, Product, ProductFitBreakdown,
    ProductFitReport, TargetSize,
};

const INDUSTRY_EXACT: u8 = 30;
const INDUSTRY_STRONG_OVERLAP: u8 = 25;
const INDUSTRY_WEAK_OVERLAP: u8 = 15;
const INDUSTRY_CATEGORY_SUBSTRING: u8 = 10;

const SIZE_IN_BAND: u8 = 20;
const SIZE_NEAR_BAND: u8 = 10;
const SIZE_UNIVERSAL: u8 = 10;

const CATEGORY_DEALER: u8 = 15;
const CATEGORY_TRADE: u8 = 10;
const CATEGORY_KEYWORD_EACH: u8 = 5;
const CATEGORY_KEYWORD_MAX: u8 = 15;
const CATEGORY_NAME_TOKENS: u8 = 5;
const CATEGORY_MAX: u8 = 30;

const GEO_EXACT: u8 = 10;
const GEO_CONTINENT: u8 = 5;
const GEO_UNRESTRICTED: u8 = 5;

const MODEL_EXACT: u8 = 10;
const MODEL_ADJACENT: u8 = 7;

/// How many top-ranked products feed the aggregate score.
const AGGREGATE_TOP_N: usize = 3;

const DEALER_KEYWORDS: &[&str] = &["dealer", "distributor", "distribution", "reseller"];
const TRADE_KEYWORDS: &[&str] = &["b2b", "trade", "wholesale", "import", "export", "commerce"];

/// Score one product against the company profile.
pub fn score_product(product: &Product, profile: &CompanyProfile) -> ProductFitBreakdown {
    let industry = industry_score(product, profile);
    let size = size_score(product, profile);
    let category = category_score(product, profile);
    let geography = geography_score(product, profile);
    let business_model = business_model_score(product, profile);

    let total = industry.score as u32
        + size.score as u32
        + category.score as u32
        + geography.score as u32
        + business_model.score as u32;

    ProductFitBreakdown {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        industry,
        size,
        category,
        geography,
        business_model,
        match_score: total.min(100) as u8,
    }
}

/// Score the whole catalog: products ranked by match score descending,
/// aggregate = integer mean of the top three (0 for an empty catalog).
pub fn score_catalog(products: &[Product], profile: &CompanyProfile) -> ProductFitReport {
    let mut ranked: Vec<ProductFitBreakdown> = products
        .iter()
        .map(|p| score_product(p, profile))
        .collect();
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    let top: Vec<&ProductFitBreakdown> = ranked.iter().take(AGGREGATE_TOP_N).collect();
    let aggregate_score = if top.is_empty() {
        0
    } else {
        (top.iter().map(|b| b.match_score as u32).sum::<u32>() / top.len() as u32) as u8
    };

    let recommendations = build_recommendations(&ranked, aggregate_score);

    ProductFitReport {
        ranked,
        aggregate_score,
        recommendations,
    }
}

fn build_recommendations(ranked: &[ProductFitBreakdown], aggregate: u8) -> Vec<String> {
    if ranked.is_empty() {
        return vec!["No product catalog provided; fit could not be assessed.".to_string()];
    }

    let mut recs = Vec::new();
    let best = &ranked[0];
    if best.match_score >= 70 {
        recs.push(format!(
            "Lead outreach with {} (fit {}/100).",
            best.product_name, best.match_score
        ));
    } else if best.match_score >= 40 {
        recs.push(format!(
            "Probe interest in {} (fit {}/100) before committing sales effort.",
            best.product_name, best.match_score
        ));
    } else {
        recs.push(format!(
            "Weak catalog fit (best {}/100); qualify the company profile further before outreach.",
            best.match_score
        ));
    }
    if aggregate >= 40 && ranked.len() > 1 {
        recs.push(format!(
            "Bundle the top {} products in the first proposal.",
            ranked.len().min(AGGREGATE_TOP_N)
        ));
    }
    recs
}

// ---------------------------------------------------------------------------
// Dimensions
// ---------------------------------------------------------------------------

/// Lowercased alphanumeric tokens longer than two characters.
fn tokens(s: &str) -> Vec<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 2)
        .map(String::from)
        .collect()
}

fn industry_score(product: &Product, profile: &CompanyProfile) -> DimensionScore {
    let (Some(product_industry), Some(company_industry)) =
        (product.industry.as_deref(), profile.industry.as_deref())
    else {
        // Category-substring fallback still applies when only the company
        // side is known.
        if let Some(company_industry) = profile.industry.as_deref() {
            let ci = company_industry.to_lowercase();
            let cat = product.category.to_lowercase();
            if ci.contains(&cat) || cat.contains(&ci) {
                return DimensionScore {
                    score: INDUSTRY_CATEGORY_SUBSTRING,
                    explanation: format!(
                        "Product category '{}' overlaps company industry '{}'",
                        product.category, company_industry
                    ),
                };
            }
        }
        return DimensionScore {
            score: 0,
            explanation: "Industry data missing on one or both sides".to_string(),
        };
    };

    let pi = product_industry.trim().to_lowercase();
    let ci = company_industry.trim().to_lowercase();

    if pi == ci {
        return DimensionScore {
            score: INDUSTRY_EXACT,
            explanation: format!("Exact industry match ({company_industry})"),
        };
    }

    let product_tokens = tokens(&pi);
    let company_tokens = tokens(&ci);
    let shared = product_tokens
        .iter()
        .filter(|t| company_tokens.contains(*t))
        .count();
    if shared >= 2 {
        return DimensionScore {
            score: INDUSTRY_STRONG_OVERLAP,
            explanation: format!("{shared} shared industry keywords"),
        };
    }
    if shared == 1 {
        return DimensionScore {
            score: INDUSTRY_WEAK_OVERLAP,
            explanation: "One shared industry keyword".to_string(),
        };
    }

    let cat = product.category.to_lowercase();
    if ci.contains(&cat) || cat.contains(&ci) {
        return DimensionScore {
            score: INDUSTRY_CATEGORY_SUBSTRING,
            explanation: format!(
                "Product category '{}' overlaps company industry '{}'",
                product.category, company_industry
            ),
        };
    }

    DimensionScore {
        score: 0,
        explanation: format!("No overlap between '{product_industry}' and '{company_industry}'"),
    }
}

/// Employee-count band per declared target size.
fn band(size: TargetSize) -> (u32, u32) {
    match size {
        TargetSize::Enterprise => (250, u32::MAX),
        TargetSize::Mid => (50, 500),
        TargetSize::Small => (10, 100),
        TargetSize::Startup => (1, 50),
    }
}

fn size_score(product: &Product, profile: &CompanyProfile) -> DimensionScore {
    let Some(target) = product.target_size else {
        return DimensionScore {
            score: SIZE_UNIVERSAL,
            explanation: "No target size declared (universal fit)".to_string(),
        };
    };
    let Some(count) = profile.employee_count else {
        return DimensionScore {
            score: 0,
            explanation: "Company employee count unknown".to_string(),
        };
    };

    let (lo, hi) = band(target);
    if count >= lo && count <= hi {
        return DimensionScore {
            score: SIZE_IN_BAND,
            explanation: format!("{count} employees inside the {target:?} band"),
        };
    }

    // 50-150% of the band edges still counts as a near miss.
    let near_lo = lo / 2;
    let near_hi = hi.saturating_mul(3) / 2;
    if count >= near_lo && count <= near_hi {
        return DimensionScore {
            score: SIZE_NEAR_BAND,
            explanation: format!("{count} employees near the {target:?} band edges"),
        };
    }

    DimensionScore {
        score: 0,
        explanation: format!("{count} employees outside the {target:?} band"),
    }
}

fn category_score(product: &Product, profile: &CompanyProfile) -> DimensionScore {
    let company_text = [
        profile.industry.as_deref().unwrap_or(""),
        profile.description.as_deref().unwrap_or(""),
        profile.website.as_deref().unwrap_or(""),
    ]
    .join(" ")
    .to_lowercase();

    if company_text.trim().is_empty() {
        return DimensionScore {
            score: 0,
            explanation: "No company text to match against".to_string(),
        };
    }

    let mut score: u8 = 0;
    let mut parts = Vec::new();

    if DEALER_KEYWORDS.iter().any(|k| company_text.contains(k)) {
        score += CATEGORY_DEALER;
        parts.push("dealer/distributor language".to_string());
    }
    if TRADE_KEYWORDS.iter().any(|k| company_text.contains(k)) {
        score += CATEGORY_TRADE;
        parts.push("trade/B2B language".to_string());
    }

    let matched_keywords = tokens(&product.category)
        .into_iter()
        .filter(|t| company_text.contains(t.as_str()))
        .count() as u8;
    if matched_keywords > 0 {
        let keyword_points = (matched_keywords * CATEGORY_KEYWORD_EACH).min(CATEGORY_KEYWORD_MAX);
        score += keyword_points;
        parts.push(format!("{matched_keywords} product-category keywords"));
    }

    if tokens(&product.name)
        .iter()
        .any(|t| company_text.contains(t.as_str()))
    {
        score += CATEGORY_NAME_TOKENS;
        parts.push("product name mentioned".to_string());
    }

    let explanation = if parts.is_empty() {
        "No category-relevant language in company text".to_string()
    } else {
        format!("Matched: {}", parts.join(", "))
    };

    DimensionScore {
        score: score.min(CATEGORY_MAX),
        explanation,
    }
}

/// Coarse continent lookup for the geography fallback.
fn continent_of(country: &str) -> Option<&'static str> {
    let c = country.trim().to_lowercase();
    let asia = ["china", "india", "japan", "south korea", "vietnam", "indonesia", "thailand"];
    let south_america = ["brazil", "argentina", "chile", "colombia", "peru", "uruguay"];
    let north_america = ["usa", "united states", "canada", "mexico"];
    let europe = [
        "uk", "united kingdom", "germany", "france", "spain", "italy", "portugal", "netherlands",
        "poland", "sweden",
    ];
    let oceania = ["australia", "new zealand"];

    if asia.contains(&c.as_str()) {
        Some("asia")
    } else if south_america.contains(&c.as_str()) {
        Some("south america")
    } else if north_america.contains(&c.as_str()) {
        Some("north america")
    } else if europe.contains(&c.as_str()) {
        Some("europe")
    } else if oceania.contains(&c.as_str()) {
        Some("oceania")
    } else {
        None
    }
}

fn geography_score(product: &Product, profile: &CompanyProfile) -> DimensionScore {
    if product.regions.is_empty() {
        return DimensionScore {
            score: GEO_UNRESTRICTED,
            explanation: "No regional restriction declared".to_string(),
        };
    }
    let Some(country) = profile.country.as_deref() else {
        return DimensionScore {
            score: 0,
            explanation: "Company country unknown".to_string(),
        };
    };

    let country_lower = country.trim().to_lowercase();
    let state_lower = profile.state.as_deref().map(|s| s.trim().to_lowercase());

    for region in &product.regions {
        let r = region.trim().to_lowercase();
        if r == country_lower || state_lower.as_deref() == Some(r.as_str()) {
            return DimensionScore {
                score: GEO_EXACT,
                explanation: format!("Company region matches declared region '{region}'"),
            };
        }
    }

    if let Some(continent) = continent_of(&country_lower) {
        for region in &product.regions {
            let r = region.trim().to_lowercase();
            if r == continent || continent_of(&r) == Some(continent) {
                return DimensionScore {
                    score: GEO_CONTINENT,
                    explanation: format!("Same continent ({continent})"),
                };
            }
        }
    }

    DimensionScore {
        score: 0,
        explanation: format!("'{country}' outside declared regions"),
    }
}

fn business_model_score(product: &Product, profile: &CompanyProfile) -> DimensionScore {
    let (Some(product_model), Some(company_model)) =
        (product.distribution_model, profile.business_model)
    else {
        return DimensionScore {
            score: 0,
            explanation: "Distribution model undeclared on one or both sides".to_string(),
        };
    };

    if product_model == company_model {
        return DimensionScore {
            score: MODEL_EXACT,
            explanation: format!("Exact model match ({company_model})"),
        };
    }

    // Importers routinely act as distributors and vice versa.
    let adjacent = matches!(
        (product_model, company_model),
        (DistributionModel::Distributor, DistributionModel::Importer)
            | (DistributionModel::Importer, DistributionModel::Distributor)
    );
    if adjacent {
        return DimensionScore {
            score: MODEL_ADJACENT,
            explanation: format!("Compatible model ({company_model} for {product_model} product)"),
        };
    }

    DimensionScore {
        score: 0,
        explanation: format!("{company_model} does not fit a {product_model}-targeted product"),
    }
}
