//! Taxonomy configuration: the six fixed categories and their curated
//! keyword vocabularies.
//!
//! The keyword sets fully define category membership. They are
//! configuration data, not logic: the classifier only walks the
//! compiled rules in priority order and takes the first match. Keywords
//! cover Spanish and English label variants because the upstream topic
//! extraction emits both.

use regex::RegexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Brand marker matched by the own-brand category when no explicit
/// marker is configured.
pub const DEFAULT_BRAND_MARKER: &str = "the core";

/// Competing traditional institution name fragments.
pub const INSTITUTION_KEYWORDS: &[&str] = &[
    "universidad",
    "universidades",
    "university",
    "universities",
    "facultad",
    "u-tad",
    "utad",
    "ecam",
    "septima ars",
    "séptima ars",
    "instituto del cine",
    "escuela oficial",
];

/// Scholarship, pricing, financing and enrollment vocabulary.
pub const ADMISSIONS_COST_KEYWORDS: &[&str] = &[
    "admisiones",
    "admission",
    "admissions",
    "inscripcion",
    "inscripción",
    "matricula",
    "matrícula",
    "enrollment",
    "requisitos",
    "plazos",
    "solicitud",
    "becas",
    "beca",
    "scholarship",
    "scholarships",
    "coste",
    "costo",
    "precio",
    "precios",
    "price",
    "prices",
    "tuition",
    "financiacion",
    "financiación",
    "financing",
    "roi",
];

/// Employment and job-market vocabulary.
pub const CAREER_KEYWORDS: &[&str] = &[
    "empleabilidad",
    "employability",
    "empleo",
    "empleos",
    "employment",
    "trabajo",
    "trabajos",
    "jobs",
    "job market",
    "mercado laboral",
    "salarios",
    "salaries",
    "salidas profesionales",
    "outcomes",
    "career",
];

/// Subject and discipline vocabulary for program-related labels.
pub const PROGRAM_KEYWORDS: &[&str] = &[
    "cine",
    "film",
    "audiovisual",
    "animacion",
    "animación",
    "animation",
    "vfx",
    "sonido",
    "videojuegos",
    "games",
    "engineering",
    "ingenieria",
    "ingeniería",
    "software",
    "programacion",
    "programación",
    "diseño",
    "design",
    "grado",
    "grados",
    "master",
    "máster",
    "masters",
    "másteres",
    "curriculum",
    "plan de estudios",
    "programas",
    "programs",
    "degree",
    "degrees",
];

/// The six fixed roll-up categories, in match priority order. The first
/// matching category wins, which makes the predicates mutually exclusive
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopicCategory {
    BrandMentions,
    InstitutionMentions,
    AdmissionsAndCost,
    CareerOutcomes,
    ProgramsAndDegrees,
    General,
}

impl TopicCategory {
    pub const PRIORITY_ORDER: [TopicCategory; 6] = [
        TopicCategory::BrandMentions,
        TopicCategory::InstitutionMentions,
        TopicCategory::AdmissionsAndCost,
        TopicCategory::CareerOutcomes,
        TopicCategory::ProgramsAndDegrees,
        TopicCategory::General,
    ];

    /// Position in the priority order; doubles as the accumulator index
    /// during classification.
    pub fn index(&self) -> usize {
        match self {
            TopicCategory::BrandMentions => 0,
            TopicCategory::InstitutionMentions => 1,
            TopicCategory::AdmissionsAndCost => 2,
            TopicCategory::CareerOutcomes => 3,
            TopicCategory::ProgramsAndDegrees => 4,
            TopicCategory::General => 5,
        }
    }

    /// Group name shown in the collapsible topic table.
    pub fn display_name(&self) -> &'static str {
        match self {
            TopicCategory::BrandMentions => "Menciones de Marca",
            TopicCategory::InstitutionMentions => "Menciones de Instituciones Tradicionales",
            TopicCategory::AdmissionsAndCost => "Admisiones y Costes",
            TopicCategory::CareerOutcomes => "Salidas Profesionales",
            TopicCategory::ProgramsAndDegrees => "Programas y Grados",
            TopicCategory::General => "Temas Generales del Sector",
        }
    }
}

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("invalid keyword pattern for category {category:?}")]
    InvalidPattern {
        category: TopicCategory,
        #[source]
        source: regex::Error,
    },
}

/// One ordered predicate: a category plus its compiled keyword matcher.
#[derive(Debug, Clone)]
struct TaxonomyRule {
    category: TopicCategory,
    matcher: RegexSet,
}

/// Compiled taxonomy table. The catch-all category carries no rule; it
/// is the fall-through when nothing matches.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    rules: Vec<TaxonomyRule>,
}

impl Taxonomy {
    /// Built-in table with the default brand marker.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::with_brand_marker(DEFAULT_BRAND_MARKER)
    }

    /// Built-in table with a caller-supplied brand marker term.
    pub fn with_brand_marker(marker: &str) -> Result<Self, TaxonomyError> {
        let marker = marker.trim().to_lowercase();
        let brand_keywords: Vec<&str> = if marker.is_empty() {
            vec![DEFAULT_BRAND_MARKER]
        } else {
            vec![marker.as_str()]
        };

        Self::from_table(&[
            (TopicCategory::BrandMentions, brand_keywords.as_slice()),
            (TopicCategory::InstitutionMentions, INSTITUTION_KEYWORDS),
            (TopicCategory::AdmissionsAndCost, ADMISSIONS_COST_KEYWORDS),
            (TopicCategory::CareerOutcomes, CAREER_KEYWORDS),
            (TopicCategory::ProgramsAndDegrees, PROGRAM_KEYWORDS),
        ])
    }

    /// Compile an ordered category/keyword table. Keywords are matched
    /// as case-insensitive literal substrings.
    pub fn from_table(table: &[(TopicCategory, &[&str])]) -> Result<Self, TaxonomyError> {
        let mut rules = Vec::with_capacity(table.len());
        for (category, keywords) in table {
            let patterns: Vec<String> = keywords
                .iter()
                .map(|keyword| format!("(?i){}", regex::escape(keyword)))
                .collect();
            let matcher =
                RegexSet::new(&patterns).map_err(|source| TaxonomyError::InvalidPattern {
                    category: *category,
                    source,
                })?;
            rules.push(TaxonomyRule {
                category: *category,
                matcher,
            });
        }
        Ok(Self { rules })
    }

    /// Resolve a free-text topic label to its category. Labels are
    /// lower-cased and trimmed before matching; anything unmatched lands
    /// in the general bucket, never dropped.
    pub fn category_for(&self, label: &str) -> TopicCategory {
        let normalized = label.trim().to_lowercase();
        for rule in &self.rules {
            if rule.matcher.is_match(&normalized) {
                return rule.category;
            }
        }
        TopicCategory::General
    }
}
