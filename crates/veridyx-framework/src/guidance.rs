//! Fixed guidance tables: bias priorities and common assumptions are keyed
//! by field, assessment focus and typical limitations by document type. The
//! two axes never interact for these lists.

use veridyx_classify::{AcademicField, DocumentType};

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Field-specific bias assessment priorities.
pub fn bias_priorities(field: AcademicField) -> Vec<String> {
    let items: &[&str] = match field {
        AcademicField::NaturalSciences => &[
            "Selection bias in experimental design",
            "Measurement bias from instrumentation",
            "Publication bias for significant results",
            "Funding source influence",
        ],
        AcademicField::Engineering => &[
            "Confirmation bias in design choices",
            "Incomplete testing of edge cases",
            "Scalability assumptions not verified",
            "Cost-benefit bias in recommendations",
        ],
        AcademicField::Medical => &[
            "Patient selection bias",
            "Placebo effect (if applicable)",
            "Publication bias for efficacy claims",
            "Conflict of interest from pharmaceutical funding",
            "Reporting bias on adverse effects",
        ],
        AcademicField::Agricultural => &[
            "Environmental variation not controlled",
            "Seasonal/temporal bias",
            "Economic incentive bias",
            "Publication bias for positive results",
        ],
        AcademicField::SocialSciences => &[
            "Demographic sampling bias",
            "Social desirability bias",
            "Researcher's cultural assumptions",
            "Selection effects in self-report",
        ],
        AcademicField::Humanities => &[
            "Interpretive bias based on author's perspective",
            "Selective evidence citation",
            "Presentist bias (applying modern standards)",
            "Source authenticity concerns",
        ],
        AcademicField::FormalSciences => &[
            "Assumption validity in axioms",
            "Proof completeness",
            "Generalizability of abstract results",
            "Computational bias (approximation errors)",
        ],
        AcademicField::Interdisciplinary => &[
            "Disciplinary assumption conflicts",
            "Method appropriateness across domains",
            "Oversimplification of complexity",
        ],
    };
    to_strings(items)
}

/// Assessment focus areas per document type.
pub fn assessment_focus(doc_type: DocumentType) -> Vec<String> {
    let items: &[&str] = match doc_type {
        DocumentType::Article => &[
            "Study design appropriateness",
            "Sample size adequacy",
            "Statistical power",
            "Conflict of interest disclosure",
            "Reproducibility information",
        ],
        DocumentType::Review => &[
            "Comprehensiveness of literature search",
            "Selection criteria for included papers",
            "Quality assessment of source papers",
            "Synthesis methodology",
            "Currency of sources",
        ],
        DocumentType::Book => &[
            "Author credentials and expertise",
            "Evidence quality for claims",
            "Comprehensive treatment of topic",
            "Logical flow and organization",
            "Academic rigor vs. accessibility",
        ],
        DocumentType::Dissertation => &[
            "Research novelty and contribution",
            "Methodological rigor",
            "Committee credentials",
            "Data integrity and security",
            "Ethical approval documentation",
        ],
        DocumentType::Proposal => &[
            "Feasibility of proposed work",
            "Timeline and resource realism",
            "Preliminary evidence quality",
            "Budget justification",
            "Contingency planning",
        ],
        DocumentType::CaseStudy => &[
            "Case selection justification",
            "Data collection rigor",
            "Triangulation methods",
            "Researcher reflexivity",
            "Transferability limitations",
        ],
        DocumentType::Essay => &[
            "Argument logical coherence",
            "Evidence quality for claims",
            "Author's expertise in topic",
            "Acknowledgment of counterarguments",
            "Writing clarity and organization",
        ],
        DocumentType::Theoretical => &[
            "Internal consistency of theory",
            "Logical rigor of definitions",
            "Falsifiability of propositions",
            "Practical application potential",
            "Clarity of theoretical framework",
        ],
        DocumentType::Preprint => &[
            "Preliminary validation available",
            "Preprint server reputation",
            "Author's publication history",
            "Clear indication of peer review status",
            "Date of posting",
        ],
        DocumentType::Conference => &[
            "Conference selectivity/reputation",
            "Peer review process quality",
            "Extended abstract detail level",
            "Author presentation quality",
            "Citation impact potential",
        ],
        DocumentType::Unknown => &[
            "Document format and completeness",
            "Author identification",
            "Claims substantiation",
            "Logical coherence",
            "Appropriate evidence quality",
        ],
    };
    to_strings(items)
}

/// Typical limitations per document type.
pub fn typical_limitations(doc_type: DocumentType) -> Vec<String> {
    let items: &[&str] = match doc_type {
        DocumentType::Article => &[
            "Limited to single study outcomes",
            "Generalizability constraints from sample",
            "Temporal limitations of single timepoint",
        ],
        DocumentType::Review => &[
            "Dependent on quality of included studies",
            "Publication bias in source papers",
            "Subjective selection of sources",
            "Rapid field evolution may date review",
        ],
        DocumentType::Book => &[
            "Lack of peer review process",
            "Single author perspective",
            "Potential outdated information",
        ],
        DocumentType::Dissertation => &[
            "Limited publication scrutiny",
            "Focused scope for degree requirement",
            "May emphasize methodology over breadth",
        ],
        DocumentType::Proposal => &[
            "Speculative nature of unfunded research",
            "Uncertainty in execution",
            "May overestimate feasibility",
        ],
        DocumentType::CaseStudy => &[
            "Limited generalizability",
            "Potential for selection bias",
            "Subjective interpretation risk",
            "Context-dependent findings",
        ],
        DocumentType::Essay => &[
            "Author opinion influence",
            "Limited empirical evidence",
            "Subjective argumentation",
        ],
        DocumentType::Theoretical => &[
            "Lack of empirical validation",
            "Abstract applicability",
            "Testability limitations",
        ],
        DocumentType::Preprint => &[
            "Lack of formal peer review",
            "Potential substantial revisions pending",
            "Uncertain publication timeline",
        ],
        DocumentType::Conference => &[
            "Space limitations on depth",
            "Varying peer review rigor",
            "Often preliminary work",
        ],
        DocumentType::Unknown => &[
            "Unclear publication/credibility standard",
            "Uncertain peer review status",
            "Source verification needed",
        ],
    };
    to_strings(items)
}

/// Common assumptions per field.
pub fn common_assumptions(field: AcademicField) -> Vec<String> {
    let items: &[&str] = match field {
        AcademicField::NaturalSciences => &[
            "Replicability of results under controlled conditions",
            "Objectivity of measurements",
            "Universal applicability of laws discovered",
            "Predictability based on established principles",
        ],
        AcademicField::Engineering => &[
            "Technical feasibility of proposed designs",
            "Performance predictability from models",
            "Scalability of lab results",
            "Resource availability for implementation",
        ],
        AcademicField::Medical => &[
            "Biological mechanisms are consistent across populations",
            "Clinical outcomes correlate with biomarkers",
            "Beneficence justifies research risks",
            "Informed consent adequately protects subjects",
        ],
        AcademicField::Agricultural => &[
            "Environmental conditions can be generalized",
            "Agricultural systems are manageable variables",
            "Economic models reflect farmer behavior",
            "Sustainability is achievable with intervention",
        ],
        AcademicField::SocialSciences => &[
            "Human behavior is systematic and predictable",
            "Self-report data reflects actual behavior",
            "Context can be sufficiently controlled",
            "Causality can be inferred from association",
        ],
        AcademicField::Humanities => &[
            "Texts have stable, discoverable meanings",
            "Historical sources reflect reality",
            "Interpretation can be validated",
            "Values are not entirely subjective",
        ],
        AcademicField::FormalSciences => &[
            "Axioms are self-evident truths",
            "Logical deduction produces certainty",
            "Infinite sets can be meaningfully discussed",
            "Proofs are indisputable once accepted",
        ],
        AcademicField::Interdisciplinary => &[
            "Concepts translate across disciplines",
            "Methods from one field apply to another",
            "Interdisciplinary synthesis adds value",
            "Disciplinary boundaries are not essential",
        ],
    };
    to_strings(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medical_bias_list_covers_reporting() {
        let priorities = bias_priorities(AcademicField::Medical);
        assert_eq!(priorities.len(), 5);
        assert!(priorities.iter().any(|p| p.contains("adverse effects")));
    }

    #[test]
    fn test_axes_do_not_interact() {
        // Focus depends only on the type, assumptions only on the field.
        let focus_med = assessment_focus(DocumentType::Review);
        let focus_hum = assessment_focus(DocumentType::Review);
        assert_eq!(focus_med, focus_hum);

        let assumptions_a = common_assumptions(AcademicField::FormalSciences);
        let assumptions_b = common_assumptions(AcademicField::FormalSciences);
        assert_eq!(assumptions_a, assumptions_b);
    }
}
