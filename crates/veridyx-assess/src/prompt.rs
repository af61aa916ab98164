//! Assessment prompt construction.
//!
//! Two prompt shapes: the full framework prompt when substantial document
//! text is available, and a compact abstract-only variant. Both carry the
//! adaptive weight maximums so the assessor scores inside the framework's
//! bounds, and both demand a single JSON object in the response.

use std::fmt::Write as _;

use veridyx_classify::{AcademicField, DocumentType};
use veridyx_framework::FrameworkGuidelines;
use veridyx_ingestion::models::DocumentChunk;

/// Everything the prompt builder needs for one assessment.
#[derive(Debug, Clone)]
pub struct PromptContext<'a> {
    pub document_title: Option<&'a str>,
    pub document_type: DocumentType,
    pub field: AcademicField,
    pub framework: &'a FrameworkGuidelines,
    pub chunks: &'a [DocumentChunk],
    pub full_text: &'a str,
    pub abstract_text: Option<&'a str>,
}

/// Build the full assessment prompt. Document text is truncated to
/// `char_cap` characters; the selected chunks are included instead when the
/// caller provides them.
pub fn build_assessment_prompt(context: &PromptContext<'_>, char_cap: usize) -> String {
    let weights = &context.framework.weights;
    let title = context.document_title.unwrap_or("Unknown");
    let field_name = context.field.as_str().replace('-', " ");

    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are a research assessment expert analyzing an academic {}.",
        context.document_type.as_str()
    );
    let _ = writeln!(prompt, "\nDOCUMENT INFORMATION:");
    let _ = writeln!(prompt, "- Title: {}", title);
    let _ = writeln!(prompt, "- Document Type: {}", context.document_type.as_str());
    let _ = writeln!(prompt, "- Academic Field: {}", field_name);

    let _ = writeln!(
        prompt,
        "\nCREDIBILITY ASSESSMENT COMPONENTS (total possible: {:.1} points):",
        weights.total()
    );
    let _ = writeln!(prompt, "- Methodological Rigor: maximum score {}", weights.methodological_rigor);
    let _ = writeln!(prompt, "- Data Transparency: maximum score {}", weights.data_transparency);
    let _ = writeln!(prompt, "- Source Quality: maximum score {}", weights.source_quality);
    let _ = writeln!(prompt, "- Author Credibility: maximum score {}", weights.author_credibility);
    let _ = writeln!(prompt, "- Statistical Validity: maximum score {}", weights.statistical_validity);
    let _ = writeln!(prompt, "- Logical Consistency: maximum score {}", weights.logical_consistency);

    let _ = writeln!(prompt, "\nASSESSMENT FOCUS AREAS:");
    for focus in &context.framework.assessment_focus {
        let _ = writeln!(prompt, "  - {}", focus);
    }

    let _ = writeln!(prompt, "\nPRIMARY BIAS CONCERNS FOR THIS FIELD:");
    for bias in &context.framework.bias_priorities {
        let _ = writeln!(prompt, "  - {}", bias);
    }

    let _ = writeln!(prompt, "\nDOCUMENT TEXT:");
    if context.chunks.is_empty() {
        let text = truncate_chars(context.full_text, char_cap);
        let _ = writeln!(prompt, "{}", text);
        if context.full_text.len() > char_cap {
            let _ = writeln!(prompt, "[... document continues ...]");
        }
    } else {
        let mut written = 0usize;
        for chunk in context.chunks {
            if written + chunk.text.len() > char_cap {
                let _ = writeln!(prompt, "[... document continues ...]");
                break;
            }
            let _ = writeln!(
                prompt,
                "\n[{} | pages {}-{}]\n{}",
                chunk.section_type.as_str(),
                chunk.page_start,
                chunk.page_end,
                chunk.text
            );
            written += chunk.text.len();
        }
    }

    prompt.push_str(&analysis_task_section(context.framework));
    prompt
}

/// Build the compact prompt used when only an abstract is available.
pub fn build_abstract_only_prompt(
    title: &str,
    abstract_text: &str,
    document_type: DocumentType,
    field: AcademicField,
    framework: &FrameworkGuidelines,
) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are a research assessment expert. Only the abstract of this {} in {} is available; \
         assess what can be assessed and keep confidence values low where the abstract is silent.",
        document_type.as_str(),
        field.as_str().replace('-', " ")
    );
    let _ = writeln!(prompt, "\nTitle: {}", title);
    let _ = writeln!(prompt, "\nABSTRACT:\n{}", abstract_text);
    prompt.push_str(&analysis_task_section(framework));
    prompt
}

/// The response-shape instruction shared by both prompts.
fn analysis_task_section(framework: &FrameworkGuidelines) -> String {
    let weights = &framework.weights;
    format!(
        r#"
ANALYSIS TASK:
Respond with a single JSON object and nothing else, using this structure:
{{
  "credibility": {{
    "methodologicalRigor": {{ "score": <0-{mr}>, "maxScore": {mr}, "description": "...", "evidence": ["..."], "confidence": <0-100>, "reasoning": "..." }},
    "dataTransparency": {{ "score": <0-{dt}>, "maxScore": {dt}, "description": "...", "evidence": ["..."], "confidence": <0-100>, "reasoning": "..." }},
    "sourceQuality": {{ "score": <0-{sq}>, "maxScore": {sq}, "description": "...", "evidence": ["..."], "confidence": <0-100>, "reasoning": "..." }},
    "authorCredibility": {{ "score": <0-{ac}>, "maxScore": {ac}, "description": "...", "evidence": ["..."], "confidence": <0-100>, "reasoning": "..." }},
    "statisticalValidity": {{ "score": <0-{sv}>, "maxScore": {sv}, "description": "...", "evidence": ["..."], "confidence": <0-100>, "reasoning": "..." }},
    "logicalConsistency": {{ "score": <0-{lc}>, "maxScore": {lc}, "description": "...", "evidence": ["..."], "confidence": <0-100>, "reasoning": "..." }},
    "totalScore": <sum of component scores, at most {total:.1}>,
    "rating": "<Exemplary|Strong|Moderate|Weak|Very Poor|Invalid>",
    "overallConfidence": <0-100>
  }},
  "bias": {{ "biases": [{{ "type": "...", "evidence": "...", "severity": "<Low|Medium|High>", "confidence": <0-100>, "verifiable": <true|false> }}], "overallLevel": "<Low|Medium|High>", "justification": "..." }},
  "keyFindings": {{ "fundamentals": {{}}, "researchQuestion": "...", "methodology": {{}}, "findings": {{}}, "limitations": {{}}, "conclusions": {{}} }},
  "perspective": {{ "theoreticalFramework": "...", "paradigm": "...", "disciplinaryPerspective": "...", "epistemologicalStance": "...", "assumptions": {{ "stated": [], "unstated": [] }}, "context": {{}} }},
  "limitations": {{ "unverifiableClaims": [], "dataLimitations": [], "uncertainties": [], "aiConfidenceNote": "..." }}
}}
"#,
        mr = weights.methodological_rigor,
        dt = weights.data_transparency,
        sq = weights.source_quality,
        ac = weights.author_credibility,
        sv = weights.statistical_validity,
        lc = weights.logical_consistency,
        total = weights.total(),
    )
}

/// Truncate on a char boundary at or below `cap` bytes.
fn truncate_chars(text: &str, cap: usize) -> &str {
    if text.len() <= cap {
        return text;
    }
    let mut end = cap;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridyx_framework::framework_guidelines;

    fn context_for<'a>(
        framework: &'a FrameworkGuidelines,
        full_text: &'a str,
    ) -> PromptContext<'a> {
        PromptContext {
            document_title: Some("A Study of Things"),
            document_type: framework.document_type,
            field: framework.field,
            framework,
            chunks: &[],
            full_text,
            abstract_text: None,
        }
    }

    #[test]
    fn test_prompt_carries_weight_maximums() {
        let framework = framework_guidelines(DocumentType::Article, AcademicField::Medical);
        let prompt = build_assessment_prompt(&context_for(&framework, "document body"), 150_000);
        assert!(prompt.contains("Methodological Rigor: maximum score 2.5"));
        assert!(prompt.contains("total possible: 9.0 points"));
        assert!(prompt.contains("A Study of Things"));
        assert!(prompt.contains("document body"));
    }

    #[test]
    fn test_prompt_truncates_long_text() {
        let framework =
            framework_guidelines(DocumentType::Article, AcademicField::Interdisciplinary);
        let long_text = "x".repeat(200_000);
        let prompt = build_assessment_prompt(&context_for(&framework, &long_text), 150_000);
        assert!(prompt.contains("[... document continues ...]"));
        assert!(prompt.len() < 200_000);
    }

    #[test]
    fn test_abstract_only_prompt_contains_framework_bounds() {
        let framework = framework_guidelines(DocumentType::Unknown, AcademicField::Interdisciplinary);
        let prompt = build_abstract_only_prompt(
            "Short Note",
            "We looked at things briefly.",
            DocumentType::Unknown,
            AcademicField::Interdisciplinary,
            &framework,
        );
        assert!(prompt.contains("Short Note"));
        assert!(prompt.contains("totalScore"));
        // Unknown/interdisciplinary weights cap out at 8.0 total.
        assert!(prompt.contains("at most 8.0"));
    }
}
