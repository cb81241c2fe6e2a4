const INTRO: &str = "You are a specialized SLM for";
const RULES: &[&str] = &[
    "Use concise, actionable language.",
    "Prefer design heuristics and constraints over vague generalities.",
];

/// Build the per-domain system prompt. Computed once when a
/// [`DomainModel`](crate::domain::DomainModel) is constructed.
pub fn build_domain_system_prompt(domain: &str, originator: &str) -> String {
    format!(
        "{intro} {domain}. {style} Cite a {originator} study when relevant. {heuristics}",
        intro = INTRO,
        domain = domain,
        style = RULES[0],
        originator = originator,
        heuristics = RULES[1],
    )
}
