//! Report composition. Pure text assembly; the closing sections are fixed
//! template text and do not depend on the analysis.

use crate::analysis::DomainMap;

const HEADER: &str = "## 🎨 Da Vinci-Inspired Innovation Synthesis\n";
const INSIGHTS_HEADER: &str = "### 📊 Multidisciplinary Insights\n";
const DESIGN_HEADER: &str = "\n### 🚀 Integrated Design Concept\n";
const DESIGN_BULLETS: &[&str] = &[
    "- **Architecture**: Bio-inspired modular framework with adaptive joints",
    "- **Mechanics**: Leverage ratios optimized from natural systems",
    "- **Validation**: Multi-domain KPIs aligned with Da Vinci's principles",
];
const NEXT_STEPS_HEADER: &str = "\n### 📋 Next Steps";

/// The fixed three-step action list closing every report.
pub const NEXT_STEPS: &[&str] = &[
    "1. Transform constraints into parametric design variables",
    "2. Build rapid prototypes for cross-domain validation",
    "3. Iterate using Leonardo's observation-experimentation cycle",
];

const DEFAULT_SYMBOL: &str = "🔬";

/// Symbol shown next to a domain's insight line.
pub fn domain_symbol(domain: &str) -> &'static str {
    match domain {
        "Physics" => "⚙️",
        "Biomechanics" => "🦾",
        "Anatomy" => "🧬",
        _ => DEFAULT_SYMBOL,
    }
}

/// Assemble the report: header, echoed prompt, one line per domain (in
/// map order), then the static design and next-step sections.
pub fn compose_synthesis(prompt: &str, insights: &DomainMap<String>) -> String {
    let mut lines = vec![
        HEADER.to_string(),
        format!("**Challenge:** {prompt}\n"),
        INSIGHTS_HEADER.to_string(),
    ];

    for (domain, insight) in insights.iter() {
        lines.push(format!("{} **{domain}**: {insight}\n", domain_symbol(domain)));
    }

    lines.push(DESIGN_HEADER.to_string());
    lines.extend(DESIGN_BULLETS.iter().map(|s| s.to_string()));
    lines.push(NEXT_STEPS_HEADER.to_string());
    lines.extend(NEXT_STEPS.iter().map(|s| s.to_string()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insights() -> DomainMap<String> {
        [
            ("Anatomy", "a".to_string()),
            ("Physics", "p".to_string()),
            ("Optics", "o".to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn symbols() {
        assert_eq!(domain_symbol("Physics"), "⚙️");
        assert_eq!(domain_symbol("Biomechanics"), "🦾");
        assert_eq!(domain_symbol("Anatomy"), "🧬");
        assert_eq!(domain_symbol("Optics"), DEFAULT_SYMBOL);
        assert_eq!(domain_symbol("physics"), DEFAULT_SYMBOL);
    }

    #[test]
    fn echoes_prompt_verbatim() {
        let text = compose_synthesis("Build a *bridge*", &insights());
        assert!(text.contains("**Challenge:** Build a *bridge*\n"));
    }

    #[test]
    fn domain_lines_follow_map_order() {
        let text = compose_synthesis("x", &insights());
        let anatomy = text.find("🧬 **Anatomy**: a").unwrap();
        let physics = text.find("⚙️ **Physics**: p").unwrap();
        let optics = text.find("🔬 **Optics**: o").unwrap();
        assert!(anatomy < physics && physics < optics);
    }

    #[test]
    fn ends_with_next_steps() {
        let text = compose_synthesis("x", &insights());
        assert!(text.ends_with(&NEXT_STEPS.join("\n")));
        for bullet in DESIGN_BULLETS {
            assert!(text.contains(bullet));
        }
    }

    #[test]
    fn exact_layout_for_single_domain() {
        let map: DomainMap<String> = [("Physics", "insight".to_string())].into_iter().collect();
        let expected = "## 🎨 Da Vinci-Inspired Innovation Synthesis\n\n\
                        **Challenge:** \n\n\
                        ### 📊 Multidisciplinary Insights\n\n\
                        ⚙️ **Physics**: insight\n\n\
                        \n### 🚀 Integrated Design Concept\n\n\
                        - **Architecture**: Bio-inspired modular framework with adaptive joints\n\
                        - **Mechanics**: Leverage ratios optimized from natural systems\n\
                        - **Validation**: Multi-domain KPIs aligned with Da Vinci's principles\n\
                        \n### 📋 Next Steps\n\
                        1. Transform constraints into parametric design variables\n\
                        2. Build rapid prototypes for cross-domain validation\n\
                        3. Iterate using Leonardo's observation-experimentation cycle";
        assert_eq!(compose_synthesis("", &map), expected);
    }
}
