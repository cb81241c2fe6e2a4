use super::{Concept, KnowledgeBase, KnowledgeConfig};
use crate::consts::DEFAULT_ORIGINATOR;

const PHYSICS: &[(&str, &str)] = &[
    ("Fluid Dynamics", "water screws and canal studies"),
    ("Aerodynamics", "ornithopter sketches and airflow notes"),
    ("Lever Mechanics", "gear trains, pulleys, cranes"),
    ("Structural Integrity", "bridges and fortification stress studies"),
];

const BIOMECHANICS: &[(&str, &str)] = &[
    ("Joint Articulation", "elbow/shoulder motion notebooks"),
    ("Muscular Force", "layered muscle drawings"),
    ("Biological Levers", "limb lever ratios and gait notes"),
    ("Skeletal Structure", "Vitruvian proportions and load paths"),
];

const ANATOMY: &[(&str, &str)] = &[
    ("Human Proportionality", "Vitruvian Man proportional canon"),
    ("Muscular Systems", "detailed musculature sheets"),
    ("Circulatory System", "venous and arterial mapping"),
    ("Body Mechanics", "posture, stance, and motion sequences"),
];

const DOMAINS: &[(&str, &[(&str, &str)])] = &[
    ("Physics", PHYSICS),
    ("Biomechanics", BIOMECHANICS),
    ("Anatomy", ANATOMY),
];

pub(super) fn config() -> KnowledgeConfig {
    let domains = DOMAINS
        .iter()
        .map(|(domain, entries)| KnowledgeBase {
            domain: (*domain).to_string(),
            concepts: entries
                .iter()
                .map(|(name, citation)| Concept::new(*name, *citation))
                .collect(),
        })
        .collect();

    KnowledgeConfig {
        originator: DEFAULT_ORIGINATOR.to_string(),
        domains,
    }
}
