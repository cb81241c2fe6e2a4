use dvnc::domain::DomainSet;
use dvnc::engine::Engine;
use dvnc::engine::synthesis::SynthesisEngine;

#[tokio::test]
async fn engine_trait_object_runs_analysis() {
    let mut engine: Box<dyn Engine> = Box::new(SynthesisEngine::new(DomainSet::builtin(), 10));
    let text = engine.run("lever mechanics for a crane").await.unwrap();
    assert!(text.contains("**Challenge:** lever mechanics for a crane"));
    assert!(text.contains("⚙️ **Physics**: **Lever Mechanics**"));
}

#[tokio::test]
async fn same_seed_engines_agree() {
    let mut a = SynthesisEngine::new(DomainSet::builtin(), 77);
    let mut b = SynthesisEngine::new(DomainSet::builtin(), 77);
    for task in ["", "skeletal structure", "circulatory pumps"] {
        assert_eq!(a.run(task).await.unwrap(), b.run(task).await.unwrap());
    }
}

#[tokio::test]
async fn last_analysis_tracks_latest_run() {
    let mut engine = SynthesisEngine::new(DomainSet::builtin(), 4);
    engine.run("aerodynamics").await.unwrap();
    engine.run("muscular force").await.unwrap();

    let last = engine.last_analysis().unwrap();
    assert!(last.keywords.get("Physics").unwrap().is_empty());
    assert!(last.keyword_summary().contains("- Biomechanics: Muscular Force"));
    assert_eq!(engine.seed(), 4);
}
