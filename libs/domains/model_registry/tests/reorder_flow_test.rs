//! End-to-end reorder flows over the public API.

use domain_model_registry::{
    LlmModelRef, LlmProvider, ModelCategory, PriorityReorderer, needs_repair,
};
use uuid::Uuid;

fn model(name: &str, priority: Option<u32>) -> LlmModelRef {
    LlmModelRef {
        id: Uuid::now_v7(),
        provider: LlmProvider::OpenAi,
        model_category: ModelCategory::Chat,
        model_name: name.to_string(),
        priority,
    }
}

fn assert_gap_free(reorderer: &PriorityReorderer) {
    let priorities: Vec<u32> = reorderer
        .models()
        .iter()
        .map(|m| m.priority.expect("every model ranked"))
        .collect();
    let expected: Vec<u32> = (1..=priorities.len() as u32).collect();
    assert_eq!(priorities, expected);
}

#[test]
fn repair_normalizes_arbitrary_stored_rankings() {
    let cases: Vec<Vec<Option<u32>>> = vec![
        vec![None, None, None],
        vec![Some(5), Some(5), Some(5)],
        vec![Some(9), None, Some(1), Some(4), None],
        vec![Some(2), Some(1)],
        vec![Some(1)],
    ];

    for stored in cases {
        let models: Vec<LlmModelRef> = stored
            .iter()
            .enumerate()
            .map(|(i, p)| model(&format!("m{i}"), *p))
            .collect();
        let count = models.len();

        let mut reorderer = PriorityReorderer::new(models);
        reorderer.auto_repair();

        assert_gap_free(&reorderer);
        assert!(!reorderer.needs_repair());
        assert_eq!(reorderer.commit().len(), count);
    }
}

#[test]
fn every_move_preserves_the_gap_free_invariant() {
    let mut reorderer = PriorityReorderer::new(vec![
        model("a", Some(3)),
        model("b", None),
        model("c", Some(3)),
        model("d", Some(1)),
    ]);
    reorderer.auto_repair();

    let ids: Vec<Uuid> = reorderer.models().iter().map(|m| m.id).collect();
    for id in &ids {
        reorderer.move_up(*id).unwrap();
        assert_gap_free(&reorderer);
        reorderer.move_down(*id).unwrap();
        assert_gap_free(&reorderer);
    }
}

#[test]
fn boundary_moves_leave_the_list_identical() {
    let mut reorderer = PriorityReorderer::new(vec![
        model("a", Some(1)),
        model("b", Some(2)),
        model("c", Some(3)),
    ]);
    let top = reorderer.models()[0].id;
    let bottom = reorderer.models()[2].id;
    let before = reorderer.models().to_vec();

    assert!(!reorderer.move_up(top).unwrap());
    assert!(!reorderer.move_down(bottom).unwrap());
    assert_eq!(reorderer.models(), before.as_slice());
}

#[test]
fn stored_list_without_priorities_is_flagged() {
    let models = vec![model("a", None), model("b", Some(1))];
    assert!(needs_repair(&models));

    let reorderer = PriorityReorderer::new(models);
    // Unranked model sits at the bottom until a repair runs.
    assert_eq!(reorderer.models()[1].priority, None);
}
