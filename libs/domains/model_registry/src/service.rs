use std::sync::Arc;

use uuid::Uuid;

use crate::error::ModelRegistryResult;
use crate::ordering::PriorityReorderer;
use crate::repository::ModelRegistryRepository;

/// Service layer for a team's model priority list.
#[derive(Clone)]
pub struct ModelRegistryService<R: ModelRegistryRepository> {
    repository: Arc<R>,
}

impl<R: ModelRegistryRepository> ModelRegistryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Load a team's models into a reorderer.
    ///
    /// An inconsistent stored ranking (missing or duplicate priorities) is
    /// repaired in the working copy; the repair only reaches the store when
    /// the caller saves.
    pub async fn load_reorderer(&self, team_id: Uuid) -> ModelRegistryResult<PriorityReorderer> {
        let models = self.repository.list_models(team_id).await?;
        let mut reorderer = PriorityReorderer::new(models);
        if reorderer.needs_repair() {
            tracing::warn!(
                team_id = %team_id,
                models = reorderer.models().len(),
                "Stored model priorities are inconsistent; repairing"
            );
            reorderer.auto_repair();
        }
        Ok(reorderer)
    }

    /// Persist the reorderer's current ranking in one batched patch.
    pub async fn save(
        &self,
        team_id: Uuid,
        reorderer: &PriorityReorderer,
    ) -> ModelRegistryResult<()> {
        let patch = reorderer.commit();
        let ranked = patch.len();
        self.repository.save_priorities(team_id, patch).await?;
        tracing::info!(team_id = %team_id, ranked, "Saved model priorities");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LlmModelRef, LlmProvider, ModelCategory};
    use crate::repository::MockModelRegistryRepository;

    fn model(name: &str, priority: Option<u32>) -> LlmModelRef {
        LlmModelRef {
            id: Uuid::now_v7(),
            provider: LlmProvider::Anthropic,
            model_category: ModelCategory::Chat,
            model_name: name.to_string(),
            priority,
        }
    }

    #[tokio::test]
    async fn load_repairs_an_inconsistent_ranking() {
        let mut mock_repo = MockModelRegistryRepository::new();
        mock_repo.expect_list_models().returning(|_| {
            Ok(vec![model("a", None), model("b", Some(2)), model("c", Some(2))])
        });

        let service = ModelRegistryService::new(mock_repo);
        let reorderer = service.load_reorderer(Uuid::now_v7()).await.unwrap();

        assert!(!reorderer.needs_repair());
        let priorities: Vec<_> = reorderer.models().iter().map(|m| m.priority).collect();
        assert_eq!(priorities, vec![Some(1), Some(2), Some(3)]);
    }

    #[tokio::test]
    async fn load_leaves_a_consistent_ranking_untouched() {
        let stored = vec![model("b", Some(2)), model("a", Some(1))];
        let expected_top = stored[1].id;
        let mut mock_repo = MockModelRegistryRepository::new();
        mock_repo
            .expect_list_models()
            .returning(move |_| Ok(stored.clone()));

        let service = ModelRegistryService::new(mock_repo);
        let reorderer = service.load_reorderer(Uuid::now_v7()).await.unwrap();

        assert_eq!(reorderer.models()[0].id, expected_top);
        assert_eq!(reorderer.models()[0].priority, Some(1));
    }

    #[tokio::test]
    async fn save_hands_the_batched_patch_to_the_store() {
        let team_id = Uuid::now_v7();
        let mut mock_repo = MockModelRegistryRepository::new();
        mock_repo.expect_list_models().returning(|_| {
            Ok(vec![model("a", Some(1)), model("b", Some(2))])
        });
        mock_repo
            .expect_save_priorities()
            .withf(move |saved_team, patch| {
                let mut values: Vec<u32> = patch.values().copied().collect();
                values.sort_unstable();
                *saved_team == team_id && values == vec![1, 2]
            })
            .returning(|_, _| Ok(()));

        let service = ModelRegistryService::new(mock_repo);
        let mut reorderer = service.load_reorderer(team_id).await.unwrap();
        let bottom = reorderer.models()[1].id;
        reorderer.move_up(bottom).unwrap();
        service.save(team_id, &reorderer).await.unwrap();
    }
}
