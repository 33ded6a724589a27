//! Unit tests for tribes crate

#[cfg(test)]
mod support {
    use crate::domain::entity::{Podcast, Tribe};
    use crate::domain::repository::{
        BountyLeaderboardRepository, PodcastRepository, TribeRepository,
    };
    use crate::error::{TribesError, TribesResult};
    use kernel::id::PodcastId;
    use kernel::leaderboard::LeaderboardEntry;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub struct MemoryTribes {
        pub podcasts: Arc<Mutex<BTreeMap<PodcastId, Podcast>>>,
        pub tribes: Arc<Mutex<Vec<Tribe>>>,
        pub board: Arc<Mutex<Vec<LeaderboardEntry>>>,
    }

    impl MemoryTribes {
        pub fn podcast_count(&self) -> usize {
            self.podcasts.lock().unwrap().len()
        }
    }

    impl PodcastRepository for MemoryTribes {
        async fn insert(&self, podcast: &Podcast) -> TribesResult<Podcast> {
            let mut rows = self.podcasts.lock().unwrap();
            let id = if podcast.id.is_unassigned() {
                let next = rows.keys().next_back().map_or(1, |k| k.get() + 1);
                PodcastId::new(next)
            } else {
                podcast.id
            };
            let stored = Podcast::new(id, podcast.owner_id.clone());
            rows.insert(id, stored.clone());
            Ok(stored)
        }

        async fn find_by_id(&self, id: PodcastId) -> TribesResult<Option<Podcast>> {
            Ok(self.podcasts.lock().unwrap().get(&id).cloned())
        }
    }

    impl TribeRepository for MemoryTribes {
        async fn listed(&self) -> TribesResult<Vec<Tribe>> {
            let mut listed: Vec<Tribe> = self
                .tribes
                .lock()
                .unwrap()
                .iter()
                .filter(|t| !t.unlisted)
                .cloned()
                .collect();
            listed.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(listed)
        }

        async fn create(&self, tribe: &Tribe) -> TribesResult<Tribe> {
            self.tribes.lock().unwrap().push(tribe.clone());
            Ok(tribe.clone())
        }
    }

    impl BountyLeaderboardRepository for MemoryTribes {
        async fn bounties_leaderboard(&self) -> TribesResult<Vec<LeaderboardEntry>> {
            Ok(self.board.lock().unwrap().clone())
        }
    }

    /// Repository whose every call fails
    #[derive(Clone, Default)]
    pub struct BrokenTribes;

    fn store_error() -> TribesError {
        TribesError::Database(sqlx::Error::Protocol("connection reset".to_string()))
    }

    impl PodcastRepository for BrokenTribes {
        async fn insert(&self, _podcast: &Podcast) -> TribesResult<Podcast> {
            Err(store_error())
        }

        async fn find_by_id(&self, _id: PodcastId) -> TribesResult<Option<Podcast>> {
            Err(store_error())
        }
    }

    impl TribeRepository for BrokenTribes {
        async fn listed(&self) -> TribesResult<Vec<Tribe>> {
            Err(store_error())
        }

        async fn create(&self, _tribe: &Tribe) -> TribesResult<Tribe> {
            Err(store_error())
        }
    }

    impl BountyLeaderboardRepository for BrokenTribes {
        async fn bounties_leaderboard(&self) -> TribesResult<Vec<LeaderboardEntry>> {
            Err(sqlx::Error::PoolTimedOut.into())
        }
    }
}

#[cfg(test)]
mod domain_tests {
    use crate::domain::entity::NewTribe;

    #[test]
    fn test_new_tribe_gets_distinct_uuids() {
        let draft = NewTribe {
            name: "Rustaceans".to_string(),
            ..Default::default()
        };
        let a = draft.clone().into_tribe();
        let b = draft.into_tribe();

        assert_ne!(a.uuid, b.uuid);
        assert!(a.is_listed());
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::support::MemoryTribes;
    use crate::application::*;
    use crate::domain::entity::{NewTribe, Podcast};
    use crate::error::TribesError;
    use kernel::id::PodcastId;
    use kernel::leaderboard::LeaderboardEntry;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_unknown_podcast() {
        let repo = Arc::new(MemoryTribes::default());
        let err = GetPodcastUseCase::new(repo)
            .execute(PodcastId::new(3))
            .await
            .unwrap_err();

        assert!(matches!(err, TribesError::PodcastNotFound(id) if id.get() == 3));
    }

    #[tokio::test]
    async fn test_create_podcast_keeps_explicit_id() {
        let repo = Arc::new(MemoryTribes::default());
        let created = CreatePodcastUseCase::new(repo.clone())
            .execute(Podcast::new(PodcastId::new(42), "owner-pubkey"))
            .await
            .unwrap();

        assert_eq!(created.id.get(), 42);
        let found = GetPodcastUseCase::new(repo)
            .execute(PodcastId::new(42))
            .await
            .unwrap();
        assert_eq!(found.owner_id, "owner-pubkey");
    }

    #[tokio::test]
    async fn test_listed_tribes_excludes_unlisted() {
        let repo = Arc::new(MemoryTribes::default());
        let create = CreateTribeUseCase::new(repo.clone());
        create
            .execute(NewTribe {
                name: "Public".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        create
            .execute(NewTribe {
                name: "Hidden".to_string(),
                unlisted: true,
                ..Default::default()
            })
            .await
            .unwrap();

        let listed = ListedTribesUseCase::new(repo).execute().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Public");
    }

    #[tokio::test]
    async fn test_bounties_leaderboard_is_ranked() {
        let repo = MemoryTribes::default();
        *repo.board.lock().unwrap() = vec![
            LeaderboardEntry::new("Dave", 180),
            LeaderboardEntry::new("Carol", 200),
        ];

        let entries = BountiesLeaderboardUseCase::new(Arc::new(repo))
            .execute()
            .await
            .unwrap();

        assert_eq!(entries[0].name, "Carol");
        assert_eq!(entries[1].name, "Dave");
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::domain::entity::Podcast;
    use crate::error::TribesError;
    use crate::presentation::dto::*;

    #[test]
    fn test_podcast_request_rejects_negative_id() {
        assert!(serde_json::from_str::<PodcastRequest>(r#"{"id":-1}"#).is_err());
    }

    #[test]
    fn test_podcast_request_id_out_of_range() {
        let req = PodcastRequest {
            id: u64::MAX,
            owner_id: "owner".to_string(),
        };
        let err = Podcast::try_from(req).unwrap_err();

        assert!(matches!(err, TribesError::PodcastIdOutOfRange(u64::MAX)));
    }

    #[test]
    fn test_tribe_request_defaults_to_listed() {
        let req: TribeRequest = serde_json::from_str(r#"{"name":"Rust"}"#).unwrap();
        assert!(!req.unlisted);
        assert_eq!(req.description, "");
    }
}

#[cfg(test)]
mod router_tests {
    use super::support::MemoryTribes;
    use crate::domain::entity::{Podcast, Tribe};
    use crate::tribes_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use kernel::id::PodcastId;
    use kernel::leaderboard::LeaderboardEntry;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app(repo: &MemoryTribes) -> Router {
        tribes_router_generic(repo.clone())
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn tribe(name: &str, unlisted: bool) -> Tribe {
        Tribe {
            uuid: Uuid::new_v4(),
            owner_pubkey: "pubkey".to_string(),
            name: name.to_string(),
            description: String::new(),
            unlisted,
        }
    }

    #[tokio::test]
    async fn test_post_podcast_returns_201() {
        let repo = MemoryTribes::default();
        let response = app(&repo)
            .oneshot(post_json("/podcast", r#"{"id":7,"owner_id":"abc"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"id": 7, "owner_id": "abc"})
        );
    }

    #[tokio::test]
    async fn test_post_podcast_with_bad_json_is_406() {
        let repo = MemoryTribes::default();
        let response = app(&repo)
            .oneshot(post_json("/podcast", r#"{"id":"seven"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
        assert_eq!(repo.podcast_count(), 0);
    }

    #[tokio::test]
    async fn test_get_podcast() {
        let repo = MemoryTribes::default();
        repo.podcasts
            .lock()
            .unwrap()
            .insert(PodcastId::new(5), Podcast::new(PodcastId::new(5), "owner"));

        let response = app(&repo).oneshot(get("/podcast?id=5")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["owner_id"], "owner");
    }

    #[tokio::test]
    async fn test_get_unknown_podcast_is_500() {
        let repo = MemoryTribes::default();
        let response = app(&repo).oneshot(get("/podcast?id=-4")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["detail"], "Podcast 0 not found");
    }

    #[tokio::test]
    async fn test_listed_tribes_excludes_unlisted() {
        let repo = MemoryTribes::default();
        repo.tribes.lock().unwrap().extend([
            tribe("Zebras", false),
            tribe("Secret", true),
            tribe("Aardvarks", false),
        ]);

        let response = app(&repo).oneshot(get("/tribes/listed")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Aardvarks", "Zebras"]);
    }

    #[tokio::test]
    async fn test_post_tribe_generates_uuid() {
        let repo = MemoryTribes::default();
        let response = app(&repo)
            .oneshot(post_json(
                "/tribes",
                r#"{"owner_pubkey":"pk","name":"Builders","description":"we build"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert!(Uuid::parse_str(body["uuid"].as_str().unwrap()).is_ok());
        assert_eq!(body["unlisted"], false);
        assert_eq!(repo.tribes.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_bounties_leaderboard() {
        let repo = MemoryTribes::default();
        *repo.board.lock().unwrap() = vec![
            LeaderboardEntry::new("Dave", 180),
            LeaderboardEntry::new("Carol", 200),
        ];

        let response = app(&repo)
            .oneshot(get("/bounties/leaderboard"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!([
                {"name": "Carol", "score": 200},
                {"name": "Dave", "score": 180}
            ])
        );
    }
}

#[cfg(test)]
mod store_failure_tests {
    use super::support::BrokenTribes;
    use crate::tribes_router_generic;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_store_failures_answer_500() {
        let cases = [
            request("GET", "/podcast?id=1", ""),
            request("POST", "/podcast", r#"{"id":1,"owner_id":"abc"}"#),
            request("GET", "/tribes/listed", ""),
            request("POST", "/tribes", r#"{"name":"Builders"}"#),
            request("GET", "/bounties/leaderboard", ""),
        ];

        for req in cases {
            let uri = req.uri().clone();
            let response = tribes_router_generic(BrokenTribes)
                .oneshot(req)
                .await
                .unwrap();

            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn test_out_of_range_podcast_id_answers_500() {
        let response = tribes_router_generic(BrokenTribes)
            .oneshot(request(
                "POST",
                "/podcast",
                r#"{"id":18446744073709551615,"owner_id":"abc"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::TribesError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::id::PodcastId;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(TribesError, StatusCode)> = vec![
            (
                TribesError::PodcastNotFound(PodcastId::new(1)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                TribesError::PodcastIdOutOfRange(u64::MAX),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                TribesError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                TribesError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }
}
