//! Fixture-driven coverage: the same assertions replayed over every entry
//! in `tests/data/seed.json`.

use serde_json::Value;

use apiprobe_suite::Seed;
use apiprobe_types::{Post, check_post_shape, check_user_shape};

use crate::common;

fn seed() -> Seed {
    Seed::parse(include_str!("../data/seed.json")).expect("seed fixture must parse")
}

#[tokio::test]
async fn every_seeded_user_resolves() {
    let api = common::placeholder_api().await;

    for entry in seed().users {
        let response = api
            .client
            .get_raw(&format!("/users/{}", entry.id))
            .await
            .unwrap_or_else(|err| panic!("GET /users/{} must be answered: {err}", entry.id));
        assert_eq!(response.status().as_u16(), 200);

        let value: Value = response.json().await.expect("user body must be json");
        check_user_shape(&value).expect("user payload must have the user shape");
        assert_eq!(value["id"], Value::from(entry.id));
    }
}

#[tokio::test]
async fn every_seeded_post_resolves() {
    let api = common::placeholder_api().await;

    for entry in seed().posts {
        let response = api
            .client
            .get_raw(&format!("/posts/{}", entry.id))
            .await
            .unwrap_or_else(|err| panic!("GET /posts/{} must be answered: {err}", entry.id));
        assert_eq!(response.status().as_u16(), 200);

        let value: Value = response.json().await.expect("post body must be json");
        check_post_shape(&value).expect("post payload must have the post shape");
        assert_eq!(value["id"], Value::from(entry.id));
    }
}

#[tokio::test]
async fn every_seeded_draft_creates_a_post() {
    let api = common::placeholder_api().await;

    for draft in seed().new_posts {
        let created: Post = api
            .client
            .create_post(&draft)
            .await
            .unwrap_or_else(|err| panic!("creating {:?} must succeed: {err}", draft.title));
        assert!(created.matches_draft(&draft));
        assert_eq!(created.id, common::CREATED_POST_ID);
    }
}
