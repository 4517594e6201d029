use super::responses::{bad_request, created, no_content, not_found, ok};
use super::{Request, Response};
use crate::error::Result;
use crate::infrastructure::Infrastructure;
use crate::model::{validate_joke, Joke, JokeId};
use serde::Serialize;
use serde_json::{Map, Value};

pub const JOKE_ID_PARAM: &str = "jokeId";

#[derive(Serialize)]
struct JokeBody {
    joke: Joke,
}

#[derive(Serialize)]
struct JokesBody {
    jokes: Vec<Joke>,
}

/// The `jokeId` path parameter, or the `400` to answer with.
fn joke_id_param(request: &Request) -> std::result::Result<JokeId, Response> {
    let raw = request
        .params
        .get(JOKE_ID_PARAM)
        .cloned()
        .unwrap_or_default();
    JokeId::new(raw).map_err(|err| bad_request(&err.to_string()))
}

/// Overlay `jokeId` on the request body. Non-object bodies carry no usable
/// fields, so only the id survives and validation rejects the result.
fn with_joke_id(data: Option<Value>, joke_id: &str) -> Value {
    let mut fields = match data {
        Some(Value::Object(fields)) => fields,
        _ => Map::new(),
    };
    fields.insert(
        JOKE_ID_PARAM.to_string(),
        Value::String(joke_id.to_string()),
    );
    Value::Object(fields)
}

pub async fn index(infrastructure: &Infrastructure, _request: Request) -> Result<Response> {
    let jokes = infrastructure.joke_repo.find_all().await?;
    Ok(ok(serde_json::to_value(JokesBody { jokes })?))
}

pub async fn show(infrastructure: &Infrastructure, request: Request) -> Result<Response> {
    let joke_id = match joke_id_param(&request) {
        Ok(joke_id) => joke_id,
        Err(response) => return Ok(response),
    };

    match infrastructure.joke_repo.find_by_joke_id(&joke_id).await? {
        Some(joke) => Ok(ok(serde_json::to_value(JokeBody { joke })?)),
        None => Ok(not_found()),
    }
}

pub async fn create(infrastructure: &Infrastructure, request: Request) -> Result<Response> {
    let joke_id = infrastructure.uuid.uuid_v4()?;
    let joke = match validate_joke(&with_joke_id(request.data, &joke_id)) {
        Ok(joke) => joke,
        Err(err) => return Ok(bad_request(err.message())),
    };

    infrastructure.joke_repo.add(joke.clone()).await?;
    Ok(created(serde_json::to_value(JokeBody { joke })?))
}

/// Replace the joke named by the path. A `jokeId` in the body is ignored.
pub async fn update(infrastructure: &Infrastructure, request: Request) -> Result<Response> {
    let joke_id = match joke_id_param(&request) {
        Ok(joke_id) => joke_id,
        Err(response) => return Ok(response),
    };
    let joke = match validate_joke(&with_joke_id(request.data, joke_id.as_str())) {
        Ok(joke) => joke,
        Err(err) => return Ok(bad_request(err.message())),
    };

    infrastructure.joke_repo.add(joke).await?;
    Ok(no_content())
}

pub async fn destroy(infrastructure: &Infrastructure, request: Request) -> Result<Response> {
    let joke_id = match joke_id_param(&request) {
        Ok(joke_id) => joke_id,
        Err(response) => return Ok(response),
    };

    infrastructure.joke_repo.remove(&joke_id).await?;
    Ok(no_content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventRecorder;
    use crate::ids::{NullUuid, UuidGenerator};
    use crate::repo::{JokeAdded, JokeRemoved, JokeRepo};
    use crate::test_utils::create_joke;
    use serde_json::json;

    fn infrastructure_with(jokes: Vec<Joke>) -> Infrastructure {
        Infrastructure::create_null()
            .with_uuid(UuidGenerator::create_null(NullUuid::Fixed(
                "joke-111".to_string(),
            )))
            .with_joke_repo(JokeRepo::create_null(jokes).unwrap())
    }

    fn with_id(joke_id: &str) -> Request {
        Request::new().with_param(JOKE_ID_PARAM, joke_id)
    }

    #[tokio::test]
    async fn index_lists_every_joke() {
        let infrastructure = infrastructure_with(vec![create_joke("a"), create_joke("b")]);

        let response = index(&infrastructure, Request::new()).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(
            response.data,
            Some(json!({ "jokes": [create_joke("a"), create_joke("b")] }))
        );
    }

    #[tokio::test]
    async fn index_of_an_empty_repo_is_an_empty_list() {
        let infrastructure = infrastructure_with(vec![]);

        let response = index(&infrastructure, Request::new()).await.unwrap();

        assert_eq!(response, ok(json!({ "jokes": [] })));
    }

    #[tokio::test]
    async fn show_returns_the_joke() {
        let infrastructure = infrastructure_with(vec![create_joke("joke-1")]);

        let response = show(&infrastructure, with_id("joke-1")).await.unwrap();

        assert_eq!(response, ok(json!({ "joke": create_joke("joke-1") })));
    }

    #[tokio::test]
    async fn show_unknown_joke_is_not_found() {
        let infrastructure = infrastructure_with(vec![]);

        let response = show(&infrastructure, with_id("nope")).await.unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.data, Some(json!({ "message": "Not found" })));
    }

    #[tokio::test]
    async fn show_without_joke_id_is_a_bad_request() {
        let infrastructure = infrastructure_with(vec![]);

        let response = show(&infrastructure, Request::new()).await.unwrap();

        assert_eq!(response, bad_request("JokeId cannot be empty"));
    }

    #[tokio::test]
    async fn create_assigns_a_generated_id() {
        let infrastructure = infrastructure_with(vec![]);
        let recorder = EventRecorder::new(&infrastructure.joke_repo.events().joke_added);
        let request = Request::new().with_data(json!({
            "question": "Why?",
            "answer": "Because.",
        }));

        let response = create(&infrastructure, request).await.unwrap();

        let expected = Joke::new(JokeId::new("joke-111").unwrap(), "Why?", "Because.");
        assert_eq!(response.status, 201);
        assert_eq!(response.data, Some(json!({ "joke": expected })));
        assert_eq!(recorder.data(), vec![JokeAdded { joke: expected }]);
    }

    #[tokio::test]
    async fn create_overrides_a_client_supplied_id() {
        let infrastructure = infrastructure_with(vec![]);
        let request = Request::new().with_data(json!({
            "jokeId": "client-choice",
            "question": "Q",
            "answer": "A",
        }));

        create(&infrastructure, request).await.unwrap();

        let stored = infrastructure.joke_repo.find_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].joke_id.as_str(), "joke-111");
    }

    #[tokio::test]
    async fn create_rejects_invalid_jokes_without_storing() {
        let infrastructure = infrastructure_with(vec![]);
        let recorder = EventRecorder::new(&infrastructure.joke_repo.events().joke_added);
        let request = Request::new().with_data(json!({ "question": "Q" }));

        let response = create(&infrastructure, request).await.unwrap();

        assert_eq!(response, bad_request("Joke data is invalid. No joke!"));
        assert!(recorder.data().is_empty());
        assert!(infrastructure.joke_repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_missing_and_non_object_bodies() {
        let infrastructure = infrastructure_with(vec![]);

        for request in [
            Request::new(),
            Request::new().with_data(json!("a joke")),
            Request::new().with_data(json!(["Q", "A"])),
        ] {
            let response = create(&infrastructure, request).await.unwrap();
            assert_eq!(response.status, 400);
        }
    }

    #[tokio::test]
    async fn create_fails_when_ids_run_out() {
        let infrastructure = infrastructure_with(vec![])
            .with_uuid(UuidGenerator::create_null(NullUuid::Sequence(vec![])));
        let request = Request::new().with_data(json!({ "question": "Q", "answer": "A" }));

        let err = create(&infrastructure, request).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Uuid: Null instance ran out of configured Uuids"
        );
    }

    #[tokio::test]
    async fn update_replaces_the_joke_named_by_the_path() {
        let infrastructure = infrastructure_with(vec![create_joke("joke-1")]);
        let request = with_id("joke-1").with_data(json!({
            "jokeId": "ignored",
            "question": "New question",
            "answer": "New answer",
        }));

        let response = update(&infrastructure, request).await.unwrap();

        assert_eq!(response, no_content());
        let joke_id = JokeId::new("joke-1").unwrap();
        let stored = infrastructure.joke_repo.find_by_joke_id(&joke_id).await.unwrap();
        assert_eq!(
            stored,
            Some(Joke::new(joke_id, "New question", "New answer"))
        );
        assert_eq!(infrastructure.joke_repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_creates_unknown_jokes() {
        let infrastructure = infrastructure_with(vec![]);
        let request = with_id("fresh").with_data(json!({ "question": "Q", "answer": "A" }));

        let response = update(&infrastructure, request).await.unwrap();

        assert_eq!(response.status, 204);
        assert_eq!(response.data, None);
        assert_eq!(infrastructure.joke_repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_rejects_invalid_jokes() {
        let infrastructure = infrastructure_with(vec![create_joke("joke-1")]);
        let recorder = EventRecorder::new(&infrastructure.joke_repo.events().joke_added);
        let request = with_id("joke-1").with_data(json!({ "question": 42, "answer": "A" }));

        let response = update(&infrastructure, request).await.unwrap();

        assert_eq!(response, bad_request("Joke data is invalid. No joke!"));
        assert!(recorder.data().is_empty());
    }

    #[tokio::test]
    async fn update_with_an_empty_joke_id_is_a_bad_request() {
        let infrastructure = infrastructure_with(vec![]);
        let request = with_id("").with_data(json!({ "question": "Q", "answer": "A" }));

        let response = update(&infrastructure, request).await.unwrap();

        assert_eq!(response, bad_request("JokeId cannot be empty"));
    }

    #[tokio::test]
    async fn destroy_removes_the_joke() {
        let infrastructure = infrastructure_with(vec![create_joke("joke-1"), create_joke("joke-2")]);
        let recorder = EventRecorder::new(&infrastructure.joke_repo.events().joke_removed);

        let response = destroy(&infrastructure, with_id("joke-1")).await.unwrap();

        assert_eq!(response, no_content());
        assert_eq!(
            infrastructure.joke_repo.find_all().await.unwrap(),
            vec![create_joke("joke-2")]
        );
        assert_eq!(
            recorder.data(),
            vec![JokeRemoved {
                joke_id: JokeId::new("joke-1").unwrap()
            }]
        );
    }

    #[tokio::test]
    async fn destroy_unknown_joke_still_succeeds() {
        let infrastructure = infrastructure_with(vec![]);

        let response = destroy(&infrastructure, with_id("nope")).await.unwrap();

        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn storage_failures_surface_as_errors() {
        let backend = std::sync::Arc::new(crate::store::mem_backend::MemBackend::new());
        backend.set_simulated_error(Some("disk on fire"));
        let store = crate::store::ItemStore::with_backend(backend);
        let infrastructure = Infrastructure::create_null().with_joke_repo(JokeRepo::new(store));

        let err = index(&infrastructure, Request::new()).await.unwrap_err();

        assert_eq!(err.to_string(), "Store error: disk on fire");
    }
}
