// src/modules/content/adapter/incoming/web/resource_routes.rs
//
// The five routes every collection resource exposes, written once. Attribute
// macros cannot be generic, so registration goes through `web::scope` +
// `Route::to` instead of the `#[get(...)]` style used by the singleton
// profile routes.

use std::sync::Arc;

use actix_web::{web, HttpResponse, Scope};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::content::application::ports::incoming::crud::{CrudError, CrudUseCase};
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// Per-resource HTTP binding
// ──────────────────────────────────────────────────────────
//

/// Binds one resource's HTTP surface to the generic engine: where it is
/// mounted, what its payloads look like, and how request DTOs become
/// application data.
pub trait ResourceApi: 'static {
    /// Name used in error codes and logs ("skill" → SKILL_NOT_FOUND).
    const RESOURCE: &'static str;
    /// Mount point of the five routes.
    const PATH: &'static str;

    type View: Serialize + Clone + Send + Sync + 'static;
    type CreateDto: DeserializeOwned + Validate + 'static;
    type UpdateDto: DeserializeOwned + Validate + 'static;
    type CreateData: From<Self::CreateDto> + Send + 'static;
    type UpdateData: From<Self::UpdateDto> + Send + 'static;
}

pub type DynCrudUseCase<A> = Arc<
    dyn CrudUseCase<
        View = <A as ResourceApi>::View,
        CreateData = <A as ResourceApi>::CreateData,
        UpdateData = <A as ResourceApi>::UpdateData,
    >,
>;

pub struct ResourceState<A: ResourceApi> {
    pub crud: DynCrudUseCase<A>,
}

impl<A: ResourceApi> ResourceState<A> {
    pub fn new(crud: DynCrudUseCase<A>) -> Self {
        Self { crud }
    }
}

impl<A: ResourceApi> Clone for ResourceState<A> {
    fn clone(&self) -> Self {
        Self {
            crud: Arc::clone(&self.crud),
        }
    }
}

/// Mounts list/create/get/update/delete for one resource.
/// Reads are public; mutations go through the bearer-token extractor.
pub fn resource_scope<A: ResourceApi>(state: ResourceState<A>) -> Scope {
    web::scope(A::PATH)
        .app_data(web::Data::new(state))
        .route("", web::get().to(list::<A>))
        .route("", web::post().to(create::<A>))
        .route("/{id}", web::get().to(get_by_id::<A>))
        .route("/{id}", web::put().to(update::<A>))
        .route("/{id}", web::delete().to(remove::<A>))
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

async fn list<A: ResourceApi>(state: web::Data<ResourceState<A>>) -> HttpResponse {
    match state.crud.list().await {
        Ok(items) => ApiResponse::success(items),
        Err(err) => crud_error_response::<A>(err, "list"),
    }
}

async fn get_by_id<A: ResourceApi>(
    path: web::Path<Uuid>,
    state: web::Data<ResourceState<A>>,
) -> HttpResponse {
    let id = path.into_inner();

    match state.crud.get(id).await {
        Ok(item) => ApiResponse::success(item),
        Err(err) => crud_error_response::<A>(err, "fetch"),
    }
}

async fn create<A: ResourceApi>(
    _user: AuthenticatedUser,
    body: web::Json<A::CreateDto>,
    state: web::Data<ResourceState<A>>,
) -> HttpResponse {
    let dto = body.into_inner();

    if let Err(violations) = dto.validate() {
        return validation_error_response(&violations);
    }

    match state.crud.create(dto.into()).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => crud_error_response::<A>(err, "create"),
    }
}

async fn update<A: ResourceApi>(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<A::UpdateDto>,
    state: web::Data<ResourceState<A>>,
) -> HttpResponse {
    let id = path.into_inner();
    let dto = body.into_inner();

    if let Err(violations) = dto.validate() {
        return validation_error_response(&violations);
    }

    match state.crud.update(id, dto.into()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(err) => crud_error_response::<A>(err, "update"),
    }
}

async fn remove<A: ResourceApi>(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    state: web::Data<ResourceState<A>>,
) -> HttpResponse {
    let id = path.into_inner();

    match state.crud.remove(id).await {
        Ok(removed) => ApiResponse::success(removed),
        Err(err) => crud_error_response::<A>(err, "delete"),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error mapping
// ──────────────────────────────────────────────────────────
//

fn crud_error_response<A: ResourceApi>(err: CrudError, operation: &str) -> HttpResponse {
    match err {
        CrudError::NotFound { .. } => {
            let code = format!("{}_NOT_FOUND", A::RESOURCE.to_ascii_uppercase());
            ApiResponse::not_found(&code, &err.to_string())
        }
        CrudError::Repository(msg) => {
            error!("Failed to {} {}: {}", operation, A::RESOURCE, msg);
            ApiResponse::internal_error()
        }
    }
}

/// Renders validator output as one stable "field: detail" list so callers can
/// see every offending field at once.
pub fn validation_error_response(violations: &ValidationErrors) -> HttpResponse {
    let mut parts: Vec<String> = violations
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let detail = errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{field}: {detail}")
        })
        .collect();
    parts.sort();

    ApiResponse::bad_request("VALIDATION_ERROR", &parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::modules::content::resources::skill::{
        CreateSkillData, SkillApi, SkillLevel, SkillView, UpdateSkillData,
    };
    use crate::tests::support::auth_helper::test_helpers::{
        bearer_token, test_token_provider,
    };

    struct MockSkillCrud {
        result: Result<SkillView, CrudError>,
        calls: AtomicUsize,
    }

    impl MockSkillCrud {
        fn success(view: SkillView) -> Arc<Self> {
            Arc::new(Self {
                result: Ok(view),
                calls: AtomicUsize::new(0),
            })
        }

        fn error(err: CrudError) -> Arc<Self> {
            Arc::new(Self {
                result: Err(err),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CrudUseCase for MockSkillCrud {
        type View = SkillView;
        type CreateData = CreateSkillData;
        type UpdateData = UpdateSkillData;

        async fn create(&self, _data: CreateSkillData) -> Result<SkillView, CrudError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        async fn list(&self) -> Result<Vec<SkillView>, CrudError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone().map(|view| vec![view])
        }

        async fn get(&self, _id: Uuid) -> Result<SkillView, CrudError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        async fn update(&self, _id: Uuid, _data: UpdateSkillData) -> Result<SkillView, CrudError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        async fn remove(&self, _id: Uuid) -> Result<SkillView, CrudError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn sample_view() -> SkillView {
        SkillView {
            id: Uuid::new_v4(),
            category: "frontend".to_string(),
            name: "React".to_string(),
            level: SkillLevel::Expert,
            icon: Some("⚛️".to_string()),
            order: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn call(
        crud: Arc<MockSkillCrud>,
        req: test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let state = ResourceState::<SkillApi>::new(crud);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(resource_scope::<SkillApi>(state)),
        )
        .await;

        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn list_is_public_and_wraps_items() {
        let crud = MockSkillCrud::success(sample_view());
        let resp = call(Arc::clone(&crud), test::TestRequest::get().uri("/api/skills")).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["name"], "React");
        assert_eq!(body["data"][0]["level"], "expert");
    }

    #[actix_web::test]
    async fn create_without_token_is_unauthorized_and_never_hits_use_case() {
        let crud = MockSkillCrud::success(sample_view());
        let resp = call(
            Arc::clone(&crud),
            test::TestRequest::post()
                .uri("/api/skills")
                .set_json(json!({"category": "frontend", "name": "React"})),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(crud.calls(), 0);
    }

    #[actix_web::test]
    async fn create_with_garbage_token_is_unauthorized() {
        let crud = MockSkillCrud::success(sample_view());
        let resp = call(
            Arc::clone(&crud),
            test::TestRequest::post()
                .uri("/api/skills")
                .insert_header(("Authorization", "Bearer not-a-jwt"))
                .set_json(json!({"category": "frontend", "name": "React"})),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(crud.calls(), 0);
    }

    #[actix_web::test]
    async fn create_with_token_returns_created_entity() {
        let view = sample_view();
        let crud = MockSkillCrud::success(view.clone());
        let resp = call(
            Arc::clone(&crud),
            test::TestRequest::post()
                .uri("/api/skills")
                .insert_header(("Authorization", bearer_token()))
                .set_json(json!({
                    "category": "frontend",
                    "name": "React",
                    "level": "expert",
                    "icon": "⚛️",
                    "order": 1
                })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], view.id.to_string());
        assert_eq!(crud.calls(), 1);
    }

    #[actix_web::test]
    async fn create_with_empty_required_field_names_it() {
        let crud = MockSkillCrud::success(sample_view());
        let resp = call(
            Arc::clone(&crud),
            test::TestRequest::post()
                .uri("/api/skills")
                .insert_header(("Authorization", bearer_token()))
                .set_json(json!({"category": "", "name": "React"})),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("category"));
        assert_eq!(crud.calls(), 0);
    }

    #[actix_web::test]
    async fn create_with_unknown_field_is_rejected_by_deserialization() {
        let crud = MockSkillCrud::success(sample_view());
        let resp = call(
            Arc::clone(&crud),
            test::TestRequest::post()
                .uri("/api/skills")
                .insert_header(("Authorization", bearer_token()))
                .set_json(json!({"category": "frontend", "name": "React", "rank": 3})),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(crud.calls(), 0);
    }

    #[actix_web::test]
    async fn get_unknown_id_is_resource_specific_not_found() {
        let id = Uuid::new_v4();
        let crud = MockSkillCrud::error(CrudError::NotFound {
            resource: "skill",
            id,
        });
        let resp = call(
            Arc::clone(&crud),
            test::TestRequest::get().uri(&format!("/api/skills/{id}")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SKILL_NOT_FOUND");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains(&id.to_string()));
    }

    #[actix_web::test]
    async fn delete_returns_prior_representation() {
        let view = sample_view();
        let crud = MockSkillCrud::success(view.clone());
        let resp = call(
            Arc::clone(&crud),
            test::TestRequest::delete()
                .uri(&format!("/api/skills/{}", view.id))
                .insert_header(("Authorization", bearer_token())),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "React");
    }

    #[actix_web::test]
    async fn repository_error_maps_to_internal_error() {
        let crud = MockSkillCrud::error(CrudError::Repository("db down".to_string()));
        let resp = call(Arc::clone(&crud), test::TestRequest::get().uri("/api/skills")).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
