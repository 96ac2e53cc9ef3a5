//! # formsmith-server
//!
//! Thin HTTP endpoints around the generation pipeline and the component
//! sources:
//!
//! - `POST /api/generate` - run the pipeline for a document and target
//! - `GET /api/components` - list the renderer component files
//! - `GET /api/file?filename=...` - view-source read of one component
//!
//! The generation pipeline itself never does I/O; these handlers are the
//! asynchronous boundary around it. A failed file read degrades to a
//! "file not found" response, never a pipeline error.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use formsmith_codegen::{generate, TargetLibrary};
use formsmith_core::{FormsmithError, FormsmithResult, Settings};
use formsmith_registry::ComponentRegistry;
use formsmith_schema::FormDocument;

/// Shared state for all handlers.
#[derive(Debug)]
pub struct AppState {
    /// Runtime settings (components directory, ignore list, bind address).
    pub settings: Settings,
    /// The component registry backing generation requests.
    pub registry: ComponentRegistry,
}

impl AppState {
    /// Creates the state from settings, using the built-in registry.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            registry: ComponentRegistry::builtin(),
        }
    }
}

/// An error response: the [`FormsmithError`] status code plus a JSON body
/// of the shape `{"error": "..."}`.
struct ApiError(FormsmithError);

impl From<FormsmithError> for ApiError {
    fn from(err: FormsmithError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct FileQuery {
    filename: String,
}

#[derive(Debug, Serialize)]
struct FileResponse {
    content: String,
}

#[derive(Debug, Serialize)]
struct ComponentsResponse {
    files: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    document: FormDocument,
    target: TargetLibrary,
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    code: String,
}

/// Resolves a requested component file inside the components directory.
///
/// Rejects path traversal, applies the ignore list to the final segment,
/// and appends the `.tsx` extension the request leaves off.
fn resolve_component_path(settings: &Settings, filename: &str) -> FormsmithResult<PathBuf> {
    let requested = Path::new(filename);
    if requested
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(FormsmithError::BadRequest(format!(
            "Invalid filename: {filename}"
        )));
    }

    let stem = requested
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| FormsmithError::BadRequest(format!("Invalid filename: {filename}")))?;
    if settings.is_ignored_component(stem) {
        return Err(FormsmithError::NotFound("File not found".to_string()));
    }

    // Append rather than set_extension: a stem like `foo.v2` must map to
    // `foo.v2.tsx`, not replace the trailing segment.
    let mut path = settings.components_dir.join(requested).into_os_string();
    path.push(".tsx");
    Ok(PathBuf::from(path))
}

/// `GET /api/file?filename=...` - returns one component's source text.
async fn read_file(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FileQuery>,
) -> Result<Json<FileResponse>, ApiError> {
    let path = resolve_component_path(&state.settings, &query.filename)?;

    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Ok(Json(FileResponse { content })),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(filename = %query.filename, "component source not found");
            Err(FormsmithError::NotFound("File not found".to_string()).into())
        }
        Err(err) => Err(FormsmithError::IoError(err).into()),
    }
}

/// `GET /api/components` - lists the component files available for
/// view-source display.
async fn list_components(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ComponentsResponse>, ApiError> {
    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(&state.settings.components_dir)
        .await
        .map_err(FormsmithError::IoError)?;

    while let Some(entry) = entries.next_entry().await.map_err(FormsmithError::IoError)? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let Some(stem) = name.strip_suffix(".tsx") else {
            continue;
        };
        if !state.settings.is_ignored_component(stem) {
            files.push(name.to_string());
        }
    }

    files.sort();
    Ok(Json(ComponentsResponse { files }))
}

/// `POST /api/generate` - runs the pipeline for a document and target.
async fn generate_code(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let code = generate(&request.document, request.target, &state.registry)?;
    Ok(Json(GenerateResponse { code }))
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/file", get(read_file))
        .route("/api/components", get(list_components))
        .route("/api/generate", post(generate_code))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the server to the settings' address and serves until shutdown.
pub async fn run(settings: Settings) -> FormsmithResult<()> {
    let addr = settings.addr();
    let state = Arc::new(AppState::new(settings));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("formsmith server listening on http://{addr}/");
    axum::serve(listener, app)
        .await
        .map_err(FormsmithError::IoError)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use http::Request;
    use tower::ServiceExt;

    fn test_state(components_dir: PathBuf) -> Arc<AppState> {
        let settings = Settings {
            components_dir,
            ..Settings::default()
        };
        Arc::new(AppState::new(settings))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn temp_components_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("formsmith-server-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_resolve_component_path_rejects_traversal() {
        let settings = Settings::default();
        let err = resolve_component_path(&settings, "../secrets").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_resolve_component_path_applies_ignore_list() {
        let settings = Settings::default();
        let err = resolve_component_path(&settings, "form").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_resolve_component_path_appends_extension() {
        let settings = Settings::default();
        let path = resolve_component_path(&settings, "checkbox-form-field").unwrap();
        assert!(path.ends_with("checkbox-form-field.tsx"));
    }

    #[test]
    fn test_resolve_component_path_keeps_dotted_stems() {
        let settings = Settings::default();
        let path = resolve_component_path(&settings, "checkbox-form-field.v2").unwrap();
        assert!(path.ends_with("checkbox-form-field.v2.tsx"));
    }

    #[tokio::test]
    async fn test_generate_endpoint() {
        let app = router(test_state(PathBuf::from(".")));
        let body = serde_json::json!({
            "document": {
                "fields": [{
                    "id": "a1",
                    "fieldType": "checkbox",
                    "fieldLabel": "Checkbox",
                    "name": "agree",
                    "label": "Agree",
                    "required": true
                }]
            },
            "target": "react-hook-form"
        });

        let response = app
            .oneshot(
                Request::post("/api/generate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let code = json["code"].as_str().unwrap();
        assert!(code.contains("agree: z.boolean()"));
    }

    #[tokio::test]
    async fn test_generate_endpoint_rejects_duplicate_names() {
        let app = router(test_state(PathBuf::from(".")));
        let field = serde_json::json!({
            "id": "a1",
            "fieldType": "input",
            "fieldLabel": "Input",
            "name": "email",
            "label": "Email"
        });
        let body = serde_json::json!({
            "document": { "fields": [field, field] },
            "target": "formik"
        });

        let response = app
            .oneshot(
                Request::post("/api/generate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Duplicate"));
    }

    #[tokio::test]
    async fn test_file_endpoint_reads_component() {
        let dir = temp_components_dir("file");
        std::fs::write(dir.join("checkbox-form-field.tsx"), "export const X = 1;").unwrap();

        let app = router(test_state(dir));
        let response = app
            .oneshot(
                Request::get("/api/file?filename=checkbox-form-field")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["content"], "export const X = 1;");
    }

    #[tokio::test]
    async fn test_file_endpoint_missing_is_404() {
        let dir = temp_components_dir("missing");
        let app = router(test_state(dir));
        let response = app
            .oneshot(
                Request::get("/api/file?filename=no-such-field")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Not found: File not found");
    }

    #[tokio::test]
    async fn test_components_endpoint_filters_and_sorts() {
        let dir = temp_components_dir("list");
        std::fs::write(dir.join("switch-form-field.tsx"), "").unwrap();
        std::fs::write(dir.join("checkbox-form-field.tsx"), "").unwrap();
        std::fs::write(dir.join("form.tsx"), "").unwrap(); // ignored
        std::fs::write(dir.join("notes.md"), "").unwrap(); // not .tsx

        let app = router(test_state(dir));
        let response = app
            .oneshot(
                Request::get("/api/components")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json["files"],
            serde_json::json!(["checkbox-form-field.tsx", "switch-form-field.tsx"])
        );
    }
}
