use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_portfolio_contracts::PortfolioFeatureService;
use folio_models::portfolio::SkillCategory;

use crate::{
    errors::error,
    models::portfolio::{
        ApiProject, ApiProjectsQuery, ApiTimelineQuery, PathProjectId, PathSkillCategory,
    },
};

pub fn router(service: Arc<impl PortfolioFeatureService>) -> Router<()> {
    Router::new()
        .route("/portfolio/profile", routing::get(get_profile))
        .route("/portfolio/timeline", routing::get(list_timeline))
        .route("/portfolio/projects", routing::get(list_projects))
        .route("/portfolio/projects/:project_id", routing::get(get_project))
        .route("/portfolio/skills", routing::get(list_skill_categories))
        .route("/portfolio/skills/:category", routing::get(get_skill_category))
        .with_state(service)
}

async fn get_profile(service: State<Arc<impl PortfolioFeatureService>>) -> Response {
    Json(service.get_profile().await).into_response()
}

async fn list_timeline(
    service: State<Arc<impl PortfolioFeatureService>>,
    Query(ApiTimelineQuery { tab }): Query<ApiTimelineQuery>,
) -> Response {
    Json(service.list_timeline(tab).await).into_response()
}

async fn list_projects(
    service: State<Arc<impl PortfolioFeatureService>>,
    Query(ApiProjectsQuery { category }): Query<ApiProjectsQuery>,
) -> Response {
    let projects = service
        .list_projects(category)
        .await
        .into_iter()
        .map(ApiProject::from)
        .collect::<Vec<_>>();
    Json(projects).into_response()
}

async fn get_project(
    service: State<Arc<impl PortfolioFeatureService>>,
    Path(PathProjectId { project_id }): Path<PathProjectId>,
) -> Response {
    match service.get_project(project_id).await {
        Some(project) => Json(ApiProject::from(project)).into_response(),
        None => error(StatusCode::NOT_FOUND, "Project not found"),
    }
}

async fn list_skill_categories(service: State<Arc<impl PortfolioFeatureService>>) -> Response {
    Json(service.list_skill_categories().await).into_response()
}

async fn get_skill_category(
    service: State<Arc<impl PortfolioFeatureService>>,
    Path(PathSkillCategory { category }): Path<PathSkillCategory>,
) -> Response {
    let Ok(category) = category.parse::<SkillCategory>() else {
        return error(StatusCode::NOT_FOUND, "Skill category not found");
    };
    match service.get_skill_category(category).await {
        Some(group) => Json(group).into_response(),
        None => error(StatusCode::NOT_FOUND, "Skill category not found"),
    }
}
