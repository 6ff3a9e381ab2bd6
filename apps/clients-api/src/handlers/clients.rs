//! Client resource handlers.

use actix_web::{HttpResponse, http::header, web};
use serde::Deserialize;

use clients_core::DomainError;
use clients_core::domain::{DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD, Direction, PageRequest, Sort};
use clients_shared::ClientDto;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Paging parameters accepted by every listing route.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<u64>,
    #[serde(alias = "linesPerPage")]
    pub size: Option<u64>,
    #[serde(alias = "orderBy")]
    pub sort_by: Option<String>,
    pub direction: Option<String>,
}

impl PageParams {
    /// Apply defaults and validate.
    pub fn into_page_request(self) -> Result<PageRequest, DomainError> {
        let field = match self.sort_by {
            Some(field) => field.parse()?,
            None => DEFAULT_SORT_FIELD,
        };
        let direction = match self.direction {
            Some(direction) => direction.parse()?,
            None => Direction::default(),
        };

        PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            Sort::new(field, direction),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct IncomeParams {
    pub income: f64,
}

#[derive(Debug, Deserialize)]
pub struct CpfParams {
    #[serde(default)]
    pub cpf: String,
}

/// GET /clients/
pub async fn find_all(
    state: web::Data<AppState>,
    params: web::Query<PageParams>,
) -> AppResult<HttpResponse> {
    let request = params.into_inner().into_page_request()?;
    let page = state.clients.find_all_paged(request).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// GET /clients/id/{id}
pub async fn find_by_id(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let client = state.clients.find_by_id(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(client))
}

/// GET /clients/income/?income=
pub async fn find_by_income(
    state: web::Data<AppState>,
    params: web::Query<PageParams>,
    filter: web::Query<IncomeParams>,
) -> AppResult<HttpResponse> {
    let request = params.into_inner().into_page_request()?;
    let page = state.clients.find_by_income(request, filter.income).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// GET /clients/incomeGreaterThan/?income=
pub async fn find_by_income_greater_than(
    state: web::Data<AppState>,
    params: web::Query<PageParams>,
    filter: web::Query<IncomeParams>,
) -> AppResult<HttpResponse> {
    let request = params.into_inner().into_page_request()?;
    let page = state
        .clients
        .find_by_income_greater_than(request, filter.income)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// GET /clients/cpf/?cpf=
pub async fn find_by_cpf_like(
    state: web::Data<AppState>,
    params: web::Query<PageParams>,
    filter: web::Query<CpfParams>,
) -> AppResult<HttpResponse> {
    let request = params.into_inner().into_page_request()?;
    let page = state
        .clients
        .find_by_cpf_like(request, filter.into_inner().cpf)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// POST /clients/
pub async fn insert(
    state: web::Data<AppState>,
    body: web::Json<ClientDto>,
) -> AppResult<HttpResponse> {
    let created = state.clients.insert(body.into_inner()).await?;

    let mut response = HttpResponse::Created();
    if let Some(id) = created.id {
        response.insert_header((header::LOCATION, format!("/clients/id/{id}")));
    }

    Ok(response.json(created))
}

/// PUT /clients/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<ClientDto>,
) -> AppResult<HttpResponse> {
    let updated = state
        .clients
        .update(id.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /clients/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<i64>) -> AppResult<HttpResponse> {
    state.clients.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
