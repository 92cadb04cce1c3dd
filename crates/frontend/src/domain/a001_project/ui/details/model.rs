use crate::shared::api_utils::{collection_url, error_message, record_url};
use crate::system::auth::ApiCredentials;
use contracts::domain::a001_project::{Project, ProjectPayload, ProjectSlug};
use contracts::domain::common::EntityRoot;
use contracts::shared::api_response::ApiResponse;
use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

/// Load all projects
pub async fn fetch_projects(credentials: &ApiCredentials) -> Result<Vec<Project>, String> {
    let response = Request::get(&collection_url::<Project>())
        .header("Authorization", &credentials.authorization())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to fetch projects. Please try again.").await);
    }

    let body = parse::<Vec<Project>>(response).await?;
    Ok(body.data.unwrap_or_default())
}

/// Load one project by its slug
pub async fn fetch_by_slug(
    credentials: &ApiCredentials,
    slug: &ProjectSlug,
) -> Result<Project, String> {
    let response = Request::get(&record_url::<Project>(slug))
        .header("Authorization", &credentials.authorization())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Err(format!("{} '{}' not found", Project::element_name(), slug));
    }
    if !response.ok() {
        return Err(error_message(response, "Failed to fetch project").await);
    }

    parse::<Project>(response)
        .await?
        .data
        .ok_or_else(|| format!("{} '{}' not found", Project::element_name(), slug))
}

/// Create a project: multipart with the JSON payload and the picked screenshots
pub async fn create_project(
    credentials: &ApiCredentials,
    payload: &ProjectPayload,
    screenshots: &[File],
) -> Result<(), String> {
    let body = multipart_body(payload, screenshots)?;
    let response = Request::post(&collection_url::<Project>())
        .header("Authorization", &credentials.authorization())
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to add new project").await);
    }
    Ok(())
}

/// Update the project stored under `slug`
pub async fn update_project(
    credentials: &ApiCredentials,
    slug: &ProjectSlug,
    payload: &ProjectPayload,
    screenshots: &[File],
) -> Result<(), String> {
    let body = multipart_body(payload, screenshots)?;
    let response = Request::put(&record_url::<Project>(slug))
        .header("Authorization", &credentials.authorization())
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to update project").await);
    }
    Ok(())
}

pub async fn delete_project(credentials: &ApiCredentials, slug: &ProjectSlug) -> Result<(), String> {
    let response = Request::delete(&record_url::<Project>(slug))
        .header("Authorization", &credentials.authorization())
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to delete project. Please try again.").await);
    }
    Ok(())
}

/// `data` part carries the JSON payload, one `screenshots` part per file.
/// The browser sets the multipart boundary header itself.
fn multipart_body(payload: &ProjectPayload, screenshots: &[File]) -> Result<FormData, String> {
    let json = payload
        .to_json_string()
        .map_err(|e| format!("Failed to serialize project: {}", e))?;

    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_str("data", &json)
        .map_err(|e| format!("{e:?}"))?;
    for file in screenshots {
        form.append_with_blob_and_filename("screenshots", file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(form)
}

async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, String> {
    response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
