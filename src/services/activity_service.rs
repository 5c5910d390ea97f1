use crate::error::AppError;
use crate::models::{ActivityFeed, ActivityQuery};
use crate::services::api::ApiClient;

pub async fn load_activities(api: &ApiClient, query: &ActivityQuery) -> Result<ActivityFeed, AppError> {
    let path = format!("/api/admin/activities{}", query.to_query_string());
    let feed: ActivityFeed = api.get(&path).await?;
    log::debug!(
        "Loaded {} activity item(s), {} district(s)",
        feed.items.len(),
        feed.districts.len()
    );
    Ok(feed)
}
