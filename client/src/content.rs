//! Aggregate fetch backing the public page: everything in parallel, joined
//! before rendering. One failed fetch fails the whole aggregate; there is no
//! per-section isolation.

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::model::{Experience, Profile, Project, Reference, Skill, TechStack};

#[derive(Debug, Clone)]
pub struct SiteContent {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub tech_stack: Vec<TechStack>,
    pub references: Vec<Reference>,
}

pub async fn fetch_site_content(client: &ApiClient) -> Result<SiteContent, ClientError> {
    let (profile, experiences, projects, skills, tech_stack, references) = futures::try_join!(
        client.get_profile(),
        client.list_experiences(),
        client.list_projects(),
        client.list_skills(),
        client.list_tech_stack(),
        client.list_references(),
    )?;

    Ok(SiteContent {
        profile,
        experiences,
        projects,
        skills,
        tech_stack,
        references,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // no server listens here: every fetch fails, and the aggregate must fail
    // with it rather than yield a partial result
    #[tokio::test]
    async fn aggregate_fails_when_any_fetch_fails() {
        let client = ApiClient::new("http://127.0.0.1:1");

        let result = fetch_site_content(&client).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }
}
