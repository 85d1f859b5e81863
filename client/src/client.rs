//! The HTTP wrapper every typed call goes through: one place that joins the
//! base URL, attaches the bearer token, and unwraps the response envelope.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ClientError;
use crate::model::{
    AuthResponse, AuthUser, Envelope, Experience, ExperienceInput, LoginCredentials, Profile,
    ProfileInput, Project, ProjectInput, Reference, ReferenceInput, Skill, SkillInput, TechStack,
    TechStackInput,
};

//
// ──────────────────────────────────────────────────────────
// Session
// ──────────────────────────────────────────────────────────
//

/// Proof of a successful login. Mutating calls borrow it; there is no ambient
/// "current token" state anywhere in the client.
#[derive(Debug, Clone)]
pub struct AdminSession {
    token: String,
    pub user: AuthUser,
}

impl AdminSession {
    pub fn token(&self) -> &str {
        &self.token
    }
}

//
// ──────────────────────────────────────────────────────────
// Client
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        let envelope: Envelope<T> = response.json().await?;

        if !status.is_success() || !envelope.success {
            let (code, message) = envelope
                .error
                .map(|e| (e.code, e.message))
                .unwrap_or_else(|| ("UNKNOWN".to_string(), "unexpected response".to_string()));

            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        envelope.data.ok_or(ClientError::MissingData)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::unwrap_envelope(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        session: &AdminSession,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(session.token())
            .json(body)
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        session: &AdminSession,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .put(self.url(path))
            .bearer_auth(session.token())
            .json(body)
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    async fn delete_json<T: DeserializeOwned>(
        &self,
        session: &AdminSession,
        path: &str,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(session.token())
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    //
    // ── Auth ────────────────────────────────────────────────
    //

    pub async fn login(&self, email: &str, password: &str) -> Result<AdminSession, ClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&LoginCredentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let auth: AuthResponse = Self::unwrap_envelope(response).await?;

        Ok(AdminSession {
            token: auth.access_token,
            user: auth.user,
        })
    }

    //
    // ── Profile (singleton) ─────────────────────────────────
    //

    pub async fn get_profile(&self) -> Result<Profile, ClientError> {
        self.get_json("/api/profile").await
    }

    pub async fn update_profile(
        &self,
        session: &AdminSession,
        profile: &ProfileInput,
    ) -> Result<Profile, ClientError> {
        self.put_json(session, "/api/profile", profile).await
    }

    //
    // ── Experience ──────────────────────────────────────────
    //

    pub async fn list_experiences(&self) -> Result<Vec<Experience>, ClientError> {
        self.get_json("/api/experience").await
    }

    pub async fn get_experience(&self, id: Uuid) -> Result<Experience, ClientError> {
        self.get_json(&format!("/api/experience/{id}")).await
    }

    pub async fn create_experience(
        &self,
        session: &AdminSession,
        experience: &ExperienceInput,
    ) -> Result<Experience, ClientError> {
        self.post_json(session, "/api/experience", experience).await
    }

    pub async fn update_experience(
        &self,
        session: &AdminSession,
        id: Uuid,
        experience: &ExperienceInput,
    ) -> Result<Experience, ClientError> {
        self.put_json(session, &format!("/api/experience/{id}"), experience)
            .await
    }

    pub async fn delete_experience(
        &self,
        session: &AdminSession,
        id: Uuid,
    ) -> Result<Experience, ClientError> {
        self.delete_json(session, &format!("/api/experience/{id}"))
            .await
    }

    //
    // ── Projects ────────────────────────────────────────────
    //

    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.get_json("/api/projects").await
    }

    pub async fn get_project(&self, id: Uuid) -> Result<Project, ClientError> {
        self.get_json(&format!("/api/projects/{id}")).await
    }

    pub async fn create_project(
        &self,
        session: &AdminSession,
        project: &ProjectInput,
    ) -> Result<Project, ClientError> {
        self.post_json(session, "/api/projects", project).await
    }

    pub async fn update_project(
        &self,
        session: &AdminSession,
        id: Uuid,
        project: &ProjectInput,
    ) -> Result<Project, ClientError> {
        self.put_json(session, &format!("/api/projects/{id}"), project)
            .await
    }

    pub async fn delete_project(
        &self,
        session: &AdminSession,
        id: Uuid,
    ) -> Result<Project, ClientError> {
        self.delete_json(session, &format!("/api/projects/{id}"))
            .await
    }

    //
    // ── Skills ──────────────────────────────────────────────
    //

    pub async fn list_skills(&self) -> Result<Vec<Skill>, ClientError> {
        self.get_json("/api/skills").await
    }

    pub async fn create_skill(
        &self,
        session: &AdminSession,
        skill: &SkillInput,
    ) -> Result<Skill, ClientError> {
        self.post_json(session, "/api/skills", skill).await
    }

    pub async fn update_skill(
        &self,
        session: &AdminSession,
        id: Uuid,
        skill: &SkillInput,
    ) -> Result<Skill, ClientError> {
        self.put_json(session, &format!("/api/skills/{id}"), skill)
            .await
    }

    pub async fn delete_skill(
        &self,
        session: &AdminSession,
        id: Uuid,
    ) -> Result<Skill, ClientError> {
        self.delete_json(session, &format!("/api/skills/{id}")).await
    }

    //
    // ── Tech stack ──────────────────────────────────────────
    //

    pub async fn list_tech_stack(&self) -> Result<Vec<TechStack>, ClientError> {
        self.get_json("/api/tech-stack").await
    }

    pub async fn create_tech_stack(
        &self,
        session: &AdminSession,
        entry: &TechStackInput,
    ) -> Result<TechStack, ClientError> {
        self.post_json(session, "/api/tech-stack", entry).await
    }

    pub async fn update_tech_stack(
        &self,
        session: &AdminSession,
        id: Uuid,
        entry: &TechStackInput,
    ) -> Result<TechStack, ClientError> {
        self.put_json(session, &format!("/api/tech-stack/{id}"), entry)
            .await
    }

    pub async fn delete_tech_stack(
        &self,
        session: &AdminSession,
        id: Uuid,
    ) -> Result<TechStack, ClientError> {
        self.delete_json(session, &format!("/api/tech-stack/{id}"))
            .await
    }

    //
    // ── References ──────────────────────────────────────────
    //

    pub async fn list_references(&self) -> Result<Vec<Reference>, ClientError> {
        self.get_json("/api/references").await
    }

    pub async fn create_reference(
        &self,
        session: &AdminSession,
        reference: &ReferenceInput,
    ) -> Result<Reference, ClientError> {
        self.post_json(session, "/api/references", reference).await
    }

    pub async fn update_reference(
        &self,
        session: &AdminSession,
        id: Uuid,
        reference: &ReferenceInput,
    ) -> Result<Reference, ClientError> {
        self.put_json(session, &format!("/api/references/{id}"), reference)
            .await
    }

    pub async fn delete_reference(
        &self,
        session: &AdminSession,
        id: Uuid,
    ) -> Result<Reference, ClientError> {
        self.delete_json(session, &format!("/api/references/{id}"))
            .await
    }
}
