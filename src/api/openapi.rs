use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

// Auth
use crate::modules::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo,
};

// Profile
use crate::modules::profile::adapter::incoming::web::routes::{
    CreateProfileRequest, UpdateProfileRequest,
};
use crate::modules::profile::application::ports::outgoing::profile_repository::ProfileView;

// Content resources (schemas only; the CRUD routes are registered dynamically
// through the generic resource scope and are not annotated)
use crate::modules::content::resources::experience::{
    CreateExperienceDto, ExperienceView, UpdateExperienceDto,
};
use crate::modules::content::resources::project::{
    CreateProjectDto, ProjectView, UpdateProjectDto,
};
use crate::modules::content::resources::reference::{
    CreateReferenceDto, ReferenceView, UpdateReferenceDto,
};
use crate::modules::content::resources::skill::{
    CreateSkillDto, SkillLevel, SkillView, UpdateSkillDto,
};
use crate::modules::content::resources::tech_stack::{
    CreateTechStackDto, TechStackView, UpdateTechStackDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CV Platform API",
        version = "1.0.0",
        description = "API for managing CV content with CRUD operations",
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::login_user::login_user_handler,

        // Profile endpoints
        crate::modules::profile::adapter::incoming::web::routes::get_profile::get_profile_handler,

        // Content endpoints (uniform per resource, mounted by the generic
        // resource scope; not annotated individually)
        // GET    /api/{experience|projects|skills|tech-stack|references}
        // GET    /api/{...}/{id}
        // POST   /api/{...}
        // PUT    /api/{...}/{id}
        // DELETE /api/{...}/{id}
    ),
    components(schemas(
        ErrorResponse,
        ErrorDetail,
        LoginRequestDto,
        LoginResponse,
        LoginUserInfo,
        ProfileView,
        CreateProfileRequest,
        UpdateProfileRequest,
        ExperienceView,
        CreateExperienceDto,
        UpdateExperienceDto,
        ProjectView,
        CreateProjectDto,
        UpdateProjectDto,
        SkillView,
        SkillLevel,
        CreateSkillDto,
        UpdateSkillDto,
        TechStackView,
        CreateTechStackDto,
        UpdateTechStackDto,
        ReferenceView,
        CreateReferenceDto,
        UpdateReferenceDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "profile", description = "Profile management"),
        (name = "experience", description = "Work experience management"),
        (name = "projects", description = "Projects portfolio management"),
        (name = "skills", description = "Skills management"),
        (name = "tech-stack", description = "Technology stack management"),
        (name = "references", description = "Professional references management"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
