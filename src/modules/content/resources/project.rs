// src/modules/content/resources/project.rs
//
// Project: portfolio work. Featured entries surface first, then manual rank
// descending. Category stays a free-form string (web/mobile/desktop/other by
// convention).

use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Select, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::content::adapter::incoming::web::resource_routes::ResourceApi;
use crate::modules::content::adapter::outgoing::sea_orm_store::ContentMapper;

pub mod entity {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "projects")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub title: String,

        #[sea_orm(column_type = "Text")]
        pub description: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub long_desc: Option<String>,

        #[sea_orm(column_type = "JsonBinary")]
        pub images: Vec<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub demo_url: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub repo_url: Option<String>,

        #[sea_orm(column_type = "JsonBinary")]
        pub technologies: Vec<String>,

        #[sea_orm(column_type = "JsonBinary")]
        pub highlights: Vec<String>,

        #[sea_orm(column_type = "Text")]
        pub category: String,

        pub featured: bool,

        pub order: i32,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_desc: Option<String>,
    pub images: Vec<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub technologies: Vec<String>,
    pub highlights: Vec<String>,
    pub category: String,
    pub featured: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_category() -> String {
    "web".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProjectDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,

    pub long_desc: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    pub demo_url: Option<String>,

    pub repo_url: Option<String>,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub highlights: Vec<String>,

    #[serde(default = "default_category")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProjectDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,

    pub long_desc: Option<String>,

    pub images: Option<Vec<String>>,

    pub demo_url: Option<String>,

    pub repo_url: Option<String>,

    pub technologies: Option<Vec<String>>,

    pub highlights: Option<Vec<String>>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: Option<String>,

    pub featured: Option<bool>,

    pub order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub long_desc: Option<String>,
    pub images: Vec<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub technologies: Vec<String>,
    pub highlights: Vec<String>,
    pub category: String,
    pub featured: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_desc: Option<String>,
    pub images: Option<Vec<String>>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub highlights: Option<Vec<String>>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
}

impl From<CreateProjectDto> for CreateProjectData {
    fn from(dto: CreateProjectDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            long_desc: dto.long_desc,
            images: dto.images,
            demo_url: dto.demo_url,
            repo_url: dto.repo_url,
            technologies: dto.technologies,
            highlights: dto.highlights,
            category: dto.category,
            featured: dto.featured,
            order: dto.order,
        }
    }
}

impl From<UpdateProjectDto> for UpdateProjectData {
    fn from(dto: UpdateProjectDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            long_desc: dto.long_desc,
            images: dto.images,
            demo_url: dto.demo_url,
            repo_url: dto.repo_url,
            technologies: dto.technologies,
            highlights: dto.highlights,
            category: dto.category,
            featured: dto.featured,
            order: dto.order,
        }
    }
}

pub struct ProjectMapper;

impl ContentMapper for ProjectMapper {
    type Entity = entity::Entity;
    type ActiveModel = entity::ActiveModel;
    type View = ProjectView;
    type CreateData = CreateProjectData;
    type UpdateData = UpdateProjectData;

    fn ordered(select: Select<entity::Entity>) -> Select<entity::Entity> {
        select
            .order_by_desc(entity::Column::Featured)
            .order_by_desc(entity::Column::Order)
    }

    fn insert_model(data: CreateProjectData) -> entity::ActiveModel {
        let now = Utc::now().fixed_offset();
        entity::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            long_desc: Set(data.long_desc),
            images: Set(data.images),
            demo_url: Set(data.demo_url),
            repo_url: Set(data.repo_url),
            technologies: Set(data.technologies),
            highlights: Set(data.highlights),
            category: Set(data.category),
            featured: Set(data.featured),
            order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_update(model: &mut entity::ActiveModel, data: UpdateProjectData) {
        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(description) = data.description {
            model.description = Set(description);
        }
        if let Some(long_desc) = data.long_desc {
            model.long_desc = Set(Some(long_desc));
        }
        if let Some(images) = data.images {
            model.images = Set(images);
        }
        if let Some(demo_url) = data.demo_url {
            model.demo_url = Set(Some(demo_url));
        }
        if let Some(repo_url) = data.repo_url {
            model.repo_url = Set(Some(repo_url));
        }
        if let Some(technologies) = data.technologies {
            model.technologies = Set(technologies);
        }
        if let Some(highlights) = data.highlights {
            model.highlights = Set(highlights);
        }
        if let Some(category) = data.category {
            model.category = Set(category);
        }
        if let Some(featured) = data.featured {
            model.featured = Set(featured);
        }
        if let Some(order) = data.order {
            model.order = Set(order);
        }
        model.updated_at = Set(Utc::now().fixed_offset());
    }

    fn to_view(model: entity::Model) -> ProjectView {
        ProjectView {
            id: model.id,
            title: model.title,
            description: model.description,
            long_desc: model.long_desc,
            images: model.images,
            demo_url: model.demo_url,
            repo_url: model.repo_url,
            technologies: model.technologies,
            highlights: model.highlights,
            category: model.category,
            featured: model.featured,
            order: model.order,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

pub struct ProjectApi;

impl ResourceApi for ProjectApi {
    const RESOURCE: &'static str = "project";
    const PATH: &'static str = "/api/projects";

    type View = ProjectView;
    type CreateDto = CreateProjectDto;
    type UpdateDto = UpdateProjectDto;
    type CreateData = CreateProjectData;
    type UpdateData = UpdateProjectData;
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryTrait};

    #[test]
    fn list_query_puts_featured_first_then_rank_descending() {
        let sql = ProjectMapper::ordered(entity::Entity::find())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(
            sql.ends_with(r#"ORDER BY "projects"."featured" DESC, "projects"."order" DESC"#),
            "unexpected query: {sql}"
        );
    }

    #[test]
    fn create_defaults_match_the_public_form() {
        let dto: CreateProjectDto = serde_json::from_str(
            r#"{"title": "CV Platform", "description": "Interactive portfolio"}"#,
        )
        .unwrap();

        assert_eq!(dto.category, "web");
        assert!(!dto.featured);
        assert!(dto.images.is_empty());
        assert_eq!(dto.order, 0);
    }

    #[test]
    fn image_list_preserves_insertion_order() {
        let dto: CreateProjectDto = serde_json::from_str(
            r#"{
                "title": "CV Platform",
                "description": "Interactive portfolio",
                "images": ["b.png", "a.png", "b.png"]
            }"#,
        )
        .unwrap();

        // duplicates and ordering pass through untouched
        assert_eq!(dto.images, vec!["b.png", "a.png", "b.png"]);
    }
}
