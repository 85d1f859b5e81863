// src/modules/content/resources/tech_stack.rs
//
// TechStack: tools grouped by category; `preferred` is a display flag only.

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
    #[sea_orm(table_name = "tech_stacks")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub category: String,

        #[sea_orm(column_type = "Text")]
        pub name: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub icon: Option<String>,

        pub preferred: bool,

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
pub struct TechStackView {
    pub id: Uuid,
    pub category: String,
    pub name: String,
    pub icon: Option<String>,
    pub preferred: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTechStackDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    pub icon: Option<String>,

    #[serde(default)]
    pub preferred: bool,

    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTechStackDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    pub icon: Option<String>,

    pub preferred: Option<bool>,

    pub order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateTechStackData {
    pub category: String,
    pub name: String,
    pub icon: Option<String>,
    pub preferred: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTechStackData {
    pub category: Option<String>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub preferred: Option<bool>,
    pub order: Option<i32>,
}

impl From<CreateTechStackDto> for CreateTechStackData {
    fn from(dto: CreateTechStackDto) -> Self {
        Self {
            category: dto.category,
            name: dto.name,
            icon: dto.icon,
            preferred: dto.preferred,
            order: dto.order,
        }
    }
}

impl From<UpdateTechStackDto> for UpdateTechStackData {
    fn from(dto: UpdateTechStackDto) -> Self {
        Self {
            category: dto.category,
            name: dto.name,
            icon: dto.icon,
            preferred: dto.preferred,
            order: dto.order,
        }
    }
}

pub struct TechStackMapper;

impl ContentMapper for TechStackMapper {
    type Entity = entity::Entity;
    type ActiveModel = entity::ActiveModel;
    type View = TechStackView;
    type CreateData = CreateTechStackData;
    type UpdateData = UpdateTechStackData;

    fn ordered(select: Select<entity::Entity>) -> Select<entity::Entity> {
        select.order_by_asc(entity::Column::Order)
    }

    fn insert_model(data: CreateTechStackData) -> entity::ActiveModel {
        let now = Utc::now().fixed_offset();
        entity::ActiveModel {
            id: Set(Uuid::new_v4()),
            category: Set(data.category),
            name: Set(data.name),
            icon: Set(data.icon),
            preferred: Set(data.preferred),
            order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_update(model: &mut entity::ActiveModel, data: UpdateTechStackData) {
        if let Some(category) = data.category {
            model.category = Set(category);
        }
        if let Some(name) = data.name {
            model.name = Set(name);
        }
        if let Some(icon) = data.icon {
            model.icon = Set(Some(icon));
        }
        if let Some(preferred) = data.preferred {
            model.preferred = Set(preferred);
        }
        if let Some(order) = data.order {
            model.order = Set(order);
        }
        model.updated_at = Set(Utc::now().fixed_offset());
    }

    fn to_view(model: entity::Model) -> TechStackView {
        TechStackView {
            id: model.id,
            category: model.category,
            name: model.name,
            icon: model.icon,
            preferred: model.preferred,
            order: model.order,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

pub struct TechStackApi;

impl ResourceApi for TechStackApi {
    const RESOURCE: &'static str = "tech_stack";
    const PATH: &'static str = "/api/tech-stack";

    type View = TechStackView;
    type CreateDto = CreateTechStackDto;
    type UpdateDto = UpdateTechStackDto;
    type CreateData = CreateTechStackData;
    type UpdateData = UpdateTechStackData;
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryTrait};

    #[test]
    fn list_query_orders_by_rank_ascending() {
        let sql = TechStackMapper::ordered(entity::Entity::find())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(
            sql.ends_with(r#"ORDER BY "tech_stacks"."order" ASC"#),
            "unexpected query: {sql}"
        );
    }

    #[test]
    fn preferred_defaults_to_false() {
        let dto: CreateTechStackDto =
            serde_json::from_str(r#"{"category": "backend", "name": "Rust"}"#).unwrap();

        assert!(!dto.preferred);
    }
}
